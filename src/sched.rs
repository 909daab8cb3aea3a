//! Scoped browser timers.
//!
//! `setTimeout` / `setInterval` wrapped in a handle that clears the
//! underlying browser timer when dropped. Screen-owned effects (the
//! reveal typewriter, the thunder loop) store their handle in the
//! active screen's task set; replacing or dropping the set is what
//! guarantees no timer outlives the screen that started it.
//!
//! The callback `Closure` itself is leaked via `forget`, so a tick may
//! cancel its own timer: cancellation only touches the browser-side id,
//! never the executing closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

pub struct TimerHandle {
    id: i32,
    repeating: bool,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(w) = window() {
            if self.repeating {
                w.clear_interval_with_handle(self.id);
            } else {
                w.clear_timeout_with_handle(self.id);
            }
        }
    }
}

/// Run `f` once after `ms` milliseconds. `None` if no window or the
/// browser refused the timer.
pub fn after<F>(ms: i32, f: F) -> Option<TimerHandle>
where
    F: FnMut() + 'static,
{
    let w = window()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = w
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok()?;
    cb.forget();
    Some(TimerHandle {
        id,
        repeating: false,
    })
}

/// Run `f` every `ms` milliseconds until the handle is dropped.
pub fn every<F>(ms: i32, f: F) -> Option<TimerHandle>
where
    F: FnMut() + 'static,
{
    let w = window()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = w
        .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok()?;
    cb.forget();
    Some(TimerHandle {
        id,
        repeating: true,
    })
}
