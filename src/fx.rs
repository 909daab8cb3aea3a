//! Fire-and-forget effects: speech narration and the completion
//! confetti burst. Nothing here feeds results back into the flow; a
//! missing capability (no speech synthesis, no window) degrades to a
//! silent no-op.

use web_sys::{CanvasRenderingContext2d, SpeechSynthesisUtterance, window};

// Morgue voice: slowed and lowered.
const VOICE_RATE: f32 = 0.92;
const VOICE_PITCH: f32 = 0.78;

/// Ask the browser to read `text` aloud. Any in-flight utterance is
/// cancelled first, so the latest request always wins.
pub fn speak(text: &str) {
    if let Some(synth) = window().and_then(|w| w.speech_synthesis().ok()) {
        synth.cancel();
        if let Ok(utter) = SpeechSynthesisUtterance::new_with_text(text) {
            utter.set_rate(VOICE_RATE);
            utter.set_pitch(VOICE_PITCH);
            synth.speak(&utter);
        }
    }
}

// --- Randomness ---------------------------------------------------------------

/// Small LCG for cosmetic randomness (flash rolls, confetti spread).
/// Not suitable for anything but visuals.
pub struct Lcg(u32);

impl Lcg {
    /// Seed from the performance clock so each session scatters
    /// differently.
    pub fn from_clock() -> Self {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self(((now * 997.0) as u64 as u32) | 1)
    }

    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        self.0
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

// --- Confetti ------------------------------------------------------------------

const CONFETTI_COUNT: usize = 400;
const CONFETTI_LIFE: f64 = 180.0; // frames
const CONFETTI_GRAVITY: f64 = 0.22;
const CONFETTI_COLORS: &[&str] = &["#ef4444", "#b91c1c"];

pub struct ConfettiParticle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    flutter: f64,
    flutter_v: f64,
    color: &'static str,
    life: f64,
}

/// One-shot celebration burst from just below screen center, fanning
/// upward in the lab's red palette.
pub fn confetti_burst(rng: &mut Lcg, width: f64, height: f64) -> Vec<ConfettiParticle> {
    let origin_x = width * 0.5;
    let origin_y = height * 0.6;
    let mut parts = Vec::with_capacity(CONFETTI_COUNT);
    for _ in 0..CONFETTI_COUNT {
        // 100 degree fan centered straight up
        let angle = rng.range(-140.0_f64.to_radians(), -40.0_f64.to_radians());
        let speed = rng.range(5.0, 13.0);
        let color_idx = (rng.next_f64() * CONFETTI_COLORS.len() as f64) as usize;
        parts.push(ConfettiParticle {
            x: origin_x + rng.range(-12.0, 12.0),
            y: origin_y + rng.range(-8.0, 8.0),
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: rng.range(4.0, 9.0),
            flutter: rng.range(0.0, std::f64::consts::TAU),
            flutter_v: rng.range(0.12, 0.32),
            color: CONFETTI_COLORS[color_idx.min(CONFETTI_COLORS.len() - 1)],
            life: rng.range(CONFETTI_LIFE * 0.6, CONFETTI_LIFE),
        });
    }
    parts
}

/// Advance the burst by one frame, dropping expired particles. The
/// vector empties itself; callers just stop drawing when it does.
pub fn step_confetti(parts: &mut Vec<ConfettiParticle>, height: f64) {
    for p in parts.iter_mut() {
        p.vy += CONFETTI_GRAVITY;
        p.vx *= 0.99;
        p.x += p.vx;
        p.y += p.vy;
        p.flutter += p.flutter_v;
        p.life -= 1.0;
    }
    parts.retain(|p| p.life > 0.0 && p.y < height + 24.0);
}

pub fn draw_confetti(ctx: &CanvasRenderingContext2d, parts: &[ConfettiParticle]) {
    for p in parts {
        let alpha = (p.life / CONFETTI_LIFE).clamp(0.0, 1.0);
        // flutter: fold the strip instead of a real rotation transform
        let w = p.size * p.flutter.cos().abs().max(0.25);
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(p.color);
        ctx.fill_rect(p.x - w / 2.0, p.y - p.size / 2.0, w, p.size);
    }
    ctx.set_global_alpha(1.0);
}
