//! DOM shell: mounts the lab chrome, renders each screen, and wires
//! browser events into [`crate::flow::CaseFlow`].
//!
//! All interactive elements carry a `data-action` attribute and are
//! handled by a single delegated click listener, so re-rendering a
//! screen never tears down a listener that is mid-dispatch. The few
//! document-level listeners live for the whole app and are leaked via
//! `Closure::forget`, matching their lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, window};

use crate::catalog::{CLOSING_LINE, GREETING_LINE, INTAKE_QUESTIONS, SECRET_LINE};
use crate::flow::{CaseFlow, FlowConfig, Screen};
use crate::fx::{self, ConfettiParticle, Lcg};
use crate::sched::{self, TimerHandle};
use crate::secret::SecretSequence;
use crate::share;
use crate::snapshot;

const GREETING_DELAY_MS: i32 = 800;
/// Gap between the voice line and the report narration so the two
/// utterances do not overlap audibly.
const NARRATION_GAP_MS: i32 = 2600;
const REVEAL_TICK_MS: i32 = 28;
const THUNDER_INTERVAL_MS: i32 = 2500;
const THUNDER_CHANCE: f64 = 0.16;
const FLASH_HOLD_MS: i32 = 140;
const TOAST_HOLD_MS: i32 = 1800;

/// Timers owned by the currently active screen. Replacing the whole set
/// on a screen change drops every handle, which clears the underlying
/// browser timers in one stroke.
#[derive(Default)]
struct ScreenTasks {
    greet: Option<TimerHandle>,
    thunder: Option<TimerHandle>,
    flash_clear: Option<TimerHandle>,
    reveal: Option<TimerHandle>,
    narrate_report: Option<TimerHandle>,
}

struct LabState {
    flow: CaseFlow,
    tasks: ScreenTasks,
    keys: SecretSequence,
    confetti: Vec<ConfettiParticle>,
    rng: Lcg,
    /// Outlives screen changes; a toast may finish fading on the next
    /// screen.
    toast_clear: Option<TimerHandle>,
}

thread_local! {
    static LAB: RefCell<Option<LabState>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Boot the experience: build the chrome, restore any shared case from
/// the URL, install listeners, and start the frame loop.
pub fn start() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    mount_chrome(&doc)?;

    let mut state = LabState {
        flow: boot_flow(),
        tasks: ScreenTasks::default(),
        keys: SecretSequence::new(),
        confetti: Vec::new(),
        rng: Lcg::from_clock(),
        toast_clear: None,
    };
    enter_screen(&mut state);
    render(&doc, &state);
    LAB.with(|cell| cell.replace(Some(state)));

    install_click_listener(&doc)?;
    install_input_listener(&doc)?;
    install_keydown_listener(&doc)?;
    install_mousemove_listener(&doc)?;

    start_frame_loop();
    Ok(())
}

/// Fresh session, or one rehydrated from a `?case=` token. A token that
/// fails to decode is ignored with a console note and the lab starts
/// clean.
fn boot_flow() -> CaseFlow {
    let raw = window()
        .map(|w| w.location())
        .and_then(|loc| loc.search().ok());
    let token = raw.as_deref().and_then(|search| {
        let params = web_sys::UrlSearchParams::new_with_str(search).ok()?;
        params.get("case")
    });
    if let Some(token) = token {
        match share::decode(&token)
            .and_then(|p| CaseFlow::rehydrate(FlowConfig::default(), &p.answers, &p.collected))
        {
            Some(flow) => return flow,
            None => gloo::console::warn!("ignoring malformed case token in url"),
        }
    }
    CaseFlow::new(FlowConfig::default())
}

// --- Screen lifecycle ----------------------------------------------------------

/// Arm the timers the new screen owns. Dropping the previous task set
/// cancels everything the old screen had running.
fn enter_screen(st: &mut LabState) {
    st.tasks = ScreenTasks::default();
    st.flow.set_flash(false);
    match st.flow.screen() {
        Screen::Intro => {
            st.tasks.greet = sched::after(GREETING_DELAY_MS, || fx::speak(GREETING_LINE));
        }
        Screen::Lab => {
            st.tasks.thunder = sched::every(THUNDER_INTERVAL_MS, thunder_roll);
        }
        Screen::Intake | Screen::Complete => {}
    }
}

/// One tick of the thunder loop: small chance of a brief lightning
/// flash that clears itself.
fn thunder_roll() {
    LAB.with(|cell| {
        if let Some(st) = cell.borrow_mut().as_mut() {
            if st.flow.screen() != Screen::Lab {
                return;
            }
            if st.rng.next_f64() < THUNDER_CHANCE {
                st.flow.set_flash(true);
                st.tasks.flash_clear = sched::after(FLASH_HOLD_MS, || {
                    LAB.with(|cell| {
                        if let Some(st) = cell.borrow_mut().as_mut() {
                            st.flow.set_flash(false);
                        }
                    });
                });
            }
        }
    });
}

// --- Event wiring --------------------------------------------------------------

fn install_click_listener(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        let target = evt.target().and_then(|t| t.dyn_into::<Element>().ok());
        let hit = target.and_then(|el| el.closest("[data-action]").ok().flatten());
        if let Some(el) = hit {
            if let Some(action) = el.get_attribute("data-action") {
                run_action(&action, &el);
            }
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_input_listener(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        let input = evt
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(idx) = input
                .id()
                .strip_prefix("al-answer-")
                .and_then(|n| n.parse::<usize>().ok())
            {
                LAB.with(|cell| {
                    if let Some(st) = cell.borrow_mut().as_mut() {
                        st.flow.set_answer(idx, &input.value());
                        sync_submit_button(&st.flow);
                    }
                });
            }
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_keydown_listener(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        if key == "Escape" {
            LAB.with(|cell| {
                if let Some(st) = cell.borrow_mut().as_mut() {
                    if st.flow.report_open() {
                        close_report(st);
                        render_current(st);
                    }
                }
            });
            return;
        }
        // Everything else feeds the ambient secret-word detector.
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            LAB.with(|cell| {
                if let Some(st) = cell.borrow_mut().as_mut() {
                    if st.keys.push(c) && st.flow.unlock_secret() {
                        fx::speak(SECRET_LINE);
                        show_toast(st, "Hidden organ detected: Situationship Spleen");
                        render_current(st);
                    }
                }
            });
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_mousemove_listener(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Some(el) = doc.get_element_by_id("al-spotlight") {
                let style = format!(
                    "position:fixed; inset:0; pointer-events:none; z-index:5; \
                     background:radial-gradient(420px at {}px {}px, rgba(255,255,255,0.07), rgba(0,0,0,0.82));",
                    evt.client_x(),
                    evt.client_y()
                );
                el.set_attribute("style", &style).ok();
            }
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Actions -------------------------------------------------------------------

fn run_action(action: &str, el: &Element) {
    LAB.with(|cell| {
        if let Some(st) = cell.borrow_mut().as_mut() {
            match action {
                "begin" => {
                    if st.flow.begin_intake() {
                        enter_screen(st);
                        render_current(st);
                    }
                }
                "submit" => {
                    if st.flow.submit_statement() {
                        enter_screen(st);
                        render_current(st);
                    }
                }
                "organ" => {
                    let id = el
                        .get_attribute("data-id")
                        .and_then(|v| v.parse::<u32>().ok());
                    if let Some(id) = id {
                        inspect_organ(st, id);
                    }
                }
                "close-report" => {
                    close_report(st);
                    render_current(st);
                }
                // Clicks inside the report card stop at the card.
                "report-card" => {}
                "complete" => {
                    if st.flow.complete_autopsy() {
                        enter_screen(st);
                        celebrate(st);
                        render_current(st);
                    }
                }
                "share" => share_case(st),
                "export" => export_snapshot(st),
                "reset" => {
                    if st.flow.new_case() {
                        st.confetti.clear();
                        enter_screen(st);
                        render_current(st);
                    }
                }
                _ => {}
            }
        }
    });
}

fn inspect_organ(st: &mut LabState, id: u32) {
    let organ = match st.flow.inspect_organ(id) {
        Some(o) => o,
        None => return,
    };
    // Voice line first, full report after a beat.
    fx::speak(organ.voice.unwrap_or(organ.name));
    let report = organ.report;
    st.tasks.narrate_report = sched::after(NARRATION_GAP_MS, move || fx::speak(report));
    st.tasks.reveal = sched::every(REVEAL_TICK_MS, reveal_tick);
    render_current(st);
}

/// Typewriter tick: advance one character and patch the report text in
/// place. When the text is fully out, the tick retires its own timer.
fn reveal_tick() {
    LAB.with(|cell| {
        if let Some(st) = cell.borrow_mut().as_mut() {
            if st.flow.tick_reveal() {
                if let Some(doc) = window().and_then(|w| w.document()) {
                    if let Some(span) = doc.get_element_by_id("al-report-text") {
                        span.set_text_content(Some(&st.flow.revealed_report()));
                    }
                    if st.flow.reveal_complete() {
                        if let Some(cursor) = doc.get_element_by_id("al-report-cursor") {
                            cursor.set_attribute("style", "display:none").ok();
                        }
                    }
                }
            }
            if st.flow.reveal_complete() {
                st.tasks.reveal = None;
            }
        }
    });
}

fn close_report(st: &mut LabState) {
    st.flow.close_report();
    st.tasks.reveal = None;
    st.tasks.narrate_report = None;
}

fn celebrate(st: &mut LabState) {
    let (w, h) = viewport_size();
    st.confetti = fx::confetti_burst(&mut st.rng, w, h);
    fx::speak(CLOSING_LINE);
}

fn share_case(st: &mut LabState) {
    let token = share::encode(st.flow.answers(), st.flow.collected());
    let url = match window() {
        Some(w) => {
            let loc = w.location();
            format!(
                "{}{}?case={}",
                loc.origin().unwrap_or_default(),
                loc.pathname().unwrap_or_default(),
                token
            )
        }
        None => return,
    };
    let text = format!(
        "Dr. Amira just autopsied my love life \u{1f480}\nFailed organs: {}\nSee yours: {}",
        st.flow.collected().len(),
        url
    );
    if let Some(w) = window() {
        // Fire and forget; an unavailable clipboard just means no copy.
        let _ = w.navigator().clipboard().write_text(&text);
    }
    show_toast(st, "Copied! Send to your group chat \u{1f602}");
}

fn export_snapshot(st: &mut LabState) {
    let doc = match window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    match snapshot::capture_case_card(&doc, &st.flow)
        .and_then(|bytes| snapshot::download_png(&doc, &bytes, snapshot::SNAPSHOT_FILENAME))
    {
        Ok(()) => show_toast(st, "Snapshot saved"),
        Err(e) => gloo::console::warn!("snapshot export failed:", e),
    }
}

fn show_toast(st: &mut LabState, text: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("al-toast") {
            el.set_text_content(Some(text));
            el.set_class_name("al-toast is-live");
        }
    }
    st.toast_clear = sched::after(TOAST_HOLD_MS, || {
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Some(el) = doc.get_element_by_id("al-toast") {
                el.set_class_name("al-toast");
            }
        }
    });
}

fn sync_submit_button(flow: &CaseFlow) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(btn) = doc.get_element_by_id("al-submit") {
            if flow.statement_complete() {
                btn.remove_attribute("disabled").ok();
            } else {
                btn.set_attribute("disabled", "").ok();
            }
        }
    }
}

fn viewport_size() -> (f64, f64) {
    let win = window();
    let w = win
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let h = win
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (w, h)
}

// --- Rendering -----------------------------------------------------------------

fn render_current(st: &LabState) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        render(&doc, st);
    }
}

fn render(doc: &Document, st: &LabState) {
    if let Some(root) = doc.get_element_by_id("al-root") {
        let html = match st.flow.screen() {
            Screen::Intro => intro_html(),
            Screen::Intake => intake_html(&st.flow),
            Screen::Lab => lab_html(&st.flow),
            Screen::Complete => complete_html(&st.flow),
        };
        root.set_inner_html(&html);
    }
    if st.flow.screen() == Screen::Intake {
        sync_submit_button(&st.flow);
    }
}

fn intro_html() -> String {
    concat!(
        "<div class='al-screen al-intro'>",
        "<div class='al-intro-glyphs'>\u{1f480}\u{1f52c}</div>",
        "<h1 class='al-neon-pink al-flicker'>DR. AMIRA'S</h1>",
        "<h2 class='al-neon-cyan'>LOVE AUTOPSY LAB</h2>",
        "<p class='al-case-line'>Case #VDayMurder2026<br>Your situationship didn't survive.</p>",
        "<button class='al-btn al-btn-enter' data-action='begin'>ENTER THE MORGUE \u{25b6}</button>",
        "</div>"
    )
    .to_string()
}

fn intake_html(flow: &CaseFlow) -> String {
    let mut html = String::from("<div class='al-screen al-intake'><h2 class='al-neon-pink'>VICTIM STATEMENT</h2>");
    for (i, question) in INTAKE_QUESTIONS.iter().enumerate() {
        let value = flow.answers().get(i).map(String::as_str).unwrap_or("");
        html.push_str(&format!(
            "<div class='al-question'><p>{q}</p>\
             <input type='text' id='al-answer-{i}' value='{v}' placeholder='Be brutally honest...'></div>",
            q = question,
            i = i,
            v = html_escape(value),
        ));
    }
    html.push_str(
        "<button class='al-btn al-btn-submit' id='al-submit' data-action='submit'>TAKE ME TO THE BODY</button></div>",
    );
    html
}

fn lab_html(flow: &CaseFlow) -> String {
    let mut hotspots = String::new();
    for organ in flow.active_organs() {
        let tagged = if flow.is_collected(organ.id) {
            " is-tagged"
        } else {
            ""
        };
        // The secret organ has no anatomical position; it surfaces in a
        // reserved slot under the heart.
        let (x, y, extra) = match organ.pos {
            Some((x, y)) => (x, y, ""),
            None => (50.0, 82.0, " al-organ--secret"),
        };
        let label = if flow.is_collected(organ.id) {
            "\u{2713}"
        } else {
            organ.label
        };
        hotspots.push_str(&format!(
            "<button class='al-organ{tagged}{extra}' data-action='organ' data-id='{id}' \
             style='left:{x}%;top:{y}%'>\
             <span class='al-organ-id'>{id}</span>\
             <span class='al-organ-label'>{label}</span></button>",
            id = organ.id,
        ));
    }

    let mut evidence = String::new();
    if flow.collected().is_empty() {
        evidence.push_str("<p class='al-evidence-empty'>Click organs to collect evidence...</p>");
    } else {
        for organ in flow.collected_organs() {
            evidence.push_str(&format!(
                "<div class='al-evidence-row'>\u{2713} {}</div>",
                organ.name
            ));
        }
    }
    let complete_btn = if flow.can_complete() {
        "<button class='al-btn al-btn-complete' data-action='complete'>COMPLETE AUTOPSY</button>"
    } else {
        ""
    };

    let report = if flow.report_open() {
        report_html(flow)
    } else {
        String::new()
    };

    format!(
        "<div class='al-screen al-lab'>\
         <div class='al-heartwrap'>\
         <canvas id='al-heart' width='520' height='520'></canvas>\
         {hotspots}\
         </div>\
         <aside class='al-evidence'>\
         <div class='al-evidence-title'>\u{1f4c4} EVIDENCE LOG</div>\
         {evidence}\
         <div class='al-progress'>{got} / {need} organs examined</div>\
         {complete_btn}\
         </aside>\
         {report}\
         </div>",
        got = flow.collected().len(),
        need = flow.threshold(),
    )
}

fn report_html(flow: &CaseFlow) -> String {
    let organ = match flow.inspected_organ() {
        Some(o) => o,
        None => return String::new(),
    };
    let cursor = if flow.reveal_complete() {
        ""
    } else {
        "<span id='al-report-cursor' class='al-cursor'>\u{258d}</span>"
    };
    format!(
        "<div class='al-report-backdrop' data-action='close-report'>\
         <div class='al-report-card' data-action='report-card'>\
         <div class='al-report-head'>\u{1f480} FORENSIC REPORT #{id}</div>\
         <div class='al-report-name'>{name}</div>\
         <div class='al-report-body'><span id='al-report-text'>{text}</span>{cursor}</div>\
         <div class='al-report-hint'>Click outside to close \u{2022} Voice narration active</div>\
         </div></div>",
        id = organ.id,
        name = organ.name,
        text = html_escape(&flow.revealed_report()),
    )
}

fn complete_html(flow: &CaseFlow) -> String {
    let mut evidence = String::new();
    for organ in flow.collected_organs() {
        evidence.push_str(&format!("<div>\u{2022} {}</div>", organ.name));
    }
    format!(
        "<div class='al-screen al-complete'>\
         <div class='al-complete-skull'>\u{1f480}</div>\
         <h1 class='al-neon-pink'>CASE CLOSED</h1>\
         <p class='al-stamp'>Romance pronounced dead \u{2014} 14 Feb 2026</p>\
         <div class='al-verdict'>\
         <div class='al-verdict-title'>COLLECTED EVIDENCE:</div>\
         {evidence}\
         </div>\
         <div class='al-complete-actions'>\
         <button class='al-btn al-btn-share' data-action='share'>SHARE MY AUTOPSY</button>\
         <button class='al-btn al-btn-export' data-action='export'>SAVE SNAPSHOT</button>\
         <button class='al-btn al-btn-reset' data-action='reset'>NEW CASE</button>\
         </div></div>"
    )
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// --- Chrome --------------------------------------------------------------------

fn mount_chrome(doc: &Document) -> Result<(), JsValue> {
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLE));
    body.append_child(&style)?;

    let root = doc.create_element("div")?;
    root.set_id("al-root");
    body.append_child(&root)?;

    let spotlight = doc.create_element("div")?;
    spotlight.set_id("al-spotlight");
    spotlight.set_attribute(
        "style",
        "position:fixed; inset:0; pointer-events:none; z-index:5; \
         background:radial-gradient(420px at 50% 40%, rgba(255,255,255,0.07), rgba(0,0,0,0.82));",
    )?;
    body.append_child(&spotlight)?;

    let flash = doc.create_element("div")?;
    flash.set_id("al-flash");
    flash.set_class_name("al-flash");
    body.append_child(&flash)?;

    let confetti = doc.create_element("canvas")?;
    confetti.set_id("al-confetti");
    confetti.set_attribute(
        "style",
        "position:fixed; inset:0; pointer-events:none; z-index:60;",
    )?;
    body.append_child(&confetti)?;

    for (id, class) in [("al-tape-top", "al-tape al-tape-top"), ("al-tape-bottom", "al-tape al-tape-bottom")] {
        let tape = doc.create_element("div")?;
        tape.set_id(id);
        tape.set_class_name(class);
        tape.set_text_content(Some(
            "POLICE LINE \u{2014} DO NOT CROSS \u{2014} LOVE CRIME SCENE",
        ));
        body.append_child(&tape)?;
    }

    let toast = doc.create_element("div")?;
    toast.set_id("al-toast");
    toast.set_class_name("al-toast");
    body.append_child(&toast)?;

    let footer = doc.create_element("div")?;
    footer.set_class_name("al-footer");
    footer.set_text_content(Some(
        "Made with savage love by @amiprin7 \u{2014} Valentine's 2026",
    ));
    body.append_child(&footer)?;

    Ok(())
}

// --- Frame loop ----------------------------------------------------------------

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        LAB.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                frame_tick(st, ts);
            }
        });
        if let Some(w) = window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        if let Some(cb) = g.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

fn frame_tick(st: &mut LabState, ts: f64) {
    let doc = match window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    // Lightning overlay follows the flow flag.
    if let Some(flash) = doc.get_element_by_id("al-flash") {
        flash.set_class_name(if st.flow.flash_active() {
            "al-flash is-on"
        } else {
            "al-flash"
        });
    }

    if st.flow.screen() == Screen::Lab {
        if let Some((ctx, w, h)) = canvas_context(&doc, "al-heart") {
            draw_heart(&ctx, w, h, ts);
        }
    }

    if !st.confetti.is_empty() {
        if let Some((ctx, w, h)) = sized_overlay_context(&doc, "al-confetti") {
            ctx.clear_rect(0.0, 0.0, w, h);
            fx::step_confetti(&mut st.confetti, h);
            fx::draw_confetti(&ctx, &st.confetti);
        }
    }
}

fn canvas_context(
    doc: &Document,
    id: &str,
) -> Option<(web_sys::CanvasRenderingContext2d, f64, f64)> {
    let canvas: HtmlCanvasElement = doc.get_element_by_id(id)?.dyn_into().ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    Some((ctx, canvas.width() as f64, canvas.height() as f64))
}

/// Like [`canvas_context`] but first sizes the canvas to the viewport,
/// used by the full-screen confetti layer.
fn sized_overlay_context(
    doc: &Document,
    id: &str,
) -> Option<(web_sys::CanvasRenderingContext2d, f64, f64)> {
    let canvas: HtmlCanvasElement = doc.get_element_by_id(id)?.dyn_into().ok()?;
    let (vw, vh) = viewport_size();
    if canvas.width() != vw as u32 {
        canvas.set_width(vw as u32);
    }
    if canvas.height() != vh as u32 {
        canvas.set_height(vh as u32);
    }
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    Some((ctx, vw, vh))
}

/// The pulsing heart silhouette behind the hotspots, on a slow 2.8 s
/// beat.
fn draw_heart(ctx: &web_sys::CanvasRenderingContext2d, w: f64, h: f64, ts: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let pulse = 1.0 + 0.04 * (ts / 2800.0 * std::f64::consts::TAU).sin();
    let cx = w / 2.0;
    let cy = h * 0.44;
    let r = w * 0.27 * pulse;

    ctx.set_shadow_color("#ef4444");
    ctx.set_shadow_blur(90.0);

    ctx.set_fill_style_str("#7f1d1d");
    ctx.begin_path();
    ctx.move_to(cx, cy + r * 1.05);
    ctx.bezier_curve_to(cx - r * 1.6, cy + r * 0.15, cx - r * 0.95, cy - r * 0.95, cx, cy - r * 0.3);
    ctx.bezier_curve_to(cx + r * 0.95, cy - r * 0.95, cx + r * 1.6, cy + r * 0.15, cx, cy + r * 1.05);
    ctx.fill();

    // Aorta and pulmonary stubs
    ctx.set_fill_style_str("#991b1b");
    ctx.fill_rect(cx - r * 0.42, cy - r * 0.98, r * 0.3, r * 0.5);
    ctx.fill_rect(cx + r * 0.08, cy - r * 1.08, r * 0.26, r * 0.6);

    ctx.set_shadow_blur(0.0);

    // Faint surface vessels
    ctx.set_stroke_style_str("rgba(254,202,202,0.25)");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(cx - r * 0.5, cy - r * 0.1);
    ctx.bezier_curve_to(cx - r * 0.2, cy + r * 0.2, cx + r * 0.1, cy + r * 0.1, cx + r * 0.45, cy + r * 0.5);
    ctx.stroke();
}

const STYLE: &str = "\
html, body { margin:0; padding:0; background:#0a0a0a; color:#fafafa; \
  font-family:'Courier New', ui-monospace, monospace; min-height:100vh; overflow-x:hidden; }\n\
button { font-family:inherit; cursor:pointer; }\n\
#al-root { position:relative; z-index:10; }\n\
.al-screen { min-height:100vh; display:flex; flex-direction:column; align-items:center; \
  justify-content:center; text-align:center; padding:24px; box-sizing:border-box; }\n\
.al-neon-pink { color:#f472b6; text-shadow:0 0 8px #ec4899, 0 0 32px #be185d; \
  font-size:56px; margin:0; letter-spacing:-2px; }\n\
.al-neon-cyan { color:#67e8f9; text-shadow:0 0 8px #22d3ee, 0 0 28px #0e7490; \
  font-size:40px; margin:4px 0 0; letter-spacing:6px; }\n\
.al-flicker { animation:al-flicker 3.2s infinite; }\n\
@keyframes al-flicker { 0%,92%,96%,100% { opacity:1; } 93%,95% { opacity:0.4; } }\n\
.al-intro-glyphs { font-size:64px; margin-bottom:18px; }\n\
.al-case-line { margin-top:28px; font-size:20px; color:#d4d4d8; line-height:1.5; }\n\
.al-btn { border:none; border-radius:999px; font-weight:bold; }\n\
.al-btn-enter { margin-top:48px; padding:22px 56px; font-size:24px; background:#dc2626; \
  color:#fff; box-shadow:0 10px 50px rgba(127,29,29,0.8); }\n\
.al-btn-enter:hover { background:#b91c1c; }\n\
.al-intake { max-width:640px; margin:0 auto; align-items:stretch; text-align:left; }\n\
.al-intake h2 { text-align:center; font-size:34px; margin-bottom:36px; }\n\
.al-question p { font-size:19px; margin:0 0 10px; }\n\
.al-question { margin-bottom:30px; }\n\
.al-question input { width:100%; box-sizing:border-box; background:#18181b; color:#fafafa; \
  border:1px solid #3f3f46; border-radius:12px; padding:16px; font-size:18px; outline:none; }\n\
.al-question input:focus { border-color:#ec4899; }\n\
.al-btn-submit { width:100%; padding:22px; font-size:22px; border-radius:16px; color:#fff; \
  background:linear-gradient(90deg, #dc2626, #db2777); }\n\
.al-btn-submit[disabled] { opacity:0.5; cursor:not-allowed; }\n\
.al-lab { flex-direction:row; gap:32px; }\n\
.al-heartwrap { position:relative; width:520px; height:520px; }\n\
#al-heart { position:absolute; inset:0; }\n\
.al-organ { position:absolute; width:92px; height:92px; transform:translate(-50%,-50%); \
  background:rgba(0,0,0,0.7); border:2px solid #facc15; border-radius:50%; color:#fde047; \
  font-size:11px; letter-spacing:2px; transition:transform 120ms; }\n\
.al-organ:hover { transform:translate(-50%,-50%) scale(1.35) rotate(8deg); }\n\
.al-organ.is-tagged { border-color:#22c55e; color:#86efac; opacity:0.75; }\n\
.al-organ.is-tagged .al-organ-id { background:#22c55e; }\n\
.al-organ.is-tagged .al-organ-label { font-size:30px; }\n\
.al-organ--secret { border-style:dashed; border-color:#a78bfa; color:#c4b5fd; }\n\
.al-organ-id { position:absolute; top:-10px; right:-10px; width:22px; height:22px; \
  background:#facc15; color:#000; font-weight:bold; font-size:12px; \
  display:flex; align-items:center; justify-content:center; transform:rotate(45deg); \
  border:2px solid #000; }\n\
.al-organ-label { display:flex; width:100%; height:100%; align-items:center; \
  justify-content:center; padding:6px; box-sizing:border-box; }\n\
.al-evidence { width:300px; background:#0c0a09; border:1px solid rgba(250,204,21,0.3); \
  border-radius:14px; padding:22px; text-align:left; }\n\
.al-evidence-title { font-size:20px; font-weight:bold; margin-bottom:18px; }\n\
.al-evidence-empty { color:#71717a; font-style:italic; text-align:center; padding:28px 0; }\n\
.al-evidence-row { color:#fde68a; margin-bottom:10px; }\n\
.al-progress { margin-top:14px; color:#a1a1aa; font-size:14px; }\n\
.al-btn-complete { margin-top:22px; width:100%; padding:18px; font-size:19px; \
  background:#dc2626; color:#fff; border-radius:12px; }\n\
.al-report-backdrop { position:fixed; inset:0; background:rgba(0,0,0,0.9); z-index:50; \
  display:flex; align-items:center; justify-content:center; }\n\
.al-report-card { background:#18181b; border:1px solid #dc2626; border-radius:18px; \
  max-width:520px; width:92%; overflow:hidden; text-align:left; }\n\
.al-report-head { background:#7f1d1d; padding:16px 28px; font-size:22px; font-weight:bold; }\n\
.al-report-name { padding:18px 32px 0; color:#fca5a5; font-size:17px; letter-spacing:1px; }\n\
.al-report-body { padding:14px 32px 30px; font-size:18px; line-height:1.6; min-height:76px; }\n\
.al-cursor { animation:al-blink 0.7s steps(1) infinite; color:#f87171; }\n\
@keyframes al-blink { 50% { opacity:0; } }\n\
.al-report-hint { border-top:1px solid #3f3f46; padding:12px; text-align:center; \
  font-size:13px; color:#a1a1aa; }\n\
.al-complete-skull { font-size:140px; }\n\
.al-stamp { font-size:24px; color:#e4e4e7; margin:10px 0 30px; }\n\
.al-verdict { background:#0c0a09; border:1px solid #dc2626; border-radius:16px; \
  padding:26px; max-width:420px; width:100%; text-align:left; line-height:1.8; }\n\
.al-verdict-title { color:#facc15; margin-bottom:12px; }\n\
.al-complete-actions { display:flex; gap:14px; margin-top:38px; flex-wrap:wrap; \
  justify-content:center; }\n\
.al-btn-share { background:#fff; color:#000; padding:18px 34px; font-size:19px; }\n\
.al-btn-share:hover { background:#fde047; }\n\
.al-btn-export { background:#27272a; color:#fafafa; padding:18px 34px; font-size:19px; \
  border:1px solid #52525b; }\n\
.al-btn-reset { background:transparent; color:#a1a1aa; padding:18px 24px; font-size:16px; \
  border:1px dashed #52525b; }\n\
.al-flash { position:fixed; inset:0; background:#fff; opacity:0; pointer-events:none; \
  z-index:70; transition:opacity 90ms; }\n\
.al-flash.is-on { opacity:0.85; }\n\
.al-tape { position:fixed; left:-2%; right:-2%; height:34px; z-index:40; \
  display:flex; align-items:center; justify-content:center; color:#000; font-weight:bold; \
  font-size:13px; letter-spacing:4px; \
  background:repeating-linear-gradient(45deg, #facc15 0 26px, #0a0a0a 26px 52px); \
  text-shadow:0 0 6px #facc15; }\n\
.al-tape-top { top:6px; transform:rotate(-3deg); }\n\
.al-tape-bottom { bottom:6px; transform:rotate(3deg); }\n\
.al-toast { position:fixed; bottom:64px; left:50%; transform:translateX(-50%) translateY(12px); \
  background:#18181b; border:1px solid #3f3f46; color:#fafafa; padding:12px 22px; \
  border-radius:10px; opacity:0; transition:opacity 160ms, transform 160ms; z-index:80; }\n\
.al-toast.is-live { opacity:1; transform:translateX(-50%) translateY(0); }\n\
.al-footer { position:fixed; bottom:14px; left:50%; transform:translateX(-50%); \
  font-size:11px; color:#52525b; z-index:41; }\n\
@media (max-width: 900px) { .al-lab { flex-direction:column; } \
  .al-heartwrap { width:92vw; height:92vw; max-width:520px; max-height:520px; } }\n\
";
