//! Snapshot exporter: renders the closed case as a shareable PNG.
//!
//! The card is drawn on an offscreen canvas, rasterized through a data
//! URL, and handed back as raw PNG bytes. Failures surface as `Err` for
//! the caller to log; they never interrupt the flow.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement};

use crate::flow::CaseFlow;

pub const SNAPSHOT_FILENAME: &str = "love-autopsy.png";

const CARD_W: u32 = 720;
const CARD_H: u32 = 900;

/// Draw the case-summary card and return it as PNG bytes.
pub fn capture_case_card(doc: &Document, flow: &CaseFlow) -> Result<Vec<u8>, JsValue> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_width(CARD_W);
    canvas.set_height(CARD_H);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    draw_card(&ctx, flow);

    let url = canvas.to_data_url_with_type("image/png")?;
    let b64 = url
        .split(',')
        .nth(1)
        .ok_or_else(|| JsValue::from_str("malformed data url"))?;
    STANDARD
        .decode(b64)
        .map_err(|e| JsValue::from_str(&format!("png payload: {e}")))
}

/// Offer `bytes` to the user as a named PNG download.
pub fn download_png(doc: &Document, bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    anchor.set_href(&format!("data:image/png;base64,{}", STANDARD.encode(bytes)));
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

fn draw_card(ctx: &CanvasRenderingContext2d, flow: &CaseFlow) {
    let w = CARD_W as f64;
    let h = CARD_H as f64;

    // Slab background with a faint vertical falloff
    let grad = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    grad.add_color_stop(0.0, "#18181b").ok();
    grad.add_color_stop(1.0, "#09090b").ok();
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_stroke_style_str("#dc2626");
    ctx.set_line_width(6.0);
    ctx.stroke_rect(14.0, 14.0, w - 28.0, h - 28.0);

    ctx.set_text_align("center");
    ctx.set_fill_style_str("#fafafa");
    ctx.set_font("72px serif");
    ctx.fill_text("\u{1f480}", w / 2.0, 120.0).ok();

    ctx.set_font("bold 44px 'Courier New', monospace");
    ctx.set_fill_style_str("#f472b6");
    ctx.fill_text("LOVE AUTOPSY LAB", w / 2.0, 190.0).ok();

    ctx.set_font("bold 60px 'Courier New', monospace");
    ctx.set_fill_style_str("#ef4444");
    ctx.fill_text("CASE CLOSED", w / 2.0, 270.0).ok();

    ctx.set_font("24px 'Courier New', monospace");
    ctx.set_fill_style_str("#e4e4e7");
    ctx.fill_text("Romance pronounced dead \u{2014} 14 Feb 2026", w / 2.0, 320.0)
        .ok();

    ctx.set_text_align("left");
    ctx.set_font("bold 26px 'Courier New', monospace");
    ctx.set_fill_style_str("#facc15");
    ctx.fill_text("COLLECTED EVIDENCE:", 70.0, 400.0).ok();

    ctx.set_font("24px 'Courier New', monospace");
    ctx.set_fill_style_str("#fecaca");
    let mut y = 448.0;
    for organ in flow.collected_organs() {
        ctx.fill_text(&format!("\u{2022} {}", organ.name), 70.0, y).ok();
        y += 40.0;
    }

    ctx.set_text_align("center");
    ctx.set_font("20px 'Courier New', monospace");
    ctx.set_fill_style_str("#71717a");
    ctx.fill_text(
        &format!("Failed organs: {} \u{b7} Case #VDayMurder2026", flow.collected().len()),
        w / 2.0,
        h - 60.0,
    )
    .ok();
}
