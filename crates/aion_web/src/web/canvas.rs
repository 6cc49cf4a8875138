//! PAS chart rendering onto a 2d canvas.

use aion_core::chart::{PasChart, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const GRID_COLOR: &str = "rgba(148, 163, 184, 0.18)";
const THRESHOLD_COLOR: &str = "rgba(148, 163, 184, 0.35)";
const EMPHASIS_COLOR: &str = "#10b981";
const LINE_COLOR: &str = "#3b82f6";
const FILL_TOP: &str = "rgba(59, 130, 246, 0.3)";
const FILL_BOTTOM: &str = "rgba(59, 130, 246, 0)";
const LABEL_COLOR: &str = "#94a3b8";
const LABEL_FONT: &str = "12px system-ui, sans-serif";

/// Re-measure the canvas, resize its backing store for the current pixel
/// ratio, and draw the whole chart.
#[allow(deprecated)]
pub(super) fn draw_pas_chart(
    canvas: &HtmlCanvasElement,
    pas: &[f64],
    device_pixel_ratio: f64,
) -> Result<(), String> {
    let rect = canvas.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width(), rect.height(), device_pixel_ratio);
    let (bw, bh) = viewport.backing_size();
    canvas.set_width(bw);
    canvas.set_height(bh);

    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())?;

    // Resizing resets the transform, so this never compounds.
    let dpr = viewport.device_pixel_ratio;
    ctx.scale(dpr, dpr)
        .map_err(|_| "canvas: scale failed".to_string())?;

    let chart = PasChart::layout(viewport, pas);
    ctx.clear_rect(0.0, 0.0, viewport.css_width, viewport.css_height);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for line in &chart.grid {
        ctx.begin_path();
        ctx.move_to(line.x0, line.y);
        ctx.line_to(line.x1, line.y);
        ctx.stroke();
    }

    for marker in &chart.thresholds {
        ctx.set_stroke_style_str(if marker.emphasized {
            EMPHASIS_COLOR
        } else {
            THRESHOLD_COLOR
        });
        set_dash(&ctx, marker.dash())?;
        ctx.set_line_width(marker.line_width());
        ctx.begin_path();
        ctx.move_to(marker.line.x0, marker.line.y);
        ctx.line_to(marker.line.x1, marker.line.y);
        ctx.stroke();
    }
    set_dash(&ctx, &[])?;

    if let Some((&(x0, y0), rest)) = chart.line.split_first() {
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.move_to(x0, y0);
        for &(x, y) in rest {
            ctx.line_to(x, y);
        }
        ctx.stroke();

        let (g0, g1) = chart.fill_gradient_y;
        let gradient = ctx.create_linear_gradient(0.0, g0, 0.0, g1);
        gradient
            .add_color_stop(0.0, FILL_TOP)
            .map_err(|_| "canvas: bad gradient stop".to_string())?;
        gradient
            .add_color_stop(1.0, FILL_BOTTOM)
            .map_err(|_| "canvas: bad gradient stop".to_string())?;

        ctx.begin_path();
        for (i, &(x, y)) in chart.fill.iter().enumerate() {
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
        ctx.set_fill_style(&gradient);
        ctx.fill();
    }

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("right");
    for label in &chart.y_labels {
        let _ = ctx.fill_text(&label.text, label.x, label.y);
    }
    ctx.set_text_align("center");
    let t = &chart.time_label;
    let _ = ctx.fill_text(&t.text, t.x, t.y);

    Ok(())
}

fn set_dash(ctx: &CanvasRenderingContext2d, dash: &[f64]) -> Result<(), String> {
    let segments = js_sys::Array::new();
    for d in dash {
        segments.push(&JsValue::from_f64(*d));
    }
    ctx.set_line_dash(&segments)
        .map_err(|_| "canvas: set_line_dash failed".to_string())
}
