use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use wof_shared::shared_wheel_game::{SECTORS, SEGMENT_RADIANS, WheelSector};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Wheel angle in radians, as reported by the spin engine.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn sector_color(sector: &WheelSector) -> &'static str {
    match sector {
        WheelSector::Cash(50) => "#06b6d4",
        WheelSector::Cash(100) => "#8b5cf6",
        WheelSector::Cash(_) => "#f97316",
        WheelSector::Bankrupt => "#111827",
        WheelSector::LoseTurn => "#ec4899",
    }
}

fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(canvas: &HtmlCanvasElement, rotation: f64, is_spinning: bool) {
    let Some(context) = context_for(canvas) else {
        log::error!("Canvas 2d context unavailable, the wheel cannot be drawn");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow, pulsing while the wheel turns
    let glow = if is_spinning {
        (js_sys::Date::now() / 300.0).sin() * 0.1 + 0.25
    } else {
        0.15
    };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(255, 215, 130, {})", glow));
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation);

    // Sector k sits under the top pointer while the rotation
    // is within [k·π/4, (k+1)·π/4).
    for (index, sector) in SECTORS.iter().enumerate() {
        let end = -PI / 2.0 - index as f64 * SEGMENT_RADIANS;
        let start = end - SEGMENT_RADIANS;

        context.begin_path();
        context.set_fill_style_str(sector_color(sector));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.5);
        context.stroke();

        context.save();
        let _ = context.rotate(start + SEGMENT_RADIANS / 2.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 18px sans-serif");
        context.set_text_align("right");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&sector.label(), radius - 14.0, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#f0f2ff");
    let _ = context.arc(0.0, 0.0, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();
    context.restore();

    // Pointer
    context.begin_path();
    context.set_fill_style_str("#facc15");
    context.move_to(center_x - 14.0, center_y - radius - 16.0);
    context.line_to(center_x + 14.0, center_y - radius - 16.0);
    context.line_to(center_x, center_y - radius + 12.0);
    context.close_path();
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.rotation, props.is_spinning),
            move |(rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, *rotation, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
