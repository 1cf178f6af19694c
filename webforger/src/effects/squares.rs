use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::motion::{Direction, GridScroll};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct SquaresProps {
    #[prop_or(1.0)]
    pub speed: f64,
    #[prop_or(40.0)]
    pub square_size: f64,
    #[prop_or(Direction::Right)]
    pub direction: Direction,
    #[prop_or(AttrValue::Static("#999"))]
    pub border_color: AttrValue,
    #[prop_or(AttrValue::Static("#222"))]
    pub hover_fill_color: AttrValue,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    grid: &GridScroll,
    hovered: Option<(i64, i64)>,
    border: &str,
    fill: &str,
) {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    let (w, h) = (f64::from(width), f64::from(height));
    ctx.clear_rect(0.0, 0.0, w, h);

    let cols = (w / grid.size).ceil() as i64 + 1;
    let rows = (h / grid.size).ceil() as i64 + 1;
    ctx.set_stroke_style_str(border);
    ctx.set_fill_style_str(fill);
    for col in 0..=cols {
        for row in 0..=rows {
            let (x, y) = grid.cell_origin(col, row);
            if hovered == Some((col, row)) {
                ctx.fill_rect(x, y, grid.size, grid.size);
            }
            ctx.stroke_rect(x, y, grid.size, grid.size);
        }
    }
}

/// Endlessly scrolling grid drawn on a canvas. The cell under the pointer is
/// filled.
#[function_component(Squares)]
pub fn squares(props: &SquaresProps) -> Html {
    let canvas_ref = use_node_ref();
    let pointer: Rc<RefCell<Option<(f64, f64)>>> = use_mut_ref(|| None);

    {
        let canvas_ref = canvas_ref.clone();
        let pointer = pointer.clone();
        let deps = (
            props.speed.to_bits(),
            props.square_size.to_bits(),
            props.direction,
            props.border_color.clone(),
            props.hover_fill_color.clone(),
        );
        use_effect_with_deps(
            move |(speed, size, direction, border, fill)| {
                let speed = f64::from_bits(*speed);
                let direction = *direction;
                let border = border.clone();
                let fill = fill.clone();
                let mut grid = GridScroll::new(f64::from_bits(*size));
                let interval = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = context_2d(&canvas)?;
                    Some(Interval::new(FRAME_MS, move || {
                        grid.step(direction, speed);
                        let hovered = pointer.borrow().map(|(x, y)| grid.cell_at(x, y));
                        draw(&canvas, &ctx, &grid, hovered, &border, &fill);
                    }))
                });
                if interval.is_none() {
                    log::warn!("Squares canvas has no 2d context");
                }
                move || drop(interval)
            },
            deps,
        );
    }

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            *pointer.borrow_mut() = Some((f64::from(e.offset_x()), f64::from(e.offset_y())));
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        *pointer.borrow_mut() = None;
    });

    html! {
        <div class="squares-wrap">
            <canvas ref={canvas_ref} class="squares-canvas" {onmousemove} {onmouseleave}></canvas>
            <div class="squares-vignette"></div>
            <style>
                {r#"
                .squares-wrap {
                    position: absolute;
                    inset: 0;
                }
                .squares-canvas {
                    width: 100%;
                    height: 100%;
                    display: block;
                    border: none;
                }
                .squares-vignette {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: radial-gradient(circle, rgba(0, 0, 0, 0) 0%, #060010 100%);
                }
                "#}
            </style>
        </div>
    }
}
