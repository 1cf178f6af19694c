use yew::prelude::*;

use super::motion::{blind_count, gradient_stops};
use crate::device::use_device;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShineDirection {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct GradientBlindsProps {
    pub gradient_colors: Vec<AttrValue>,
    /// Degrees.
    #[prop_or(0.0)]
    pub angle: f64,
    #[prop_or(0.3)]
    pub noise: f64,
    #[prop_or(16)]
    pub blind_count: u32,
    #[prop_or(60.0)]
    pub blind_min_width: f64,
    /// Fraction of the smaller viewport side.
    #[prop_or(0.5)]
    pub spotlight_radius: f64,
    #[prop_or(1.0)]
    pub spotlight_softness: f64,
    #[prop_or(1.0)]
    pub spotlight_opacity: f64,
    #[prop_or(0.15)]
    pub mouse_dampening: f64,
    #[prop_or(ShineDirection::Left)]
    pub shine_direction: ShineDirection,
    #[prop_or(AttrValue::Static("lighten"))]
    pub mix_blend_mode: AttrValue,
}

/// Vertical blinds over a gradient, with a spotlight trailing the pointer.
#[function_component(GradientBlinds)]
pub fn gradient_blinds(props: &GradientBlindsProps) -> Html {
    let device = use_device();
    let spotlight = use_state(|| None::<(i32, i32)>);

    let count = blind_count(device.width, props.blind_count, props.blind_min_width);
    let colors: Vec<&str> = props.gradient_colors.iter().map(|c| &**c).collect();
    let stops = gradient_stops(&colors);
    let shine = match props.shine_direction {
        ShineDirection::Left => "to left",
        ShineDirection::Right => "to right",
    };
    let lag_s = (props.mouse_dampening * 10.0).clamp(0.0, 2.0);
    let diameter_vmin = (props.spotlight_radius * 200.0).round();
    let hard_stop = ((1.0 - props.spotlight_softness.clamp(0.0, 1.0)) * 60.0).round();

    let onmousemove = {
        let spotlight = spotlight.clone();
        Callback::from(move |e: MouseEvent| spotlight.set(Some((e.client_x(), e.client_y()))))
    };

    let spotlight_style = match *spotlight {
        Some((x, y)) => format!("left: {x}px; top: {y}px;"),
        None => "left: 50%; top: 50%;".to_string(),
    };

    html! {
        <div
            class="gradient-blinds"
            style={format!("background: linear-gradient({}deg, {stops}); mix-blend-mode: {};", props.angle, props.mix_blend_mode)}
            {onmousemove}
        >
            <div class="blinds-row">
                { for (0..count).map(|_| html! {
                    <div
                        class="blind"
                        style={format!("background: linear-gradient({shine}, rgba(255, 255, 255, 0.28), rgba(255, 255, 255, 0) 55%, rgba(0, 0, 0, 0.18));")}
                    ></div>
                }) }
            </div>
            <div
                class="blinds-spotlight"
                style={format!(
                    "{spotlight_style} width: {diameter_vmin}vmin; height: {diameter_vmin}vmin; opacity: {}; \
                     transition: left {lag_s}s ease-out, top {lag_s}s ease-out; \
                     background: radial-gradient(circle, rgba(255, 255, 255, 0.55) {hard_stop}%, rgba(255, 255, 255, 0) 70%);",
                    props.spotlight_opacity.clamp(0.0, 1.0)
                )}
            ></div>
            <div class="blinds-noise" style={format!("opacity: {};", (props.noise * 0.4).clamp(0.0, 1.0))}></div>
            <style>
                {r#"
                .gradient-blinds {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .blinds-row {
                    position: absolute;
                    inset: 0;
                    display: flex;
                }
                .blind {
                    flex: 1;
                    height: 100%;
                }
                .blinds-spotlight {
                    position: absolute;
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    pointer-events: none;
                    mix-blend-mode: soft-light;
                }
                .blinds-noise {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background-image: repeating-linear-gradient(45deg, rgba(255, 255, 255, 0.06) 0 1px, transparent 1px 3px);
                }
                "#}
            </style>
        </div>
    }
}
