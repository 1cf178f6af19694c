use yew::prelude::*;

use super::motion::{animation_css, hex_to_rgba};

#[derive(Properties, PartialEq)]
pub struct ColorBendsProps {
    pub colors: Vec<AttrValue>,
    #[prop_or(0.2)]
    pub speed: f64,
    /// Degrees.
    #[prop_or(0.0)]
    pub rotation: f64,
    #[prop_or(1.0)]
    pub scale: f64,
    #[prop_or(1.0)]
    pub warp_strength: f64,
    #[prop_or(0.1)]
    pub noise: f64,
    #[prop_or(true)]
    pub transparent: bool,
}

/// Slowly drifting, blurred colour bands behind a page.
#[function_component(ColorBends)]
pub fn color_bends(props: &ColorBendsProps) -> Html {
    let count = props.colors.len().max(1);
    let blur = (60.0 * props.warp_strength.max(0.0)).round();
    let background = if props.transparent { "transparent" } else { "#060010" };

    html! {
        <div
            class="color-bends"
            style={format!(
                "background: {background}; transform: rotate({}deg) scale({});",
                props.rotation, props.scale
            )}
        >
            { for props.colors.iter().enumerate().map(|(i, color)| {
                let glow = hex_to_rgba(color, 0.85).unwrap_or_else(|| color.to_string());
                let left = (i as f64 + 0.5) * 100.0 / count as f64 - 30.0;
                let direction = if i % 2 == 0 { "alternate" } else { "alternate-reverse" };
                let style = format!(
                    "left: {left:.1}%; background: radial-gradient(ellipse at center, {glow} 0%, transparent 70%); \
                     filter: blur({blur}px); animation: {}; animation-delay: -{}s;",
                    animation_css("colorBendsDrift", 18.0 + 4.0 * i as f64, props.speed, direction),
                    i * 3,
                );
                html! { <div class="color-bend" {style}></div> }
            }) }
            <div class="color-bends-noise" style={format!("opacity: {};", props.noise.clamp(0.0, 1.0))}></div>
            <style>
                {r#"
                .color-bends {
                    position: fixed;
                    inset: 0;
                    width: 100vw;
                    height: 100vh;
                    z-index: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .color-bend {
                    position: absolute;
                    top: -20%;
                    width: 60%;
                    height: 140%;
                    mix-blend-mode: screen;
                    border-radius: 50%;
                }
                .color-bends-noise {
                    position: absolute;
                    inset: 0;
                    background-image: repeating-radial-gradient(circle at 0 0, rgba(255, 255, 255, 0.08) 0 1px, transparent 1px 3px);
                }
                @keyframes colorBendsDrift {
                    0% { transform: translate(-10%, -6%) rotate(-8deg) skewX(-6deg); }
                    50% { transform: translate(8%, 4%) rotate(6deg) skewX(8deg); }
                    100% { transform: translate(14%, -4%) rotate(12deg) skewX(-4deg); }
                }
                "#}
            </style>
        </div>
    }
}
