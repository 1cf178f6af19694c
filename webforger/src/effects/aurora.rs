use yew::prelude::*;

use super::motion::{animation_css, gradient_stops};

#[derive(Properties, PartialEq)]
pub struct AuroraProps {
    pub color_stops: Vec<AttrValue>,
    #[prop_or(1.0)]
    pub amplitude: f64,
    /// 0 is hard-edged, 1 fully feathered.
    #[prop_or(0.5)]
    pub blend: f64,
    #[prop_or(1.0)]
    pub speed: f64,
}

#[function_component(Aurora)]
pub fn aurora(props: &AuroraProps) -> Html {
    let colors: Vec<&str> = props.color_stops.iter().map(|c| &**c).collect();
    let stops = gradient_stops(&colors);
    let amplitude = (props.amplitude.max(0.0) * 12.0).round();
    let blur = (props.blend.clamp(0.0, 1.0) * 80.0).round();

    html! {
        <div class="aurora" style={format!("--aurora-amp: {amplitude}%;")}>
            { for (0..3).map(|band| {
                let style = format!(
                    "top: {}%; background: linear-gradient(90deg, {stops}); filter: blur({blur}px); \
                     opacity: {}; animation: {};",
                    -10 + band * 8,
                    0.9 - f64::from(band) * 0.2,
                    animation_css(
                        "auroraWave",
                        8.0 + f64::from(band) * 3.0,
                        props.speed,
                        if band % 2 == 0 { "alternate" } else { "alternate-reverse" },
                    ),
                );
                html! { <div class="aurora-band" {style}></div> }
            }) }
            <style>
                {r#"
                .aurora {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .aurora-band {
                    position: absolute;
                    left: -25%;
                    width: 150%;
                    height: 45%;
                    border-radius: 0 0 50% 50%;
                    mix-blend-mode: screen;
                    transform-origin: center top;
                }
                @keyframes auroraWave {
                    0% { transform: translateY(0) scaleY(1) skewX(-6deg); }
                    50% { transform: translateY(var(--aurora-amp)) scaleY(1.25) skewX(4deg); }
                    100% { transform: translateY(calc(var(--aurora-amp) * -0.5)) scaleY(0.9) skewX(8deg); }
                }
                "#}
            </style>
        </div>
    }
}
