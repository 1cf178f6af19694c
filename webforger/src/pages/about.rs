use yew::prelude::*;

use crate::effects::gradient_blinds::{GradientBlinds, ShineDirection};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <GradientBlinds
                gradient_colors={vec![AttrValue::Static("#FF9FFC"), AttrValue::Static("#5227FF")]}
                angle={20.0}
                noise={0.5}
                blind_count={16}
                blind_min_width={60.0}
                spotlight_radius={0.45}
                spotlight_softness={1.0}
                spotlight_opacity={1.0}
                mouse_dampening={0.05}
                shine_direction={ShineDirection::Left}
                mix_blend_mode="lighten"
            />
            <div class="coming-soon">
                <div>{"About Us"}</div>
                <div class="coming-soon-sub">{"Coming soon!"}</div>
            </div>
            <style>
                {r#"
                .about-page {
                    width: 100%;
                    height: 100vh;
                    position: relative;
                }
                .coming-soon {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    color: white;
                    font-size: 3rem;
                    font-weight: bold;
                    z-index: 1;
                    text-align: center;
                    pointer-events: none;
                }
                .coming-soon-sub {
                    margin-top: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}
