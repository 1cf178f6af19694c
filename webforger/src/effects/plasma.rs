use yew::prelude::*;

use super::motion::{animation_css, hex_to_rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlasmaDirection {
    Forward,
    Reverse,
    PingPong,
}

impl PlasmaDirection {
    fn as_css(self) -> &'static str {
        match self {
            PlasmaDirection::Forward => "normal",
            PlasmaDirection::Reverse => "reverse",
            PlasmaDirection::PingPong => "alternate",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PlasmaProps {
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
    #[prop_or(1.0)]
    pub speed: f64,
    #[prop_or(PlasmaDirection::Forward)]
    pub direction: PlasmaDirection,
    #[prop_or(1.0)]
    pub scale: f64,
    #[prop_or(1.0)]
    pub opacity: f64,
    #[prop_or(true)]
    pub mouse_interactive: bool,
}

#[function_component(Plasma)]
pub fn plasma(props: &PlasmaProps) -> Html {
    // Pointer position as a fraction of the viewport, centred on 0.
    let tilt = use_state(|| (0.0_f64, 0.0_f64));

    let onmousemove = props.mouse_interactive.then(|| {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            tilt.set((
                f64::from(e.client_x()) / width.max(1.0) - 0.5,
                f64::from(e.client_y()) / height.max(1.0) - 0.5,
            ));
        })
    });

    let strong = hex_to_rgba(&props.color, 0.9).unwrap_or_else(|| props.color.to_string());
    let soft = hex_to_rgba(&props.color, 0.35).unwrap_or_else(|| props.color.to_string());
    let (tx, ty) = *tilt;
    let field_style = format!(
        "background: \
            radial-gradient(circle at 30% 35%, {strong} 0%, transparent 45%), \
            radial-gradient(circle at 70% 60%, {soft} 0%, transparent 50%), \
            conic-gradient(from 0deg at 50% 50%, {soft}, transparent, {strong}, transparent, {soft}); \
         transform: translate({:.1}%, {:.1}%) scale({}); animation: {};",
        tx * 6.0,
        ty * 6.0,
        props.scale,
        animation_css("plasmaSwirl", 14.0, props.speed, props.direction.as_css()),
    );

    html! {
        <div class="plasma" style={format!("opacity: {};", props.opacity.clamp(0.0, 1.0))} {onmousemove}>
            <div class="plasma-field" style={field_style}></div>
            <style>
                {r#"
                .plasma {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .plasma-field {
                    position: absolute;
                    inset: -25%;
                    filter: blur(40px) saturate(1.4);
                    transition: transform 0.6s ease-out;
                }
                @keyframes plasmaSwirl {
                    from { rotate: 0deg; }
                    to { rotate: 360deg; }
                }
                "#}
            </style>
        </div>
    }
}
