use yew::prelude::*;
use stylist::yew::{styled_component, Global};
use log::info;

mod carousel;
mod config;
mod components {
    pub mod carousel_view;
}

use components::carousel_view::Carousel;

#[styled_component]
fn App() -> Html {
    let stage = css!(
        r#"
        position: relative;
        width: 100vw;
        height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        z-index: 1;
        "#
    );
    let header = css!(
        r#"
        font-family: 'Cinzel Decorative', serif;
        font-size: 4.5rem;
        color: #FFD700;
        letter-spacing: 0.18em;
        text-shadow: 0 0 24px #FFD700, 0 0 48px #FFD70088, 0 0 96px #fff2;
        filter: drop-shadow(0 0 18px #FFD70088);
        margin-bottom: 2.5rem;
        margin-top: 2.5rem;
        user-select: none;
        pointer-events: none;
        text-align: center;
        animation: disha-shimmer 2.5s infinite alternate;

        @media (max-width: 900px) {
            font-size: 2.2rem;
            margin-top: 1.2rem;
        }
        "#
    );

    html! {
        <>
            <Global css={css!(
                r#"
                body {
                    background: #0a090f;
                    color: #fff;
                    margin: 0;
                    padding: 0;
                    overflow: hidden;
                    font-family: 'Playfair Display', serif;
                }
                .lux-bg {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                    background:
                        radial-gradient(ellipse at 50% 40%, rgba(255, 215, 0, 0.08), transparent 60%),
                        radial-gradient(ellipse at 50% 120%, rgba(255, 215, 0, 0.06), transparent 50%);
                }
                .carousel-image {
                    position: absolute;
                    top: -50%;
                    left: 34%;
                    object-fit: cover;
                    border-radius: 2.5rem;
                    box-shadow: 0 0 48px 8px #FFD70044, 0 0 0 4px #FFD70088;
                    user-select: none;
                    will-change: transform, opacity, filter;
                    pointer-events: none;
                }
                @keyframes disha-enter {
                    from {
                        opacity: var(--enter-opacity);
                        scale: var(--enter-scale);
                    }
                }
                @keyframes disha-shimmer {
                    0% { filter: drop-shadow(0 0 16px #FFD70088) drop-shadow(0 0 32px #FFD70044); }
                    50% { filter: drop-shadow(0 0 32px #FFD700cc) drop-shadow(0 0 64px #FFD70088); }
                    100% { filter: drop-shadow(0 0 16px #FFD70088) drop-shadow(0 0 32px #FFD70044); }
                }
                "#
            )} />
            <div class="lux-bg"></div>
            <div class={stage}>
                <h1 class={header}>{"DISHA"}</h1>
                <Carousel images={config::GALLERY} />
            </div>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Disha with {} images", config::GALLERY.len());
    yew::Renderer::<App>::new().render();
}
