//! First-visit loading screen.
//!
//! Waits for the window `load` event or a fallback timeout, whichever comes
//! first, then keeps the screen up until a minimum display time has passed
//! since it mounted. Whether it has already been shown this session is owned
//! by the app and mirrored to `sessionStorage`.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use futures::channel::oneshot;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, window};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderTiming {
    pub fallback_ms: u32,
    pub min_display_ms: u32,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            fallback_ms: 3000,
            min_display_ms: 1200,
        }
    }
}

impl LoaderTiming {
    /// How much longer the screen has to stay after `elapsed_ms`.
    pub fn remaining_display_ms(&self, elapsed_ms: u32) -> u32 {
        self.min_display_ms.saturating_sub(elapsed_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    TimedOut,
}

pub fn session_seen() -> bool {
    window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(config::LOADER_SEEN_KEY).ok().flatten())
        .is_some()
}

pub fn mark_session_seen() {
    if let Some(storage) = window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.set_item(config::LOADER_SEEN_KEY, "1");
    }
}

/// Resolves once the window has fired `load`, immediately if it already has.
async fn window_loaded() {
    let Some(window) = window() else {
        return;
    };
    let already_loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(true);
    if already_loaded {
        return;
    }

    let (tx, rx) = oneshot::channel::<()>();
    let on_load = Closure::once(move || {
        let _ = tx.send(());
    });
    if window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    on_load.forget();
    let _ = rx.await;
}

async fn wait_for_load(fallback_ms: u32) -> LoadOutcome {
    let load = Box::pin(window_loaded());
    match select(load, TimeoutFuture::new(fallback_ms)).await {
        Either::Left(_) => LoadOutcome::Loaded,
        Either::Right(_) => LoadOutcome::TimedOut,
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub on_done: Callback<()>,
    #[prop_or_default]
    pub timing: LoaderTiming,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let leaving = use_state(|| false);

    {
        let on_done = props.on_done.clone();
        let leaving = leaving.clone();
        let timing = props.timing;
        use_effect_with_deps(
            move |_| {
                let started = js_sys::Date::now();
                spawn_local(async move {
                    let outcome = wait_for_load(timing.fallback_ms).await;
                    let elapsed = (js_sys::Date::now() - started).max(0.0) as u32;
                    log::debug!("Loader finished waiting ({:?}) after {}ms", outcome, elapsed);
                    let remaining = timing.remaining_display_ms(elapsed);
                    if remaining > 0 {
                        TimeoutFuture::new(remaining).await;
                    }
                    leaving.set(true);
                    TimeoutFuture::new(400).await;
                    on_done.emit(());
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div class={classes!("site-loader", (*leaving).then_some("leaving"))} role="status" aria-live="polite">
            <img src={config::BRAND_LOGO} alt={config::BRAND_NAME} class="site-loader-logo" />
            <div class="site-loader-bar"><span></span></div>
            <style>
                {r#"
                .site-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 5000;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 24px;
                    background: #060010;
                    transition: opacity 0.4s ease;
                }
                .site-loader.leaving {
                    opacity: 0;
                    pointer-events: none;
                }
                .site-loader-logo {
                    height: 96px;
                    width: auto;
                    animation: loaderPulse 1.2s ease-in-out infinite;
                }
                .site-loader-bar {
                    width: 180px;
                    height: 3px;
                    border-radius: 3px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.1);
                }
                .site-loader-bar span {
                    display: block;
                    width: 40%;
                    height: 100%;
                    background: linear-gradient(90deg, #5227FF, #B19EEF);
                    animation: loaderSlide 1s ease-in-out infinite;
                }
                @keyframes loaderPulse {
                    0%, 100% { transform: scale(1); opacity: 0.85; }
                    50% { transform: scale(1.06); opacity: 1; }
                }
                @keyframes loaderSlide {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(250%); }
                }
                "#}
            </style>
        </div>
    }
}
