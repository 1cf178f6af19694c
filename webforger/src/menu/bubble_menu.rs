use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::config::MenuItem;
use crate::device::viewport_width;
use crate::menu::bus::{MenuBus, MenuSignal};
use crate::menu::controller::{
    AnimationSettings, ItemPose, MenuCommand, MenuController, MenuPhase, Navigation, LABEL_LAG,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BubbleMenuProps {
    pub items: Vec<MenuItem>,
    #[prop_or_default]
    pub on_menu_click: Option<Callback<bool>>,
    #[prop_or(AttrValue::Static("Toggle menu"))]
    pub menu_aria_label: AttrValue,
    #[prop_or(AttrValue::Static("#fff"))]
    pub menu_bg: AttrValue,
    #[prop_or(AttrValue::Static("#111"))]
    pub menu_content_color: AttrValue,
    #[prop_or(false)]
    pub use_fixed_position: bool,
    #[prop_or_default]
    pub animation: AnimationSettings,
    #[prop_or_default]
    pub class: Classes,
}

fn pill_style(pose: &ItemPose, item: &MenuItem, props: &BubbleMenuProps, ease: &str) -> String {
    format!(
        "--item-rot: {}deg; --pill-scale: {}; --pill-delay: {}s; --pill-duration: {}s; --pill-ease: {}; \
         --label-delay: {}s; --pill-bg: {}; --pill-color: {}; --hover-bg: {}; --hover-color: {};",
        pose.rotation,
        pose.scale,
        pose.delay_s,
        pose.duration_s,
        ease,
        pose.delay_s + pose.duration_s * LABEL_LAG,
        props.menu_bg,
        props.menu_content_color,
        item.hover_bg,
        item.hover_color,
    )
}

fn label_style(pose: &ItemPose) -> String {
    format!(
        "--label-y: {}px; --label-opacity: {};",
        pose.label_y, pose.label_opacity
    )
}

#[function_component(BubbleMenu)]
pub fn bubble_menu(props: &BubbleMenuProps) -> Html {
    let controller = {
        let rotations: Vec<f64> = props.items.iter().map(|item| item.rotation).collect();
        let settings = props.animation.clone();
        use_reducer(move || MenuController::<Route>::new(rotations, settings))
    };
    let navigator = use_navigator();
    let bus = use_context::<MenuBus>();

    // Signals from elsewhere in the app, e.g. the home intro.
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |bus: &Option<MenuBus>| {
                let subscription = bus.as_ref().map(|bus| {
                    bus.subscribe(Callback::from(move |signal| match signal {
                        MenuSignal::Open => controller.dispatch(MenuCommand::Open {
                            viewport_width: viewport_width(),
                        }),
                        MenuSignal::Close => controller.dispatch(MenuCommand::Close),
                    }))
                });
                move || drop(subscription)
            },
            bus,
        );
    }

    // Report back when the running entrance or exit is done. Dropping the
    // timeout on a newer phase or generation cancels it.
    {
        let controller_handle = controller.clone();
        let phase = controller.phase();
        let generation = controller.generation();
        let duration_ms = controller.animation_ms();
        use_effect_with_deps(
            move |&(phase, generation, duration_ms): &(MenuPhase, u64, u32)| {
                let timeout = matches!(phase, MenuPhase::Opening | MenuPhase::Closing).then(|| {
                    Timeout::new(duration_ms, move || {
                        controller_handle.dispatch(MenuCommand::AnimationFinished(generation));
                    })
                });
                move || drop(timeout)
            },
            (phase, generation, duration_ms),
        );
    }

    {
        let navigation = controller.navigation().cloned();
        use_effect_with_deps(
            move |navigation: &Option<Navigation<Route>>| {
                if let (Some(navigation), Some(navigator)) = (navigation, navigator) {
                    log::info!("Menu navigating to {}", navigation.route.to_path());
                    navigator.push(&navigation.route);
                }
                || ()
            },
            navigation,
        );
    }

    {
        let on_menu_click = props.on_menu_click.clone();
        let mounted = use_mut_ref(|| false);
        use_effect_with_deps(
            move |open: &bool| {
                if std::mem::replace(&mut *mounted.borrow_mut(), true) {
                    if let Some(on_menu_click) = on_menu_click {
                        on_menu_click.emit(*open);
                    }
                }
                || ()
            },
            controller.is_open(),
        );
    }

    {
        let controller = controller.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                controller.dispatch(MenuCommand::Escape);
            }
        });
    }

    {
        let controller = controller.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            controller.dispatch(MenuCommand::Resize {
                viewport_width: viewport_width(),
            });
        });
    }

    let on_toggle = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            controller.dispatch(MenuCommand::Toggle {
                viewport_width: viewport_width(),
            });
        })
    };

    let on_backdrop = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.dispatch(MenuCommand::Close))
    };

    let is_open = controller.is_open();
    let position = if props.use_fixed_position { "fixed" } else { "absolute" };
    let phase_class = match controller.phase() {
        MenuPhase::Opening => "entering",
        MenuPhase::Open => "shown",
        MenuPhase::Closing => "leaving",
        MenuPhase::Closed => "",
    };
    let settings = controller.settings();
    let ease = match controller.phase() {
        MenuPhase::Closing | MenuPhase::Closed => settings.exit_ease.to_css(),
        MenuPhase::Opening | MenuPhase::Open => settings.ease.to_css(),
    };

    html! {
        <>
            <nav class={classes!("bubble-menu", position, props.class.clone())} aria-label="Main navigation">
                <div class="menu-toggle">
                    <button
                        type="button"
                        class={classes!("bubble", "toggle-bubble", "menu-btn", is_open.then_some("open"))}
                        onclick={on_toggle}
                        aria-label={props.menu_aria_label.clone()}
                        aria-pressed={is_open.to_string()}
                        style={format!("background: {};", props.menu_bg)}
                    >
                        <span class="menu-line" style={format!("background: {};", props.menu_content_color)} />
                        <span class="menu-line short" style={format!("background: {};", props.menu_content_color)} />
                    </button>
                </div>
            </nav>
            {
                if controller.overlay_visible() {
                    html! {
                        <div class={classes!("bubble-menu-items", position, phase_class)} aria-hidden={(!is_open).to_string()}>
                            <div class="bubble-menu-backdrop" onclick={on_backdrop} aria-hidden="true"></div>
                            <ul class="pill-list" role="menu" aria-label="Menu links">
                                { for props.items.iter().zip(controller.poses()).enumerate().map(|(idx, (item, pose))| {
                                    let onclick = {
                                        let controller = controller.clone();
                                        let route = item.route.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.prevent_default();
                                            controller.dispatch(MenuCommand::ItemClicked(route.clone()));
                                        })
                                    };
                                    html! {
                                        <li key={idx} role="none" class="pill-col">
                                            <a
                                                role="menuitem"
                                                href={item.route.to_path()}
                                                aria-label={item.aria_label}
                                                class="pill-link"
                                                {onclick}
                                                style={pill_style(pose, item, props, ease)}
                                            >
                                                <span class="pill-label" style={label_style(pose)}>{item.label}</span>
                                            </a>
                                        </li>
                                    }
                                }) }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .bubble-menu {
                    left: 0;
                    right: 0;
                    top: 2em;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                    padding: 0 2em;
                    pointer-events: none;
                    z-index: 1001;
                }
                .bubble-menu.fixed { position: fixed; }
                .bubble-menu.absolute { position: absolute; }
                .bubble-menu .bubble {
                    --bubble-size: 48px;
                    width: var(--bubble-size);
                    height: var(--bubble-size);
                    border-radius: 50%;
                    border: none;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.12);
                    display: inline-flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    pointer-events: auto;
                    cursor: pointer;
                }
                .menu-line {
                    width: 26px;
                    height: 2px;
                    border-radius: 2px;
                    display: block;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .menu-line.short { width: 18px; }
                .menu-btn.open .menu-line:first-child { transform: translateY(4px) rotate(45deg); }
                .menu-btn.open .menu-line.short { width: 26px; transform: translateY(-4px) rotate(-45deg); }
                .bubble-menu-items {
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .bubble-menu-items.fixed { position: fixed; }
                .bubble-menu-items.absolute { position: absolute; }
                .bubble-menu-backdrop {
                    position: absolute;
                    inset: 0;
                    background: transparent;
                }
                .pill-list {
                    position: relative;
                    list-style: none;
                    margin: 0;
                    padding: 0 24px;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 24px 0;
                    max-width: 1600px;
                    width: 100%;
                }
                .pill-col {
                    display: flex;
                    justify-content: center;
                    flex: 0 0 calc(100% / 3);
                }
                .pill-col:nth-child(4) { margin-left: calc(100% / 6); }
                .pill-col:nth-child(5) { margin-right: calc(100% / 6); }
                .pill-link {
                    width: 100%;
                    min-height: 160px;
                    padding: 0 24px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 999px;
                    background: var(--pill-bg);
                    color: var(--pill-color);
                    text-decoration: none;
                    font-size: clamp(1.5rem, 4vw, 4rem);
                    font-weight: 400;
                    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.1);
                    transform: rotate(var(--item-rot)) scale(var(--pill-scale));
                    transition: background 0.3s ease, color 0.3s ease;
                    will-change: transform;
                }
                .pill-link:hover {
                    background: var(--hover-bg);
                    color: var(--hover-color);
                }
                .pill-label {
                    display: inline-block;
                    opacity: var(--label-opacity);
                    transform: translateY(var(--label-y));
                }
                .entering .pill-link {
                    animation: pill-in var(--pill-duration) var(--pill-ease) var(--pill-delay) both;
                }
                .entering .pill-label {
                    animation: label-in var(--pill-duration) var(--pill-ease) var(--label-delay) both;
                }
                .leaving .pill-link {
                    transition: transform var(--pill-duration) var(--pill-ease);
                }
                .leaving .pill-label {
                    transition: transform var(--pill-duration) var(--pill-ease), opacity var(--pill-duration) var(--pill-ease);
                }
                @keyframes pill-in {
                    from { transform: rotate(var(--item-rot)) scale(0); }
                    to { transform: rotate(var(--item-rot)) scale(1); }
                }
                @keyframes label-in {
                    from { transform: translateY(24px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 899px) {
                    .pill-col,
                    .pill-col:nth-child(4),
                    .pill-col:nth-child(5) {
                        flex: 0 0 100%;
                        margin: 0;
                    }
                    .pill-link {
                        min-height: 80px;
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
