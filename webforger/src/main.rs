use yew::prelude::*;
use yew_router::prelude::*;
use stylist::yew::{styled_component, Global};
use log::info;

mod config;
mod device;
mod loader;
mod payment;
mod wizard;
mod menu {
    pub mod bus;
    pub mod controller;
    pub mod bubble_menu;
}
mod components {
    pub mod stepper;
    pub mod text_type;
}
mod effects {
    pub mod motion;
    pub mod aurora;
    pub mod color_bends;
    pub mod gradient_blinds;
    pub mod plasma;
    pub mod squares;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod plans;
    pub mod blog;
    pub mod contact;
}

use device::DeviceProvider;
use loader::Loader;
use menu::bubble_menu::BubbleMenu;
use menu::bus::MenuBus;
use pages::{
    about::About,
    blog::Blog,
    contact::Contact,
    home::Home,
    plans::Plans,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/plans")]
    Plans,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Plans => {
            info!("Rendering Plans page");
            html! { <Plans /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

/// Remounts the page on every route change so it fades in.
#[function_component(RouteView)]
fn route_view() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <div class="route-fade" key={route.to_path()}>
            <Switch<Route> render={switch} />
        </div>
    }
}

#[function_component(BrandLink)]
fn brand_link() -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="brand-link">
            <img src={config::BRAND_LOGO} alt={config::BRAND_NAME} class="brand-logo" />
            <span class="brand-text">{ config::BRAND_NAME }</span>
        </Link<Route>>
    }
}

#[styled_component]
fn App() -> Html {
    let menu_bus = use_state(MenuBus::new);
    let loader_seen = use_state(loader::session_seen);

    let on_loader_done = {
        let loader_seen = loader_seen.clone();
        Callback::from(move |_: ()| {
            loader::mark_session_seen();
            loader_seen.set(true);
        })
    };

    let on_menu_click = Callback::from(|open: bool| {
        info!("Menu {}", if open { "opened" } else { "closed" });
    });

    html! {
        <BrowserRouter>
            <Global css={css!(
                r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    min-height: 100%;
                    background: #060010;
                    color: #ffffff;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
                    overflow-x: hidden;
                }
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                .route-fade {
                    animation: routeFade 0.35s ease-out;
                }
                @keyframes routeFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .brand-link {
                    position: fixed;
                    top: 1.5rem;
                    left: 1.5rem;
                    z-index: 1001;
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: #ffffff;
                }
                .brand-logo {
                    height: 40px;
                    width: auto;
                }
                .brand-text {
                    font-family: 'Archivo Black', system-ui, sans-serif;
                    font-size: 1.25rem;
                    letter-spacing: 0.02em;
                }
                html[data-device="mobile"] .brand-text {
                    display: none;
                }
                "#
            )} />
            <DeviceProvider>
                <ContextProvider<MenuBus> context={(*menu_bus).clone()}>
                    if !*loader_seen {
                        <Loader on_done={on_loader_done} />
                    }
                    <BrandLink />
                    <BubbleMenu
                        items={config::menu_items()}
                        menu_aria_label="Toggle navigation"
                        menu_bg="#ffffff"
                        menu_content_color="#111111"
                        use_fixed_position={true}
                        animation={config::menu_animation()}
                        on_menu_click={Some(on_menu_click)}
                    />
                    <RouteView />
                </ContextProvider<MenuBus>>
            </DeviceProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
