use crate::menu::controller::AnimationSettings;
use crate::Route;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Razorpay key id, overridable at build time.
pub fn razorpay_key() -> &'static str {
    option_env!("WEBFORGER_RAZORPAY_KEY").unwrap_or("YOUR_RAZORPAY_KEY_ID")
}

pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";
/// In the smallest currency unit (paise).
pub const PAYMENT_AMOUNT: u32 = 50000;
pub const PAYMENT_CURRENCY: &str = "INR";
pub const PAYMENT_THEME_COLOR: &str = "#8b5cf6";

pub const BRAND_NAME: &str = "Webforger";
pub const BRAND_LOGO: &str = "/Webforger.png";

pub const CONTACT_EMAIL: &str = "webforgerhelp@gmail.com";
pub const CONTACT_PHONES: &[&str] = &["+1 (647) 963-1595", "+91 897 133 8163"];

pub const LOADER_SEEN_KEY: &str = "webforger_loader_seen";

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
    pub aria_label: &'static str,
    pub rotation: f64,
    pub hover_bg: &'static str,
    pub hover_color: &'static str,
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Home",
            route: Route::Home,
            aria_label: "Home",
            rotation: -8.0,
            hover_bg: "#3b82f6",
            hover_color: "#ffffff",
        },
        MenuItem {
            label: "About",
            route: Route::About,
            aria_label: "About",
            rotation: 8.0,
            hover_bg: "#10b981",
            hover_color: "#ffffff",
        },
        MenuItem {
            label: "Plans",
            route: Route::Plans,
            aria_label: "Plans",
            rotation: 8.0,
            hover_bg: "#f59e0b",
            hover_color: "#ffffff",
        },
        MenuItem {
            label: "Blog",
            route: Route::Blog,
            aria_label: "Blog",
            rotation: 8.0,
            hover_bg: "#ef4444",
            hover_color: "#ffffff",
        },
        MenuItem {
            label: "Contact",
            route: Route::Contact,
            aria_label: "Contact",
            rotation: -8.0,
            hover_bg: "#8b5cf6",
            hover_color: "#ffffff",
        },
    ]
}

pub fn menu_animation() -> AnimationSettings {
    AnimationSettings {
        duration_s: 0.5,
        stagger_s: 0.12,
        ..AnimationSettings::default()
    }
}
