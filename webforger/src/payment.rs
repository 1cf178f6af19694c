//! Razorpay checkout. The widget is loaded from Razorpay's CDN on demand and
//! opened with a fixed amount; the success handler only logs and alerts.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, window, HtmlScriptElement};

use crate::config;
use crate::wizard::ContactForm;

#[wasm_bindgen]
extern "C" {
    type Razorpay;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Razorpay, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &Razorpay);
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("no browser window available")]
    NoWindow,
    #[error("checkout widget is not loaded yet")]
    WidgetMissing,
    #[error("could not build checkout options: {0}")]
    Options(String),
    #[error("checkout widget failed: {0}")]
    Widget(String),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub color: &'static str,
}

/// Configuration handed to the Razorpay constructor. The success handler is
/// attached separately since it is a JS function.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CheckoutOptions {
    pub key: &'static str,
    pub amount: u32,
    pub currency: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub prefill: Prefill,
    pub theme: Theme,
}

impl CheckoutOptions {
    pub fn for_contact(form: &ContactForm) -> Self {
        Self {
            key: config::razorpay_key(),
            amount: config::PAYMENT_AMOUNT,
            currency: config::PAYMENT_CURRENCY,
            name: config::BRAND_NAME,
            description: "Service Payment",
            image: config::BRAND_LOGO,
            prefill: Prefill {
                name: form.full_name(),
                email: form.email.clone(),
                contact: String::new(),
            },
            theme: Theme {
                color: config::PAYMENT_THEME_COLOR,
            },
        }
    }
}

/// Adds the checkout script to `<head>` unless it is already there.
pub fn ensure_checkout_script() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(_)) = document.query_selector("script[data-razorpay-checkout]") {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(script) = document
        .create_element("script")
        .map(|el| el.unchecked_into::<HtmlScriptElement>())
    else {
        return;
    };
    script.set_src(config::CHECKOUT_SCRIPT_URL);
    script.set_async(true);
    let _ = script.set_attribute("data-razorpay-checkout", "");
    if head.append_child(&script).is_ok() {
        log::debug!("Injected checkout script");
    }
}

fn widget_loaded() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Razorpay")).unwrap_or(false))
        .unwrap_or(false)
}

/// Opens the checkout widget prefilled from `form`.
pub fn open_checkout(form: &ContactForm) -> Result<(), PaymentError> {
    let window = window().ok_or(PaymentError::NoWindow)?;
    if !widget_loaded() {
        return Err(PaymentError::WidgetMissing);
    }

    let options = CheckoutOptions::for_contact(form);
    let options = serde_wasm_bindgen::to_value(&options)
        .map_err(|e| PaymentError::Options(e.to_string()))?;

    let submitted = serde_wasm_bindgen::to_value(form).unwrap_or(JsValue::NULL);
    let handler = Closure::wrap(Box::new(move |response: JsValue| {
        let payment_id = js_sys::Reflect::get(&response, &JsValue::from_str("razorpay_payment_id"))
            .ok()
            .and_then(|id| id.as_string())
            .unwrap_or_default();
        let _ = window.alert_with_message(&format!("Payment successful! Payment ID: {}", payment_id));
        gloo_console::log!("Form Data:", submitted.clone());
    }) as Box<dyn FnMut(JsValue)>);
    js_sys::Reflect::set(&options, &JsValue::from_str("handler"), &handler.into_js_value())
        .map_err(|e| PaymentError::Options(format!("{:?}", e)))?;

    let checkout = Razorpay::new(&options).map_err(|e| PaymentError::Widget(format!("{:?}", e)))?;
    checkout.open();
    log::info!("Opened checkout for {}", form.full_name());
    Ok(())
}
