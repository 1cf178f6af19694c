//! Coarse device classification from the viewport width, shared through
//! context so pages don't each install their own resize listener.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::window;

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const LAPTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Laptop,
}

impl DeviceType {
    pub fn from_width(width: f64) -> Self {
        if width < TABLET_MIN_WIDTH {
            DeviceType::Mobile
        } else if width < LAPTOP_MIN_WIDTH {
            DeviceType::Tablet
        } else {
            DeviceType::Laptop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Laptop => "laptop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceContext {
    pub device: DeviceType,
    pub width: f64,
}

impl DeviceContext {
    pub fn from_width(width: f64) -> Self {
        Self {
            device: DeviceType::from_width(width),
            width,
        }
    }

    /// Narrow enough that the contact page suggests a laptop. Unlike the
    /// device bands this includes a 768px portrait tablet.
    pub fn wants_laptop_notice(&self) -> bool {
        self.width <= TABLET_MIN_WIDTH
    }
}

/// Current `window.innerWidth`, or 0 outside a browser.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct DeviceProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DeviceProvider)]
pub fn device_provider(props: &DeviceProviderProps) -> Html {
    let context = use_state(|| DeviceContext::from_width(viewport_width()));

    {
        let context = context.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            let next = DeviceContext::from_width(viewport_width());
            if next != *context {
                context.set(next);
            }
        });
    }

    use_effect_with_deps(
        |device: &DeviceType| {
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("data-device", device.as_str());
            }
            || ()
        },
        context.device,
    );

    html! {
        <ContextProvider<DeviceContext> context={*context}>
            { for props.children.iter() }
        </ContextProvider<DeviceContext>>
    }
}

/// Device info from the nearest [`DeviceProvider`], or a laptop default when
/// rendered outside one.
#[hook]
pub fn use_device() -> DeviceContext {
    use_context::<DeviceContext>().unwrap_or_else(|| DeviceContext::from_width(LAPTOP_MIN_WIDTH))
}
