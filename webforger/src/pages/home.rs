#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::text_type::{SpeedRange, TextType};
use crate::effects::color_bends::ColorBends;
use crate::menu::bus::{MenuBus, MenuSignal};

const INTRO: [&str; 2] = [
    "We provide experiences not just a use-case!",
    "Here, at WebForger we care.",
];
const MENU_OPEN_DELAY_MS: u32 = 800;
/// Sentence whose first appearance opens the menu.
const MENU_SENTENCE: usize = 1;

/// Fires the first time a given sentence has been typed, never again for
/// the lifetime of the page.
#[derive(Debug, Default)]
struct OnceTrigger {
    fired: bool,
}

impl OnceTrigger {
    fn on_sentence_typed(&mut self, index: usize) -> bool {
        if self.fired || index != MENU_SENTENCE {
            return false;
        }
        self.fired = true;
        true
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let bus = use_context::<MenuBus>();
    let trigger = use_mut_ref(OnceTrigger::default);
    let pending_open = use_mut_ref(|| None::<Timeout>);

    let on_sentence_typed = Callback::from(move |(_, index): (String, usize)| {
        if !trigger.borrow_mut().on_sentence_typed(index) {
            return;
        }
        let Some(bus) = bus.clone() else {
            log::warn!("No menu bus in context, intro cannot open the menu");
            return;
        };
        *pending_open.borrow_mut() = Some(Timeout::new(MENU_OPEN_DELAY_MS, move || {
            let delivered = bus.dispatch(MenuSignal::Open);
            log::debug!("Intro opened the menu ({} listeners)", delivered);
        }));
    });

    html! {
        <>
            <ColorBends
                colors={vec![
                    AttrValue::Static("#5d0011ff"),
                    AttrValue::Static("#009264ff"),
                    AttrValue::Static("#2b00ffff"),
                ]}
                rotation={0.0}
                speed={0.2}
                scale={1.0}
                warp_strength={1.0}
                noise={0.1}
                transparent={true}
            />
            <div class="home-intro">
                <TextType
                    text={INTRO.iter().map(|s| s.to_string()).collect::<Vec<_>>()}
                    typing_speed={80}
                    pause_duration={2200}
                    deleting_speed={60}
                    show_cursor={true}
                    cursor_character="|"
                    cursor_blink_duration={0.5}
                    variable_speed={Some(SpeedRange { min_ms: 60, max_ms: 100 })}
                    looped={true}
                    on_sentence_typed={Some(on_sentence_typed)}
                />
            </div>
            <style>
                {r#"
                .home-intro {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    text-align: center;
                    font-size: 4rem;
                    font-weight: bold;
                    color: #ffffff;
                    max-width: 90%;
                    z-index: 10;
                    font-family: 'Bookman Old Style', serif;
                }
                @media (max-width: 768px) {
                    .home-intro {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
