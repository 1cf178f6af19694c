use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::stepper::Stepper;
use crate::config;
use crate::device::use_device;
use crate::effects::aurora::Aurora;
use crate::payment;
use crate::wizard::{ContactWizard, Field, Step, WizardAction};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

const TITLE_HOLD_MS: u32 = 2000;
const TITLE_EXIT_MS: u32 = 1000;
const NOTICE_DELAY_MS: u32 = 2500;
const NOTICE_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Intro {
    Holding,
    Leaving,
    Done,
}

impl Intro {
    /// The phase that follows this one and how long this one lasts.
    fn next(self) -> Option<(u32, Intro)> {
        match self {
            Intro::Holding => Some((TITLE_HOLD_MS, Intro::Leaving)),
            Intro::Leaving => Some((TITLE_EXIT_MS, Intro::Done)),
            Intro::Done => None,
        }
    }
}

fn text_input(
    wizard: &UseReducerHandle<ContactWizard>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let error = wizard.errors().get(field);
    let oninput = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(WizardAction::Set(field, input.value()));
        })
    };
    html! {
        <div class="contact-field">
            <label>{ label }</label>
            <input
                type={input_type}
                value={wizard.form().get(field).to_string()}
                {oninput}
                {placeholder}
                class={classes!("contact-input", error.then_some("invalid"))}
            />
            if error {
                <p class="contact-error">{ field.required_message() }</p>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let device = use_device();
    let wizard = use_reducer(ContactWizard::new);
    let intro = use_state(|| Intro::Holding);
    let show_notice = use_state(|| false);

    use_effect_with_deps(
        |_| {
            payment::ensure_checkout_script();
            || ()
        },
        (),
    );

    {
        let intro_handle = intro.clone();
        use_effect_with_deps(
            move |phase: &Intro| {
                let timeout = phase.next().map(|(after_ms, next)| {
                    Timeout::new(after_ms, move || intro_handle.set(next))
                });
                move || drop(timeout)
            },
            *intro,
        );
    }

    {
        let show_notice = show_notice.clone();
        use_effect_with_deps(
            move |is_mobile| {
                let timeout = is_mobile.then(|| {
                    Timeout::new(NOTICE_DELAY_MS, move || show_notice.set(true))
                });
                move || drop(timeout)
            },
            device.wants_laptop_notice(),
        );
    }

    {
        let show_notice_handle = show_notice.clone();
        use_effect_with_deps(
            move |shown| {
                let timeout = shown.then(|| {
                    Timeout::new(NOTICE_DISMISS_MS, move || show_notice_handle.set(false))
                });
                move || drop(timeout)
            },
            *show_notice,
        );
    }

    let on_next = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(WizardAction::Next))
    };
    let on_back = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(WizardAction::Back))
    };
    let on_message = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(WizardAction::Set(Field::Message, area.value()));
        })
    };
    let on_pay = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            if !wizard.completed() {
                return;
            }
            if let Err(e) = payment::open_checkout(wizard.form()) {
                log::error!("Could not open checkout: {}", e);
            }
        })
    };
    let dismiss_notice = {
        let show_notice = show_notice.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            show_notice.set(false);
        })
    };

    let completed = wizard.completed();
    let mobile = device.wants_laptop_notice();

    html! {
        <div class={classes!("contact-page", mobile.then_some("mobile"))}>
            <Aurora
                color_stops={vec![
                    AttrValue::Static("#54034d"),
                    AttrValue::Static("#B19EEF"),
                    AttrValue::Static("#5227FF"),
                ]}
                blend={0.5}
                amplitude={1.0}
                speed={1.4}
            />

            if *intro != Intro::Done {
                <div class={classes!("contact-title", (*intro == Intro::Leaving).then_some("leaving"))}>
                    <h1>{"Contact Us"}</h1>
                    <p>{"Get in touch with our team"}</p>
                </div>
            }

            if *intro == Intro::Done && !completed {
                <div class="contact-stepper fade-in">
                    <Stepper
                        current_step={wizard.step().number()}
                        {on_next}
                        {on_back}
                        back_button_text="Previous"
                        next_button_text="Next"
                    >
                        <div class="contact-step">
                            <h2>{ Step::Name.title() }</h2>
                            { text_input(&wizard, Field::FirstName, "First Name *", "text", "Enter your first name") }
                            { text_input(&wizard, Field::LastName, "Last Name *", "text", "Enter your last name") }
                        </div>
                        <div class="contact-step">
                            <h2>{ Step::Company.title() }</h2>
                            { text_input(&wizard, Field::CompanyName, "Company Name *", "text", "Enter your company name") }
                            { text_input(&wizard, Field::Email, "Email (Optional)", "email", "your.email@example.com") }
                        </div>
                        <div class="contact-step">
                            <h2>{ Step::Message.title() }</h2>
                            <div class="contact-field">
                                <label>{"Message (Optional)"}</label>
                                <textarea
                                    class="contact-input contact-textarea"
                                    rows="6"
                                    value={wizard.form().message.clone()}
                                    oninput={on_message}
                                    placeholder={format!("Send us a message directly to {}", config::CONTACT_EMAIL)}
                                />
                            </div>
                            <p class="contact-note">{ format!("Your message will be sent to {}", config::CONTACT_EMAIL) }</p>
                        </div>
                    </Stepper>
                </div>
            }

            if *intro == Intro::Done {
                <>
                <div class="contact-info contact-info-left fade-in">
                    <div class="contact-info-label">{"Contact us at"}</div>
                    { for config::CONTACT_PHONES.iter().map(|phone| html! {
                        <div class="contact-info-value">{ *phone }</div>
                    }) }
                </div>
                <div class="contact-info contact-info-right fade-in">
                    <div class="contact-info-label">{"Email at"}</div>
                    <div class="contact-info-value">{ config::CONTACT_EMAIL }</div>
                </div>
                <div class="contact-pay fade-in-up">
                    <button
                        class={classes!("pay-button", completed.then_some("ready"))}
                        onclick={on_pay}
                        disabled={!completed}
                    >
                        {"Make Payment"}
                    </button>
                </div>
                </>
            }

            if completed {
                <div class="contact-thanks fade-in">
                    { format!("Thank You, {}!", wizard.form().first_name) }
                </div>
            }

            if *show_notice && mobile {
                <div class="notice-scrim" onclick={dismiss_notice.clone()}>
                    <div class="laptop-notice" onclick={dismiss_notice}>
                        <div class="laptop-notice-title">{"💻 Best Viewed on Laptop"}</div>
                        <div class="laptop-notice-hint">{"Tap to dismiss"}</div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .contact-page {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    background: #060010;
                }
                .contact-title {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    text-align: center;
                    color: #ffffff;
                    z-index: 10;
                    font-size: 3rem;
                    font-weight: bold;
                    font-family: 'Bookman Old Style', serif;
                    transition: transform 1s ease-in-out, filter 1s ease-in-out, opacity 1s ease-in-out;
                }
                .contact-title.leaving {
                    transform: translate(calc(-50% + 100vw), -50%);
                    filter: blur(20px);
                    opacity: 0;
                }
                .contact-title p {
                    font-size: 1.5rem;
                    margin-top: 1rem;
                }
                .contact-stepper {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 90%;
                    max-width: 600px;
                    z-index: 10;
                }
                .contact-step {
                    color: #ffffff;
                    font-family: 'Archivo Black', system-ui, sans-serif;
                }
                .contact-step h2 {
                    font-size: 1.8rem;
                    margin-bottom: 1.5rem;
                }
                .contact-field {
                    margin-bottom: 1rem;
                }
                .contact-field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.9rem;
                }
                .contact-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    font-size: 1rem;
                    border-radius: 8px;
                    border: 1px solid #52525b;
                    background-color: #18181b;
                    color: #ffffff;
                    outline: none;
                }
                .contact-input.invalid {
                    border: 2px solid #ef4444;
                    background-color: #fee2e2;
                    color: #991b1b;
                }
                .contact-textarea {
                    resize: vertical;
                    font-family: system-ui, sans-serif;
                }
                .contact-error {
                    color: #ef4444;
                    font-size: 0.85rem;
                    margin-top: 0.25rem;
                }
                .contact-note {
                    font-size: 0.85rem;
                    color: #a78bfa;
                    margin-top: 1rem;
                }
                .contact-info {
                    position: absolute;
                    bottom: 2rem;
                    color: #ffffff;
                    z-index: 10;
                    font-family: 'Archivo Black', system-ui, sans-serif;
                }
                .contact-info-left { left: 10rem; }
                .contact-info-right { right: 2rem; text-align: right; }
                .contact-info-label {
                    font-size: 1rem;
                    margin-bottom: 0.3rem;
                    color: #a78bfa;
                }
                .contact-info-value {
                    font-size: 1.2rem;
                    margin-bottom: 0.2rem;
                    letter-spacing: 1px;
                    word-break: break-all;
                }
                .contact-page.mobile .contact-info-left { left: 1rem; bottom: 0; }
                .contact-page.mobile .contact-info-right { right: 1rem; bottom: 1rem; }
                .contact-page.mobile .contact-info-label { font-size: 0.65rem; }
                .contact-page.mobile .contact-info-value { font-size: 0.7rem; letter-spacing: 0.5px; }
                .contact-pay {
                    position: absolute;
                    bottom: 6rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                }
                .pay-button {
                    padding: 16px 48px;
                    font-size: 1.2rem;
                    font-weight: bold;
                    font-family: 'Archivo Black', system-ui, sans-serif;
                    background: #ffffff;
                    color: #000000;
                    border: none;
                    border-radius: 12px;
                    cursor: not-allowed;
                    box-shadow: 0 8px 24px rgba(255, 255, 255, 0.3);
                    transition: all 0.3s ease;
                    text-transform: uppercase;
                    letter-spacing: 1px;
                    opacity: 0.55;
                }
                .pay-button.ready {
                    cursor: pointer;
                    opacity: 1;
                }
                .pay-button.ready:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 12px 32px rgba(255, 255, 255, 0.5);
                }
                .contact-thanks {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    text-align: center;
                    color: #ffffff;
                    z-index: 10;
                    font-family: 'Archivo Black', system-ui, sans-serif;
                    font-size: 2.5rem;
                    font-weight: bold;
                }
                .notice-scrim {
                    position: fixed;
                    inset: 0;
                    z-index: 9998;
                    background: transparent;
                }
                .laptop-notice {
                    position: absolute;
                    top: 1rem;
                    right: 5rem;
                    background-color: rgba(139, 92, 246, 0.25);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(168, 85, 247, 0.4);
                    border-radius: 16px;
                    padding: 1rem 1.25rem;
                    color: #ffffff;
                    font-family: 'Archivo Black', system-ui, sans-serif;
                    font-size: 0.85rem;
                    animation: slideInFromRight 0.5s ease-out, glowPulse 2s ease-in-out infinite;
                    cursor: pointer;
                    max-width: 200px;
                    text-align: center;
                    z-index: 9999;
                }
                .laptop-notice:active { transform: scale(0.95); }
                .laptop-notice-title {
                    font-weight: bold;
                    margin-bottom: 0.25rem;
                    color: #e9d5ff;
                }
                .laptop-notice-hint {
                    font-size: 0.7rem;
                    color: #c4b5fd;
                    font-family: system-ui, sans-serif;
                }
                .fade-in {
                    opacity: 0;
                    animation: contactFadeIn 1s ease-in forwards;
                }
                .fade-in-up {
                    opacity: 0;
                    animation: contactFadeInUp 1s ease-in forwards;
                }
                .contact-info.fade-in { animation-name: contactFade; }
                @keyframes contactFadeIn {
                    from { opacity: 0; transform: translate(-50%, -45%); }
                    to { opacity: 1; transform: translate(-50%, -50%); }
                }
                @keyframes contactFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes contactFadeInUp {
                    from { opacity: 0; transform: translate(-50%, 10px); }
                    to { opacity: 1; transform: translate(-50%, 0); }
                }
                @keyframes slideInFromRight {
                    from { opacity: 0; transform: translateX(100px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes glowPulse {
                    0%, 100% { box-shadow: 0 0 30px rgba(139, 92, 246, 0.6), 0 0 60px rgba(139, 92, 246, 0.3); }
                    50% { box-shadow: 0 0 40px rgba(139, 92, 246, 0.8), 0 0 80px rgba(139, 92, 246, 0.5); }
                }
                "#}
            </style>
        </div>
    }
}
