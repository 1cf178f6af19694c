use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepperProps {
    /// 1-based.
    pub current_step: usize,
    pub on_next: Callback<()>,
    pub on_back: Callback<()>,
    #[prop_or(AttrValue::Static("Back"))]
    pub back_button_text: AttrValue,
    #[prop_or(AttrValue::Static("Continue"))]
    pub next_button_text: AttrValue,
    #[prop_or(AttrValue::Static("Complete"))]
    pub complete_button_text: AttrValue,
    pub children: Children,
}

#[function_component(Stepper)]
pub fn stepper(props: &StepperProps) -> Html {
    let total = props.children.len();
    let current = props.current_step.clamp(1, total.max(1));
    let is_last = current == total;

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="stepper">
            <div class="stepper-indicators">
                { for (1..=total).map(|step| {
                    let status = if step < current {
                        "complete"
                    } else if step == current {
                        "active"
                    } else {
                        "inactive"
                    };
                    html! {
                        <>
                            <div class={classes!("step-indicator", status)}>
                                {
                                    if status == "complete" {
                                        html! { <span class="step-check">{"✓"}</span> }
                                    } else {
                                        html! { <span class="step-number">{ step }</span> }
                                    }
                                }
                            </div>
                            {
                                if step < total {
                                    html! { <div class={classes!("step-connector", (step < current).then_some("complete"))}></div> }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    }
                }) }
            </div>
            <div class="stepper-content" key={current}>
                { props.children.iter().nth(current - 1).unwrap_or_default() }
            </div>
            <div class={classes!("stepper-footer", (current == 1).then_some("end"))}>
                {
                    if current > 1 {
                        html! { <button type="button" class="stepper-back" onclick={on_back}>{ props.back_button_text.clone() }</button> }
                    } else {
                        html! {}
                    }
                }
                <button type="button" class="stepper-next" onclick={on_next}>
                    { if is_last { props.complete_button_text.clone() } else { props.next_button_text.clone() } }
                </button>
            </div>
            <style>
                {r#"
                .stepper {
                    padding: 2rem;
                    border-radius: 2rem;
                    background: rgba(6, 0, 16, 0.72);
                    border: 1px solid #222;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
                }
                .stepper-indicators {
                    display: flex;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .step-indicator {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    flex-shrink: 0;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .step-indicator.inactive { background: #222; color: #a3a3a3; }
                .step-indicator.active { background: #5227FF; color: #fff; }
                .step-indicator.complete { background: #5227FF; color: #fff; }
                .step-connector {
                    flex: 1;
                    height: 2px;
                    margin: 0 0.5rem;
                    background: #52525b;
                    transition: background 0.4s ease;
                }
                .step-connector.complete { background: #5227FF; }
                .stepper-content {
                    animation: stepIn 0.4s ease-out;
                }
                .stepper-footer {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }
                .stepper-footer.end { justify-content: flex-end; }
                .stepper-back {
                    background: transparent;
                    border: none;
                    color: #a3a3a3;
                    cursor: pointer;
                    padding: 0.5rem 0.875rem;
                    border-radius: 0.25rem;
                }
                .stepper-back:hover { color: #fff; }
                .stepper-next {
                    background: #5227FF;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.25rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .stepper-next:hover { background: #3a16d9; }
                @keyframes stepIn {
                    from { opacity: 0; transform: translateX(24px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                "#}
            </style>
        </div>
    }
}
