use yew::prelude::*;

use crate::effects::plasma::{Plasma, PlasmaDirection};

struct Plan {
    title: &'static str,
    description: &'static str,
}

const PLANS: [Plan; 3] = [
    Plan {
        title: "Starter",
        description: "Launch-ready features with guided onboarding, and tips for better UI/UX.",
    },
    Plan {
        title: "Creator",
        description: "Dynamic effects, performance tuning, and priority help + everthing in Starter.",
    },
    Plan {
        title: "Studio",
        description: "3D assets, performance tuning, and SEO integration + everything in Starter and Creator.",
    },
];

#[function_component(Plans)]
pub fn plans() -> Html {
    html! {
        <div class="plans-page">
            <div class="plans-backdrop">
                <Plasma
                    color="#8b5cf6"
                    speed={1.0}
                    direction={PlasmaDirection::Forward}
                    scale={1.5}
                    opacity={1.0}
                    mouse_interactive={true}
                />
                <div class="plans-overlay"></div>
            </div>

            <div class="plans-content">
                <div class="plans-inner">
                    <div class="plans-header">
                        <p class="plans-eyebrow">{"PLANS"}</p>
                        <h1>{"Choose your flow"}</h1>
                        <p class="plans-lede">
                            {"Fluid pricing tiers tailored for creators, teams, and ambitious builds."}
                        </p>
                    </div>

                    <div class="plans-grid">
                        { for PLANS.iter().map(|plan| html! {
                            <div class="plan-card" key={plan.title}>
                                <h3>{ plan.title }</h3>
                                <p>{ plan.description }</p>
                                <div class="plan-price">
                                    <span class="plan-negotiable">{"Negotiable"}</span>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="plans-updates">
                        <div class="plan-card updates-card">
                            <h3>{"Constant Updates"}</h3>
                            <p>
                                {"The prices depend on what you want: weekly, bi-weekly, monthly, quarterly, yearly."}
                            </p>
                            <div class="plan-price">
                                <span class="plan-amount">{"$60-$250"}</span>
                                <span class="plan-unit">{"/website"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .plans-page {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background-color: #0c0a1a;
                }
                .plans-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .plans-overlay {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background:
                        radial-gradient(circle at 20% 20%, rgba(255,255,255,0.08), transparent 35%),
                        radial-gradient(circle at 80% 30%, rgba(139,92,246,0.25), transparent 40%),
                        linear-gradient(180deg, rgba(12,10,26,0.4), rgba(12,10,26,0.85));
                }
                .plans-content {
                    position: relative;
                    z-index: 1;
                    color: #e7e7ff;
                    font-family: 'Archivo Black', system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
                    padding: 72px 20px 96px;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                }
                .plans-inner {
                    width: 100%;
                    max-width: 1200px;
                    display: grid;
                    padding-top: 72px;
                    gap: 32px;
                }
                .plans-header {
                    text-align: center;
                }
                .plans-eyebrow {
                    letter-spacing: 0.08em;
                    color: #c4b5fd;
                    margin-bottom: 8px;
                }
                .plans-header h1 {
                    font-size: clamp(32px, 6vw, 54px);
                    margin: 0;
                }
                .plans-lede {
                    max-width: 640px;
                    margin: 12px auto 0;
                    font-weight: 500;
                    color: #c7c8d9;
                }
                .plans-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(min(360px, 100%), 1fr));
                    gap: 24px;
                }
                .plan-card {
                    pointer-events: auto;
                    background: rgba(12,10,26,0.72);
                    border: 1px solid rgba(196,181,253,0.18);
                    box-shadow: 0 12px 40px rgba(0,0,0,0.4);
                    border-radius: 20px;
                    padding: 28px 24px;
                    backdrop-filter: blur(10px) saturate(140%);
                    transition: transform 220ms ease, border-color 220ms ease, box-shadow 220ms ease;
                }
                .plan-card:hover {
                    transform: translateY(-6px);
                    border-color: rgba(40, 7, 119, 0.5);
                    box-shadow: 0 16px 48px rgba(139,92,246,0.28);
                }
                .plan-card h3 {
                    margin: 0 0 8px;
                    font-size: 22px;
                }
                .plan-card p {
                    margin: 0 0 16px;
                    color: #c7c8d9;
                    font-weight: 500;
                }
                .plan-price {
                    display: flex;
                    align-items: baseline;
                    gap: 8px;
                }
                .plan-negotiable {
                    color: #8a7fa2;
                    font-weight: 600;
                }
                .plans-updates {
                    margin-top: 16px;
                    display: flex;
                    justify-content: center;
                }
                .updates-card {
                    max-width: 480px;
                    background: rgba(12,10,26,0.78);
                }
                .plan-amount {
                    font-size: 32px;
                }
                .plan-unit {
                    color: #c7c8d9;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
