use yew::prelude::*;

use crate::components::icons::CheckIcon;
use crate::content::{Plan, PlanTone};

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
    pub on_cta: Callback<()>,
}

fn tone_class(tone: PlanTone) -> &'static str {
    match tone {
        PlanTone::Light => "plan--light",
        PlanTone::Dark => "plan--dark",
        PlanTone::Highlight => "plan--highlight",
    }
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = props.plan;
    let onclick = {
        let on_cta = props.on_cta.clone();
        Callback::from(move |_: MouseEvent| on_cta.emit(()))
    };

    html! {
        <div class={classes!("plan", tone_class(plan.tone))}>
            {
                if let Some(badge) = plan.badge {
                    html! { <span class="plan__badge">{badge}</span> }
                } else {
                    html! {}
                }
            }
            <h3 class="plan__name">{plan.name}</h3>
            <p class="plan__price">{plan.price}</p>
            <ul class="plan__features">
                { for plan.features.iter().map(|feature| html! {
                    <li>
                        <CheckIcon />
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            {
                if let Some(note) = plan.note {
                    html! { <p class="plan__note">{note}</p> }
                } else {
                    html! {}
                }
            }
            <button class="plan__cta" {onclick}>{"Quero este plano"}</button>
        </div>
    }
}
