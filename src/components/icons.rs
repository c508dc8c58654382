use yew::prelude::*;

use crate::content::FeatureIcon;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: FeatureIcon,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let path = match props.icon {
        // eye
        FeatureIcon::Visibility => html! {
            <>
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z" />
            </>
        },
        // calendar with check
        FeatureIcon::NoShow => html! {
            <>
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 16l2 2 4-4" />
            </>
        },
        // bar chart
        FeatureIcon::Finance => html! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z" />
        },
    };

    html! {
        <svg class="feature-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            {path}
        </svg>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon() -> Html {
    html! {
        <svg class="check-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
        </svg>
    }
}
