use yew::prelude::*;
use log::{info, Level};
use web_sys::window;

mod config;
mod content;
mod lead;
mod view;
mod components {
    pub mod icons;
    pub mod layout;
    pub mod pricing_card;
    pub mod signup_form;
}
mod pages {
    pub mod landing;
    pub mod thank_you;
}

use components::layout::BaseStyle;
use pages::{landing::Landing, thank_you::ThankYou};
use view::{navigate, use_view, View};

#[function_component]
fn App() -> Html {
    let view = use_view();

    // Start every view at the top of the page
    {
        use_effect_with_deps(
            move |current: &View| {
                info!("Rendering {:?} view", current);
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            *view,
        );
    }

    let page = match *view {
        View::Landing => html! {
            <Landing on_lead_sent={Callback::from(|_: ()| navigate(View::ThankYou))} />
        },
        View::ThankYou => html! {
            <ThankYou on_home={Callback::from(|_: ()| navigate(View::Landing))} />
        },
    };

    html! {
        <>
            <BaseStyle />
            {page}
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting iTuk landing page");
    yew::Renderer::<App>::new().render();
}
