use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::lead::{submit, FormspreeIntake, LeadField, LeadSession};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Fired once after the intake accepted the lead.
    pub on_success: Callback<()>,
}

fn is_online() -> bool {
    window().map(|w| w.navigator().on_line()).unwrap_or(true)
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    // Kept in a RefCell rather than use_state so the in-flight check in
    // onsubmit sees writes made before the next render.
    let session = use_mut_ref(LeadSession::default);
    let redraw = use_force_update();

    let oninput = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = LeadField::from_input_name(&input.name()) {
                session.borrow_mut().update(field, input.value());
                redraw.force_update();
            }
        })
    };

    let onsubmit = {
        let session = session.clone();
        let redraw = redraw.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let lead = session.borrow_mut().begin(is_online());
            redraw.force_update();
            let Some(lead) = lead else { return };

            info!("Submitting lead");
            let session = session.clone();
            let redraw = redraw.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let intake = FormspreeIntake::new(config::get_intake_url());
                let outcome = submit(&intake, &lead).await;
                let sent = session.borrow_mut().finish(outcome);
                redraw.force_update();
                if sent {
                    on_success.emit(());
                }
            });
        })
    };

    let (form, submitting, error) = {
        let current = session.borrow();
        (current.form().clone(), current.is_submitting(), current.error_message())
    };

    html! {
        <form class="signup-form" {onsubmit}>
            <style>
                {r#"
                .signup-form {
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .signup-form input {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    font-size: 1rem;
                    box-sizing: border-box;
                    transition: box-shadow 0.2s ease;
                }
                .signup-form input:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #F4A261;
                }
                .signup-form button:disabled {
                    background: rgba(244, 162, 97, 0.6);
                    cursor: not-allowed;
                    transform: none;
                }
                .signup-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                }
                "#}
            </style>
            <input
                type="text"
                name={LeadField::Name.input_name()}
                value={form.get(LeadField::Name).to_owned()}
                oninput={oninput.clone()}
                placeholder="Seu Nome Completo"
                required=true
            />
            <input
                type="tel"
                name={LeadField::Contact.input_name()}
                value={form.get(LeadField::Contact).to_owned()}
                oninput={oninput.clone()}
                placeholder="WhatsApp (com DDD)"
                required=true
            />
            <input
                type="email"
                name={LeadField::Email.input_name()}
                value={form.get(LeadField::Email).to_owned()}
                oninput={oninput}
                placeholder="Seu Melhor E-mail"
                required=true
            />
            <button type="submit" class="cta-button" disabled={submitting}>
                {
                    if submitting {
                        "Enviando..."
                    } else {
                        "Quero Acesso Prioritário e os Detalhes dos Planos"
                    }
                }
            </button>
            {
                if let Some(message) = error {
                    html! { <p class="signup-error">{message}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
