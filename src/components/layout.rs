use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container">
                <h1 class="wordmark">{"iTuk"}</h1>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{format!("© {} iTuk. Todos os direitos reservados.", year)}</p>
            </div>
        </footer>
    }
}

/// Palette and shared classes used by every page.
#[function_component(BaseStyle)]
pub fn base_style() -> Html {
    html! {
        <style>
            {r#"
            :root {
                --light-gray: #F5F5F5;
                --charcoal-black: #1E1E1E;
                --soft-orange: #F4A261;
            }
            body {
                margin: 0;
                font-family: 'Inter', system-ui, sans-serif;
                color: var(--charcoal-black);
                background: #ffffff;
            }
            h1, h2, h3 {
                font-family: 'Playfair Display', Georgia, serif;
                margin: 0;
            }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }
            .section {
                padding: 4rem 0;
            }
            .section--gray {
                background: var(--light-gray);
            }
            .section-title {
                font-size: 2.5rem;
                text-align: center;
                margin-bottom: 3rem;
            }
            .site-header {
                background: var(--light-gray);
                padding: 1.5rem 0;
            }
            .wordmark {
                font-size: 1.875rem;
                font-weight: 700;
            }
            .site-footer {
                background: var(--charcoal-black);
                color: #ffffff;
                padding: 1.5rem 0;
                text-align: center;
                font-size: 0.875rem;
            }
            .cta-button {
                background: var(--soft-orange);
                color: var(--charcoal-black);
                font-weight: 700;
                font-size: 1rem;
                padding: 1rem 2rem;
                border: none;
                border-radius: 0.5rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                cursor: pointer;
                transition: transform 0.3s ease, box-shadow 0.3s ease;
            }
            .cta-button:hover {
                transform: scale(1.05);
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
            }
            @media (min-width: 768px) {
                .section {
                    padding: 6rem 0;
                }
                .section-title {
                    font-size: 3rem;
                }
            }
            "#}
        </style>
    }
}
