use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::layout::{Footer, Header};
use crate::components::pricing_card::PricingCard;
use crate::components::signup_form::SignupForm;
use crate::config;
use crate::content::{FEATURES, HERO_IMAGE, PLANS, TESTIMONIALS};

fn scroll_to_signup() {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::SIGNUP_ANCHOR));

    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_lead_sent: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let on_cta = Callback::from(|_: ()| scroll_to_signup());

    html! {
        <div class="landing">
            <Header />
            <main>
                <Hero on_cta={on_cta.clone()} />
                <Features />
                <Pricing {on_cta} />
                <Testimonials />
                <FinalCta on_lead_sent={props.on_lead_sent.clone()} />
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CtaProps {
    on_cta: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &CtaProps) -> Html {
    let onclick = {
        let on_cta = props.on_cta.clone();
        Callback::from(move |_: MouseEvent| on_cta.emit(()))
    };

    html! {
        <section class="section--gray hero">
            <style>
                {r#"
                .hero {
                    padding: 4rem 0;
                }
                .hero__grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .hero__text {
                    text-align: center;
                }
                .hero__text h2 {
                    font-size: 2.25rem;
                    line-height: 1.2;
                }
                .hero__text p {
                    margin-top: 1.5rem;
                    font-size: 1.125rem;
                    color: rgba(30, 30, 30, 0.8);
                }
                .hero__text .cta-button {
                    margin-top: 2.5rem;
                }
                .hero__image {
                    display: flex;
                    justify-content: center;
                }
                .hero__image img {
                    max-height: 70vh;
                    width: auto;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    object-fit: contain;
                }
                @media (min-width: 768px) {
                    .hero {
                        padding: 6rem 0;
                    }
                    .hero__grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .hero__text {
                        text-align: left;
                    }
                    .hero__text h2 {
                        font-size: 3.5rem;
                    }
                }
                "#}
            </style>
            <div class="container hero__grid">
                <div class="hero__text">
                    <h2>{"iTuk: Sua Agenda Sempre Disponível. Mais Clientes. Mais Lucro."}</h2>
                    <p>
                        {"Plataforma de gestão e visibilidade feita para profissionais de Beleza e Saúde. O investimento que se paga com o primeiro agendamento."}
                    </p>
                    <button class="cta-button" {onclick}>
                        {"Quero Receber os Detalhes dos Planos e Acesso Prioritário"}
                    </button>
                </div>
                <div class="hero__image">
                    <img src={HERO_IMAGE} alt="iTuk app mockup" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="section features">
            <style>
                {r#"
                .features__grid {
                    display: grid;
                    gap: 3rem;
                    text-align: center;
                }
                .feature {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .feature__badge {
                    background: rgba(244, 162, 97, 0.2);
                    color: var(--soft-orange);
                    padding: 1rem;
                    border-radius: 9999px;
                }
                .feature-icon {
                    width: 2rem;
                    height: 2rem;
                    display: block;
                }
                .feature h3 {
                    margin-top: 1.5rem;
                    font-size: 1.25rem;
                }
                .feature p {
                    margin-top: 0.5rem;
                    color: rgba(30, 30, 30, 0.7);
                }
                @media (min-width: 768px) {
                    .features__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
            <div class="container features__grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature">
                        <div class="feature__badge">
                            <Icon icon={feature.icon} />
                        </div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing(props: &CtaProps) -> Html {
    html! {
        <section id="planos" class="section pricing">
            <style>
                {r#"
                .pricing__grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .plan {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                }
                .plan--light {
                    background: var(--light-gray);
                    border: 1px solid #e5e7eb;
                }
                .plan--dark {
                    background: var(--charcoal-black);
                    color: #ffffff;
                }
                .plan--dark .plan__price {
                    color: var(--soft-orange);
                }
                .plan--highlight {
                    background: var(--soft-orange);
                    border: 2px solid var(--soft-orange);
                }
                .plan__badge {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    background: var(--charcoal-black);
                    color: #ffffff;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    white-space: nowrap;
                }
                .plan__name {
                    font-size: 1.5rem;
                    text-align: center;
                }
                .plan__price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 1rem 0;
                }
                .plan__features {
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0;
                    flex-grow: 1;
                }
                .plan__features li {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .check-icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #22c55e;
                }
                .plan__note {
                    font-size: 0.75rem;
                    text-align: center;
                    color: rgba(30, 30, 30, 0.6);
                    margin: 1.5rem 0;
                }
                .plan__cta {
                    width: 100%;
                    margin-top: auto;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 700;
                    cursor: pointer;
                    background: var(--charcoal-black);
                    color: #ffffff;
                    transition: background 0.3s ease;
                }
                .plan--dark .plan__cta {
                    background: var(--soft-orange);
                    color: var(--charcoal-black);
                }
                @media (min-width: 768px) {
                    .pricing__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .plan:hover {
                        transform: scale(1.05);
                    }
                }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"Escolha o plano ideal para você"}</h2>
                <div class="pricing__grid">
                    { for PLANS.iter().map(|plan| html! {
                        <PricingCard plan={*plan} on_cta={props.on_cta.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section section--gray testimonials">
            <style>
                {r#"
                .testimonials__grid {
                    display: grid;
                    gap: 2rem;
                }
                .testimonial {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .testimonial__quote {
                    font-size: 1.125rem;
                    font-style: italic;
                    color: rgba(30, 30, 30, 0.8);
                }
                .testimonial__author {
                    display: flex;
                    align-items: center;
                    margin-top: 1.5rem;
                }
                .testimonial__author img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }
                .testimonial__author div {
                    margin-left: 1rem;
                }
                .testimonial__name {
                    font-weight: 700;
                    margin: 0;
                }
                .testimonial__role {
                    font-size: 0.875rem;
                    color: rgba(30, 30, 30, 0.6);
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .testimonials__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"O que nossos parceiros dizem"}</h2>
                <div class="testimonials__grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial">
                            <p class="testimonial__quote">{format!("\"{}\"", t.quote)}</p>
                            <div class="testimonial__author">
                                <img src={t.avatar} alt={t.name} />
                                <div>
                                    <p class="testimonial__name">{t.name}</p>
                                    <p class="testimonial__role">{t.role}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FinalCtaProps {
    on_lead_sent: Callback<()>,
}

#[function_component(FinalCta)]
fn final_cta(props: &FinalCtaProps) -> Html {
    html! {
        <section id={config::SIGNUP_ANCHOR} class="section final-cta">
            <style>
                {r#"
                .final-cta {
                    text-align: center;
                }
                .final-cta h2 {
                    font-size: 1.875rem;
                }
                .final-cta__lead {
                    margin: 1rem 0 2rem;
                    font-size: 1.125rem;
                    color: rgba(30, 30, 30, 0.7);
                }
                .final-cta__note {
                    max-width: 28rem;
                    margin: 1.5rem auto 0;
                    font-size: 0.875rem;
                    color: rgba(30, 30, 30, 0.6);
                }
                "#}
            </style>
            <div class="container">
                <h2>{"Pronto para transformar sua carreira?"}</h2>
                <p class="final-cta__lead">{"Deixe seus dados para receber os detalhes e um desconto exclusivo."}</p>
                <SignupForm on_success={props.on_lead_sent.clone()} />
                <p class="final-cta__note">
                    {"Estamos em pré-lançamento. Sua inscrição garante prioridade e descontos exclusivos na primeira mensalidade."}
                </p>
            </div>
        </section>
    }
}
