use yew::prelude::*;

use crate::components::layout::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct ThankYouProps {
    pub on_home: Callback<()>,
}

#[function_component(ThankYou)]
pub fn thank_you(props: &ThankYouProps) -> Html {
    let onclick = {
        let on_home = props.on_home.clone();
        Callback::from(move |_: MouseEvent| on_home.emit(()))
    };

    html! {
        <div class="thank-you">
            <style>
                {r#"
                .thank-you {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }
                .thank-you main {
                    flex-grow: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 0;
                    background: var(--light-gray);
                    text-align: center;
                }
                .thank-you h2 {
                    font-size: 2.25rem;
                }
                .thank-you p {
                    max-width: 42rem;
                    margin: 1.5rem auto 0;
                    font-size: 1.125rem;
                    color: rgba(30, 30, 30, 0.8);
                }
                .thank-you .cta-button {
                    margin-top: 2.5rem;
                }
                "#}
            </style>
            <Header />
            <main>
                <div class="container">
                    <h2>{"Obrigado por se inscrever!"}</h2>
                    <p>
                        {"Seus dados foram enviados com sucesso. Entraremos em contato em breve com os detalhes dos planos e seu acesso prioritário."}
                    </p>
                    <button class="cta-button" {onclick}>{"Voltar ao Início"}</button>
                </div>
            </main>
            <Footer />
        </div>
    }
}
