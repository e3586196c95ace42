use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Política de Privacidade"}</h1>
                <p class="legal-updated">{"Última atualização: agosto de 2025"}</p>

                <h2>{"Cookies"}</h2>
                <p>
                    {"Este site utiliza um único cookie funcional (\"cookie_consent\") para \
                      registrar que você aceitou este aviso. Ele expira automaticamente após \
                      um ano e não contém dados pessoais."}
                </p>

                <h2>{"Dados pessoais"}</h2>
                <p>
                    {"Esta página não coleta, armazena ou processa dados pessoais. A compra do \
                      protocolo acontece em uma plataforma externa de pagamento, com política \
                      de privacidade própria."}
                </p>

                <h2>{"Conteúdo de terceiros"}</h2>
                <p>
                    {"O vídeo de apresentação é exibido por um player de terceiros (Wistia) e \
                      as imagens são servidas por um serviço externo de hospedagem. Esses \
                      serviços podem registrar acessos conforme suas próprias políticas."}
                </p>

                <p class="legal-back">
                    <Link<Route> to={Route::Home}>{"← Voltar para a página inicial"}</Link<Route>>
                </p>
            </div>
            <style>{ LEGAL_STYLE }</style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Termos de Uso"}</h1>
                <p class="legal-updated">{"Última atualização: agosto de 2025"}</p>

                <h2>{"Sobre esta página"}</h2>
                <p>
                    {"Esta é uma página de apresentação do Protocolo Jejum com Café Preto. \
                      O acesso ao material digital é vendido e entregue por uma plataforma \
                      externa; preços, reembolsos e suporte seguem os termos exibidos no \
                      momento da compra."}
                </p>

                <h2>{"Aviso de saúde"}</h2>
                <p>
                    {"O conteúdo tem caráter informativo e não substitui acompanhamento \
                      médico ou nutricional. Consulte um profissional de saúde antes de \
                      iniciar qualquer protocolo de jejum."}
                </p>

                <h2>{"Resultados"}</h2>
                <p>
                    {"Depoimentos e números apresentados refletem relatos individuais. \
                      Resultados variam de pessoa para pessoa."}
                </p>

                <p class="legal-back">
                    <Link<Route> to={Route::Home}>{"← Voltar para a página inicial"}</Link<Route>>
                </p>
            </div>
            <style>{ LEGAL_STYLE }</style>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-page {
    min-height: 100vh;
    background: #0c0a09;
    color: #fff;
    padding: 4rem 1rem;
}
.legal-content {
    max-width: 48rem;
    margin: 0 auto;
}
.legal-content h1 {
    font-size: 2.2rem;
    font-weight: 900;
    margin-bottom: 0.5rem;
}
.legal-updated {
    color: #999;
    margin-bottom: 2rem;
}
.legal-content h2 {
    color: #f97316;
    font-size: 1.4rem;
    margin: 2rem 0 0.75rem;
}
.legal-content p {
    line-height: 1.7;
}
.legal-back {
    margin-top: 3rem;
}
.legal-back a {
    color: #fdba74;
    text-decoration: none;
}
.legal-back a:hover {
    color: #fff;
}
"#;
