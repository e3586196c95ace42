use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::cookie_banner::CookieBanner;
use crate::components::deferred::DeferredSection;
use crate::components::faq::FaqSection;
use crate::components::floating_cta::FloatingCta;
use crate::components::lazy_image::LazyImage;
use crate::components::notification::SalesNotification;
use crate::components::results::ResultsSection;
use crate::components::testimonials::TestimonialsSection;
use crate::config;

/// Fragment links (the dev checkout target) scroll in place; everything else
/// opens the checkout in a new tab.
fn new_tab_target(href: &str) -> Option<&'static str> {
    (!href.starts_with('#')).then_some("_blank")
}

fn cta_link(label: &'static str) -> Html {
    let href = config::checkout_url();
    let target = new_tab_target(href);
    let rel = target.map(|_| "noopener noreferrer");
    html! {
        <a {href} {target} {rel} class="cta-button">
            { label }
        </a>
    }
}

fn hero_video() -> Html {
    let swatch_style = format!(
        "wistia-player[media-id='{id}']:not(:defined) {{ \
           background: center / contain no-repeat url('https://fast.wistia.com/embed/medias/{id}/swatch'); \
           display: block; \
           filter: blur(5px); \
           padding-top: 100.0%; \
         }}",
        id = config::WISTIA_MEDIA_ID,
    );

    html! {
        <div class="hero-video">
            <script src="https://fast.wistia.com/player.js" async={true} defer={true}></script>
            <script
                src={format!("https://fast.wistia.com/embed/{}.js", config::WISTIA_MEDIA_ID)}
                async={true}
                defer={true}
                type="module"
            ></script>
            <style>{ swatch_style }</style>
            <wistia-player media-id={config::WISTIA_MEDIA_ID} aspect="1.0"></wistia-player>
        </div>
    }
}

fn pain_section() -> Html {
    let signals = [
        "Cansaço ao acordar, mesmo dormindo 8 horas",
        "Sensação constante de inchaço",
        "Perda de foco durante o dia",
        "Desânimo espiritual",
        "Ansiedade alimentar",
        "Baixa autoestima",
    ];

    html! {
        <section class="section tinted">
            <div class="container narrow">
                <div class="section-emblem">{"😔"}</div>
                <h2 class="section-title">
                    {"VOCÊ RECONHECE ESSES "}<span class="accent">{"SINAIS"}</span>{"?"}
                </h2>

                <div class="panel">
                    <div class="signal-grid">
                        { for signals.iter().map(|signal| html! {
                            <div class="signal-row">
                                <span class="signal-dot"></span>
                                <p>{ *signal }</p>
                            </div>
                        }) }
                    </div>
                    <div class="panel-footer">
                        <p class="panel-highlight">
                            {"Se isso é familiar, "}<span class="accent">{"você não está sozinha"}</span>{"."}
                        </p>
                    </div>
                </div>

                { cta_link("☕ QUERO SAIR DESSE CICLO") }
            </div>
        </section>
    }
}

fn traps_section() -> Html {
    let traps = [
        ("🥗", "Dietas Genéricas", "Funcionam por 2 semanas, depois você volta ao peso anterior"),
        ("🍵", "Chás Milagrosos", "Promessas vazias que só drenam sua carteira"),
        ("💊", "Jejuns Aleatórios", "Sem propósito e ciência, tudo é temporário"),
    ];

    html! {
        <section class="section">
            <div class="container narrow">
                <div class="section-emblem">{"✖"}</div>
                <h2 class="section-title">
                    {"PARE DE CAIR NAS "}<span class="accent">{"MESMAS ARMADILHAS"}</span>
                </h2>

                <div class="panel">
                    <div class="trap-grid">
                        { for traps.iter().map(|(icon, title, text)| html! {
                            <div class="trap-card">
                                <div class="trap-icon">{ *icon }<span class="trap-cross">{"✖"}</span></div>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                    <div class="panel-footer">
                        <p class="panel-highlight">
                            <span class="accent">{"Sem propósito e ciência"}</span>
                            {", qualquer método é apenas mais uma tentativa frustrada."}
                        </p>
                    </div>
                </div>

                { cta_link("☕ QUERO UM MÉTODO REAL") }
            </div>
        </section>
    }
}

fn method_section() -> Html {
    html! {
        <section class="section tinted">
            <div class="container narrow">
                <div class="section-emblem">{"☕ ⚡"}</div>
                <h2 class="section-title">
                    {"CONHEÇA O "}<span class="accent">{"JEJUM COM CAFÉ PRETO"}</span>
                </h2>

                <div class="panel">
                    <p class="panel-highlight">
                        <span class="accent">{"Jejum com Café Preto"}</span>
                        {" é um protocolo simples, ancestral e validado pela ciência."}
                    </p>
                    <p class="panel-highlight">{"Nada de modinha."}</p>
                    <div class="callout">
                        <p>
                            {"Você acorda, toma um café puro e deixa o "}
                            <span class="accent">{"corpo"}</span>{" e a "}
                            <span class="accent">{"mente"}</span>{" entrarem em modo de "}
                            <span class="accent">{"cura"}</span>{"."}
                        </p>
                    </div>
                </div>

                { cta_link("☕ QUERO CONHECER O MÉTODO") }
            </div>
        </section>
    }
}

fn science_section() -> Html {
    let scientific = [
        ("🔥", "Lipólise", "Queima gordura sem atacar músculos"),
        ("⚡", "Aumento de Dopamina", "Mais foco e energia natural"),
        ("🧬", "Autofagia", "Limpeza celular profunda"),
        ("📊", "Estabilidade de Insulina", "Sem compulsão alimentar"),
    ];
    let spiritual = [
        ("📖", "Jejum como Prática Bíblica", "Tradição milenar de purificação"),
        ("🙏", "Conexão Profunda com Deus", "Fortalecimento da fé e propósito"),
        ("✨", "Renovação Interior", "Transformação que vem de dentro"),
        ("💪", "Disciplina Espiritual", "Fortalecimento da vontade"),
    ];

    let block = |title: &'static str, items: &[(&'static str, &'static str, &'static str)]| {
        html! {
            <div class="science-block">
                <h3>{ title }</h3>
                { for items.iter().map(|(icon, heading, text)| html! {
                    <div class="science-row">
                        <span class="science-icon">{ *icon }</span>
                        <div>
                            <h4>{ *heading }</h4>
                            <p>{ *text }</p>
                        </div>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section class="section">
            <div class="container">
                <h2 class="section-title">
                    <span class="accent">{"CIÊNCIA"}</span>{" + "}
                    <span class="accent">{"FÉ"}</span>{" = "}
                    <span class="accent">{"RESULTADO"}</span>
                </h2>

                <div class="science-grid">
                    { block("BLOCO CIENTÍFICO", &scientific) }
                    { block("BLOCO ESPIRITUAL", &spiritual) }
                </div>

                <div class="center">
                    { cta_link("☕ QUERO ALIAR CIÊNCIA E FÉ") }
                </div>
            </div>
        </section>
    }
}

fn assistant_section() -> Html {
    let benefits = [
        "Motivação diária personalizada",
        "Versículo e reflexão matinal",
        "Ajustes personalizados no protocolo",
        "Check-ins emocionais",
        "Receitas leves e saudáveis",
        "Lembretes de quebra de jejum",
    ];

    html! {
        <section class="section tinted">
            <div class="container narrow">
                <div class="section-emblem">{"💬"}</div>
                <h2 class="section-title">
                    {"CONHEÇA A "}<span class="accent">{"CAFÉ GPT"}</span>
                </h2>
                <p class="section-lead">
                    {"A IA que acompanha você 24h, enviando versículos, dicas alimentares, \
                      motivação e monitoramento do progresso."}
                </p>

                <div class="assistant-grid">
                    <div class="panel left">
                        <h3 class="panel-title">{"Benefícios da Café GPT:"}</h3>
                        { for benefits.iter().map(|benefit| html! {
                            <div class="benefit-row">
                                <span class="benefit-check">{"✔"}</span>
                                <p>{ *benefit }</p>
                            </div>
                        }) }
                    </div>

                    <div class="panel left chat-panel">
                        <h3 class="panel-title">{"Exemplo de Conversa:"}</h3>
                        <div class="chat-bubble bot">
                            <span class="chat-sender">{"Café GPT"}</span>
                            <p>{"Bom dia! Como você está se sentindo hoje? 🌅"}</p>
                        </div>
                        <div class="chat-bubble user">
                            <span class="chat-sender">{"Você"}</span>
                            <p>{"Meio desanimada..."}</p>
                        </div>
                        <div class="chat-bubble bot">
                            <span class="chat-sender">{"Café GPT"}</span>
                            <p>
                                {"Entendo. Lembre-se: \"Posso todas as coisas naquele que me \
                                  fortalece\" (Filipenses 4:13). Que tal começarmos com seu café \
                                  e uma oração? ☕🙏"}
                            </p>
                        </div>
                    </div>
                </div>

                { cta_link("☕ QUERO O SUPORTE DA CAFÉ GPT") }
            </div>
        </section>
    }
}

fn protocol_section() -> Html {
    let steps = [
        ("⏰", "Café em Jejum", "Acorde e tome seu café preto, sem açúcar ou adoçante"),
        ("📖", "Oração Devocional", "Dedique 10 minutos para oração e leitura bíblica"),
        ("⌛", "Jejum de 12 a 16h", "Mantenha o jejum pelo período determinado"),
        ("🍽️", "Quebra Leve", "Alimente-se de forma consciente e saudável"),
        ("💬", "Mensagem da Café GPT", "Receba orientação personalizada e motivação"),
    ];

    html! {
        <section class="section">
            <div class="container narrow">
                <h2 class="section-title">
                    {"COMO FUNCIONA O "}<span class="accent">{"PROTOCOLO"}</span>
                </h2>

                <div class="protocol-list">
                    { for steps.iter().enumerate().map(|(i, (icon, title, text))| html! {
                        <div class="protocol-step">
                            <div class="step-number">{ i + 1 }</div>
                            <div class="step-body">
                                <h3>{ *icon }{" "}{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        </div>
                    }) }
                </div>

                { cta_link("☕ QUERO SEGUIR ESSE RITUAL") }
            </div>
        </section>
    }
}

fn authority_section() -> Html {
    html! {
        <section class="section tinted">
            <div class="container">
                <div class="authority-grid">
                    <div class="authority-photo">
                        <LazyImage
                            src="https://i.postimg.cc/CxGdqxgB/expert-jejum-cafe.webp"
                            alt="Dra. Especialista em Nutrição Funcional"
                            class="expert-image"
                            priority={true}
                        />
                        <div class="experience-tag">{"+8 anos de experiência"}</div>
                    </div>

                    <div class="authority-copy">
                        <h2 class="section-title left">
                            {"MÉTODO CRIADO POR QUEM TEM "}
                            <span class="accent">{"CIÊNCIA NA MENTE"}</span>
                            {" E "}
                            <span class="accent">{"DEUS NO CORAÇÃO"}</span>
                        </h2>

                        <blockquote class="expert-quote">
                            {"\"Eu atendo mulheres cristãs todos os dias. Percebi que não é só \
                              sobre perder peso... É sobre resgatar autoestima, fé e saúde. \
                              O 'Jejum com Café Preto' une a ciência com o propósito espiritual.\""}
                        </blockquote>

                        <div class="credential-tags">
                            <span>{"✓ Nutrição Clínica Funcional"}</span>
                            <span>{"✓ Especialista em Emagrecimento"}</span>
                            <span>{"✓ +19.500 mulheres atendidas"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn stats_section() -> Html {
    let stats = [
        ("👥", "+19.500", "pessoas testaram o protocolo em 2025"),
        ("📈", "92%", "relataram perda de peso nos primeiros 7 dias"),
        ("✔", "87%", "afirmaram melhora na disposição, no humor e redução de dores como enxaqueca"),
        ("⭐", "9.4", "de satisfação média nas avaliações"),
    ];

    html! {
        <section class="section tinted">
            <div class="container">
                <h2 class="section-title">
                    {"NÚMEROS QUE "}<span class="accent">{"IMPRESSIONAM"}</span>
                </h2>

                <div class="stats-grid">
                    { for stats.iter().map(|(icon, number, text)| html! {
                        <div class="stat-card">
                            <div class="stat-icon">{ *icon }</div>
                            <h3>{ *number }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                    <div class="stat-card wide">
                        <div class="stat-icon">{"☕ → 💪"}</div>
                        <h3>{"1 copo de café"}</h3>
                        <p>{"1 corpo em transformação"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn bonuses_section() -> Html {
    let bonuses = [
        "📓 Receitas com Café para quebrar a gordura e fortalecer a mente",
        "✅ Checklist espiritual e físico diário",
        "👭 Grupo de apoio com outras mulheres de fé",
    ];

    html! {
        <section class="section">
            <div class="container narrow">
                <h2 class="section-title">
                    {"PRESENTES PARA "}<span class="accent">{"FORTALECER SUA JORNADA"}</span>
                </h2>
                <p class="section-lead">
                    {"Receba ferramentas extras para fortalecer corpo, alma e propósito"}
                </p>

                <div class="bonus-list">
                    { for bonuses.iter().map(|bonus| html! {
                        <div class="bonus-row">
                            <h3>{ *bonus }</h3>
                        </div>
                    }) }
                </div>

                { cta_link("💡 SIM, QUERO O PROTOCOLO SAGRADO DE JEJUM AGORA") }
            </div>
        </section>
    }
}

fn offer_section() -> Html {
    let includes = [
        "📜 Método divino de jejum com princípios naturais e espirituais",
        "🕊️ Roteiro devocional para 7, 14 e 30 dias",
        "🍽️ Ajustes de rotina sem dieta restritiva",
        "📖 Versículos e orações para manter o foco",
        "🔥 Calendário visual de progresso",
        "🤖 Café GPT - Sua assistente de jejum 24h",
    ];

    html! {
        <section id="offer-section" class="section tinted">
            <div class="container narrow">
                <h2 class="section-title">
                    {"UM GUIA PARA O "}<span class="accent">{"CORPO"}</span>
                    {", UM CAMINHO PARA A "}<span class="accent">{"MENTE"}</span>
                    {", UMA FERRAMENTA PARA A "}<span class="accent">{"FÉ"}</span>
                </h2>

                <div id="offer-box" class="offer-box">
                    <LazyImage
                        src="https://i.postimg.cc/sxP7D9wx/jejum-cafe-preto-semfundo.webp"
                        alt="Mockup do Protocolo"
                        class="offer-mockup"
                        priority={true}
                    />

                    <div class="panel left">
                        { for includes.iter().map(|item| html! {
                            <p class="offer-item">{ *item }</p>
                        }) }
                    </div>

                    <h3 class="offer-everything">{"💣 TUDO ISSO POR APENAS:"}</h3>

                    <div class="price-block">
                        <p class="price-old">{"De: R$97"}</p>
                        <p class="price-now">{"R$19,70"}</p>
                        <p class="price-terms">{"à vista"}</p>
                    </div>

                    { cta_link("💡 SIM, QUERO O PROTOCOLO SAGRADO DE JEJUM AGORA") }
                </div>
            </div>
        </section>
    }
}

fn guarantee_section() -> Html {
    let levels = [
        ("Nível 1", "Se não perder 2kg em 7 dias, reembolso imediato"),
        ("Nível 2", "Fica com todos os bônus mesmo pedindo reembolso"),
        ("Nível 3", "Suporte 1:1 com especialista por 3 dias"),
    ];

    html! {
        <section class="section">
            <div class="container narrow">
                <h2 class="section-title">
                    {"UMA PROMESSA TRIPLA: "}<span class="accent">{"RESULTADO"}</span>
                    {", "}<span class="accent">{"APOIO"}</span>
                    {" E "}<span class="accent">{"HONESTIDADE"}</span>
                </h2>

                <div class="panel">
                    <p class="panel-highlight">
                        {"Se em 7 dias você não se sentir mais leve, animada e motivada... \
                          Seu dinheiro é devolvido. Sem julgamentos. Sem enrolação."}
                    </p>

                    <div class="guarantee-list">
                        { for levels.iter().map(|(level, text)| html! {
                            <div class="guarantee-row">
                                <span class="guarantee-shield">{"🛡️"}</span>
                                <div>
                                    <h3>{ *level }</h3>
                                    <p>{ *text }</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="panel-footer">
                        <p class="panel-highlight">{"SEM RISCO. SÓ RESULTADO."}</p>
                        <p>{"🔰 Proteção Completa | Compra Segura 🔰"}</p>
                    </div>
                </div>

                { cta_link("💡 SIM, QUERO O PROTOCOLO SAGRADO DE JEJUM AGORA") }
            </div>
        </section>
    }
}

fn urgency_section() -> Html {
    let reasons = [
        "⏰ Comece ainda hoje o propósito das 7 manhãs",
        "📉 Resultados físicos e espirituais em 48h",
        "🎁 Bônus e grupo exclusivo para quem decidir agora",
    ];

    html! {
        <section class="section tinted">
            <div class="container narrow">
                <h2 class="section-title">
                    {"VOCÊ NÃO CHEGOU AQUI "}<span class="accent">{"POR ACASO"}</span>
                    {". É UM "}<span class="accent">{"CHAMADO"}</span>{"."}
                </h2>

                <div class="panel">
                    { for reasons.iter().map(|reason| html! {
                        <p class="panel-highlight">{ *reason }</p>
                    }) }
                </div>

                { cta_link("SIM, EU QUERO INICIAR MEU JEJUM COM CAFÉ E COM DEUS!") }
                <p class="urgency-note">{"⏳ Oferta por tempo limitado"}</p>
            </div>
        </section>
    }
}

fn page_footer() -> Html {
    html! {
        <footer class="page-footer">
            <p>{"© 2025 Protocolo Jejum com Café Preto. Todos os direitos reservados."}</p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero_visible = use_state(|| false);

    {
        let hero_visible = hero_visible.clone();
        use_effect_once(move || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            hero_visible.set(true);
            || ()
        });
    }

    html! {
        <div class="funnel-page">
            <SalesNotification />
            <FloatingCta />
            <CookieBanner />

            <section class="hero">
                <div class={classes!("hero-content", hero_visible.then_some("visible"))}>
                    <h1 class="hero-title">
                        <span>{"PROPÓSITO SAGRADO"}</span>
                        <span class="accent">{"QUE TRANSFORMA"}</span>
                        <span>{"CORPO E ESPÍRITO"}</span>
                    </h1>

                    <p class="hero-lead">
                        {"Mulheres estão emagrecendo até "}
                        <span class="accent">{"5kg por semana"}</span>
                        {" com um ritual simples: "}
                        <span class="accent">{"Jejum espiritual com café preto"}</span>
                        {" — e a Palavra de Deus como guia."}
                    </p>

                    { hero_video() }

                    <div class="hero-cta">
                        { cta_link("☕ QUERO EMAGRECER EM PROPÓSITO COM DEUS!") }
                        <p class="hero-tagline">
                            {"🙏 Jejum guiado | ☕ Café preto natural | 📖 Bíblia como âncora"}
                        </p>
                    </div>
                </div>
            </section>

            { pain_section() }
            { traps_section() }
            { method_section() }
            { science_section() }
            { assistant_section() }
            { protocol_section() }
            { authority_section() }

            <DeferredSection label="Carregando...">
                <FaqSection />
            </DeferredSection>

            { stats_section() }
            { bonuses_section() }
            { offer_section() }
            { guarantee_section() }

            <DeferredSection label="Carregando resultados...">
                <ResultsSection />
            </DeferredSection>

            <DeferredSection label="Carregando depoimentos...">
                <TestimonialsSection />
            </DeferredSection>

            { urgency_section() }
            { page_footer() }

            <style>
                {r#"
                .funnel-page {
                    min-height: 100vh;
                    background: #0c0a09;
                    color: #fff;
                }
                .section {
                    padding: 5rem 1rem;
                }
                .section.tinted {
                    background: linear-gradient(135deg, rgba(234, 88, 12, 0.1), #0c0a09 45%, rgba(249, 115, 22, 0.1));
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .container.narrow {
                    max-width: 56rem;
                    text-align: center;
                }
                .center { text-align: center; }
                .accent { color: #f97316; font-weight: 800; }
                .section-title {
                    font-size: 2.5rem;
                    font-weight: 900;
                    text-align: center;
                    line-height: 1.2;
                    margin: 0 0 3rem;
                }
                .section-title.left { text-align: left; }
                .section-lead {
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-align: center;
                    max-width: 48rem;
                    margin: -2rem auto 3rem;
                }
                .section-emblem {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(249, 115, 22, 0.2);
                    border-radius: 50%;
                    font-size: 2.2rem;
                }
                .panel {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 2.5rem;
                    margin-bottom: 3rem;
                    backdrop-filter: blur(6px);
                }
                .panel.left { text-align: left; }
                .panel-title {
                    color: #fb923c;
                    font-size: 1.4rem;
                    margin-top: 0;
                }
                .panel-footer {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(249, 115, 22, 0.3);
                }
                .panel-highlight {
                    font-size: 1.35rem;
                    font-weight: 700;
                    line-height: 1.5;
                }
                .callout {
                    background: rgba(249, 115, 22, 0.15);
                    border: 1px solid rgba(234, 88, 12, 0.3);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .cta-button {
                    display: inline-block;
                    background: linear-gradient(to right, #ea580c, #f97316);
                    color: #fff;
                    font-size: 1.15rem;
                    font-weight: 900;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.03em;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.35);
                    transition: transform 0.3s ease, filter 0.3s ease;
                }
                .cta-button:hover {
                    transform: scale(1.05);
                    filter: brightness(1.1);
                }

                /* Hero */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 5rem 1rem;
                    background: linear-gradient(to right, rgba(234, 88, 12, 0.1), rgba(249, 115, 22, 0.1));
                }
                .hero-content {
                    max-width: 64rem;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .hero-content.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-title {
                    font-size: 3.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                }
                .hero-title span { display: block; }
                .hero-lead {
                    font-size: 1.4rem;
                    font-weight: 700;
                    line-height: 1.5;
                    max-width: 52rem;
                    margin: 0 auto 3rem;
                }
                .hero-video {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.5);
                }
                .hero-tagline {
                    margin-top: 1.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                /* Pain */
                .signal-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    text-align: left;
                }
                .signal-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .signal-dot {
                    flex-shrink: 0;
                    width: 0.75rem;
                    height: 0.75rem;
                    background: #fb923c;
                    border-radius: 50%;
                }
                .signal-row p {
                    font-size: 1.1rem;
                    font-weight: 500;
                    margin: 0;
                }

                /* Traps */
                .trap-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .trap-card h3 {
                    color: #fb923c;
                    font-size: 1.25rem;
                    margin: 0.75rem 0 0.5rem;
                }
                .trap-card p { margin: 0; }
                .trap-icon {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(249, 115, 22, 0.2);
                    border-radius: 50%;
                    font-size: 1.6rem;
                }
                .trap-cross {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 1.75rem;
                    height: 1.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f97316;
                    border-radius: 50%;
                    font-size: 0.8rem;
                }

                /* Science */
                .science-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .science-block {
                    background: rgba(249, 115, 22, 0.1);
                    border: 1px solid rgba(251, 146, 60, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .science-block h3 {
                    color: #fb923c;
                    font-size: 1.5rem;
                    font-weight: 900;
                    margin-top: 0;
                }
                .science-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .science-icon {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f97316;
                    border-radius: 50%;
                    font-size: 0.9rem;
                }
                .science-row h4 { margin: 0 0 0.4rem; font-size: 1.1rem; }
                .science-row p { margin: 0; }

                /* Assistant */
                .assistant-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .benefit-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .benefit-check { color: #fb923c; font-size: 1.2rem; }
                .benefit-row p { margin: 0; }
                .chat-bubble {
                    border-radius: 0.6rem;
                    padding: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .chat-bubble.bot {
                    background: rgba(249, 115, 22, 0.2);
                    border: 1px solid rgba(251, 146, 60, 0.3);
                }
                .chat-bubble.user {
                    background: rgba(55, 65, 81, 0.5);
                    border: 1px solid rgba(234, 88, 12, 0.3);
                    margin-left: 1rem;
                }
                .chat-sender {
                    display: block;
                    color: #fdba74;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }
                .chat-bubble p { margin: 0; }

                /* Protocol */
                .protocol-list { margin-bottom: 3rem; }
                .protocol-step {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 1.5rem;
                    text-align: left;
                }
                .step-number {
                    flex-shrink: 0;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ea580c;
                    border-radius: 50%;
                    font-size: 1.4rem;
                    font-weight: 900;
                }
                .step-body h3 { margin: 0 0 0.4rem; font-size: 1.25rem; }
                .step-body p { margin: 0; }

                /* Authority */
                .authority-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .authority-photo { position: relative; }
                .expert-image img {
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(234, 88, 12, 0.3);
                }
                .experience-tag {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    background: #ea580c;
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.85rem;
                    font-weight: 700;
                }
                .expert-quote {
                    background: rgba(17, 24, 39, 0.5);
                    border-left: 4px solid #f97316;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    margin: 0 0 1.5rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                    line-height: 1.6;
                }
                .credential-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .credential-tags span {
                    background: rgba(249, 115, 22, 0.2);
                    border: 1px solid rgba(249, 115, 22, 0.3);
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                    color: #fb923c;
                    font-weight: 600;
                }

                /* Stats */
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .stat-card {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                }
                .stat-card.wide { grid-column: span 2; }
                .stat-icon { font-size: 2.2rem; margin-bottom: 1rem; }
                .stat-card h3 { font-size: 1.9rem; font-weight: 900; margin: 0 0 0.5rem; }
                .stat-card p { margin: 0; }

                /* Bonuses */
                .bonus-list { margin-bottom: 3rem; }
                .bonus-row {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                    text-align: left;
                }
                .bonus-row h3 { margin: 0; font-size: 1.2rem; }

                /* Offer */
                .offer-box {
                    background: rgba(249, 115, 22, 0.15);
                    border: 1px solid rgba(234, 88, 12, 0.3);
                    border-radius: 1rem;
                    padding: 2.5rem;
                    margin-bottom: 3rem;
                }
                .offer-mockup img {
                    width: 100%;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                    display: block;
                    border-radius: 1rem;
                }
                .offer-item {
                    font-size: 1.15rem;
                    margin: 0 0 1rem;
                }
                .offer-everything {
                    font-size: 2rem;
                    font-weight: 900;
                    margin: 2rem 0;
                }
                .price-block { margin-bottom: 2rem; }
                .price-old {
                    color: #f97316;
                    font-size: 1.4rem;
                    font-weight: 700;
                    text-decoration: line-through;
                    margin: 0 0 0.5rem;
                }
                .price-now {
                    color: #f97316;
                    font-size: 3.5rem;
                    font-weight: 900;
                    margin: 0 0 0.25rem;
                }
                .price-terms { font-size: 1.2rem; font-weight: 700; margin: 0; }

                /* Guarantee */
                .guarantee-list { margin-top: 2rem; text-align: left; }
                .guarantee-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .guarantee-shield { font-size: 1.8rem; }
                .guarantee-row h3 { color: #fb923c; margin: 0 0 0.25rem; font-size: 1.2rem; }
                .guarantee-row p { margin: 0; }

                .urgency-note {
                    margin-top: 1rem;
                    color: #f97316;
                    font-size: 0.9rem;
                }

                .page-footer {
                    background: #0a0908;
                    border-top: 1px solid rgba(249, 115, 22, 0.3);
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .page-footer p { color: #f97316; margin: 0; }

                /* Shared loading states */
                .section-loading {
                    padding: 5rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    animation: soft-pulse 1.5s ease-in-out infinite;
                }
                .lazy-image.loading {
                    background: #111827;
                    animation: soft-pulse 1.5s ease-in-out infinite;
                }
                .lazy-image img { display: block; width: 100%; }
                @keyframes soft-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.55; }
                }

                @media (max-width: 950px) {
                    .section-title { font-size: 1.9rem; }
                    .hero-title { font-size: 2.4rem; }
                    .hero-lead { font-size: 1.15rem; }
                    .signal-grid,
                    .trap-grid,
                    .science-grid,
                    .assistant-grid,
                    .authority-grid {
                        grid-template-columns: 1fr;
                    }
                    .stats-grid { grid-template-columns: 1fr; }
                    .stat-card.wide { grid-column: auto; }
                    .panel { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_checkout_links_stay_on_the_page() {
        assert_eq!(new_tab_target("#offer-box"), None);
        assert_eq!(
            new_tab_target("https://go.disruptybr.com.br/q1yutawwn5"),
            Some("_blank")
        );
    }
}
