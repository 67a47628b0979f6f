//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates renderizados em tempo de compilação com o macro
//! [`maud`](https://maud.lambda.xyz/). O fluxo é o clássico
//! formulário → POST → página completa re-renderizada com o cartão de
//! resultado (o mesmo fluxo da rota única do app original).
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── nav-bar ───────────────────┐
//! │ ID │ Irrigação Difusa              │ pronto │
//! ├────────────────────────────────────────────┤
//! │  Formulário: temp (°C) | hum (%) | rain (mm)│
//! │  [Avaliar]                                  │
//! ├────────────────────────────────────────────┤
//! │  Cartão de resultado / erro (após POST)     │
//! │   badge │ riegos/semana │ orientação        │
//! └────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, DOCTYPE};

use crate::model::Recommendation;

/// Resultado de uma avaliação pronto para renderização.
pub struct ResultView {
    /// Temperatura informada (°C), já validada como numérica.
    pub temp: f64,
    /// Umidade relativa informada (%).
    pub hum: f64,
    /// Chuva semanal informada (mm).
    pub rain: f64,
    /// Recomendação produzida pelo modelo.
    pub recommendation: Recommendation,
    /// Duração da inferência, para a linha de métricas.
    pub elapsed_us: u128,
}

/// Desfecho de um POST do formulário, do ponto de vista da página.
pub enum Outcome {
    /// Inferência concluída com recomendação.
    Success(ResultView),
    /// Nenhuma regra disparou — mensagem neutra, não é crash.
    NoRecommendation,
    /// Campo não numérico ou não finito — erro desta camada, nunca do motor.
    InputError(String),
}

/// Classe CSS do badge a partir do rótulo da recomendação.
fn badge_class(label: &str) -> String {
    format!("badge badge-{}", label.to_lowercase())
}

/// Página principal — formulário de leituras e, após um POST, o
/// cartão de resultado ou de erro.
pub fn full_page(outcome: Option<&Outcome>) -> Markup {
    // Ecoa as leituras submetidas de volta no formulário
    let (temp, hum, rain) = match outcome {
        Some(Outcome::Success(view)) => (
            Some(view.temp.to_string()),
            Some(view.hum.to_string()),
            Some(view.rain.to_string()),
        ),
        _ => (None, None, None),
    };

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Irrigação Difusa — Recomendação de Rega" }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                div class="app-shell" {
                    // Navigation bar
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "ID" }
                            span class="nav-brand-text" {
                                "Irrigação " em { "Difusa" }
                            }
                        }
                        div class="nav-status" {
                            span class="nav-status-dot ready" {}
                            span { "modelo pronto" }
                        }
                    }

                    div class="app-container" {
                        // Formulário de leituras
                        section class="card form-card" {
                            h2 { "Leituras da semana" }
                            p class="form-hint" {
                                "Informe as três leituras; o modelo difuso devolve "
                                "quantas regas por semana são recomendadas."
                            }
                            form method="post" action="/" {
                                div class="form-grid" {
                                    label class="form-field" {
                                        span { "Temperatura (°C)" }
                                        input type="text" name="temp" inputmode="decimal"
                                            placeholder="0 – 45"
                                            value=[temp.as_deref()];
                                    }
                                    label class="form-field" {
                                        span { "Umidade relativa (%)" }
                                        input type="text" name="hum" inputmode="decimal"
                                            placeholder="0 – 100"
                                            value=[hum.as_deref()];
                                    }
                                    label class="form-field" {
                                        span { "Chuva semanal (mm)" }
                                        input type="text" name="rain" inputmode="decimal"
                                            placeholder="0 – 60"
                                            value=[rain.as_deref()];
                                    }
                                }
                                button type="submit" class="submit-btn" { "Avaliar" }
                            }
                        }

                        // Cartão de resultado (presente só após um POST)
                        @if let Some(outcome) = outcome {
                            (outcome_card(outcome))
                        }
                    }
                }
            }
        }
    }
}

/// Cartão de resultado, recomendação neutra ou erro de entrada.
fn outcome_card(outcome: &Outcome) -> Markup {
    match outcome {
        Outcome::Success(view) => {
            let rec = &view.recommendation;
            html! {
                section class="card result-card" {
                    h2 { "Recomendação" }
                    div class="result-header" {
                        span class=(badge_class(&rec.label)) { (rec.label) }
                        span class="result-value" {
                            (format!("{:.2}", rec.value)) " riegos/semana"
                        }
                    }
                    p class="result-advisory" { (rec.advisory) }
                    div class="result-readings" {
                        span { (format!("🌡 {} °C", view.temp)) }
                        span { (format!("💧 {} %", view.hum)) }
                        span { (format!("🌧 {} mm", view.rain)) }
                    }
                    div class="metrics-line" {
                        (format!("⚡ inferência em {} µs", view.elapsed_us))
                    }
                }
            }
        }
        Outcome::NoRecommendation => html! {
            section class="card result-card neutral" {
                h2 { "Sem recomendação" }
                p {
                    "Nenhuma regra do modelo cobre esta combinação de "
                    "leituras — dados insuficientes para recomendar uma "
                    "frequência de rega. Ajuste as leituras e tente novamente."
                }
            }
        },
        Outcome::InputError(message) => html! {
            section class="card result-card error" {
                h2 { "Entrada inválida" }
                p { (message) }
            }
        },
    }
}
