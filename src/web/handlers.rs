//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Formulário de leituras |
//! | `evaluate` | POST | HTML completo | Página com o cartão de resultado |
//! | `status` | GET | JSON | Health check / readiness |
//!
//! ## Divisão de Responsabilidade com o Motor
//!
//! Esta camada é dona da validação de **entrada do usuário**: os campos
//! chegam como texto e são parseados aqui (parse-or-reject); texto não
//! numérico ou não finito vira um cartão de erro, nunca chega ao motor.
//! Já leitura numérica fora do universo **não** é rejeitada — o motor a
//! limita silenciosamente por projeto. `NoRuleFired` é renderizado como
//! cartão neutro de "dados insuficientes": erro recuperável, nunca crash.

use std::time::Instant;

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use maud::Markup;

use super::state::AppState;
use super::templates::{self, Outcome, ResultView};
use crate::error::FuzzyError;

/// Resposta do endpoint `/status` — o modelo é construído no startup,
/// então um processo que responde está sempre pronto.
#[derive(serde::Serialize)]
pub struct StatusResponse {
    /// `true` quando o processo está servindo com o modelo construído.
    pub ready: bool,
}

/// Campos crus do formulário de leituras. Chegam como texto de
/// propósito: o parse-or-reject é responsabilidade desta camada.
#[derive(serde::Deserialize)]
pub struct ReadingsForm {
    /// Temperatura em °C, como digitada.
    pub temp: String,
    /// Umidade relativa em %, como digitada.
    pub hum: String,
    /// Chuva semanal em mm, como digitada.
    pub rain: String,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: Markup) -> Html<String> {
    Html(m.into_string())
}

/// Parseia um campo do formulário como f64 finito.
fn parse_reading(field_label: &str, raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!(
            "O campo \"{field_label}\" precisa de um número (recebido: \"{trimmed}\")."
        )),
    }
}

/// GET `/` — Formulário de leituras, sem resultado.
pub async fn index() -> Html<String> {
    markup_to_html(templates::full_page(None))
}

/// GET `/status` — Health check simples em JSON.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { ready: true })
}

/// POST `/` — Avalia as três leituras e re-renderiza a página.
///
/// ## Fluxo
///
/// ```text
/// 1. Parse dos três campos de texto (rejeita não numéricos)
/// 2. advisor.recommend(temp, hum, rain) — pura, sem lock
/// 3. Renderiza cartão de resultado / neutro (NoRuleFired) / erro
/// ```
pub async fn evaluate(
    State(state): State<AppState>,
    Form(form): Form<ReadingsForm>,
) -> Html<String> {
    // Parse-or-reject: validação de texto é responsabilidade daqui
    let parsed = parse_reading("Temperatura", &form.temp)
        .and_then(|temp| parse_reading("Umidade", &form.hum).map(|hum| (temp, hum)))
        .and_then(|(temp, hum)| {
            parse_reading("Chuva", &form.rain).map(|rain| (temp, hum, rain))
        });
    let (temp, hum, rain) = match parsed {
        Ok(values) => values,
        Err(message) => {
            tracing::warn!(error = %message, "Formulário com campo não numérico");
            return markup_to_html(templates::full_page(Some(&Outcome::InputError(message))));
        }
    };

    let t0 = Instant::now();
    let outcome = match state.advisor.recommend(temp, hum, rain) {
        Ok(recommendation) => {
            let elapsed_us = t0.elapsed().as_micros();
            tracing::info!(
                temp,
                hum,
                rain,
                value = recommendation.value,
                label = %recommendation.label,
                elapsed_us = elapsed_us as u64,
                "Recomendação calculada"
            );
            Outcome::Success(ResultView {
                temp,
                hum,
                rain,
                recommendation,
                elapsed_us,
            })
        }
        Err(FuzzyError::NoRuleFired(variable)) => {
            tracing::info!(temp, hum, rain, variable = %variable, "Nenhuma regra disparou");
            Outcome::NoRecommendation
        }
        Err(e) => {
            // MissingInput aqui seria bug nosso (as três leituras são
            // sempre fornecidas); ainda assim vira resposta, não panic.
            tracing::error!(error = %e, "Falha inesperada na inferência");
            Outcome::InputError(format!("Erro interno na avaliação: {e}"))
        }
    };

    markup_to_html(templates::full_page(Some(&outcome)))
}
