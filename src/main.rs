#![allow(dead_code)]
//! # Irrigação Difusa — Recomendação de Rega por Inferência Mamdani
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! O sistema transforma três leituras crisp — temperatura (°C), umidade
//! relativa (%) e chuva semanal (mm) — em uma recomendação de frequência
//! de rega (riegos/semana), com rótulo discreto e orientação textual,
//! via inferência difusa Mamdani (fuzzificação → disparo de regras →
//! agregação → centroide → classificação).
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Constrói o IrrigationAdvisor (validação das definições fixas)
//!   │     — falha aqui aborta o startup: definição inválida é fatal
//!   ├── Monta AppState (Arc no advisor imutável) e Router
//!   └── Serve em http://0.0.0.0:3000
//! ```
//!
//! Não há segunda fase: o modelo difuso é construído em microssegundos,
//! então o servidor já nasce pronto. Depois do startup nada é mutado —
//! cada requisição só chama `recommend()`, pura e sem locks.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run
//! ```

/// Módulo `core` — tipos fundamentais: Universe, MembershipFunction,
/// LinguisticVariable, Rule.
mod core;

/// Módulo `engine` — motor de inferência Mamdani e classificador.
mod engine;

/// Módulo `error` — taxonomia de erros tipada do núcleo difuso.
mod error;

/// Módulo `model` — definições fixas do modelo de irrigação + fachada.
mod model;

/// Módulo `web` — servidor web axum, handlers HTTP e templates.
mod web;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::model::IrrigationAdvisor;
use crate::web::state::AppState;

/// Função principal assíncrona da Irrigação Difusa.
///
/// # Erros
///
/// Retorna erro se:
/// - As definições fixas do modelo forem inválidas (bug de configuração)
/// - Não conseguir fazer bind na porta 3000
/// - O servidor axum falhar durante execução
#[tokio::main]
async fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌱 Irrigação Difusa — Starting...");

    // Constrói o modelo difuso uma única vez. Erro aqui é fatal por
    // projeto: um motor com definição inválida não pode existir.
    let advisor = IrrigationAdvisor::new()
        .map(Arc::new)
        .context("Falha ao construir o modelo difuso de irrigação")?;
    tracing::info!(
        variables = advisor.variable_count(),
        rules = advisor.rule_count(),
        "Modelo difuso construído"
    );

    // Estado compartilhado — o advisor imutável, sem locks.
    let state = AppState { advisor };

    // Cria o router com todas as rotas da aplicação.
    let app = web::create_router(state);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {addr}"))?;
    tracing::info!("🚀 Server running at http://localhost:3000");

    // Inicia o servidor axum — bloqueia até que o processo seja encerrado.
    axum::serve(listener, app).await?;

    Ok(())
}
