//! # Módulo Web — A Interface do Modelo Difuso
//!
//! Camada web da aplicação, construída com **Axum** + **Maud**. É glue
//! fino por projeto: todo o conteúdo algorítmico vive em
//! [`crate::engine`]; aqui só há roteamento, parse do formulário e
//! renderização.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ Browser (formulário HTML)                  │
//! ├────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                  │
//! │  ├── GET  /        → formulário            │
//! │  ├── POST /        → página com resultado  │
//! │  └── GET  /status  → JSON: pronto?         │
//! ├────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir)       │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// O estado `AppState` (o advisor imutável num `Arc`) é compartilhado
/// entre os handlers via extrator `State<AppState>` do Axum.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página única: formulário + resultado ─────────────
        .route("/", get(handlers::index).post(handlers::evaluate))
        // ── API JSON ─────────────────────────────────────────
        .route("/status", get(handlers::status))
        // ── Arquivos estáticos ───────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
