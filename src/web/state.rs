//! # Estado da Aplicação Web
//!
//! Define o estado compartilhado entre todos os handlers Axum.
//!
//! Diferente de um sistema com estado mutável, aqui **não há lock
//! nenhum**: o [`IrrigationAdvisor`] é construído uma única vez no
//! startup e fica somente leitura pelo resto da vida do processo. O
//! `Arc` existe apenas para compartilhar a referência entre as tasks do
//! servidor — cada requisição chama `recommend()` com `&self`, alocando
//! seus próprios buffers.

use std::sync::Arc;

use crate::model::IrrigationAdvisor;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Modelo difuso de irrigação — imutável após o startup.
    pub advisor: Arc<IrrigationAdvisor>,
}
