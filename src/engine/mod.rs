//! # Módulo Engine — Inferência e Classificação
//!
//! Este módulo contém as etapas finais do pipeline difuso:
//!
//! - [`InferenceEngine`] — fuzzificação, disparo das regras, agregação
//!   por max e defuzzificação por centroide (Mamdani clássico);
//! - [`Classifier`] — valor defuzzificado → rótulo discreto + orientação.
//!
//! O motor é construído **uma única vez** no startup a partir das
//! definições fixas do modelo e fica somente leitura pelo resto da vida
//! do processo — `evaluate` não toma lock e pode ser chamado de muitas
//! tasks simultaneamente.
//!
//! Veja [`InferenceEngine`] para os detalhes do pipeline.

/// Sub-módulo com o motor de inferência Mamdani.
pub mod inference;

/// Sub-módulo com o classificador por limiares.
pub mod classifier;

// Re-exports para acesso via `crate::engine::InferenceEngine`.
pub use classifier::{Band, Classification, Classifier};
pub use inference::InferenceEngine;
