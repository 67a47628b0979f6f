//! # Módulo Core — Tipos Fundamentais do Domínio Difuso
//!
//! Este módulo agrupa os **tipos fundamentais** do sistema de inferência
//! difusa. Tudo na Irrigação Difusa gira em torno destes tipos:
//!
//! - [`Universe`] — domínio numérico limitado e discretizado de uma variável
//! - [`MembershipFunction`] — forma trapezoidal/triangular avaliada ponto a ponto
//! - [`LinguisticVariable`] — conjunto nomeado de rótulos sobre um universo
//! - [`Role`] — papel da variável: antecedente (entrada) ou consequente (saída)
//! - [`Antecedent`] — árvore booleana de cláusulas (AND/OR/NOT difusos)
//! - [`Rule`] — antecedente + consequentes; dado puro, sem estado
//!
//! ## O Fluxo de Dados
//!
//! Os dados fluem numa única direção, sem estado entre chamadas:
//!
//! ```text
//! leitura crisp → clamp (Universe) → fuzzificação (LinguisticVariable)
//!   → força de disparo (Rule) → agregação → defuzzificação → classificação
//! ```
//!
//! As três últimas etapas vivem em [`crate::engine`].

/// Sub-módulo com a implementação de [`Universe`] — domínio numérico.
pub mod universe;

/// Sub-módulo com a implementação de [`MembershipFunction`].
pub mod membership;

/// Sub-módulo com a implementação de [`LinguisticVariable`] e [`Role`].
pub mod variable;

/// Sub-módulo com a implementação de [`Rule`], [`Antecedent`] e [`Consequent`].
pub mod rule;

// Re-exports para conveniência — permite usar `crate::core::Universe` diretamente.
pub use membership::MembershipFunction;
pub use rule::{Antecedent, Consequent, FuzzifiedInputs, Rule};
pub use universe::Universe;
pub use variable::{LinguisticVariable, Role};
