//! # Erros do Motor Difuso
//!
//! Taxonomia de erros do sistema, dividida em duas famílias:
//!
//! | Erro | Fase | Gravidade |
//! |------|------|-----------|
//! | [`FuzzyError::InvalidDefinition`] | Construção | Fatal — o motor não pode ser construído |
//! | [`FuzzyError::UnknownVariableOrLabel`] | Construção | Fatal — cláusula não resolvida |
//! | [`FuzzyError::MissingInput`] | Por chamada | Bug do chamador — antecedente sem leitura |
//! | [`FuzzyError::NoRuleFired`] | Por chamada | Recuperável — exibir mensagem neutra |
//!
//! Erros de construção abortam o startup (propagados via `anyhow` no `main`).
//! Erros por chamada são retornados como `Result` tipado — esta função vive
//! no caminho de uma requisição HTTP e precisa sempre produzir uma resposta,
//! nunca um panic.
//!
//! ## O que NÃO é erro
//!
//! Leitura fora do universo (ex: chuva = 200mm) **não** é erro: ela é
//! silenciosamente limitada (clamp) ao intervalo `[min, max]` do universo.
//! É comportamento documentado, não defeito — mantém o motor total sobre
//! qualquer entrada real.

use thiserror::Error;

/// Erro do motor de inferência difusa.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Definição estrutural inválida: universo com intervalo/passo não
    /// positivo, pontos de controle decrescentes, rótulo duplicado,
    /// base de regras vazia, papel (antecedente/consequente) trocado.
    #[error("definição inválida: {0}")]
    InvalidDefinition(String),

    /// Uma cláusula de regra referencia variável ou rótulo não declarado.
    /// Detectado na construção do motor, nunca em tempo de avaliação.
    #[error("variável ou rótulo desconhecido: {variable}['{label}']")]
    UnknownVariableOrLabel {
        /// Nome da variável referenciada pela cláusula.
        variable: String,
        /// Rótulo linguístico referenciado pela cláusula.
        label: String,
    },

    /// O chamador não forneceu leitura para uma variável antecedente.
    #[error("entrada ausente para a variável '{0}'")]
    MissingInput(String),

    /// Nenhuma regra disparou com força > 0 para esta variável de saída:
    /// o denominador do centroide seria zero. O original (scikit-fuzzy)
    /// deixa esse caso indefinido; aqui ele é um erro explícito.
    #[error("nenhuma regra disparou para a variável de saída '{0}'")]
    NoRuleFired(String),
}

/// Alias de resultado usado em todo o núcleo difuso.
pub type FuzzyResult<T> = Result<T, FuzzyError>;
