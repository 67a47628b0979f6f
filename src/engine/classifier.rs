//! # Classifier — Classificação do Valor Defuzzificado
//!
//! O [`Classifier`] converte o valor crisp defuzzificado (riegos/semana)
//! em um **rótulo discreto** (badge) e uma **mensagem de orientação**.
//!
//! ## Bandas de Classificação
//!
//! Limiares em ordem crescente, com limite superior **inclusivo**:
//!
//! ```text
//! value ≤ 0.25 → "Ninguno"
//! value ≤ 1.5  → "Bajo"
//! value ≤ 3.5  → "Medio"
//! senão        → "Alto"
//! ```
//!
//! Limiares e rótulos são **configuração** fornecida junto com a base de
//! regras (em [`crate::model`]), não constantes do classificador.
//!
//! ## Orientação
//!
//! O texto é gerado deterministicamente a partir do valor:
//! - na banda mais baixa: mensagem fixa de "não regar" (configurada);
//! - acima dela: intervalo em dias `7 / max(value, 1e-6)` — o piso de
//!   `1e-6` protege a divisão, exatamente como no original.

use serde::Serialize;

use crate::error::{FuzzyError, FuzzyResult};

/// Dias por semana — numerador do intervalo de rega.
const DAYS_PER_WEEK: f64 = 7.0;

/// Piso do denominador ao formatar o intervalo de rega.
const MIN_FREQUENCY: f64 = 1e-6;

/// Banda de classificação: `value ≤ upper → label`.
#[derive(Clone, Debug, Serialize)]
pub struct Band {
    /// Limite superior inclusivo da banda.
    pub upper: f64,
    /// Rótulo atribuído a valores dentro da banda.
    pub label: String,
}

impl Band {
    /// Cria uma banda `value ≤ upper → label`.
    pub fn new(upper: f64, label: impl Into<String>) -> Self {
        Self {
            upper,
            label: label.into(),
        }
    }
}

/// Resultado da classificação: rótulo discreto + orientação textual.
#[derive(Clone, Debug, Serialize)]
pub struct Classification {
    /// Rótulo discreto (badge) da recomendação.
    pub label: String,
    /// Mensagem de orientação gerada a partir do valor.
    pub advisory: String,
}

/// Classificador por limiares fixos, puro e configurável.
#[derive(Clone, Debug)]
pub struct Classifier {
    /// Bandas em ordem crescente de limite superior.
    bands: Vec<Band>,
    /// Rótulo para valores acima da última banda.
    final_label: String,
    /// Mensagem fixa para a banda mais baixa (sem rega).
    no_action_message: String,
}

impl Classifier {
    /// Cria um classificador validado.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidDefinition`] se não houver bandas ou se os
    /// limiares não forem finitos e estritamente crescentes.
    pub fn new(
        bands: Vec<Band>,
        final_label: impl Into<String>,
        no_action_message: impl Into<String>,
    ) -> FuzzyResult<Self> {
        if bands.is_empty() {
            return Err(FuzzyError::InvalidDefinition(
                "classificador sem bandas".to_string(),
            ));
        }
        for pair in bands.windows(2) {
            if pair[0].upper >= pair[1].upper {
                return Err(FuzzyError::InvalidDefinition(format!(
                    "limiares do classificador fora de ordem: {} ≥ {}",
                    pair[0].upper, pair[1].upper
                )));
            }
        }
        if bands.iter().any(|b| !b.upper.is_finite()) {
            return Err(FuzzyError::InvalidDefinition(
                "limiar de classificação não finito".to_string(),
            ));
        }
        Ok(Self {
            bands,
            final_label: final_label.into(),
            no_action_message: no_action_message.into(),
        })
    }

    /// Classifica o valor defuzzificado: primeira banda cujo limite
    /// superior (inclusivo) cobre o valor; acima de todas, o rótulo final.
    pub fn classify(&self, value: f64) -> Classification {
        let label = self
            .bands
            .iter()
            .find(|band| value <= band.upper)
            .map(|band| band.label.clone())
            .unwrap_or_else(|| self.final_label.clone());

        let advisory = if value <= self.bands[0].upper {
            self.no_action_message.clone()
        } else {
            let days = DAYS_PER_WEEK / value.max(MIN_FREQUENCY);
            format!("≈ regar a cada {days:.1} dias.")
        };

        Classification { label, advisory }
    }
}
