//! # Universe — Domínio Numérico de uma Variável
//!
//! Um [`Universe`] é o domínio limitado e discretizável de uma variável
//! linguística: `[min, max]` com passo de discretização `step`.
//!
//! Ele cumpre dois papéis no pipeline:
//!
//! 1. **Clamp das entradas crisp** — leituras físicas fora do intervalo
//!    (sensor descalibrado, chuva extrema) são limitadas silenciosamente
//!    a `[min, max]`. Isso é decisão de projeto, não erro: o motor fica
//!    total sobre qualquer valor real.
//! 2. **Grade de defuzzificação** — [`Universe::samples()`] gera os pontos
//!    `min, min+step, …, max` sobre os quais o centroide é calculado.
//!
//! ## Exemplo
//!
//! ```rust
//! let freq = Universe::new(0.0, 7.0, 0.05)?;
//! assert_eq!(freq.clamp(9.3), 7.0);
//! assert_eq!(freq.samples().len(), 141); // ambos os extremos incluídos
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};

/// Tolerância para passos que não dividem o intervalo exatamente em
/// aritmética binária (ex: 7.0 / 0.05 = 139.999…); garante que o extremo
/// superior entre na grade quando matematicamente deveria.
const GRID_TOLERANCE: f64 = 1e-6;

/// Domínio numérico limitado e discretizado de uma variável linguística.
///
/// Invariantes (garantidos em [`Universe::new`]):
/// - `min < max`
/// - `step > 0`
/// - todos os campos finitos
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    /// Limite inferior do domínio.
    min: f64,
    /// Limite superior do domínio.
    max: f64,
    /// Passo de discretização usado na defuzzificação.
    step: f64,
}

impl Universe {
    /// Cria um universo validado.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidDefinition`] se `min ≥ max`, `step ≤ 0`,
    /// ou algum valor não for finito.
    pub fn new(min: f64, max: f64, step: f64) -> FuzzyResult<Self> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(FuzzyError::InvalidDefinition(format!(
                "universo com limites não finitos: [{min}, {max}] passo {step}"
            )));
        }
        if min >= max {
            return Err(FuzzyError::InvalidDefinition(format!(
                "universo com intervalo não positivo: [{min}, {max}]"
            )));
        }
        if step <= 0.0 {
            return Err(FuzzyError::InvalidDefinition(format!(
                "universo com passo não positivo: {step}"
            )));
        }
        Ok(Self { min, max, step })
    }

    /// Limite inferior do domínio.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Limite superior do domínio.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Passo de discretização.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Limita `x` ao intervalo `[min, max]`.
    ///
    /// Leituras fora do universo **não são erro** — são limitadas
    /// silenciosamente. `evaluate(min - 10)` é idêntico a `evaluate(min)`.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Grade de discretização: `min, min+step, …, max`.
    ///
    /// Ambos os extremos são incluídos. A contagem usa uma tolerância
    /// pequena para compensar passos sem representação binária exata
    /// (0.05, 0.1, …); o último ponto é saturado em `max`.
    pub fn samples(&self) -> Vec<f64> {
        let n = ((self.max - self.min) / self.step + GRID_TOLERANCE).floor() as usize;
        (0..=n)
            .map(|i| (self.min + i as f64 * self.step).min(self.max))
            .collect()
    }
}
