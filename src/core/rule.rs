//! # Rule — Regras Difusas
//!
//! Uma [`Rule`] é **dado puro**: uma árvore booleana de cláusulas
//! antecedentes implicando um ou mais pares consequentes
//! `(variável, rótulo)`. A força de disparo é calculada do zero a cada
//! avaliação — nunca há cache entre chamadas.
//!
//! ## Operadores Difusos (família de Gödel)
//!
//! | Operador | Semântica |
//! |----------|-----------|
//! | `AND(a, b)` | `min(a, b)` |
//! | `OR(a, b)`  | `max(a, b)` |
//! | `NOT(a)`    | `1 − a` |
//!
//! Não há curto-circuito semântico: uma subárvore com força 0 continua
//! sendo computada via min/max — o resultado é numericamente idêntico a
//! sempre avaliar tudo.
//!
//! ## Exemplo
//!
//! ```rust
//! // SE rain é "nula" E temp é "alta" E hum é "baja" ENTÃO freq é "alto"
//! let rule = Rule::new(
//!     Antecedent::clause("rain", "nula")
//!         .and(Antecedent::clause("temp", "alta"))
//!         .and(Antecedent::clause("hum", "baja")),
//!     vec![Consequent::new("freq", "alto")],
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Graus fuzzificados por variável: `variável → (rótulo → grau)`.
///
/// Produzido pelo motor na etapa de fuzzificação e consumido como folhas
/// da árvore de antecedentes.
pub type FuzzifiedInputs = BTreeMap<String, BTreeMap<String, f64>>;

/// Árvore booleana de antecedentes sobre cláusulas `(variável, rótulo)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Antecedent {
    /// Folha: o grau fuzzificado de `variable['label']`.
    Clause {
        /// Nome da variável antecedente referenciada.
        variable: String,
        /// Rótulo linguístico referenciado.
        label: String,
    },
    /// Conjunção difusa: `min` dos dois lados.
    And(Box<Antecedent>, Box<Antecedent>),
    /// Disjunção difusa: `max` dos dois lados.
    Or(Box<Antecedent>, Box<Antecedent>),
    /// Negação difusa: `1 − x`.
    Not(Box<Antecedent>),
}

impl Antecedent {
    /// Folha `(variável, rótulo)` — resolvida contra a tabela de variáveis
    /// do motor na construção; referência inexistente falha lá com
    /// `UnknownVariableOrLabel`.
    pub fn clause(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Antecedent::Clause {
            variable: variable.into(),
            label: label.into(),
        }
    }

    /// `self AND other` (min).
    pub fn and(self, other: Antecedent) -> Self {
        Antecedent::And(Box::new(self), Box::new(other))
    }

    /// `self OR other` (max).
    pub fn or(self, other: Antecedent) -> Self {
        Antecedent::Or(Box::new(self), Box::new(other))
    }

    /// `NOT self` (1 − x).
    pub fn not(self) -> Self {
        Antecedent::Not(Box::new(self))
    }

    /// Avalia a árvore sobre os graus fuzzificados, produzindo a
    /// **força de disparo** da regra em `[0, 1]`.
    ///
    /// Cláusulas não resolvidas valem 0 — na prática não ocorrem, pois o
    /// motor valida todas as referências na construção.
    pub fn strength(&self, inputs: &FuzzifiedInputs) -> f64 {
        match self {
            Antecedent::Clause { variable, label } => inputs
                .get(variable)
                .and_then(|degrees| degrees.get(label))
                .copied()
                .unwrap_or(0.0),
            Antecedent::And(lhs, rhs) => lhs.strength(inputs).min(rhs.strength(inputs)),
            Antecedent::Or(lhs, rhs) => lhs.strength(inputs).max(rhs.strength(inputs)),
            Antecedent::Not(inner) => 1.0 - inner.strength(inputs),
        }
    }

    /// Visita todas as cláusulas folha (usado na validação do motor).
    pub fn for_each_clause(&self, f: &mut impl FnMut(&str, &str)) {
        match self {
            Antecedent::Clause { variable, label } => f(variable, label),
            Antecedent::And(lhs, rhs) | Antecedent::Or(lhs, rhs) => {
                lhs.for_each_clause(f);
                rhs.for_each_clause(f);
            }
            Antecedent::Not(inner) => inner.for_each_clause(f),
        }
    }
}

/// Par consequente `(variável, rótulo)` de uma regra.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Consequent {
    /// Nome da variável de saída.
    pub variable: String,
    /// Rótulo de saída cuja forma será truncada pela força de disparo.
    pub label: String,
}

impl Consequent {
    /// Cria um consequente `(variável, rótulo)`.
    pub fn new(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            label: label.into(),
        }
    }
}

/// Regra difusa: antecedente + um ou mais consequentes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
    /// Árvore booleana de cláusulas de entrada.
    pub antecedent: Antecedent,
    /// Pares `(variável, rótulo)` de saída implicados pela regra.
    pub consequents: Vec<Consequent>,
}

impl Rule {
    /// Cria uma regra. A validação das referências acontece na
    /// construção do motor, não aqui — a regra é dado puro.
    pub fn new(antecedent: Antecedent, consequents: Vec<Consequent>) -> Self {
        Self {
            antecedent,
            consequents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees() -> FuzzifiedInputs {
        let mut rain = BTreeMap::new();
        rain.insert("nula".to_string(), 0.7);
        rain.insert("alta".to_string(), 0.2);
        let mut hum = BTreeMap::new();
        hum.insert("baja".to_string(), 0.4);

        let mut inputs = BTreeMap::new();
        inputs.insert("rain".to_string(), rain);
        inputs.insert("hum".to_string(), hum);
        inputs
    }

    /// AND é min dos graus das folhas.
    #[test]
    fn test_and_is_min() {
        let expr = Antecedent::clause("rain", "nula").and(Antecedent::clause("hum", "baja"));
        assert_eq!(expr.strength(&degrees()), 0.4);
    }

    /// OR é max dos graus das folhas.
    #[test]
    fn test_or_is_max() {
        let expr = Antecedent::clause("rain", "alta").or(Antecedent::clause("hum", "baja"));
        assert_eq!(expr.strength(&degrees()), 0.4);
    }

    /// NOT é o complemento 1 − x, inclusive aninhado.
    #[test]
    fn test_not_is_complement() {
        let expr = Antecedent::clause("rain", "nula").not();
        assert!((expr.strength(&degrees()) - 0.3).abs() < 1e-12);

        let nested = Antecedent::clause("rain", "alta")
            .or(Antecedent::clause("hum", "baja").not());
        // max(0.2, 1 − 0.4) = 0.6
        assert!((nested.strength(&degrees()) - 0.6).abs() < 1e-12);
    }

    /// Uma subárvore de força 0 não é pulada: o resultado é idêntico a
    /// computar o min completo.
    #[test]
    fn test_zero_strength_still_min() {
        let mut inputs = degrees();
        inputs
            .get_mut("rain")
            .unwrap()
            .insert("nula".to_string(), 0.0);
        let expr = Antecedent::clause("rain", "nula").and(Antecedent::clause("hum", "baja"));
        assert_eq!(expr.strength(&inputs), 0.0);
    }
}
