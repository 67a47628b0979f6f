//! # LinguisticVariable — Variável Linguística
//!
//! Uma [`LinguisticVariable`] agrupa, sobre um único [`Universe`], um
//! conjunto nomeado de rótulos linguísticos, cada um com sua
//! [`MembershipFunction`]. Exemplo do domínio de irrigação:
//!
//! ```text
//! rain : [0, 60] mm/semana  (antecedente)
//!   ├── "nula"     trapézio (0, 0, 2, 5)
//!   ├── "moderada" triângulo (3, 12, 22)
//!   └── "alta"     trapézio (18, 35, 60, 60)
//! ```
//!
//! ## Papel (Role)
//!
//! Cada variável é **antecedente** (entrada — aparece no "se" das regras)
//! ou **consequente** (saída — aparece no "então"). O motor valida o papel
//! na construção: uma cláusula de antecedente não pode referenciar uma
//! variável de saída, e vice-versa.
//!
//! ## Construção via Builder
//!
//! Os rótulos são adicionados um a um com [`with_label`], que rejeita
//! duplicatas; a variável é selada ao ser entregue ao motor — depois
//! disso nada mais é mutado.
//!
//! [`with_label`]: LinguisticVariable::with_label

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};

use super::{MembershipFunction, Universe};

/// Papel de uma variável no sistema de regras.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Variável de entrada — referenciada nos antecedentes das regras.
    Antecedent,
    /// Variável de saída — referenciada nos consequentes das regras.
    Consequent,
}

/// Variável linguística: nome + universo + papel + rótulos.
///
/// Os rótulos ficam em `BTreeMap` para iteração determinística —
/// parte da garantia de saída bit-idêntica para entradas idênticas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinguisticVariable {
    /// Nome da variável (ex: "rain").
    name: String,
    /// Domínio numérico da variável.
    universe: Universe,
    /// Papel: antecedente ou consequente.
    role: Role,
    /// Rótulo → função de pertinência. Nomes únicos por variável.
    labels: BTreeMap<String, MembershipFunction>,
}

impl LinguisticVariable {
    /// Inicia a construção de uma variável **antecedente** (entrada).
    pub fn antecedent(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            role: Role::Antecedent,
            labels: BTreeMap::new(),
        }
    }

    /// Inicia a construção de uma variável **consequente** (saída).
    pub fn consequent(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            role: Role::Consequent,
            labels: BTreeMap::new(),
        }
    }

    /// Adiciona um rótulo com sua função de pertinência (estilo builder).
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidDefinition`] se o rótulo já existir nesta
    /// variável.
    pub fn with_label(
        mut self,
        label: impl Into<String>,
        mf: MembershipFunction,
    ) -> FuzzyResult<Self> {
        let label = label.into();
        if self.labels.contains_key(&label) {
            return Err(FuzzyError::InvalidDefinition(format!(
                "rótulo duplicado '{}' na variável '{}'",
                label, self.name
            )));
        }
        self.labels.insert(label, mf);
        Ok(self)
    }

    /// Nome da variável.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Universo da variável.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Papel da variável (antecedente/consequente).
    pub fn role(&self) -> Role {
        self.role
    }

    /// Rótulos declarados e suas funções de pertinência.
    pub fn labels(&self) -> &BTreeMap<String, MembershipFunction> {
        &self.labels
    }

    /// `true` se o rótulo estiver declarado nesta variável.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// **Fuzzificação**: converte a leitura crisp `x` em um grau de
    /// pertinência por rótulo.
    ///
    /// O valor é primeiro limitado ao universo (clamp silencioso) e então
    /// cada rótulo é avaliado de forma independente — rótulos podem se
    /// sobrepor e os graus não precisam somar 1.
    pub fn fuzzify(&self, x: f64) -> BTreeMap<String, f64> {
        let clamped = self.universe.clamp(x);
        self.labels
            .iter()
            .map(|(label, mf)| (label.clone(), mf.degree(clamped)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rain_variable() -> LinguisticVariable {
        let universe = Universe::new(0.0, 60.0, 0.5).unwrap();
        LinguisticVariable::antecedent("rain", universe)
            .with_label("nula", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 5.0).unwrap())
            .unwrap()
            .with_label("moderada", MembershipFunction::triangle(3.0, 12.0, 22.0).unwrap())
            .unwrap()
            .with_label("alta", MembershipFunction::trapezoid(18.0, 35.0, 60.0, 60.0).unwrap())
            .unwrap()
    }

    /// A fuzzificação avalia todos os rótulos independentemente;
    /// rótulos sobrepostos podem ter graus simultaneamente positivos.
    #[test]
    fn test_fuzzify_overlapping_labels() {
        let rain = rain_variable();
        let degrees = rain.fuzzify(4.0);
        // 4.0 está na descida de "nula" e na subida de "moderada"
        assert!(degrees["nula"] > 0.0);
        assert!(degrees["moderada"] > 0.0);
        assert_eq!(degrees["alta"], 0.0);
    }

    /// Leituras fora do universo são limitadas antes da fuzzificação:
    /// fuzzify(min − 10) ≡ fuzzify(min).
    #[test]
    fn test_fuzzify_clamps() {
        let rain = rain_variable();
        assert_eq!(rain.fuzzify(-10.0), rain.fuzzify(0.0));
        assert_eq!(rain.fuzzify(200.0), rain.fuzzify(60.0));
    }

    /// Rótulo duplicado é rejeitado pelo builder.
    #[test]
    fn test_duplicate_label_rejected() {
        let universe = Universe::new(0.0, 10.0, 0.1).unwrap();
        let result = LinguisticVariable::antecedent("x", universe)
            .with_label("baixa", MembershipFunction::triangle(0.0, 2.0, 4.0).unwrap())
            .unwrap()
            .with_label("baixa", MembershipFunction::triangle(3.0, 5.0, 7.0).unwrap());
        assert!(matches!(result, Err(FuzzyError::InvalidDefinition(_))));
    }
}
