//! # InferenceEngine — Motor de Inferência Mamdani
//!
//! O [`InferenceEngine`] é o coração do sistema: detém as variáveis
//! linguísticas e a base de regras, **imutável após a construção**, e
//! executa uma passada completa de inferência por chamada de
//! [`evaluate`](InferenceEngine::evaluate):
//!
//! ```text
//! 1. Fuzzificação   — clamp + grau por rótulo, para cada antecedente
//! 2. Disparo        — força de cada regra via min/max/1−x sobre os graus
//! 3. Agregação      — por (variável de saída, rótulo): max das forças
//!                     das regras que o atingem (implicação por corte)
//! 4. Defuzzificação — centroide da curva combinada sobre a grade do universo
//! ```
//!
//! ## Concorrência
//!
//! `evaluate` recebe `&self` e aloca todos os buffers por chamada — não há
//! estado mutável compartilhado, nenhum lock, nenhuma E/S. Um mesmo motor
//! pode ser usado simultaneamente por muitas tasks (no servidor web ele
//! vive num `Arc` dentro do `AppState`). Entradas idênticas produzem saída
//! bit-idêntica.
//!
//! ## Validação
//!
//! Toda a validação acontece em [`InferenceEngine::new`]: referência de
//! cláusula não declarada, papel trocado, base de regras vazia etc.
//! Depois disso, `evaluate` só pode falhar com `MissingInput` (bug do
//! chamador) ou `NoRuleFired` (nenhum antecedente casou — recuperável).

use std::collections::BTreeMap;

use crate::core::{FuzzifiedInputs, LinguisticVariable, Role, Rule};
use crate::error::{FuzzyError, FuzzyResult};

/// Motor de inferência difusa Mamdani: variáveis + regras, somente leitura.
#[derive(Debug)]
pub struct InferenceEngine {
    /// Tabela de variáveis por nome (antecedentes e consequentes).
    variables: BTreeMap<String, LinguisticVariable>,
    /// Base de regras, avaliada na íntegra a cada chamada.
    rules: Vec<Rule>,
}

impl InferenceEngine {
    /// Constrói o motor validando todas as definições.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::InvalidDefinition`] — nome de variável duplicado,
    ///   variável sem rótulos, base de regras vazia, regra sem consequente,
    ///   ou papel trocado (antecedente referenciando variável de saída e
    ///   vice-versa).
    /// - [`FuzzyError::UnknownVariableOrLabel`] — cláusula ou consequente
    ///   referenciando variável/rótulo não declarado.
    pub fn new(variables: Vec<LinguisticVariable>, rules: Vec<Rule>) -> FuzzyResult<Self> {
        let mut table: BTreeMap<String, LinguisticVariable> = BTreeMap::new();
        for var in variables {
            if var.labels().is_empty() {
                return Err(FuzzyError::InvalidDefinition(format!(
                    "variável '{}' declarada sem rótulos",
                    var.name()
                )));
            }
            if table.contains_key(var.name()) {
                return Err(FuzzyError::InvalidDefinition(format!(
                    "variável duplicada '{}'",
                    var.name()
                )));
            }
            table.insert(var.name().to_string(), var);
        }

        if rules.is_empty() {
            return Err(FuzzyError::InvalidDefinition(
                "base de regras vazia".to_string(),
            ));
        }

        for rule in &rules {
            // Cláusulas do antecedente: variável declarada, com o rótulo,
            // e com papel de entrada.
            let mut clause_error: Option<FuzzyError> = None;
            rule.antecedent.for_each_clause(&mut |variable, label| {
                if clause_error.is_some() {
                    return;
                }
                clause_error = Self::check_reference(&table, variable, label, Role::Antecedent);
            });
            if let Some(err) = clause_error {
                return Err(err);
            }

            if rule.consequents.is_empty() {
                return Err(FuzzyError::InvalidDefinition(
                    "regra sem consequentes".to_string(),
                ));
            }
            for consequent in &rule.consequents {
                if let Some(err) = Self::check_reference(
                    &table,
                    &consequent.variable,
                    &consequent.label,
                    Role::Consequent,
                ) {
                    return Err(err);
                }
            }
        }

        Ok(Self {
            variables: table,
            rules,
        })
    }

    /// Valida uma referência `(variável, rótulo)` contra a tabela,
    /// exigindo o papel esperado. Retorna o erro em vez de `Result` para
    /// poder ser usada dentro do visitor de cláusulas.
    fn check_reference(
        table: &BTreeMap<String, LinguisticVariable>,
        variable: &str,
        label: &str,
        expected_role: Role,
    ) -> Option<FuzzyError> {
        let Some(var) = table.get(variable) else {
            return Some(FuzzyError::UnknownVariableOrLabel {
                variable: variable.to_string(),
                label: label.to_string(),
            });
        };
        if !var.has_label(label) {
            return Some(FuzzyError::UnknownVariableOrLabel {
                variable: variable.to_string(),
                label: label.to_string(),
            });
        }
        if var.role() != expected_role {
            let expected = match expected_role {
                Role::Antecedent => "antecedente",
                Role::Consequent => "consequente",
            };
            return Some(FuzzyError::InvalidDefinition(format!(
                "variável '{variable}' usada como {expected} mas declarada com o papel oposto"
            )));
        }
        None
    }

    /// Número de variáveis declaradas (para logging de startup).
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Número de regras na base (para logging de startup).
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Executa uma passada completa de inferência.
    ///
    /// Recebe uma leitura crisp por variável antecedente (`nome → valor`)
    /// e devolve um valor defuzzificado por variável consequente.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::MissingInput`] — alguma variável antecedente
    ///   declarada não recebeu leitura.
    /// - [`FuzzyError::NoRuleFired`] — nenhuma regra disparou com força
    ///   positiva para uma variável de saída (denominador do centroide
    ///   seria zero).
    pub fn evaluate(&self, inputs: &BTreeMap<String, f64>) -> FuzzyResult<BTreeMap<String, f64>> {
        // 1. Fuzzificação — uma leitura por variável antecedente.
        let mut fuzzified: FuzzifiedInputs = BTreeMap::new();
        for (name, var) in &self.variables {
            if var.role() != Role::Antecedent {
                continue;
            }
            let reading = inputs
                .get(name)
                .copied()
                .ok_or_else(|| FuzzyError::MissingInput(name.clone()))?;
            fuzzified.insert(name.clone(), var.fuzzify(reading));
        }

        // 2. Disparo — toda regra é avaliada, mesmo as de força zero:
        // a agregação por max torna isso numericamente equivalente.
        let strengths: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| rule.antecedent.strength(&fuzzified).clamp(0.0, 1.0))
            .collect();

        // 3. Agregação — altura implicada por (variável de saída, rótulo):
        // max das forças das regras que atingem aquele par.
        let mut heights: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
        for (rule, strength) in self.rules.iter().zip(&strengths) {
            for consequent in &rule.consequents {
                let entry = heights
                    .entry(consequent.variable.as_str())
                    .or_default()
                    .entry(consequent.label.as_str())
                    .or_insert(0.0);
                *entry = entry.max(*strength);
            }
        }

        // 4. Defuzzificação — centroide por variável de saída.
        let mut outputs = BTreeMap::new();
        for (name, var) in &self.variables {
            if var.role() != Role::Consequent {
                continue;
            }
            let Some(var_heights) = heights.get(name.as_str()) else {
                return Err(FuzzyError::NoRuleFired(name.clone()));
            };
            if !var_heights.values().any(|&height| height > 0.0) {
                return Err(FuzzyError::NoRuleFired(name.clone()));
            }
            let value = Self::centroid(var, var_heights)
                .ok_or_else(|| FuzzyError::NoRuleFired(name.clone()))?;
            outputs.insert(name.clone(), value);
        }

        Ok(outputs)
    }

    /// Centroide (centro de gravidade) da curva combinada de saída.
    ///
    /// Em cada ponto `x` da grade do universo, a curva combinada vale
    /// `max sobre rótulos L de min(grau_L(x), altura_agregada[L])` —
    /// implicação por corte + agregação por max, o Mamdani clássico.
    /// Retorna `None` se a área for zero (nenhuma regra disparou).
    fn centroid(var: &LinguisticVariable, heights: &BTreeMap<&str, f64>) -> Option<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for x in var.universe().samples() {
            let mut mu = 0.0_f64;
            for (label, mf) in var.labels() {
                let height = heights.get(label.as_str()).copied().unwrap_or(0.0);
                mu = mu.max(mf.degree(x).min(height));
            }
            numerator += x * mu;
            denominator += mu;
        }
        if denominator > 0.0 {
            Some(numerator / denominator)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Antecedent, Consequent, MembershipFunction, Universe};

    /// Motor mínimo: uma entrada "carga" com cobertura incompleta
    /// (lacuna entre 4 e 6) e uma saída "ventoinha" com dois rótulos.
    fn fan_engine(rules: Vec<Rule>) -> InferenceEngine {
        let carga = LinguisticVariable::antecedent("carga", Universe::new(0.0, 10.0, 0.1).unwrap())
            .with_label("baixa", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
            .unwrap()
            .with_label("alta", MembershipFunction::trapezoid(6.0, 8.0, 10.0, 10.0).unwrap())
            .unwrap();
        let ventoinha =
            LinguisticVariable::consequent("ventoinha", Universe::new(0.0, 100.0, 1.0).unwrap())
                .with_label("lenta", MembershipFunction::triangle(0.0, 25.0, 50.0).unwrap())
                .unwrap()
                .with_label("rapida", MembershipFunction::triangle(50.0, 75.0, 100.0).unwrap())
                .unwrap();
        InferenceEngine::new(vec![carga, ventoinha], rules).unwrap()
    }

    fn fan_rules() -> Vec<Rule> {
        vec![
            Rule::new(
                Antecedent::clause("carga", "baixa"),
                vec![Consequent::new("ventoinha", "lenta")],
            ),
            Rule::new(
                Antecedent::clause("carga", "alta"),
                vec![Consequent::new("ventoinha", "rapida")],
            ),
        ]
    }

    fn inputs(carga: f64) -> BTreeMap<String, f64> {
        let mut m = BTreeMap::new();
        m.insert("carga".to_string(), carga);
        m
    }

    /// Cláusula referenciando rótulo não declarado falha na construção.
    #[test]
    fn test_unknown_label_rejected_at_construction() {
        let carga = LinguisticVariable::antecedent("carga", Universe::new(0.0, 10.0, 0.1).unwrap())
            .with_label("baixa", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
            .unwrap();
        let saida =
            LinguisticVariable::consequent("ventoinha", Universe::new(0.0, 100.0, 1.0).unwrap())
                .with_label("lenta", MembershipFunction::triangle(0.0, 25.0, 50.0).unwrap())
                .unwrap();
        let rules = vec![Rule::new(
            Antecedent::clause("carga", "inexistente"),
            vec![Consequent::new("ventoinha", "lenta")],
        )];
        let result = InferenceEngine::new(vec![carga, saida], rules);
        assert!(matches!(
            result,
            Err(FuzzyError::UnknownVariableOrLabel { .. })
        ));
    }

    /// Consequente apontando para variável de entrada (papel trocado)
    /// falha na construção com InvalidDefinition.
    #[test]
    fn test_role_mismatch_rejected() {
        let carga = LinguisticVariable::antecedent("carga", Universe::new(0.0, 10.0, 0.1).unwrap())
            .with_label("baixa", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
            .unwrap();
        let rules = vec![Rule::new(
            Antecedent::clause("carga", "baixa"),
            vec![Consequent::new("carga", "baixa")],
        )];
        let result = InferenceEngine::new(vec![carga], rules);
        assert!(matches!(result, Err(FuzzyError::InvalidDefinition(_))));
    }

    /// Base de regras vazia é rejeitada na construção.
    #[test]
    fn test_empty_rule_base_rejected() {
        let carga = LinguisticVariable::antecedent("carga", Universe::new(0.0, 10.0, 0.1).unwrap())
            .with_label("baixa", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
            .unwrap();
        let result = InferenceEngine::new(vec![carga], Vec::new());
        assert!(matches!(result, Err(FuzzyError::InvalidDefinition(_))));
    }

    /// Entrada na lacuna de cobertura (nenhum antecedente casa) retorna
    /// NoRuleFired — nunca um valor silenciosamente sem significado.
    #[test]
    fn test_no_rule_fired_in_coverage_gap() {
        let engine = fan_engine(fan_rules());
        let result = engine.evaluate(&inputs(5.0));
        assert!(matches!(result, Err(FuzzyError::NoRuleFired(_))));
    }

    /// Leitura ausente para um antecedente declarado é MissingInput.
    #[test]
    fn test_missing_input() {
        let engine = fan_engine(fan_rules());
        let result = engine.evaluate(&BTreeMap::new());
        assert!(matches!(result, Err(FuzzyError::MissingInput(_))));
    }

    /// Clamp: avaliar abaixo de min é idêntico a avaliar em min
    /// (e simetricamente acima de max).
    #[test]
    fn test_clamp_equivalence() {
        let engine = fan_engine(fan_rules());
        assert_eq!(
            engine.evaluate(&inputs(-3.0)).unwrap(),
            engine.evaluate(&inputs(0.0)).unwrap()
        );
        assert_eq!(
            engine.evaluate(&inputs(42.0)).unwrap(),
            engine.evaluate(&inputs(10.0)).unwrap()
        );
    }

    /// Determinismo: entradas idênticas contra o motor imutável produzem
    /// saída bit-idêntica.
    #[test]
    fn test_deterministic() {
        let engine = fan_engine(fan_rules());
        let a = engine.evaluate(&inputs(1.7)).unwrap();
        let b = engine.evaluate(&inputs(1.7)).unwrap();
        assert_eq!(a["ventoinha"].to_bits(), b["ventoinha"].to_bits());
    }

    /// Propriedade da agregação por max: uma regra redundante com o mesmo
    /// consequente e força ≤ à de uma regra existente nunca muda a saída.
    #[test]
    fn test_redundant_weaker_rule_is_noop() {
        let baseline = fan_engine(fan_rules());

        let mut redundant = fan_rules();
        // Força idêntica: "baixa AND baixa" = "baixa" (max é idempotente)
        redundant.push(Rule::new(
            Antecedent::clause("carga", "baixa").and(Antecedent::clause("carga", "baixa")),
            vec![Consequent::new("ventoinha", "lenta")],
        ));
        // Força zero: o AND com "alta" (grau 0 em carga = 3.0) anula
        redundant.push(Rule::new(
            Antecedent::clause("carga", "baixa").and(Antecedent::clause("carga", "alta")),
            vec![Consequent::new("ventoinha", "lenta")],
        ));
        let extended = fan_engine(redundant);

        // carga = 3.0 dispara "baixa" parcialmente (grau 0.5)
        let a = baseline.evaluate(&inputs(3.0)).unwrap();
        let b = extended.evaluate(&inputs(3.0)).unwrap();
        assert_eq!(a["ventoinha"].to_bits(), b["ventoinha"].to_bits());
    }

    /// Disparo parcial: carga na rampa de "baixa" corta a forma "lenta"
    /// e o centroide cai dentro do suporte do rótulo.
    #[test]
    fn test_partial_firing_centroid_in_support() {
        let engine = fan_engine(fan_rules());
        let out = engine.evaluate(&inputs(3.0)).unwrap();
        let v = out["ventoinha"];
        assert!(v > 0.0 && v < 50.0, "centroide {v} fora do suporte de 'lenta'");
    }

    /// OR e NOT atravessam o pipeline completo: regra com antecedente
    /// composto dispara com max/complemento dos graus.
    #[test]
    fn test_composite_antecedent_through_pipeline() {
        let rules = vec![Rule::new(
            Antecedent::clause("carga", "alta").or(Antecedent::clause("carga", "baixa").not()),
            vec![Consequent::new("ventoinha", "rapida")],
        )];
        let engine = fan_engine(rules);
        // carga = 10: alta = 1, NOT baixa = 1 → força 1
        let out = engine.evaluate(&inputs(10.0)).unwrap();
        assert!(out["ventoinha"] > 50.0);
        // carga = 5: alta = 0, baixa = 0 → NOT baixa = 1 → ainda dispara
        let out = engine.evaluate(&inputs(5.0)).unwrap();
        assert!(out["ventoinha"] > 50.0);
    }
}
