//! # Modelo de Irrigação — Definições Fixas + Fachada
//!
//! Este módulo constrói o **modelo difuso de irrigação**: universos,
//! funções de pertinência, as nove regras e as bandas de classificação.
//! As formas e rótulos vêm do modelo agronômico original (em espanhol) e
//! são mantidos verbatim como dado de domínio.
//!
//! ## Variáveis
//!
//! | Variável | Universo | Papel | Rótulos |
//! |----------|----------|-------|---------|
//! | `temp` | [0, 45] °C, passo 0.5 | entrada | baja, media, alta |
//! | `hum`  | [0, 100] %, passo 1  | entrada | baja, media, alta |
//! | `rain` | [0, 60] mm/semana, passo 0.5 | entrada | nula, moderada, alta |
//! | `freq` | [0, 7] riegos/semana, passo 0.05 | saída | ninguno, bajo, medio, alto |
//!
//! ## Ciclo de Vida
//!
//! O [`IrrigationAdvisor`] é construído **uma vez** no startup (ver
//! `main.rs`), injetado por `Arc` no estado do servidor e fica somente
//! leitura até o shutdown. Cada requisição chama apenas
//! [`IrrigationAdvisor::recommend`] — pura, sem locks, sem E/S.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{
    Antecedent, Consequent, LinguisticVariable, MembershipFunction, Rule, Universe,
};
use crate::engine::{Band, Classifier, InferenceEngine};
use crate::error::{FuzzyError, FuzzyResult};

/// Nome da variável de temperatura (°C).
pub const VAR_TEMP: &str = "temp";
/// Nome da variável de umidade relativa (%).
pub const VAR_HUM: &str = "hum";
/// Nome da variável de chuva semanal (mm).
pub const VAR_RAIN: &str = "rain";
/// Nome da variável de saída: frequência de rega (riegos/semana).
pub const VAR_FREQ: &str = "freq";

/// Recomendação completa de irrigação para uma tripla de leituras.
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    /// Frequência de rega defuzzificada (riegos/semana).
    pub value: f64,
    /// Rótulo discreto da recomendação ("Ninguno", "Bajo", "Medio", "Alto").
    pub label: String,
    /// Orientação textual derivada do valor.
    pub advisory: String,
}

/// Fachada do sistema: motor de inferência + classificador.
///
/// Imutável após a construção; seguro para uso concorrente via `Arc`.
#[derive(Debug)]
pub struct IrrigationAdvisor {
    engine: InferenceEngine,
    classifier: Classifier,
}

impl IrrigationAdvisor {
    /// Constrói o modelo completo de irrigação.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidDefinition`] /
    /// [`FuzzyError::UnknownVariableOrLabel`] se alguma definição fixa
    /// estiver inconsistente — falha de startup, nunca em requisição.
    pub fn new() -> FuzzyResult<Self> {
        let engine = InferenceEngine::new(build_variables()?, build_rules())?;
        let classifier = build_classifier()?;
        Ok(Self { engine, classifier })
    }

    /// Número de variáveis do modelo (para logging de startup).
    pub fn variable_count(&self) -> usize {
        self.engine.variable_count()
    }

    /// Número de regras do modelo (para logging de startup).
    pub fn rule_count(&self) -> usize {
        self.engine.rule_count()
    }

    /// Executa uma passada de inferência para as três leituras crisp e
    /// classifica o resultado.
    ///
    /// Leituras fora dos universos são limitadas silenciosamente (clamp).
    ///
    /// # Erros
    ///
    /// [`FuzzyError::NoRuleFired`] se nenhuma regra disparar — o chamador
    /// deve apresentar uma mensagem neutra de "dados insuficientes".
    pub fn recommend(&self, temp: f64, hum: f64, rain: f64) -> FuzzyResult<Recommendation> {
        let mut inputs = BTreeMap::new();
        inputs.insert(VAR_TEMP.to_string(), temp);
        inputs.insert(VAR_HUM.to_string(), hum);
        inputs.insert(VAR_RAIN.to_string(), rain);

        let outputs = self.engine.evaluate(&inputs)?;
        let value = outputs
            .get(VAR_FREQ)
            .copied()
            .ok_or_else(|| FuzzyError::NoRuleFired(VAR_FREQ.to_string()))?;

        let classification = self.classifier.classify(value);
        Ok(Recommendation {
            value,
            label: classification.label,
            advisory: classification.advisory,
        })
    }
}

/// Declara as quatro variáveis linguísticas com as formas do modelo
/// original (trapmf/trimf do scikit-fuzzy, pontos verbatim).
fn build_variables() -> FuzzyResult<Vec<LinguisticVariable>> {
    let temp = LinguisticVariable::antecedent(VAR_TEMP, Universe::new(0.0, 45.0, 0.5)?)
        .with_label("baja", MembershipFunction::trapezoid(0.0, 0.0, 15.0, 22.0)?)?
        .with_label("media", MembershipFunction::triangle(18.0, 25.0, 32.0)?)?
        .with_label("alta", MembershipFunction::trapezoid(28.0, 38.0, 45.0, 45.0)?)?;

    let hum = LinguisticVariable::antecedent(VAR_HUM, Universe::new(0.0, 100.0, 1.0)?)
        .with_label("baja", MembershipFunction::trapezoid(0.0, 0.0, 30.0, 45.0)?)?
        .with_label("media", MembershipFunction::triangle(40.0, 55.0, 70.0)?)?
        .with_label("alta", MembershipFunction::trapezoid(65.0, 85.0, 100.0, 100.0)?)?;

    let rain = LinguisticVariable::antecedent(VAR_RAIN, Universe::new(0.0, 60.0, 0.5)?)
        .with_label("nula", MembershipFunction::trapezoid(0.0, 0.0, 2.0, 5.0)?)?
        .with_label("moderada", MembershipFunction::triangle(3.0, 12.0, 22.0)?)?
        .with_label("alta", MembershipFunction::trapezoid(18.0, 35.0, 60.0, 60.0)?)?;

    let freq = LinguisticVariable::consequent(VAR_FREQ, Universe::new(0.0, 7.0, 0.05)?)
        .with_label("ninguno", MembershipFunction::trapezoid(0.0, 0.0, 0.25, 0.75)?)?
        .with_label("bajo", MembershipFunction::triangle(0.5, 1.5, 2.5)?)?
        .with_label("medio", MembershipFunction::triangle(2.0, 3.5, 5.0)?)?
        .with_label("alto", MembershipFunction::trapezoid(4.5, 6.0, 7.0, 7.0)?)?;

    Ok(vec![temp, hum, rain, freq])
}

/// As nove regras do modelo original, antecedentes conjuntivos (AND).
fn build_rules() -> Vec<Rule> {
    let freq = |label: &str| vec![Consequent::new(VAR_FREQ, label)];
    let c = Antecedent::clause;

    vec![
        Rule::new(c(VAR_RAIN, "alta"), freq("ninguno")),
        Rule::new(c(VAR_RAIN, "moderada").and(c(VAR_HUM, "alta")), freq("bajo")),
        Rule::new(
            c(VAR_RAIN, "nula")
                .and(c(VAR_TEMP, "alta"))
                .and(c(VAR_HUM, "baja")),
            freq("alto"),
        ),
        Rule::new(
            c(VAR_RAIN, "nula")
                .and(c(VAR_TEMP, "media"))
                .and(c(VAR_HUM, "media")),
            freq("medio"),
        ),
        Rule::new(
            c(VAR_RAIN, "nula")
                .and(c(VAR_TEMP, "baja"))
                .and(c(VAR_HUM, "alta")),
            freq("bajo"),
        ),
        Rule::new(
            c(VAR_RAIN, "moderada")
                .and(c(VAR_TEMP, "alta"))
                .and(c(VAR_HUM, "baja")),
            freq("medio"),
        ),
        Rule::new(c(VAR_RAIN, "nula").and(c(VAR_HUM, "baja")), freq("alto")),
        Rule::new(c(VAR_TEMP, "baja").and(c(VAR_RAIN, "moderada")), freq("bajo")),
        Rule::new(c(VAR_TEMP, "media").and(c(VAR_RAIN, "moderada")), freq("medio")),
    ]
}

/// Bandas de classificação e mensagem de não rega do modelo original.
fn build_classifier() -> FuzzyResult<Classifier> {
    Classifier::new(
        vec![
            Band::new(0.25, "Ninguno"),
            Band::new(1.5, "Bajo"),
            Band::new(3.5, "Medio"),
        ],
        "Alto",
        "Não é recomendado regar esta semana.",
    )
}
