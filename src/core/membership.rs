//! # MembershipFunction — Função de Pertinência Trapezoidal
//!
//! Uma [`MembershipFunction`] mapeia um valor crisp `x` para um **grau de
//! pertinência** em `[0, 1]` de um rótulo linguístico ("baja", "alta"…).
//!
//! ## Forma
//!
//! A forma canônica é o **trapézio** com quatro pontos de controle
//! não decrescentes `a ≤ b ≤ c ≤ d`:
//!
//! ```text
//! 1 ┤        ┌────────┐
//!   │       /          \
//!   │      /            \
//! 0 ┤─────┘              └──────
//!        a   b        c   d
//! ```
//!
//! - `0` para `x ≤ a` ou `x ≥ d` (fora do platô)
//! - rampa linear `(x−a)/(b−a)` em `a < x < b`
//! - `1` em `b ≤ x ≤ c`
//! - rampa linear `(d−x)/(d−c)` em `c < x < d`
//!
//! O **triângulo** é o caso degenerado `b = c`. Bordas verticais (`a = b`
//! ou `c = d`) são degraus — nunca divisão por zero: `degree(a) = 1`
//! quando `a = b` (ombro esquerdo) e `degree(d) = 1` quando `c = d`
//! (ombro direito), exatamente como `trapmf` do scikit-fuzzy.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};

/// Função de pertinência trapezoidal/triangular.
///
/// Invariante (garantido nos construtores): `a ≤ b ≤ c ≤ d`, todos finitos.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MembershipFunction {
    /// Início da rampa de subida.
    a: f64,
    /// Início do platô (grau 1).
    b: f64,
    /// Fim do platô (grau 1).
    c: f64,
    /// Fim da rampa de descida.
    d: f64,
}

impl MembershipFunction {
    /// Cria um trapézio `(a, b, c, d)`.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidDefinition`] se os pontos de controle não
    /// forem finitos e não decrescentes (`a ≤ b ≤ c ≤ d`).
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> FuzzyResult<Self> {
        if ![a, b, c, d].iter().all(|v| v.is_finite()) {
            return Err(FuzzyError::InvalidDefinition(format!(
                "trapézio com pontos não finitos: ({a}, {b}, {c}, {d})"
            )));
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::InvalidDefinition(format!(
                "trapézio com pontos de controle decrescentes: ({a}, {b}, {c}, {d})"
            )));
        }
        Ok(Self { a, b, c, d })
    }

    /// Cria um triângulo `(a, b, d)` — o trapézio degenerado `b = c`.
    pub fn triangle(a: f64, b: f64, d: f64) -> FuzzyResult<Self> {
        Self::trapezoid(a, b, b, d)
    }

    /// Grau de pertinência de `x`, sempre em `[0, 1]`.
    ///
    /// O platô é testado primeiro para que ombros verticais (`a = b` ou
    /// `c = d`) sejam degraus e não divisões por zero.
    pub fn degree(&self, x: f64) -> f64 {
        if self.b <= x && x <= self.c {
            return 1.0;
        }
        if x <= self.a || x >= self.d {
            return 0.0;
        }
        if x < self.b {
            // a < x < b, logo b > a
            (x - self.a) / (self.b - self.a)
        } else {
            // c < x < d, logo d > c
            (self.d - x) / (self.d - self.c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Para um trapézio bem formado `a < b ≤ c < d`:
    /// `degree(a) = 0`, `degree(b) = degree(c) = 1`, `degree(d) = 0`.
    #[test]
    fn test_trapezoid_control_points() {
        let mf = MembershipFunction::trapezoid(18.0, 35.0, 60.0, 62.0).unwrap();
        assert_eq!(mf.degree(18.0), 0.0);
        assert_eq!(mf.degree(35.0), 1.0);
        assert_eq!(mf.degree(60.0), 1.0);
        assert_eq!(mf.degree(62.0), 0.0);
        // pontos médios das rampas
        assert!((mf.degree(26.5) - 0.5).abs() < 1e-12);
        assert!((mf.degree(61.0) - 0.5).abs() < 1e-12);
    }

    /// Ombro esquerdo vertical (`a = b`): degrau para 1 já em `x = a`,
    /// sem divisão por zero. Mesmo para o ombro direito (`c = d`).
    #[test]
    fn test_vertical_shoulders() {
        let left = MembershipFunction::trapezoid(0.0, 0.0, 2.0, 5.0).unwrap();
        assert_eq!(left.degree(0.0), 1.0);
        assert_eq!(left.degree(2.0), 1.0);
        assert_eq!(left.degree(5.0), 0.0);

        let right = MembershipFunction::trapezoid(28.0, 38.0, 45.0, 45.0).unwrap();
        assert_eq!(right.degree(45.0), 1.0);
        assert_eq!(right.degree(40.0), 1.0);
        assert_eq!(right.degree(28.0), 0.0);
    }

    /// Triângulo é o trapézio degenerado `b = c`: pico único em `b`.
    #[test]
    fn test_triangle() {
        let mf = MembershipFunction::triangle(18.0, 25.0, 32.0).unwrap();
        assert_eq!(mf.degree(25.0), 1.0);
        assert_eq!(mf.degree(18.0), 0.0);
        assert_eq!(mf.degree(32.0), 0.0);
        assert!((mf.degree(21.5) - 0.5).abs() < 1e-12);
    }

    /// O grau fica em [0, 1] para qualquer entrada, inclusive muito além
    /// dos pontos de controle.
    #[test]
    fn test_degree_bounded() {
        let mf = MembershipFunction::trapezoid(3.0, 12.0, 12.0, 22.0).unwrap();
        let mut x = -100.0;
        while x <= 100.0 {
            let d = mf.degree(x);
            assert!((0.0..=1.0).contains(&d), "degree({x}) = {d} fora de [0,1]");
            x += 0.25;
        }
    }

    /// Pontos de controle decrescentes são rejeitados na construção.
    #[test]
    fn test_invalid_control_points_rejected() {
        assert!(MembershipFunction::trapezoid(5.0, 3.0, 8.0, 10.0).is_err());
        assert!(MembershipFunction::trapezoid(0.0, 4.0, 2.0, 10.0).is_err());
        assert!(MembershipFunction::triangle(10.0, 5.0, 20.0).is_err());
        assert!(MembershipFunction::trapezoid(0.0, f64::NAN, 2.0, 3.0).is_err());
    }
}
