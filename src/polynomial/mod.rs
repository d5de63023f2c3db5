mod render;

use std::ops::{Add, Mul, Sub};

/// Coefficients smaller than this are treated as zero and elided.
pub(crate) const EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coef: f64,
    pub exp: i32,
}

/// A sparse polynomial in one variable.
///
/// Terms are kept in strictly decreasing exponent order; zero coefficients
/// never appear. The two calculator tools are independent; nothing here
/// touches the expression pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms(terms: &[(f64, i32)]) -> Self {
        let mut poly = Self::new();
        for &(coef, exp) in terms {
            poly.insert_term(coef, exp);
        }
        poly
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Inserts a term, keeping exponents strictly decreasing. A term with an
    /// existing exponent merges by addition; a merged or inserted
    /// coefficient below `EPS` in magnitude vanishes.
    pub fn insert_term(&mut self, coef: f64, exp: i32) {
        if coef.abs() < EPS {
            return;
        }
        match self.terms.iter().position(|t| t.exp <= exp) {
            Some(i) if self.terms[i].exp == exp => {
                self.terms[i].coef += coef;
                if self.terms[i].coef.abs() < EPS {
                    self.terms.remove(i);
                }
            }
            Some(i) => self.terms.insert(i, Term { coef, exp }),
            None => self.terms.push(Term { coef, exp }),
        }
    }

    /// Power-rule derivative; the constant term drops out.
    pub fn derivative(&self) -> Polynomial {
        let mut result = Polynomial::new();
        for term in &self.terms {
            if term.exp != 0 {
                result.insert_term(term.coef * f64::from(term.exp), term.exp - 1);
            }
        }
        result
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|term| term.coef * x.powi(term.exp))
            .sum()
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::new();
        let (a, b) = (&self.terms, &other.terms);
        let (mut i, mut j) = (0, 0);
        while i < a.len() || j < b.len() {
            if j >= b.len() || (i < a.len() && a[i].exp > b[j].exp) {
                result.insert_term(a[i].coef, a[i].exp);
                i += 1;
            } else if i >= a.len() || b[j].exp > a[i].exp {
                result.insert_term(b[j].coef, b[j].exp);
                j += 1;
            } else {
                let sum = a[i].coef + b[j].coef;
                if sum.abs() >= EPS {
                    result.insert_term(sum, a[i].exp);
                }
                i += 1;
                j += 1;
            }
        }
        result
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::new();
        let (a, b) = (&self.terms, &other.terms);
        let (mut i, mut j) = (0, 0);
        while i < a.len() || j < b.len() {
            if j >= b.len() || (i < a.len() && a[i].exp > b[j].exp) {
                result.insert_term(a[i].coef, a[i].exp);
                i += 1;
            } else if i >= a.len() || b[j].exp > a[i].exp {
                result.insert_term(-b[j].coef, b[j].exp);
                j += 1;
            } else {
                let diff = a[i].coef - b[j].coef;
                if diff.abs() >= EPS {
                    result.insert_term(diff, a[i].exp);
                }
                i += 1;
                j += 1;
            }
        }
        result
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::new();
        for p in &self.terms {
            for q in &other.terms {
                result.insert_term(p.coef * q.coef, p.exp + q.exp);
            }
        }
        result
    }
}
