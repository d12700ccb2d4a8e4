use crate::error::{PolyError, Result};
use crate::normalize::{is_canonical, normalize};
use crate::parser;
use crate::poly::term::Term;
use num_traits::checked_pow;
use std::fmt;
use std::str::FromStr;

/// A polynomial in `x` with integer coefficients.
///
/// The terms are always in canonical form: like terms combined, no zero
/// coefficients, sorted by descending exponent. The zero polynomial has
/// no terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new() -> Polynomial {
        Polynomial { terms: vec![] }
    }

    pub fn from_terms(terms: Vec<Term>) -> Result<Polynomial> {
        Ok(Polynomial {
            terms: normalize(terms)?,
        })
    }

    /// The sum of two polynomials given as strings.
    pub fn sum_of(a: &str, b: &str) -> Result<Polynomial> {
        let mut sum = Polynomial::new();
        sum.add_str(a)?;
        sum.add_str(b)?;
        Ok(sum)
    }

    /// Fold `add` over a collection, starting from zero.
    pub fn sum<'a, I>(polys: I) -> Result<Polynomial>
    where
        I: IntoIterator<Item = &'a Polynomial>,
    {
        let mut sum = Polynomial::new();
        for p in polys {
            sum.add(p)?;
        }
        Ok(sum)
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The highest exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<i64> {
        self.leading_term().map(|t| t.exponent)
    }

    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    pub fn coefficient(&self, exponent: i64) -> i64 {
        self.terms
            .iter()
            .find(|t| t.exponent == exponent)
            .map_or(0, |t| t.coefficient)
    }

    /// Add the terms of `other`. On error `self` is unchanged.
    pub fn add(&mut self, other: &Polynomial) -> Result<()> {
        self.add_terms(other.terms.iter().cloned())
    }

    /// Parse `expression` and add it. On error `self` is unchanged.
    pub fn add_str(&mut self, expression: &str) -> Result<()> {
        let terms = parser::parse(expression)?;
        self.add_terms(terms)
    }

    fn add_terms<I: IntoIterator<Item = Term>>(&mut self, extra: I) -> Result<()> {
        let mut terms = self.terms.clone();
        terms.extend(extra);
        self.terms = normalize(terms)?;
        debug_assert!(is_canonical(&self.terms));
        Ok(())
    }

    /// Evaluate at an integer point. Negative exponents only give an
    /// integer at `x = 1` and `x = -1`.
    pub fn evaluate(&self, x: i64) -> Result<i64> {
        let mut value = 0i64;
        for t in &self.terms {
            let p = power(x, t.exponent)?;
            value = t
                .coefficient
                .checked_mul(p)
                .and_then(|v| value.checked_add(v))
                .ok_or(PolyError::EvaluationOverflow { x })?;
        }
        Ok(value)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn power(x: i64, exponent: i64) -> Result<i64> {
    if exponent >= 0 {
        return checked_pow(x, exponent as usize).ok_or(PolyError::EvaluationOverflow { x });
    }

    match x {
        1 => Ok(1),
        -1 if exponent % 2 == 0 => Ok(1),
        -1 => Ok(-1),
        _ => Err(PolyError::NonIntegralValue { x, exponent }),
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Polynomial> {
        Polynomial::from_terms(parser::parse(s)?)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.terms.iter();

        match terms.next() {
            None => return write!(f, "0"),
            Some(first) => {
                if first.coefficient < 0 {
                    write!(f, "-")?;
                }
                first.fmt_magnitude(f)?;
            }
        }

        for t in terms {
            write!(f, " {} ", t.sign())?;
            t.fmt_magnitude(f)?;
        }

        Ok(())
    }
}
