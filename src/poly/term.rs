use crate::error::{PolyError, Result};
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// A monomial `coefficient * x^exponent`.
///
/// Equality is structural. Ordering by degree goes through `compare`,
/// which looks at the simplified view: a term with a zero coefficient
/// has no degree and is ordered as if its exponent were 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub coefficient: i64,
    pub exponent: i64,
}

impl Term {
    #[inline]
    pub fn new(coefficient: i64, exponent: i64) -> Term {
        Term {
            coefficient,
            exponent,
        }
    }

    #[inline]
    pub fn zero() -> Term {
        Term::new(0, 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// The simplified view of this term. Not cached: a term may still
    /// carry a stale exponent next to a zero coefficient.
    #[inline]
    pub fn simplified(&self) -> Term {
        if self.is_zero() {
            Term::zero()
        } else {
            *self
        }
    }

    pub fn degree(&self) -> Option<i64> {
        if self.is_zero() {
            None
        } else {
            Some(self.exponent)
        }
    }

    /// Zero terms combine with anything.
    #[inline]
    pub fn is_like_term(&self, other: &Term) -> bool {
        self.is_zero() || other.is_zero() || self.exponent == other.exponent
    }

    #[inline]
    pub fn compare(&self, other: &Term) -> Ordering {
        self.simplified()
            .exponent
            .cmp(&other.simplified().exponent)
    }

    pub fn add(&self, other: &Term) -> Result<Term> {
        if !self.is_like_term(other) {
            return Err(PolyError::IncompatibleTerms(*self, *other));
        }

        let coefficient = self
            .coefficient
            .checked_add(other.coefficient)
            .ok_or_else(|| PolyError::CoefficientOverflow(*self, *other))?;

        let exponent = match (self.is_zero(), other.is_zero()) {
            (false, _) => self.exponent,
            (true, false) => other.exponent,
            (true, true) => 0,
        };

        Ok(Term::new(coefficient, exponent))
    }

    /// In-place accumulation. On error `self` is left as it was.
    #[inline]
    pub fn add_assign(&mut self, other: &Term) -> Result<()> {
        *self = self.add(other)?;
        Ok(())
    }

    /// Writes the term without its sign, e.g. `3x^2`, `x`, `7`.
    pub fn fmt_magnitude(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.coefficient.unsigned_abs();
        match self.exponent {
            0 => write!(f, "{}", magnitude),
            e => {
                if magnitude != 1 {
                    write!(f, "{}", magnitude)?;
                }
                write!(f, "x")?;
                if e != 1 {
                    write!(f, "^{}", e)?;
                }
                Ok(())
            }
        }
    }

    pub fn checked_neg(&self) -> Result<Term> {
        match self.coefficient.checked_neg() {
            Some(c) => Ok(Term::new(c, self.exponent)),
            None => Err(PolyError::NegationOverflow(*self)),
        }
    }

    #[inline]
    pub fn sign(&self) -> char {
        if self.coefficient.is_negative() {
            '-'
        } else {
            '+'
        }
    }
}

/// Wrapping negation: a coefficient of `i64::MIN` has no positive
/// counterpart and comes back unchanged. Use `Term::checked_neg` when the
/// coefficient can be that large.
impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(self.coefficient.wrapping_neg(), self.exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.sign())?;
        self.fmt_magnitude(f)
    }
}

#[cfg(test)]
mod test {
    use super::Term;
    use crate::error::PolyError;
    use std::cmp::Ordering;

    #[test]
    fn like_terms() {
        assert!(Term::new(3, 2).is_like_term(&Term::new(-1, 2)));
        assert!(!Term::new(3, 2).is_like_term(&Term::new(3, 1)));
        assert!(Term::new(0, 7).is_like_term(&Term::new(3, 1)));
        assert!(Term::new(3, 1).is_like_term(&Term::new(0, 7)));
    }

    #[test]
    fn add_exponents() {
        assert_eq!(Term::new(3, 2).add(&Term::new(4, 2)), Ok(Term::new(7, 2)));
        assert_eq!(Term::new(0, 5).add(&Term::new(4, 2)), Ok(Term::new(4, 2)));
        assert_eq!(Term::new(4, 2).add(&Term::new(0, 5)), Ok(Term::new(4, 2)));
        assert_eq!(Term::new(0, 5).add(&Term::new(0, 3)), Ok(Term::new(0, 0)));
        // cancellation keeps the shared exponent; normalization drops it later
        assert_eq!(Term::new(2, 3).add(&Term::new(-2, 3)), Ok(Term::new(0, 3)));
    }

    #[test]
    fn add_unlike() {
        let (a, b) = (Term::new(1, 2), Term::new(1, 3));
        assert_eq!(a.add(&b), Err(PolyError::IncompatibleTerms(a, b)));
    }

    #[test]
    fn add_assign_overflow_leaves_operand() {
        let mut a = Term::new(i64::max_value(), 1);
        let b = Term::new(1, 1);
        assert_eq!(
            a.add_assign(&b),
            Err(PolyError::CoefficientOverflow(a, b))
        );
        assert_eq!(a, Term::new(i64::max_value(), 1));
    }

    #[test]
    fn negation() {
        assert_eq!(-Term::new(3, 2), Term::new(-3, 2));
        assert_eq!(Term::new(-4, 0).checked_neg(), Ok(Term::new(4, 0)));
        assert_eq!(
            Term::new(i64::max_value(), 1).checked_neg(),
            Ok(Term::new(-i64::max_value(), 1))
        );

        let min = Term::new(i64::min_value(), 1);
        assert_eq!(min.checked_neg(), Err(PolyError::NegationOverflow(min)));
        assert_eq!(-min, min);
    }

    #[test]
    fn compare_simplified() {
        assert_eq!(Term::new(1, 3).compare(&Term::new(5, 2)), Ordering::Greater);
        assert_eq!(Term::new(0, 3).compare(&Term::new(5, 0)), Ordering::Equal);
        assert_eq!(Term::new(0, 9).compare(&Term::new(1, 1)), Ordering::Less);
        assert_eq!(Term::new(2, -1).compare(&Term::new(0, 4)), Ordering::Less);
    }

    #[test]
    fn display() {
        assert_eq!(Term::new(3, 2).to_string(), "+3x^2");
        assert_eq!(Term::new(-4, 1).to_string(), "-4x");
        assert_eq!(Term::new(1, 1).to_string(), "+x");
        assert_eq!(Term::new(-1, 5).to_string(), "-x^5");
        assert_eq!(Term::new(1, 0).to_string(), "+1");
        assert_eq!(Term::new(-3, 0).to_string(), "-3");
        assert_eq!(Term::new(0, 0).to_string(), "+0");
        assert_eq!(Term::new(2, -2).to_string(), "+2x^-2");
        assert_eq!(Term::new(i64::min_value(), 0).to_string(), "-9223372036854775808");
    }
}
