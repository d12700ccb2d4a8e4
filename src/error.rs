use crate::poly::term::Term;
use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, PolyError>;

/// Everything that can go wrong while reading, combining or
/// evaluating polynomials. None of these are fatal: the caller
/// reports and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// The input string is not a polynomial in `x`.
    MalformedExpression { expression: String, reason: String },
    /// Raw term addition of two terms that are not like terms.
    IncompatibleTerms(Term, Term),
    /// The coefficient of a sum does not fit in an `i64`.
    CoefficientOverflow(Term, Term),
    /// Checked negation of a term whose coefficient is `i64::MIN`.
    NegationOverflow(Term),
    EvaluationOverflow { x: i64 },
    NonIntegralValue { x: i64, exponent: i64 },
    /// A 1-based index into a session that does not exist.
    NoSuchPolynomial { index: usize, len: usize },
}

impl PolyError {
    pub fn malformed<S: Into<String>>(expression: &str, reason: S) -> PolyError {
        PolyError::MalformedExpression {
            expression: expression.to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PolyError::MalformedExpression {
                ref expression,
                ref reason,
            } => write!(f, "malformed expression '{}': {}", expression, reason),
            PolyError::IncompatibleTerms(ref a, ref b) => {
                write!(f, "cannot add unlike terms {} and {}", a, b)
            }
            PolyError::CoefficientOverflow(ref a, ref b) => write!(
                f,
                "coefficient overflow while adding {} and {}",
                a, b
            ),
            PolyError::NegationOverflow(ref t) => {
                write!(f, "cannot negate {}: the result does not fit in a 64-bit integer", t)
            }
            PolyError::EvaluationOverflow { x } => {
                write!(f, "value at x = {} does not fit in a 64-bit integer", x)
            }
            PolyError::NonIntegralValue { x, exponent } => write!(
                f,
                "x^{} is not an integer at x = {}",
                exponent, x
            ),
            PolyError::NoSuchPolynomial { index, len } => {
                if len == 0 {
                    write!(f, "no polynomial {}: the list is empty", index)
                } else {
                    write!(
                        f,
                        "no polynomial {}: choose a number from 1 to {}",
                        index, len
                    )
                }
            }
        }
    }
}

impl error::Error for PolyError {}
