use crate::error::{PolyError, Result};
use crate::poly::term::Term;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::convert::TryFrom;

/// Like terms with a nonzero coefficient, summed exactly.
struct Group {
    first: Term,
    last: Term,
    sum: i128,
}

/// Bring a list of terms to canonical form: like terms are merged, zero
/// terms are dropped and the rest is sorted by descending exponent.
///
/// Each group of like terms is summed as a whole, so only a final
/// coefficient outside the `i64` range is an overflow; the order the
/// terms come in does not matter.
///
/// The input is consumed and a fresh vector is returned, so a caller
/// that keeps its own copy is unaffected when this fails.
pub fn normalize(terms: Vec<Term>) -> Result<Vec<Term>> {
    let input_len = terms.len();

    // a zero term is like any other term and adds nothing to it
    let mut groups: BTreeMap<i64, Group> = BTreeMap::new();
    for t in terms.into_iter().filter(|t| !t.is_zero()) {
        let group = groups.entry(t.exponent).or_insert(Group {
            first: t,
            last: t,
            sum: 0,
        });
        group.last = t;
        group.sum += i128::from(t.coefficient);
    }

    let mut normalized = Vec::with_capacity(groups.len());
    for (exponent, group) in groups.into_iter().rev() {
        let coefficient = i64::try_from(group.sum)
            .map_err(|_| PolyError::CoefficientOverflow(group.first, group.last))?;
        if coefficient != 0 {
            normalized.push(Term::new(coefficient, exponent));
        }
    }

    trace!("normalized {} terms into {}", input_len, normalized.len());

    Ok(normalized)
}

/// Checks the canonical form invariants: no zero coefficients, strictly
/// decreasing exponents.
pub fn is_canonical(terms: &[Term]) -> bool {
    terms.iter().all(|t| !t.is_zero())
        && terms
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.exponent > b.exponent)
}
