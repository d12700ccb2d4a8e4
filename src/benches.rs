use test::Bencher;

use crate::normalize::normalize;
use crate::parser::parse;
use crate::poly::{Polynomial, Term};

/// `n` terms over a handful of exponents, so most of them merge.
fn unmerged_terms(n: i64) -> Vec<Term> {
    (0..n).map(|i| Term::new(i % 7 - 3, i % 13)).collect()
}

#[bench]
fn normalize_many_like_terms(b: &mut Bencher) {
    let terms = unmerged_terms(200);
    b.iter(|| normalize(terms.clone()).unwrap());
}

#[bench]
fn parse_long_expression(b: &mut Bencher) {
    let expression = (0..100)
        .map(|i| format!("{}x^{}", i - 50, i % 17))
        .collect::<Vec<_>>()
        .join(" + ");
    b.iter(|| parse(&expression).unwrap());
}

#[bench]
fn render(b: &mut Bencher) {
    let p = Polynomial::from_terms((0..100).map(|i| Term::new(i - 50, i)).collect()).unwrap();
    b.iter(|| p.render());
}
