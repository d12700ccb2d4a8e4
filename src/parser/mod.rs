use crate::error::{PolyError, Result};
use crate::poly::term::Term;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::Pair;
use pest::Parser;

#[cfg(debug_assertions)]
const _GRAMMAR: &'static str = include_str!("grammar.pest");

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct PolynomialParser;

/// Whitespace-free copy of the input, with the (1-based) character
/// position each kept character had in the original text.
struct Compacted {
    text: String,
    positions: Vec<usize>,
}

impl Compacted {
    fn new(expression: &str) -> Result<Compacted> {
        let mut text = String::with_capacity(expression.len());
        let mut positions = Vec::with_capacity(expression.len());

        for (pos, c) in expression.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }

            match c {
                'x' | '+' | '-' | '^' | '0'..='9' => {
                    text.push(c);
                    positions.push(pos + 1);
                }
                _ => {
                    return Err(PolyError::malformed(
                        expression,
                        format!("illegal character '{}' at position {}", c, pos + 1),
                    ))
                }
            }
        }

        Ok(Compacted { text, positions })
    }

    /// Describe a location in the compacted text in terms of the original.
    fn describe(&self, offset: usize) -> String {
        match self.positions.get(offset) {
            Some(pos) => format!(
                "unexpected '{}' at position {}",
                &self.text[offset..offset + 1],
                pos
            ),
            None => "unexpected end of input".to_owned(),
        }
    }
}

fn describe_rule(rule: &Rule) -> &'static str {
    match *rule {
        Rule::sign => "a sign",
        Rule::digits => "digits",
        Rule::power => "an exponent",
        Rule::variable => "x",
        Rule::term => "a term",
        Rule::EOI => "end of input",
        _ => "a polynomial",
    }
}

fn parse_integer(expression: &str, negative: bool, digits: &str) -> Result<i64> {
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_owned()
    };

    signed.parse::<i64>().map_err(|_| {
        PolyError::malformed(
            expression,
            format!("{} does not fit in a 64-bit integer", signed),
        )
    })
}

fn parse_exponent(expression: &str, variable: Pair<Rule>) -> Result<i64> {
    // a bare x
    let power = match variable.into_inner().next() {
        Some(p) => p,
        None => return Ok(1),
    };

    let mut negative = false;
    for p in power.into_inner() {
        match p.as_rule() {
            Rule::sign => negative = p.as_str() == "-",
            Rule::digits => return parse_integer(expression, negative, p.as_str()),
            x => unreachable!("Unexpected {:?} in exponent", x),
        }
    }

    unreachable!("Exponent without digits")
}

fn parse_term(expression: &str, term: Pair<Rule>) -> Result<Term> {
    if term.as_rule() != Rule::term {
        unreachable!("Cannot parse {:?} as term", term);
    }

    let mut negative = false;
    let mut digits = None;
    let mut exponent = 0;

    for p in term.into_inner() {
        match p.as_rule() {
            Rule::sign => negative = p.as_str() == "-",
            Rule::digits => digits = Some(p.as_str()),
            Rule::variable => exponent = parse_exponent(expression, p)?,
            x => unreachable!("Unexpected {:?} in term", x),
        }
    }

    let coefficient = match digits {
        Some(d) => parse_integer(expression, negative, d)?,
        None if negative => -1,
        None => 1,
    };

    Ok(Term::new(coefficient, exponent))
}

/// Parse a polynomial in `x` into its terms, in the order they are written.
///
/// Whitespace is ignored anywhere. The terms are not combined or sorted,
/// and an empty (or blank) string yields no terms at all. A sign with
/// neither digits nor `x` after it (`"3 -"`, `"-"`) is malformed rather
/// than read as a term.
pub fn parse(expression: &str) -> Result<Vec<Term>> {
    let compacted = Compacted::new(expression)?;

    let mut pairs = PolynomialParser::parse(Rule::polynomial, &compacted.text).map_err(|e| {
        let offset = match e.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((s, _)) => s,
        };

        let mut reason = compacted.describe(offset);
        if let ErrorVariant::ParsingError { ref positives, .. } = e.variant {
            if !positives.is_empty() {
                let expected: Vec<&str> = positives.iter().map(describe_rule).collect();
                reason = format!("{}, expected {}", reason, expected.join(" or "));
            }
        }

        PolyError::malformed(expression, reason)
    })?;

    let mut terms = vec![];
    if let Some(polynomial) = pairs.next() {
        for p in polynomial.into_inner() {
            match p.as_rule() {
                Rule::term => terms.push(parse_term(expression, p)?),
                Rule::EOI => {}
                x => unreachable!("Unexpected {:?} in polynomial", x),
            }
        }
    }

    debug!("Parsed '{}' into {} terms", expression, terms.len());
    Ok(terms)
}
