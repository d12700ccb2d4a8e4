use crate::poly::polynomial::Polynomial;
use crate::session::Session;
use clap::{App, AppSettings, Arg};
use std::io::{self, Write};

/// The `polycalc` argument parser.
///
/// Expressions may start with a minus sign: an argument such as `-x` or
/// `-3x + 1` is taken as an expression as soon as it contains a character
/// that is not a known short flag. `-v` on its own stays the verbosity flag,
/// and `--` ends the flags for anything else.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("polycalc")
        .version("0.1.0")
        .about("Adds polynomials in x with integer coefficients")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("EXPRESSION")
                .help("Polynomials to add; starts the interactive menu when omitted")
                .multiple(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
}

/// Summing mode: print every expression in canonical form, followed by
/// their sum. Returns the exit status; the first expression that fails
/// is reported on `errors` and gives status 1.
pub fn sum_expressions<'a, I, W, E>(
    expressions: I,
    output: &mut W,
    errors: &mut E,
) -> io::Result<i32>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
    E: Write,
{
    let mut session = Session::new();
    for e in expressions {
        let p: Polynomial = match e.parse() {
            Ok(p) => p,
            Err(err) => {
                writeln!(errors, "Error: {}", err)?;
                return Ok(1);
            }
        };

        let line = p.to_string();
        let index = session.push(p);
        writeln!(output, "{}.) {}", index, line)?;
    }

    info!("Summing {} expressions", session.len());
    match session.sum() {
        Ok(sum) => {
            writeln!(output, "sum: {}", sum)?;
            Ok(0)
        }
        Err(err) => {
            writeln!(errors, "Error: {}", err)?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{app, sum_expressions};

    fn sum(expressions: &[&str]) -> (i32, String, String) {
        let mut output = Vec::<u8>::new();
        let mut errors = Vec::<u8>::new();
        let status =
            sum_expressions(expressions.iter().cloned(), &mut output, &mut errors).unwrap();
        (
            status,
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn leading_minus_is_an_expression() {
        let matches = app()
            .get_matches_from_safe(vec!["polycalc", "-x"])
            .unwrap();
        assert_eq!(
            matches.values_of("EXPRESSION").unwrap().collect::<Vec<_>>(),
            vec!["-x"]
        );
        assert_eq!(matches.occurrences_of("v"), 0);

        let matches = app()
            .get_matches_from_safe(vec!["polycalc", "-v", "-x + 1", "-3x^2"])
            .unwrap();
        assert_eq!(
            matches.values_of("EXPRESSION").unwrap().collect::<Vec<_>>(),
            vec!["-x + 1", "-3x^2"]
        );
        assert_eq!(matches.occurrences_of("v"), 1);
    }

    #[test]
    fn verbosity_without_expressions() {
        let matches = app()
            .get_matches_from_safe(vec!["polycalc", "-v", "-v"])
            .unwrap();
        assert!(matches.values_of("EXPRESSION").is_none());
        assert_eq!(matches.occurrences_of("v"), 2);
    }

    #[test]
    fn prints_each_expression_and_the_sum() {
        let (status, output, errors) = sum(&["-x + 1", "x^2 + x", "3 - 2x^2"]);
        assert_eq!(status, 0);
        assert_eq!(output, "1.) -x + 1\n2.) x^2 + x\n3.) -2x^2 + 3\nsum: -x^2 + 4\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_expression_fails() {
        let (status, output, errors) = sum(&["x", "1 + $", "x^2"]);
        assert_eq!(status, 1);
        assert_eq!(output, "1.) x\n");
        assert!(errors.starts_with("Error: malformed expression '1 + $'"), "{}", errors);
    }

    #[test]
    fn overflowing_sum_fails() {
        let (status, output, errors) = sum(&["9223372036854775807x", "x"]);
        assert_eq!(status, 1);
        assert!(!output.contains("sum:"));
        assert!(errors.starts_with("Error: coefficient overflow"), "{}", errors);
    }
}
