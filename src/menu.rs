use crate::session::Session;
use std::io::{self, BufRead, Write};

const MENU: &'static str = "Polynomial Calculator

1.) Create new polynomial
2.) Delete a polynomial
3.) Show list of polynomials
4.) Add polynomials
5.) Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The numbered menu loop over a `Session`. Input and output are
/// generic so the loop can be driven from anything line based.
pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Menu<R, W> {
        Menu::with_session(input, output, Session::new())
    }

    pub fn with_session(input: R, output: W, session: Session) -> Menu<R, W> {
        Menu {
            input,
            output,
            session,
        }
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Run until the user quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let selection = match self.prompt()? {
                Some(s) => s,
                None => break,
            };

            let flow = match selection.trim().parse::<u32>() {
                Ok(1) => self.create()?,
                Ok(2) => self.delete()?,
                Ok(3) => self.list()?,
                Ok(4) => self.sum()?,
                Ok(5) => Flow::Quit,
                _ => {
                    debug!("Invalid menu selection '{}'", selection.trim());
                    writeln!(
                        self.output,
                        "Invalid input. Please try again (press enter to continue)"
                    )?;
                    self.wait()?
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        info!("Leaving the menu with {} polynomials", self.session.len());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_owned()))
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, ">")?;
        self.output.flush()?;
        self.read_line()
    }

    fn wait(&mut self) -> io::Result<Flow> {
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Quit,
        })
    }

    fn create(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Enter Polynomial")?;
        let expression = match self.prompt()? {
            Some(e) => e,
            None => return Ok(Flow::Quit),
        };

        match self.session.create(&expression) {
            Ok(index) => {
                info!("Stored '{}' as polynomial {}", expression, index);
                if let Ok(p) = self.session.get(index) {
                    writeln!(self.output, "{}.) {}", index, p)?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Choose a polynomial to delete\n")?;
        self.write_listing()?;
        let choice = match self.prompt()? {
            Some(c) => c,
            None => return Ok(Flow::Quit),
        };

        match choice.trim().parse::<usize>() {
            Ok(index) => match self.session.delete(index) {
                Ok(p) => writeln!(self.output, "Deleted {}", p)?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            },
            Err(_) => writeln!(self.output, "Error: '{}' is not a number", choice.trim())?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "List of current polynomials\n")?;
        self.write_listing()?;
        writeln!(self.output, "(Press enter to return to main menu)")?;
        self.wait()
    }

    fn sum(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "The sum of all polynomials is: ")?;
        match self.session.sum() {
            Ok(p) => writeln!(self.output, "{}", p)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        writeln!(self.output, "(Press enter to return to main menu)")?;
        self.wait()
    }

    fn write_listing(&mut self) -> io::Result<()> {
        if self.session.is_empty() {
            writeln!(self.output, "(no polynomials)")
        } else {
            writeln!(self.output, "{}", self.session.listing())
        }
    }
}

#[cfg(test)]
mod test {
    use super::Menu;
    use crate::session::Session;
    use std::io::Cursor;

    fn run(input: &str) -> (Vec<String>, String) {
        let mut menu = Menu::new(Cursor::new(input.as_bytes()), Vec::<u8>::new());
        menu.run().unwrap();
        let (session, output) = menu.into_parts();
        let listing = session.list().map(|(_, p)| p.to_string()).collect();
        (listing, String::from_utf8(output).unwrap())
    }

    #[test]
    fn create_and_sum() {
        let (stored, output) = run("1\n3x^2 + 4x - 3\n1\nx^2 - 4x\n4\n\n5\n");
        assert_eq!(stored, vec!["3x^2 + 4x - 3", "x^2 - 4x"]);
        assert!(output.contains("The sum of all polynomials is: \n4x^2 - 3\n"));
    }

    #[test]
    fn malformed_input_is_reported() {
        let (stored, output) = run("1\n1 + $\n5\n");
        assert!(stored.is_empty());
        assert!(output.contains("Error: malformed expression '1 + $'"));
    }

    #[test]
    fn delete_by_position() {
        let (stored, output) = run("1\nx\n1\n2\n2\n1\n2\n7\n5\n");
        assert_eq!(stored, vec!["2"]);
        assert!(output.contains("Deleted x"));
        assert!(output.contains("Error: no polynomial 7"));
    }

    #[test]
    fn invalid_selection_and_eof() {
        let (stored, output) = run("9\n\nabc\n");
        assert!(stored.is_empty());
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn list() {
        let (_, output) = run("3\n\n1\n-x\n3\n\n");
        assert!(output.contains("(no polynomials)"));
        assert!(output.contains("1.) -x\n(Press enter"));
    }

    #[test]
    fn starts_from_existing_session() {
        let mut session = Session::new();
        assert_eq!(session.push("x^2 - 1".parse().unwrap()), 1);
        assert_eq!(session.push("-x + 1".parse().unwrap()), 2);

        let input = Cursor::new("4\n\n2\n1\n5\n".as_bytes());
        let mut menu = Menu::with_session(input, Vec::<u8>::new(), session);
        menu.run().unwrap();
        let (session, output) = menu.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("The sum of all polynomials is: \nx^2 - x\n"));
        assert!(output.contains("Deleted x^2 - 1"));
        assert_eq!(session.listing(), "1.) -x + 1");
    }
}
