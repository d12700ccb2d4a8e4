use crate::error::{PolyError, Result};
use crate::poly::polynomial::Polynomial;
use itertools::Itertools;

/// The list of polynomials a calculator session works on. Positions are
/// 1-based, as they are shown to the user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    polynomials: Vec<Polynomial>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            polynomials: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Parse `expression` and append it, returning its position.
    pub fn create(&mut self, expression: &str) -> Result<usize> {
        let p: Polynomial = expression.parse()?;
        debug!("Created polynomial {}: {}", self.len() + 1, p);
        self.polynomials.push(p);
        Ok(self.len())
    }

    pub fn push(&mut self, polynomial: Polynomial) -> usize {
        self.polynomials.push(polynomial);
        self.len()
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.len() {
            return Err(PolyError::NoSuchPolynomial {
                index,
                len: self.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn get(&self, index: usize) -> Result<&Polynomial> {
        let i = self.check_index(index)?;
        Ok(&self.polynomials[i])
    }

    pub fn delete(&mut self, index: usize) -> Result<Polynomial> {
        let i = self.check_index(index)?;
        Ok(self.polynomials.remove(i))
    }

    pub fn list(&self) -> impl Iterator<Item = (usize, &Polynomial)> {
        self.polynomials.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// One `n.) polynomial` line per entry.
    pub fn listing(&self) -> String {
        self.list()
            .map(|(i, p)| format!("{}.) {}", i, p))
            .join("\n")
    }

    pub fn sum(&self) -> Result<Polynomial> {
        Polynomial::sum(&self.polynomials)
    }
}
