pub mod polynomial;
pub mod term;

pub use self::polynomial::Polynomial;
pub use self::term::Term;
