// "cargo bench" is still unstable (rust-lang/rfcs#2287).
#![cfg_attr(all(test, feature = "nightly"), feature(test))]
#[cfg(all(test, feature = "nightly"))]
extern crate test;

extern crate clap;
extern crate itertools;
extern crate num_traits;
extern crate pest;
#[macro_use]
extern crate pest_derive;

#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod menu;
pub mod normalize;
pub mod parser;
pub mod poly;
pub mod session;

pub use crate::error::{PolyError, Result};
pub use crate::poly::{Polynomial, Term};
pub use crate::session::Session;


#[cfg(all(test, feature = "nightly"))]
mod benches;
