#[macro_use]
extern crate derive_more;

pub mod error;
pub mod geometry;
pub mod hex;

pub use error::{HexError, Result};
