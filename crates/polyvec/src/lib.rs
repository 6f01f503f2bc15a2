#![doc = include_str!("../README.md")]

mod budget;
mod error;
mod kind;
mod options;
mod print;
mod tagged;
mod value;
mod vec;

pub use budget::*;
pub use error::*;
pub use kind::*;
pub use options::*;
pub use print::*;
pub use tagged::*;
pub use value::*;
pub use vec::*;
