pub mod contracts;
pub mod env;

pub use contracts::*;
pub use env::*;
