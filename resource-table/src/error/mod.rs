//! Error types

mod api;
mod table;
mod validation;

pub use api::*;
pub use table::*;
pub use validation::*;
