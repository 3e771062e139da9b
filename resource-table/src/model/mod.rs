//! Data model: resources, their schemas, and dynamic field values.

mod resource;
mod scope;
mod value;

pub use resource::*;
pub use scope::*;
pub use value::*;
