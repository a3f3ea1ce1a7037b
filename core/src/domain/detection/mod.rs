pub mod entities;
pub mod parser;
pub mod prompt;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
