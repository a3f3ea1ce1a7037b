pub mod entities;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::MenuMatcher;
pub use value_objects::*;
