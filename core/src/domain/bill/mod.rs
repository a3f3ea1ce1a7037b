pub mod entities;
pub mod errors;
pub mod services;

pub use entities::*;
pub use errors::BillError;
pub use services::BillBuilder;
