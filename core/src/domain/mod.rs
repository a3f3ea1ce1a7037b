pub mod bill;
pub mod catalog;
pub mod checkout;
pub mod common;
pub mod detection;
pub mod matching;
