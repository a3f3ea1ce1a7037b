pub mod file_reader;
pub mod mappers;

pub use file_reader::MenuFileReader;
