pub mod llm;
pub mod menu;
