pub mod types;
pub mod element_texts;
pub mod generator;
pub mod formatters;

pub use types::{ElementCard, ElementText, InterpretationBundle};
pub use element_texts::element_text;
pub use generator::InterpretationGenerator;
pub use formatters::JsonFormatter;
