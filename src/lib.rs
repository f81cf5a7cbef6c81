pub mod charset;
pub mod generator;

pub use charset::CharacterClasses;
pub use generator::{GenerationError, GenerationRequest, Generator, DEFAULT_MAX_LENGTH};
