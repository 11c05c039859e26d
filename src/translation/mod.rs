mod client;
mod error;
mod examples;
mod language;
mod prompt;

pub use client::{
    MAX_TOKENS, TEMPERATURE, TUNNEL_HEADER, TranslationClient, TranslationRequest,
    TranslationResponse,
};
pub use error::TranslateError;
pub use examples::{EXAMPLES, ExampleEntry, print_examples};
pub use language::{Language, TranslationDirection, print_languages};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
