pub mod dictionary;
pub mod error;
pub mod loader;
pub mod parser;
pub mod pronunciation;
pub mod symbols;

pub use dictionary::{Dictionary, DictionaryMetadata, LoadStats, PronouncingDictionary};
pub use error::{LoadError, PronunciationError};
pub use loader::{CmuDictLoader, LoadOptions, TextEncoding};
pub use pronunciation::Pronunciation;
pub use symbols::{is_valid_symbol, symbols};
