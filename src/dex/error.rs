use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// Lookup outside the 1..=count range.
    PokemonNotFound,
    /// Lookup outside the 1..=count range.
    MoveNotFound,
    /// The dataset file could not be read.
    Io(String),
    /// The dataset document is not valid JSON (or not the expected shape).
    Parse(String),
    /// The document parsed but contradicts itself (counts or declared ids
    /// disagree with the lists).
    Malformed(String),
}

impl DexError {
    /// Whether this error means the process cannot start correctly, as
    /// opposed to a single lookup failing at runtime.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DexError::PokemonNotFound | DexError::MoveNotFound)
    }
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::PokemonNotFound => write!(f, "pokèmon not found"),
            DexError::MoveNotFound => write!(f, "move not found"),
            DexError::Io(message) => write!(f, "cannot read dataset: {}", message),
            DexError::Parse(message) => write!(f, "cannot parse dataset: {}", message),
            DexError::Malformed(message) => write!(f, "malformed dataset: {}", message),
        }
    }
}

impl std::error::Error for DexError {}

impl From<std::io::Error> for DexError {
    fn from(err: std::io::Error) -> Self {
        DexError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        DexError::Parse(err.to_string())
    }
}
