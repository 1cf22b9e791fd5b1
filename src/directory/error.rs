use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No live record matches the requested name or id.
    NotFound,
    /// A live record already owns the requested name.
    AlreadyExists,
    /// Empty or all-whitespace trainer name.
    InvalidName,
    /// A token that does not parse as a trainer id.
    InvalidId(String),
    /// The mutex guarding the directory was poisoned by a panicking holder.
    LockPoisoned(&'static str),
    /// The directory worker has stopped (or died); no further operations
    /// can be served.
    WorkerGone,
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::NotFound => write!(f, "trainer not found"),
            DirectoryError::AlreadyExists => write!(f, "trainer already exists"),
            DirectoryError::InvalidName => write!(f, "invalid trainer name"),
            DirectoryError::InvalidId(token) => {
                write!(f, "invalid trainer id {:?}", token)
            }
            DirectoryError::LockPoisoned(operation) => {
                write!(f, "directory lock poisoned during {}", operation)
            }
            DirectoryError::WorkerGone => write!(f, "directory worker is gone"),
        }
    }
}

impl std::error::Error for DirectoryError {}
