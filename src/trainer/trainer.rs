use std::sync::Arc;

use crate::directory::DirectoryError;

/// A trainer as the directory sees it. The registry relies on exactly one
/// capability: the display name. Everything else a trainer carries is opaque
/// to it.
pub trait Trainer: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;
}

/// Shared handle to a trainer record.
///
/// Lookups clone the handle; the backing map keeps its own until the record
/// is deleted, so a caller's copy outlives deletion if the caller holds on
/// to it.
pub type SharedTrainer = Arc<dyn Trainer>;

/// Builds a trainer from credentials.
///
/// Injected into a directory at construction. The directory treats the
/// factory as an external collaborator: its errors are returned to the
/// caller untouched, never retried.
pub type TrainerFactory =
    Box<dyn Fn(&str, &str) -> Result<SharedTrainer, DirectoryError> + Send + Sync>;

/// Default trainer value: a display name and a plaintext password, exactly
/// what the registry needs and nothing more.
#[derive(Debug, Clone)]
pub struct BasicTrainer {
    name: String,
    password: String,
}

impl BasicTrainer {
    /// Rejects empty or all-whitespace names.
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DirectoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DirectoryError::InvalidName);
        }

        Ok(BasicTrainer {
            name,
            password: password.into(),
        })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Trainer for BasicTrainer {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Factory wiring `BasicTrainer` construction into a directory.
pub fn basic_trainer_factory() -> TrainerFactory {
    Box::new(|name, password| {
        let trainer = BasicTrainer::new(name, password)?;
        Ok(Arc::new(trainer) as SharedTrainer)
    })
}
