use std::collections::HashMap;

use crate::trainer::SharedTrainer;

use super::error::DirectoryError;
use super::id::{IdGenerator, TrainerId};

/// The maps behind a directory: primary records keyed by id, plus a name
/// index so uniqueness checks and name lookups skip the full scan.
///
/// This struct is not synchronized. Whoever owns it decides the concurrency
/// discipline (the worker thread owns one exclusively, the locked directory
/// wraps one in a mutex) and must only touch both maps from inside the same
/// critical section, or they drift apart.
pub(super) struct DirectoryState {
    trainers: HashMap<TrainerId, SharedTrainer>,
    by_name: HashMap<String, TrainerId>,
}

impl DirectoryState {
    pub(super) fn new() -> Self {
        DirectoryState {
            trainers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Uniqueness check and insert, as one step.
    pub(super) fn insert(
        &mut self,
        ids: &IdGenerator,
        trainer: SharedTrainer,
    ) -> Result<TrainerId, DirectoryError> {
        let name = trainer.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(DirectoryError::AlreadyExists);
        }

        let id = ids.next_id();
        self.by_name.insert(name, id);
        self.trainers.insert(id, trainer);
        Ok(id)
    }

    pub(super) fn by_name(&self, name: &str) -> Result<SharedTrainer, DirectoryError> {
        if name.is_empty() {
            return Err(DirectoryError::InvalidName);
        }

        self.by_name
            .get(name)
            .and_then(|id| self.trainers.get(id))
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }

    pub(super) fn by_id(&self, id: TrainerId) -> Result<SharedTrainer, DirectoryError> {
        self.trainers.get(&id).cloned().ok_or(DirectoryError::NotFound)
    }

    pub(super) fn remove(&mut self, id: TrainerId) -> Result<(), DirectoryError> {
        match self.trainers.remove(&id) {
            Some(trainer) => {
                self.by_name.remove(trainer.name());
                Ok(())
            }
            None => Err(DirectoryError::NotFound),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.trainers.len()
    }
}
