use std::sync::{Mutex, MutexGuard};

use log::trace;

use crate::trainer::{basic_trainer_factory, SharedTrainer, TrainerFactory};

use super::directory::TrainerDirectory;
use super::error::DirectoryError;
use super::id::{IdGenerator, TrainerId};
use super::state::DirectoryState;

/// [`TrainerDirectory`] behind one exclusive lock.
///
/// Every operation, pure reads included, holds the same mutex for its whole
/// duration, so the lock-grant order is the serialization of all calls.
/// Functionally equivalent to the actor implementation, and the simpler of
/// the two, but every caller contends on the one critical section: a hot
/// name lookup blocks writers and other readers alike.
pub struct LockedTrainerDirectory {
    factory: TrainerFactory,
    ids: IdGenerator,
    state: Mutex<DirectoryState>,
}

impl LockedTrainerDirectory {
    /// Directory backed by [`BasicTrainer`](crate::BasicTrainer)
    /// construction.
    pub fn new() -> Self {
        Self::with_factory(basic_trainer_factory())
    }

    /// Directory with a custom trainer factory. The factory runs on the
    /// calling thread, outside the critical section; only the uniqueness
    /// check and the insert happen under the lock.
    pub fn with_factory(factory: TrainerFactory) -> Self {
        LockedTrainerDirectory {
            factory,
            ids: IdGenerator::new(),
            state: Mutex::new(DirectoryState::new()),
        }
    }

    fn locked(
        &self,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, DirectoryState>, DirectoryError> {
        self.state
            .lock()
            .map_err(|_| DirectoryError::LockPoisoned(operation))
    }
}

impl TrainerDirectory for LockedTrainerDirectory {
    fn add_trainer(&self, name: &str, password: &str) -> Result<TrainerId, DirectoryError> {
        let trainer = (self.factory)(name, password)?;

        let mut state = self.locked("add")?;
        let id = state.insert(&self.ids, trainer)?;
        trace!("added trainer {:?} as {}", name, id);
        Ok(id)
    }

    fn trainer_by_name(&self, name: &str) -> Result<SharedTrainer, DirectoryError> {
        self.locked("get by name")?.by_name(name)
    }

    fn trainer_by_id(&self, id: TrainerId) -> Result<SharedTrainer, DirectoryError> {
        self.locked("get by id")?.by_id(id)
    }

    fn delete_trainer(&self, id: TrainerId) -> Result<(), DirectoryError> {
        let mut state = self.locked("delete")?;
        state.remove(id)?;
        trace!("deleted trainer {}", id);
        Ok(())
    }

    fn len(&self) -> Result<usize, DirectoryError> {
        Ok(self.locked("len")?.len())
    }
}

impl Default for LockedTrainerDirectory {
    fn default() -> Self {
        LockedTrainerDirectory::new()
    }
}
