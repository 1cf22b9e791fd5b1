use crate::trainer::SharedTrainer;

use super::error::DirectoryError;
use super::id::TrainerId;

/// The directory contract: a keyed, process-lifetime collection of trainer
/// records with unique names and unique ids.
///
/// Two implementations ship with this crate, [`ActorTrainerDirectory`]
/// (message passing to a single owning worker) and
/// [`LockedTrainerDirectory`] (one exclusive mutex), and both must produce
/// identical observable results for identical call sequences. The shared
/// suite in `tests/directory.rs` holds them to that.
///
/// [`ActorTrainerDirectory`]: super::ActorTrainerDirectory
/// [`LockedTrainerDirectory`]: super::LockedTrainerDirectory
pub trait TrainerDirectory: Send + Sync {
    /// Builds a trainer via the configured factory and inserts it, provided
    /// no live record already owns the name. The uniqueness check and the
    /// insert are indivisible with respect to other `add_trainer` calls.
    fn add_trainer(&self, name: &str, password: &str) -> Result<TrainerId, DirectoryError>;

    /// Exact, case-sensitive name lookup. An empty name is invalid.
    fn trainer_by_name(&self, name: &str) -> Result<SharedTrainer, DirectoryError>;

    /// Direct id lookup.
    fn trainer_by_id(&self, id: TrainerId) -> Result<SharedTrainer, DirectoryError>;

    /// Removes the record. Fails with `NotFound` if the id was never issued
    /// or is already deleted, leaving the directory unchanged.
    fn delete_trainer(&self, id: TrainerId) -> Result<(), DirectoryError>;

    /// Number of live records.
    fn len(&self) -> Result<usize, DirectoryError>;

    fn is_empty(&self) -> Result<bool, DirectoryError> {
        Ok(self.len()? == 0)
    }
}
