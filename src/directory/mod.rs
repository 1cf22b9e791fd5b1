mod actor;
mod directory;
mod error;
mod id;
mod locked;
mod state;

pub use actor::{ActorTrainerDirectory, WorkerStats};
pub use directory::TrainerDirectory;
pub use error::DirectoryError;
pub use id::{IdGenerator, TrainerId};
pub use locked::LockedTrainerDirectory;
