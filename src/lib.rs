mod dex;
mod directory;
mod session;
mod trainer;

pub use dex::{Dex, DexError, Move, Pokemon};
pub use directory::{
    ActorTrainerDirectory, DirectoryError, IdGenerator, LockedTrainerDirectory, TrainerDirectory,
    TrainerId, WorkerStats,
};
pub use session::{Session, SessionBuilder};
pub use trainer::{basic_trainer_factory, BasicTrainer, SharedTrainer, Trainer, TrainerFactory};
