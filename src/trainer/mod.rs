mod trainer;

pub use trainer::{basic_trainer_factory, BasicTrainer, SharedTrainer, Trainer, TrainerFactory};
