use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, trace};

use crate::trainer::{basic_trainer_factory, SharedTrainer, TrainerFactory};

use super::directory::TrainerDirectory;
use super::error::DirectoryError;
use super::id::{IdGenerator, TrainerId};
use super::state::DirectoryState;

/// One unit of work for the worker. Every command carries a single-use
/// reply channel, and the worker answers every command it dequeues exactly
/// once.
enum Command {
    Add {
        name: String,
        password: String,
        reply: Sender<Result<TrainerId, DirectoryError>>,
    },
    GetByName {
        name: String,
        reply: Sender<Result<SharedTrainer, DirectoryError>>,
    },
    GetById {
        id: TrainerId,
        reply: Sender<Result<SharedTrainer, DirectoryError>>,
    },
    Delete {
        id: TrainerId,
        reply: Sender<Result<(), DirectoryError>>,
    },
    Len {
        reply: Sender<Result<usize, DirectoryError>>,
    },
}

/// What the worker did over its lifetime, reported by
/// [`ActorTrainerDirectory::stop`].
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Commands the worker answered.
    pub commands_handled: usize,
    /// Commands answered with an error.
    pub commands_failed: usize,
}

/// [`TrainerDirectory`] served by a single dedicated worker thread.
///
/// The worker is the only thread that ever touches the backing maps, so the
/// data path has no lock at all: commands are drained one at a time from
/// the request channel, and the dequeue order is the serialization of all
/// concurrent calls. The request channel is unbounded, so submitting never
/// blocks a caller; waiting for the reply does, with no timeout.
///
/// The worker runs until [`stop`](Self::stop) or drop. Operations issued
/// once it is gone fail with [`DirectoryError::WorkerGone`] instead of
/// deadlocking.
pub struct ActorTrainerDirectory {
    commands: Option<Sender<Command>>,
    worker: Option<JoinHandle<WorkerStats>>,
}

impl ActorTrainerDirectory {
    /// Directory backed by [`BasicTrainer`](crate::BasicTrainer)
    /// construction.
    pub fn new() -> Self {
        Self::with_factory(basic_trainer_factory())
    }

    /// Directory with a custom trainer factory. The factory runs on the
    /// worker thread, inside the serialization, so it sees adds in the same
    /// total order the maps do.
    pub fn with_factory(factory: TrainerFactory) -> Self {
        let (commands, requests) = unbounded();
        let worker = thread::spawn(move || run_worker(requests, factory));

        ActorTrainerDirectory {
            commands: Some(commands),
            worker: Some(worker),
        }
    }

    /// Stops the worker and waits for it, reporting what it handled.
    pub fn stop(mut self) -> WorkerStats {
        self.shutdown()
    }

    fn shutdown(&mut self) -> WorkerStats {
        // Dropping the sender disconnects the channel; the worker drains
        // whatever is queued and exits.
        self.commands.take();
        match self.worker.take() {
            Some(worker) => worker.join().unwrap_or_default(),
            None => WorkerStats::default(),
        }
    }

    fn submit<T>(
        &self,
        command: impl FnOnce(Sender<Result<T, DirectoryError>>) -> Command,
    ) -> Result<T, DirectoryError> {
        let commands = self.commands.as_ref().ok_or(DirectoryError::WorkerGone)?;
        let (reply, response) = bounded(1);

        commands
            .send(command(reply))
            .map_err(|_| DirectoryError::WorkerGone)?;
        response.recv().map_err(|_| DirectoryError::WorkerGone)?
    }
}

impl TrainerDirectory for ActorTrainerDirectory {
    fn add_trainer(&self, name: &str, password: &str) -> Result<TrainerId, DirectoryError> {
        self.submit(|reply| Command::Add {
            name: name.to_string(),
            password: password.to_string(),
            reply,
        })
    }

    fn trainer_by_name(&self, name: &str) -> Result<SharedTrainer, DirectoryError> {
        self.submit(|reply| Command::GetByName {
            name: name.to_string(),
            reply,
        })
    }

    fn trainer_by_id(&self, id: TrainerId) -> Result<SharedTrainer, DirectoryError> {
        self.submit(|reply| Command::GetById { id, reply })
    }

    fn delete_trainer(&self, id: TrainerId) -> Result<(), DirectoryError> {
        self.submit(|reply| Command::Delete { id, reply })
    }

    fn len(&self) -> Result<usize, DirectoryError> {
        self.submit(|reply| Command::Len { reply })
    }
}

impl Default for ActorTrainerDirectory {
    fn default() -> Self {
        ActorTrainerDirectory::new()
    }
}

impl Drop for ActorTrainerDirectory {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(requests: Receiver<Command>, factory: TrainerFactory) -> WorkerStats {
    debug!("trainer directory worker started");

    let mut state = DirectoryState::new();
    let ids = IdGenerator::new();
    let mut stats = WorkerStats::default();

    while let Ok(command) = requests.recv() {
        stats.commands_handled += 1;

        match command {
            Command::Add {
                name,
                password,
                reply,
            } => {
                let result = factory(&name, &password)
                    .and_then(|trainer| state.insert(&ids, trainer));
                if let Ok(id) = &result {
                    trace!("added trainer {:?} as {}", name, id);
                }
                answer(reply, result, &mut stats);
            }
            Command::GetByName { name, reply } => {
                answer(reply, state.by_name(&name), &mut stats);
            }
            Command::GetById { id, reply } => {
                answer(reply, state.by_id(id), &mut stats);
            }
            Command::Delete { id, reply } => {
                let result = state.remove(id);
                if result.is_ok() {
                    trace!("deleted trainer {}", id);
                }
                answer(reply, result, &mut stats);
            }
            Command::Len { reply } => {
                answer(reply, Ok(state.len()), &mut stats);
            }
        }
    }

    debug!(
        "trainer directory worker stopped: {} commands handled ({} failed), {} trainers live",
        stats.commands_handled,
        stats.commands_failed,
        state.len()
    );
    stats
}

fn answer<T>(
    reply: Sender<Result<T, DirectoryError>>,
    result: Result<T, DirectoryError>,
    stats: &mut WorkerStats,
) {
    if result.is_err() {
        stats.commands_failed += 1;
    }
    // The caller blocks on this reply; a send can only fail if the calling
    // thread died, in which case nobody is waiting for the answer.
    let _ = reply.send(result);
}
