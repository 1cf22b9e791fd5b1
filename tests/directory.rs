//! One behavioral suite, two implementations. Every property here must hold
//! for both `ActorTrainerDirectory` and `LockedTrainerDirectory`; the
//! implementations are allowed to differ only in how they serialize access,
//! never in what a caller observes.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use trainerdex::{
    ActorTrainerDirectory, DirectoryError, LockedTrainerDirectory, TrainerDirectory, TrainerId,
};

fn actor() -> Arc<dyn TrainerDirectory> {
    Arc::new(ActorTrainerDirectory::new())
}

fn locked() -> Arc<dyn TrainerDirectory> {
    Arc::new(LockedTrainerDirectory::new())
}

// ---------------------------------------------------------------------------
// The reference scenario: add, collide, look up, delete, re-add.
// ---------------------------------------------------------------------------

fn reference_scenario(directory: &dyn TrainerDirectory) {
    let id1 = directory.add_trainer("ash", "pw1").unwrap();

    assert_eq!(
        directory.add_trainer("ash", "pw2").unwrap_err(),
        DirectoryError::AlreadyExists
    );

    let ash = directory.trainer_by_name("ash").unwrap();
    assert_eq!(ash.name(), "ash");

    directory.delete_trainer(id1).unwrap();
    assert_eq!(
        directory.trainer_by_id(id1).unwrap_err(),
        DirectoryError::NotFound
    );

    let id2 = directory.add_trainer("ash", "pw3").unwrap();
    assert_ne!(id2, id1);
}

#[test]
fn reference_scenario_actor() {
    reference_scenario(actor().as_ref());
}

#[test]
fn reference_scenario_locked() {
    reference_scenario(locked().as_ref());
}

// ---------------------------------------------------------------------------
// Uniqueness under concurrency: N racing adds of one name, one winner.
// ---------------------------------------------------------------------------

fn concurrent_adds_single_winner(directory: Arc<dyn TrainerDirectory>) {
    const CALLERS: usize = 16;

    let barrier = Arc::new(Barrier::new(CALLERS));
    let handles: Vec<_> = (0..CALLERS)
        .map(|caller| {
            let directory = Arc::clone(&directory);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                directory.add_trainer("red", &format!("pw-{}", caller))
            })
        })
        .collect();

    let results: Vec<Result<TrainerId, DirectoryError>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| **r == Err(DirectoryError::AlreadyExists))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(losers, CALLERS - 1);
    assert_eq!(directory.len().unwrap(), 1);
    assert_eq!(directory.trainer_by_name("red").unwrap().name(), "red");
}

#[test]
fn concurrent_adds_single_winner_actor() {
    concurrent_adds_single_winner(actor());
}

#[test]
fn concurrent_adds_single_winner_locked() {
    concurrent_adds_single_winner(locked());
}

// ---------------------------------------------------------------------------
// Identifier distinctness: N racing successful adds, N distinct ids.
// ---------------------------------------------------------------------------

fn concurrent_adds_distinct_ids(directory: Arc<dyn TrainerDirectory>) {
    const CALLERS: usize = 16;

    let barrier = Arc::new(Barrier::new(CALLERS));
    let handles: Vec<_> = (0..CALLERS)
        .map(|caller| {
            let directory = Arc::clone(&directory);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                directory
                    .add_trainer(&format!("trainer-{}", caller), "pw")
                    .unwrap()
            })
        })
        .collect();

    let ids: HashSet<TrainerId> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(ids.len(), CALLERS);
    assert_eq!(directory.len().unwrap(), CALLERS);
}

#[test]
fn concurrent_adds_distinct_ids_actor() {
    concurrent_adds_distinct_ids(actor());
}

#[test]
fn concurrent_adds_distinct_ids_locked() {
    concurrent_adds_distinct_ids(locked());
}

// ---------------------------------------------------------------------------
// Post-delete invisibility, and delete on an absent id leaves no trace.
// ---------------------------------------------------------------------------

fn delete_semantics(directory: &dyn TrainerDirectory) {
    let id = directory.add_trainer("brock", "pw").unwrap();
    directory.delete_trainer(id).unwrap();

    assert_eq!(
        directory.trainer_by_id(id).unwrap_err(),
        DirectoryError::NotFound
    );
    assert_eq!(
        directory.trainer_by_name("brock").unwrap_err(),
        DirectoryError::NotFound
    );

    // Second delete of the same id, and a delete of an id this directory
    // never issued, both fail without touching anything.
    assert_eq!(
        directory.delete_trainer(id).unwrap_err(),
        DirectoryError::NotFound
    );
    let foreign: TrainerId = "0123456789abcdef01234567".parse().unwrap();
    assert_eq!(
        directory.delete_trainer(foreign).unwrap_err(),
        DirectoryError::NotFound
    );
    assert!(directory.is_empty().unwrap());
}

#[test]
fn delete_semantics_actor() {
    delete_semantics(actor().as_ref());
}

#[test]
fn delete_semantics_locked() {
    delete_semantics(locked().as_ref());
}

// ---------------------------------------------------------------------------
// A concurrent add/get/delete mix settles to a state some sequential order
// explains: every thread sees its own record while it lives, and the
// directory is empty once every thread has deleted its own.
// ---------------------------------------------------------------------------

fn concurrent_mixed_operations(directory: Arc<dyn TrainerDirectory>) {
    const CALLERS: usize = 12;
    const ROUNDS: usize = 25;

    let barrier = Arc::new(Barrier::new(CALLERS));
    let handles: Vec<_> = (0..CALLERS)
        .map(|caller| {
            let directory = Arc::clone(&directory);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = format!("trainer-{}", caller);

                for round in 0..ROUNDS {
                    let id = directory
                        .add_trainer(&name, &format!("pw-{}", round))
                        .unwrap();

                    // Our record is visible to us until we delete it.
                    assert_eq!(directory.trainer_by_id(id).unwrap().name(), name);
                    assert_eq!(directory.trainer_by_name(&name).unwrap().name(), name);

                    // Nobody else can take our name while the record lives.
                    assert_eq!(
                        directory.add_trainer(&name, "intruder").unwrap_err(),
                        DirectoryError::AlreadyExists
                    );

                    directory.delete_trainer(id).unwrap();
                    assert_eq!(
                        directory.trainer_by_id(id).unwrap_err(),
                        DirectoryError::NotFound
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(directory.is_empty().unwrap());
}

#[test]
fn concurrent_mixed_operations_actor() {
    concurrent_mixed_operations(actor());
}

#[test]
fn concurrent_mixed_operations_locked() {
    concurrent_mixed_operations(locked());
}

// ---------------------------------------------------------------------------
// Lookups share the record, they do not copy it.
// ---------------------------------------------------------------------------

fn lookups_share_one_record(directory: &dyn TrainerDirectory) {
    let id = directory.add_trainer("misty", "pw").unwrap();

    let by_id = directory.trainer_by_id(id).unwrap();
    let by_name = directory.trainer_by_name("misty").unwrap();
    assert!(Arc::ptr_eq(&by_id, &by_name));

    // A held handle survives deletion; the directory just no longer serves
    // the record.
    directory.delete_trainer(id).unwrap();
    assert_eq!(by_id.name(), "misty");
}

#[test]
fn lookups_share_one_record_actor() {
    lookups_share_one_record(actor().as_ref());
}

#[test]
fn lookups_share_one_record_locked() {
    lookups_share_one_record(locked().as_ref());
}
