//! Concurrent dispatch with first-failure joining

use std::io;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use crate::error::{CutoverError, CutoverResult};

/// One remote operation, run on its own thread
pub(crate) type Operation = Box<dyn FnOnce() -> CutoverResult<()> + Send + 'static>;

/// Operation threads that may still be running after an early return
///
/// Dropping this without calling [`wait`](Self::wait) leaves the threads
/// running unobserved; a process that exits first kills them mid-transfer.
#[derive(Default)]
pub(crate) struct Detached(Vec<JoinHandle<()>>);

impl Detached {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn append(&mut self, other: Detached) {
        self.0.extend(other.0);
    }

    /// Block until every thread has finished; outcomes are discarded
    pub(crate) fn wait(self) {
        for handle in self.0 {
            let _ = handle.join();
        }
    }
}

/// Run every operation concurrently and return the first failure
///
/// Returns as soon as any operation fails. Operations still running at that
/// point keep running; their threads are handed back as [`Detached`] so the
/// caller can let them settle before exiting. On success the returned set
/// is empty.
pub(crate) fn join_first_failure(operations: Vec<Operation>) -> (CutoverResult<()>, Detached) {
    let (tx, rx) = mpsc::channel();
    let count = operations.len();
    let mut handles = Vec::with_capacity(count);

    for (index, operation) in operations.into_iter().enumerate() {
        let tx = tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("cutover-op-{}", index))
            .spawn(move || {
                // The receiver is gone once an earlier failure was returned
                let _ = tx.send(operation());
            });
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => return (Err(e.into()), Detached(handles)),
        }
    }
    drop(tx);

    for _ in 0..count {
        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return (Err(e), Detached(handles)),
            Err(_) => {
                let err = CutoverError::Io(io::Error::other(
                    "a deploy operation panicked before reporting",
                ));
                return (Err(err), Detached(handles));
            }
        }
    }

    // Every thread has reported; joining only reaps them
    Detached(handles).wait();
    (Ok(()), Detached::default())
}
