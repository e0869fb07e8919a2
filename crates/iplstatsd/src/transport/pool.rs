//! Bounded worker pool for session handling.
//!
//! The pool owns a fixed set of worker threads fed from a zero-capacity
//! channel. A zero-capacity channel has no queue: [`WorkerPool::submit`]
//! blocks until a worker is free to take the job. Saturated submissions
//! wait; they are never dropped.

use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded};
use thiserror::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size pool of worker threads.
pub(crate) struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

/// Error returned when submitting to a pool whose workers have exited.
#[derive(Debug, Error)]
#[error("worker pool is shut down")]
pub(crate) struct PoolClosed;

impl WorkerPool {
    /// Spawns `size` workers (clamped to at least one).
    pub(crate) fn new(size: usize) -> Self {
        let (sender, receiver) = bounded::<Job>(0);
        let workers = (0..size.max(1))
            .map(|_| {
                let jobs = receiver.clone();
                thread::spawn(move || worker_loop(&jobs))
            })
            .collect();
        Self {
            sender: Some(sender),
            workers,
        }
    }

    /// Hands a job to the next free worker, blocking while all are busy.
    pub(crate) fn submit(&self, job: Job) -> Result<(), PoolClosed> {
        match &self.sender {
            Some(sender) => sender.send(job).map_err(|_| PoolClosed),
            None => Err(PoolClosed),
        }
    }
}

impl Drop for WorkerPool {
    /// Disconnects the job channel and waits for in-flight jobs to finish.
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(jobs: &Receiver<Job>) {
    while let Ok(job) = jobs.recv() {
        job();
    }
}
