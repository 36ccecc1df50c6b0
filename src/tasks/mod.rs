//! # Task Scheduling Module
//!
//! This module provides the worker-thread pool used by the scheduled mesh
//! build mode, together with the completion handle that sequences dependent
//! work.
//!
//! ## Architecture
//!
//! - `TaskScheduler`: owns a fixed pool of worker threads, each with a
//!   dedicated task channel, and distributes submitted jobs round-robin.
//! - `JobHandle`: an opaque token representing "this job has finished".
//!   Waiting on it is the only way to observe completion; there is no
//!   cancellation, no timeout and no polling.
//!
//! The contract is fire-and-wait: a caller submits a job, holds on to the
//! returned handle, and blocks on it before touching anything the job
//! produced. Sequencing between a producer (e.g. the task that last wrote a
//! voxel grid) and a consumer (the mesh pass) is expressed by handing the
//! producer's `JobHandle` to the consumer's submission site.

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{error, info};

/// A unit of work submitted to the scheduler.
type Job = Box<dyn FnOnce() + Send + 'static>;

/// An opaque completion token for one submitted job.
///
/// `complete` blocks until the job has run. A handle whose worker has shut
/// down counts as complete; the waiter is released either way.
#[derive(Debug)]
pub struct JobHandle {
    completion: Receiver<()>,
}

impl JobHandle {
    /// Blocks the calling thread until the job this handle tracks has
    /// finished executing.
    pub fn complete(self) {
        // A disconnected sender means the job already ran (or its worker is
        // gone); both release the waiter.
        let _ = self.completion.recv();
    }
}

/// A communication channel between the submitting thread and one worker.
#[derive(Debug)]
struct TaskChannel {
    job_sender: Sender<Job>,
    _worker: JoinHandle<()>,
}

/// A fixed pool of worker threads with round-robin job distribution.
///
/// Each worker owns one mpsc channel and drains it in submission order, so
/// two jobs submitted to the same channel never run concurrently with each
/// other. Workers shut down when the scheduler is dropped and their channels
/// disconnect.
pub struct TaskScheduler {
    channels: VecDeque<TaskChannel>,
}

impl TaskScheduler {
    /// Creates a new scheduler with the specified number of worker threads.
    ///
    /// # Arguments
    /// * `num_workers` - Number of worker threads to spawn; typically the
    ///   available parallelism of the machine.
    ///
    /// # Panics
    /// Panics if `num_workers` is zero or thread creation fails.
    pub fn new(num_workers: usize) -> Self {
        assert!(num_workers > 0, "scheduler needs at least one worker");

        info!(
            "Available parallelism: {:?}",
            thread::available_parallelism()
        );

        let mut channels = VecDeque::with_capacity(num_workers);
        for _ in 0..num_workers {
            let (job_tx, job_rx) = channel::<Job>();

            let worker = thread::spawn(move || {
                while let Ok(job) = job_rx.recv() {
                    job();
                }
            });

            channels.push_back(TaskChannel {
                job_sender: job_tx,
                _worker: worker,
            });
        }

        TaskScheduler { channels }
    }

    /// Creates a scheduler sized to the machine's available parallelism.
    pub fn with_available_parallelism() -> Self {
        let num_workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(num_workers)
    }

    /// Submits a job for execution on one of the worker threads.
    ///
    /// Channels are rotated round-robin so consecutive submissions land on
    /// different workers. The returned handle completes once the job has
    /// run to completion; submission itself never blocks.
    ///
    /// # Returns
    /// A `JobHandle` to wait on before reading anything the job produced.
    pub fn submit<F>(&mut self, job: F) -> JobHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = channel::<()>();

        let wrapped: Job = Box::new(move || {
            job();
            let _ = done_tx.send(());
        });

        // Rotate the channel to the back so the next submission picks the
        // following worker.
        let task_channel = self.channels.pop_front().unwrap();
        if task_channel.job_sender.send(wrapped).is_err() {
            // Worker gone; the dropped completion sender releases the
            // handle's waiter immediately.
            error!("Failed to send job to worker; handle resolves as complete");
        }
        self.channels.push_back(task_channel);

        JobHandle { completion: done_rx }
    }
}
