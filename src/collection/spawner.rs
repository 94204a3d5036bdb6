//! Where prefetch jobs run.

use std::io;
use std::thread;

/// A unit of background work.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs prefetch jobs.
///
/// Jobs only produce a batch and send it over a channel; they never touch
/// the list itself, so any executor will do.
pub trait Spawner {
    fn spawn(&self, job: Job) -> io::Result<()>;
}

/// One short-lived named thread per job.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawner for ThreadSpawner {
    fn spawn(&self, job: Job) -> io::Result<()> {
        thread::Builder::new()
            .name("bridge-prefetch".to_string())
            .spawn(job)
            .map(drop)
    }
}

/// Runs jobs immediately on the calling thread.
///
/// The batch still goes through the channel and is applied on the next poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineSpawner;

impl Spawner for InlineSpawner {
    fn spawn(&self, job: Job) -> io::Result<()> {
        job();
        Ok(())
    }
}

impl<S: Spawner + ?Sized> Spawner for Box<S> {
    fn spawn(&self, job: Job) -> io::Result<()> {
        (**self).spawn(job)
    }
}
