// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Execution contexts and the primary delivery queue.
//
// Native completion handlers arrive on threads owned by the OS framework.
// Outcomes that touch the engine's object graph (or will trigger UI) must
// instead run on the engine's primary loop. The bridge marshals those onto
// a single FIFO queue; the engine drains it once per frame, or runs it on
// a dedicated task. One queue, no ad hoc locking of shared data.

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Where a completion or event handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// The engine's primary loop. Required for anything that presents UI
    /// or mutates state shared with it.
    Main,
    /// Inline on whatever thread the native layer resolved from.
    Background,
}

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Cloneable posting handle for the primary queue. Held by every pending
/// operation that was issued with [`ExecutionContext::Main`].
#[derive(Clone)]
pub struct MainDispatcher {
    tx: mpsc::UnboundedSender<Job>,
}

impl MainDispatcher {
    /// Enqueue a job for the primary loop. FIFO with respect to every
    /// other post through any clone of this dispatcher.
    ///
    /// Posting after the [`MainQueue`] is gone (engine shutting down) is a
    /// logged no-op; the job is dropped, which is the documented
    /// zero-delivery case for process teardown.
    pub fn post(&self, job: impl FnOnce() + Send + 'static) {
        if self.tx.send(Box::new(job)).is_err() {
            warn!("primary queue is gone; dropping posted job");
        }
    }
}

impl std::fmt::Debug for MainDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainDispatcher").finish_non_exhaustive()
    }
}

/// Receiving side of the primary queue. Owned by the engine integration;
/// there is exactly one per bridge instance.
pub struct MainQueue {
    rx: mpsc::UnboundedReceiver<Job>,
}

impl MainQueue {
    /// Run every job currently queued, in posting order, and return how
    /// many ran. Call once per engine frame.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        if ran > 0 {
            debug!(jobs = ran, "drained primary queue");
        }
        ran
    }

    /// Serve the queue on a dedicated task until every dispatcher clone is
    /// dropped. Alternative to per-frame [`drain`] for engines that give
    /// the binding its own main task.
    pub async fn run(&mut self) {
        while let Some(job) = self.rx.recv().await {
            job();
        }
        debug!("primary queue closed");
    }
}

/// Create the primary queue pair: the cloneable dispatcher and the
/// single consumer.
pub fn main_queue() -> (MainDispatcher, MainQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MainDispatcher { tx }, MainQueue { rx })
}
