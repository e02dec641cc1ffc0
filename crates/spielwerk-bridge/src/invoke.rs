// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-shot bridged operations.
//
// `Bridge::invoke` issues exactly one native asynchronous operation and
// guarantees the caller's completion observes exactly one `Outcome`, on
// the requested execution context — even when the native layer resolves
// twice (observed with listener-style platform callbacks), resolves with
// value and error at once, or fails before any async work starts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use spielwerk_core::error::Result;
use spielwerk_core::types::OperationId;
use spielwerk_core::{NativeError, NormalizedError};
use tracing::debug;

use crate::context::{ExecutionContext, MainDispatcher};
use crate::outcome::{Outcome, reconcile};

/// Best-effort native cancellation hook, supplied by the start thunk when
/// the underlying native API supports abandonment.
pub type CancelFn = Box<dyn FnOnce() + Send>;

/// One in-flight native call: the delivery target, its execution-context
/// tag, and the one-shot guard. Created by `invoke`, dead after delivery.
struct PendingOperation<T> {
    id: OperationId,
    context: ExecutionContext,
    dispatcher: MainDispatcher,
    delivered: Arc<AtomicBool>,
    on_complete: Mutex<Option<Box<dyn FnOnce(Outcome<T>) + Send>>>,
}

impl<T: Send + 'static> PendingOperation<T> {
    /// First delivery wins; every later resolution is suppressed.
    fn deliver(&self, outcome: Outcome<T>) {
        if self.delivered.swap(true, Ordering::AcqRel) {
            debug!(op = %self.id, "duplicate native resolution suppressed");
            return;
        }
        let Some(on_complete) = self
            .on_complete
            .lock()
            .expect("completion lock poisoned")
            .take()
        else {
            return;
        };
        match self.context {
            ExecutionContext::Background => on_complete(outcome),
            ExecutionContext::Main => self.dispatcher.post(move || on_complete(outcome)),
        }
    }
}

/// Handed to the start thunk, which passes it into the native completion
/// handler. Clones share the same one-shot pending operation.
pub struct Resolver<T> {
    op: Arc<PendingOperation<T>>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
        }
    }
}

impl<T: Send + 'static> Resolver<T> {
    /// Resolve from a raw native `(value?, error?)` pair. All four
    /// combinations are accepted; see [`crate::outcome::reconcile`].
    pub fn resolve(&self, value: Option<T>, error: Option<NativeError>) {
        self.op.deliver(reconcile(value, error));
    }

    pub fn succeed(&self, value: T) {
        self.op.deliver(Outcome::Success(value));
    }

    pub fn fail(&self, error: NormalizedError) {
        self.op.deliver(Outcome::Failure(error));
    }
}

/// Caller-side view of a pending operation: query and best-effort cancel.
pub struct OperationHandle {
    id: OperationId,
    delivered: Arc<AtomicBool>,
    cancel: Mutex<Option<CancelFn>>,
}

impl OperationHandle {
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Whether an outcome has been accepted for delivery.
    pub fn is_resolved(&self) -> bool {
        self.delivered.load(Ordering::Acquire)
    }

    /// Ask the native layer to abandon the operation, if it supports that.
    ///
    /// Calling after resolution does nothing: the delivered outcome
    /// stands. Calling when the native API offers no cancellation is a
    /// safe no-op, as is calling twice.
    pub fn cancel(&self) {
        if self.is_resolved() {
            debug!(op = %self.id, "cancel after resolution ignored");
            return;
        }
        match self.cancel.lock().expect("cancel lock poisoned").take() {
            Some(hook) => {
                debug!(op = %self.id, "requesting native cancellation");
                hook();
            }
            None => debug!(op = %self.id, "cancellation unsupported or already requested"),
        }
    }
}

impl std::fmt::Debug for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationHandle")
            .field("id", &self.id)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

/// Entry point for all bridged calls. Cheap to clone; every clone posts
/// main-context deliveries to the same primary queue.
#[derive(Clone, Debug)]
pub struct Bridge {
    dispatcher: MainDispatcher,
}

impl Bridge {
    pub fn new(dispatcher: MainDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &MainDispatcher {
        &self.dispatcher
    }

    /// Issue one native asynchronous operation.
    ///
    /// `start` begins the native call and hands the [`Resolver`] to its
    /// completion handler; it may return a [`CancelFn`] if the native API
    /// supports abandonment. A synchronous `Err` from `start` (malformed
    /// input, missing platform) is converted into an immediate `Failure`
    /// delivered through `on_complete` — callers never need a second
    /// error-handling shape for "failed before starting".
    ///
    /// `on_complete` fires exactly once, on `context`.
    pub fn invoke<T, S, C>(
        &self,
        context: ExecutionContext,
        start: S,
        on_complete: C,
    ) -> OperationHandle
    where
        T: Send + 'static,
        S: FnOnce(Resolver<T>) -> Result<Option<CancelFn>>,
        C: FnOnce(Outcome<T>) + Send + 'static,
    {
        let id = OperationId::new();
        let delivered = Arc::new(AtomicBool::new(false));
        let op = Arc::new(PendingOperation {
            id,
            context,
            dispatcher: self.dispatcher.clone(),
            delivered: Arc::clone(&delivered),
            on_complete: Mutex::new(Some(Box::new(on_complete))),
        });
        let resolver = Resolver { op };

        debug!(op = %id, ?context, "issuing native operation");
        let cancel = match start(resolver.clone()) {
            Ok(cancel) => cancel,
            Err(err) => {
                debug!(op = %id, error = %err, "start failed synchronously");
                resolver.fail(err.into_normalized());
                None
            }
        };

        OperationHandle {
            id,
            delivered,
            cancel: Mutex::new(cancel),
        }
    }
}
