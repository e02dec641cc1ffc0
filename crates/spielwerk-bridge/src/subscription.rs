// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Repeating-listener bridged registrations.
//
// Some native subsystems are registration-based rather than one-shot: a
// saved-game conflict listener or a transaction-updates stream may fire
// many times for the lifetime of a session. `Bridge::register` models
// these: events are delivered in arrival order until the subscription is
// released. Release is idempotent; no delivery begins after it returns,
// and events still queued for the primary loop are discarded at drain
// time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use spielwerk_core::error::Result;
use spielwerk_core::types::OperationId;
use tracing::{debug, trace};

use crate::context::ExecutionContext;
use crate::invoke::Bridge;

/// Native teardown hook, supplied by the start thunk (e.g. unregister the
/// platform listener, cancel the update task).
pub type ReleaseFn = Box<dyn FnOnce() + Send>;

type Handler<E> = Arc<dyn Fn(E) + Send + Sync>;

struct SubscriptionState<E> {
    id: OperationId,
    context: ExecutionContext,
    dispatcher: crate::context::MainDispatcher,
    released: Arc<AtomicBool>,
    handler: Mutex<Option<Handler<E>>>,
}

impl<E: Send + 'static> SubscriptionState<E> {
    /// Invoke the handler if the subscription is still live. The released
    /// check and the handler fetch happen together, so a release that has
    /// returned can never be followed by a fresh delivery.
    fn deliver(&self, event: E) {
        if self.released.load(Ordering::Acquire) {
            trace!(sub = %self.id, "event after release dropped");
            return;
        }
        let handler = self.handler.lock().expect("handler lock poisoned").clone();
        match handler {
            Some(handler) => handler(event),
            None => trace!(sub = %self.id, "event raced release; dropped"),
        }
    }
}

/// Handed to the start thunk, which passes it into the native listener.
/// Clones feed the same subscription.
pub struct EventSink<E> {
    state: Arc<SubscriptionState<E>>,
}

impl<E> Clone for EventSink<E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<E: Send + 'static> EventSink<E> {
    /// Deliver one event. FIFO per subscription: background-context sinks
    /// run the handler inline on the native thread in arrival order;
    /// main-context sinks post to the primary queue, which preserves
    /// posting order.
    pub fn emit(&self, event: E) {
        match self.state.context {
            ExecutionContext::Background => self.state.deliver(event),
            ExecutionContext::Main => {
                let state = Arc::clone(&self.state);
                self.state.dispatcher.post(move || state.deliver(event));
            }
        }
    }
}

/// Caller-side handle for a repeating registration.
pub struct Subscription {
    id: OperationId,
    released: Arc<AtomicBool>,
    /// Drops the typed handler; boxed so the handle stays type-erased.
    clear_handler: Mutex<Option<Box<dyn FnOnce() + Send>>>,
    native_release: Mutex<Option<ReleaseFn>>,
}

impl Subscription {
    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Stop the stream. Idempotent. After this returns no further event
    /// delivery begins, including events already queued for the primary
    /// loop; the native teardown hook runs exactly once.
    pub fn release(&self) {
        if self.released.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(clear) = self
            .clear_handler
            .lock()
            .expect("clear-handler lock poisoned")
            .take()
        {
            clear();
        }
        if let Some(native) = self
            .native_release
            .lock()
            .expect("release lock poisoned")
            .take()
        {
            native();
        }
        debug!(sub = %self.id, "subscription released");
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}

impl Bridge {
    /// Register for a repeating native event stream.
    ///
    /// `start` installs the native listener and hands it the
    /// [`EventSink`]; it may return a [`ReleaseFn`] to tear the listener
    /// down. A synchronous `Err` from `start` means nothing was
    /// registered and is returned as-is.
    ///
    /// `on_event` may fire zero or many times, in arrival order, until
    /// [`Subscription::release`] returns.
    pub fn register<E, S, H>(
        &self,
        context: ExecutionContext,
        start: S,
        on_event: H,
    ) -> Result<Subscription>
    where
        E: Send + 'static,
        S: FnOnce(EventSink<E>) -> Result<Option<ReleaseFn>>,
        H: Fn(E) + Send + Sync + 'static,
    {
        let id = OperationId::new();
        let released = Arc::new(AtomicBool::new(false));
        let state = Arc::new(SubscriptionState {
            id,
            context,
            dispatcher: self.dispatcher().clone(),
            released: Arc::clone(&released),
            handler: Mutex::new(Some(Arc::new(on_event) as Handler<E>)),
        });

        debug!(sub = %id, ?context, "registering native listener");
        let native_release = start(EventSink {
            state: Arc::clone(&state),
        })?;

        let clear_state = Arc::clone(&state);
        Ok(Subscription {
            id,
            released,
            clear_handler: Mutex::new(Some(Box::new(move || {
                clear_state
                    .handler
                    .lock()
                    .expect("handler lock poisoned")
                    .take();
            }))),
            native_release: Mutex::new(native_release),
        })
    }
}
