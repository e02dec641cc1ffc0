// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async adapter and caller-side timeout.
//
// The bridge itself never imposes a deadline: a native operation may wait
// on user interaction indefinitely. A caller that wants one races the
// completion against a timer and cancels the loser — that wrapper lives
// here so every caller doesn't reinvent it.

use std::time::Duration;

use spielwerk_core::error::{ErrorKind, NormalizedError, Result};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::context::ExecutionContext;
use crate::invoke::{Bridge, CancelFn, OperationHandle, Resolver};
use crate::outcome::Outcome;

impl Bridge {
    /// Like [`Bridge::invoke`], but the outcome is awaited instead of
    /// delivered to a callback. The handle is returned alongside so the
    /// caller can still cancel.
    ///
    /// Use [`ExecutionContext::Background`] unless the awaiting task runs
    /// on the primary loop itself — a `Main`-context future only resolves
    /// once the primary queue is drained.
    pub fn invoke_future<T, S>(
        &self,
        context: ExecutionContext,
        start: S,
    ) -> (OperationHandle, impl Future<Output = Outcome<T>>)
    where
        T: Send + 'static,
        S: FnOnce(Resolver<T>) -> Result<Option<CancelFn>>,
    {
        let (tx, rx) = oneshot::channel();
        let handle = self.invoke(context, start, move |outcome| {
            // The receiver may be gone (caller gave up); the bridge's
            // exactly-once accounting already happened.
            if tx.send(outcome).is_err() {
                debug!("awaited outcome dropped; receiver gone");
            }
        });
        let id = handle.id();
        let fut = async move {
            rx.await.unwrap_or_else(|_| {
                Outcome::Failure(NormalizedError::local(
                    ErrorKind::Unknown,
                    format!("bridge dropped operation {id} before resolving"),
                ))
            })
        };
        (handle, fut)
    }
}

/// Race a bridged operation against a timer.
///
/// On expiry the pending operation is cancelled (best-effort) and the
/// caller gets `Failure(CommunicationsFailure)`. A completion that beats
/// the timer passes through untouched — including failures.
pub async fn invoke_with_timeout<T, S>(
    bridge: &Bridge,
    duration: Duration,
    context: ExecutionContext,
    start: S,
) -> Outcome<T>
where
    T: Send + 'static,
    S: FnOnce(Resolver<T>) -> Result<Option<CancelFn>>,
{
    let (handle, fut) = bridge.invoke_future(context, start);
    match tokio::time::timeout(duration, fut).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(op = %handle.id(), ?duration, "bridged operation timed out");
            handle.cancel();
            Outcome::Failure(NormalizedError::local(
                ErrorKind::CommunicationsFailure,
                format!("operation timed out after {duration:?}"),
            ))
        }
    }
}
