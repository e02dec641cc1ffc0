// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spielwerk — Async bridge for native platform operations.
//
// Every wrapped native call in this workspace goes through one of two
// shapes defined here:
//
//   - `Bridge::invoke`   — one-shot: issue a native async operation, get
//     exactly one normalized `Outcome` delivered to a completion on a
//     chosen execution context, no matter how the native layer misbehaves.
//   - `Bridge::register` — repeating: subscribe to a native event stream,
//     receive events in arrival order until the subscription is released.
//
// The bridge owns outcome normalization and context marshaling so the
// service adapters never special-case callback plumbing per entity.

pub mod context;
pub mod invoke;
pub mod outcome;
pub mod subscription;
pub mod timeout;

pub use context::{ExecutionContext, MainDispatcher, MainQueue, main_queue};
pub use invoke::{Bridge, CancelFn, OperationHandle, Resolver};
pub use outcome::Outcome;
pub use subscription::{EventSink, ReleaseFn, Subscription};
pub use timeout::invoke_with_timeout;
