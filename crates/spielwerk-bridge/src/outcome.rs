// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The tagged result of one bridged operation.

use spielwerk_core::error::{ErrorKind, NativeError, NormalizedError};
use spielwerk_core::taxonomy;

/// Result of one bridged native operation: a value or a normalized error,
/// never both, never neither. Produced exactly once per issued request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(NormalizedError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, discarding a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure, discarding a success.
    pub fn failure(self) -> Option<NormalizedError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Map the success value, passing failures through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn into_result(self) -> Result<T, NormalizedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

/// Fold a native `(value?, error?)` resolution into an `Outcome`.
///
/// Native completion handlers hand back two nilable slots, and all four
/// combinations occur in the wild:
///
///   - value only   → `Success`
///   - error only   → `Failure`
///   - both         → `Failure`; the error wins over the value
///   - neither      → `Failure(Unknown)`; the native layer resolved
///     without saying anything, which callers must still observe
pub fn reconcile<T>(value: Option<T>, error: Option<NativeError>) -> Outcome<T> {
    match (value, error) {
        (_, Some(native)) => Outcome::Failure(taxonomy::normalize_error(&native)),
        (Some(value), None) => Outcome::Success(value),
        (None, None) => Outcome::Failure(NormalizedError::local(
            ErrorKind::Unknown,
            "native layer resolved with neither a value nor an error",
        )),
    }
}
