// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Spielwerk.
//
// Native platform frameworks report failures as (domain, code, message)
// triples. `NativeError` carries that raw triple across the bridge boundary;
// `NormalizedError` is the engine-facing form after the taxonomy mapper has
// classified the code. `SpielwerkError` is the unified crate error used by
// synchronous call paths.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain tag for errors Spielwerk raises itself, as opposed to errors
/// reported by a native framework.
pub const LOCAL_DOMAIN: &str = "spielwerk";

/// Engine-agnostic classification of a failed native operation.
///
/// The set only ever grows. Match with a wildcard arm and treat anything
/// unrecognized like [`ErrorKind::Unknown`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The user or the system cancelled the operation.
    Cancelled,
    /// No authenticated player/account, or credentials were rejected.
    NotAuthenticated,
    /// An authentication flow is already running.
    AuthorizationInProgress,
    /// The request was malformed before or after reaching the native layer.
    InvalidParameter,
    /// Network or service communication failed, including timeouts.
    CommunicationsFailure,
    /// The operation is not available on this platform or OS version.
    NotSupported,
    /// Blocked by parental controls, device policy, or entitlement rules.
    RestrictedByPolicy,
    /// The native layer returned data that failed verification.
    Unverified,
    /// Anything the mapping tables do not recognize.
    Unknown,
}

impl ErrorKind {
    /// Stable lowercase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::NotAuthenticated => "not-authenticated",
            Self::AuthorizationInProgress => "authorization-in-progress",
            Self::InvalidParameter => "invalid-parameter",
            Self::CommunicationsFailure => "communications-failure",
            Self::NotSupported => "not-supported",
            Self::RestrictedByPolicy => "restricted-by-policy",
            Self::Unverified => "unverified",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw failure as reported by a native callback, before classification.
///
/// `domain` is the native framework's error namespace (e.g. `GKErrorDomain`),
/// `code` the numeric code within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeError {
    pub domain: String,
    pub code: i64,
    pub message: String,
}

impl NativeError {
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for NativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} code {}: {}", self.domain, self.code, self.message)
    }
}

/// Engine-facing error: a stable classification plus diagnostics.
///
/// `kind` is what callers branch on. `message` is human-readable only.
/// `domain` preserves the originating native namespace for diagnostics and
/// must not drive program logic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {domain}: {message}")]
pub struct NormalizedError {
    pub kind: ErrorKind,
    pub message: String,
    pub domain: String,
}

impl NormalizedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            domain: domain.into(),
        }
    }

    /// An error raised by Spielwerk itself rather than a native framework.
    pub fn local(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, LOCAL_DOMAIN)
    }
}

/// Top-level error type for all Spielwerk operations.
#[derive(Debug, Error)]
pub enum SpielwerkError {
    /// A native operation resolved with a failure.
    #[error("native operation failed: {0}")]
    Native(#[from] NormalizedError),

    /// The request was rejected before any native work started.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The native subsystem does not exist on this platform.
    #[error("feature not available on this platform")]
    PlatformUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SpielwerkError>;

impl SpielwerkError {
    /// Collapse a synchronous start failure into the normalized form, so a
    /// call that fails before any async work began is delivered through the
    /// same completion path as one that failed after.
    pub fn into_normalized(self) -> NormalizedError {
        match self {
            Self::Native(err) => err,
            Self::InvalidRequest(msg) => NormalizedError::local(ErrorKind::InvalidParameter, msg),
            Self::PlatformUnavailable => NormalizedError::local(
                ErrorKind::NotSupported,
                "feature not available on this platform",
            ),
            Self::Serialization(err) => NormalizedError::local(
                ErrorKind::InvalidParameter,
                format!("serialization error: {err}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_normalizes_to_invalid_parameter() {
        let err = SpielwerkError::InvalidRequest("empty product id list".into());
        let normalized = err.into_normalized();
        assert_eq!(normalized.kind, ErrorKind::InvalidParameter);
        assert_eq!(normalized.domain, LOCAL_DOMAIN);
        assert!(!normalized.message.is_empty());
    }

    #[test]
    fn platform_unavailable_normalizes_to_not_supported() {
        let normalized = SpielwerkError::PlatformUnavailable.into_normalized();
        assert_eq!(normalized.kind, ErrorKind::NotSupported);
    }

    #[test]
    fn native_passthrough_preserves_original() {
        let original = NormalizedError::new(ErrorKind::Cancelled, "user backed out", "GKErrorDomain");
        let roundtrip = SpielwerkError::Native(original.clone()).into_normalized();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn normalized_error_display_includes_kind_and_domain() {
        let err = NormalizedError::new(ErrorKind::Unverified, "bad signature", "SKErrorDomain");
        let rendered = err.to_string();
        assert!(rendered.contains("unverified"));
        assert!(rendered.contains("SKErrorDomain"));
    }
}
