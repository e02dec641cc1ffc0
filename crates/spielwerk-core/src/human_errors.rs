// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Player-facing error messages.
//
// Engine UIs should never show a raw native diagnostic to a player. Every
// `ErrorKind` maps to plain language plus a suggestion the player can act
// on, and a flag saying whether retrying is worthwhile.

use crate::error::{ErrorKind, NormalizedError};

/// Severity of a failure from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth retrying automatically or after a moment.
    Transient,
    /// The player (or their guardian) must do something first.
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A plain-language rendering of a failure.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Short summary, suitable for a dialog heading.
    pub message: String,
    /// What the player should try, suitable for dialog body text.
    pub suggestion: String,
    /// Whether the game should offer (or perform) a retry.
    pub retriable: bool,
    pub severity: Severity,
}

/// Render a normalized error for display to a player.
pub fn humanize_error(err: &NormalizedError) -> HumanError {
    match err.kind {
        ErrorKind::Cancelled => HumanError {
            message: "The request was cancelled.".into(),
            suggestion: "You can try again whenever you like.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        ErrorKind::NotAuthenticated => HumanError {
            message: "You're not signed in.".into(),
            suggestion: "Sign in to your game account in Settings, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },
        ErrorKind::AuthorizationInProgress => HumanError {
            message: "Sign-in is already in progress.".into(),
            suggestion: "Finish the sign-in screen that's already open.".into(),
            retriable: false,
            severity: Severity::Transient,
        },
        ErrorKind::InvalidParameter => HumanError {
            message: "Something went wrong with this request.".into(),
            suggestion: "If this keeps happening, please report it to the game's developer."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },
        ErrorKind::CommunicationsFailure => HumanError {
            message: "We couldn't reach the game service.".into(),
            suggestion: "Check your internet connection and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        ErrorKind::NotSupported => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "It may require a newer system version.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
        ErrorKind::RestrictedByPolicy => HumanError {
            message: "This feature is restricted on your account.".into(),
            suggestion: "Screen-time or parental-control settings may be blocking it.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        ErrorKind::Unverified => HumanError {
            message: "We couldn't verify your purchase.".into(),
            suggestion: "You have not been charged. Please try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        // Unknown plus any kind added after this crate was built.
        _ => HumanError {
            message: "Something unexpected went wrong.".into(),
            suggestion: "Please try again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_produces_text() {
        let kinds = [
            ErrorKind::Cancelled,
            ErrorKind::NotAuthenticated,
            ErrorKind::AuthorizationInProgress,
            ErrorKind::InvalidParameter,
            ErrorKind::CommunicationsFailure,
            ErrorKind::NotSupported,
            ErrorKind::RestrictedByPolicy,
            ErrorKind::Unverified,
            ErrorKind::Unknown,
        ];
        for kind in kinds {
            let human = humanize_error(&NormalizedError::local(kind, "detail"));
            assert!(!human.message.is_empty());
            assert!(!human.suggestion.is_empty());
        }
    }

    #[test]
    fn network_failures_are_retriable() {
        let human = humanize_error(&NormalizedError::local(
            ErrorKind::CommunicationsFailure,
            "timed out",
        ));
        assert!(human.retriable);
        assert_eq!(human.severity, Severity::Transient);
    }

    #[test]
    fn policy_restrictions_need_player_action() {
        let human = humanize_error(&NormalizedError::local(
            ErrorKind::RestrictedByPolicy,
            "underage",
        ));
        assert!(!human.retriable);
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
