// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Error taxonomy mapper: native (domain, code) pairs to `ErrorKind`.
//
// The mapping is a static, declared association — the same code always
// yields the same kind, and the tables are never inferred from message
// text. Codes the tables do not recognize classify as `Unknown`; that is
// the forward-compatibility contract, since the OS frameworks add codes
// faster than this crate revs.

use crate::error::{ErrorKind, NativeError, NormalizedError};

/// GameKit error namespace.
pub const GAME_KIT_DOMAIN: &str = "GKErrorDomain";
/// StoreKit error namespace.
pub const STORE_KIT_DOMAIN: &str = "SKErrorDomain";
/// Sign-in controller error namespace.
pub const AUTHORIZATION_DOMAIN: &str = "ASAuthorizationErrorDomain";
/// Web authentication session error namespace.
pub const WEB_AUTH_SESSION_DOMAIN: &str = "ASWebAuthenticationSessionErrorDomain";
/// Document picker error namespace (local to the binding layer).
pub const DOCUMENT_PICKER_DOMAIN: &str = "SpielwerkDocumentPickerErrorDomain";

/// GameKit error codes the binding recognizes.
pub mod game_kit {
    pub const UNKNOWN: i64 = 1;
    pub const CANCELLED: i64 = 2;
    pub const COMMUNICATIONS_FAILURE: i64 = 3;
    pub const USER_DENIED: i64 = 4;
    pub const INVALID_CREDENTIALS: i64 = 5;
    pub const NOT_AUTHENTICATED: i64 = 6;
    pub const AUTHENTICATION_IN_PROGRESS: i64 = 7;
    pub const INVALID_PLAYER: i64 = 8;
    pub const SCORE_NOT_SET: i64 = 9;
    pub const PARENTAL_CONTROLS_BLOCKED: i64 = 10;
    pub const PLAYER_PHOTO_FAILURE: i64 = 11;
    pub const CHALLENGE_INVALID: i64 = 12;
    pub const TURN_BASED_MATCH_DATA_TOO_LARGE: i64 = 13;
    pub const TURN_BASED_TOO_MANY_SESSIONS: i64 = 14;
    pub const TURN_BASED_INVALID_PARTICIPANT: i64 = 15;
    pub const TURN_BASED_INVALID_TURN: i64 = 16;
    pub const TURN_BASED_INVALID_STATE: i64 = 17;
    pub const INVITATIONS_DISABLED: i64 = 18;
    pub const PLAYER_STATUS_EXCEEDS_MAXIMUM_LENGTH: i64 = 19;
    pub const PLAYER_STATUS_INVALID: i64 = 20;
    pub const MATCH_REQUEST_INVALID: i64 = 21;
    pub const UNDERAGE: i64 = 22;
    pub const GAME_UNRECOGNIZED: i64 = 23;
    pub const NOT_SUPPORTED: i64 = 24;
    pub const INVALID_PARAMETER: i64 = 25;
    pub const UNEXPECTED_CONNECTION: i64 = 26;
    pub const API_NOT_AVAILABLE: i64 = 27;
    pub const NOT_AUTHORIZED: i64 = 28;
    pub const CONNECTION_TIMEOUT: i64 = 29;
    pub const API_OBSOLETE: i64 = 30;
    pub const RESTRICTED_TO_AUTOMATCH: i64 = 31;
    pub const APP_UNLISTED: i64 = 32;
    pub const LOCKDOWN_MODE: i64 = 33;
    pub const FRIEND_LIST_DESCRIPTION_MISSING: i64 = 100;
    pub const FRIEND_LIST_RESTRICTED: i64 = 101;
    pub const FRIEND_LIST_DENIED: i64 = 102;
    pub const FRIEND_REQUEST_NOT_AVAILABLE: i64 = 103;
}

/// StoreKit error codes the binding recognizes.
pub mod store_kit {
    pub const UNKNOWN: i64 = 0;
    pub const CLIENT_INVALID: i64 = 1;
    pub const PAYMENT_CANCELLED: i64 = 2;
    pub const PAYMENT_INVALID: i64 = 3;
    pub const PAYMENT_NOT_ALLOWED: i64 = 4;
    pub const PRODUCT_NOT_AVAILABLE: i64 = 5;
    pub const CLOUD_SERVICE_PERMISSION_DENIED: i64 = 6;
    pub const CLOUD_SERVICE_NETWORK_CONNECTION_FAILED: i64 = 7;
    pub const CLOUD_SERVICE_REVOKED: i64 = 8;
    pub const PRIVACY_ACKNOWLEDGEMENT_REQUIRED: i64 = 9;
    pub const UNAUTHORIZED_REQUEST_DATA: i64 = 10;
    pub const INVALID_OFFER_IDENTIFIER: i64 = 11;
    pub const INVALID_SIGNATURE: i64 = 12;
    pub const MISSING_OFFER_PARAMS: i64 = 13;
    pub const INVALID_OFFER_PRICE: i64 = 14;
    pub const OVERLAY_CANCELLED: i64 = 15;
    pub const OVERLAY_INVALID_CONFIGURATION: i64 = 16;
    pub const OVERLAY_TIMEOUT: i64 = 17;
    pub const INELIGIBLE_FOR_OFFER: i64 = 18;
    pub const UNSUPPORTED_PLATFORM: i64 = 19;
}

/// Sign-in controller error codes.
pub mod authorization {
    pub const UNKNOWN: i64 = 1000;
    pub const CANCELED: i64 = 1001;
    pub const INVALID_RESPONSE: i64 = 1002;
    pub const NOT_HANDLED: i64 = 1003;
    pub const FAILED: i64 = 1004;
    pub const NOT_INTERACTIVE: i64 = 1005;
}

/// Web authentication session error codes.
pub mod web_auth_session {
    pub const CANCELED_LOGIN: i64 = 1;
    pub const PRESENTATION_CONTEXT_NOT_PROVIDED: i64 = 2;
    pub const PRESENTATION_CONTEXT_INVALID: i64 = 3;
}

/// Document picker codes raised by the binding layer.
pub mod document_picker {
    pub const CANCELLED: i64 = 1;
    pub const UNREADABLE_SELECTION: i64 = 2;
}

/// Normalize an optional native error. Returns `None` only for `None` input.
pub fn normalize(native: Option<&NativeError>) -> Option<NormalizedError> {
    native.map(normalize_error)
}

/// Normalize a native error: classify the code and guarantee a non-empty
/// message.
pub fn normalize_error(native: &NativeError) -> NormalizedError {
    let kind = classify(&native.domain, native.code);
    let message = if native.message.trim().is_empty() {
        format!("{} reported error code {}", native.domain, native.code)
    } else {
        native.message.clone()
    };
    NormalizedError::new(kind, message, native.domain.clone())
}

/// Classify a (domain, code) pair. Unrecognized domains and codes are
/// `Unknown`.
pub fn classify(domain: &str, code: i64) -> ErrorKind {
    match domain {
        GAME_KIT_DOMAIN => classify_game_kit(code),
        STORE_KIT_DOMAIN => classify_store_kit(code),
        AUTHORIZATION_DOMAIN => classify_authorization(code),
        WEB_AUTH_SESSION_DOMAIN => classify_web_auth_session(code),
        DOCUMENT_PICKER_DOMAIN => classify_document_picker(code),
        _ => ErrorKind::Unknown,
    }
}

fn classify_game_kit(code: i64) -> ErrorKind {
    use game_kit::*;
    match code {
        CANCELLED | USER_DENIED => ErrorKind::Cancelled,

        COMMUNICATIONS_FAILURE | CONNECTION_TIMEOUT | UNEXPECTED_CONNECTION => {
            ErrorKind::CommunicationsFailure
        }

        INVALID_CREDENTIALS | NOT_AUTHENTICATED => ErrorKind::NotAuthenticated,

        AUTHENTICATION_IN_PROGRESS => ErrorKind::AuthorizationInProgress,

        INVALID_PLAYER
        | SCORE_NOT_SET
        | MATCH_REQUEST_INVALID
        | INVALID_PARAMETER
        | PLAYER_STATUS_EXCEEDS_MAXIMUM_LENGTH
        | PLAYER_STATUS_INVALID
        | TURN_BASED_MATCH_DATA_TOO_LARGE
        | TURN_BASED_INVALID_PARTICIPANT
        | TURN_BASED_INVALID_TURN
        | TURN_BASED_INVALID_STATE
        | FRIEND_LIST_DESCRIPTION_MISSING => ErrorKind::InvalidParameter,

        NOT_SUPPORTED | API_NOT_AVAILABLE | API_OBSOLETE | GAME_UNRECOGNIZED | APP_UNLISTED
        | FRIEND_REQUEST_NOT_AVAILABLE => ErrorKind::NotSupported,

        PARENTAL_CONTROLS_BLOCKED
        | UNDERAGE
        | NOT_AUTHORIZED
        | INVITATIONS_DISABLED
        | RESTRICTED_TO_AUTOMATCH
        | TURN_BASED_TOO_MANY_SESSIONS
        | LOCKDOWN_MODE
        | FRIEND_LIST_RESTRICTED
        | FRIEND_LIST_DENIED => ErrorKind::RestrictedByPolicy,

        _ => ErrorKind::Unknown,
    }
}

fn classify_store_kit(code: i64) -> ErrorKind {
    use store_kit::*;
    match code {
        PAYMENT_CANCELLED | OVERLAY_CANCELLED => ErrorKind::Cancelled,

        CLIENT_INVALID
        | PAYMENT_INVALID
        | INVALID_OFFER_IDENTIFIER
        | MISSING_OFFER_PARAMS
        | INVALID_OFFER_PRICE
        | OVERLAY_INVALID_CONFIGURATION => ErrorKind::InvalidParameter,

        PAYMENT_NOT_ALLOWED
        | CLOUD_SERVICE_PERMISSION_DENIED
        | PRIVACY_ACKNOWLEDGEMENT_REQUIRED
        | INELIGIBLE_FOR_OFFER => ErrorKind::RestrictedByPolicy,

        CLOUD_SERVICE_NETWORK_CONNECTION_FAILED | OVERLAY_TIMEOUT => {
            ErrorKind::CommunicationsFailure
        }

        PRODUCT_NOT_AVAILABLE | UNSUPPORTED_PLATFORM => ErrorKind::NotSupported,

        CLOUD_SERVICE_REVOKED => ErrorKind::NotAuthenticated,

        INVALID_SIGNATURE | UNAUTHORIZED_REQUEST_DATA => ErrorKind::Unverified,

        _ => ErrorKind::Unknown,
    }
}

fn classify_authorization(code: i64) -> ErrorKind {
    use authorization::*;
    match code {
        CANCELED => ErrorKind::Cancelled,
        INVALID_RESPONSE => ErrorKind::InvalidParameter,
        NOT_HANDLED | NOT_INTERACTIVE => ErrorKind::NotSupported,
        _ => ErrorKind::Unknown,
    }
}

fn classify_web_auth_session(code: i64) -> ErrorKind {
    use web_auth_session::*;
    match code {
        CANCELED_LOGIN => ErrorKind::Cancelled,
        PRESENTATION_CONTEXT_NOT_PROVIDED | PRESENTATION_CONTEXT_INVALID => {
            ErrorKind::InvalidParameter
        }
        _ => ErrorKind::Unknown,
    }
}

fn classify_document_picker(code: i64) -> ErrorKind {
    use document_picker::*;
    match code {
        CANCELLED => ErrorKind::Cancelled,
        UNREADABLE_SELECTION => ErrorKind::InvalidParameter,
        _ => ErrorKind::Unknown,
    }
}
