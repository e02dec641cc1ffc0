// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Local player adapter: authentication, friends, identity verification.
//
// The platform's authentication handler is the canonical misbehaving
// callback — it can fire again whenever the OS re-evaluates the account —
// so the adapter leans entirely on the bridge's first-delivery-wins
// guarantee rather than tracking any state of its own.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome};
use spielwerk_core::types::{FriendsQuery, IdentitySignature, LocalPlayerStatus, PlayerInfo};

use crate::traits::NativeServices;

/// Wraps the platform's single local-player handle.
#[derive(Clone)]
pub struct PlayerAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
}

impl PlayerAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>) -> Self {
        Self { bridge, native }
    }

    /// Current account state, read synchronously off the native handle.
    pub fn status(&self) -> LocalPlayerStatus {
        self.native.status()
    }

    /// Authenticate the local player. May present system UI; the outcome
    /// arrives on the main context. Repeat fires from the native handler
    /// are suppressed — the first resolution wins.
    pub fn authenticate(
        &self,
        on_complete: impl FnOnce(Outcome<PlayerInfo>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.start_authentication(resolver),
            on_complete,
        )
    }

    /// Load one of the player's friend lists.
    pub fn load_friends(
        &self,
        query: FriendsQuery,
        on_complete: impl FnOnce(Outcome<Vec<PlayerInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.load_friends(query, resolver),
            on_complete,
        )
    }

    /// Fetch signature material for verifying this player on a
    /// third-party server.
    pub fn fetch_identity_signature(
        &self,
        on_complete: impl FnOnce(Outcome<IdentitySignature>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.fetch_identity_signature(resolver),
            on_complete,
        )
    }
}
