// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform sign-in adapter.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome};
use spielwerk_core::BridgeConfig;
use spielwerk_core::types::{AuthScope, CredentialInfo};

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct SignInAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
    config: BridgeConfig,
}

impl SignInAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>, config: BridgeConfig) -> Self {
        Self {
            bridge,
            native,
            config,
        }
    }

    /// Run the sign-in flow with the configured default scopes.
    pub fn sign_in(
        &self,
        on_complete: impl FnOnce(Outcome<CredentialInfo>) + Send + 'static,
    ) -> OperationHandle {
        self.request_credential(self.config.default_signin_scopes.clone(), on_complete)
    }

    /// Run the sign-in flow for specific scopes. Scopes only shape what
    /// the credential carries; an empty list is a valid request for the
    /// bare user identifier.
    ///
    /// The handle's `cancel()` dismisses the flow where the OS allows it.
    pub fn request_credential(
        &self,
        scopes: Vec<AuthScope>,
        on_complete: impl FnOnce(Outcome<CredentialInfo>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.request_credential(scopes, resolver),
            on_complete,
        )
    }
}
