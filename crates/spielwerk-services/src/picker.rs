// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document picker adapter.
//
// Cancellation is an outcome here, not a separate signal: dismissing the
// picker resolves with `Failure(Cancelled)` in the picker domain, so the
// engine handles "user changed their mind" with the same code path as
// every other failure.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome};
use spielwerk_core::BridgeConfig;
use spielwerk_core::error::{ErrorKind, NormalizedError};
use spielwerk_core::taxonomy;
use spielwerk_core::types::PickedDocument;

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct DocumentPickerAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
    config: BridgeConfig,
}

impl DocumentPickerAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>, config: BridgeConfig) -> Self {
        Self {
            bridge,
            native,
            config,
        }
    }

    /// Present the picker. `types` holds file extensions or UTI strings;
    /// an empty list falls back to the configured defaults.
    pub fn pick_documents(
        &self,
        types: Vec<String>,
        allow_multiple: bool,
        on_complete: impl FnOnce(Outcome<Vec<PickedDocument>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let types = if types.is_empty() {
            self.config.default_picker_types.clone()
        } else {
            types
        };
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.pick_documents(types, allow_multiple, resolver),
            on_complete,
        )
    }

    /// Single-selection convenience over [`pick_documents`]. An empty
    /// selection counts as cancellation, matching the platform pickers.
    pub fn pick_document(
        &self,
        on_complete: impl FnOnce(Outcome<PickedDocument>) + Send + 'static,
    ) -> OperationHandle {
        self.pick_documents(Vec::new(), false, move |outcome| {
            let single = match outcome {
                Outcome::Success(mut docs) if !docs.is_empty() => Outcome::Success(docs.remove(0)),
                Outcome::Success(_) => Outcome::Failure(NormalizedError::new(
                    ErrorKind::Cancelled,
                    "picker resolved with no documents",
                    taxonomy::DOCUMENT_PICKER_DOMAIN,
                )),
                Outcome::Failure(err) => Outcome::Failure(err),
            };
            on_complete(single);
        })
    }
}
