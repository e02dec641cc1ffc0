// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::types::AuthScope;

/// Settings governing how the service adapters drive the native layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Finish verified transactions immediately after delivery. When false,
    /// the engine must finish them explicitly once content is granted.
    pub auto_finish_transactions: bool,
    /// Scopes requested by the convenience sign-in entry point.
    pub default_signin_scopes: Vec<AuthScope>,
    /// Type filter (file extensions or UTI strings) used when the picker is
    /// opened without an explicit filter.
    pub default_picker_types: Vec<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            auto_finish_transactions: true,
            default_signin_scopes: vec![AuthScope::FullName, AuthScope::Email],
            default_picker_types: vec!["public.content".into()],
        }
    }
}
