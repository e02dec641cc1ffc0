// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Saved-games adapter: cloud save files plus the conflict listener.
//
// Saves are keyed by name; writing the same name from two devices creates
// a conflict the platform reports through the listener. Deletion reports
// the real native outcome — a delete that failed must not look like it
// succeeded, or the engine will drop its local copy.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome, Subscription};
use spielwerk_core::error::{Result, SpielwerkError};
use spielwerk_core::types::{SavedGameEvent, SavedGameInfo};

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct SavedGamesAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
}

impl SavedGamesAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>) -> Self {
        Self { bridge, native }
    }

    /// Write `data` under `name`, overwriting any previous save with that
    /// name from this device.
    pub fn save_game(
        &self,
        name: &str,
        data: Vec<u8>,
        on_complete: impl FnOnce(Outcome<SavedGameInfo>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let name = name.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if name.trim().is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "saved game name must not be empty".into(),
                    ));
                }
                native.save_game(&name, data, resolver)
            },
            on_complete,
        )
    }

    /// List every save visible to the local player.
    pub fn fetch_saved_games(
        &self,
        on_complete: impl FnOnce(Outcome<Vec<SavedGameInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.fetch_saved_games(resolver),
            on_complete,
        )
    }

    /// Read the payload of the named save.
    pub fn load_game_data(
        &self,
        name: &str,
        on_complete: impl FnOnce(Outcome<Vec<u8>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let name = name.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.load_game_data(&name, resolver),
            on_complete,
        )
    }

    /// Delete every save with the given name.
    pub fn delete_saved_games(
        &self,
        name: &str,
        on_complete: impl FnOnce(Outcome<()>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let name = name.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.delete_saved_games(&name, resolver),
            on_complete,
        )
    }

    /// Resolve a reported conflict by overwriting every conflicting
    /// version with `data`; resolves with the surviving saves.
    pub fn resolve_conflicts(
        &self,
        names: Vec<String>,
        data: Vec<u8>,
        on_complete: impl FnOnce(Outcome<Vec<SavedGameInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if names.is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "conflict list must not be empty".into(),
                    ));
                }
                native.resolve_conflicts(names, data, resolver)
            },
            on_complete,
        )
    }

    /// Subscribe to conflict and modification events. Events arrive on
    /// the main context, in the order the platform reports them, until
    /// the subscription is released.
    pub fn watch(
        &self,
        on_event: impl Fn(SavedGameEvent) + Send + Sync + 'static,
    ) -> Result<Subscription> {
        let native = Arc::clone(&self.native);
        self.bridge.register(
            ExecutionContext::Main,
            move |sink| native.watch_saved_games(sink),
            on_event,
        )
    }
}
