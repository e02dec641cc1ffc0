// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spielwerk — Native game-service contracts and per-entity adapters.
//
// The engine integration constructs one [`Services`] value from a bridge
// handle and a native backend, then exposes the adapters to the scripting
// layer. Real backends (GameKit/StoreKit on Apple platforms, Play Services
// on Android) live out of tree and are installed at startup through
// [`install_native_services`]; everything else gets the stub.

pub mod achievements;
pub mod leaderboards;
pub mod picker;
pub mod player;
pub mod saved_games;
pub mod signin;
pub mod store;
pub mod stub;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::{Arc, OnceLock};

use spielwerk_bridge::Bridge;
use spielwerk_core::BridgeConfig;
use tracing::info;

use crate::achievements::AchievementsAdapter;
use crate::leaderboards::LeaderboardsAdapter;
use crate::picker::DocumentPickerAdapter;
use crate::player::PlayerAdapter;
use crate::saved_games::SavedGamesAdapter;
use crate::signin::SignInAdapter;
use crate::store::StoreAdapter;
use crate::stub::StubServices;
use crate::traits::NativeServices;

static NATIVE_SERVICES: OnceLock<Arc<dyn NativeServices>> = OnceLock::new();

/// Install the process-wide native backend. Call once at startup, before
/// any adapter is built from the default accessor. Returns false if a
/// backend (or the stub fallback) was already installed.
pub fn install_native_services(services: Arc<dyn NativeServices>) -> bool {
    let name = services.platform_name().to_owned();
    let installed = NATIVE_SERVICES.set(services).is_ok();
    if installed {
        info!(platform = %name, "native services installed");
    }
    installed
}

/// The process-wide native backend. There is exactly one for the process
/// lifetime; if none was installed, the stub takes the slot.
pub fn native_services() -> Arc<dyn NativeServices> {
    NATIVE_SERVICES
        .get_or_init(|| Arc::new(StubServices) as Arc<dyn NativeServices>)
        .clone()
}

/// All service adapters, built over one bridge and one native backend.
pub struct Services {
    pub player: PlayerAdapter,
    pub saved_games: SavedGamesAdapter,
    pub achievements: AchievementsAdapter,
    pub leaderboards: LeaderboardsAdapter,
    pub store: StoreAdapter,
    pub sign_in: SignInAdapter,
    pub document_picker: DocumentPickerAdapter,
}

impl Services {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>, config: BridgeConfig) -> Self {
        Self {
            player: PlayerAdapter::new(bridge.clone(), Arc::clone(&native)),
            saved_games: SavedGamesAdapter::new(bridge.clone(), Arc::clone(&native)),
            achievements: AchievementsAdapter::new(bridge.clone(), Arc::clone(&native)),
            leaderboards: LeaderboardsAdapter::new(bridge.clone(), Arc::clone(&native)),
            store: StoreAdapter::new(bridge.clone(), Arc::clone(&native), config.clone()),
            sign_in: SignInAdapter::new(bridge.clone(), Arc::clone(&native), config.clone()),
            document_picker: DocumentPickerAdapter::new(bridge, native, config),
        }
    }

    /// Build over the process-wide backend with default configuration.
    pub fn with_platform_default(bridge: Bridge) -> Self {
        Self::new(bridge, native_services(), BridgeConfig::default())
    }
}
