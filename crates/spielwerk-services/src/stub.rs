// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub backend for desktop/CI builds where the native game-service
// frameworks are unavailable.
//
// Every start fails with `PlatformUnavailable`, which the bridge converts
// into a `Failure(NotSupported)` delivered through the normal completion
// path — callers observe an outcome, never a hang.

use spielwerk_bridge::{CancelFn, EventSink, ReleaseFn, Resolver};
use spielwerk_core::error::{Result, SpielwerkError};
use spielwerk_core::types::*;

use crate::traits::*;

/// No-op backend returned when no real platform services are installed.
pub struct StubServices;

impl NativeServices for StubServices {
    fn platform_name(&self) -> &str {
        "desktop (stub)"
    }
}

impl NativePlayer for StubServices {
    fn status(&self) -> LocalPlayerStatus {
        LocalPlayerStatus::default()
    }

    fn start_authentication(&self, _resolver: Resolver<PlayerInfo>) -> Result<Option<CancelFn>> {
        tracing::warn!("NativePlayer::start_authentication called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn load_friends(
        &self,
        _query: FriendsQuery,
        _resolver: Resolver<Vec<PlayerInfo>>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativePlayer::load_friends called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn fetch_identity_signature(
        &self,
        _resolver: Resolver<IdentitySignature>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeSavedGames for StubServices {
    fn save_game(
        &self,
        _name: &str,
        _data: Vec<u8>,
        _resolver: Resolver<SavedGameInfo>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeSavedGames::save_game called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn fetch_saved_games(
        &self,
        _resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn load_game_data(&self, _name: &str, _resolver: Resolver<Vec<u8>>) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn delete_saved_games(&self, _name: &str, _resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn resolve_conflicts(
        &self,
        _names: Vec<String>,
        _data: Vec<u8>,
        _resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn watch_saved_games(&self, _sink: EventSink<SavedGameEvent>) -> Result<Option<ReleaseFn>> {
        tracing::warn!("NativeSavedGames::watch_saved_games called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeAchievements for StubServices {
    fn report_progress(
        &self,
        _batch: Vec<AchievementProgress>,
        _resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeAchievements::report_progress called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn reset_achievements(&self, _resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn load_progress(
        &self,
        _resolver: Resolver<Vec<AchievementProgress>>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn load_descriptions(
        &self,
        _resolver: Resolver<Vec<AchievementInfo>>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeLeaderboards for StubServices {
    fn load_leaderboards(
        &self,
        _ids: Vec<String>,
        _resolver: Resolver<Vec<LeaderboardInfo>>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn submit_score(
        &self,
        _board_id: &str,
        _score: i64,
        _context: u64,
        _resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeLeaderboards::submit_score called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn load_entries(
        &self,
        _board_id: &str,
        _player_scope: PlayerScope,
        _time_scope: TimeScope,
        _resolver: Resolver<EntrySet>,
    ) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeStore for StubServices {
    fn load_products(
        &self,
        _ids: Vec<String>,
        _resolver: Resolver<Vec<ProductInfo>>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeStore::load_products called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn purchase(
        &self,
        _product_id: &str,
        _quantity: u32,
        _resolver: Resolver<PurchaseResult>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeStore::purchase called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn restore_purchases(&self, _resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn finish_transaction(&self, _transaction_id: u64) -> Result<()> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn watch_transactions(&self, _sink: EventSink<TransactionInfo>) -> Result<Option<ReleaseFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }

    fn watch_purchase_intents(&self, _sink: EventSink<ProductInfo>) -> Result<Option<ReleaseFn>> {
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeSignIn for StubServices {
    fn request_credential(
        &self,
        _scopes: Vec<AuthScope>,
        _resolver: Resolver<CredentialInfo>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeSignIn::request_credential called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }
}

impl NativeDocumentPicker for StubServices {
    fn pick_documents(
        &self,
        _types: Vec<String>,
        _allow_multiple: bool,
        _resolver: Resolver<Vec<PickedDocument>>,
    ) -> Result<Option<CancelFn>> {
        tracing::warn!("NativeDocumentPicker::pick_documents called on stub services");
        Err(SpielwerkError::PlatformUnavailable)
    }
}
