// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait contracts for the native game services.
//
// These are the collaborator boundary: a real backend wraps the OS
// framework (GameKit, StoreKit, the sign-in controller, the document
// picker) and resolves each call through the `Resolver`/`EventSink` it is
// handed. Desktop and CI builds get the stub implementation, which fails
// every start with `PlatformUnavailable`.
//
// One-shot operations take a `Resolver<T>` and may return a `CancelFn`
// when the framework supports abandonment. Listener registrations take an
// `EventSink<E>` and may return a `ReleaseFn` that unhooks the native
// listener.

use spielwerk_bridge::{CancelFn, EventSink, ReleaseFn, Resolver};
use spielwerk_core::error::Result;
use spielwerk_core::types::*;

/// Unified contract grouping every native capability the binding wraps.
pub trait NativeServices:
    NativePlayer
    + NativeSavedGames
    + NativeAchievements
    + NativeLeaderboards
    + NativeStore
    + NativeSignIn
    + NativeDocumentPicker
{
    /// Human-readable platform name (e.g. "iOS 19", "macOS 16").
    fn platform_name(&self) -> &str;
}

/// Local player account: authentication, friends, identity proof.
pub trait NativePlayer: Send + Sync {
    /// Synchronous projection of the local player's account state.
    fn status(&self) -> LocalPlayerStatus;

    /// Begin platform authentication. The native handler may present UI
    /// and is known to fire more than once for a single request; the
    /// bridge suppresses the repeats.
    fn start_authentication(&self, resolver: Resolver<PlayerInfo>) -> Result<Option<CancelFn>>;

    /// Load one of the player's friend lists.
    fn load_friends(
        &self,
        query: FriendsQuery,
        resolver: Resolver<Vec<PlayerInfo>>,
    ) -> Result<Option<CancelFn>>;

    /// Fetch the signature material for third-party server verification.
    fn fetch_identity_signature(
        &self,
        resolver: Resolver<IdentitySignature>,
    ) -> Result<Option<CancelFn>>;
}

/// Cloud saved-game files.
pub trait NativeSavedGames: Send + Sync {
    fn save_game(
        &self,
        name: &str,
        data: Vec<u8>,
        resolver: Resolver<SavedGameInfo>,
    ) -> Result<Option<CancelFn>>;

    fn fetch_saved_games(
        &self,
        resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>>;

    fn load_game_data(&self, name: &str, resolver: Resolver<Vec<u8>>) -> Result<Option<CancelFn>>;

    fn delete_saved_games(&self, name: &str, resolver: Resolver<()>) -> Result<Option<CancelFn>>;

    /// Overwrite every conflicting version with `data`; resolves with the
    /// surviving saves.
    fn resolve_conflicts(
        &self,
        names: Vec<String>,
        data: Vec<u8>,
        resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>>;

    /// Install the saved-game listener: conflict and modification events
    /// for the lifetime of the registration.
    fn watch_saved_games(&self, sink: EventSink<SavedGameEvent>) -> Result<Option<ReleaseFn>>;
}

/// Achievement progress and metadata.
pub trait NativeAchievements: Send + Sync {
    fn report_progress(
        &self,
        batch: Vec<AchievementProgress>,
        resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>>;

    fn reset_achievements(&self, resolver: Resolver<()>) -> Result<Option<CancelFn>>;

    fn load_progress(
        &self,
        resolver: Resolver<Vec<AchievementProgress>>,
    ) -> Result<Option<CancelFn>>;

    fn load_descriptions(
        &self,
        resolver: Resolver<Vec<AchievementInfo>>,
    ) -> Result<Option<CancelFn>>;
}

/// Leaderboard metadata, submission, and entry queries.
pub trait NativeLeaderboards: Send + Sync {
    /// Load boards by identifier; an empty list loads every board.
    fn load_leaderboards(
        &self,
        ids: Vec<String>,
        resolver: Resolver<Vec<LeaderboardInfo>>,
    ) -> Result<Option<CancelFn>>;

    fn submit_score(
        &self,
        board_id: &str,
        score: i64,
        context: u64,
        resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>>;

    fn load_entries(
        &self,
        board_id: &str,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        resolver: Resolver<EntrySet>,
    ) -> Result<Option<CancelFn>>;
}

/// Storefront products, purchases, and transaction streams.
pub trait NativeStore: Send + Sync {
    fn load_products(
        &self,
        ids: Vec<String>,
        resolver: Resolver<Vec<ProductInfo>>,
    ) -> Result<Option<CancelFn>>;

    /// Run the purchase flow. User cancellation and verification failures
    /// resolve as native errors; the success value distinguishes a
    /// completed transaction from one pending external approval.
    fn purchase(
        &self,
        product_id: &str,
        quantity: u32,
        resolver: Resolver<PurchaseResult>,
    ) -> Result<Option<CancelFn>>;

    fn restore_purchases(&self, resolver: Resolver<()>) -> Result<Option<CancelFn>>;

    /// Mark a delivered transaction as finished so the store stops
    /// redelivering it. Synchronous; the store batches the acknowledgment.
    fn finish_transaction(&self, transaction_id: u64) -> Result<()>;

    /// Verified transactions arriving outside a purchase call (renewals,
    /// family sharing, deferred approvals).
    fn watch_transactions(&self, sink: EventSink<TransactionInfo>) -> Result<Option<ReleaseFn>>;

    /// Store-initiated purchase intents (e.g. App Store promoted products).
    fn watch_purchase_intents(&self, sink: EventSink<ProductInfo>) -> Result<Option<ReleaseFn>>;
}

/// Platform sign-in.
pub trait NativeSignIn: Send + Sync {
    /// Run the platform sign-in flow for the given scopes. The returned
    /// cancel hook dismisses the flow where the OS allows it.
    fn request_credential(
        &self,
        scopes: Vec<AuthScope>,
        resolver: Resolver<CredentialInfo>,
    ) -> Result<Option<CancelFn>>;
}

/// Native document picker.
pub trait NativeDocumentPicker: Send + Sync {
    /// Present the picker filtered to `types` (extensions or UTI strings).
    /// User cancellation resolves as a native error in the picker domain.
    fn pick_documents(
        &self,
        types: Vec<String>,
        allow_multiple: bool,
        resolver: Resolver<Vec<PickedDocument>>,
    ) -> Result<Option<CancelFn>>;
}
