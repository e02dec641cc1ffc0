// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Spielwerk services bridge.
//
// These are the value objects the bridge carries between the native layer
// and the engine's scripting layer: fixed field lists, no behavior beyond
// projection helpers. Each native entity gets a plain struct, never a
// wrapper hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one issued bridge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationId(pub Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// A player known to the game service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Scoped identifier, stable for this game.
    pub game_player_id: String,
    /// Scoped identifier, stable across the developer's games.
    pub team_player_id: String,
    pub display_name: String,
    pub alias: String,
    pub is_invitable: bool,
}

/// Snapshot of the local player's account state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalPlayerStatus {
    pub is_authenticated: bool,
    pub is_underage: bool,
    pub is_multiplayer_restricted: bool,
    pub is_communication_restricted: bool,
}

/// Which friend list a friends query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FriendsQuery {
    /// Full friend list (requires the friends entitlement).
    All,
    /// Friends that can receive challenges.
    Challengeable,
    /// Recently played-with players.
    Recent,
}

/// Material for server-side verification of the local player's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySignature {
    /// URL of the public key used to verify `signature`.
    pub public_key_url: String,
    pub signature: Vec<u8>,
    pub salt: Vec<u8>,
    /// Signature creation time, milliseconds since the epoch.
    pub timestamp: u64,
}

// ---------------------------------------------------------------------------
// Saved games
// ---------------------------------------------------------------------------

/// Metadata for one cloud-saved game file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGameInfo {
    pub name: String,
    /// Device that wrote this save.
    pub device_name: String,
    pub modified_at: DateTime<Utc>,
}

/// Events the saved-games listener can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedGameEvent {
    /// Two or more devices wrote the same save; the engine must resolve.
    Conflicting {
        player: PlayerInfo,
        saved_games: Vec<SavedGameInfo>,
    },
    /// A save was modified, possibly on another device.
    Modified {
        player: PlayerInfo,
        saved_game: SavedGameInfo,
    },
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Progress toward one achievement, reportable and loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub identifier: String,
    /// 0.0 ..= 100.0; the native layer clamps.
    pub percent_complete: f64,
    pub shows_completion_banner: bool,
    pub last_reported: Option<DateTime<Utc>>,
}

impl AchievementProgress {
    pub fn is_completed(&self) -> bool {
        self.percent_complete >= 100.0
    }
}

/// Static description of an achievement as configured in the store console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementInfo {
    pub identifier: String,
    pub title: String,
    pub unachieved_description: String,
    pub achieved_description: String,
    pub maximum_points: i32,
    pub is_hidden: bool,
    pub is_replayable: bool,
    pub group_identifier: Option<String>,
    /// Percentage of players who earned it, when the service reports one.
    pub rarity_percent: Option<f64>,
}

// ---------------------------------------------------------------------------
// Leaderboards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaderboardKind {
    Classic,
    /// Resets on a schedule configured in the store console.
    Recurring,
}

/// Time window for entry queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeScope {
    Today,
    Week,
    AllTime,
}

/// Whose entries to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerScope {
    Global,
    FriendsOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardInfo {
    pub identifier: String,
    pub title: String,
    pub kind: LeaderboardKind,
    pub group_identifier: Option<String>,
    /// Length of a recurring period in seconds; zero for classic boards.
    pub duration_secs: f64,
}

/// One score row. `rank` is the native rank, `context` the opaque value the
/// game attached at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub rank: u32,
    pub score: i64,
    pub context: u64,
    pub formatted_score: String,
    pub player: PlayerInfo,
    pub date: DateTime<Utc>,
}

/// Result of an entries query: the local player's row (if any) plus the
/// requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySet {
    pub local_entry: Option<ScoreEntry>,
    pub entries: Vec<ScoreEntry>,
    /// Total number of entries in the queried scope.
    pub total_count: u32,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// A purchasable product as configured in the store console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_id: String,
    pub display_name: String,
    pub description: String,
    /// Decimal price in the storefront currency.
    pub price: f64,
    /// Localized price string, already formatted by the store.
    pub display_price: String,
    pub currency_code: String,
}

/// A completed, verified transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub transaction_id: u64,
    /// Identifier of the first transaction in a resubscription chain.
    pub original_transaction_id: u64,
    pub product_id: String,
    pub quantity: u32,
    pub purchase_date: DateTime<Utc>,
    /// Set when the store refunded or revoked the purchase.
    pub revocation_date: Option<DateTime<Utc>>,
}

/// Outcome of a purchase request that did not fail outright.
///
/// User cancellation and verification failures are `Failure` outcomes with
/// kinds `Cancelled` and `Unverified`; they never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseResult {
    /// Verified and (if configured) finished.
    Completed(TransactionInfo),
    /// Awaiting external approval (e.g. family sharing approval). The
    /// terminal transaction arrives through the transaction-updates
    /// listener.
    Pending,
}

// ---------------------------------------------------------------------------
// Sign-in
// ---------------------------------------------------------------------------

/// Profile scopes a sign-in request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScope {
    Email,
    FullName,
}

/// Credential issued by a platform sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialInfo {
    PlatformId(PlatformIdCredential),
    Password(PasswordCredential),
}

/// Platform-account credential (Sign in with Apple shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformIdCredential {
    /// Stable, team-scoped user identifier.
    pub user_id: String,
    /// Only present on first authorization, per platform policy.
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// JWT proving the authorization, for server-side validation.
    pub identity_token: Option<Vec<u8>>,
    /// Short-lived code exchangeable for tokens server-side.
    pub authorization_code: Option<Vec<u8>>,
}

/// Stored username/password credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub user: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Document picker
// ---------------------------------------------------------------------------

/// One document chosen in the native picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedDocument {
    /// Absolute filesystem path. Access may be security-scoped; the engine
    /// must read it before the scope lapses.
    pub path: String,
    pub display_name: String,
}
