// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scriptable fake backend for adapter tests.
//
// Every start captures its resolver (or sink) instead of resolving, so a
// test drives the native side explicitly: resolve once, resolve twice,
// fire after release — whatever the scenario needs. Compiled for tests
// only.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use spielwerk_bridge::{Bridge, CancelFn, EventSink, MainQueue, ReleaseFn, Resolver, main_queue};
use spielwerk_core::error::Result;
use spielwerk_core::types::*;
use spielwerk_core::{BridgeConfig, NativeError};

use crate::Services;
use crate::traits::*;

/// Fake native backend: captures resolvers and sinks for the test to
/// drive, and counts cancel/release hook invocations.
#[derive(Default)]
pub struct FakeServices {
    pub auth_requests: Mutex<Vec<Resolver<PlayerInfo>>>,
    pub friend_requests: Mutex<Vec<(FriendsQuery, Resolver<Vec<PlayerInfo>>)>>,
    pub signature_requests: Mutex<Vec<Resolver<IdentitySignature>>>,

    pub save_requests: Mutex<Vec<(String, Vec<u8>, Resolver<SavedGameInfo>)>>,
    pub fetch_requests: Mutex<Vec<Resolver<Vec<SavedGameInfo>>>>,
    pub load_data_requests: Mutex<Vec<(String, Resolver<Vec<u8>>)>>,
    pub delete_requests: Mutex<Vec<(String, Resolver<()>)>>,
    pub conflict_requests: Mutex<Vec<(Vec<String>, Resolver<Vec<SavedGameInfo>>)>>,
    pub saved_game_sinks: Mutex<Vec<EventSink<SavedGameEvent>>>,

    pub report_requests: Mutex<Vec<(Vec<AchievementProgress>, Resolver<()>)>>,
    pub reset_requests: Mutex<Vec<Resolver<()>>>,
    pub progress_requests: Mutex<Vec<Resolver<Vec<AchievementProgress>>>>,
    pub description_requests: Mutex<Vec<Resolver<Vec<AchievementInfo>>>>,

    pub board_requests: Mutex<Vec<(Vec<String>, Resolver<Vec<LeaderboardInfo>>)>>,
    pub score_submissions: Mutex<Vec<(String, i64, u64, Resolver<()>)>>,
    pub entry_requests: Mutex<Vec<(String, PlayerScope, TimeScope, Resolver<EntrySet>)>>,

    pub product_requests: Mutex<Vec<(Vec<String>, Resolver<Vec<ProductInfo>>)>>,
    pub purchase_requests: Mutex<Vec<(String, u32, Resolver<PurchaseResult>)>>,
    pub restore_requests: Mutex<Vec<Resolver<()>>>,
    pub finished_transactions: Mutex<Vec<u64>>,
    pub transaction_sinks: Mutex<Vec<EventSink<TransactionInfo>>>,
    pub intent_sinks: Mutex<Vec<EventSink<ProductInfo>>>,

    pub credential_requests: Mutex<Vec<(Vec<AuthScope>, Resolver<CredentialInfo>)>>,
    pub picker_requests: Mutex<Vec<(Vec<String>, bool, Resolver<Vec<PickedDocument>>)>>,

    pub cancel_hook_calls: Arc<AtomicUsize>,
    pub release_hook_calls: Arc<AtomicUsize>,
}

impl FakeServices {
    fn cancel_hook(&self) -> Option<CancelFn> {
        let calls = Arc::clone(&self.cancel_hook_calls);
        Some(Box::new(move || {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }))
    }

    fn release_hook(&self) -> Option<ReleaseFn> {
        let calls = Arc::clone(&self.release_hook_calls);
        Some(Box::new(move || {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }))
    }
}

impl NativeServices for FakeServices {
    fn platform_name(&self) -> &str {
        "test double"
    }
}

impl NativePlayer for FakeServices {
    fn status(&self) -> LocalPlayerStatus {
        LocalPlayerStatus {
            is_authenticated: true,
            ..LocalPlayerStatus::default()
        }
    }

    fn start_authentication(&self, resolver: Resolver<PlayerInfo>) -> Result<Option<CancelFn>> {
        self.auth_requests.lock().unwrap().push(resolver);
        Ok(None)
    }

    fn load_friends(
        &self,
        query: FriendsQuery,
        resolver: Resolver<Vec<PlayerInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.friend_requests.lock().unwrap().push((query, resolver));
        Ok(None)
    }

    fn fetch_identity_signature(
        &self,
        resolver: Resolver<IdentitySignature>,
    ) -> Result<Option<CancelFn>> {
        self.signature_requests.lock().unwrap().push(resolver);
        Ok(None)
    }
}

impl NativeSavedGames for FakeServices {
    fn save_game(
        &self,
        name: &str,
        data: Vec<u8>,
        resolver: Resolver<SavedGameInfo>,
    ) -> Result<Option<CancelFn>> {
        self.save_requests
            .lock()
            .unwrap()
            .push((name.to_owned(), data, resolver));
        Ok(None)
    }

    fn fetch_saved_games(
        &self,
        resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.fetch_requests.lock().unwrap().push(resolver);
        Ok(None)
    }

    fn load_game_data(&self, name: &str, resolver: Resolver<Vec<u8>>) -> Result<Option<CancelFn>> {
        self.load_data_requests
            .lock()
            .unwrap()
            .push((name.to_owned(), resolver));
        Ok(None)
    }

    fn delete_saved_games(&self, name: &str, resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        self.delete_requests
            .lock()
            .unwrap()
            .push((name.to_owned(), resolver));
        Ok(None)
    }

    fn resolve_conflicts(
        &self,
        names: Vec<String>,
        _data: Vec<u8>,
        resolver: Resolver<Vec<SavedGameInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.conflict_requests.lock().unwrap().push((names, resolver));
        Ok(None)
    }

    fn watch_saved_games(&self, sink: EventSink<SavedGameEvent>) -> Result<Option<ReleaseFn>> {
        self.saved_game_sinks.lock().unwrap().push(sink);
        Ok(self.release_hook())
    }
}

impl NativeAchievements for FakeServices {
    fn report_progress(
        &self,
        batch: Vec<AchievementProgress>,
        resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>> {
        self.report_requests.lock().unwrap().push((batch, resolver));
        Ok(None)
    }

    fn reset_achievements(&self, resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        self.reset_requests.lock().unwrap().push(resolver);
        Ok(None)
    }

    fn load_progress(
        &self,
        resolver: Resolver<Vec<AchievementProgress>>,
    ) -> Result<Option<CancelFn>> {
        self.progress_requests.lock().unwrap().push(resolver);
        Ok(None)
    }

    fn load_descriptions(
        &self,
        resolver: Resolver<Vec<AchievementInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.description_requests.lock().unwrap().push(resolver);
        Ok(None)
    }
}

impl NativeLeaderboards for FakeServices {
    fn load_leaderboards(
        &self,
        ids: Vec<String>,
        resolver: Resolver<Vec<LeaderboardInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.board_requests.lock().unwrap().push((ids, resolver));
        Ok(None)
    }

    fn submit_score(
        &self,
        board_id: &str,
        score: i64,
        context: u64,
        resolver: Resolver<()>,
    ) -> Result<Option<CancelFn>> {
        self.score_submissions
            .lock()
            .unwrap()
            .push((board_id.to_owned(), score, context, resolver));
        Ok(None)
    }

    fn load_entries(
        &self,
        board_id: &str,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        resolver: Resolver<EntrySet>,
    ) -> Result<Option<CancelFn>> {
        self.entry_requests
            .lock()
            .unwrap()
            .push((board_id.to_owned(), player_scope, time_scope, resolver));
        Ok(None)
    }
}

impl NativeStore for FakeServices {
    fn load_products(
        &self,
        ids: Vec<String>,
        resolver: Resolver<Vec<ProductInfo>>,
    ) -> Result<Option<CancelFn>> {
        self.product_requests.lock().unwrap().push((ids, resolver));
        Ok(None)
    }

    fn purchase(
        &self,
        product_id: &str,
        quantity: u32,
        resolver: Resolver<PurchaseResult>,
    ) -> Result<Option<CancelFn>> {
        self.purchase_requests
            .lock()
            .unwrap()
            .push((product_id.to_owned(), quantity, resolver));
        Ok(None)
    }

    fn restore_purchases(&self, resolver: Resolver<()>) -> Result<Option<CancelFn>> {
        self.restore_requests.lock().unwrap().push(resolver);
        Ok(None)
    }

    fn finish_transaction(&self, transaction_id: u64) -> Result<()> {
        self.finished_transactions.lock().unwrap().push(transaction_id);
        Ok(())
    }

    fn watch_transactions(&self, sink: EventSink<TransactionInfo>) -> Result<Option<ReleaseFn>> {
        self.transaction_sinks.lock().unwrap().push(sink);
        Ok(self.release_hook())
    }

    fn watch_purchase_intents(&self, sink: EventSink<ProductInfo>) -> Result<Option<ReleaseFn>> {
        self.intent_sinks.lock().unwrap().push(sink);
        Ok(self.release_hook())
    }
}

impl NativeSignIn for FakeServices {
    fn request_credential(
        &self,
        scopes: Vec<AuthScope>,
        resolver: Resolver<CredentialInfo>,
    ) -> Result<Option<CancelFn>> {
        self.credential_requests.lock().unwrap().push((scopes, resolver));
        Ok(self.cancel_hook())
    }
}

impl NativeDocumentPicker for FakeServices {
    fn pick_documents(
        &self,
        types: Vec<String>,
        allow_multiple: bool,
        resolver: Resolver<Vec<PickedDocument>>,
    ) -> Result<Option<CancelFn>> {
        self.picker_requests
            .lock()
            .unwrap()
            .push((types, allow_multiple, resolver));
        Ok(self.cancel_hook())
    }
}

// ---------------------------------------------------------------------------
// Fixture & sample data
// ---------------------------------------------------------------------------

/// Adapters over a fresh fake backend plus the undrained primary queue.
pub fn fixture() -> (Arc<FakeServices>, Services, MainQueue) {
    let (dispatcher, queue) = main_queue();
    let bridge = Bridge::new(dispatcher);
    let fake = Arc::new(FakeServices::default());
    let services = Services::new(
        bridge,
        Arc::clone(&fake) as Arc<dyn NativeServices>,
        BridgeConfig::default(),
    );
    (fake, services, queue)
}

pub fn sample_player(name: &str) -> PlayerInfo {
    PlayerInfo {
        game_player_id: format!("G:{name}"),
        team_player_id: format!("T:{name}"),
        display_name: name.to_owned(),
        alias: name.to_owned(),
        is_invitable: true,
    }
}

pub fn sample_save(name: &str) -> SavedGameInfo {
    SavedGameInfo {
        name: name.to_owned(),
        device_name: "Test Device".to_owned(),
        modified_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
    }
}

pub fn sample_transaction(id: u64, product_id: &str) -> TransactionInfo {
    TransactionInfo {
        transaction_id: id,
        original_transaction_id: id,
        product_id: product_id.to_owned(),
        quantity: 1,
        purchase_date: Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap(),
        revocation_date: None,
    }
}

pub fn sample_product(product_id: &str) -> ProductInfo {
    ProductInfo {
        product_id: product_id.to_owned(),
        display_name: "Premium Upgrade".to_owned(),
        description: "Unlocks everything.".to_owned(),
        price: 4.99,
        display_price: "$4.99".to_owned(),
        currency_code: "USD".to_owned(),
    }
}

/// A native GameKit-domain error, for scripting failures.
pub fn game_kit_error(code: i64, message: &str) -> NativeError {
    NativeError::new(spielwerk_core::taxonomy::GAME_KIT_DOMAIN, code, message)
}
