// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Leaderboards adapter: board metadata, score submission, entry queries.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome};
use spielwerk_core::error::SpielwerkError;
use spielwerk_core::types::{EntrySet, LeaderboardInfo, PlayerScope, TimeScope};

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct LeaderboardsAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
}

impl LeaderboardsAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>) -> Self {
        Self { bridge, native }
    }

    /// Load boards by identifier. An empty list loads every board
    /// configured for the game.
    pub fn load_leaderboards(
        &self,
        ids: Vec<String>,
        on_complete: impl FnOnce(Outcome<Vec<LeaderboardInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.load_leaderboards(ids, resolver),
            on_complete,
        )
    }

    /// Submit a score with an opaque context value the game can read back
    /// from entries later.
    pub fn submit_score(
        &self,
        board_id: &str,
        score: i64,
        context: u64,
        on_complete: impl FnOnce(Outcome<()>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let board_id = board_id.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if board_id.trim().is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "leaderboard identifier must not be empty".into(),
                    ));
                }
                native.submit_score(&board_id, score, context, resolver)
            },
            on_complete,
        )
    }

    /// Load entries for the given scopes, including the local player's
    /// own row when one exists.
    pub fn load_entries(
        &self,
        board_id: &str,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        on_complete: impl FnOnce(Outcome<EntrySet>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let board_id = board_id.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if board_id.trim().is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "leaderboard identifier must not be empty".into(),
                    ));
                }
                native.load_entries(&board_id, player_scope, time_scope, resolver)
            },
            on_complete,
        )
    }
}
