// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Achievements adapter: progress reporting and metadata loading.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome};
use spielwerk_core::error::SpielwerkError;
use spielwerk_core::types::{AchievementInfo, AchievementProgress};

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct AchievementsAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
}

impl AchievementsAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>) -> Self {
        Self { bridge, native }
    }

    /// Report a batch of progress updates in one native round trip. The
    /// service clamps percentages; identifiers must be non-empty.
    pub fn report_progress(
        &self,
        batch: Vec<AchievementProgress>,
        on_complete: impl FnOnce(Outcome<()>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if batch.is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "achievement batch must not be empty".into(),
                    ));
                }
                if let Some(bad) = batch.iter().find(|a| a.identifier.trim().is_empty()) {
                    return Err(SpielwerkError::InvalidRequest(format!(
                        "achievement with empty identifier at percent {}",
                        bad.percent_complete
                    )));
                }
                native.report_progress(batch, resolver)
            },
            on_complete,
        )
    }

    /// Reset every achievement for the local player. Irreversible.
    pub fn reset_achievements(
        &self,
        on_complete: impl FnOnce(Outcome<()>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.reset_achievements(resolver),
            on_complete,
        )
    }

    /// Load the local player's progress across all achievements.
    pub fn load_progress(
        &self,
        on_complete: impl FnOnce(Outcome<Vec<AchievementProgress>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.load_progress(resolver),
            on_complete,
        )
    }

    /// Load the store-console metadata for every achievement.
    pub fn load_descriptions(
        &self,
        on_complete: impl FnOnce(Outcome<Vec<AchievementInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.load_descriptions(resolver),
            on_complete,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use spielwerk_core::error::ErrorKind;

    use super::*;
    use crate::testing::fixture;

    fn progress(identifier: &str, percent: f64) -> AchievementProgress {
        AchievementProgress {
            identifier: identifier.to_owned(),
            percent_complete: percent,
            shows_completion_banner: true,
            last_reported: None,
        }
    }

    #[test]
    fn report_forwards_the_batch_and_resolves() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services.achievements.report_progress(
            vec![progress("first_win", 100.0), progress("collector", 40.0)],
            move |outcome| sink.lock().unwrap().push(outcome),
        );

        let (batch, resolver) = fake.report_requests.lock().unwrap().remove(0);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].identifier, "first_win");
        resolver.succeed(());
        queue.drain();

        assert!(seen.lock().unwrap()[0].is_success());
    }

    #[test]
    fn empty_batch_is_rejected_synchronously() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .achievements
            .report_progress(Vec::new(), move |outcome| {
                sink.lock().unwrap().push(outcome)
            });
        queue.drain();

        assert!(fake.report_requests.lock().unwrap().is_empty());
        let err = seen.lock().unwrap()[0].clone().failure().unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidParameter);
    }

    #[test]
    fn blank_identifier_is_rejected_synchronously() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .achievements
            .report_progress(vec![progress("  ", 10.0)], move |outcome| {
                sink.lock().unwrap().push(outcome)
            });
        queue.drain();

        assert!(fake.report_requests.lock().unwrap().is_empty());
        assert!(seen.lock().unwrap()[0].is_failure());
    }

    #[test]
    fn loaded_progress_passes_through() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .achievements
            .load_progress(move |outcome| sink.lock().unwrap().push(outcome));

        let resolver = fake.progress_requests.lock().unwrap().remove(0);
        resolver.succeed(vec![progress("first_win", 100.0)]);
        queue.drain();

        let loaded = seen.lock().unwrap()[0].clone().success().unwrap();
        assert!(loaded[0].is_completed());
    }
}
