// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Storefront adapter: products, purchases, restore, transaction streams.
//
// Purchase outcomes split three ways: a verified transaction (optionally
// auto-finished), a pending approval whose terminal transaction arrives
// later through the updates listener, and failures — user cancellation
// and verification failures included — through the normal failure path.

use std::sync::Arc;

use spielwerk_bridge::{Bridge, ExecutionContext, OperationHandle, Outcome, Subscription};
use spielwerk_core::error::{Result, SpielwerkError};
use spielwerk_core::types::{ProductInfo, PurchaseResult, TransactionInfo};
use spielwerk_core::BridgeConfig;
use tracing::warn;

use crate::traits::NativeServices;

#[derive(Clone)]
pub struct StoreAdapter {
    bridge: Bridge,
    native: Arc<dyn NativeServices>,
    config: BridgeConfig,
}

impl StoreAdapter {
    pub fn new(bridge: Bridge, native: Arc<dyn NativeServices>, config: BridgeConfig) -> Self {
        Self {
            bridge,
            native,
            config,
        }
    }

    /// Load product metadata for the given identifiers.
    pub fn load_products(
        &self,
        ids: Vec<String>,
        on_complete: impl FnOnce(Outcome<Vec<ProductInfo>>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if ids.is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "product id list must not be empty".into(),
                    ));
                }
                native.load_products(ids, resolver)
            },
            on_complete,
        )
    }

    /// Run the purchase flow for one product.
    ///
    /// With `auto_finish_transactions` set (the default), a completed
    /// transaction is finished before the outcome is delivered, so the
    /// store stops redelivering it. Games that grant content
    /// asynchronously should disable that and call
    /// [`StoreAdapter::finish_transaction`] themselves.
    pub fn purchase(
        &self,
        product_id: &str,
        quantity: u32,
        on_complete: impl FnOnce(Outcome<PurchaseResult>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        let finisher = Arc::clone(&self.native);
        let auto_finish = self.config.auto_finish_transactions;
        let product_id = product_id.to_owned();
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| {
                if product_id.trim().is_empty() {
                    return Err(SpielwerkError::InvalidRequest(
                        "product id must not be empty".into(),
                    ));
                }
                if quantity == 0 {
                    return Err(SpielwerkError::InvalidRequest(
                        "purchase quantity must be at least 1".into(),
                    ));
                }
                native.purchase(&product_id, quantity, resolver)
            },
            move |outcome: Outcome<PurchaseResult>| {
                if auto_finish {
                    if let Outcome::Success(PurchaseResult::Completed(tx)) = &outcome {
                        if let Err(err) = finisher.finish_transaction(tx.transaction_id) {
                            warn!(
                                transaction = tx.transaction_id,
                                error = %err,
                                "auto-finish failed; transaction will redeliver"
                            );
                        }
                    }
                }
                on_complete(outcome);
            },
        )
    }

    /// Replay the player's purchase history (e.g. after reinstalling).
    pub fn restore_purchases(
        &self,
        on_complete: impl FnOnce(Outcome<()>) + Send + 'static,
    ) -> OperationHandle {
        let native = Arc::clone(&self.native);
        self.bridge.invoke(
            ExecutionContext::Main,
            move |resolver| native.restore_purchases(resolver),
            on_complete,
        )
    }

    /// Acknowledge a delivered transaction.
    pub fn finish_transaction(&self, transaction_id: u64) -> Result<()> {
        self.native.finish_transaction(transaction_id)
    }

    /// Subscribe to transactions arriving outside a purchase call:
    /// renewals, family-sharing grants, approvals of pending purchases.
    pub fn watch_transactions(
        &self,
        on_event: impl Fn(TransactionInfo) + Send + Sync + 'static,
    ) -> Result<Subscription> {
        let native = Arc::clone(&self.native);
        self.bridge.register(
            ExecutionContext::Main,
            move |sink| native.watch_transactions(sink),
            on_event,
        )
    }

    /// Subscribe to store-initiated purchase intents (promoted products).
    pub fn watch_purchase_intents(
        &self,
        on_event: impl Fn(ProductInfo) + Send + Sync + 'static,
    ) -> Result<Subscription> {
        let native = Arc::clone(&self.native);
        self.bridge.register(
            ExecutionContext::Main,
            move |sink| native.watch_purchase_intents(sink),
            on_event,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use spielwerk_core::error::{ErrorKind, NormalizedError};
    use spielwerk_core::taxonomy::{STORE_KIT_DOMAIN, store_kit};
    use spielwerk_core::NativeError;

    use super::*;
    use crate::testing::{fixture, sample_product, sample_transaction};

    #[test]
    fn completed_purchase_is_auto_finished_before_delivery() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .store
            .purchase("premium.upgrade", 1, move |outcome| {
                sink.lock().unwrap().push(outcome)
            });

        let (product_id, quantity, resolver) = fake.purchase_requests.lock().unwrap().remove(0);
        assert_eq!(product_id, "premium.upgrade");
        assert_eq!(quantity, 1);
        resolver.succeed(PurchaseResult::Completed(sample_transaction(
            7001,
            "premium.upgrade",
        )));
        queue.drain();

        assert_eq!(*fake.finished_transactions.lock().unwrap(), vec![7001]);
        let result = seen.lock().unwrap()[0].clone().success().unwrap();
        assert!(matches!(result, PurchaseResult::Completed(tx) if tx.transaction_id == 7001));
    }

    #[test]
    fn pending_purchase_is_not_finished() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .store
            .purchase("premium.upgrade", 1, move |outcome| {
                sink.lock().unwrap().push(outcome)
            });

        let (_, _, resolver) = fake.purchase_requests.lock().unwrap().remove(0);
        resolver.succeed(PurchaseResult::Pending);
        queue.drain();

        assert!(fake.finished_transactions.lock().unwrap().is_empty());
        assert_eq!(
            seen.lock().unwrap()[0].clone().success().unwrap(),
            PurchaseResult::Pending
        );
    }

    #[test]
    fn cancelled_purchase_surfaces_as_a_cancelled_failure() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .store
            .purchase("premium.upgrade", 1, move |outcome| {
                sink.lock().unwrap().push(outcome)
            });

        let (_, _, resolver) = fake.purchase_requests.lock().unwrap().remove(0);
        resolver.resolve(
            None,
            Some(NativeError::new(
                STORE_KIT_DOMAIN,
                store_kit::PAYMENT_CANCELLED,
                "payment sheet dismissed",
            )),
        );
        queue.drain();

        assert!(fake.finished_transactions.lock().unwrap().is_empty());
        let err = seen.lock().unwrap()[0].clone().failure().unwrap();
        assert_eq!(err.kind, ErrorKind::Cancelled);
    }

    #[test]
    fn unverified_purchase_surfaces_as_unverified() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .store
            .purchase("premium.upgrade", 1, move |outcome| {
                sink.lock().unwrap().push(outcome)
            });

        let (_, _, resolver) = fake.purchase_requests.lock().unwrap().remove(0);
        resolver.fail(NormalizedError::new(
            ErrorKind::Unverified,
            "transaction signature did not verify",
            STORE_KIT_DOMAIN,
        ));
        queue.drain();

        let err = seen.lock().unwrap()[0].clone().failure().unwrap();
        assert_eq!(err.kind, ErrorKind::Unverified);
    }

    #[test]
    fn zero_quantity_is_rejected_before_the_store_sees_it() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services
            .store
            .purchase("premium.upgrade", 0, move |outcome| {
                sink.lock().unwrap().push(outcome)
            });
        queue.drain();

        assert!(fake.purchase_requests.lock().unwrap().is_empty());
        let err = seen.lock().unwrap()[0].clone().failure().unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidParameter);
    }

    #[test]
    fn transaction_updates_stream_in_order() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let subscription = services
            .store
            .watch_transactions(move |tx| sink.lock().unwrap().push(tx.transaction_id))
            .unwrap();

        let native_sink = fake.transaction_sinks.lock().unwrap().remove(0);
        native_sink.emit(sample_transaction(1, "premium.upgrade"));
        native_sink.emit(sample_transaction(2, "premium.upgrade"));
        queue.drain();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        subscription.release();
    }

    #[test]
    fn purchase_intents_carry_the_promoted_product() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _subscription = services
            .store
            .watch_purchase_intents(move |product| {
                sink.lock().unwrap().push(product.product_id)
            })
            .unwrap();

        let native_sink = fake.intent_sinks.lock().unwrap().remove(0);
        native_sink.emit(sample_product("season.pass"));
        queue.drain();

        assert_eq!(*seen.lock().unwrap(), vec!["season.pass"]);
    }

    #[test]
    fn empty_product_list_is_rejected() {
        let (fake, services, mut queue) = fixture();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        services.store.load_products(Vec::new(), move |outcome| {
            sink.lock().unwrap().push(outcome)
        });
        queue.drain();

        assert!(fake.product_requests.lock().unwrap().is_empty());
        assert!(seen.lock().unwrap()[0].is_failure());
    }
}
