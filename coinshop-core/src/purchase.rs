//! Selection and purchase flow.
//!
//! ```text
//! Idle ──select──▶ Selected ──submit──▶ Submitting
//!                     ▲                     │
//!                     └──── response ───────┘
//! ```
//!
//! `select` is valid in every state and never touches the in-flight flag.
//! `submit` without a selection yields a warning and makes no request.
//! Otherwise exactly one purchase request is sent, carrying the user id the
//! host most recently supplied, and the flow always returns to `Selected`,
//! including when the pending submission is dropped.

use crate::api::CoinShopApi;
use crate::feedback::{
    Feedback, NO_SELECTION_MESSAGE, PURCHASE_FAILED_MESSAGE, PURCHASE_NOT_PROCESSED_MESSAGE,
    PURCHASE_SUCCEEDED_MESSAGE,
};
use crate::identity::IdentityReader;
use coinshop_sdk::client::ClientError;
use coinshop_sdk::objects::{BuyCoinPackageRequest, CoinPackage};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchasePhase {
    /// Nothing selected yet.
    Idle,
    /// A package is selected and no request is in flight.
    Selected,
    /// A purchase request is in flight.
    Submitting,
}

/// State of the recharge button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

pub struct PurchaseFlow<A> {
    api: Arc<A>,
    identity: IdentityReader,
    selected: Option<CoinPackage>,
    phase: watch::Sender<PurchasePhase>,
}

impl<A: CoinShopApi> PurchaseFlow<A> {
    pub fn new(api: Arc<A>, identity: IdentityReader) -> Self {
        let (phase, _) = watch::channel(PurchasePhase::Idle);
        Self {
            api,
            identity,
            selected: None,
            phase,
        }
    }

    /// Select `package`, replacing any previous selection.
    pub fn select(&mut self, package: CoinPackage) {
        info!(package_id = %package.id, coin = package.coin, "Coin package selected");
        self.selected = Some(package);
        self.phase.send_if_modified(|phase| {
            if *phase == PurchasePhase::Idle {
                *phase = PurchasePhase::Selected;
                true
            } else {
                false
            }
        });
    }

    /// Submit a purchase of the selected package.
    ///
    /// Returns the feedback to show for the outcome.
    pub async fn submit(&mut self) -> Feedback {
        let Some(package) = self.selected.as_ref() else {
            warn!("Purchase submitted without a selected package");
            return Feedback::warning(NO_SELECTION_MESSAGE);
        };

        let request = BuyCoinPackageRequest {
            user_id: self.identity.user_id(),
            package_id: package.id.clone(),
        };
        if request.user_id.as_ref().is_none_or(|id| id.is_null()) {
            warn!(
                package_id = %request.package_id,
                "No user identity received from host, submitting without a userId"
            );
        }

        info!(package_id = %request.package_id, "Submitting coin purchase");
        let in_flight = InFlight::enter(&self.phase);
        let result = self.api.buy_coin_package(request).await;
        drop(in_flight);

        purchase_feedback(result)
    }

    pub fn selected(&self) -> Option<&CoinPackage> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> PurchasePhase {
        *self.phase.borrow()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == PurchasePhase::Submitting
    }

    /// Subscribe to phase changes, e.g. to drive a loading overlay.
    pub fn watch_phase(&self) -> watch::Receiver<PurchasePhase> {
        self.phase.subscribe()
    }

    /// Enabled only with a selection and nothing in flight.
    pub fn submit_button(&self) -> SubmitButton {
        let submitting = self.is_submitting();
        SubmitButton {
            label: if submitting { "Processing..." } else { "Recharge" },
            enabled: self.selected.is_some() && !submitting,
        }
    }
}

/// Map a purchase result to dialog feedback.
pub fn purchase_feedback(result: Result<(), ClientError>) -> Feedback {
    match result {
        Ok(()) => {
            info!("Coin purchase completed");
            Feedback::success(PURCHASE_SUCCEEDED_MESSAGE)
        }
        Err(ClientError::UnexpectedStatus(status)) => {
            error!(%status, "Payment failed: purchase not processed");
            Feedback::error(PURCHASE_NOT_PROCESSED_MESSAGE)
        }
        Err(e) => {
            error!(error = %e, "Payment failed");
            Feedback::error(e.server_message().unwrap_or(PURCHASE_FAILED_MESSAGE))
        }
    }
}

/// Marks a request as in flight until dropped.
struct InFlight<'a> {
    phase: &'a watch::Sender<PurchasePhase>,
}

impl<'a> InFlight<'a> {
    fn enter(phase: &'a watch::Sender<PurchasePhase>) -> Self {
        phase.send_replace(PurchasePhase::Submitting);
        Self { phase }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.phase.send_replace(PurchasePhase::Selected);
    }
}
