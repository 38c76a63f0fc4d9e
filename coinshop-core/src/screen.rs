//! The "Buy Coins" screen.
//!
//! Composes the host bridge, the catalog loader and the purchase flow around
//! one feedback slot. The screen owner drives it from a single task:
//!
//! 1. [`activate`](CoinPurchaseScreen::activate) subscribes the bridge and
//!    loads the catalog once
//! 2. [`dispatch`](CoinPurchaseScreen::dispatch) applies user actions
//! 3. [`teardown`](CoinPurchaseScreen::teardown) unsubscribes the bridge
//!
//! Dropping a pending `activate` or `dispatch` future discards its result.

use crate::api::CoinShopApi;
use crate::bridge::{BridgeSubscription, HostMessageBridge};
use crate::catalog::{Catalog, CatalogLoader};
use crate::events::{HostMessageReceiver, UserAction};
use crate::feedback::{CATALOG_LOAD_FAILED_MESSAGE, Feedback, FeedbackSlot};
use crate::identity::{IdentityReader, IdentityWriter, identity_cell};
use crate::purchase::{PurchaseFlow, PurchasePhase, SubmitButton};
use coinshop_sdk::objects::{CoinPackage, HostPayload};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Screen title.
pub const SCREEN_TITLE: &str = "Buy Coins";

/// Errors returned to the screen owner. None of them reach the dialog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// `activate` was called on a screen that is already active.
    #[error("screen is already active")]
    AlreadyActive,

    /// A selection named a package that is not in the catalog.
    #[error("unknown coin package: {0}")]
    UnknownPackage(String),
}

pub struct CoinPurchaseScreen<A> {
    loader: CatalogLoader<A>,
    catalog: Catalog,
    flow: PurchaseFlow<A>,
    feedback: FeedbackSlot,
    identity: IdentityReader,
    bridge: Option<HostMessageBridge>,
    subscription: Option<BridgeSubscription>,
}

impl<A: CoinShopApi> CoinPurchaseScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (writer, reader): (IdentityWriter, IdentityReader) = identity_cell();
        Self {
            loader: CatalogLoader::new(api.clone()),
            catalog: Catalog::new(),
            flow: PurchaseFlow::new(api, reader.clone()),
            feedback: FeedbackSlot::new(),
            identity: reader,
            bridge: Some(HostMessageBridge::new(writer)),
            subscription: None,
        }
    }

    /// Start listening to the host and load the catalog.
    ///
    /// A failed catalog load leaves the catalog empty and shows an error
    /// dialog; it does not fail activation. A screen can be activated once.
    pub async fn activate(
        &mut self,
        host_messages: HostMessageReceiver,
    ) -> Result<(), ScreenError> {
        let Some(bridge) = self.bridge.take() else {
            return Err(ScreenError::AlreadyActive);
        };
        self.subscription = Some(bridge.subscribe(host_messages));
        info!("Coin purchase screen activated");

        match self.loader.load().await {
            Ok(packages) => self.catalog.replace(packages),
            Err(_) => {
                self.catalog.clear();
                self.feedback.show(Feedback::error(CATALOG_LOAD_FAILED_MESSAGE));
            }
        }
        Ok(())
    }

    /// Apply one user action.
    pub async fn dispatch(&mut self, action: UserAction) -> Result<(), ScreenError> {
        debug!(%action, "Dispatching user action");
        match action {
            UserAction::Select { package_id } => self.select(&package_id),
            UserAction::Submit => {
                self.submit().await;
                Ok(())
            }
            UserAction::DismissFeedback => {
                self.dismiss_feedback();
                Ok(())
            }
        }
    }

    /// Select the catalog entry with `package_id`.
    ///
    /// Unknown identifiers leave the current selection untouched.
    pub fn select(&mut self, package_id: &str) -> Result<(), ScreenError> {
        let Some(package) = self.catalog.find(package_id) else {
            warn!(package_id, "Selection of unknown coin package ignored");
            return Err(ScreenError::UnknownPackage(package_id.to_string()));
        };
        self.flow.select(package.clone());
        Ok(())
    }

    /// Submit the selected package and show the outcome.
    pub async fn submit(&mut self) {
        let feedback = self.flow.submit().await;
        self.feedback.show(feedback);
    }

    pub fn dismiss_feedback(&mut self) {
        if let Some(dismissed) = self.feedback.dismiss() {
            debug!(severity = %dismissed.severity, "Feedback dismissed");
        }
    }

    /// Stop listening to the host.
    pub async fn teardown(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe().await;
        }
        info!("Coin purchase screen torn down");
    }

    pub fn is_active(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(BridgeSubscription::is_active)
    }

    pub fn catalog(&self) -> &[CoinPackage] {
        self.catalog.packages()
    }

    pub fn selected(&self) -> Option<&CoinPackage> {
        self.flow.selected()
    }

    pub fn is_selected(&self, package_id: &str) -> bool {
        self.selected().is_some_and(|package| package.id == package_id)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.current()
    }

    pub fn phase(&self) -> PurchasePhase {
        self.flow.phase()
    }

    /// Whether the loading overlay covers the screen.
    pub fn is_submitting(&self) -> bool {
        self.flow.is_submitting()
    }

    pub fn watch_phase(&self) -> watch::Receiver<PurchasePhase> {
        self.flow.watch_phase()
    }

    pub fn submit_button(&self) -> SubmitButton {
        self.flow.submit_button()
    }

    /// The identity payload the next purchase will use.
    pub fn identity(&self) -> Option<HostPayload> {
        self.identity.current()
    }
}
