//! In-memory [`CoinShopApi`] used by the unit tests.

use crate::api::CoinShopApi;
use crate::purchase::PurchasePhase;
use async_trait::async_trait;
use coinshop_sdk::client::ClientError;
use coinshop_sdk::objects::{BuyCoinPackageRequest, CoinPackage, PriceLabel};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::watch;

pub(crate) fn package(id: &str, coin: u64, rate: i64) -> CoinPackage {
    CoinPackage {
        id: id.to_string(),
        coin,
        rate_in_inr: rate.into(),
        text: PriceLabel::Text((rate * 2).to_string()),
    }
}

/// Canned response for one purchase call.
pub(crate) enum BuyReply {
    Ok,
    Status(StatusCode, Option<&'static str>),
    UnexpectedStatus(StatusCode),
    Unreadable,
}

impl BuyReply {
    fn into_result(self) -> Result<(), ClientError> {
        match self {
            BuyReply::Ok => Ok(()),
            BuyReply::Status(status, message) => Err(ClientError::Api {
                status,
                body: String::new(),
                message: message.map(str::to_string),
            }),
            BuyReply::UnexpectedStatus(status) => Err(ClientError::UnexpectedStatus(status)),
            BuyReply::Unreadable => Err(ClientError::Json(
                serde_json::from_str::<()>("<html>").unwrap_err(),
            )),
        }
    }
}

#[derive(Default)]
pub(crate) struct MockApi {
    catalog: Mutex<Option<Vec<CoinPackage>>>,
    buy_replies: Mutex<VecDeque<BuyReply>>,
    list_calls: Mutex<usize>,
    buy_calls: Mutex<Vec<BuyCoinPackageRequest>>,
    phase_probe: Mutex<Option<watch::Receiver<PurchasePhase>>>,
    phases_seen: Mutex<Vec<PurchasePhase>>,
}

impl MockApi {
    /// A service whose catalog request succeeds with `packages`.
    pub(crate) fn with_catalog(packages: Vec<CoinPackage>) -> Self {
        let api = Self::default();
        *api.catalog.lock().unwrap() = Some(packages);
        api
    }

    /// A service whose catalog request fails.
    pub(crate) fn failing_catalog() -> Self {
        Self::default()
    }

    pub(crate) fn push_buy_reply(&self, reply: BuyReply) {
        self.buy_replies.lock().unwrap().push_back(reply);
    }

    /// Record the purchase phase as seen from inside every purchase call.
    pub(crate) fn probe_phase(&self, rx: watch::Receiver<PurchasePhase>) {
        *self.phase_probe.lock().unwrap() = Some(rx);
    }

    pub(crate) fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub(crate) fn buy_calls(&self) -> Vec<BuyCoinPackageRequest> {
        self.buy_calls.lock().unwrap().clone()
    }

    pub(crate) fn phases_seen(&self) -> Vec<PurchasePhase> {
        self.phases_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoinShopApi for MockApi {
    async fn list_coin_packages(&self) -> Result<Vec<CoinPackage>, ClientError> {
        *self.list_calls.lock().unwrap() += 1;
        match self.catalog.lock().unwrap().clone() {
            Some(packages) => Ok(packages),
            None => Err(ClientError::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
                message: None,
            }),
        }
    }

    async fn buy_coin_package(&self, request: BuyCoinPackageRequest) -> Result<(), ClientError> {
        if let Some(rx) = self.phase_probe.lock().unwrap().as_ref() {
            self.phases_seen.lock().unwrap().push(*rx.borrow());
        }
        self.buy_calls.lock().unwrap().push(request);
        tokio::task::yield_now().await;
        let reply = self
            .buy_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(BuyReply::Ok);
        reply.into_result()
    }
}
