//! Remote package service seam.
//!
//! The screen only talks to the service through [`CoinShopApi`], which the
//! SDK's [`CoinShopClient`] implements over HTTP.

use async_trait::async_trait;
use coinshop_sdk::client::{ClientError, CoinShopClient};
use coinshop_sdk::objects::{BuyCoinPackageRequest, CoinPackage};

/// Trait for the remote coin package service.
#[async_trait]
pub trait CoinShopApi: Send + Sync {
    /// Fetch every purchasable package.
    async fn list_coin_packages(&self) -> Result<Vec<CoinPackage>, ClientError>;

    /// Buy one package. `Ok` means the purchase completed.
    async fn buy_coin_package(&self, request: BuyCoinPackageRequest) -> Result<(), ClientError>;
}

#[async_trait]
impl CoinShopApi for CoinShopClient {
    async fn list_coin_packages(&self) -> Result<Vec<CoinPackage>, ClientError> {
        self.get_all_coin_packages().await
    }

    async fn buy_coin_package(&self, request: BuyCoinPackageRequest) -> Result<(), ClientError> {
        CoinShopClient::buy_coin_package(self, &request).await
    }
}
