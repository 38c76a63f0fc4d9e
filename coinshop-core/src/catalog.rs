//! Coin package catalog and its loader.
//!
//! The loader fetches the whole catalog once per screen activation. A
//! successful fetch replaces the catalog wholesale; a failed one leaves it
//! empty. There is no retry and no cached fallback.

use crate::api::CoinShopApi;
use coinshop_sdk::client::ClientError;
use coinshop_sdk::objects::CoinPackage;
use std::sync::Arc;
use tracing::{error, info};

/// The packages currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<CoinPackage>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry with `packages`, in the order received.
    pub fn replace(&mut self, packages: Vec<CoinPackage>) {
        self.packages = packages;
    }

    pub fn clear(&mut self) {
        self.packages.clear();
    }

    pub fn packages(&self) -> &[CoinPackage] {
        &self.packages
    }

    /// Look up a package by its identifier.
    pub fn find(&self, package_id: &str) -> Option<&CoinPackage> {
        self.packages.iter().find(|package| package.id == package_id)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

/// Fetches the catalog from the package service.
pub struct CatalogLoader<A> {
    api: Arc<A>,
}

impl<A: CoinShopApi> CatalogLoader<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Issue one catalog request.
    pub async fn load(&self) -> Result<Vec<CoinPackage>, ClientError> {
        match self.api.list_coin_packages().await {
            Ok(packages) => {
                info!(count = packages.len(), "Coin package catalog loaded");
                Ok(packages)
            }
            Err(e) => {
                error!(error = %e, "Failed to load coin package catalog");
                Err(e)
            }
        }
    }
}
