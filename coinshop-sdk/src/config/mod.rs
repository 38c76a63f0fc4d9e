//! API endpoint configuration.
//!
//! The binary crate is responsible for reading this from a file; the
//! types here only carry validated runtime values.

use std::time::Duration;
use url::Url;

/// Base URL of the production package service.
pub const DEFAULT_BASE_URL: &str = "https://leodatingapp.aindriya.uk";

/// Path of the package catalog endpoint.
pub const GET_ALL_COIN_PACKAGES_PATH: &str = "/api/users/getAllCoinPackages";

/// Path of the purchase endpoint.
pub const BUY_COIN_PACKAGE_PATH: &str = "/api/users/buyCoinPackage";

/// Where and how to reach the package service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root URL of the service (e.g. `https://shop.example.com`).
    pub base_url: Url,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Configuration for the production service.
    pub fn production() -> Result<Self, url::ParseError> {
        Url::parse(DEFAULT_BASE_URL).map(Self::new)
    }

    /// Full URL of the catalog endpoint.
    pub fn coin_packages_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(GET_ALL_COIN_PACKAGES_PATH)
    }

    /// Full URL of the purchase endpoint.
    pub fn buy_coin_package_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(BUY_COIN_PACKAGE_PATH)
    }
}
