//! Catalog and purchase client (purchase screen → package service).

use reqwest::{Client, StatusCode};

use super::{ClientError, check_status, parse_response};
use crate::config::ApiConfig;
use crate::objects::{BuyCoinPackageRequest, CoinPackage};

/// Typed HTTP client for the coin package service.
///
/// The service exposes two unauthenticated endpoints: one listing the
/// purchasable packages and one buying a package on behalf of a user. No
/// retries are performed; every failure is reported to the caller.
#[derive(Debug, Clone)]
pub struct CoinShopClient {
    http: Client,
    config: ApiConfig,
}

impl CoinShopClient {
    /// Create a new `CoinShopClient`.
    ///
    /// The configured timeout, if any, is applied to the underlying
    /// `reqwest::Client`.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/users/getAllCoinPackages` – list the purchasable packages.
    #[tracing::instrument(skip_all, err, name = "HTTP:GetAllCoinPackages")]
    pub async fn get_all_coin_packages(&self) -> Result<Vec<CoinPackage>, ClientError> {
        let url = self.config.coin_packages_url()?;

        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    /// `POST /api/users/buyCoinPackage` – buy a package for a user.
    ///
    /// Only `200 OK` counts as a completed purchase. Other 2xx statuses are
    /// reported as [`ClientError::UnexpectedStatus`]; non-2xx statuses as
    /// [`ClientError::Api`] carrying the server's `message` when present.
    #[tracing::instrument(
        skip_all,
        err,
        name = "HTTP:BuyCoinPackage",
        fields(package_id = %request.package_id)
    )]
    pub async fn buy_coin_package(
        &self,
        request: &BuyCoinPackageRequest,
    ) -> Result<(), ClientError> {
        let url = self.config.buy_coin_package_url()?;

        let resp = self.http.post(url).json(request).send().await?;

        let resp = check_status(resp).await?;
        match resp.status() {
            StatusCode::OK => Ok(()),
            other => Err(ClientError::UnexpectedStatus(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    fn client_for(server: &MockServer) -> CoinShopClient {
        let base_url = Url::parse(&server.base_url()).unwrap();
        CoinShopClient::new(ApiConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_list_packages() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/getAllCoinPackages");
                then.status(200).json_body(json!([
                    {"_id": "p1", "coin": 100, "rateInInr": 50, "text": "100"},
                    {"_id": "p2", "coin": 250, "rateInInr": 110, "text": "125"}
                ]));
            })
            .await;

        let packages = client_for(&server).get_all_coin_packages().await.unwrap();

        mock.assert_async().await;
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].id, "p1");
        assert_eq!(packages[1].coin, 250);
    }

    #[tokio::test]
    async fn test_list_packages_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/getAllCoinPackages");
                then.status(503).body("maintenance");
            })
            .await;

        let err = client_for(&server)
            .get_all_coin_packages()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Api { status, ref body, message: None }
                if status == StatusCode::SERVICE_UNAVAILABLE && body == "maintenance"
        ));
    }

    #[tokio::test]
    async fn test_list_packages_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/getAllCoinPackages");
                then.status(200).json_body(json!({"packages": []}));
            })
            .await;

        let err = client_for(&server)
            .get_all_coin_packages()
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn test_buy_sends_user_and_package() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/users/buyCoinPackage")
                    .json_body(json!({"userId": "u-7", "packageId": "p1"}));
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let request = BuyCoinPackageRequest {
            user_id: Some(json!("u-7")),
            package_id: "p1".to_string(),
        };
        client_for(&server)
            .buy_coin_package(&request)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_buy_declined_carries_server_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/buyCoinPackage");
                then.status(402).json_body(json!({"message": "card declined"}));
            })
            .await;

        let request = BuyCoinPackageRequest {
            user_id: Some(json!("u-7")),
            package_id: "p1".to_string(),
        };
        let err = client_for(&server)
            .buy_coin_package(&request)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::PAYMENT_REQUIRED));
        assert_eq!(err.server_message(), Some("card declined"));
    }

    #[tokio::test]
    async fn test_buy_declined_with_numeric_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/buyCoinPackage");
                then.status(402).json_body(json!({"message": 402}));
            })
            .await;

        let request = BuyCoinPackageRequest {
            user_id: Some(json!("u-7")),
            package_id: "p1".to_string(),
        };
        let err = client_for(&server)
            .buy_coin_package(&request)
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("402"));
    }

    #[tokio::test]
    async fn test_buy_other_success_status_is_not_a_purchase() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/buyCoinPackage");
                then.status(202);
            })
            .await;

        let request = BuyCoinPackageRequest {
            user_id: None,
            package_id: "p1".to_string(),
        };
        let err = client_for(&server)
            .buy_coin_package(&request)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::UnexpectedStatus(StatusCode::ACCEPTED)));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Nothing listens on the discard port.
        let base_url = Url::parse("http://127.0.0.1:9").unwrap();
        let client = CoinShopClient::new(ApiConfig::new(base_url)).unwrap();

        let err = client.get_all_coin_packages().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
