use reqwest::{Client as ReqwestClient, redirect::Policy};
use serde::de::DeserializeOwned;
use tracing::debug;

use orderitems_core::{OrderId, PackageId};

use crate::config::UpstreamConfig;
use crate::upstream::error::UpstreamError;
use crate::upstream::payload::{OrderPayload, PackageItemRecord};

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const TENANT_ID_HEADER: &str = "X-Tenant-Id";

/// HTTP client for the upstream order service.
///
/// Cheap to clone; clones share the underlying connection pool. No timeout is
/// set here, so the `reqwest` defaults apply. Redirects are not followed: a 3xx
/// is reported like any other non-success status and the credential headers
/// never leave the configured host.
#[derive(Clone)]
pub struct MaestroClient {
    http: ReqwestClient,
    config: UpstreamConfig,
}

impl MaestroClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = ReqwestClient::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|source| UpstreamError::Transport {
                url: config.base_url().to_string(),
                source,
            })?;

        Ok(Self { http, config })
    }

    /// `GET {base}/orders/{order_id}`
    pub async fn get_order(&self, order_id: OrderId) -> Result<OrderPayload, UpstreamError> {
        let url = format!("{}/orders/{}", self.config.base_url(), order_id);
        self.get_json(url).await
    }

    /// `GET {base}/orders/{order_id}/packages/{package_id}/items`
    pub async fn get_package_items(
        &self,
        order_id: OrderId,
        package_id: &PackageId,
    ) -> Result<Vec<PackageItemRecord>, UpstreamError> {
        let url = format!(
            "{}/orders/{}/packages/{}/items",
            self.config.base_url(),
            order_id,
            package_id
        );
        self.get_json(url).await
    }

    async fn get_json<T>(&self, url: String) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "calling upstream");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(TENANT_ID_HEADER, self.config.tenant_id())
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        // Reading the body is still transport; only parsing it is a decode failure.
        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { url, source })
    }
}
