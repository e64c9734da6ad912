use reqwest::Client as HttpClient;

use crate::{
    error::{WidgetError, WidgetResult},
    models::Product,
    services::sources::CatalogSource,
};

/// HTTP catalog feed
///
/// Issues the one read-only GET against the configured endpoint. The body
/// must be a JSON array of product records; non-2xx statuses and malformed
/// payloads surface as errors for the cache layer to absorb.
#[derive(Clone)]
pub struct HttpCatalogSource {
    http_client: HttpClient,
    endpoint_url: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint_url: endpoint_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> WidgetResult<Vec<Product>> {
        let response = self.http_client.get(&self.endpoint_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WidgetError::Endpoint(format!(
                "Catalog endpoint returned status {}: {}",
                status, body
            )));
        }

        let payload = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&payload)?;

        tracing::info!(
            products = products.len(),
            source = "http",
            "Catalog fetched"
        );

        Ok(products)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
