/// Catalog feed abstraction
///
/// The widget reads its product list from exactly one place per session, so
/// the seam is a single fetch. Production uses the HTTP feed; tests inject
/// stub sources for deterministic catalogs and failure cases.
use crate::{error::WidgetResult, models::Product};

pub mod http;

pub use http::HttpCatalogSource;

/// Trait for catalog feed sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full product list from the feed
    ///
    /// Called at most once per widget session, and only when no durable
    /// catalog record exists yet.
    async fn fetch_catalog(&self) -> WidgetResult<Vec<Product>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
