use std::sync::Arc;

use crate::{
    models::{CatalogRecord, Product},
    services::sources::CatalogSource,
    storage::{KeyValueStore, StoreKey},
};

/// Catalog resolution: the durable record first, the feed once on a miss
///
/// A recommendation strip must never take the host page down with it, so
/// `resolve` always produces a product list. Empty is the floor: no record,
/// no reachable feed, corrupt data all land there. A stored record is
/// served as-is with no TTL; only a missing record triggers a fetch.
pub struct CatalogCache {
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn CatalogSource>,
}

impl CatalogCache {
    pub fn new(store: Arc<dyn KeyValueStore>, source: Arc<dyn CatalogSource>) -> Self {
        Self { store, source }
    }

    /// Resolves the session's product list
    pub async fn resolve(&self) -> Vec<Product> {
        if let Some(products) = self.read_record() {
            tracing::debug!(products = products.len(), "Catalog cache hit");
            return products;
        }

        tracing::debug!("Catalog cache miss");

        match self.source.fetch_catalog().await {
            Ok(products) => {
                self.store_record(&products);
                products
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source = self.source.name(),
                    "Catalog fetch failed, starting with an empty catalog"
                );
                Vec::new()
            }
        }
    }

    /// Reads the durable catalog record; corrupt or unreadable data counts
    /// as absent
    fn read_record(&self) -> Option<Vec<Product>> {
        let raw = match self.store.get(&StoreKey::Catalog) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog record unreadable");
                return None;
            }
        };

        match serde_json::from_str::<CatalogRecord>(&raw) {
            Ok(record) => Some(record.products),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog record corrupt, refetching");
                None
            }
        }
    }

    /// Best-effort durable write of a freshly fetched list
    ///
    /// A failed write only costs the next session a refetch, so it is
    /// logged and swallowed.
    fn store_record(&self, products: &[Product]) {
        let record = CatalogRecord::new(products.to_vec());

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog record serialization failed");
                return;
            }
        };

        if let Err(e) = self.store.put(&StoreKey::Catalog, &json) {
            tracing::warn!(error = %e, "Catalog record write failed, serving in-memory only");
        } else {
            tracing::debug!(products = products.len(), "Catalog record stored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use crate::models::ProductId;
    use crate::services::sources::MockCatalogSource;
    use crate::storage::kv::MockKeyValueStore;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: 100.0,
            img: None,
            url: None,
        }
    }

    fn record_json(products: Vec<Product>) -> String {
        serde_json::to_string(&CatalogRecord::new(products)).unwrap()
    }

    #[tokio::test]
    async fn test_cached_record_skips_the_feed() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .withf(|key| matches!(key, StoreKey::Catalog))
            .returning(|_| Ok(Some(record_json(vec![product("1", "Shirt")]))));
        store.expect_put().never();

        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().never();

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert_eq!(products, vec![product("1", "Shirt")]);
    }

    #[tokio::test]
    async fn test_miss_fetches_and_stores() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_put()
            .withf(|key, value| {
                matches!(key, StoreKey::Catalog)
                    && value.contains(r#""name":"Shirt""#)
                    && value.contains("fetched_at")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .times(1)
            .returning(|| Ok(vec![product("1", "Shirt")]));

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert_eq!(products, vec![product("1", "Shirt")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_catalog() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_put().never();

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .returning(|| Err(WidgetError::Endpoint("status 500".to_string())));
        source.expect_name().return_const("stub");

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_record_triggers_refetch() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));
        store.expect_put().times(1).returning(|_, _| Ok(()));

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .times(1)
            .returning(|| Ok(vec![product("2", "Tee")]));

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert_eq!(products, vec![product("2", "Tee")]);
    }

    #[tokio::test]
    async fn test_unreadable_store_counts_as_miss() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(WidgetError::Storage(std::io::Error::other("denied"))));
        store.expect_put().times(1).returning(|_, _| Ok(()));

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .times(1)
            .returning(|| Ok(vec![product("3", "Hat")]));

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert_eq!(products, vec![product("3", "Hat")]);
    }

    #[tokio::test]
    async fn test_failed_write_still_serves_fetched_products() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_put()
            .returning(|_, _| Err(WidgetError::Storage(std::io::Error::other("quota"))));

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .returning(|| Ok(vec![product("4", "Sock")]));

        let cache = CatalogCache::new(Arc::new(store), Arc::new(source));
        let products = cache.resolve().await;

        assert_eq!(products, vec![product("4", "Sock")]);
    }
}
