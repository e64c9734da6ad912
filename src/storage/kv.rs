use std::fmt::Display;

use crate::error::WidgetResult;

/// The widget's two durable records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Serialized favorite-product id list
    Favorites,
    /// Serialized catalog record
    Catalog,
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::Favorites => write!(f, "favorite_products"),
            StoreKey::Catalog => write!(f, "products"),
        }
    }
}

/// Durable key-value storage for the widget's records
///
/// Reads and writes are whole-record: a `put` replaces whatever was stored
/// under the key. Calls are synchronous because they sit on the favorites
/// toggle path, so implementations must be cheap.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves a record, `None` if the key has never been written
    fn get(&self, key: &StoreKey) -> WidgetResult<Option<String>>;

    /// Replaces the record under `key` in full
    fn put(&self, key: &StoreKey, value: &str) -> WidgetResult<()>;
}
