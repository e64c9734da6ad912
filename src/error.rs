/// Widget-level errors
///
/// Only the storage and catalog layers produce these; the public surface
/// recovers from all of them (empty catalog, empty favorites, unpersisted
/// toggle) so hosts never see a failed render over a failed record.
#[derive(thiserror::Error, Debug)]
pub enum WidgetError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Catalog endpoint error: {0}")]
    Endpoint(String),
}

pub type WidgetResult<T> = Result<T, WidgetError>;
