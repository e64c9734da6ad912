use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for a product in the catalog feed
///
/// Feeds are inconsistent about id shape (some emit numbers, some strings),
/// so ids are normalized to strings on the way in and compared as strings
/// everywhere else. The favorites record stores these verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(id) => ProductId(id.to_string()),
            Raw::Text(id) => ProductId(id),
        })
    }
}

/// A product shown in the carousel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the feed's currency
    pub price: f64,
    #[serde(default)]
    pub img: Option<String>,
    /// Click-through target for the product card
    #[serde(default)]
    pub url: Option<String>,
}

/// Durable catalog record: the fetched product list plus when it was fetched
///
/// `fetched_at` is bookkeeping only. A stored record is served as-is for
/// every later session; nothing expires or refreshes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub products: Vec<Product>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogRecord {
    /// Stamps a freshly fetched product list
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("1");
        assert_eq!(format!("{}", id), "1");
    }

    #[test]
    fn test_product_id_from_numeric_json() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new("42"));
    }

    #[test]
    fn test_product_id_from_string_json() {
        let id: ProductId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id, ProductId::new("42"));
    }

    #[test]
    fn test_product_id_serializes_transparent() {
        let id = ProductId::new("7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn test_numeric_and_string_ids_compare_equal() {
        let numeric: ProductId = serde_json::from_str("7").unwrap();
        let text: ProductId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(numeric, text);
    }

    #[test]
    fn test_product_from_feed_json() {
        let json = r#"{
            "id": 1,
            "name": "Patterned Shirt",
            "url": "https://example.com/products/1",
            "img": "https://example.com/images/1.jpg",
            "price": 449.99
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.name, "Patterned Shirt");
        assert_eq!(product.price, 449.99);
        assert_eq!(product.img.as_deref(), Some("https://example.com/images/1.jpg"));
        assert_eq!(product.url.as_deref(), Some("https://example.com/products/1"));
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let json = r#"{"id": "2", "name": "Plain Tee", "price": 99.5}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("2"));
        assert_eq!(product.img, None);
        assert_eq!(product.url, None);
    }

    #[test]
    fn test_catalog_record_roundtrip() {
        let record = CatalogRecord::new(vec![Product {
            id: ProductId::new("1"),
            name: "Patterned Shirt".to_string(),
            price: 449.99,
            img: None,
            url: None,
        }]);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CatalogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
