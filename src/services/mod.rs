pub mod catalog;
pub mod favorites;
pub mod sources;

pub use catalog::CatalogCache;
pub use favorites::FavoriteChange;
pub use favorites::FavoriteSet;
pub use favorites::FavoritesStore;
