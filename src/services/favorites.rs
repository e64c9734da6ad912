use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    models::ProductId,
    storage::{KeyValueStore, StoreKey},
};

/// The set of favorited product ids
///
/// Backed by a Vec: catalogs are tens of items, and the durable record is
/// the plain JSON id array. Insertion order is preserved, duplicates are
/// structurally impossible through `toggle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test; used for card styling, never mutates
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership and reports whether `id` is a favorite afterwards
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        match self.ids.iter().position(|fav| fav == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id.clone());
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Outcome of a favorite toggle
///
/// `persisted` reports the durable write; `favored` holds for the session
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChange {
    pub id: ProductId,
    pub favored: bool,
    pub persisted: bool,
}

/// Durable favorites persistence
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the favorites record; absent, unreadable, or corrupt data all
    /// read as an empty set
    pub fn load(&self) -> FavoriteSet {
        let raw = match self.store.get(&StoreKey::Favorites) {
            Ok(Some(value)) => value,
            Ok(None) => return FavoriteSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Favorites record unreadable, starting empty");
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "Favorites record corrupt, starting empty");
                FavoriteSet::new()
            }
        }
    }

    /// Flips membership and writes the whole set through to durable storage
    ///
    /// The in-memory set is updated before the write, so a storage failure
    /// costs durability, not the toggle itself.
    pub fn toggle(&self, set: &mut FavoriteSet, id: &ProductId) -> FavoriteChange {
        let favored = set.toggle(id);
        let persisted = self.persist(set);

        tracing::debug!(id = %id, favored, persisted, "Favorite toggled");

        FavoriteChange {
            id: id.clone(),
            favored,
            persisted,
        }
    }

    /// Whole-record write; returns whether it landed
    fn persist(&self, set: &FavoriteSet) -> bool {
        let json = match serde_json::to_string(set) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Favorites serialization failed");
                return false;
            }
        };

        match self.store.put(&StoreKey::Favorites, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Favorites write failed, keeping in-memory set");
                false
            }
        }
    }
}
