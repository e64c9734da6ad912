use std::sync::Arc;

use crate::{
    carousel::{Carousel, RenderFrame},
    config::Config,
    models::{Product, ProductId},
    services::{
        catalog::CatalogCache,
        favorites::{FavoriteSet, FavoritesStore},
        sources::{CatalogSource, HttpCatalogSource},
    },
    storage::{FileStore, KeyValueStore},
};

use super::{
    events::{Direction, WidgetEvent, WidgetUpdate},
    session::SessionId,
};

/// The widget controller: single owner of the paging state and favorites
///
/// Construction is async because the catalog must resolve before any paging
/// state exists; after that every event is a synchronous transition, so no
/// event can ever observe a half-initialized widget. Dispatch takes
/// `&mut self`, which is what serializes rapid-fire input.
pub struct Widget {
    session: SessionId,
    carousel: Carousel,
    favorites: FavoriteSet,
    favorites_store: FavoritesStore,
}

impl Widget {
    /// Initializes with the production collaborators: file-backed records
    /// and the configured HTTP feed
    pub async fn init(config: Config) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::from_config(&config));
        let source: Arc<dyn CatalogSource> =
            Arc::new(HttpCatalogSource::new(config.catalog_url.clone()));

        Self::init_with(config, store, source).await
    }

    /// Initializes with injected storage and catalog source
    pub async fn init_with(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn CatalogSource>,
    ) -> Self {
        let session = SessionId::new();

        let favorites_store = FavoritesStore::new(Arc::clone(&store));
        let favorites = favorites_store.load();

        let catalog = CatalogCache::new(store, source);
        let products = catalog.resolve().await;

        tracing::info!(
            session_id = %session,
            products = products.len(),
            favorites = favorites.len(),
            "Widget initialized"
        );

        Self {
            session,
            carousel: Carousel::new(products, config.layout()),
            favorites,
            favorites_store,
        }
    }

    /// Dispatches one host event through the state machine
    pub fn dispatch(&mut self, event: WidgetEvent) -> WidgetUpdate {
        let span = tracing::debug_span!("widget_event", session_id = %self.session);
        let _guard = span.enter();

        match event {
            WidgetEvent::LayoutChanged(viewport) => {
                self.carousel.handle_resize(viewport);
                WidgetUpdate::Frame(self.carousel.frame())
            }
            WidgetEvent::Navigate(direction) => {
                let moved = match direction {
                    Direction::Prev => self.carousel.prev(),
                    Direction::Next => self.carousel.next(),
                };

                if moved {
                    WidgetUpdate::Frame(self.carousel.frame())
                } else {
                    tracing::debug!(direction = ?direction, "Navigation at boundary ignored");
                    WidgetUpdate::Ignored
                }
            }
            WidgetEvent::ToggleFavorite(id) => {
                let change = self.favorites_store.toggle(&mut self.favorites, &id);
                WidgetUpdate::Favorite(change)
            }
        }
    }

    /// Current frame, for an adapter repainting outside of dispatch
    pub fn frame(&self) -> RenderFrame {
        self.carousel.frame()
    }

    /// The session's full catalog
    pub fn products(&self) -> &[Product] {
        self.carousel.items()
    }

    /// The currently visible slice of the catalog
    pub fn visible(&self) -> &[Product] {
        self.carousel.visible()
    }

    /// Favorite membership, for initial card styling
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// This instance's log-correlation id
    pub fn session(&self) -> SessionId {
        self.session
    }
}
