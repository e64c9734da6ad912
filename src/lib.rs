//! Core engine for a "you may also like" product carousel.
//!
//! The crate owns everything about the widget except pixels: resolving the
//! product catalog (durable record first, HTTP feed once on a miss),
//! keeping favorites durable across visits, and paging a strip of
//! fixed-width cards through whatever width the host reports. Rendering,
//! input capture, and DOM or UI-toolkit concerns stay in the host
//! adapter, which feeds [`WidgetEvent`]s in and applies the returned
//! [`WidgetUpdate`]s.
//!
//! ```no_run
//! use alsolike::{Config, Direction, Viewport, Widget, WidgetEvent};
//!
//! # async fn run() {
//! let mut widget = Widget::init(Config::default()).await;
//!
//! widget.dispatch(WidgetEvent::LayoutChanged(Viewport::new(1200, 1180)));
//! widget.dispatch(WidgetEvent::Navigate(Direction::Next));
//! # }
//! ```
//!
//! Failures degrade instead of propagating: an unreachable feed means an
//! empty carousel, a corrupt record means a fresh one, a failed write
//! means the change lives only as long as the session.

pub mod carousel;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod widget;

pub use carousel::{Carousel, LayoutSpec, RenderFrame, Viewport, DEFAULT_ITEMS_PER_VIEW};
pub use config::Config;
pub use error::{WidgetError, WidgetResult};
pub use models::{CatalogRecord, Product, ProductId};
pub use services::catalog::CatalogCache;
pub use services::favorites::{FavoriteChange, FavoriteSet, FavoritesStore};
pub use services::sources::{CatalogSource, HttpCatalogSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreKey};
pub use widget::{Direction, SessionId, Widget, WidgetEvent, WidgetUpdate};
