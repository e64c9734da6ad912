use crate::{
    carousel::{RenderFrame, Viewport},
    models::ProductId,
    services::favorites::FavoriteChange,
};

/// Paging direction for a navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Discrete intents a host feeds into the widget
///
/// Hosts translate their own input layer (DOM events, key presses, test
/// scripts) into these; the widget neither knows nor cares where they
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The window or container was measured or re-measured, including the
    /// initial mount
    LayoutChanged(Viewport),
    /// A navigation control was pressed
    Navigate(Direction),
    /// The heart icon on a product card was pressed
    ToggleFavorite(ProductId),
}

/// What dispatching an event produced
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetUpdate {
    /// Paging state changed; repaint from this frame
    Frame(RenderFrame),
    /// Favorite membership flipped; restyle that card
    Favorite(FavoriteChange),
    /// The event changed nothing (boundary navigation)
    Ignored,
}
