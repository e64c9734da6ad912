use crate::models::Product;

/// Cards per page until the first layout notification arrives
pub const DEFAULT_ITEMS_PER_VIEW: usize = 4;

/// Fixed layout constants the paging arithmetic runs on
///
/// Cards never resize; the carousel responds to width changes by showing
/// fewer or more fixed-width cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Card width in pixels
    pub card_width: u32,
    /// Horizontal margin between adjacent cards in pixels
    pub card_margin: u32,
    /// Navigation controls and container padding, subtracted from the
    /// container width before fitting cards
    pub chrome_padding: u32,
    /// Window width at or below which paging is one card at a time
    pub narrow_viewport: u32,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            card_width: 240,
            card_margin: 20,
            chrome_padding: 80,
            narrow_viewport: 480,
        }
    }
}

impl LayoutSpec {
    /// Distance between the left edges of adjacent cards
    pub fn stride(&self) -> u32 {
        self.card_width + self.card_margin
    }

    /// How many cards fit the container, floored to at least one
    ///
    /// At or below the narrow-viewport width the answer is one card
    /// regardless of the arithmetic; the mobile breakpoint outranks fit.
    pub fn items_per_view(&self, viewport: Viewport) -> usize {
        if viewport.window_width <= self.narrow_viewport {
            return 1;
        }

        let available = viewport.container_width.saturating_sub(self.chrome_padding);
        (available / self.stride().max(1)).max(1) as usize
    }
}

/// A layout notification: the two widths the paging algorithm reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Full window width; drives the narrow breakpoint
    pub window_width: u32,
    /// Width available to the carousel container
    pub container_width: u32,
}

impl Viewport {
    pub fn new(window_width: u32, container_width: u32) -> Self {
        Self {
            window_width,
            container_width,
        }
    }
}

/// Everything a rendering adapter needs to repaint after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    /// Index of the left-most visible item
    pub position: usize,
    /// Cards per page
    pub items_per_view: usize,
    /// Whether the previous control is active
    pub prev_enabled: bool,
    /// Whether the next control is active
    pub next_enabled: bool,
    /// Horizontal translation of the card strip, in pixels
    pub offset: u32,
}

/// Paging state over a fixed product list
///
/// There is no page enumeration, just a window described by `position` and
/// `items_per_view`. Every transition re-establishes
/// `position <= len - items_per_view` (saturating at zero), which is what
/// keeps the window free of trailing gaps after any resize.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    items: Vec<Product>,
    layout: LayoutSpec,
    items_per_view: usize,
    position: usize,
}

impl Carousel {
    /// Creates a carousel over the session's product list, parked at the
    /// left edge
    pub fn new(items: Vec<Product>, layout: LayoutSpec) -> Self {
        Self {
            items,
            layout,
            items_per_view: DEFAULT_ITEMS_PER_VIEW,
            position: 0,
        }
    }

    /// Recomputes the page size for new widths and re-clamps the window
    ///
    /// Deterministic in its inputs: the same widths over the same items
    /// always produce the same page size and position, so repeated
    /// notifications are idempotent. Clamping only ever moves the window
    /// left; growing the viewport never jumps it right.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.items_per_view = self.layout.items_per_view(viewport);
        self.clamp_position();
    }

    /// Steps one item back; `false` at the left boundary
    pub fn prev(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Steps one item forward; `false` at the right boundary
    pub fn next(&mut self) -> bool {
        if self.position >= self.max_position() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Largest valid position for the current page size
    pub fn max_position(&self) -> usize {
        self.items.len().saturating_sub(self.items_per_view)
    }

    fn clamp_position(&mut self) {
        let max = self.max_position();
        if self.position > max {
            self.position = max;
        }
    }

    /// The frame a rendering adapter applies
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            position: self.position,
            items_per_view: self.items_per_view,
            prev_enabled: self.position > 0,
            next_enabled: self.position < self.max_position(),
            offset: self.position as u32 * self.layout.stride(),
        }
    }

    /// The currently visible slice of the catalog
    pub fn visible(&self) -> &[Product] {
        let end = (self.position + self.items_per_view).min(self.items.len());
        &self.items[self.position..end]
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }
}
