use std::path::PathBuf;

use serde::Deserialize;

use crate::carousel::LayoutSpec;

/// Widget configuration loaded from environment variables
///
/// Every field has a default, so hosts that embed the widget
/// programmatically can start from `Config::default()` and override
/// individual fields with struct update syntax.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Product catalog feed URL
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Directory for the durable favorites and catalog records
    /// (platform-local data dir when unset)
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Card width in pixels
    #[serde(default = "default_card_width")]
    pub card_width: u32,

    /// Horizontal margin between adjacent cards in pixels
    #[serde(default = "default_card_margin")]
    pub card_margin: u32,

    /// Navigation controls and container padding, subtracted from the
    /// container width before computing how many cards fit
    #[serde(default = "default_chrome_padding")]
    pub chrome_padding: u32,

    /// Window width at or below which the carousel pages one card at a time
    #[serde(default = "default_narrow_viewport")]
    pub narrow_viewport: u32,
}

fn default_catalog_url() -> String {
    "https://gist.githubusercontent.com/sevindi/5765c5812bbc8238a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f372/products.json".to_string()
}

fn default_card_width() -> u32 {
    240
}

fn default_card_margin() -> u32 {
    20
}

fn default_chrome_padding() -> u32 {
    80
}

fn default_narrow_viewport() -> u32 {
    480
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The layout constants the carousel pages with
    pub fn layout(&self) -> LayoutSpec {
        LayoutSpec {
            card_width: self.card_width,
            card_margin: self.card_margin,
            chrome_padding: self.chrome_padding,
            narrow_viewport: self.narrow_viewport,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            storage_dir: None,
            card_width: default_card_width(),
            card_margin: default_card_margin(),
            chrome_padding: default_chrome_padding(),
            narrow_viewport: default_narrow_viewport(),
        }
    }
}
