//! Static catalog configuration: the games and categories the hub shows.
//!
//! The configuration is injected by the page before the first render and is
//! never mutated afterwards:
//!
//! ```text
//! {
//!   "categories": [{ "id": "arcade", "label": "Arcade" }],
//!   "games": [{ "id": "asteroid", "title": "Asteroid", "category": "arcade",
//!               "thumb": "https://…/a.png", "url": "https://…/play/", "proxy": true }],
//!   "settings": { "recent_limit": 20 }            // optional
//! }
//! ```

use serde::Deserialize;
use url::Url;

use crate::error::{HubError, Result};
use crate::settings::HubSettings;

/// Id of the pseudo-category that matches every game.
pub const ALL_CATEGORY: &str = "all";

/// A single playable entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumb: String,
    pub url: String,
    /// Embed through the local reverse proxy instead of linking out.
    #[serde(default)]
    pub proxy: bool,
}

impl Game {
    /// Same-origin frame source for a proxied game: `<prefix>/<id><pathname>`.
    pub fn embed_path(&self, prefix: &str) -> Result<String> {
        let pathname = url_pathname(&self.url)?;
        Ok(format!("{}/{}{}", prefix.trim_end_matches('/'), self.id, pathname))
    }

    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A filterable category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// Parsed catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub settings: HubSettings,
}

impl Catalog {
    /// Parse the JSON configuration injected by the page.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::info!(
            games = catalog.games.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn find(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Label for a category id, or `None` when the id is not configured.
    pub fn category_label(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
    }
}

/// Path portion of an absolute URL, as the browser's `URL.pathname` reports
/// it: WHATWG parsing, so backslashes count as separators in special schemes
/// and the path comes back percent-encoded.
fn url_pathname(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|source| HubError::GameUrl {
        url: url.to_string(),
        source,
    })?;
    Ok(parsed.path().to_string())
}
