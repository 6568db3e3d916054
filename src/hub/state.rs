//! UI state owned by the hub controller.
//!
//! `category`, `query` and `favorites_only` live for the session only.
//! `favorites` and `recent` are mirrored to persisted storage by the
//! controller after every change.

use crate::catalog::{ALL_CATEGORY, Catalog, Game};

/// Filter and history state.
///
/// Invariants: `favorites` holds no duplicate ids; `recent` holds no duplicate
/// ids, is most-recent-first, and never exceeds the configured limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub category: String,
    pub query: String,
    pub favorites_only: bool,
    pub favorites: Vec<String>,
    pub recent: Vec<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            query: String::new(),
            favorites_only: false,
            favorites: Vec::new(),
            recent: Vec::new(),
        }
    }
}

impl UiState {
    /// Fresh session state around previously persisted lists.
    pub fn with_history(favorites: Vec<String>, recent: Vec<String>, recent_limit: usize) -> Self {
        let mut state = Self {
            favorites: dedup_keep_first(favorites),
            recent: dedup_keep_first(recent),
            ..Self::default()
        };
        state.recent.truncate(recent_limit);
        state
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Whether a game passes all three active predicates.
    pub fn matches(&self, game: &Game) -> bool {
        let category_ok = self.category == ALL_CATEGORY || game.category == self.category;
        let favorite_ok = !self.favorites_only || self.is_favorite(&game.id);
        category_ok && favorite_ok && game.title_matches(&self.query)
    }

    /// Games visible under the current filters, in catalog order.
    pub fn visible_games<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Game> {
        catalog.games.iter().filter(|g| self.matches(g)).collect()
    }

    /// Add or remove `id` from favorites. Returns `true` when it was added.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        match self.favorites.iter().position(|f| f == id) {
            Some(idx) => {
                self.favorites.remove(idx);
                false
            }
            None => {
                self.favorites.push(id.to_string());
                true
            }
        }
    }

    /// Move `id` to the front of the recent list, capped at `limit`.
    pub fn push_recent(&mut self, id: &str, limit: usize) {
        self.recent.retain(|r| r != id);
        self.recent.insert(0, id.to_string());
        self.recent.truncate(limit);
    }

    /// Choosing a category always leaves favorites-only mode.
    pub fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.favorites_only = false;
    }

    /// Flip favorites-only mode. Turning it off resets the category to
    /// "all"; the category active before it was turned on is not restored.
    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
        if !self.favorites_only {
            self.category = ALL_CATEGORY.to_string();
        }
    }
}

fn dedup_keep_first(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
