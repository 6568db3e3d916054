//! Pure mapping from catalog + UI state to a view model.
//!
//! Nothing here touches markup; `crate::render` turns these structs into
//! HTML fragments.

use crate::catalog::{ALL_CATEGORY, Catalog};
use crate::hub::state::UiState;

/// Counters shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub favorites: usize,
    pub recent: usize,
}

/// Section heading plus the `(N)` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub label: String,
    pub count: usize,
}

impl Header {
    pub fn count_suffix(&self) -> String {
        format!("({})", self.count)
    }
}

/// One filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumb: String,
    pub favorite: bool,
}

/// Why the grid is empty; each case has its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoFavorites,
    NoMatches,
}

impl EmptyState {
    pub fn title(self) -> &'static str {
        match self {
            EmptyState::NoFavorites => "No favorites yet",
            EmptyState::NoMatches => "No games found",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            EmptyState::NoFavorites => "Star games to add them here",
            EmptyState::NoMatches => "Try different filters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBody {
    Empty(EmptyState),
    Cards(Vec<CardView>),
}

/// Everything a full render needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubView {
    pub stats: Stats,
    pub header: Header,
    pub filters: Vec<FilterChip>,
    pub favorites_only: bool,
    pub grid: GridBody,
}

/// Heading for the current filter selection.
pub fn header_label(catalog: &Catalog, state: &UiState) -> String {
    if state.favorites_only {
        "Favorites".to_string()
    } else if state.category == ALL_CATEGORY {
        "All Games".to_string()
    } else {
        catalog
            .category_label(&state.category)
            .unwrap_or(state.category.as_str())
            .to_string()
    }
}

/// "All" followed by every configured category. A chip is active only
/// outside favorites-only mode and when it is the selected category.
pub fn filter_chips(catalog: &Catalog, state: &UiState) -> Vec<FilterChip> {
    let is_active = |id: &str| !state.favorites_only && state.category == id;
    std::iter::once(FilterChip {
        id: ALL_CATEGORY.to_string(),
        label: "All".to_string(),
        active: is_active(ALL_CATEGORY),
    })
    .chain(catalog.categories.iter().map(|c| FilterChip {
        id: c.id.clone(),
        label: c.label.clone(),
        active: is_active(&c.id),
    }))
    .collect()
}

pub fn build_view(catalog: &Catalog, state: &UiState) -> HubView {
    let visible = state.visible_games(catalog);

    let grid = if visible.is_empty() {
        GridBody::Empty(if state.favorites_only {
            EmptyState::NoFavorites
        } else {
            EmptyState::NoMatches
        })
    } else {
        GridBody::Cards(
            visible
                .iter()
                .map(|g| CardView {
                    id: g.id.clone(),
                    title: g.title.clone(),
                    category: g.category.clone(),
                    thumb: g.thumb.clone(),
                    favorite: state.is_favorite(&g.id),
                })
                .collect(),
        )
    };

    HubView {
        stats: Stats {
            total: catalog.games.len(),
            favorites: state.favorites.len(),
            recent: state.recent.len(),
        },
        header: Header {
            label: header_label(catalog, state),
            count: visible.len(),
        },
        filters: filter_chips(catalog, state),
        favorites_only: state.favorites_only,
        grid,
    }
}
