//! The hub controller: owns the catalog, UI state, overlay, toast slot and
//! persisted store, and exposes one method per user interaction.
//!
//! Methods mutate state and return the side effects the page must carry out
//! (open a window, focus the search box or schedule a toast expiry). The
//! caller re-renders from `view()` afterwards.

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Game};
use crate::hub::modal::{Modal, ModalContent};
use crate::hub::state::UiState;
use crate::hub::storage::{KeyValueStore, load_ids, save_ids};
use crate::hub::toast::{Notice, Toast};
use crate::hub::view::{HubView, build_view};
use crate::settings::HubSettings;

pub const ADDED_TO_FAVORITES: &str = "Added to favorites";
pub const REMOVED_FROM_FAVORITES: &str = "Removed from favorites";

/// Work the page has to do after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open `url` in a new top-level browsing context.
    OpenWindow { url: String },
    /// Move keyboard focus to the search input.
    FocusSearch,
    /// Ask the frame to go fullscreen, via the given API.
    RequestFullscreen(FullscreenApi),
    /// Show a notice and schedule its expiry.
    Toast(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Webkit,
}

/// Fullscreen support reported by the host page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub fullscreen: bool,
    pub webkit_fullscreen: bool,
}

impl Capabilities {
    /// Preferred fullscreen API, or `None` when neither is available.
    pub fn fullscreen_api(self) -> Option<FullscreenApi> {
        if self.fullscreen {
            Some(FullscreenApi::Standard)
        } else if self.webkit_fullscreen {
            Some(FullscreenApi::Webkit)
        } else {
            None
        }
    }
}

/// A key press forwarded from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
}

pub struct HubController<S> {
    catalog: Catalog,
    state: UiState,
    modal: Modal,
    toast: Toast,
    store: S,
}

impl<S: KeyValueStore> HubController<S> {
    /// Build a controller, loading favorites and recent from `store`.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let settings = &catalog.settings;
        let favorites = load_ids(&store, &settings.favorites_key);
        let recent = load_ids(&store, &settings.recent_key);
        let state = UiState::with_history(favorites, recent, settings.recent_limit);
        debug!(
            favorites = state.favorites.len(),
            recent = state.recent.len(),
            "hub state restored"
        );
        Self {
            catalog,
            state,
            modal: Modal::default(),
            toast: Toast::default(),
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &HubSettings {
        &self.catalog.settings
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Hand back the store, e.g. to rebuild around a new catalog.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn visible_games(&self) -> Vec<&Game> {
        self.state.visible_games(&self.catalog)
    }

    pub fn view(&self) -> HubView {
        build_view(&self.catalog, &self.state)
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.to_string();
    }

    pub fn select_category(&mut self, category: &str) {
        debug!(category, "category selected");
        self.state.select_category(category);
    }

    pub fn toggle_favorites_only(&mut self) {
        self.state.toggle_favorites_only();
        debug!(enabled = self.state.favorites_only, "favorites-only toggled");
    }

    /// Open the overlay for `id` and record it as most recent.
    /// Unknown ids are ignored and return `false`.
    pub fn open_game(&mut self, id: &str) -> bool {
        let Some(game) = self.catalog.find(id) else {
            debug!(id, "open ignored: unknown game");
            return false;
        };

        let content = if game.proxy {
            match game.embed_path(self.catalog.settings.proxy_prefix()) {
                Ok(src) => ModalContent::Frame { src },
                Err(err) => {
                    warn!(id, "cannot embed, offering link instead: {err}");
                    ModalContent::External {
                        href: game.url.clone(),
                    }
                }
            }
        } else {
            ModalContent::External {
                href: game.url.clone(),
            }
        };

        self.modal = Modal::Open {
            game_id: game.id.clone(),
            title: game.title.clone(),
            content,
        };
        info!(id, "game opened");

        let limit = self.catalog.settings.recent_limit;
        self.state.push_recent(id, limit);
        let key = self.catalog.settings.recent_key.clone();
        save_ids(&mut self.store, &key, &self.state.recent);
        true
    }

    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            debug!("modal closed");
        }
        self.modal.close();
    }

    /// Flip favorite membership of `id`, persist, and announce it.
    pub fn toggle_favorite(&mut self, id: &str) -> Effect {
        let added = self.state.toggle_favorite(id);
        let key = self.catalog.settings.favorites_key.clone();
        save_ids(&mut self.store, &key, &self.state.favorites);
        let message = if added {
            ADDED_TO_FAVORITES
        } else {
            REMOVED_FROM_FAVORITES
        };
        Effect::Toast(self.show_toast(message))
    }

    /// Ask the host to open the game's own URL. Unknown ids do nothing.
    pub fn open_external(&self, id: &str) -> Option<Effect> {
        match self.catalog.find(id) {
            Some(game) => Some(Effect::OpenWindow {
                url: game.url.clone(),
            }),
            None => {
                debug!(id, "open-external ignored: unknown game");
                None
            }
        }
    }

    pub fn show_toast(&mut self, message: &str) -> Notice {
        let duration = self.catalog.settings.toast_duration_ms;
        self.toast.show(message, duration)
    }

    pub fn expire_toast(&mut self, generation: u64) -> bool {
        self.toast.expire(generation)
    }

    /// Keyboard shortcuts: Ctrl+K focuses search, Escape closes the overlay,
    /// `f` requests fullscreen while the overlay is open.
    pub fn handle_key(&mut self, press: &KeyPress, caps: Capabilities) -> Vec<Effect> {
        let mut effects = Vec::new();
        if press.ctrl && press.key == "k" {
            effects.push(Effect::FocusSearch);
        }
        if press.key == "Escape" {
            self.close_modal();
        }
        if press.key == "f" && self.modal.is_open() {
            match caps.fullscreen_api() {
                Some(api) => effects.push(Effect::RequestFullscreen(api)),
                None => debug!("fullscreen unsupported, ignoring"),
            }
        }
        effects
    }
}
