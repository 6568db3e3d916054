//! `/api/hub/games/{id}/*` routes: per-card actions.

use crate::hub::session::with_hub;
use crate::render::{render_effect, render_modal, render_view, render_view_oob};
use crate::routes::mutate;

// ── POST /api/hub/games/{id}/open ──────────────────────────────────

/// Opens the overlay (primary swap on `#modal`) and refreshes the grid
/// out-of-band for the new recent count. Unknown ids leave the overlay as is.
pub fn handle_open_post(id: &str) -> String {
    mutate(|hub| {
        let opened = hub.open_game(id);
        let mut html = render_modal(hub.modal(), false);
        if opened {
            html.push_str(&render_view_oob(&hub.view()));
        }
        html
    })
}

// ── POST /api/hub/games/{id}/favorite ──────────────────────────────

/// Toggles membership, re-renders the grid and shows the confirmation toast.
pub fn handle_favorite_post(id: &str) -> String {
    mutate(|hub| {
        let effect = hub.toggle_favorite(id);
        let mut html = render_view(&hub.view());
        html.push_str(&render_effect(&effect));
        html
    })
}

// ── POST /api/hub/games/{id}/external ──────────────────────────────

pub fn handle_external_post(id: &str) -> String {
    with_hub(|hub| {
        hub.open_external(id)
            .as_ref()
            .map(render_effect)
            .unwrap_or_default()
    })
}
