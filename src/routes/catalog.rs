//! Startup routes: catalog injection and storage restore.
//!
//! The page calls `/api/hub/catalog` with the static configuration, then
//! `/api/hub/restore` with whatever its localStorage holds. Either order
//! works; both answer with a full render.

use tracing::warn;

use crate::catalog::Catalog;
use crate::hub::session::{install_catalog, restore_storage, with_hub};
use crate::render::{error_fragment, render_view};
use crate::routes::util::{get_param, parse_form_body};

// ── POST /api/hub/catalog ──────────────────────────────────────────

/// Body: the raw catalog JSON. A malformed body keeps the current catalog.
pub fn handle_catalog_post(body: &str) -> String {
    match Catalog::from_json(body) {
        Ok(catalog) => {
            install_catalog(catalog);
            with_hub(|hub| render_view(&hub.view()))
        }
        Err(err) => {
            warn!("rejected catalog: {err}");
            error_fragment(&err.to_string())
        }
    }
}

// ── POST /api/hub/restore ──────────────────────────────────────────

/// Body: `fav={json}&recent={json}`, the raw localStorage values. Missing
/// params are left unseeded and read as empty lists.
pub fn handle_restore_post(body: &str) -> String {
    let params = parse_form_body(body);
    let (fav_key, recent_key) = with_hub(|hub| {
        let settings = hub.settings();
        (settings.favorites_key.clone(), settings.recent_key.clone())
    });

    let mut entries = Vec::with_capacity(2);
    if let Some(fav) = get_param(&params, "fav") {
        entries.push((fav_key.as_str(), fav));
    }
    if let Some(recent) = get_param(&params, "recent") {
        entries.push((recent_key.as_str(), recent));
    }
    restore_storage(&entries);

    with_hub(|hub| render_view(&hub.view()))
}
