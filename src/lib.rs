//! Aphelion gaming hub: in-browser WASM controller.
//!
//! Exports `handle_request(method, path, query, body)` for the worker bridge
//! to call. Uses `matchit` for URL routing, the same router engine that
//! powers Axum. Every answer is an HTML fragment for an HTMX swap, with any
//! localStorage writes appended as a script.
//!
//! The catalog, filter state, overlay and toast logic live in `hub` and have
//! no dependency on the browser; `render` maps their view model to markup.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod error;
pub mod hub;
pub mod render;
pub mod routes;
pub mod settings;

use routes::util::decode_path_segment;

/// Process an HTTP-like request and return an HTML fragment.
///
/// # Arguments
/// * `method`: HTTP method (`"GET"` or `"POST"`)
/// * `path`:   URL path (e.g. `"/api/hub/games/asteroid/open"`)
/// * `query`:  Query string, with or without the leading `?`
/// * `body`:   Request body (form data, or raw JSON for `/api/hub/catalog`)
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    // Startup
    router.insert("/api/hub/catalog", "catalog").ok();
    router.insert("/api/hub/restore", "restore").ok();

    // Filtering and rendering
    router.insert("/api/hub/view", "view").ok();
    router.insert("/api/hub/filters", "filters").ok();
    router.insert("/api/hub/search", "search").ok();
    router.insert("/api/hub/category", "category").ok();
    router.insert("/api/hub/favorites-only", "favorites_only").ok();

    // Per-game actions
    router.insert("/api/hub/games/{id}/open", "game_open").ok();
    router.insert("/api/hub/games/{id}/favorite", "game_favorite").ok();
    router.insert("/api/hub/games/{id}/external", "game_external").ok();

    // Overlay, keyboard, notices
    router.insert("/api/hub/modal/close", "modal_close").ok();
    router.insert("/api/hub/key", "key").ok();
    router.insert("/api/hub/toast/expire", "toast_expire").ok();

    let Ok(matched) = router.at(path) else {
        return not_found();
    };
    let id = matched.params.get("id").map(decode_path_segment).unwrap_or_default();

    match (*matched.value, method) {
        ("catalog", "POST") => routes::catalog::handle_catalog_post(body),
        ("restore", "POST") => routes::catalog::handle_restore_post(body),

        ("view", "GET") => routes::view::handle_view_get(query),
        ("filters", "GET") => routes::view::handle_filters_get(query),
        ("search", "POST") => routes::view::handle_search_post(body),
        ("category", "POST") => routes::view::handle_category_post(body),
        ("favorites_only", "POST") => routes::view::handle_favorites_only_post(body),

        ("game_open", "POST") => routes::games::handle_open_post(&id),
        ("game_favorite", "POST") => routes::games::handle_favorite_post(&id),
        ("game_external", "POST") => routes::games::handle_external_post(&id),

        ("modal_close", "POST") => routes::overlay::handle_close_post(body),
        ("key", "POST") => routes::overlay::handle_key_post(body),
        ("toast_expire", "POST") => routes::overlay::handle_toast_expire_post(body),

        _ => method_not_allowed(),
    }
}

fn not_found() -> String {
    render::error_fragment("404 — route not found")
}

fn method_not_allowed() -> String {
    render::error_fragment("405 — method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::session::{reset_hub, with_hub};

    const CONFIG: &str = r#"{
        "categories": [{"id":"arcade","label":"Arcade"},{"id":"puzzle","label":"Puzzle"}],
        "games": [
            {"id":"a","title":"Asteroid","category":"arcade","thumb":"a.png","url":"https://a.test/play/","proxy":true},
            {"id":"b","title":"Blocks","category":"puzzle","thumb":"b.png","url":"https://b.test/"},
            {"id":"c","title":"Comet Run","category":"arcade","thumb":"c.png","url":"https://c.test/"}
        ]
    }"#;

    fn boot() {
        reset_hub();
        handle_request("POST", "/api/hub/catalog", "", CONFIG);
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        let html = handle_request("GET", "/api/hub/search", "", "");
        assert!(html.contains("405"));
        let html = handle_request("GET", "/api/hub/games/a/open", "", "");
        assert!(html.contains("405"));
    }

    #[test]
    fn routes_view_after_boot() {
        boot();
        let html = handle_request("GET", "/api/hub/view", "", "");
        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains(">All Games</h2>"));
        reset_hub();
    }

    #[test]
    fn routes_game_actions_by_path_param() {
        boot();
        let html = handle_request("POST", "/api/hub/games/a/open", "", "");
        assert!(html.contains(r#"src="/g/a/play/""#));

        let html = handle_request("POST", "/api/hub/games/b/favorite", "", "");
        assert!(html.contains("Added to favorites"));

        let html = handle_request("POST", "/api/hub/games/c/external", "", "");
        assert!(html.contains("https://c.test/"));
        reset_hub();
    }

    /// The `hx-post` path the rendered card uses to open `id`.
    fn card_open_path(html: &str, id: &str) -> String {
        let marker = format!(r#"<article class="card" data-id="{id}" hx-post=""#);
        let start = html.find(&marker).expect("card rendered") + marker.len();
        let len = html[start..].find('"').expect("closing quote");
        html[start..start + len].to_string()
    }

    #[test]
    fn rendered_card_paths_round_trip_awkward_ids() {
        reset_hub();
        let config = r#"{
            "categories": [],
            "games": [
                {"id":"c++","title":"C Plus","category":"x","thumb":"","url":"https://c.test/"},
                {"id":"a/b","title":"Slash","category":"x","thumb":"","url":"https://ab.test/"},
                {"id":"50%off","title":"Sale","category":"x","thumb":"","url":"https://s.test/"},
                {"id":"two words","title":"Words","category":"x","thumb":"","url":"https://w.test/"}
            ]
        }"#;
        let html = handle_request("POST", "/api/hub/catalog", "", config);

        for id in ["c++", "a/b", "50%off", "two words"] {
            let open = card_open_path(&html, id);
            let answer = handle_request("POST", &open, "", "");
            assert!(answer.contains("modal open"), "{id} via {open}");

            let favorite = open.replace("/open", "/favorite");
            let answer = handle_request("POST", &favorite, "", "");
            assert!(answer.contains("Added to favorites"), "{id} via {favorite}");
        }

        with_hub(|hub| {
            assert_eq!(hub.state().recent, ["two words", "50%off", "a/b", "c++"]);
            assert_eq!(hub.state().favorites, ["c++", "a/b", "50%off", "two words"]);
        });
        reset_hub();
    }

    #[test]
    fn query_then_favorites_only_scenario() {
        boot();
        let html = handle_request("POST", "/api/hub/search", "", "q=ast");
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(r#"data-id="a""#));

        handle_request("POST", "/api/hub/games/b/favorite", "", "");
        handle_request("POST", "/api/hub/favorites-only", "", "");
        let html = handle_request("POST", "/api/hub/search", "", "q=");
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(r#"data-id="b""#));
        assert!(html.contains(">Favorites</h2>"));
        reset_hub();
    }

    #[test]
    fn recent_history_through_routes() {
        boot();
        for id in ["a", "b", "a", "c"] {
            handle_request("POST", &format!("/api/hub/games/{id}/open"), "", "");
            handle_request("POST", "/api/hub/modal/close", "", "");
        }
        with_hub(|hub| assert_eq!(hub.state().recent, ["c", "a", "b"]));
        reset_hub();
    }

    #[test]
    fn restore_then_render_counts() {
        boot();
        let html = handle_request(
            "POST",
            "/api/hub/restore",
            "",
            "fav=%5B%22a%22%2C%22c%22%5D&recent=%5B%22b%22%5D",
        );
        assert!(html.contains(r#"<span id="stat-fav" hx-swap-oob="true">2</span>"#));
        assert!(html.contains(r#"<span id="stat-recent" hx-swap-oob="true">1</span>"#));
        reset_hub();
    }
}
