//! `/api/hub/view`, `/api/hub/filters` and the filter-changing routes.
//!
//! Every filter change answers with a full render targeting `#grid`.

use crate::catalog::ALL_CATEGORY;
use crate::hub::session::with_hub;
use crate::render::{render_filters, render_view};
use crate::routes::mutate;
use crate::routes::util::{get_param, parse_form_body};

// ── GET /api/hub/view ──────────────────────────────────────────────

pub fn handle_view_get(_query: &str) -> String {
    with_hub(|hub| render_view(&hub.view()))
}

// ── GET /api/hub/filters ───────────────────────────────────────────

/// Filter bar for the initial page load.
pub fn handle_filters_get(_query: &str) -> String {
    with_hub(|hub| render_filters(&hub.view().filters, false))
}

// ── POST /api/hub/search ───────────────────────────────────────────

/// Body: `q={text}`. Sent on every keystroke.
pub fn handle_search_post(body: &str) -> String {
    let params = parse_form_body(body);
    let query = get_param(&params, "q").unwrap_or("");
    mutate(|hub| {
        hub.set_query(query);
        render_view(&hub.view())
    })
}

// ── POST /api/hub/category ─────────────────────────────────────────

/// Body: `cat={id}`. A missing id selects "all".
pub fn handle_category_post(body: &str) -> String {
    let params = parse_form_body(body);
    let category = match get_param(&params, "cat") {
        Some(c) if !c.is_empty() => c,
        _ => ALL_CATEGORY,
    };
    mutate(|hub| {
        hub.select_category(category);
        render_view(&hub.view())
    })
}

// ── POST /api/hub/favorites-only ───────────────────────────────────

pub fn handle_favorites_only_post(_body: &str) -> String {
    mutate(|hub| {
        hub.toggle_favorites_only();
        render_view(&hub.view())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::hub::session::{install_catalog, reset_hub};

    const CONFIG: &str = r#"{
        "categories": [{"id":"arcade","label":"Arcade"},{"id":"puzzle","label":"Puzzle"}],
        "games": [
            {"id":"a","title":"Asteroid","category":"arcade","thumb":"a.png","url":"https://a.test/"},
            {"id":"b","title":"Blocks","category":"puzzle","thumb":"b.png","url":"https://b.test/"}
        ]
    }"#;

    fn setup() {
        reset_hub();
        install_catalog(Catalog::from_json(CONFIG).unwrap());
    }

    #[test]
    fn search_filters_grid() {
        setup();
        let html = handle_search_post("q=AST");
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(r#"data-id="a""#));
        assert!(html.contains("(1)"));

        let html = handle_search_post("q=");
        assert_eq!(html.matches("<article").count(), 2);
        reset_hub();
    }

    #[test]
    fn category_selection_updates_header_and_chips() {
        setup();
        let html = handle_category_post("cat=puzzle");
        assert!(html.contains(">Puzzle</h2>"));
        assert!(html.contains(r#"class="filter active" data-cat="puzzle""#));
        assert_eq!(html.matches("<article").count(), 1);

        let html = handle_category_post("");
        assert!(html.contains(">All Games</h2>"));
        reset_hub();
    }

    #[test]
    fn favorites_only_round_trip_resets_to_all() {
        setup();
        handle_category_post("cat=arcade");
        let html = handle_favorites_only_post("");
        assert!(html.contains("No favorites yet"));
        assert!(html.contains(r#"class="fav-toggle active""#));
        assert!(!html.contains("filter active"));

        let html = handle_favorites_only_post("");
        assert!(html.contains(r#"class="filter active" data-cat="all""#));
        assert!(html.contains(">All Games</h2>"));
        assert_eq!(html.matches("<article").count(), 2);
        reset_hub();
    }

    #[test]
    fn filters_get_lists_all_categories() {
        setup();
        let html = handle_filters_get("");
        assert_eq!(html.matches(r#"class="filter"#).count(), 3);
        assert!(!html.contains("hx-swap-oob"));
        reset_hub();
    }

    #[test]
    fn no_match_shows_empty_state() {
        setup();
        let html = handle_search_post("q=zzz");
        assert!(html.contains("No games found"));
        assert!(html.contains("(0)"));
        assert!(handle_view_get("").contains("No games found"));
        reset_hub();
    }
}
