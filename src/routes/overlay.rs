//! Overlay, keyboard and toast routes.

use crate::hub::controller::{Capabilities, KeyPress};
use crate::render::{render_effect, render_modal, render_toast};
use crate::routes::mutate;
use crate::routes::util::{get_flag, get_param, parse_form_body};

// ── POST /api/hub/modal/close ──────────────────────────────────────

/// Close button and backdrop click.
pub fn handle_close_post(_body: &str) -> String {
    mutate(|hub| {
        hub.close_modal();
        render_modal(hub.modal(), false)
    })
}

// ── POST /api/hub/key ──────────────────────────────────────────────

/// Body params:
///   - key={KeyboardEvent.key}
///   - ctrl=true|false
///   - fullscreen=true|false         → standard Fullscreen API available
///   - webkit_fullscreen=true|false  → prefixed API available
///
/// Answers with scripts for the requested effects; Escape also swaps in the
/// closed overlay out-of-band.
pub fn handle_key_post(body: &str) -> String {
    let params = parse_form_body(body);
    let press = KeyPress {
        key: get_param(&params, "key").unwrap_or("").to_string(),
        ctrl: get_flag(&params, "ctrl"),
    };
    let caps = Capabilities {
        fullscreen: get_flag(&params, "fullscreen"),
        webkit_fullscreen: get_flag(&params, "webkit_fullscreen"),
    };

    mutate(|hub| {
        let was_open = hub.modal().is_open();
        let effects = hub.handle_key(&press, caps);
        let mut html: String = effects.iter().map(render_effect).collect();
        if was_open && !hub.modal().is_open() {
            html.push_str(&render_modal(hub.modal(), true));
        }
        html
    })
}

// ── POST /api/hub/toast/expire ─────────────────────────────────────

/// Body: `gen={generation}`. Hides the toast only if that generation is still
/// showing; a stale timer gets an empty answer.
pub fn handle_toast_expire_post(body: &str) -> String {
    let params = parse_form_body(body);
    let generation: u64 = match get_param(&params, "gen").and_then(|g| g.parse().ok()) {
        Some(g) => g,
        None => return String::new(),
    };
    mutate(|hub| {
        if hub.expire_toast(generation) {
            render_toast(None)
        } else {
            String::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::hub::session::{install_catalog, reset_hub, with_hub, with_hub_mut};

    const CONFIG: &str = r#"{
        "categories": [],
        "games": [
            {"id":"a","title":"Asteroid","category":"arcade","thumb":"a.png","url":"https://a.test/","proxy":true}
        ]
    }"#;

    fn setup() {
        reset_hub();
        install_catalog(Catalog::from_json(CONFIG).unwrap());
    }

    #[test]
    fn close_clears_frame_and_unlocks_scroll() {
        setup();
        with_hub_mut(|hub| hub.open_game("a"));
        let html = handle_close_post("");
        assert!(html.contains(r#"<iframe id="frame" src="">"#));
        assert!(html.contains(r#"overflow="""#));
        with_hub(|hub| assert!(!hub.modal().is_open()));
        reset_hub();
    }

    #[test]
    fn ctrl_k_focuses_search() {
        setup();
        let html = handle_key_post("key=k&ctrl=true");
        assert!(html.contains("#search"));
        assert!(handle_key_post("key=k&ctrl=false").is_empty());
        reset_hub();
    }

    #[test]
    fn escape_closes_open_overlay() {
        setup();
        with_hub_mut(|hub| hub.open_game("a"));
        let html = handle_key_post("key=Escape");
        assert!(html.contains(r#"<div id="modal" class="modal" hx-swap-oob="true">"#));
        // Nothing to swap when already closed.
        assert!(handle_key_post("key=Escape").is_empty());
        reset_hub();
    }

    #[test]
    fn fullscreen_only_when_open_and_supported() {
        setup();
        assert!(handle_key_post("key=f&fullscreen=true").is_empty());

        with_hub_mut(|hub| hub.open_game("a"));
        let html = handle_key_post("key=f&fullscreen=true");
        assert!(html.contains(".requestFullscreen()"));
        let html = handle_key_post("key=f&webkit_fullscreen=true");
        assert!(html.contains(".webkitRequestFullscreen()"));
        assert!(handle_key_post("key=f").is_empty());
        reset_hub();
    }

    #[test]
    fn stale_toast_timer_is_ignored() {
        setup();
        let first = with_hub_mut(|hub| hub.show_toast("Added to favorites").generation);
        let second = with_hub_mut(|hub| hub.show_toast("Removed from favorites").generation);

        assert!(handle_toast_expire_post(&format!("gen={first}")).is_empty());
        with_hub(|hub| assert!(hub.toast().current().is_some()));

        let html = handle_toast_expire_post(&format!("gen={second}"));
        assert!(html.contains("display:none"));
        with_hub(|hub| assert!(hub.toast().current().is_none()));
        assert!(handle_toast_expire_post("gen=abc").is_empty());
        reset_hub();
    }
}
