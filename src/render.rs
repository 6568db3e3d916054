//! HTML fragments for the hub, built from the view model.
//!
//! `render_view` returns the grid contents as the primary swap target
//! (`#grid`) and refreshes the counters, heading, filter bar and favorites
//! toggle through out-of-band swaps, so every interaction costs one request.

use crate::hub::controller::{Effect, FullscreenApi};
use crate::hub::modal::{Modal, ModalContent};
use crate::hub::toast::Notice;
use crate::hub::view::{CardView, FilterChip, GridBody, HubView};
use crate::routes::util::{encode_path_segment, escape_html, js_string};

// ── SVG icon constants ─────────────────────────────────────────────

const SVG_STAR: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/></svg>"#;

const SVG_EXTERNAL: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3"/></svg>"#;

/// Inline placeholder swapped in when a thumbnail fails to load.
const THUMB_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 300 140%22%3E%3Crect fill=%22%2316161f%22 width=%22300%22 height=%22140%22/%3E%3Ctext x=%22150%22 y=%2280%22 text-anchor=%22middle%22 fill=%22%236366f1%22 font-size=%2232%22%3E%F0%9F%8E%AE%3C/text%3E%3C/svg%3E";

// ── Main view ──────────────────────────────────────────────────────

/// Full render: grid body plus out-of-band counters, heading and filters.
pub fn render_view(view: &HubView) -> String {
    let mut html = render_grid(&view.grid);
    html.push_str(&render_view_parts(view));
    html
}

/// Same as `render_view` but with the grid swapped out-of-band too, for
/// responses whose primary target is something else (the overlay).
pub fn render_view_oob(view: &HubView) -> String {
    let mut html = String::from(r#"<div id="grid" hx-swap-oob="innerHTML">"#);
    html.push_str(&render_grid(&view.grid));
    html.push_str("</div>");
    html.push_str(&render_view_parts(view));
    html
}

fn render_view_parts(view: &HubView) -> String {
    let mut html = String::with_capacity(1024);
    for (id, value) in [
        ("stat-total", view.stats.total),
        ("stat-fav", view.stats.favorites),
        ("stat-recent", view.stats.recent),
    ] {
        html.push_str(&format!(
            r#"<span id="{id}" hx-swap-oob="true">{value}</span>"#
        ));
    }

    html.push_str(&format!(
        r#"<h2 id="title" hx-swap-oob="true">{}</h2>"#,
        escape_html(&view.header.label)
    ));
    html.push_str(&format!(
        r#"<span id="count" hx-swap-oob="true">{}</span>"#,
        view.header.count_suffix()
    ));
    html.push_str(&render_filters(&view.filters, true));
    html.push_str(&format!(
        r##"<button id="fav-btn" hx-swap-oob="true" class="fav-toggle{}" hx-post="/api/hub/favorites-only" hx-target="#grid">Favorites</button>"##,
        if view.favorites_only { " active" } else { "" }
    ));
    html
}

/// Grid contents: one card per visible game, or the empty state.
pub fn render_grid(grid: &GridBody) -> String {
    match grid {
        GridBody::Empty(empty) => format!(
            r#"<div class="empty">
  <div class="empty-icon">🎮</div>
  <h3>{}</h3>
  <p>{}</p>
</div>"#,
            empty.title(),
            empty.hint()
        ),
        GridBody::Cards(cards) => {
            let mut html = String::with_capacity(cards.len() * 1024);
            for card in cards {
                html.push_str(&render_card(card));
            }
            html
        }
    }
}

fn render_card(card: &CardView) -> String {
    let id = escape_html(&card.id);
    let path_id = encode_path_segment(&card.id);
    let title = escape_html(&card.title);
    let (fav_class, fav_title) = if card.favorite {
        (" fav", "Unfavorite")
    } else {
        ("", "Favorite")
    };

    format!(
        r##"<article class="card" data-id="{id}" hx-post="/api/hub/games/{path_id}/open" hx-target="#modal" hx-swap="outerHTML">
  <div class="card-actions">
    <button class="card-btn{fav_class}" data-action="fav" data-id="{id}" title="{fav_title}" onclick="event.stopPropagation()" hx-post="/api/hub/games/{path_id}/favorite" hx-target="#grid">{star}</button>
    <button class="card-btn" data-action="open" data-id="{id}" title="New tab" onclick="event.stopPropagation()" hx-post="/api/hub/games/{path_id}/external" hx-swap="none">{external}</button>
  </div>
  <img class="card-img" src="{thumb}" alt="{title}" loading="lazy" onerror="this.onerror=null;this.src='{fallback}'">
  <div class="card-body">
    <h3 class="card-title">{title}</h3>
    <span class="card-cat">{category}</span>
  </div>
</article>"##,
        star = SVG_STAR,
        external = SVG_EXTERNAL,
        thumb = escape_html(&card.thumb),
        fallback = THUMB_FALLBACK,
        category = escape_html(&card.category),
    )
}

/// Filter bar. `oob` marks it for an out-of-band swap.
pub fn render_filters(chips: &[FilterChip], oob: bool) -> String {
    let mut html = String::with_capacity(256 + chips.len() * 192);
    html.push_str(r#"<div id="filters""#);
    if oob {
        html.push_str(r#" hx-swap-oob="true""#);
    }
    html.push('>');
    for chip in chips {
        let vals = serde_json::json!({ "cat": chip.id }).to_string();
        html.push_str(&format!(
            r##"<button class="filter{}" data-cat="{}" hx-post="/api/hub/category" hx-vals="{}" hx-target="#grid">{}</button>"##,
            if chip.active { " active" } else { "" },
            escape_html(&chip.id),
            escape_html(&vals),
            escape_html(&chip.label),
        ));
    }
    html.push_str("</div>");
    html
}

// ── Overlay ────────────────────────────────────────────────────────

/// The `#modal` element plus the matching page-scroll lock. `oob` marks it
/// for an out-of-band swap.
pub fn render_modal(modal: &Modal, oob: bool) -> String {
    let scroll = if modal.scroll_locked() { "hidden" } else { "" };
    let script = format!("<script>document.body.style.overflow={};</script>", js_string(scroll));
    let swap = if oob { r#" hx-swap-oob="true""# } else { "" };

    let Modal::Open { title, content, .. } = modal else {
        return format!(
            r#"<div id="modal" class="modal"{swap}><iframe id="frame" src=""></iframe><div id="modal-external" style="display:none"></div></div>{script}"#
        );
    };

    let (frame_style, frame_src, external_style, href) = match content {
        ModalContent::Frame { src } => ("", src.as_str(), "display:none", ""),
        ModalContent::External { href } => ("display:none", "", "", href.as_str()),
    };

    format!(
        r##"<div id="modal" class="modal open"{swap} hx-post="/api/hub/modal/close" hx-trigger="click target:#modal" hx-swap="outerHTML">
  <div class="modal-box">
    <header class="modal-header">
      <h2 id="modal-title">{title}</h2>
      <button id="modal-close" hx-post="/api/hub/modal/close" hx-target="#modal" hx-swap="outerHTML">✕</button>
    </header>
    <iframe id="frame" src="{frame_src}" style="{frame_style}" allow="fullscreen; autoplay; gamepad" allowfullscreen></iframe>
    <div id="modal-external" style="{external_style}">
      <p>This game can't be embedded.</p>
      <a id="modal-external-link" href="{href}" target="_blank" rel="noopener">Open in new tab</a>
    </div>
  </div>
</div>{script}"##,
        title = escape_html(title),
        frame_src = escape_html(frame_src),
        href = escape_html(href),
    )
}

// ── Notices and effects ────────────────────────────────────────────

/// The `#toast` element, always out-of-band. A visible notice schedules its
/// own expiry with the generation it was shown under.
pub fn render_toast(notice: Option<&Notice>) -> String {
    match notice {
        Some(n) => format!(
            r#"<div id="toast" class="toast" style="display:flex" hx-swap-oob="true" hx-post="/api/hub/toast/expire" hx-vals="{vals}" hx-trigger="load delay:{delay}ms" hx-swap="none">{msg}</div>"#,
            vals = escape_html(&serde_json::json!({ "gen": n.generation.to_string() }).to_string()),
            delay = n.hide_after_ms,
            msg = escape_html(&n.message),
        ),
        None => r#"<div id="toast" class="toast" style="display:none" hx-swap-oob="true"></div>"#.to_string(),
    }
}

/// Script for a side effect the page must perform.
pub fn render_effect(effect: &Effect) -> String {
    match effect {
        Effect::OpenWindow { url } => {
            format!("<script>window.open({}, '_blank');</script>", js_string(url))
        }
        Effect::FocusSearch => {
            "<script>document.querySelector('#search').focus();</script>".to_string()
        }
        Effect::RequestFullscreen(api) => {
            let method = match api {
                FullscreenApi::Standard => "requestFullscreen",
                FullscreenApi::Webkit => "webkitRequestFullscreen",
            };
            format!("<script>document.querySelector('#frame').{method}();</script>")
        }
        Effect::Toast(notice) => render_toast(Some(notice)),
    }
}

/// Write dirty storage entries back to the page's localStorage.
pub fn render_persist(entries: &[(String, String)]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut html = String::from("<script>");
    for (key, value) in entries {
        html.push_str(&format!(
            "localStorage.setItem({}, {});",
            js_string(key),
            js_string(value)
        ));
    }
    html.push_str("</script>");
    html
}

pub fn error_fragment(message: &str) -> String {
    format!(r#"<span class="text-red">{}</span>"#, escape_html(message))
}
