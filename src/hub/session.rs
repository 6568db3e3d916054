//! The worker's single hub instance.
//!
//! Uses `thread_local!` + `RefCell` for mutable access in single-threaded
//! WASM. The worker keeps the module alive, so the controller lives for the
//! whole page session. Route handlers reach it only through these helpers.

use std::cell::RefCell;

use crate::catalog::Catalog;
use crate::hub::controller::HubController;
use crate::hub::storage::MirrorStore;

pub type WorkerHub = HubController<MirrorStore>;

thread_local! {
    static HUB: RefCell<WorkerHub> =
        RefCell::new(HubController::new(Catalog::default(), MirrorStore::default()));
}

pub fn with_hub<F, R>(f: F) -> R
where
    F: FnOnce(&WorkerHub) -> R,
{
    HUB.with(|h| f(&h.borrow()))
}

pub fn with_hub_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut WorkerHub) -> R,
{
    HUB.with(|h| f(&mut h.borrow_mut()))
}

/// Rebuild the hub around `catalog`, keeping the mirrored store so
/// favorites and recent survive.
pub fn install_catalog(catalog: Catalog) {
    rebuild(|store, _| (catalog, store));
}

/// Seed the mirrored store with values read from the page's localStorage and
/// reload favorites/recent from it. The catalog is kept.
pub fn restore_storage(entries: &[(&str, &str)]) {
    rebuild(|mut store, catalog| {
        for (key, value) in entries {
            store.seed(key, value);
        }
        (catalog, store)
    });
}

fn rebuild<F>(f: F)
where
    F: FnOnce(MirrorStore, Catalog) -> (Catalog, MirrorStore),
{
    HUB.with(|h| {
        let mut slot = h.borrow_mut();
        let old = std::mem::replace(
            &mut *slot,
            HubController::new(Catalog::default(), MirrorStore::default()),
        );
        let catalog = old.catalog().clone();
        let (catalog, store) = f(old.into_store(), catalog);
        *slot = HubController::new(catalog, store);
    });
}

/// Drop everything, including mirrored storage.
pub fn reset_hub() {
    HUB.with(|h| {
        *h.borrow_mut() = HubController::new(Catalog::default(), MirrorStore::default());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "categories": [{"id":"arcade","label":"Arcade"}],
        "games": [
            {"id":"a","title":"Asteroid","category":"arcade","thumb":"a.png","url":"https://a.test/","proxy":true},
            {"id":"b","title":"Blocks","category":"puzzle","thumb":"b.png","url":"https://b.test/"}
        ]
    }"#;

    #[test]
    fn history_survives_catalog_reload() {
        reset_hub();
        restore_storage(&[("aphelion_fav", r#"["b"]"#)]);
        install_catalog(Catalog::from_json(CONFIG).unwrap());

        with_hub(|hub| {
            assert_eq!(hub.catalog().games.len(), 2);
            assert_eq!(hub.state().favorites, ["b"]);
        });

        with_hub_mut(|hub| hub.set_query("ast"));
        install_catalog(Catalog::from_json(CONFIG).unwrap());
        with_hub(|hub| {
            assert_eq!(hub.state().query, "");
            assert_eq!(hub.state().favorites, ["b"]);
        });
        reset_hub();
    }

    #[test]
    fn restore_keeps_catalog() {
        reset_hub();
        install_catalog(Catalog::from_json(CONFIG).unwrap());
        restore_storage(&[("aphelion_recent", r#"["a","b"]"#)]);
        with_hub(|hub| {
            assert_eq!(hub.catalog().games.len(), 2);
            assert_eq!(hub.state().recent, ["a", "b"]);
        });
        reset_hub();
    }
}
