//! Route handlers for `/api/hub/*`.

pub mod catalog;
pub mod games;
pub mod overlay;
pub mod util;
pub mod view;

use crate::hub::session::{WorkerHub, with_hub_mut};
use crate::render::render_persist;

/// Run a mutation against the hub and append the localStorage writes it
/// queued, so the page persists them in the same swap.
pub(crate) fn mutate<F>(f: F) -> String
where
    F: FnOnce(&mut WorkerHub) -> String,
{
    with_hub_mut(|hub| {
        let mut html = f(hub);
        html.push_str(&render_persist(&hub.store_mut().drain_dirty()));
        html
    })
}
