//! Catalog hub controller: state, persistence, overlay, notices and the
//! pure view model, plus the worker-wide instance in `session`.

pub mod controller;
pub mod modal;
pub mod session;
pub mod state;
pub mod storage;
pub mod toast;
pub mod view;
