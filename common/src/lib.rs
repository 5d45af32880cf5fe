//! Shared model, hardcoded content and the view-state machines of the
//! portfolio site.
//!
//! Nothing in this crate touches the browser: the frontend drives these types
//! from Yew components and supplies the browser-backed adapters (storage,
//! presentation surface, clock).

pub mod blog;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod filter;
pub mod model;
pub mod theme;
pub mod timer;
pub mod view_mode;
