//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Each adapter has a `hydrate` body
//! that talks to web-sys and an inert fallback for SSR and native tests.

pub mod browser_location;
pub mod browser_storage;
pub mod clipboard;
pub mod time;
