//! Page-level state and the static data the pages render.
//!
//! DESIGN
//! ======
//! `catalog` is fixed content for the landing page. `lobby` binds the lobby
//! flow to browser adapters and holds the text the lobby screens derive from
//! it, kept out of the components so it can be tested natively.

pub mod catalog;
pub mod lobby;
