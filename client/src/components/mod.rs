//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentation only: they receive plain data or signals from
//! the pages and never touch storage or the lobby flow directly.

pub mod game_card;
pub mod notice;
pub mod roster;
