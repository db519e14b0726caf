//! # lobby
//!
//! Domain model and screen flow for the Cameleon game lobby.
//!
//! This crate owns everything the lobby page does that is not rendering:
//! the persisted session record, typed access to browser-style key-value
//! storage, id generation, the addressable location fragment, and the
//! four-screen join flow. It has no browser or server dependencies; the
//! `client` crate supplies web-sys backed adapters for the traits defined here.

pub mod error;
pub mod flow;
pub mod ids;
pub mod location;
pub mod participant;
pub mod session;
pub mod store;

pub use error::LobbyError;
pub use flow::{LobbyFlow, Screen};
pub use ids::{IdGenerator, RandomIds, ScriptedIds};
pub use location::{Location, MemoryLocation};
pub use participant::{Participant, Role};
pub use session::Session;
pub use store::{JsonSessionStore, KeyValue, MemoryKeyValue, SessionKey, SessionStore, StoreError};
