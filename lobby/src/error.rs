//! Lobby operation failures.
//!
//! Every variant is a user-input or environment outcome that the page renders
//! inline next to the form that triggered it; none are fatal. The `Display`
//! text is the user-facing message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::flow::Screen;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    #[error("A game with ID \"{0}\" already exists. Please choose a different ID or join the existing game.")]
    DuplicateSession(String),
    #[error("{}", not_found_message(.0))]
    SessionNotFound(String),
    #[error("Game IDs must be 1-{max} characters without spaces or '#'.")]
    InvalidSessionId { id: String, max: usize },
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    #[error("Username \"{0}\" is already taken")]
    UsernameTaken(String),
    #[error("Game is full (maximum {capacity} players)")]
    SessionFull { capacity: usize },
    #[error("No game selected yet")]
    NoActiveSession,
    #[error("cannot {action} while {screen}")]
    InvalidTransition { screen: Screen, action: &'static str },
    #[error("could not generate an unused identifier")]
    IdSpaceExhausted,
    #[error("browser storage error: {0}")]
    Storage(#[from] StoreError),
}

fn not_found_message(id: &str) -> String {
    if id.trim().is_empty() {
        "Please enter a game ID".to_owned()
    } else {
        format!("Game \"{id}\" not found. Please check the game ID or create a new game.")
    }
}
