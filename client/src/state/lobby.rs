//! Lobby flow bound to browser adapters, plus the text its screens render.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps one `BrowserLobby` in an `RwSignal`. All adapters are
//! stateless handles, so the flow is `Send + Sync` and renders on the server
//! (where it simply shows the first screen) as well as in the browser.

#[cfg(test)]
#[path = "lobby_test.rs"]
mod lobby_test;

use lobby::session::MAX_PLAYERS;
use lobby::store::JsonSessionStore;
use lobby::{LobbyFlow, Participant, RandomIds};

use crate::util::browser_location::BrowserLocation;
use crate::util::browser_storage::BrowserStorage;

pub type BrowserLobby = LobbyFlow<JsonSessionStore<BrowserStorage>, RandomIds, BrowserLocation>;

/// A fresh lobby at the first screen.
pub fn browser_lobby() -> BrowserLobby {
    LobbyFlow::new(JsonSessionStore::new(BrowserStorage), RandomIds, BrowserLocation)
}

/// `"3/15"` style player counter.
pub fn player_count_label(count: usize) -> String {
    format!("{count}/{MAX_PLAYERS}")
}

/// Caption on the join-as-player button.
pub fn join_button_label(count: usize) -> String {
    format!("Join Game ({} players)", player_count_label(count))
}

/// Roster line for a player.
pub fn seat_label(player: &Participant) -> String {
    format!("Position {}:", player.seat)
}

/// Footer line describing how this browser joined.
pub fn role_line(me: &Participant) -> String {
    if me.is_spectator() {
        format!("You are spectating as {}", me.username)
    } else {
        format!("You are Player {} ({})", me.seat, me.username)
    }
}

/// Footer status; the game itself is not implemented yet.
pub fn readiness_line(player_count: usize) -> &'static str {
    if player_count >= 1 {
        "Ready to start! Waiting for game implementation..."
    } else {
        "Waiting for at least 1 player to join..."
    }
}

/// Inline message after a share-link copy attempt.
pub fn copy_feedback(result: &Result<(), String>) -> String {
    match result {
        Ok(()) => "Game link copied to clipboard!".to_owned(),
        Err(reason) => format!("Could not copy the game link: {reason}"),
    }
}
