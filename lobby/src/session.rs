//! The persisted lobby record.
//!
//! DESIGN
//! ======
//! A `Session` only grows: participants are appended, never removed or
//! edited. Seat numbers therefore stay dense (1..=N) and participant ids are
//! never reused. All capacity and uniqueness rules live here so the flow and
//! any future caller enforce them identically.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::error::LobbyError;
use crate::participant::Participant;

/// Maximum number of seated players per session.
pub const MAX_PLAYERS: usize = 15;

/// One game lobby instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub players: Vec<Participant>,
    #[serde(default)]
    pub spectators: Vec<Participant>,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new(id: impl Into<String>, created_at: u64) -> Self {
        Self { id: id.into(), players: Vec::new(), spectators: Vec::new(), created_at }
    }

    /// Players followed by spectators, in join order within each list.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.players.iter().chain(self.spectators.iter())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    /// Seat the next player would receive.
    #[must_use]
    pub fn next_seat(&self) -> u32 {
        u32::try_from(self.players.len()).unwrap_or(u32::MAX).saturating_add(1)
    }

    #[must_use]
    pub fn is_username_taken(&self, name: &str) -> bool {
        self.participants().any(|p| p.has_username(name))
    }

    #[must_use]
    pub fn has_participant_id(&self, id: &str) -> bool {
        self.participants().any(|p| p.id == id)
    }

    #[must_use]
    pub fn find_participant(&self, id: &str) -> Option<&Participant> {
        self.participants().find(|p| p.id == id)
    }

    /// Append a player at the next seat.
    ///
    /// # Errors
    ///
    /// `SessionFull` at capacity, `UsernameTaken` on a case-insensitive name
    /// clash. The id must already be unused; a reused id is reported as
    /// `IdSpaceExhausted` since callers draw ids from a generator.
    pub fn seat_player(&mut self, id: String, username: &str) -> Result<&Participant, LobbyError> {
        if self.is_full() {
            return Err(LobbyError::SessionFull { capacity: MAX_PLAYERS });
        }
        self.check_join(&id, username)?;
        let seat = self.next_seat();
        self.players.push(Participant::player(id, username, seat));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Append a spectator. Spectators have no capacity limit.
    ///
    /// # Errors
    ///
    /// Same name and id rules as [`Session::seat_player`].
    pub fn add_spectator(&mut self, id: String, username: &str) -> Result<&Participant, LobbyError> {
        self.check_join(&id, username)?;
        self.spectators.push(Participant::spectator(id, username));
        Ok(&self.spectators[self.spectators.len() - 1])
    }

    fn check_join(&self, id: &str, username: &str) -> Result<(), LobbyError> {
        if self.is_username_taken(username) {
            return Err(LobbyError::UsernameTaken(username.to_owned()));
        }
        if self.has_participant_id(id) {
            return Err(LobbyError::IdSpaceExhausted);
        }
        Ok(())
    }
}
