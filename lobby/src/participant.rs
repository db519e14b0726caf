//! Joined users and their role within a session.

#[cfg(test)]
#[path = "participant_test.rs"]
mod participant_test;

use serde::{Deserialize, Serialize};

/// Longest accepted display name, in characters.
pub const MAX_USERNAME_LEN: usize = 20;

/// Whether a participant holds a seat or only watches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Player,
    Spectator,
}

impl Role {
    #[must_use]
    pub fn is_spectator(self) -> bool {
        matches!(self, Self::Spectator)
    }
}

/// One joined user, either a seated player or an unseated spectator.
///
/// Stored field names are `id`, `username`, `position` and `isSpectator`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier, unique within the session.
    pub id: String,
    /// Display name as entered, trimmed.
    pub username: String,
    /// Join-order seat for players; always 0 for spectators.
    #[serde(rename = "position")]
    pub seat: u32,
    #[serde(rename = "isSpectator", with = "spectator_flag")]
    pub role: Role,
}

impl Participant {
    /// Build a seated player.
    #[must_use]
    pub fn player(id: impl Into<String>, username: impl Into<String>, seat: u32) -> Self {
        Self { id: id.into(), username: username.into(), seat, role: Role::Player }
    }

    /// Build a spectator. Spectators never occupy a seat.
    #[must_use]
    pub fn spectator(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self { id: id.into(), username: username.into(), seat: 0, role: Role::Spectator }
    }

    #[must_use]
    pub fn is_spectator(&self) -> bool {
        self.role.is_spectator()
    }

    /// Case-insensitive display-name comparison.
    #[must_use]
    pub fn has_username(&self, name: &str) -> bool {
        names_match(&self.username, name)
    }
}

/// Compare two display names the way the lobby enforces uniqueness.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

mod spectator_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Role;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(role: &Role, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(role.is_spectator())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
        let flag = bool::deserialize(deserializer)?;
        Ok(if flag { Role::Spectator } else { Role::Player })
    }
}
