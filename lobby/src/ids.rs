//! Session code and participant id generation.
//!
//! [`RandomIds`] draws from `rand`'s thread-local CSPRNG, seeded by the OS
//! (or `crypto.getRandomValues` in the browser). [`ScriptedIds`] replays fixed
//! values so collision handling can be tested deterministically.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::collections::VecDeque;

use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;

/// Length of generated session codes.
pub const SESSION_CODE_LEN: usize = 5;
/// Length of generated participant ids.
pub const PARTICIPANT_ID_LEN: usize = 9;

const PARTICIPANT_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh identifiers.
pub trait IdGenerator {
    /// A new short session code.
    fn session_code(&mut self) -> String;
    /// A new opaque participant id.
    fn participant_id(&mut self) -> String;
}

/// Cryptographically random ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn session_code(&mut self) -> String {
        rand::rng().sample_iter(Alphanumeric).take(SESSION_CODE_LEN).map(char::from).collect()
    }

    fn participant_id(&mut self) -> String {
        random_string(PARTICIPANT_ALPHABET, PARTICIPANT_ID_LEN)
    }
}

/// `len` characters drawn uniformly from `alphabet`.
fn random_string(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).filter_map(|_| alphabet.choose(&mut rng)).map(|&b| char::from(b)).collect()
}

/// Replays queued values, then falls back to numbered ones.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIds {
    codes: VecDeque<String>,
    participants: VecDeque<String>,
    issued: u64,
}

impl ScriptedIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue session codes to hand out in order.
    #[must_use]
    pub fn with_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Queue participant ids to hand out in order.
    #[must_use]
    pub fn with_participants<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.extend(ids.into_iter().map(Into::into));
        self
    }

    fn next_number(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }
}

impl IdGenerator for ScriptedIds {
    fn session_code(&mut self) -> String {
        match self.codes.pop_front() {
            Some(code) => code,
            None => format!("S{:04}", self.next_number()),
        }
    }

    fn participant_id(&mut self) -> String {
        match self.participants.pop_front() {
            Some(id) => id,
            None => format!("p{}", self.next_number()),
        }
    }
}
