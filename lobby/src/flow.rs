//! The four-screen lobby flow.
//!
//! ARCHITECTURE
//! ============
//! `ChoosingLobby -> EnteringUsername -> ChoosingRole -> InGame`, strictly
//! forward. Each operation checks the current [`Screen`] first, does all of
//! its validation and storage work on local copies, and only then commits to
//! `self`. A failed operation therefore leaves the flow exactly as it was.
//!
//! TRADE-OFFS
//! ==========
//! Storage is read-then-written without locking. The join operations re-read
//! the stored record right before appending so joins from another tab are
//! kept, but two tabs writing at the same moment still resolve as
//! last-writer-wins.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::fmt;

use crate::error::LobbyError;
use crate::ids::IdGenerator;
use crate::location::{self, Location};
use crate::participant::{MAX_USERNAME_LEN, Participant, Role};
use crate::session::Session;
use crate::store::{SessionStore, StoreError};

/// Longest accepted user-chosen session id, in characters.
pub const MAX_SESSION_ID_LEN: usize = 10;

/// Fresh ids drawn before giving up on finding an unused one.
const MAX_ID_ATTEMPTS: usize = 8;

/// Which screen the lobby page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    ChoosingLobby,
    EnteringUsername,
    ChoosingRole,
    InGame,
}

impl Screen {
    /// The only screen reachable from `self`, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::ChoosingLobby => Some(Self::EnteringUsername),
            Self::EnteringUsername => Some(Self::ChoosingRole),
            Self::ChoosingRole => Some(Self::InGame),
            Self::InGame => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChoosingLobby => "choosing a lobby",
            Self::EnteringUsername => "entering a username",
            Self::ChoosingRole => "choosing a role",
            Self::InGame => "in game",
        })
    }
}

/// Lobby state machine over injectable storage, id, and location adapters.
#[derive(Clone, Debug)]
pub struct LobbyFlow<S, G, L> {
    store: S,
    ids: G,
    location: L,
    screen: Screen,
    session: Option<Session>,
    username: Option<String>,
    current_user: Option<Participant>,
}

impl<S, G, L> LobbyFlow<S, G, L>
where
    S: SessionStore,
    G: IdGenerator,
    L: Location,
{
    pub fn new(store: S, ids: G, location: L) -> Self {
        Self {
            store,
            ids,
            location,
            screen: Screen::ChoosingLobby,
            session: None,
            username: None,
            current_user: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Working copy of the joined session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Username accepted on the username screen.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The participant this browser joined as.
    pub fn current_user(&self) -> Option<&Participant> {
        self.current_user.as_ref()
    }

    pub fn player_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.players.len())
    }

    pub fn is_full(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_full)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Join the session named by the location fragment, if there is one.
    ///
    /// Returns `Ok(true)` when a session was joined and `Ok(false)` when the
    /// fragment is empty. On failure the fragment is cleared and the flow
    /// stays at [`Screen::ChoosingLobby`].
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for an unknown or unreadable session; `Storage` when
    /// local storage cannot be read.
    pub fn init_from_location(&mut self) -> Result<bool, LobbyError> {
        if self.screen != Screen::ChoosingLobby {
            return Ok(false);
        }
        let Some(id) = self.location.fragment() else {
            return Ok(false);
        };
        match self.join_session(&id) {
            Ok(()) => Ok(true),
            Err(err) => {
                log::info!("auto-join from fragment {id:?} failed: {err}");
                self.location.clear_fragment();
                Err(err)
            }
        }
    }

    /// Create and persist an empty session, then move to the username screen.
    ///
    /// A blank `requested` id draws a random 5-character code, retrying when
    /// the code is already stored.
    ///
    /// # Errors
    ///
    /// `InvalidSessionId`, `DuplicateSession`, `IdSpaceExhausted`, `Storage`,
    /// or `InvalidTransition` outside [`Screen::ChoosingLobby`].
    pub fn create_session(&mut self, requested: &str, now_ms: u64) -> Result<(), LobbyError> {
        self.expect_screen(Screen::ChoosingLobby, "create a game")?;
        let requested = requested.trim();
        let id = if requested.is_empty() {
            self.fresh_session_code()?
        } else {
            validate_session_id(requested)?;
            if self.store.exists(requested)? {
                return Err(LobbyError::DuplicateSession(requested.to_owned()));
            }
            requested.to_owned()
        };

        let session = Session::new(id, now_ms);
        self.store.save(&session)?;
        self.location.set_fragment(&session.id);
        log::info!("created session {}", session.id);
        self.session = Some(session);
        self.advance(Screen::EnteringUsername);
        Ok(())
    }

    /// Load a stored session and move to the username screen.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for a blank id or a missing/malformed record,
    /// `Storage`, or `InvalidTransition` outside [`Screen::ChoosingLobby`].
    pub fn join_session(&mut self, id: &str) -> Result<(), LobbyError> {
        self.expect_screen(Screen::ChoosingLobby, "join a game")?;
        let id = id.trim();
        if id.is_empty() {
            return Err(LobbyError::SessionNotFound(String::new()));
        }
        let session = self.load_existing(id)?;
        self.location.set_fragment(id);
        self.session = Some(session);
        self.advance(Screen::EnteringUsername);
        Ok(())
    }

    /// Accept a display name and move to the role screen.
    ///
    /// # Errors
    ///
    /// `EmptyUsername`, `UsernameTooLong`, `UsernameTaken`, or
    /// `InvalidTransition` outside [`Screen::EnteringUsername`].
    pub fn submit_username(&mut self, name: &str) -> Result<(), LobbyError> {
        self.expect_screen(Screen::EnteringUsername, "choose a username")?;
        let name = validate_username(name)?;
        let session = self.session.as_ref().ok_or(LobbyError::NoActiveSession)?;
        if session.is_username_taken(&name) {
            return Err(LobbyError::UsernameTaken(name));
        }
        self.username = Some(name);
        self.advance(Screen::ChoosingRole);
        Ok(())
    }

    /// Take the next seat and enter the game.
    ///
    /// # Errors
    ///
    /// `SessionFull` at capacity, `UsernameTaken` if another tab claimed the
    /// name meanwhile, `Storage`, or `InvalidTransition` outside
    /// [`Screen::ChoosingRole`].
    pub fn join_as_player(&mut self) -> Result<(), LobbyError> {
        self.join(Role::Player)
    }

    /// Join unseated and enter the game.
    ///
    /// # Errors
    ///
    /// As [`LobbyFlow::join_as_player`], minus the capacity check.
    pub fn join_as_spectator(&mut self) -> Result<(), LobbyError> {
        self.join(Role::Spectator)
    }

    /// URL that opens this lobby for someone else.
    ///
    /// # Errors
    ///
    /// `NoActiveSession` before a session is created or joined.
    pub fn share_link(&self) -> Result<String, LobbyError> {
        let session = self.session.as_ref().ok_or(LobbyError::NoActiveSession)?;
        Ok(location::share_link(&self.location.base_url(), &session.id))
    }

    fn join(&mut self, role: Role) -> Result<(), LobbyError> {
        let action = match role {
            Role::Player => "join as a player",
            Role::Spectator => "join as a spectator",
        };
        self.expect_screen(Screen::ChoosingRole, action)?;
        let username = self.username.clone().ok_or(LobbyError::EmptyUsername)?;
        let mut session = self.latest_session()?;
        let id = self.fresh_participant_id(&session)?;
        let participant = match role {
            Role::Player => session.seat_player(id, &username)?.clone(),
            Role::Spectator => session.add_spectator(id, &username)?.clone(),
        };
        self.store.save(&session)?;
        log::info!(
            "{} joined session {} as {:?} (seat {})",
            participant.username,
            session.id,
            participant.role,
            participant.seat
        );
        self.session = Some(session);
        self.current_user = Some(participant);
        self.advance(Screen::InGame);
        Ok(())
    }

    /// The stored copy of the active session, falling back to the working
    /// copy if the record has disappeared or become unreadable.
    fn latest_session(&self) -> Result<Session, LobbyError> {
        let working = self.session.as_ref().ok_or(LobbyError::NoActiveSession)?;
        match self.store.load(&working.id) {
            Ok(stored) => Ok(stored),
            Err(StoreError::NotFound(_) | StoreError::Malformed { .. } | StoreError::Mismatched { .. }) => {
                Ok(working.clone())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn load_existing(&self, id: &str) -> Result<Session, LobbyError> {
        match self.store.load(id) {
            Ok(session) => Ok(session),
            Err(StoreError::NotFound(_)) => Err(LobbyError::SessionNotFound(id.to_owned())),
            Err(StoreError::Malformed { key, source }) => {
                log::warn!("ignoring malformed session record {key}: {source}");
                Err(LobbyError::SessionNotFound(id.to_owned()))
            }
            Err(StoreError::Mismatched { key, found }) => {
                log::warn!("ignoring record {key}: it holds session {found:?}");
                Err(LobbyError::SessionNotFound(id.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn fresh_session_code(&mut self) -> Result<String, LobbyError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let code = self.ids.session_code();
            if !self.store.exists(&code)? {
                return Ok(code);
            }
            log::debug!("generated session code {code} already stored, retrying");
        }
        Err(LobbyError::IdSpaceExhausted)
    }

    fn fresh_participant_id(&mut self, session: &Session) -> Result<String, LobbyError> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.participant_id())
            .find(|id| !session.has_participant_id(id))
            .ok_or(LobbyError::IdSpaceExhausted)
    }

    fn expect_screen(&self, expected: Screen, action: &'static str) -> Result<(), LobbyError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(LobbyError::InvalidTransition { screen: self.screen, action })
        }
    }

    fn advance(&mut self, to: Screen) {
        debug_assert_eq!(self.screen.next(), Some(to), "lobby screens only move forward");
        log::debug!("lobby screen: {} -> {}", self.screen, to);
        self.screen = to;
    }
}

/// Check a user-chosen session id.
///
/// # Errors
///
/// `InvalidSessionId` when empty, longer than [`MAX_SESSION_ID_LEN`], or
/// containing whitespace or `#`.
pub fn validate_session_id(id: &str) -> Result<(), LobbyError> {
    let len = id.chars().count();
    if len == 0 || len > MAX_SESSION_ID_LEN || id.chars().any(|c| c == '#' || c.is_whitespace()) {
        return Err(LobbyError::InvalidSessionId { id: id.to_owned(), max: MAX_SESSION_ID_LEN });
    }
    Ok(())
}

/// Trim and check a display name.
///
/// # Errors
///
/// `EmptyUsername` or `UsernameTooLong`.
pub fn validate_username(raw: &str) -> Result<String, LobbyError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(LobbyError::EmptyUsername);
    }
    if name.chars().count() > MAX_USERNAME_LEN {
        return Err(LobbyError::UsernameTooLong { max: MAX_USERNAME_LEN });
    }
    Ok(name.to_owned())
}
