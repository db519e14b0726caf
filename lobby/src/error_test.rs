use super::*;

#[test]
fn not_found_message_asks_for_id_when_blank() {
    assert_eq!(LobbyError::SessionNotFound("  ".into()).to_string(), "Please enter a game ID");
}

#[test]
fn not_found_message_names_the_id() {
    let msg = LobbyError::SessionNotFound("ZZZZZ".into()).to_string();
    assert!(msg.contains("\"ZZZZZ\" not found"));
}

#[test]
fn session_full_reports_capacity() {
    assert_eq!(
        LobbyError::SessionFull { capacity: 15 }.to_string(),
        "Game is full (maximum 15 players)"
    );
}

#[test]
fn invalid_transition_names_screen_and_action() {
    let err = LobbyError::InvalidTransition { screen: Screen::InGame, action: "submit a username" };
    assert_eq!(err.to_string(), "cannot submit a username while in game");
}

#[test]
fn storage_error_converts_via_from() {
    let err: LobbyError = StoreError::Unavailable("quota exceeded".into()).into();
    assert!(matches!(err, LobbyError::Storage(StoreError::Unavailable(_))));
    assert_eq!(err.to_string(), "browser storage error: local storage unavailable: quota exceeded");
}
