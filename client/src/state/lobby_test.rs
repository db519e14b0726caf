use lobby::Screen;

use super::*;

#[test]
fn browser_lobby_starts_at_lobby_prompt() {
    let flow = browser_lobby();
    assert_eq!(flow.screen(), Screen::ChoosingLobby);
    assert!(flow.session().is_none());
    assert_eq!(flow.player_count(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_lobby_without_storage_reports_not_found() {
    let mut flow = browser_lobby();
    assert!(flow.join_session("ABCDE").is_err());
    assert!(!flow.init_from_location().unwrap());
}

#[test]
fn player_count_label_shows_capacity() {
    assert_eq!(player_count_label(0), "0/15");
    assert_eq!(join_button_label(3), "Join Game (3/15 players)");
}

#[test]
fn role_line_for_player_names_seat() {
    let me = Participant::player("p1", "Bo", 1);
    assert_eq!(role_line(&me), "You are Player 1 (Bo)");
    assert_eq!(seat_label(&me), "Position 1:");
}

#[test]
fn role_line_for_spectator() {
    let me = Participant::spectator("s1", "Eve");
    assert_eq!(role_line(&me), "You are spectating as Eve");
}

#[test]
fn readiness_waits_for_first_player() {
    assert_eq!(readiness_line(0), "Waiting for at least 1 player to join...");
    assert_eq!(readiness_line(1), "Ready to start! Waiting for game implementation...");
}

#[test]
fn copy_feedback_reports_both_outcomes() {
    assert_eq!(copy_feedback(&Ok(())), "Game link copied to clipboard!");
    assert_eq!(
        copy_feedback(&Err("denied".to_owned())),
        "Could not copy the game link: denied"
    );
}
