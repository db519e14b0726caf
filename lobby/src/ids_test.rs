use super::*;

// =============================================================
// RandomIds
// =============================================================

#[test]
fn session_code_is_five_alphanumerics() {
    let code = RandomIds.session_code();
    assert_eq!(code.len(), SESSION_CODE_LEN);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn participant_id_is_lowercase_base36() {
    let id = RandomIds.participant_id();
    assert_eq!(id.len(), PARTICIPANT_ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn participant_ids_differ_between_calls() {
    let mut ids = RandomIds;
    assert_ne!(ids.participant_id(), ids.participant_id());
}

#[test]
fn session_codes_differ_between_calls() {
    let mut ids = RandomIds;
    let codes: std::collections::HashSet<_> = (0..20).map(|_| ids.session_code()).collect();
    assert!(codes.len() > 1);
}

#[test]
fn session_codes_use_upper_lower_and_digits() {
    let mut ids = RandomIds;
    let joined: String = (0..200).map(|_| ids.session_code()).collect();
    assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
    assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
    assert!(joined.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn random_string_stays_inside_alphabet() {
    let s = random_string(b"ab", 64);
    assert_eq!(s.len(), 64);
    assert!(s.chars().all(|c| c == 'a' || c == 'b'));
}

// =============================================================
// ScriptedIds
// =============================================================

#[test]
fn scripted_codes_replay_in_order() {
    let mut ids = ScriptedIds::new().with_codes(["AAAAA", "BBBBB"]);
    assert_eq!(ids.session_code(), "AAAAA");
    assert_eq!(ids.session_code(), "BBBBB");
    assert_eq!(ids.session_code(), "S0001");
}

#[test]
fn scripted_participants_fall_back_to_numbered() {
    let mut ids = ScriptedIds::new().with_participants(["x"]);
    assert_eq!(ids.participant_id(), "x");
    assert_eq!(ids.participant_id(), "p1");
    assert_eq!(ids.participant_id(), "p2");
}
