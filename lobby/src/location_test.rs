use super::*;

#[test]
fn parse_fragment_strips_hash_and_whitespace() {
    assert_eq!(parse_fragment("#ABCDE"), Some("ABCDE".to_owned()));
    assert_eq!(parse_fragment("ABCDE "), Some("ABCDE".to_owned()));
}

#[test]
fn parse_fragment_empty_is_none() {
    assert_eq!(parse_fragment(""), None);
    assert_eq!(parse_fragment("#"), None);
    assert_eq!(parse_fragment("#  "), None);
}

#[test]
fn share_link_appends_session_fragment() {
    assert_eq!(
        share_link("https://example.test/cameleon", "ABCDE"),
        "https://example.test/cameleon#ABCDE"
    );
}

#[test]
fn share_link_replaces_existing_fragment() {
    assert_eq!(share_link("https://example.test/cameleon#OLD", "NEW"), "https://example.test/cameleon#NEW");
}

#[test]
fn memory_location_round_trips_fragment() {
    let mut loc = MemoryLocation::default();
    assert_eq!(loc.fragment(), None);
    loc.set_fragment("ABCDE");
    assert_eq!(loc.fragment(), Some("ABCDE".to_owned()));
    loc.clear_fragment();
    assert_eq!(loc.fragment(), None);
}

#[test]
fn memory_location_with_fragment_parses_hash() {
    let loc = MemoryLocation::new("https://example.test/cameleon").with_fragment("#ZZZZZ");
    assert_eq!(loc.fragment(), Some("ZZZZZ".to_owned()));
    assert_eq!(loc.base_url(), "https://example.test/cameleon");
}
