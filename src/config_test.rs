use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = parse_port(Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT 'http'"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 3000 };
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}
