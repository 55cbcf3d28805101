use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(3000));
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("  ")), Ok(3000));
}

#[test]
fn parse_port_accepts_valid_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 4000 };
    assert_eq!(config.bind_addr(), "0.0.0.0:4000");
}
