use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("https://api.example.com", LOGIN_PATH), "https://api.example.com/login");
}

#[test]
fn endpoint_url_trims_trailing_slashes() {
    assert_eq!(endpoint_url("https://api.example.com//", SIGNUP_PATH), "https://api.example.com/signup");
}

#[test]
fn api_response_ok_covers_2xx_only() {
    let with_status = |status| ApiResponse { status, body: String::new() };
    assert!(with_status(200).ok());
    assert!(with_status(204).ok());
    assert!(with_status(299).ok());
    assert!(!with_status(199).ok());
    assert!(!with_status(301).ok());
    assert!(!with_status(401).ok());
    assert!(!with_status(500).ok());
}

#[test]
fn api_response_json_rejects_empty_body() {
    let resp = ApiResponse { status: 200, body: String::new() };
    assert!(resp.json().is_err());
}

#[test]
fn api_response_json_parses_object() {
    let resp = ApiResponse { status: 401, body: r#"{"error":"bad credentials"}"#.to_owned() };
    assert_eq!(resp.json().unwrap()["error"], "bad credentials");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_outside_hydrate() {
    let transport = BrowserTransport::new("https://api.example.com");
    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    let result = futures::executor::block_on(transport.post_json(LOGIN_PATH, &creds));
    assert_eq!(result, Err(TransportError::Unavailable));
}

#[test]
fn browser_transport_from_config_uses_compiled_base() {
    assert_eq!(BrowserTransport::from_config().base_url(), crate::config::api_base_url());
}
