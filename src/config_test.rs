use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_url_uses_override() {
    assert_eq!(resolve_base_url(Some(" http://localhost:8080 ")), "http://localhost:8080");
}
