use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("https://photos.example.com/api//");
    assert_eq!(config.base_url(), "https://photos.example.com/api");
}

#[test]
fn blank_base_url_uses_default() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_URL);
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("http://localhost:8000/api/");
    assert_eq!(config.url("/users/me"), "http://localhost:8000/api/users/me");
    assert_eq!(config.url("auth/token"), "http://localhost:8000/api/auth/token");
}

#[test]
fn server_root_drops_api_mount() {
    assert_eq!(ApiConfig::default().server_root(), "http://localhost:8000");
    let bare = ApiConfig::new("http://10.0.0.5:9000");
    assert_eq!(bare.server_root(), "http://10.0.0.5:9000");
}
