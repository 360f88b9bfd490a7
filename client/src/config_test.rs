use super::*;

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://localhost:3000", "users"), "http://localhost:3000/users");
    assert_eq!(join_url("http://localhost:3000/", "/users"), "http://localhost:3000/users");
}

#[test]
fn join_url_keeps_base_path_prefix() {
    assert_eq!(join_url("https://api.example.test/v1/", "/users"), "https://api.example.test/v1/users");
}

#[test]
fn api_url_is_rooted_at_base() {
    let url = api_url("/users");
    assert!(url.starts_with(API_BASE_URL.trim_end_matches('/')));
    assert!(url.ends_with("/users"));
}
