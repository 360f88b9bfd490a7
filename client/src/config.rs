//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the API server, overridable at build time via `API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Join `path` onto [`API_BASE_URL`].
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
