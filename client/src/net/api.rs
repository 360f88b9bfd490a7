//! REST API helpers for communicating with the server.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, sent with credentials so
//! the server's cookies travel cross-origin.
//! Native builds: stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Network failures, non-2xx
//! statuses and undecodable bodies all become an error string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

pub const USERS_PATH: &str = "/users";

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Fetch the user collection from `GET /users`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-OK status, or the body is not a JSON array.
pub async fn fetch_users() -> Result<Vec<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::api_url(USERS_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<Value>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(format!("{USERS_PATH} is only available in the browser"))
    }
}
