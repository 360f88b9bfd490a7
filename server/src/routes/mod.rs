//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP endpoints under a single Axum router and wraps
//! them in CORS and request-tracing layers. Anything that does not match a
//! route (path or method) is answered by the JSON 404 fallback.
//!
//! Matching ignores ASCII case and a trailing slash (`/HEALTH/` is
//! `/health`). The rewrite wraps the routing router from outside, because a
//! layer added with `Router::layer` only runs after a route is chosen.

pub mod status;

use axum::Router;
use axum::extract::{OriginalUri, Request};
use axum::http::{Method, Uri};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

use crate::config::CorsPolicy;
use crate::error::ApiError;
use crate::state::AppState;

const ALLOWED_METHODS: [Method; 6] = [Method::GET, Method::HEAD, Method::PUT, Method::PATCH, Method::POST, Method::DELETE];

/// Build the full application router.
pub fn app(state: AppState, cors: &CorsPolicy) -> Router {
    let routes = Router::new()
        .route("/", get(status::root))
        .route("/health", get(status::health))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    let normalized = ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(lowercase_path)
        .service(routes);

    Router::new()
        .fallback_service(normalized)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Lowercase the request path for matching. The query is left as sent, and
/// handlers still see the untouched URI through `OriginalUri`.
fn lowercase_path(mut req: Request) -> Request {
    if let Some(uri) = lowercased(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

fn lowercased(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let mut path_and_query = path.to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// Credentialed CORS. Wildcards are not allowed alongside credentials, so
/// origins and headers are mirrored from the request instead.
fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        CorsPolicy::MirrorAny => AllowOrigin::mirror_request(),
        CorsPolicy::Only(origin) => AllowOrigin::exact(origin.clone()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Catch-all: 404 naming the path (and query) exactly as requested.
async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    let requested = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string);
    tracing::debug!(%requested, "route not found");
    ApiError::RouteNotFound(requested)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
