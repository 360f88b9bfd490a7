//! Status routes — API banner and health check.

use axum::response::Json;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::ApiError;

pub const API_BANNER: &str = "MERN TypeScript API Server";

/// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T12:00:00.000Z`.
const ISO_8601_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /` — static banner identifying the API.
pub async fn root() -> Json<Banner> {
    Json(Banner { message: API_BANNER })
}

/// `GET /health` — liveness check with the current server time.
pub async fn health() -> Result<Json<Health>, ApiError> {
    let timestamp = iso_timestamp(OffsetDateTime::now_utc())?;
    Ok(Json(Health { status: "OK", timestamp }))
}

fn iso_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(time::UtcOffset::UTC).format(ISO_8601_MILLIS)
}
