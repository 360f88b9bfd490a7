//! Database initialization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to open the shared SQLx pool before accepting API
//! traffic. There is no retry: a failed connect is fatal to the process.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Initialize the `PostgreSQL` connection pool.
///
/// The pool eagerly opens one connection so an unreachable database is
/// reported here rather than on the first request.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the connection fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
