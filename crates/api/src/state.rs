use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::ViewVersions;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tamarack_db::DbPool,
    /// Server configuration (JWT secrets, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Version registry for cached views, bumped after every mutation.
    pub views: Arc<ViewVersions>,
}
