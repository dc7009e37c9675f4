pub mod doll;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /dolls          GET list, POST create, OPTIONS preflight
/// /dolls/{id}     GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dolls", doll::router())
}
