//! Route definitions for the `/dolls` resource.

use axum::routing::{any, get};
use axum::Router;

use crate::handlers::doll;
use crate::state::AppState;

/// Routes mounted at `/dolls`.
///
/// ```text
/// GET     /               -> list
/// POST    /               -> create
/// OPTIONS /               -> preflight
/// GET     /{id}           -> get_by_id
/// PUT     /{id}           -> replace
/// DELETE  /{id}           -> delete
/// *       /{id}/{*rest}   -> 400 (extra path segments)
/// ```
///
/// Methods not listed for a matched path fall through to Axum's built-in
/// 405 Method Not Allowed.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(doll::list).post(doll::create).options(doll::preflight),
        )
        .route(
            "/{id}",
            get(doll::get_by_id)
                .put(doll::replace)
                .delete(doll::delete),
        )
        .route("/{id}/{*rest}", any(doll::reject_extra_segments))
}
