//! Handlers for the `/dolls` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dolls_db::models::doll::{CreateDoll, Doll};
use dolls_db::repositories::DollRepo;
use dolls_db::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/dolls
///
/// Always renders a JSON array; an empty collection is `[]`, never null.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Doll>>> {
    let dolls = DollRepo::fetch_all(&state.gateway).await?;
    Ok(Json(dolls))
}

/// POST /api/dolls
///
/// The success body is plain text naming the generated id, not JSON.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDoll>, JsonRejection>,
) -> AppResult<(StatusCode, String)> {
    let Json(input) = payload.map_err(AppError::decode)?;
    let id = DollRepo::create(&state.gateway, &input)
        .await
        .map_err(AppError::WriteRejected)?;
    Ok((StatusCode::CREATED, format!("dollID:{id}")))
}

/// OPTIONS /api/dolls — no-op, the CORS headers come from the middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// GET /api/dolls/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Doll>> {
    let id = parse_id(&raw_id)?;
    let doll = DollRepo::fetch_one(&state.gateway, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(doll))
}

/// PUT /api/dolls/{id}
///
/// Full replacement; a non-existent id still succeeds (no existence check).
pub async fn replace(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CreateDoll>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload.map_err(AppError::decode)?;
    DollRepo::replace(&state.gateway, id, &input)
        .await
        .map_err(AppError::WriteRejected)?;
    Ok(StatusCode::OK)
}

/// DELETE /api/dolls/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    DollRepo::remove(&state.gateway, id).await?;
    Ok(StatusCode::OK)
}

/// Any method on `/api/dolls/{id}/...`: extra trailing segments address
/// nothing and are a malformed path, not a missing resource.
pub async fn reject_extra_segments() -> AppError {
    AppError::BadPath
}

/// An id segment that does not parse as an integer addresses no resource,
/// so it maps to 404 rather than 400; parsing details are not leaked.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>().map_err(|_| AppError::NotFound)
}
