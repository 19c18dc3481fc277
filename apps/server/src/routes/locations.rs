//! Location endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::locations::{CreateLocation, LocationService, UpdateLocation};
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

pub(super) fn router() -> Router<AppState> {
	Router::new()
		.route("/", get(list).post(create))
		.route("/:id", get(get_one).patch(update).delete(delete_one))
}

async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(LocationService::list(&state.db).await?))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(LocationService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateLocation>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let location = LocationService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(location)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateLocation>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(LocationService::update(&state.db, id, input).await?))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	LocationService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
