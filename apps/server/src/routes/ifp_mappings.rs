//! IFP mapping endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::ifp_mappings::{CreateIfpMapping, IfpMappingService, UpdateIfpMapping};
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
	Ok(Json(IfpMappingService::list(&state.db).await?))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(IfpMappingService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateIfpMapping>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let mapping = IfpMappingService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(mapping)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateIfpMapping>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(IfpMappingService::update(&state.db, id, input).await?))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	IfpMappingService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
