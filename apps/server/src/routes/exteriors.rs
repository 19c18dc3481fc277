//! Exterior endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::exteriors::{
	CreateExterior, ExteriorProjection, ExteriorService, UpdateExterior,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
	model_id: Option<Uuid>,
	include_options: Option<bool>,
}

pub(super) fn router() -> Router<AppState> {
	Router::new()
		.route("/", get(list).post(create))
		.route("/:id", get(get_one).patch(update).delete(delete_one))
}

async fn list(
	State(state): State<AppState>,
	Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
	let projection = if query.include_options.unwrap_or(false) {
		ExteriorProjection::WithOptions
	} else {
		ExteriorProjection::Shallow
	};
	Ok(Json(
		ExteriorService::list(&state.db, query.model_id, projection).await?,
	))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(ExteriorService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateExterior>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let exterior = ExteriorService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(exterior)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateExterior>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(ExteriorService::update(&state.db, id, input).await?))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	ExteriorService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
