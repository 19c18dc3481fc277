//! Model endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::models::{CreateModel, ModelProjection, ModelService, UpdateModel};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
	include_exteriors: Option<bool>,
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
	let projection = if query.include_exteriors.unwrap_or(false) {
		ModelProjection::Tree
	} else {
		ModelProjection::Shallow
	};
	Ok(Json(ModelService::list(&state.db, projection).await?))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(ModelService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateModel>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let model = ModelService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(model)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateModel>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(ModelService::update(&state.db, id, input).await?))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	ModelService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
