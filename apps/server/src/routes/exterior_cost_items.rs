//! Exterior cost item endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::exterior_cost_items::{
	CreateExteriorCostItem, ExteriorCostItemService, UpdateExteriorCostItem,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
	exterior_id: Option<Uuid>,
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
	Ok(Json(
		ExteriorCostItemService::list(&state.db, query.exterior_id).await?,
	))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(ExteriorCostItemService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateExteriorCostItem>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let item = ExteriorCostItemService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(item)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateExteriorCostItem>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(
		ExteriorCostItemService::update(&state.db, id, input).await?,
	))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	ExteriorCostItemService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
