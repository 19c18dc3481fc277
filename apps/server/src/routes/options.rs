//! Option endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cm_core::services::options::{CreateOption, OptionProjection, OptionService, UpdateOption};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
	exterior_id: Option<Uuid>,
	include_cost_items: Option<bool>,
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
	let projection = if query.include_cost_items.unwrap_or(false) {
		OptionProjection::WithCostItems
	} else {
		OptionProjection::Shallow
	};
	Ok(Json(
		OptionService::list(&state.db, query.exterior_id, projection).await?,
	))
}

async fn get_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	Ok(Json(OptionService::get(&state.db, id).await?))
}

async fn create(
	State(state): State<AppState>,
	payload: Result<Json<CreateOption>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let option = OptionService::create(&state.db, input).await?;
	Ok((StatusCode::CREATED, Json(option)))
}

async fn update(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
	payload: Result<Json<UpdateOption>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
	let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	Ok(Json(OptionService::update(&state.db, id, input).await?))
}

async fn delete_one(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
	OptionService::delete(&state.db, id).await?;
	Ok(Json(json!({ "success": true })))
}
