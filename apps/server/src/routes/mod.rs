//! HTTP routes, one module per entity family

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{gate, AppState};

mod auth;
mod cost_items;
mod exterior_cost_items;
mod exteriors;
mod ifp_mappings;
mod locations;
mod models;
mod options;

pub(crate) fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(|| async { "CostMap Server!" }))
		.route("/health", get(|| async { "OK" }))
		.nest("/auth", auth::router())
		.nest("/models", models::router())
		.nest("/exteriors", exteriors::router())
		.nest("/options", options::router())
		.nest("/cost-items", cost_items::router())
		.nest("/exterior-cost-items", exterior_cost_items::router())
		.nest("/locations", locations::router())
		.nest("/ifp-mappings", ifp_mappings::router())
		.layer(middleware::from_fn_with_state(
			state.clone(),
			gate::require_session,
		))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
