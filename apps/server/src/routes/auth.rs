//! Login, verify and logout

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cm_core::auth;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::error::ApiError;
use crate::gate::SESSION_COOKIE;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
struct LoginBody {
	code: Option<String>,
}

pub(super) fn router() -> Router<AppState> {
	Router::new()
		.route("/login", post(login))
		.route("/verify", get(verify))
		.route("/logout", post(logout))
}

async fn login(
	State(state): State<AppState>,
	jar: CookieJar,
	payload: Result<Json<LoginBody>, JsonRejection>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
	let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
	let code = body
		.code
		.ok_or_else(|| ApiError::bad_request("Code is required"))?;

	let valid = auth::validate_code(&state.db, &code).await.map_err(|e| {
		error!(error = %e, "Access code lookup failed");
		ApiError::internal()
	})?;
	if !valid {
		return Err(ApiError::unauthorized("Invalid code"));
	}

	let token = auth::generate_token(&state.session_secret).map_err(|e| {
		error!(error = %e, "Token generation failed");
		ApiError::internal()
	})?;

	// HTTP-only so scripts never see the credential
	let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
		.http_only(true)
		.same_site(SameSite::Lax)
		.path("/")
		.max_age(time::Duration::seconds(auth::TOKEN_TTL_SECS))
		.build();

	Ok((jar.add(cookie), Json(json!({ "success": true, "token": token }))))
}

async fn verify(
	State(state): State<AppState>,
	jar: CookieJar,
) -> Result<Json<Value>, ApiError> {
	let token = jar
		.get(SESSION_COOKIE)
		.ok_or_else(|| ApiError::unauthorized("No token found"))?;

	if !auth::verify_token(&state.session_secret, token.value()) {
		return Err(ApiError::unauthorized("Invalid token"));
	}

	Ok(Json(json!({ "authenticated": true })))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
	let cleared = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
	(cleared, Json(json!({ "success": true })))
}
