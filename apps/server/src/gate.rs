//! Access control gate
//!
//! Exact allow-list of public paths; every other request must carry a valid
//! session cookie. The gate never inspects request bodies.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use cm_core::auth;

use crate::AppState;

pub(crate) const SESSION_COOKIE: &str = "token";

const PUBLIC_PATHS: &[&str] = &["/", "/health", "/auth/login", "/auth/verify", "/auth/logout"];

fn is_public(path: &str) -> bool {
	PUBLIC_PATHS.contains(&path)
}

pub(crate) async fn require_session(
	State(state): State<AppState>,
	jar: CookieJar,
	request: Request,
	next: Next,
) -> Response {
	if is_public(request.uri().path()) {
		return next.run(request).await;
	}

	match jar.get(SESSION_COOKIE) {
		None => Redirect::temporary("/").into_response(),
		Some(cookie) => {
			if auth::verify_token(&state.session_secret, cookie.value()) {
				next.run(request).await
			} else {
				// Stale or forged token: clear it before bouncing to login
				let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
				(jar, Redirect::temporary("/")).into_response()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::is_public;

	#[test]
	fn allow_list_is_exact() {
		assert!(is_public("/"));
		assert!(is_public("/health"));
		assert!(is_public("/auth/login"));
		assert!(is_public("/auth/verify"));
		assert!(is_public("/auth/logout"));

		assert!(!is_public("/models"));
		assert!(!is_public("/ifp-mappings"));
		assert!(!is_public("/auth/login/extra"));
		assert!(!is_public(""));
	}
}
