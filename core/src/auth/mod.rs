//! Access codes and session tokens
//!
//! There are no user accounts: authentication is possession of an active
//! shared code. The issued token asserts only `authenticated` and expires
//! after 24 hours; verification checks signature and expiry, nothing else.

use crate::infrastructure::database::entities::access_code;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session lifetime, also used as the cookie max-age
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
	authenticated: bool,
	exp: i64,
}

/// True iff an active access code row with this exact value exists.
pub async fn validate_code(db: &DbConn, code: &str) -> Result<bool, DbErr> {
	let record = access_code::Entity::find()
		.filter(access_code::Column::Code.eq(code))
		.one(db)
		.await?;
	Ok(record.is_some_and(|c| c.is_active))
}

/// Issue a signed session token carrying no identity claims.
pub fn generate_token(secret: &[u8]) -> Result<String, jsonwebtoken::errors::Error> {
	let claims = Claims {
		authenticated: true,
		exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
	};
	encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
}

/// Check signature and expiry; claim values are not inspected.
pub fn verify_token(secret: &[u8], token: &str) -> bool {
	decode::<Claims>(
		token,
		&DecodingKey::from_secret(secret),
		&Validation::default(),
	)
	.is_ok()
}

/// Idempotently seed an access code; an existing row is left untouched.
pub async fn ensure_access_code(db: &DbConn, code: &str) -> Result<(), DbErr> {
	let active = access_code::ActiveModel {
		id: Set(Uuid::new_v4()),
		code: Set(code.to_string()),
		is_active: Set(true),
		created_at: Set(Utc::now()),
	};

	let insert = access_code::Entity::insert(active).on_conflict(
		OnConflict::column(access_code::Column::Code)
			.do_nothing()
			.to_owned(),
	);

	match insert.exec(db).await {
		Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
		Err(e) => Err(e),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn token_round_trip() {
		let secret = b"test-secret";
		let token = generate_token(secret).unwrap();
		assert!(verify_token(secret, &token));
	}

	#[test]
	fn tampered_token_rejected() {
		let token = generate_token(b"secret-a").unwrap();
		assert!(!verify_token(b"secret-b", &token));
		assert!(!verify_token(b"secret-a", "not-a-token"));
	}
}
