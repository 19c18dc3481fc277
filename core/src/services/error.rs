//! Service error taxonomy

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Typed outcomes every record service can produce
#[derive(Error, Debug)]
pub enum ServiceError {
	/// Caller-fixable input problem; nothing was written
	#[error("{0}")]
	Validation(String),

	/// The requested id does not resolve
	#[error("{0} not found")]
	NotFound(&'static str),

	/// A sibling with the same display name already exists under the same parent
	#[error("{0}")]
	Duplicate(String),

	/// The referenced parent row is missing
	#[error("{0} not found")]
	MissingParent(&'static str),

	/// Store-level failure, surfaced to callers without internal detail
	#[error("database error: {0}")]
	Database(#[from] DbErr),
}

/// Result type for record service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
	/// Classify a failed write: unique violations become `Duplicate`,
	/// foreign-key violations become `MissingParent`, anything else stays a
	/// store failure.
	pub(crate) fn classify_write(err: DbErr, duplicate: &str, parent: &'static str) -> Self {
		match err.sql_err() {
			Some(SqlErr::UniqueConstraintViolation(_)) => Self::Duplicate(duplicate.to_string()),
			Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::MissingParent(parent),
			_ => Self::Database(err),
		}
	}
}
