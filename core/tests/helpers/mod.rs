//! Shared test setup

use cm_core::Database;
use tempfile::TempDir;

/// Fresh migrated database in a temp dir; keep the guard alive for the test.
pub async fn setup() -> (Database, TempDir) {
	let _ = tracing_subscriber::fmt::try_init();

	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	let db = Database::create(&dir.path().join("costmap.db"))
		.await
		.expect("Failed to create database");
	db.migrate().await.expect("Failed to run migrations");

	(db, dir)
}
