//! Location registry integration tests

mod helpers;

use cm_core::services::locations::{CreateLocation, LocationService, UpdateLocation};
use cm_core::services::ServiceError;
use cm_core::DatabaseConnection;

async fn create_location(db: &DatabaseConnection, name: &str, markup: f64) -> uuid::Uuid {
	LocationService::create(
		db,
		CreateLocation {
			name: Some(name.to_string()),
			markup: Some(markup),
		},
	)
	.await
	.expect("Failed to create location")
	.id
}

#[tokio::test]
async fn location_names_are_globally_unique() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	create_location(db, "Austin", 12.5).await;

	let err = LocationService::create(
		db,
		CreateLocation {
			name: Some("Austin".into()),
			markup: Some(8.0),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Duplicate(_)));
}

#[tokio::test]
async fn negative_markups_are_rejected() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let err = LocationService::create(
		db,
		CreateLocation {
			name: Some("Austin".into()),
			markup: Some(-0.5),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Validation(_)));

	let id = create_location(db, "Dallas", 10.0).await;
	let err = LocationService::update(
		db,
		id,
		UpdateLocation {
			name: None,
			markup: Some(-3.0),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn partial_update_keeps_the_other_field() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let id = create_location(db, "Austin", 12.5).await;

	let updated = LocationService::update(
		db,
		id,
		UpdateLocation {
			name: None,
			markup: Some(15.0),
		},
	)
	.await
	.unwrap();
	assert_eq!(updated.name, "Austin");
	assert_eq!(updated.markup, 15.0);
}

#[tokio::test]
async fn delete_then_delete_again_reports_not_found() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let id = create_location(db, "Austin", 12.5).await;

	LocationService::delete(db, id).await.unwrap();
	assert!(matches!(
		LocationService::delete(db, id).await.unwrap_err(),
		ServiceError::NotFound(_)
	));
}
