//! IFP mapping integration tests
//!
//! Key normalization, wholesale markup replacement and cascade behavior.

mod helpers;

use cm_core::services::ifp_mappings::{
	CreateIfpMapping, IfpMappingService, NewLocationMarkup, UpdateIfpMapping,
};
use cm_core::services::ServiceError;
use cm_core::DatabaseConnection;

fn markup(name: &str, pct: f64) -> NewLocationMarkup {
	NewLocationMarkup {
		name: Some(name.to_string()),
		markup: Some(pct),
	}
}

async fn create_mapping(
	db: &DatabaseConnection,
	ifp_key: &str,
	markups: Vec<NewLocationMarkup>,
) -> cm_core::services::ifp_mappings::IfpMappingRecord {
	IfpMappingService::create(
		db,
		CreateIfpMapping {
			ifp_key: Some(ifp_key.to_string()),
			bt_name: Some("Siding".to_string()),
			cost_group: None,
			location_markups: markups,
		},
	)
	.await
	.expect("Failed to create mapping")
}

#[tokio::test]
async fn ifp_keys_are_stored_lower_cased() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let mapping = create_mapping(db, "Patio", vec![]).await;
	assert_eq!(mapping.record.ifp_key, "patio");

	let fetched = IfpMappingService::get(db, mapping.record.id).await.unwrap();
	assert_eq!(fetched.record.ifp_key, "patio");

	// A different casing of the same key is a duplicate
	let err = IfpMappingService::create(
		db,
		CreateIfpMapping {
			ifp_key: Some("PATIO".into()),
			bt_name: Some("Siding".into()),
			cost_group: None,
			location_markups: vec![],
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Duplicate(_)));
}

#[tokio::test]
async fn supplying_markups_replaces_them_wholesale() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let mapping = create_mapping(
		db,
		"porch",
		vec![
			markup("Austin", 12.5),
			markup("Dallas", 10.0),
			markup("Houston", 8.0),
		],
	)
	.await;
	assert_eq!(mapping.location_markups.len(), 3);

	let updated = IfpMappingService::update(
		db,
		mapping.record.id,
		UpdateIfpMapping {
			bt_name: None,
			cost_group: None,
			location_markups: Some(vec![markup("San Antonio", 9.0), markup("Austin", 13.0)]),
		},
	)
	.await
	.unwrap();

	// Exactly the new set survives, ordered by name
	let names: Vec<&str> = updated
		.location_markups
		.iter()
		.map(|m| m.name.as_str())
		.collect();
	assert_eq!(names, vec!["Austin", "San Antonio"]);

	let fetched = IfpMappingService::get(db, mapping.record.id).await.unwrap();
	assert_eq!(fetched.location_markups.len(), 2);
}

#[tokio::test]
async fn omitting_markups_leaves_existing_rows_untouched() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let mapping = create_mapping(db, "deck", vec![markup("Austin", 12.5), markup("Dallas", 10.0)]).await;

	let updated = IfpMappingService::update(
		db,
		mapping.record.id,
		UpdateIfpMapping {
			bt_name: Some("Decking".into()),
			cost_group: Some(true),
			location_markups: None,
		},
	)
	.await
	.unwrap();

	assert_eq!(updated.record.bt_name, "Decking");
	assert!(updated.record.cost_group);
	assert_eq!(updated.location_markups.len(), 2);
}

#[tokio::test]
async fn an_empty_markup_array_clears_the_set() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let mapping = create_mapping(db, "fence", vec![markup("Austin", 12.5)]).await;

	let updated = IfpMappingService::update(
		db,
		mapping.record.id,
		UpdateIfpMapping {
			bt_name: None,
			cost_group: None,
			location_markups: Some(vec![]),
		},
	)
	.await
	.unwrap();
	assert!(updated.location_markups.is_empty());
}

#[tokio::test]
async fn deleting_a_mapping_cascades_to_its_markups() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let mapping = create_mapping(db, "garage", vec![markup("Austin", 12.5)]).await;

	IfpMappingService::delete(db, mapping.record.id).await.unwrap();

	assert!(matches!(
		IfpMappingService::get(db, mapping.record.id).await.unwrap_err(),
		ServiceError::NotFound(_)
	));

	// No orphaned markup rows left behind
	use cm_core::infrastructure::database::entities::location_markup;
	use sea_orm::EntityTrait;
	let rows = location_markup::Entity::find().all(db).await.unwrap();
	assert!(rows.is_empty());
}

#[tokio::test]
async fn invalid_markups_reject_the_whole_write() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let err = IfpMappingService::create(
		db,
		CreateIfpMapping {
			ifp_key: Some("patio".into()),
			bt_name: Some("Siding".into()),
			cost_group: None,
			location_markups: vec![markup("Austin", -1.0)],
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Validation(_)));

	assert!(IfpMappingService::list(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_orders_by_ifp_key() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	create_mapping(db, "windows", vec![]).await;
	create_mapping(db, "doors", vec![]).await;
	create_mapping(db, "patio", vec![]).await;

	let keys: Vec<String> = IfpMappingService::list(db)
		.await
		.unwrap()
		.into_iter()
		.map(|m| m.record.ifp_key)
		.collect();
	assert_eq!(keys, vec!["doors", "patio", "windows"]);
}
