//! Hierarchy integration tests
//!
//! Exercises uniqueness scoping, cascade deletes, idempotent deletes and
//! partial updates across Model → Exterior → Option → Cost Item.

mod helpers;

use cm_core::services::cost_items::{CostItemService, CreateCostItem};
use cm_core::services::exterior_cost_items::{CreateExteriorCostItem, ExteriorCostItemService};
use cm_core::services::exteriors::{CreateExterior, ExteriorProjection, ExteriorService};
use cm_core::services::models::{CreateModel, ModelProjection, ModelService, UpdateModel};
use cm_core::services::options::{CreateOption, OptionProjection, OptionService};
use cm_core::services::ServiceError;
use cm_core::DatabaseConnection;
use uuid::Uuid;

async fn create_model(db: &DatabaseConnection, name: &str) -> Uuid {
	ModelService::create(
		db,
		CreateModel {
			name: Some(name.to_string()),
			description: None,
		},
	)
	.await
	.expect("Failed to create model")
	.id
}

async fn create_exterior(db: &DatabaseConnection, model_id: Uuid, name: &str) -> Uuid {
	ExteriorService::create(
		db,
		CreateExterior {
			name: Some(name.to_string()),
			model_id: Some(model_id),
		},
	)
	.await
	.expect("Failed to create exterior")
	.id
}

async fn create_option(db: &DatabaseConnection, exterior_id: Uuid, name: &str) -> Uuid {
	OptionService::create(
		db,
		CreateOption {
			name: Some(name.to_string()),
			exterior_id: Some(exterior_id),
		},
	)
	.await
	.expect("Failed to create option")
	.id
}

async fn create_cost_item(db: &DatabaseConnection, option_id: Uuid, bt_name: &str) -> Uuid {
	CostItemService::create(
		db,
		CreateCostItem {
			bt_name: Some(bt_name.to_string()),
			cost_group: None,
			is_default: None,
			option_id: Some(option_id),
		},
	)
	.await
	.expect("Failed to create cost item")
	.id
}

#[tokio::test]
async fn exterior_names_are_unique_per_model() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let m1 = create_model(db, "Model A").await;
	let m2 = create_model(db, "Model B").await;

	create_exterior(db, m1, "Classic").await;

	// Same name under the same model collides
	let err = ExteriorService::create(
		db,
		CreateExterior {
			name: Some("Classic".into()),
			model_id: Some(m1),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Duplicate(_)));

	// Same name under a different model is fine
	create_exterior(db, m2, "Classic").await;
}

#[tokio::test]
async fn deleting_a_model_removes_every_descendant() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let model_id = create_model(db, "Cascade Model").await;

	let mut exterior_ids = Vec::new();
	let mut option_ids = Vec::new();
	let mut cost_item_ids = Vec::new();
	let mut exterior_cost_item_ids = Vec::new();

	for e in 0..2 {
		let exterior_id = create_exterior(db, model_id, &format!("Exterior {e}")).await;
		exterior_ids.push(exterior_id);

		let eci = ExteriorCostItemService::create(
			db,
			CreateExteriorCostItem {
				bt_name: Some(format!("Exterior BT {e}")),
				cost_group: None,
				is_default: None,
				exterior_id: Some(exterior_id),
			},
		)
		.await
		.expect("Failed to create exterior cost item");
		exterior_cost_item_ids.push(eci.id);

		for o in 0..2 {
			let option_id = create_option(db, exterior_id, &format!("Option {o}")).await;
			option_ids.push(option_id);

			for c in 0..2 {
				cost_item_ids.push(create_cost_item(db, option_id, &format!("BT {c}")).await);
			}
		}
	}

	ModelService::delete(db, model_id)
		.await
		.expect("Failed to delete model");

	assert!(matches!(
		ModelService::get(db, model_id).await.unwrap_err(),
		ServiceError::NotFound(_)
	));
	for id in exterior_ids {
		assert!(matches!(
			ExteriorService::get(db, id).await.unwrap_err(),
			ServiceError::NotFound(_)
		));
	}
	for id in option_ids {
		assert!(matches!(
			OptionService::get(db, id).await.unwrap_err(),
			ServiceError::NotFound(_)
		));
	}
	for id in cost_item_ids {
		assert!(matches!(
			CostItemService::get(db, id).await.unwrap_err(),
			ServiceError::NotFound(_)
		));
	}
	for id in exterior_cost_item_ids {
		assert!(matches!(
			ExteriorCostItemService::get(db, id).await.unwrap_err(),
			ServiceError::NotFound(_)
		));
	}

	// Nothing survives at any level
	assert!(ExteriorService::list(db, None, ExteriorProjection::Shallow)
		.await
		.unwrap()
		.is_empty());
	assert!(OptionService::list(db, None, OptionProjection::Shallow)
		.await
		.unwrap()
		.is_empty());
	assert!(CostItemService::list(db, None).await.unwrap().is_empty());
	assert!(ExteriorCostItemService::list(db, None)
		.await
		.unwrap()
		.is_empty());
}

#[tokio::test]
async fn second_delete_reports_not_found() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let model_id = create_model(db, "Short Lived").await;

	ModelService::delete(db, model_id).await.unwrap();
	assert!(matches!(
		ModelService::delete(db, model_id).await.unwrap_err(),
		ServiceError::NotFound(_)
	));
}

#[tokio::test]
async fn partial_update_preserves_untouched_fields() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let model = ModelService::create(
		db,
		CreateModel {
			name: Some("C1 Model 1188".into()),
			description: Some("Two story".into()),
		},
	)
	.await
	.unwrap();

	// Touch only the description
	let updated = ModelService::update(
		db,
		model.id,
		UpdateModel {
			name: None,
			description: Some(Some("Two story, three bed".into())),
		},
	)
	.await
	.unwrap();
	assert_eq!(updated.name, "C1 Model 1188");
	assert_eq!(updated.description.as_deref(), Some("Two story, three bed"));

	// An explicit null clears it without touching the name
	let cleared = ModelService::update(
		db,
		model.id,
		UpdateModel {
			name: None,
			description: Some(None),
		},
	)
	.await
	.unwrap();
	assert_eq!(cleared.name, "C1 Model 1188");
	assert_eq!(cleared.description, None);

	// Omitting the field entirely leaves it alone
	let renamed = ModelService::update(
		db,
		model.id,
		UpdateModel {
			name: Some("C1 Model 1190".into()),
			description: None,
		},
	)
	.await
	.unwrap();
	assert_eq!(renamed.name, "C1 Model 1190");
	assert_eq!(renamed.description, None);
}

#[tokio::test]
async fn renaming_onto_a_sibling_is_a_duplicate() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	create_model(db, "First").await;
	let second = create_model(db, "Second").await;

	let err = ModelService::update(
		db,
		second,
		UpdateModel {
			name: Some("First".into()),
			description: None,
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Duplicate(_)));
}

#[tokio::test]
async fn dangling_parent_references_are_rejected() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let err = ExteriorService::create(
		db,
		CreateExterior {
			name: Some("Orphan".into()),
			model_id: Some(Uuid::new_v4()),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::MissingParent("Model")));

	let err = OptionService::create(
		db,
		CreateOption {
			name: Some("Orphan".into()),
			exterior_id: Some(Uuid::new_v4()),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::MissingParent("Exterior")));

	let err = CostItemService::create(
		db,
		CreateCostItem {
			bt_name: Some("Orphan".into()),
			cost_group: None,
			is_default: None,
			option_id: Some(Uuid::new_v4()),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::MissingParent("Option")));
}

#[tokio::test]
async fn blank_names_are_rejected_before_any_write() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let err = ModelService::create(
		db,
		CreateModel {
			name: Some("   ".into()),
			description: None,
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Validation(_)));

	assert!(ModelService::list(db, ModelProjection::Shallow)
		.await
		.unwrap()
		.is_empty());
}

#[tokio::test]
async fn lists_are_alphabetical() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	create_model(db, "Zion").await;
	create_model(db, "Aspen").await;
	create_model(db, "Madison").await;

	let names: Vec<String> = ModelService::list(db, ModelProjection::Shallow)
		.await
		.unwrap()
		.into_iter()
		.map(|m| m.record.name)
		.collect();
	assert_eq!(names, vec!["Aspen", "Madison", "Zion"]);
}

#[tokio::test]
async fn tree_projection_nests_the_whole_subtree() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let model_id = create_model(db, "Projected").await;
	let exterior_id = create_exterior(db, model_id, "Classic").await;
	let option_id = create_option(db, exterior_id, "Board and Batten").await;
	create_cost_item(db, option_id, "Siding Labor").await;
	create_cost_item(db, option_id, "Siding Material").await;

	let tree = ModelService::get(db, model_id).await.unwrap();
	let exteriors = tree.exteriors.expect("subtree should be loaded");
	assert_eq!(exteriors.len(), 1);

	let options = exteriors[0].options.as_ref().expect("options loaded");
	assert_eq!(options.len(), 1);

	let cost_items = options[0].cost_items.as_ref().expect("cost items loaded");
	let bt_names: Vec<&str> = cost_items.iter().map(|c| c.bt_name.as_str()).collect();
	assert_eq!(bt_names, vec!["Siding Labor", "Siding Material"]);

	// Shallow list leaves the subtree out
	let shallow = ModelService::list(db, ModelProjection::Shallow).await.unwrap();
	assert!(shallow[0].exteriors.is_none());
}

// The end-to-end scenario: create, collide, cascade, 404.
#[tokio::test]
async fn create_collide_cascade_scenario() {
	let (db, _dir) = helpers::setup().await;
	let db = db.conn();

	let model_id = create_model(db, "C1 Model 1188").await;
	let exterior_id = create_exterior(db, model_id, "Classic").await;

	let err = ExteriorService::create(
		db,
		CreateExterior {
			name: Some("Classic".into()),
			model_id: Some(model_id),
		},
	)
	.await
	.unwrap_err();
	assert!(matches!(err, ServiceError::Duplicate(_)));

	ModelService::delete(db, model_id).await.unwrap();

	assert!(matches!(
		ExteriorService::get(db, exterior_id).await.unwrap_err(),
		ServiceError::NotFound(_)
	));
}
