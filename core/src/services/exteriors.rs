//! Exterior record service

use super::error::{Result, ServiceError};
use super::options::{self, OptionTree};
use super::validate;
use crate::infrastructure::database::entities::exterior;
use chrono::Utc;
use sea_orm::{
	ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

const DUPLICATE_NAME: &str = "An exterior with this name already exists for this model";

/// Named projections for exterior reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExteriorProjection {
	/// Record fields only
	Shallow,
	/// Options with their cost items
	WithOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExterior {
	pub name: Option<String>,
	pub model_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExterior {
	pub name: Option<String>,
}

/// Exterior with optionally projected descendants
#[derive(Debug, Serialize)]
pub struct ExteriorTree {
	#[serde(flatten)]
	pub record: exterior::Model,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<OptionTree>>,
}

pub struct ExteriorService;

impl ExteriorService {
	/// List exteriors alphabetically, optionally scoped to one model.
	pub async fn list(
		db: &DbConn,
		model_id: Option<Uuid>,
		projection: ExteriorProjection,
	) -> Result<Vec<ExteriorTree>> {
		let mut query = exterior::Entity::find().order_by_asc(exterior::Column::Name);
		if let Some(model_id) = model_id {
			query = query.filter(exterior::Column::ModelId.eq(model_id));
		}
		let records = query.all(db).await?;

		match projection {
			ExteriorProjection::Shallow => Ok(records
				.into_iter()
				.map(|record| ExteriorTree {
					record,
					options: None,
				})
				.collect()),
			ExteriorProjection::WithOptions => Self::load_trees(db, records).await,
		}
	}

	/// Fetch one exterior with its options and their cost items.
	pub async fn get(db: &DbConn, id: Uuid) -> Result<ExteriorTree> {
		let record = exterior::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Exterior"))?;

		let mut trees = Self::load_trees(db, vec![record]).await?;
		Ok(trees.remove(0))
	}

	pub async fn create(db: &DbConn, input: CreateExterior) -> Result<exterior::Model> {
		let name = validate::required_name("Exterior name", input.name)?;
		let model_id = validate::required_parent("Model ID", input.model_id)?;
		let now = Utc::now();

		let active = exterior::ActiveModel {
			id: Set(Uuid::new_v4()),
			name: Set(name),
			model_id: Set(model_id),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Model"))
	}

	pub async fn update(db: &DbConn, id: Uuid, input: UpdateExterior) -> Result<exterior::Model> {
		let existing = exterior::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Exterior"))?;

		let mut active: exterior::ActiveModel = existing.into();
		if let Some(name) = input.name {
			active.name = Set(validate::required_name("Exterior name", Some(name))?);
		}
		active.updated_at = Set(Utc::now());

		active
			.update(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Model"))
	}

	/// Removes the exterior and cascades through its options, cost items and
	/// exterior cost items.
	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = exterior::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Exterior"));
		}
		Ok(())
	}

	async fn load_trees(db: &DbConn, records: Vec<exterior::Model>) -> Result<Vec<ExteriorTree>> {
		let ids: Vec<Uuid> = records.iter().map(|e| e.id).collect();
		let mut options = options::subtree_by_exterior(db, &ids).await?;

		Ok(records
			.into_iter()
			.map(|record| {
				let children = options.remove(&record.id).unwrap_or_default();
				ExteriorTree {
					record,
					options: Some(children),
				}
			})
			.collect())
	}
}

/// Subtrees (options + cost items) for all exteriors under the given models,
/// keyed by model id. Children are alphabetical at every level.
pub(crate) async fn subtree_by_model(
	db: &DbConn,
	model_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<ExteriorTree>>> {
	if model_ids.is_empty() {
		return Ok(HashMap::new());
	}

	let records = exterior::Entity::find()
		.filter(exterior::Column::ModelId.is_in(model_ids.iter().copied()))
		.order_by_asc(exterior::Column::Name)
		.all(db)
		.await?;

	let ids: Vec<Uuid> = records.iter().map(|e| e.id).collect();
	let mut options = options::subtree_by_exterior(db, &ids).await?;

	let mut grouped: HashMap<Uuid, Vec<ExteriorTree>> = HashMap::new();
	for record in records {
		let children = options.remove(&record.id).unwrap_or_default();
		grouped.entry(record.model_id).or_default().push(ExteriorTree {
			record,
			options: Some(children),
		});
	}

	Ok(grouped)
}
