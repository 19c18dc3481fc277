//! Model record service

use super::error::{Result, ServiceError};
use super::exteriors::{self, ExteriorTree};
use super::validate;
use crate::infrastructure::database::entities::model;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbConn, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DUPLICATE_NAME: &str = "A model with this name already exists";

/// Named projections for model reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProjection {
	/// Record fields only
	Shallow,
	/// Exteriors with their options and cost items, each level alphabetical
	Tree,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
	pub name: Option<String>,
	pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModel {
	pub name: Option<String>,
	#[serde(default, deserialize_with = "super::double_option")]
	pub description: Option<Option<String>>,
}

/// Model with optionally projected descendants
#[derive(Debug, Serialize)]
pub struct ModelTree {
	#[serde(flatten)]
	pub record: model::Model,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exteriors: Option<Vec<ExteriorTree>>,
}

pub struct ModelService;

impl ModelService {
	/// List all models alphabetically.
	pub async fn list(db: &DbConn, projection: ModelProjection) -> Result<Vec<ModelTree>> {
		let records = model::Entity::find()
			.order_by_asc(model::Column::Name)
			.all(db)
			.await?;

		match projection {
			ModelProjection::Shallow => Ok(records
				.into_iter()
				.map(|record| ModelTree {
					record,
					exteriors: None,
				})
				.collect()),
			ModelProjection::Tree => Self::load_trees(db, records).await,
		}
	}

	/// Fetch one model with its whole subtree.
	pub async fn get(db: &DbConn, id: Uuid) -> Result<ModelTree> {
		let record = model::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Model"))?;

		let mut trees = Self::load_trees(db, vec![record]).await?;
		Ok(trees.remove(0))
	}

	pub async fn create(db: &DbConn, input: CreateModel) -> Result<model::Model> {
		let name = validate::required_name("Model name", input.name)?;
		let now = Utc::now();

		let active = model::ActiveModel {
			id: Set(Uuid::new_v4()),
			name: Set(name),
			description: Set(validate::optional_trimmed(input.description)),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Model"))
	}

	/// Only supplied fields change; an explicit `description: null` clears it.
	pub async fn update(db: &DbConn, id: Uuid, input: UpdateModel) -> Result<model::Model> {
		let existing = model::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Model"))?;

		let mut active: model::ActiveModel = existing.into();
		if let Some(name) = input.name {
			active.name = Set(validate::required_name("Model name", Some(name))?);
		}
		if let Some(description) = input.description {
			active.description = Set(validate::optional_trimmed(description));
		}
		active.updated_at = Set(Utc::now());

		active
			.update(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Model"))
	}

	/// Removes the model and, via the schema's cascade rules, every
	/// descendant exterior, option and cost item.
	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = model::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Model"));
		}
		Ok(())
	}

	async fn load_trees(db: &DbConn, records: Vec<model::Model>) -> Result<Vec<ModelTree>> {
		let ids: Vec<Uuid> = records.iter().map(|m| m.id).collect();
		let mut exteriors = exteriors::subtree_by_model(db, &ids).await?;

		Ok(records
			.into_iter()
			.map(|record| {
				let children = exteriors.remove(&record.id).unwrap_or_default();
				ModelTree {
					record,
					exteriors: Some(children),
				}
			})
			.collect())
	}
}
