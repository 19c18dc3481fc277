//! Option record service

use super::cost_items;
use super::error::{Result, ServiceError};
use super::validate;
use crate::infrastructure::database::entities::{cost_item, option};
use chrono::Utc;
use sea_orm::{
	ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

const DUPLICATE_NAME: &str = "An option with this name already exists for this exterior";

/// Named projections for option reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionProjection {
	/// Record fields only
	Shallow,
	/// Cost items inline
	WithCostItems,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOption {
	pub name: Option<String>,
	pub exterior_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOption {
	pub name: Option<String>,
}

/// Option with optionally projected cost items
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionTree {
	#[serde(flatten)]
	pub record: option::Model,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost_items: Option<Vec<cost_item::Model>>,
}

pub struct OptionService;

impl OptionService {
	/// List options alphabetically, optionally scoped to one exterior.
	pub async fn list(
		db: &DbConn,
		exterior_id: Option<Uuid>,
		projection: OptionProjection,
	) -> Result<Vec<OptionTree>> {
		let mut query = option::Entity::find().order_by_asc(option::Column::Name);
		if let Some(exterior_id) = exterior_id {
			query = query.filter(option::Column::ExteriorId.eq(exterior_id));
		}
		let records = query.all(db).await?;

		match projection {
			OptionProjection::Shallow => Ok(records
				.into_iter()
				.map(|record| OptionTree {
					record,
					cost_items: None,
				})
				.collect()),
			OptionProjection::WithCostItems => Self::load_trees(db, records).await,
		}
	}

	/// Fetch one option with its cost items.
	pub async fn get(db: &DbConn, id: Uuid) -> Result<OptionTree> {
		let record = option::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Option"))?;

		let mut trees = Self::load_trees(db, vec![record]).await?;
		Ok(trees.remove(0))
	}

	pub async fn create(db: &DbConn, input: CreateOption) -> Result<option::Model> {
		let name = validate::required_name("Option name", input.name)?;
		let exterior_id = validate::required_parent("Exterior ID", input.exterior_id)?;
		let now = Utc::now();

		let active = option::ActiveModel {
			id: Set(Uuid::new_v4()),
			name: Set(name),
			exterior_id: Set(exterior_id),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Exterior"))
	}

	pub async fn update(db: &DbConn, id: Uuid, input: UpdateOption) -> Result<option::Model> {
		let existing = option::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Option"))?;

		let mut active: option::ActiveModel = existing.into();
		if let Some(name) = input.name {
			active.name = Set(validate::required_name("Option name", Some(name))?);
		}
		active.updated_at = Set(Utc::now());

		active
			.update(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Exterior"))
	}

	/// Removes the option and cascades through its cost items.
	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = option::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Option"));
		}
		Ok(())
	}

	async fn load_trees(db: &DbConn, records: Vec<option::Model>) -> Result<Vec<OptionTree>> {
		let ids: Vec<Uuid> = records.iter().map(|o| o.id).collect();
		let mut cost_items = cost_items::by_option(db, &ids).await?;

		Ok(records
			.into_iter()
			.map(|record| {
				let children = cost_items.remove(&record.id).unwrap_or_default();
				OptionTree {
					record,
					cost_items: Some(children),
				}
			})
			.collect())
	}
}

/// Option subtrees (with cost items) for all options under the given
/// exteriors, keyed by exterior id.
pub(crate) async fn subtree_by_exterior(
	db: &DbConn,
	exterior_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<OptionTree>>> {
	if exterior_ids.is_empty() {
		return Ok(HashMap::new());
	}

	let records = option::Entity::find()
		.filter(option::Column::ExteriorId.is_in(exterior_ids.iter().copied()))
		.order_by_asc(option::Column::Name)
		.all(db)
		.await?;

	let ids: Vec<Uuid> = records.iter().map(|o| o.id).collect();
	let mut cost_items = cost_items::by_option(db, &ids).await?;

	let mut grouped: HashMap<Uuid, Vec<OptionTree>> = HashMap::new();
	for record in records {
		let children = cost_items.remove(&record.id).unwrap_or_default();
		grouped
			.entry(record.exterior_id)
			.or_default()
			.push(OptionTree {
				record,
				cost_items: Some(children),
			});
	}

	Ok(grouped)
}
