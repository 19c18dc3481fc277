//! Cost item record service

use super::error::{Result, ServiceError};
use super::validate;
use crate::infrastructure::database::entities::cost_item;
use chrono::Utc;
use sea_orm::{
	ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

const DUPLICATE_NAME: &str = "A cost item with this BT name already exists for this option";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostItem {
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	pub is_default: Option<bool>,
	pub option_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostItem {
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	pub is_default: Option<bool>,
}

pub struct CostItemService;

impl CostItemService {
	/// List cost items alphabetically by BT name, optionally scoped to one
	/// option.
	pub async fn list(db: &DbConn, option_id: Option<Uuid>) -> Result<Vec<cost_item::Model>> {
		let mut query = cost_item::Entity::find().order_by_asc(cost_item::Column::BtName);
		if let Some(option_id) = option_id {
			query = query.filter(cost_item::Column::OptionId.eq(option_id));
		}
		Ok(query.all(db).await?)
	}

	pub async fn get(db: &DbConn, id: Uuid) -> Result<cost_item::Model> {
		cost_item::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Cost item"))
	}

	pub async fn create(db: &DbConn, input: CreateCostItem) -> Result<cost_item::Model> {
		let bt_name = validate::required_name("BT name", input.bt_name)?;
		let option_id = validate::required_parent("Option ID", input.option_id)?;
		let now = Utc::now();

		let active = cost_item::ActiveModel {
			id: Set(Uuid::new_v4()),
			bt_name: Set(bt_name),
			cost_group: Set(input.cost_group.unwrap_or(false)),
			is_default: Set(input.is_default.unwrap_or(false)),
			option_id: Set(option_id),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Option"))
	}

	pub async fn update(db: &DbConn, id: Uuid, input: UpdateCostItem) -> Result<cost_item::Model> {
		let existing = cost_item::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Cost item"))?;

		let mut active: cost_item::ActiveModel = existing.into();
		if let Some(bt_name) = input.bt_name {
			active.bt_name = Set(validate::required_name("BT name", Some(bt_name))?);
		}
		if let Some(cost_group) = input.cost_group {
			active.cost_group = Set(cost_group);
		}
		if let Some(is_default) = input.is_default {
			active.is_default = Set(is_default);
		}
		active.updated_at = Set(Utc::now());

		active
			.update(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Option"))
	}

	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = cost_item::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Cost item"));
		}
		Ok(())
	}
}

/// Cost items for all of the given options, keyed by option id, each group
/// alphabetical by BT name.
pub(crate) async fn by_option(
	db: &DbConn,
	option_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<cost_item::Model>>> {
	if option_ids.is_empty() {
		return Ok(HashMap::new());
	}

	let records = cost_item::Entity::find()
		.filter(cost_item::Column::OptionId.is_in(option_ids.iter().copied()))
		.order_by_asc(cost_item::Column::BtName)
		.all(db)
		.await?;

	let mut grouped: HashMap<Uuid, Vec<cost_item::Model>> = HashMap::new();
	for record in records {
		grouped.entry(record.option_id).or_default().push(record);
	}

	Ok(grouped)
}
