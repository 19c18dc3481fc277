//! Exterior cost item record service

use super::error::{Result, ServiceError};
use super::validate;
use crate::infrastructure::database::entities::exterior_cost_item;
use chrono::Utc;
use sea_orm::{
	ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use uuid::Uuid;

const DUPLICATE_NAME: &str = "An exterior cost item with this BT name already exists for this exterior";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExteriorCostItem {
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	pub is_default: Option<bool>,
	pub exterior_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExteriorCostItem {
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	pub is_default: Option<bool>,
}

pub struct ExteriorCostItemService;

impl ExteriorCostItemService {
	/// List exterior cost items alphabetically by BT name, optionally scoped
	/// to one exterior.
	pub async fn list(
		db: &DbConn,
		exterior_id: Option<Uuid>,
	) -> Result<Vec<exterior_cost_item::Model>> {
		let mut query =
			exterior_cost_item::Entity::find().order_by_asc(exterior_cost_item::Column::BtName);
		if let Some(exterior_id) = exterior_id {
			query = query.filter(exterior_cost_item::Column::ExteriorId.eq(exterior_id));
		}
		Ok(query.all(db).await?)
	}

	pub async fn get(db: &DbConn, id: Uuid) -> Result<exterior_cost_item::Model> {
		exterior_cost_item::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Exterior cost item"))
	}

	pub async fn create(
		db: &DbConn,
		input: CreateExteriorCostItem,
	) -> Result<exterior_cost_item::Model> {
		let bt_name = validate::required_name("BT name", input.bt_name)?;
		let exterior_id = validate::required_parent("Exterior ID", input.exterior_id)?;
		let now = Utc::now();

		let active = exterior_cost_item::ActiveModel {
			id: Set(Uuid::new_v4()),
			bt_name: Set(bt_name),
			cost_group: Set(input.cost_group.unwrap_or(false)),
			is_default: Set(input.is_default.unwrap_or(false)),
			exterior_id: Set(exterior_id),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Exterior"))
	}

	pub async fn update(
		db: &DbConn,
		id: Uuid,
		input: UpdateExteriorCostItem,
	) -> Result<exterior_cost_item::Model> {
		let existing = exterior_cost_item::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Exterior cost item"))?;

		let mut active: exterior_cost_item::ActiveModel = existing.into();
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
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Exterior"))
	}

	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = exterior_cost_item::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Exterior cost item"));
		}
		Ok(())
	}
}
