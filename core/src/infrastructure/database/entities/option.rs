//! Option entity
//!
//! A selectable variant under an exterior, e.g. a siding or trim package.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "options")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub name: String,
	pub exterior_id: Uuid,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::exterior::Entity",
		from = "Column::ExteriorId",
		to = "super::exterior::Column::Id"
	)]
	Exterior,
	#[sea_orm(has_many = "super::cost_item::Entity")]
	CostItem,
}

impl Related<super::exterior::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Exterior.def()
	}
}

impl Related<super::cost_item::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::CostItem.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
