//! Exterior entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exteriors")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub name: String,
	pub model_id: Uuid,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::model::Entity",
		from = "Column::ModelId",
		to = "super::model::Column::Id"
	)]
	Model,
	#[sea_orm(has_many = "super::option::Entity")]
	Option,
	#[sea_orm(has_many = "super::exterior_cost_item::Entity")]
	ExteriorCostItem,
}

impl Related<super::model::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Model.def()
	}
}

impl Related<super::option::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Option.def()
	}
}

impl Related<super::exterior_cost_item::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::ExteriorCostItem.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
