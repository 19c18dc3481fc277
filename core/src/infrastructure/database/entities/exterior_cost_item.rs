//! Exterior cost item entity
//!
//! Like a cost item, but attached directly to an exterior rather than to
//! one of its options.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exterior_cost_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub bt_name: String,
	pub cost_group: bool,
	pub is_default: bool,
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
}

impl Related<super::exterior::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Exterior.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
