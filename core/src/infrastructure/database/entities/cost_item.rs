//! Cost item entity
//!
//! `cost_group` and `is_default` are independent flags: `is_default` marks
//! the item as applied when the owning option is not selected.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cost_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub bt_name: String,
	pub cost_group: bool,
	pub is_default: bool,
	pub option_id: Uuid,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::option::Entity",
		from = "Column::OptionId",
		to = "super::option::Column::Id"
	)]
	Option,
}

impl Related<super::option::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Option.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
