//! IFP mapping entity
//!
//! Flat mapping from an IFP key to a BT name. Keys are stored lower-cased
//! and are immutable once assigned.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ifp_mappings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub ifp_key: String,
	pub bt_name: String,
	pub cost_group: bool,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::location_markup::Entity")]
	LocationMarkup,
}

impl Related<super::location_markup::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::LocationMarkup.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
