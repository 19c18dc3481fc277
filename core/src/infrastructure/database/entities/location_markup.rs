//! Location markup entity
//!
//! Wholly owned by an IFP mapping; the owning mapping replaces its markup
//! rows wholesale on update.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_markups")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub name: String,
	pub markup: f64,
	pub ifp_mapping_id: Uuid,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::ifp_mapping::Entity",
		from = "Column::IfpMappingId",
		to = "super::ifp_mapping::Column::Id"
	)]
	IfpMapping,
}

impl Related<super::ifp_mapping::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::IfpMapping.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
