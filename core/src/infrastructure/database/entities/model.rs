//! Model entity
//!
//! Root of the hierarchy. Model names are globally unique; deleting a model
//! cascades through exteriors, options and cost items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "models")]
#[serde(rename_all = "camelCase")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub name: String,
	pub description: Option<String>,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::exterior::Entity")]
	Exterior,
}

impl Related<super::exterior::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Exterior.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
