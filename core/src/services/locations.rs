//! Location record service
//!
//! Locations are a flat, global registry; nothing references them by key.

use super::error::{Result, ServiceError};
use super::validate;
use crate::infrastructure::database::entities::location;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbConn, EntityTrait, QueryOrder};
use serde::Deserialize;
use uuid::Uuid;

const DUPLICATE_NAME: &str = "Location name already exists";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
	pub name: Option<String>,
	pub markup: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocation {
	pub name: Option<String>,
	pub markup: Option<f64>,
}

pub struct LocationService;

impl LocationService {
	pub async fn list(db: &DbConn) -> Result<Vec<location::Model>> {
		Ok(location::Entity::find()
			.order_by_asc(location::Column::Name)
			.all(db)
			.await?)
	}

	pub async fn get(db: &DbConn, id: Uuid) -> Result<location::Model> {
		location::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Location"))
	}

	pub async fn create(db: &DbConn, input: CreateLocation) -> Result<location::Model> {
		let name = validate::required_name("Location name", input.name)?;
		let markup = validate::required_markup("Location markup", input.markup)?;
		let now = Utc::now();

		let active = location::ActiveModel {
			id: Set(Uuid::new_v4()),
			name: Set(name),
			markup: Set(markup),
			created_at: Set(now),
			updated_at: Set(now),
		};

		active
			.insert(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Location"))
	}

	pub async fn update(db: &DbConn, id: Uuid, input: UpdateLocation) -> Result<location::Model> {
		let existing = location::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Location"))?;

		let mut active: location::ActiveModel = existing.into();
		if let Some(name) = input.name {
			active.name = Set(validate::required_name("Location name", Some(name))?);
		}
		if let Some(markup) = input.markup {
			active.markup = Set(validate::non_negative("Location markup", markup)?);
		}
		active.updated_at = Set(Utc::now());

		active
			.update(db)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_NAME, "Location"))
	}

	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = location::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Location"));
		}
		Ok(())
	}
}
