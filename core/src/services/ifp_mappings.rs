//! IFP mapping record service
//!
//! Mappings own their location markups outright: when an update supplies a
//! `locationMarkups` array the existing rows are deleted and the new set is
//! inserted in the same transaction. Omitting the field leaves them alone.

use super::error::{Result, ServiceError};
use super::validate;
use crate::infrastructure::database::entities::{ifp_mapping, location_markup};
use chrono::Utc;
use sea_orm::{
	ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbConn, EntityTrait,
	QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

const DUPLICATE_KEY: &str = "IFP key already exists";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocationMarkup {
	pub name: Option<String>,
	pub markup: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIfpMapping {
	pub ifp_key: Option<String>,
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	#[serde(default)]
	pub location_markups: Vec<NewLocationMarkup>,
}

/// `ifp_key` is deliberately absent: the key is the mapping's natural
/// identifier and cannot change once assigned.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIfpMapping {
	pub bt_name: Option<String>,
	pub cost_group: Option<bool>,
	pub location_markups: Option<Vec<NewLocationMarkup>>,
}

/// Mapping with its owned markups, ordered by location name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IfpMappingRecord {
	#[serde(flatten)]
	pub record: ifp_mapping::Model,
	pub location_markups: Vec<location_markup::Model>,
}

pub struct IfpMappingService;

impl IfpMappingService {
	/// List all mappings ordered by IFP key, markups inline.
	pub async fn list(db: &DbConn) -> Result<Vec<IfpMappingRecord>> {
		let records = ifp_mapping::Entity::find()
			.order_by_asc(ifp_mapping::Column::IfpKey)
			.all(db)
			.await?;

		let ids: Vec<Uuid> = records.iter().map(|m| m.id).collect();
		let mut markups = markups_by_mapping(db, &ids).await?;

		Ok(records
			.into_iter()
			.map(|record| {
				let location_markups = markups.remove(&record.id).unwrap_or_default();
				IfpMappingRecord {
					record,
					location_markups,
				}
			})
			.collect())
	}

	pub async fn get(db: &DbConn, id: Uuid) -> Result<IfpMappingRecord> {
		let record = ifp_mapping::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Mapping"))?;

		let location_markups = markups_of(db, record.id).await?;
		Ok(IfpMappingRecord {
			record,
			location_markups,
		})
	}

	/// Create a mapping and any supplied markups in one transaction. The IFP
	/// key is lower-cased before the uniqueness check and storage.
	pub async fn create(db: &DbConn, input: CreateIfpMapping) -> Result<IfpMappingRecord> {
		let ifp_key = validate::required_name("IFP key", input.ifp_key)?.to_lowercase();
		let bt_name = validate::required_name("BT name", input.bt_name)?;
		let now = Utc::now();
		let id = Uuid::new_v4();

		let rows = markup_rows(id, input.location_markups)?;

		let active = ifp_mapping::ActiveModel {
			id: Set(id),
			ifp_key: Set(ifp_key),
			bt_name: Set(bt_name),
			cost_group: Set(input.cost_group.unwrap_or(false)),
			created_at: Set(now),
			updated_at: Set(now),
		};

		let txn = db.begin().await?;
		let record = active
			.insert(&txn)
			.await
			.map_err(|e| ServiceError::classify_write(e, DUPLICATE_KEY, "Mapping"))?;
		insert_markups(&txn, rows).await?;
		txn.commit().await?;

		let location_markups = markups_of(db, record.id).await?;
		Ok(IfpMappingRecord {
			record,
			location_markups,
		})
	}

	/// Update mapping fields; a supplied `locationMarkups` array replaces the
	/// owned rows wholesale.
	pub async fn update(db: &DbConn, id: Uuid, input: UpdateIfpMapping) -> Result<IfpMappingRecord> {
		let existing = ifp_mapping::Entity::find_by_id(id)
			.one(db)
			.await?
			.ok_or(ServiceError::NotFound("Mapping"))?;

		let replacement = match input.location_markups {
			Some(markups) => Some(markup_rows(id, markups)?),
			None => None,
		};

		let mut active: ifp_mapping::ActiveModel = existing.into();
		if let Some(bt_name) = input.bt_name {
			active.bt_name = Set(validate::required_name("BT name", Some(bt_name))?);
		}
		if let Some(cost_group) = input.cost_group {
			active.cost_group = Set(cost_group);
		}
		active.updated_at = Set(Utc::now());

		let txn = db.begin().await?;
		let record = active.update(&txn).await?;
		if let Some(rows) = replacement {
			location_markup::Entity::delete_many()
				.filter(location_markup::Column::IfpMappingId.eq(id))
				.exec(&txn)
				.await?;
			insert_markups(&txn, rows).await?;
		}
		txn.commit().await?;

		let location_markups = markups_of(db, record.id).await?;
		Ok(IfpMappingRecord {
			record,
			location_markups,
		})
	}

	/// Removes the mapping and cascades through its markups.
	pub async fn delete(db: &DbConn, id: Uuid) -> Result<()> {
		let result = ifp_mapping::Entity::delete_by_id(id).exec(db).await?;
		if result.rows_affected == 0 {
			return Err(ServiceError::NotFound("Mapping"));
		}
		Ok(())
	}
}

fn markup_rows(
	mapping_id: Uuid,
	markups: Vec<NewLocationMarkup>,
) -> Result<Vec<location_markup::ActiveModel>> {
	let now = Utc::now();
	markups
		.into_iter()
		.map(|m| {
			let name = validate::required_name("Location markup name", m.name)?;
			let markup = validate::required_markup("Location markup", m.markup)?;
			Ok(location_markup::ActiveModel {
				id: Set(Uuid::new_v4()),
				name: Set(name),
				markup: Set(markup),
				ifp_mapping_id: Set(mapping_id),
				created_at: Set(now),
				updated_at: Set(now),
			})
		})
		.collect()
}

async fn insert_markups<C: ConnectionTrait>(
	conn: &C,
	rows: Vec<location_markup::ActiveModel>,
) -> Result<()> {
	if rows.is_empty() {
		return Ok(());
	}
	location_markup::Entity::insert_many(rows).exec(conn).await?;
	Ok(())
}

async fn markups_of(db: &DbConn, mapping_id: Uuid) -> Result<Vec<location_markup::Model>> {
	Ok(location_markup::Entity::find()
		.filter(location_markup::Column::IfpMappingId.eq(mapping_id))
		.order_by_asc(location_markup::Column::Name)
		.all(db)
		.await?)
}

async fn markups_by_mapping(
	db: &DbConn,
	mapping_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<location_markup::Model>>> {
	if mapping_ids.is_empty() {
		return Ok(HashMap::new());
	}

	let records = location_markup::Entity::find()
		.filter(location_markup::Column::IfpMappingId.is_in(mapping_ids.iter().copied()))
		.order_by_asc(location_markup::Column::Name)
		.all(db)
		.await?;

	let mut grouped: HashMap<Uuid, Vec<location_markup::Model>> = HashMap::new();
	for record in records {
		grouped.entry(record.ifp_mapping_id).or_default().push(record);
	}

	Ok(grouped)
}
