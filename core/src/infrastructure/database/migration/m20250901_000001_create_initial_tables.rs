//! Initial migration to create all tables
//!
//! Uniqueness is scoped to the immediate parent (composite unique indexes
//! on child tables), and every parent/child foreign key cascades on delete.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		// Create models table
		manager
			.create_table(
				Table::create()
					.table(Models::Table)
					.if_not_exists()
					.col(ColumnDef::new(Models::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Models::Name).string().not_null().unique_key())
					.col(ColumnDef::new(Models::Description).string())
					.col(ColumnDef::new(Models::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Models::UpdatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create exteriors table, name unique per model
		manager
			.create_table(
				Table::create()
					.table(Exteriors::Table)
					.if_not_exists()
					.col(ColumnDef::new(Exteriors::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Exteriors::Name).string().not_null())
					.col(ColumnDef::new(Exteriors::ModelId).uuid().not_null())
					.col(ColumnDef::new(Exteriors::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Exteriors::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(Exteriors::Table, Exteriors::ModelId)
							.to(Models::Table, Models::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_exteriors_model_id_name")
					.table(Exteriors::Table)
					.col(Exteriors::ModelId)
					.col(Exteriors::Name)
					.unique()
					.to_owned(),
			)
			.await?;

		// Create options table, name unique per exterior
		manager
			.create_table(
				Table::create()
					.table(Options::Table)
					.if_not_exists()
					.col(ColumnDef::new(Options::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Options::Name).string().not_null())
					.col(ColumnDef::new(Options::ExteriorId).uuid().not_null())
					.col(ColumnDef::new(Options::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Options::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(Options::Table, Options::ExteriorId)
							.to(Exteriors::Table, Exteriors::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_options_exterior_id_name")
					.table(Options::Table)
					.col(Options::ExteriorId)
					.col(Options::Name)
					.unique()
					.to_owned(),
			)
			.await?;

		// Create cost_items table, bt_name unique per option
		manager
			.create_table(
				Table::create()
					.table(CostItems::Table)
					.if_not_exists()
					.col(ColumnDef::new(CostItems::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(CostItems::BtName).string().not_null())
					.col(ColumnDef::new(CostItems::CostGroup).boolean().not_null().default(false))
					.col(ColumnDef::new(CostItems::IsDefault).boolean().not_null().default(false))
					.col(ColumnDef::new(CostItems::OptionId).uuid().not_null())
					.col(ColumnDef::new(CostItems::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(CostItems::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(CostItems::Table, CostItems::OptionId)
							.to(Options::Table, Options::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_cost_items_option_id_bt_name")
					.table(CostItems::Table)
					.col(CostItems::OptionId)
					.col(CostItems::BtName)
					.unique()
					.to_owned(),
			)
			.await?;

		// Create exterior_cost_items table, bt_name unique per exterior
		manager
			.create_table(
				Table::create()
					.table(ExteriorCostItems::Table)
					.if_not_exists()
					.col(ColumnDef::new(ExteriorCostItems::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(ExteriorCostItems::BtName).string().not_null())
					.col(ColumnDef::new(ExteriorCostItems::CostGroup).boolean().not_null().default(false))
					.col(ColumnDef::new(ExteriorCostItems::IsDefault).boolean().not_null().default(false))
					.col(ColumnDef::new(ExteriorCostItems::ExteriorId).uuid().not_null())
					.col(ColumnDef::new(ExteriorCostItems::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(ExteriorCostItems::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(ExteriorCostItems::Table, ExteriorCostItems::ExteriorId)
							.to(Exteriors::Table, Exteriors::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_exterior_cost_items_exterior_id_bt_name")
					.table(ExteriorCostItems::Table)
					.col(ExteriorCostItems::ExteriorId)
					.col(ExteriorCostItems::BtName)
					.unique()
					.to_owned(),
			)
			.await?;

		// Create locations table
		manager
			.create_table(
				Table::create()
					.table(Locations::Table)
					.if_not_exists()
					.col(ColumnDef::new(Locations::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Locations::Name).string().not_null().unique_key())
					.col(ColumnDef::new(Locations::Markup).double().not_null())
					.col(ColumnDef::new(Locations::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Locations::UpdatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create ifp_mappings table, keys stored lower-cased
		manager
			.create_table(
				Table::create()
					.table(IfpMappings::Table)
					.if_not_exists()
					.col(ColumnDef::new(IfpMappings::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(IfpMappings::IfpKey).string().not_null().unique_key())
					.col(ColumnDef::new(IfpMappings::BtName).string().not_null())
					.col(ColumnDef::new(IfpMappings::CostGroup).boolean().not_null().default(false))
					.col(ColumnDef::new(IfpMappings::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(IfpMappings::UpdatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create location_markups table, no uniqueness within a mapping
		manager
			.create_table(
				Table::create()
					.table(LocationMarkups::Table)
					.if_not_exists()
					.col(ColumnDef::new(LocationMarkups::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(LocationMarkups::Name).string().not_null())
					.col(ColumnDef::new(LocationMarkups::Markup).double().not_null())
					.col(ColumnDef::new(LocationMarkups::IfpMappingId).uuid().not_null())
					.col(ColumnDef::new(LocationMarkups::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(LocationMarkups::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(LocationMarkups::Table, LocationMarkups::IfpMappingId)
							.to(IfpMappings::Table, IfpMappings::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		// Create access_codes table
		manager
			.create_table(
				Table::create()
					.table(AccessCodes::Table)
					.if_not_exists()
					.col(ColumnDef::new(AccessCodes::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(AccessCodes::Code).string().not_null().unique_key())
					.col(ColumnDef::new(AccessCodes::IsActive).boolean().not_null().default(true))
					.col(ColumnDef::new(AccessCodes::CreatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		// Reverse creation order so foreign keys never dangle
		manager
			.drop_table(Table::drop().table(AccessCodes::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(LocationMarkups::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(IfpMappings::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Locations::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(ExteriorCostItems::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(CostItems::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Options::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Exteriors::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Models::Table).to_owned())
			.await?;

		Ok(())
	}
}

#[derive(DeriveIden)]
enum Models {
	Table,
	Id,
	Name,
	Description,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum Exteriors {
	Table,
	Id,
	Name,
	ModelId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum Options {
	Table,
	Id,
	Name,
	ExteriorId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum CostItems {
	Table,
	Id,
	BtName,
	CostGroup,
	IsDefault,
	OptionId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum ExteriorCostItems {
	Table,
	Id,
	BtName,
	CostGroup,
	IsDefault,
	ExteriorId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum Locations {
	Table,
	Id,
	Name,
	Markup,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum IfpMappings {
	Table,
	Id,
	IfpKey,
	BtName,
	CostGroup,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum LocationMarkups {
	Table,
	Id,
	Name,
	Markup,
	IfpMappingId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum AccessCodes {
	Table,
	Id,
	Code,
	IsActive,
	CreatedAt,
}
