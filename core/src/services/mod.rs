//! Record services
//!
//! One service per entity family. Every operation is a validate → persist →
//! respond flow; store-level constraint violations surface as typed outcomes
//! (`Duplicate`, `MissingParent`) rather than raw driver errors.

pub mod cost_items;
pub mod error;
pub mod exterior_cost_items;
pub mod exteriors;
pub mod ifp_mappings;
pub mod locations;
pub mod models;
pub mod options;

mod validate;

pub use error::{Result, ServiceError};

/// Distinguishes an absent JSON field from an explicit null, so partial
/// updates can clear nullable fields without touching omitted ones.
pub(crate) fn double_option<'de, T, D>(
	deserializer: D,
) -> std::result::Result<Option<Option<T>>, D::Error>
where
	T: serde::Deserialize<'de>,
	D: serde::Deserializer<'de>,
{
	serde::Deserialize::deserialize(deserializer).map(Some)
}
