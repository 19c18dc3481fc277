//! Field validation and normalization applied before any write

use super::error::{Result, ServiceError};
use uuid::Uuid;

/// Trim and require a non-empty value.
pub(crate) fn required_name(field: &str, value: Option<String>) -> Result<String> {
	match value.as_deref().map(str::trim) {
		Some(v) if !v.is_empty() => Ok(v.to_string()),
		_ => Err(ServiceError::Validation(format!("{field} is required"))),
	}
}

/// Trim an optional value, mapping empty strings to null.
pub(crate) fn optional_trimmed(value: Option<String>) -> Option<String> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
}

/// Require a parent reference to be supplied.
pub(crate) fn required_parent(field: &str, value: Option<Uuid>) -> Result<Uuid> {
	value.ok_or_else(|| ServiceError::Validation(format!("{field} is required")))
}

/// Require a present, non-negative markup percentage.
pub(crate) fn required_markup(field: &str, value: Option<f64>) -> Result<f64> {
	match value {
		Some(v) => non_negative(field, v),
		None => Err(ServiceError::Validation(format!("{field} is required"))),
	}
}

/// Markups are percentages; negative values are always caller error.
pub(crate) fn non_negative(field: &str, value: f64) -> Result<f64> {
	if value >= 0.0 {
		Ok(value)
	} else {
		Err(ServiceError::Validation(format!(
			"{field} must be a non-negative number"
		)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_trimmed() {
		assert_eq!(
			required_name("Model name", Some("  C1 Model 1188  ".into())).unwrap(),
			"C1 Model 1188"
		);
	}

	#[test]
	fn blank_names_are_rejected() {
		assert!(required_name("Model name", Some("   ".into())).is_err());
		assert!(required_name("Model name", None).is_err());
	}

	#[test]
	fn empty_descriptions_become_null() {
		assert_eq!(optional_trimmed(Some("   ".into())), None);
		assert_eq!(optional_trimmed(Some(" two story ".into())), Some("two story".into()));
		assert_eq!(optional_trimmed(None), None);
	}

	#[test]
	fn negative_markup_rejected() {
		assert!(required_markup("Location markup", Some(-1.0)).is_err());
		assert_eq!(required_markup("Location markup", Some(0.0)).unwrap(), 0.0);
	}
}
