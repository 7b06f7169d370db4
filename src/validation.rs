//! Field-level validation for country and company data.

use crate::error::{Result, TerraError};

/// Maximum allowed length for a country ID (schema declares VARCHAR(15)).
pub const MAX_COUNTRY_ID_LENGTH: usize = 15;

/// Maximum allowed length for names, codes, and industries.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Validates a caller-supplied country ID.
pub fn validate_country_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(TerraError::Validation(
            "Country ID cannot be empty".to_string(),
        ));
    }
    if id.len() > MAX_COUNTRY_ID_LENGTH {
        return Err(TerraError::Validation(format!(
            "Country ID exceeds maximum length of {} characters",
            MAX_COUNTRY_ID_LENGTH
        )));
    }
    Ok(())
}

/// Validates a required text field such as `name`, `code`, or `industry`.
///
/// An empty string is rejected rather than treated as "not provided" — a
/// caller who wants to leave a field unchanged omits it from the request.
pub fn validate_text_field(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TerraError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.len() > MAX_FIELD_LENGTH {
        return Err(TerraError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_FIELD_LENGTH
        )));
    }
    Ok(())
}
