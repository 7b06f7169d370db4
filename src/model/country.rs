use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A country row as stored in the `countries` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    /// Caller-supplied identifier, immutable after creation (e.g. "IDN").
    pub id: String,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCountry {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Partial update for a country. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CountryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(CountryPatch::default().is_empty());
        assert!(
            !CountryPatch {
                name: Some("Indonesia".to_string()),
                code: None,
            }
            .is_empty()
        );
    }
}
