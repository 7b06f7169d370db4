use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company row as stored in the `companies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    /// Auto-generated numeric identifier.
    pub id: i64,
    pub name: String,
    pub industry: String,

    /// Foreign key into `countries.id`. Nullable at the storage level; the
    /// API requires it on creation but referential integrity beyond the FK
    /// declaration is not enforced here.
    pub country_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a company. The ID is generated by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub industry: String,
    pub country_id: String,
}

/// Partial update for a company. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.industry.is_none() && self.country_id.is_none()
    }
}
