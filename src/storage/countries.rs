use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, TerraError};
use crate::model::{Country, CountryPatch, NewCountry};
use crate::validation;

/// CRUD operations for countries.
///
/// Holds a clone of the shared pool; cheap to construct per request.
#[derive(Clone)]
pub struct CountryStore {
    pool: SqlitePool,
}

impl CountryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up a country by primary key. Absent rows are `None`, not errors.
    pub async fn get(&self, id: &str) -> Result<Option<Country>> {
        let country = sqlx::query_as::<_, Country>("SELECT * FROM countries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(country)
    }

    /// Returns all countries in storage order.
    pub async fn list(&self) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>("SELECT * FROM countries")
            .fetch_all(&self.pool)
            .await?;
        Ok(countries)
    }

    pub async fn create(&self, new: &NewCountry) -> Result<Country> {
        tracing::info!(id = %new.id, name = %new.name, "Creating country");
        validate_new(new)?;

        let now = Utc::now();
        let country = sqlx::query_as::<_, Country>(
            "INSERT INTO countries (id, name, code, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.id)
        .bind(&new.name)
        .bind(&new.code)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(country)
    }

    /// Inserts a batch inside a single transaction: either every country is
    /// created or none are. Returns the created rows in input order.
    pub async fn create_many(&self, items: &[NewCountry]) -> Result<Vec<Country>> {
        tracing::info!(count = items.len(), "Creating countries in bulk");
        for item in items {
            validate_new(item)?;
        }

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();
        let mut created = Vec::with_capacity(items.len());

        for item in items {
            let country = sqlx::query_as::<_, Country>(
                "INSERT INTO countries (id, name, code, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?) RETURNING *",
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(&item.code)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
            created.push(country);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Applies a partial update. Fields left `None` keep their stored value;
    /// provided fields must pass validation (an explicit empty string is an
    /// error, not a no-op).
    pub async fn update(&self, id: &str, patch: &CountryPatch) -> Result<Country> {
        tracing::info!(id = %id, "Updating country");
        if let Some(ref name) = patch.name {
            validation::validate_text_field("name", name)?;
        }
        if let Some(ref code) = patch.code {
            validation::validate_text_field("code", code)?;
        }

        let mut country = self
            .get(id)
            .await?
            .ok_or_else(|| TerraError::country_not_found(id))?;

        // Nothing to change: skip the write so updated_at stays put.
        if patch.is_empty() {
            return Ok(country);
        }

        if let Some(ref name) = patch.name {
            country.name = name.clone();
        }
        if let Some(ref code) = patch.code {
            country.code = code.clone();
        }
        country.updated_at = Utc::now();

        sqlx::query("UPDATE countries SET name = ?, code = ?, updated_at = ? WHERE id = ?")
            .bind(&country.name)
            .bind(&country.code)
            .bind(country.updated_at)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(country)
    }

    /// Removes a country and returns the pre-deletion snapshot.
    ///
    /// Companies registered in the country are left in place; the schema
    /// declares `ON DELETE SET NULL`, so their `country_id` is cleared.
    pub async fn delete(&self, id: &str) -> Result<Country> {
        tracing::info!(id = %id, "Deleting country");
        let country = self
            .get(id)
            .await?
            .ok_or_else(|| TerraError::country_not_found(id))?;

        sqlx::query("DELETE FROM countries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(country)
    }
}

fn validate_new(new: &NewCountry) -> Result<()> {
    validation::validate_country_id(&new.id)?;
    validation::validate_text_field("name", &new.name)?;
    validation::validate_text_field("code", &new.code)?;
    Ok(())
}
