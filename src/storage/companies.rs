use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, TerraError};
use crate::model::{Company, CompanyPatch, NewCompany};
use crate::validation;

/// CRUD operations for companies.
#[derive(Clone)]
pub struct CompanyStore {
    pool: SqlitePool,
}

impl CompanyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(company)
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>("SELECT * FROM companies")
            .fetch_all(&self.pool)
            .await?;
        Ok(companies)
    }

    /// Returns the companies registered in the given country.
    pub async fn list_by_country(&self, country_id: &str) -> Result<Vec<Company>> {
        let companies =
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE country_id = ?")
                .bind(country_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(companies)
    }

    /// Inserts a company; the numeric ID is assigned by the store and
    /// returned on the created row.
    pub async fn create(&self, new: &NewCompany) -> Result<Company> {
        tracing::info!(name = %new.name, country_id = %new.country_id, "Creating company");
        validate_new(new)?;

        let now = Utc::now();
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, industry, country_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.industry)
        .bind(&new.country_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    /// Inserts a batch inside a single transaction: either every company is
    /// created or none are. Returns the created rows in input order.
    pub async fn create_many(&self, items: &[NewCompany]) -> Result<Vec<Company>> {
        tracing::info!(count = items.len(), "Creating companies in bulk");
        for item in items {
            validate_new(item)?;
        }

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();
        let mut created = Vec::with_capacity(items.len());

        for item in items {
            let company = sqlx::query_as::<_, Company>(
                "INSERT INTO companies (name, industry, country_id, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?) RETURNING *",
            )
            .bind(&item.name)
            .bind(&item.industry)
            .bind(&item.country_id)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
            created.push(company);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Applies a partial update. Fields left `None` keep their stored value.
    pub async fn update(&self, id: i64, patch: &CompanyPatch) -> Result<Company> {
        tracing::info!(id = %id, "Updating company");
        if let Some(ref name) = patch.name {
            validation::validate_text_field("name", name)?;
        }
        if let Some(ref industry) = patch.industry {
            validation::validate_text_field("industry", industry)?;
        }
        if let Some(ref country_id) = patch.country_id {
            validation::validate_country_id(country_id)?;
        }

        let mut company = self
            .get(id)
            .await?
            .ok_or_else(|| TerraError::company_not_found(id))?;

        // Nothing to change: skip the write so updated_at stays put.
        if patch.is_empty() {
            return Ok(company);
        }

        if let Some(ref name) = patch.name {
            company.name = name.clone();
        }
        if let Some(ref industry) = patch.industry {
            company.industry = industry.clone();
        }
        if let Some(ref country_id) = patch.country_id {
            company.country_id = Some(country_id.clone());
        }
        company.updated_at = Utc::now();

        sqlx::query(
            "UPDATE companies SET name = ?, industry = ?, country_id = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&company.name)
        .bind(&company.industry)
        .bind(&company.country_id)
        .bind(company.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(company)
    }

    /// Removes a company and returns the pre-deletion snapshot.
    pub async fn delete(&self, id: i64) -> Result<Company> {
        tracing::info!(id = %id, "Deleting company");
        let company = self
            .get(id)
            .await?
            .ok_or_else(|| TerraError::company_not_found(id))?;

        sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(company)
    }
}

fn validate_new(new: &NewCompany) -> Result<()> {
    validation::validate_text_field("name", &new.name)?;
    validation::validate_text_field("industry", &new.industry)?;
    validation::validate_country_id(&new.country_id)?;
    Ok(())
}
