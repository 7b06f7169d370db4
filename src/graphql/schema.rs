use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use sqlx::SqlitePool;

use crate::error::TerraError;
use crate::model::{CompanyPatch, CountryPatch, NewCompany, NewCountry};
use crate::storage::{CompanyStore, CountryStore};

use super::types::*;

pub type TerraSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(pool: SqlitePool) -> TerraSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

pub(super) fn country_store(ctx: &Context<'_>) -> CountryStore {
    let pool = ctx.data_unchecked::<SqlitePool>();
    CountryStore::new(pool.clone())
}

pub(super) fn company_store(ctx: &Context<'_>) -> CompanyStore {
    let pool = ctx.data_unchecked::<SqlitePool>();
    CompanyStore::new(pool.clone())
}

fn parse_company_id(id: &ID) -> Result<i64, TerraError> {
    id.parse::<i64>()
        .map_err(|_| TerraError::Validation(format!("Invalid company ID: {}", id.as_str())))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single country by ID; null if absent.
    async fn get_country(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Country>> {
        let store = country_store(ctx);
        Ok(store.get(&id).await?.map(|c| c.into()))
    }

    /// List all countries.
    async fn get_countries(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Country>> {
        let store = country_store(ctx);
        Ok(store.list().await?.into_iter().map(|c| c.into()).collect())
    }

    /// Get a single company by ID; null if absent.
    async fn get_company(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Company>> {
        // A non-numeric ID cannot match any row; reads report absence, never errors.
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };
        let store = company_store(ctx);
        Ok(store.get(id).await?.map(|c| c.into()))
    }

    /// List all companies.
    async fn get_companies(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Company>> {
        let store = company_store(ctx);
        Ok(store.list().await?.into_iter().map(|c| c.into()).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a country with a caller-supplied ID.
    async fn create_country(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: String,
        code: String,
    ) -> async_graphql::Result<Country> {
        let store = country_store(ctx);
        let created = store.create(&NewCountry { id, name, code }).await?;
        Ok(created.into())
    }

    /// Create a batch of countries in one transaction (all-or-nothing).
    async fn create_countries(
        &self,
        ctx: &Context<'_>,
        countries: Vec<CountryInput>,
    ) -> async_graphql::Result<Vec<Country>> {
        let store = country_store(ctx);
        let items: Vec<NewCountry> = countries
            .into_iter()
            .map(|c| NewCountry {
                id: c.id,
                name: c.name,
                code: c.code,
            })
            .collect();
        let created = store.create_many(&items).await?;
        Ok(created.into_iter().map(|c| c.into()).collect())
    }

    /// Update a country; omitted fields are left unchanged.
    async fn update_country(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        code: Option<String>,
    ) -> async_graphql::Result<Country> {
        let store = country_store(ctx);
        let updated = store.update(&id, &CountryPatch { name, code }).await?;
        Ok(updated.into())
    }

    /// Delete a country and return its pre-deletion snapshot.
    async fn delete_country(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Country> {
        let store = country_store(ctx);
        let deleted = store.delete(&id).await?;
        Ok(deleted.into())
    }

    /// Create a company; the numeric ID is generated by the store.
    async fn create_company(
        &self,
        ctx: &Context<'_>,
        name: String,
        industry: String,
        country_id: ID,
    ) -> async_graphql::Result<Company> {
        let store = company_store(ctx);
        let created = store
            .create(&NewCompany {
                name,
                industry,
                country_id: country_id.0,
            })
            .await?;
        Ok(created.into())
    }

    /// Create a batch of companies in one transaction (all-or-nothing).
    async fn create_companies(
        &self,
        ctx: &Context<'_>,
        companies: Vec<CompanyInput>,
    ) -> async_graphql::Result<Vec<Company>> {
        let store = company_store(ctx);
        let items: Vec<NewCompany> = companies
            .into_iter()
            .map(|c| NewCompany {
                name: c.name,
                industry: c.industry,
                country_id: c.country_id.0,
            })
            .collect();
        let created = store.create_many(&items).await?;
        Ok(created.into_iter().map(|c| c.into()).collect())
    }

    /// Update a company; omitted fields are left unchanged.
    async fn update_company(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        industry: Option<String>,
        country_id: Option<ID>,
    ) -> async_graphql::Result<Company> {
        let store = company_store(ctx);
        let id = parse_company_id(&id)?;
        let patch = CompanyPatch {
            name,
            industry,
            country_id: country_id.map(|c| c.0),
        };
        let updated = store.update(id, &patch).await?;
        Ok(updated.into())
    }

    /// Delete a company and return its pre-deletion snapshot.
    async fn delete_company(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Company> {
        let store = company_store(ctx);
        let id = parse_company_id(&id)?;
        let deleted = store.delete(id).await?;
        Ok(deleted.into())
    }
}
