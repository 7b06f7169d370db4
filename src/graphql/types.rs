use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

use crate::model::{Company as ModelCompany, Country as ModelCountry};

use super::schema::{company_store, country_store};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Country {
    pub id: ID,
    pub name: String,
    pub code: String,
    pub created_at: String,
    pub updated_at: String,
}

#[ComplexObject]
impl Country {
    /// Companies registered in this country.
    async fn companies(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Company>> {
        let store = company_store(ctx);
        let companies = store.list_by_country(&self.id).await?;
        Ok(companies.into_iter().map(|c| c.into()).collect())
    }
}

impl From<ModelCountry> for Country {
    fn from(c: ModelCountry) -> Self {
        Self {
            id: ID(c.id),
            name: c.name,
            code: c.code,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub industry: String,
    pub country_id: Option<ID>,
    pub created_at: String,
    pub updated_at: String,
}

#[ComplexObject]
impl Company {
    /// The country this company is registered in, if any.
    async fn country(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Country>> {
        let Some(ref country_id) = self.country_id else {
            return Ok(None);
        };
        let store = country_store(ctx);
        Ok(store.get(country_id).await?.map(|c| c.into()))
    }
}

impl From<ModelCompany> for Company {
    fn from(c: ModelCompany) -> Self {
        Self {
            id: ID(c.id.to_string()),
            name: c.name,
            industry: c.industry,
            country_id: c.country_id.map(ID),
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// Input shape for bulk country creation.
#[derive(InputObject)]
pub struct CountryInput {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Input shape for bulk company creation.
#[derive(InputObject)]
pub struct CompanyInput {
    pub name: String,
    pub industry: String,
    pub country_id: ID,
}
