//! HTTP transport for the GraphQL schema.
//!
//! A single `/graphql` endpoint serves the API: POST executes operations,
//! GET serves the GraphiQL playground. `/health` runs a storage round trip
//! and reports 503 when the database is unreachable.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::graphql::TerraSchema;
use crate::storage;

pub fn router(schema: TerraSchema, pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/graphql",
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/health", get(health))
        .with_state(pool)
}

/// Binds the listener and serves requests until the process exits.
pub async fn serve(addr: &str, schema: TerraSchema, pool: SqlitePool) -> Result<()> {
    let app = router(schema, pool);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Serving GraphQL on http://{addr}/graphql");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match storage::ping(&pool).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
