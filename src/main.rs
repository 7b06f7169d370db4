use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use terra::cli::{Cli, Commands};
use terra::config::TerraConfig;
use terra::{graphql, logging, server, storage};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TerraConfig::load(cli.config.as_deref())
        .context("Failed to load terra configuration")?;

    let mut log_settings = config.logging.clone();
    if cli.verbose {
        log_settings.level = "debug".to_string();
    }
    if let Some(ref path) = cli.log_file {
        log_settings.file = Some(path.clone());
    }
    logging::init(&log_settings);

    let database_url = cli
        .database_url
        .clone()
        .unwrap_or_else(|| config.database.url.clone());

    match cli.command {
        Commands::Serve { port, bind } => {
            let pool = storage::connect(&database_url).await?;
            storage::run_migrations(&pool).await?;

            let mut server_settings = config.server;
            if let Some(p) = port {
                server_settings.port = p;
            }
            if let Some(b) = bind {
                server_settings.bind = b;
            }

            let schema = graphql::build_schema(pool.clone());
            let result =
                server::serve(&server_settings.listen_addr(), schema, pool.clone()).await;
            pool.close().await;
            result?;
            Ok(())
        }
        Commands::Migrate => {
            let pool = storage::connect(&database_url).await?;
            storage::run_migrations(&pool).await?;
            pool.close().await;
            println!("{} migrations for {}", "Applied".green(), database_url);
            Ok(())
        }
        Commands::Query { query, variables } => {
            let pool = storage::connect(&database_url).await?;
            storage::run_migrations(&pool).await?;

            let mut request = async_graphql::Request::new(query);
            if let Some(vars) = variables {
                let json: serde_json::Value =
                    serde_json::from_str(&vars).context("Variables must be a JSON object")?;
                request = request.variables(async_graphql::Variables::from_json(json));
            }

            let schema = graphql::build_schema(pool.clone());
            let response = schema.execute(request).await;
            pool.close().await;

            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
