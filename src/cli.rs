use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "terra")]
#[command(
    author,
    version,
    about = "A GraphQL API for countries and the companies registered in them"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./terra.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL (overrides config)
    #[arg(long, env = "TERRA_DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured JSON logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Apply pending database migrations and exit
    Migrate,

    /// Execute a GraphQL operation against the configured database
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL document, e.g. '{ getCountries { id name } }'
        query: String,

        /// Operation variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}
