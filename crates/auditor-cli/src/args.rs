//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "auditor")]
#[command(about = "Data auditor - read-only data-access tools over Cosmos DB or SQLite")]
#[command(
    long_about = r#"Data auditor - read-only data-access tools over Cosmos DB or SQLite

The backing store is selected through the environment:
  AUDITOR_STORE          'cosmos' or 'sqlite' (default: sqlite)
  COSMOS_ENDPOINT        Cosmos account endpoint (cosmos only)
  COSMOS_DATABASE_NAME   Cosmos database name (cosmos only)
  COSMOS_AAD_TOKEN       AAD bearer token (cosmos only)
  AUDITOR_SQLITE_PATH    relational file path (default: company_data.sqlite)

USAGE:
  auditor list-collections
  auditor get-schema users
  auditor query "SELECT * FROM users LIMIT 5"
  auditor query -c users "SELECT * FROM c WHERE c.active = true"
  auditor seed --customers 50 --users 10"#
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered tools and their parameter schemas
    Tools,

    /// List collections/tables in the configured store
    ListCollections,

    /// Infer the schema of a container from one sampled record
    GetSchema {
        /// Name of the container to get the schema of
        container_name: String,
    },

    /// Execute a read-only query and print the rows
    Query {
        /// Container to execute the query in (document store only)
        #[arg(short, long)]
        container: Option<String>,

        /// Query text, sent to the store verbatim
        query: String,
    },

    /// Populate the local SQLite file with synthetic company data
    Seed {
        /// Relational file to (re)populate
        #[arg(long, default_value = "company_data.sqlite")]
        path: PathBuf,

        /// Number of customer rows
        #[arg(long, default_value_t = 50)]
        customers: usize,

        /// Number of user rows
        #[arg(long, default_value_t = 10)]
        users: usize,
    },
}
