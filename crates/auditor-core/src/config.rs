//! Environment variable-based configuration loading
//!
//! The store configuration is read once at startup. A misconfigured
//! document store fails here rather than on the first tool call.

use crate::error::{AuditorError, AuditorResult};
use std::env;
use std::path::PathBuf;

/// Selects which backing store to use (`AUDITOR_STORE`)
pub const ENV_STORE: &str = "AUDITOR_STORE";
/// Cosmos account endpoint URL (`COSMOS_ENDPOINT`)
pub const ENV_COSMOS_ENDPOINT: &str = "COSMOS_ENDPOINT";
/// Cosmos database name (`COSMOS_DATABASE_NAME`)
pub const ENV_COSMOS_DATABASE: &str = "COSMOS_DATABASE_NAME";
/// Path of the local relational file (`AUDITOR_SQLITE_PATH`)
pub const ENV_SQLITE_PATH: &str = "AUDITOR_SQLITE_PATH";

/// Default relational file, matching the seeded database name.
pub const DEFAULT_SQLITE_PATH: &str = "company_data.sqlite";

/// Which backing store the process talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Cloud document database (Azure Cosmos DB)
    Cosmos,
    /// Local relational file (SQLite)
    Sqlite,
}

/// Cosmos connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmosConfig {
    /// Account endpoint, e.g. `https://account.documents.azure.com:443/`
    pub endpoint: String,
    /// Database name within the account
    pub database: String,
}

/// Resolved store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Present iff `backend` is `Cosmos`
    pub cosmos: Option<CosmosConfig>,
    /// Relational file path, always resolved (defaulted when unset)
    pub sqlite_path: PathBuf,
}

/// Load configuration from process environment variables.
pub fn load_from_env() -> AuditorResult<StoreConfig> {
    load_with(|name| env::var(name).ok())
}

/// Load configuration through an explicit variable lookup.
///
/// The indirection keeps tests off the process environment.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> AuditorResult<StoreConfig> {
    let backend = match lookup(ENV_STORE).as_deref() {
        None | Some("sqlite") => StoreBackend::Sqlite,
        Some("cosmos") => StoreBackend::Cosmos,
        Some(other) => {
            return Err(AuditorError::config(format!(
                "Invalid {ENV_STORE} value '{other}' (expected 'cosmos' or 'sqlite')"
            )));
        }
    };

    let cosmos = match backend {
        StoreBackend::Cosmos => {
            let endpoint = lookup(ENV_COSMOS_ENDPOINT)
                .ok_or_else(|| AuditorError::config(format!("{ENV_COSMOS_ENDPOINT} is not set")))?;
            let database = lookup(ENV_COSMOS_DATABASE)
                .ok_or_else(|| AuditorError::config(format!("{ENV_COSMOS_DATABASE} is not set")))?;
            Some(CosmosConfig { endpoint, database })
        }
        StoreBackend::Sqlite => None,
    };

    let sqlite_path = lookup(ENV_SQLITE_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SQLITE_PATH));

    Ok(StoreConfig {
        backend,
        cosmos,
        sqlite_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_to_sqlite_with_default_path() {
        let config = load_with(lookup_from(&[])).unwrap();
        assert_eq!(config.backend, StoreBackend::Sqlite);
        assert!(config.cosmos.is_none());
        assert_eq!(config.sqlite_path, PathBuf::from(DEFAULT_SQLITE_PATH));
    }

    #[test]
    fn sqlite_path_override() {
        let config =
            load_with(lookup_from(&[(ENV_SQLITE_PATH, "/tmp/audit.sqlite")])).unwrap();
        assert_eq!(config.sqlite_path, PathBuf::from("/tmp/audit.sqlite"));
    }

    #[test]
    fn cosmos_requires_endpoint_and_database() {
        let result = load_with(lookup_from(&[(ENV_STORE, "cosmos")]));
        assert!(matches!(result, Err(AuditorError::Config(_))));

        let result = load_with(lookup_from(&[
            (ENV_STORE, "cosmos"),
            (ENV_COSMOS_ENDPOINT, "https://acct.documents.azure.com:443/"),
        ]));
        assert!(matches!(result, Err(AuditorError::Config(_))));

        let config = load_with(lookup_from(&[
            (ENV_STORE, "cosmos"),
            (ENV_COSMOS_ENDPOINT, "https://acct.documents.azure.com:443/"),
            (ENV_COSMOS_DATABASE, "company"),
        ]))
        .unwrap();
        assert_eq!(config.backend, StoreBackend::Cosmos);
        let cosmos = config.cosmos.unwrap();
        assert_eq!(cosmos.endpoint, "https://acct.documents.azure.com:443/");
        assert_eq!(cosmos.database, "company");
    }

    #[test]
    fn rejects_unknown_backend() {
        let result = load_with(lookup_from(&[(ENV_STORE, "dynamo")]));
        assert!(matches!(result, Err(AuditorError::Config(_))));
    }
}
