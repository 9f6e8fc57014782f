//! Azure Cosmos DB adapter over the REST surface
//!
//! One `reqwest::Client` and one database handle live for the process
//! lifetime; individual calls share them. Authentication uses an AAD
//! bearer token resolved through [`TokenCredential`] — how that token is
//! minted (managed identity, CLI login, workload identity) is an
//! external concern.

use crate::config::CosmosConfig;
use crate::error::{AuditorError, AuditorResult};
use crate::record::Record;
use crate::store::{StoreAdapter, StoreKind};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::sync::Arc;
use tracing::debug;

/// REST API version sent with every request.
const API_VERSION: &str = "2018-12-31";

/// Environment variable the default credential reads the token from.
pub const ENV_AAD_TOKEN: &str = "COSMOS_AAD_TOKEN";

/// Resolves the AAD bearer token used to authorize requests.
///
/// Resolved per request so an externally rotated token is picked up
/// without restarting the process.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    async fn bearer_token(&self) -> AuditorResult<String>;
}

/// Default credential: reads the token from `COSMOS_AAD_TOKEN`.
#[derive(Debug, Default)]
pub struct EnvTokenCredential;

#[async_trait]
impl TokenCredential for EnvTokenCredential {
    async fn bearer_token(&self) -> AuditorResult<String> {
        env::var(ENV_AAD_TOKEN)
            .map_err(|_| AuditorError::config(format!("{ENV_AAD_TOKEN} is not set")))
    }
}

#[derive(Debug, Deserialize)]
struct CollectionList {
    #[serde(rename = "DocumentCollections", default)]
    collections: Vec<CollectionEntry>,
}

#[derive(Debug, Deserialize)]
struct CollectionEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(rename = "Documents", default)]
    documents: Vec<Record>,
}

/// Document-store adapter backed by the Cosmos DB REST API.
pub struct CosmosStore {
    http: reqwest::Client,
    endpoint: String,
    database: String,
    credential: Arc<dyn TokenCredential>,
}

impl CosmosStore {
    /// Create an adapter using the ambient [`EnvTokenCredential`].
    pub fn new(config: &CosmosConfig) -> AuditorResult<Self> {
        Self::with_credential(config, Arc::new(EnvTokenCredential))
    }

    /// Create an adapter with an explicit credential implementation.
    pub fn with_credential(
        config: &CosmosConfig,
        credential: Arc<dyn TokenCredential>,
    ) -> AuditorResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AuditorError::store(StoreKind::Cosmos, e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            database: config.database.clone(),
            credential,
        })
    }

    fn collections_url(&self) -> String {
        format!("{}/dbs/{}/colls", self.endpoint, self.database)
    }

    fn documents_url(&self, container: &str) -> String {
        format!(
            "{}/dbs/{}/colls/{}/docs",
            self.endpoint, self.database, container
        )
    }

    /// Authorization header value for an AAD token.
    ///
    /// Cosmos expects the url-encoded form `type=aad&ver=1.0&sig=<token>`.
    fn authorization_value(token: &str) -> String {
        format!("type%3Daad%26ver%3D1.0%26sig%3D{token}")
    }

    async fn request(&self, builder: reqwest::RequestBuilder) -> AuditorResult<reqwest::Response> {
        let token = self.credential.bearer_token().await?;
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let response = builder
            .header("authorization", Self::authorization_value(&token))
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| AuditorError::store(StoreKind::Cosmos, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuditorError::store(
                StoreKind::Cosmos,
                format!("request failed with status {status}: {body}"),
            ));
        }
        Ok(response)
    }

    /// POST a query against one container, cross-partition enabled.
    async fn query_documents(&self, container: &str, query: &str) -> AuditorResult<Vec<Record>> {
        debug!(container, query, "executing Cosmos query");
        let builder = self
            .http
            .post(self.documents_url(container))
            .header("content-type", "application/query+json")
            .header("x-ms-documentdb-isquery", "True")
            .header("x-ms-documentdb-query-enablecrosspartition", "True")
            .json(&json!({ "query": query, "parameters": [] }));

        let response = self.request(builder).await?;
        let list: DocumentList = response
            .json()
            .await
            .map_err(|e| AuditorError::store(StoreKind::Cosmos, e.to_string()))?;
        Ok(list.documents)
    }
}

#[async_trait]
impl StoreAdapter for CosmosStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Cosmos
    }

    async fn list_containers(&self) -> AuditorResult<Vec<String>> {
        let response = self.request(self.http.get(self.collections_url())).await?;
        let list: CollectionList = response
            .json()
            .await
            .map_err(|e| AuditorError::store(StoreKind::Cosmos, e.to_string()))?;
        Ok(list.collections.into_iter().map(|c| c.id).collect())
    }

    async fn fetch_sample(&self, container: &str) -> AuditorResult<Option<Record>> {
        let documents = self
            .query_documents(container, "SELECT TOP 1 * FROM c")
            .await?;
        Ok(documents.into_iter().next())
    }

    async fn run_query(
        &self,
        container: Option<&str>,
        query: &str,
    ) -> AuditorResult<Vec<Record>> {
        let container = container.ok_or_else(|| {
            AuditorError::store(
                StoreKind::Cosmos,
                "container_name is required for the document store",
            )
        })?;
        self.query_documents(container, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CosmosStore {
        CosmosStore::new(&CosmosConfig {
            endpoint: "https://acct.documents.azure.com:443/".to_string(),
            database: "company".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn urls_drop_trailing_endpoint_slash() {
        let store = store();
        assert_eq!(
            store.collections_url(),
            "https://acct.documents.azure.com:443/dbs/company/colls"
        );
        assert_eq!(
            store.documents_url("users"),
            "https://acct.documents.azure.com:443/dbs/company/colls/users/docs"
        );
    }

    #[test]
    fn authorization_value_is_url_encoded() {
        assert_eq!(
            CosmosStore::authorization_value("tok.en"),
            "type%3Daad%26ver%3D1.0%26sig%3Dtok.en"
        );
    }

    #[tokio::test]
    async fn run_query_requires_container() {
        let err = store()
            .run_query(None, "SELECT * FROM c")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("CosmosDB Error:"));
    }
}
