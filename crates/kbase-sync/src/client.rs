//! Query engine HTTP client
//!
//! The engine accepts a GET request whose JSON body carries the SQL
//! statement and the target datasource name. That verb/body pairing is
//! the engine's contract, not ours to change.

use kbase_core::config::RemoteConfig;
use kbase_core::errors::{KbError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Request body sent to the query engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub database: String,
}

/// Blocking client for the external query engine
pub struct SyncClient {
    http: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl SyncClient {
    /// Create a client with a bounded request timeout
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self { http, config })
    }

    /// Execute a SQL statement against the engine
    ///
    /// Returns the raw response body. Transport failures and non-2xx
    /// responses both map to a Remote error; no retries.
    pub fn execute(&self, query: &str) -> Result<String> {
        let request = QueryRequest {
            query: query.to_string(),
            database: self.config.database.clone(),
        };

        tracing::debug!(endpoint = %self.config.endpoint, "executing remote query");

        let response = self
            .http
            .get(&self.config.endpoint)
            .json(&request)
            .send()
            .map_err(from_reqwest)?
            .error_for_status()
            .map_err(from_reqwest)?;

        response.text().map_err(from_reqwest)
    }

    /// Register the local SQLite file as a datasource with the engine
    pub fn register_datasource(&self, db_file: &Path) -> Result<String> {
        self.execute(&datasource_statement(&self.config.database, db_file))
    }
}

/// Build the engine's CREATE DATABASE statement for a SQLite datasource
fn datasource_statement(database: &str, db_file: &Path) -> String {
    format!(
        "CREATE DATABASE {}\nWITH ENGINE = 'sqlite',\nPARAMETERS = {{\n    \"db_file\": \"{}\"\n}};",
        database,
        db_file.display()
    )
}

fn from_reqwest(err: reqwest::Error) -> KbError {
    KbError::remote(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_wire_shape() {
        let request = QueryRequest {
            query: "SELECT 1".to_string(),
            database: "kb_source".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "SELECT 1");
        assert_eq!(json["database"], "kb_source");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_datasource_statement_contents() {
        let statement = datasource_statement("kb_source", Path::new("kbase.db"));
        assert!(statement.starts_with("CREATE DATABASE kb_source"));
        assert!(statement.contains("ENGINE = 'sqlite'"));
        assert!(statement.contains("\"db_file\": \"kbase.db\""));
    }

    #[test]
    fn test_unreachable_endpoint_is_remote_error() {
        // Bind and drop a listener so the port is known-refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = SyncClient::new(RemoteConfig {
            endpoint: format!("http://127.0.0.1:{}", port),
            database: "kb_source".to_string(),
        })
        .unwrap();

        let err = client.execute("SELECT 1").unwrap_err();
        assert_eq!(err.code(), "ERR_REMOTE");
    }
}
