//! End-to-end tests for the data tools over a real SQLite file,
//! dispatched through the executor the way a hosting transport would.

use auditor_core::store::{SqliteStore, StoreAdapter};
use auditor_core::tools::{ToolCall, ToolExecutor, ToolResult};
use auditor_tools::data_tools;
use rusqlite::Connection;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

fn seeded_executor(dir: &TempDir) -> ToolExecutor {
    let path = dir.path().join("company_data.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE customers (
             id INTEGER PRIMARY KEY,
             name TEXT,
             email TEXT,
             total_spent REAL,
             last_order_date TEXT
         );
         CREATE TABLE users (
             id INTEGER PRIMARY KEY,
             username TEXT,
             password_hash TEXT,
             ssn TEXT,
             salary INTEGER,
             department TEXT
         );
         CREATE TABLE archive (id INTEGER PRIMARY KEY, note TEXT);
         INSERT INTO customers (name, email, total_spent, last_order_date) VALUES
             ('Ada Lovelace', 'ada@example.com', 1249.5, '2026-03-14'),
             ('Grace Hopper', 'grace@example.com', 87.25, '2026-01-02');
         INSERT INTO users (username, password_hash, ssn, salary, department) VALUES
             ('ada', 'pbkdf2:sha256:600000$aa$bb', '123-45-6789', 120000, 'Engineering'),
             ('grace', 'pbkdf2:sha256:600000$cc$dd', '987-65-4321', 140000, 'Legal'),
             ('linus', 'pbkdf2:sha256:600000$ee$ff', '111-22-3333', 90000, 'Sales'),
             ('barbara', 'pbkdf2:sha256:600000$gg$hh', '444-55-6666', 135000, 'HR'),
             ('alan', 'pbkdf2:sha256:600000$ii$jj', '777-88-9999', 110000, 'Engineering'),
             ('edsger', 'pbkdf2:sha256:600000$kk$ll', '222-33-4444', 125000, 'Legal');",
    )
    .unwrap();

    let store: Arc<dyn StoreAdapter> = Arc::new(SqliteStore::new(path));
    let mut executor = ToolExecutor::new();
    executor.register_tools(data_tools(store));
    executor
}

fn call(name: &str, args: &[(&str, &str)]) -> ToolCall {
    let arguments: HashMap<String, Value> = args
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();
    ToolCall::new("call-1".to_string(), name.to_string(), arguments)
}

fn payload(result: &ToolResult) -> Value {
    serde_json::from_str(result.output.as_deref().unwrap()).unwrap()
}

#[tokio::test]
async fn list_collections_returns_all_table_names() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let result = executor.execute_tool(&call("list_collections", &[])).await;
    assert!(result.success);
    let mut names: Vec<String> = serde_json::from_str(result.output.as_deref().unwrap()).unwrap();
    names.sort();
    assert_eq!(names, vec!["archive", "customers", "users"]);
}

#[tokio::test]
async fn get_schema_reflects_the_sampled_row() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let result = executor
        .execute_tool(&call("get_schema", &[("container_name", "users")]))
        .await;
    assert!(result.success);
    assert_eq!(
        payload(&result),
        json!({
            "container": "users",
            "fields": {
                "id": "integer",
                "username": "string",
                "password_hash": "string",
                "ssn": "string",
                "salary": "integer",
                "department": "string"
            }
        })
    );
}

#[tokio::test]
async fn get_schema_on_empty_container_is_a_notice() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let result = executor
        .execute_tool(&call("get_schema", &[("container_name", "archive")]))
        .await;
    assert!(result.success);
    assert_eq!(
        payload(&result),
        json!({"message": "Container is empty; no schema found."})
    );
}

#[tokio::test]
async fn query_with_limit_caps_the_row_count() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let result = executor
        .execute_tool(&call(
            "query_data",
            &[("query", "SELECT * FROM users LIMIT 5")],
        ))
        .await;
    assert!(result.success);
    let rows = match payload(&result) {
        Value::Array(rows) => rows,
        other => panic!("expected rows, got {other:?}"),
    };
    assert!(rows.len() <= 5);
    for row in &rows {
        let keys: Vec<&str> = row.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["id", "username", "password_hash", "ssn", "salary", "department"] {
            assert!(keys.contains(&key), "missing column {key}");
        }
    }
}

#[tokio::test]
async fn rejected_query_is_a_tagged_payload_string() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let result = executor
        .execute_tool(&call("query_data", &[("query", "SELECT * FROM nonexistent")]))
        .await;
    assert!(result.success);
    let output = result.output.unwrap();
    assert!(output.starts_with("Database Error:"), "{output}");
    assert!(output.contains("nonexistent"), "{output}");
}

#[tokio::test]
async fn same_select_twice_returns_identical_rows() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);
    let query_call = call("query_data", &[("query", "SELECT * FROM customers ORDER BY id")]);

    let first = executor.execute_tool(&query_call).await;
    let second = executor.execute_tool(&query_call).await;
    assert_eq!(payload(&first), payload(&second));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let dir = TempDir::new().unwrap();
    let executor = seeded_executor(&dir);

    let calls = vec![
        call("list_collections", &[]),
        call("get_schema", &[("container_name", "customers")]),
        call("query_data", &[("query", "SELECT username FROM users ORDER BY id")]),
    ];
    let results = executor.execute_tools(&calls).await;
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.success));
}
