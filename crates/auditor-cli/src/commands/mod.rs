//! Command routing and tool dispatch

pub mod seed;

use crate::args::{Cli, Commands};
use auditor_core::config;
use auditor_core::store;
use auditor_core::tools::{ToolCall, ToolExecutor, ToolRegistry};
use auditor_tools::data_tools;
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;

pub async fn route(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Tools => list_tools(),
        Commands::ListCollections => dispatch("list_collections", HashMap::new()).await,
        Commands::GetSchema { container_name } => {
            dispatch(
                "get_schema",
                HashMap::from([("container_name".to_string(), json!(container_name))]),
            )
            .await
        }
        Commands::Query { container, query } => {
            let mut arguments = HashMap::from([("query".to_string(), json!(query))]);
            if let Some(container) = container {
                arguments.insert("container_name".to_string(), json!(container));
            }
            dispatch("query_data", arguments).await
        }
        Commands::Seed {
            path,
            customers,
            users,
        } => {
            seed::run(&path, customers, users)?;
            println!("Seeded {} ({customers} customers, {users} users)", path.display());
            Ok(())
        }
    }
}

fn build_registry() -> anyhow::Result<ToolRegistry> {
    let config = config::load_from_env()?;
    let store = store::connect(&config)?;
    let mut registry = ToolRegistry::new();
    registry.register_all(data_tools(store));
    Ok(registry)
}

fn build_executor() -> anyhow::Result<ToolExecutor> {
    let registry = build_registry()?;
    let mut executor = ToolExecutor::new();
    executor.register_tools(registry.all_tools());
    Ok(executor)
}

fn list_tools() -> anyhow::Result<()> {
    let registry = build_registry()?;
    for schema in registry.schemas() {
        println!("{}: {}", schema.name, schema.description);
        println!("{}", serde_json::to_string_pretty(&schema.parameters)?);
    }
    Ok(())
}

/// Execute one tool call and print its payload.
///
/// Store failures arrive as payload content and print like any other
/// payload; only tool-level failures (bad arguments, unknown tool) exit
/// nonzero.
async fn dispatch(name: &str, arguments: HashMap<String, Value>) -> anyhow::Result<()> {
    let executor = build_executor()?;
    let call = ToolCall::new(Uuid::new_v4().to_string(), name.to_string(), arguments);
    let result = executor.execute_tool(&call).await;

    if !result.success {
        anyhow::bail!(
            "{}",
            result.error.unwrap_or_else(|| "tool call failed".to_string())
        );
    }

    let output = result.output.unwrap_or_default();
    // Payloads are JSON except the tagged error string; print both readably.
    match serde_json::from_str::<Value>(&output) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{output}"),
    }
    Ok(())
}
