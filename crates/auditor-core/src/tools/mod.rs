//! Tool system exposed to the hosting transport

pub mod base;
pub mod executor;
pub mod registry;
pub mod types;

pub use base::{Tool, ToolError};
pub use executor::ToolExecutor;
pub use registry::ToolRegistry;
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
