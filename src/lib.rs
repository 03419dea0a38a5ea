//! AgentCore sandbox tools
//!
//! Exposes AWS AgentCore browser-automation and code-execution sandbox
//! sessions as agent-invocable tools. Each tool is a thin pass-through to
//! one of two injected sandbox clients and returns a formatted status
//! string; the clients own session lifecycle, live view streaming, and
//! WebSocket negotiation.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Client**: Contracts for the browser and code interpreter clients
//! - **Tools**: The sandbox tool spec and the tool registry
//!
//! # Usage
//!
//! ```ignore
//! use agentcore_tools::{AgentCoreToolSpec, ToolRegistry};
//!
//! // Clients implement the BrowserClient / CodeInterpreterClient traits.
//! let spec = AgentCoreToolSpec::new(None, browser, code_interpreter);
//! let registry = ToolRegistry::new(spec);
//!
//! let started = registry
//!     .tool_spec()
//!     .browser_start(None, Some("checkout-flow"), None)
//!     .await?;
//! println!("{}", started);
//! ```

pub mod client;
pub mod core;
pub mod tools;

// Re-export commonly used items
pub use client::{BrowserClient, CodeInterpreterClient, WsConnectionInfo};
pub use core::{AgentCoreError, Config, Result};
pub use tools::{AgentCoreToolSpec, ToolRegistry};
