//! Browser sandbox client contract
//!
//! The client owns the session: identity, lifecycle, live view streaming,
//! WebSocket negotiation, and presigned URL generation all happen behind
//! this trait. The tool layer only forwards to it.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// WebSocket connection details for a browser sandbox session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsConnectionInfo {
    /// WebSocket endpoint URL
    pub url: String,
    /// Headers required to authenticate the connection
    pub headers: HashMap<String, String>,
}

/// Client for a remotely managed browser sandbox session.
///
/// One active session per client at a time; operations other than `start`
/// act on the current session and may fail with
/// [`AgentCoreError::Session`](crate::core::AgentCoreError::Session) when
/// none is active.
#[async_trait]
pub trait BrowserClient: Send + Sync {
    /// Start a session and return its id
    async fn start(
        &self,
        identifier: &str,
        name: Option<&str>,
        session_timeout_seconds: u64,
    ) -> Result<String>;

    /// Stop the current session
    async fn stop(&self) -> Result<()>;

    /// Generate the WebSocket URL and headers for the current session
    async fn generate_ws_headers(&self) -> Result<WsConnectionInfo>;

    /// Generate a presigned live view URL expiring after `expires` seconds
    async fn generate_live_view_url(&self, expires: u64) -> Result<String>;

    /// Take manual control of the session, pausing automation
    async fn take_control(&self) -> Result<()>;

    /// Release manual control back to automation
    async fn release_control(&self) -> Result<()>;
}
