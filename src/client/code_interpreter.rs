//! Code interpreter sandbox client contract

use async_trait::async_trait;

use crate::core::Result;

/// Client for a remotely managed code interpreter sandbox session.
///
/// One active session per client at a time, enforced by the implementation.
#[async_trait]
pub trait CodeInterpreterClient: Send + Sync {
    /// Start a session and return its id
    async fn start(
        &self,
        identifier: &str,
        name: Option<&str>,
        session_timeout_seconds: u64,
    ) -> Result<String>;

    /// Stop the current session
    async fn stop(&self) -> Result<()>;

    /// Invoke a named method with optional parameters in the sandbox
    async fn invoke(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value>;
}
