//! AgentCore sandbox tool spec
//!
//! Thin pass-through layer over the injected sandbox clients. Every
//! operation forwards its arguments to one client call and formats the
//! response as a status string; client errors propagate unchanged.

use tracing::debug;

use crate::client::{BrowserClient, CodeInterpreterClient};
use crate::core::config::{
    resolve_region, Config, DEFAULT_BROWSER_IDENTIFIER, DEFAULT_BROWSER_SESSION_TIMEOUT_SECS,
    DEFAULT_CODE_INTERPRETER_IDENTIFIER, DEFAULT_CODE_INTERPRETER_SESSION_TIMEOUT_SECS,
    DEFAULT_LIVE_VIEW_EXPIRES_SECS,
};
use crate::core::Result;

/// Tool spec exposing AgentCore sandbox sessions as agent tools.
///
/// Holds one browser client, one code interpreter client, and the region
/// they were constructed for. Session lifecycle lives in the clients.
pub struct AgentCoreToolSpec {
    /// Region the sandbox clients are constructed for
    region: String,
    /// Browser sandbox client
    browser: Box<dyn BrowserClient>,
    /// Code interpreter sandbox client
    code_interpreter: Box<dyn CodeInterpreterClient>,
}

impl AgentCoreToolSpec {
    /// Create a new tool spec.
    ///
    /// When `region` is `None` it is resolved from `AWS_REGION`, then
    /// `AWS_DEFAULT_REGION`, then falls back to `us-west-2`. The clients
    /// are expected to be built for the same region.
    pub fn new(
        region: Option<&str>,
        browser: Box<dyn BrowserClient>,
        code_interpreter: Box<dyn CodeInterpreterClient>,
    ) -> Self {
        Self {
            region: resolve_region(region),
            browser,
            code_interpreter,
        }
    }

    /// Create a tool spec for the region a [`Config`] resolved
    pub fn from_config(
        config: &Config,
        browser: Box<dyn BrowserClient>,
        code_interpreter: Box<dyn CodeInterpreterClient>,
    ) -> Self {
        Self {
            region: config.region.clone(),
            browser,
            code_interpreter,
        }
    }

    /// Region the sandbox clients are constructed for
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Start a browser sandbox session
    pub async fn browser_start(
        &self,
        identifier: Option<&str>,
        name: Option<&str>,
        session_timeout_seconds: Option<u64>,
    ) -> Result<String> {
        let identifier = identifier.unwrap_or(DEFAULT_BROWSER_IDENTIFIER);
        let timeout = session_timeout_seconds.unwrap_or(DEFAULT_BROWSER_SESSION_TIMEOUT_SECS);

        debug!(region = %self.region, identifier, "starting browser session");
        let session_id = self.browser.start(identifier, name, timeout).await?;

        Ok(format!("Browser session started with ID: {}", session_id))
    }

    /// Stop the current browser session
    pub async fn browser_stop(&self) -> Result<String> {
        self.browser.stop().await?;
        Ok("Browser session stopped".to_string())
    }

    /// Generate a presigned URL to view the browser session
    pub async fn browser_view(&self, expires: Option<u64>) -> Result<String> {
        let expires = expires.unwrap_or(DEFAULT_LIVE_VIEW_EXPIRES_SECS);

        let url = self.browser.generate_live_view_url(expires).await?;

        Ok(format!("Browser view URL: {}", url))
    }

    /// Take manual control of the browser session
    pub async fn browser_control(&self) -> Result<String> {
        self.browser.take_control().await?;
        Ok("Took control of browser session".to_string())
    }

    /// Release manual control of the browser session
    pub async fn browser_release(&self) -> Result<String> {
        self.browser.release_control().await?;
        Ok("Released control of browser session".to_string())
    }

    /// Generate WebSocket connection details for the browser sandbox
    pub async fn browser_ws_headers(&self) -> Result<String> {
        let ws = self.browser.generate_ws_headers().await?;

        Ok(format!(
            "WebSocket URL: {}\nHeaders: {:?}",
            ws.url, ws.headers
        ))
    }

    /// Start a code interpreter sandbox session
    pub async fn code_interpreter_start(
        &self,
        identifier: Option<&str>,
        name: Option<&str>,
        session_timeout_seconds: Option<u64>,
    ) -> Result<String> {
        let identifier = identifier.unwrap_or(DEFAULT_CODE_INTERPRETER_IDENTIFIER);
        let timeout = session_timeout_seconds.unwrap_or(DEFAULT_CODE_INTERPRETER_SESSION_TIMEOUT_SECS);

        debug!(region = %self.region, identifier, "starting code interpreter session");
        let session_id = self.code_interpreter.start(identifier, name, timeout).await?;

        Ok(format!(
            "Code interpreter session started with ID: {}",
            session_id
        ))
    }

    /// Stop the current code interpreter session
    pub async fn code_interpreter_stop(&self) -> Result<String> {
        self.code_interpreter.stop().await?;
        Ok("Code interpreter session stopped".to_string())
    }

    /// Execute code in the code interpreter sandbox
    pub async fn code_interpreter_execute(
        &self,
        method: Option<&str>,
        params: Option<serde_json::Value>,
    ) -> Result<String> {
        let method = method.unwrap_or("execute");

        debug!(method, "invoking code interpreter");
        let result = self.code_interpreter.invoke(method, params).await?;

        Ok(format!("Code execution result: {}", result))
    }
}
