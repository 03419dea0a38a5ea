//! Tool registry - manages and dispatches sandbox tool calls
//!
//! Central hub for registering the sandbox tool definitions and routing
//! tool calls from the hosting framework to the tool spec.

use std::collections::HashMap;

use crate::client::{BrowserClient, CodeInterpreterClient};
use crate::core::config::{BrowserSettings, CodeInterpreterSettings, Config};
use crate::core::{Result, ToolCall, ToolCategory, ToolDefinition, ToolResult};
use crate::tools::sandbox::AgentCoreToolSpec;

/// Registry of available sandbox tools
pub struct ToolRegistry {
    /// Tool definitions indexed by name
    definitions: HashMap<String, ToolDefinition>,
    /// Tool categories
    categories: HashMap<String, ToolCategory>,
    /// Sandbox tool spec instance
    sandbox: AgentCoreToolSpec,
    /// Browser defaults applied when a tool call omits arguments
    browser_settings: BrowserSettings,
    /// Code interpreter defaults applied when a tool call omits arguments
    code_interpreter_settings: CodeInterpreterSettings,
}

impl ToolRegistry {
    /// Create a registry around an existing tool spec with default settings
    pub fn new(sandbox: AgentCoreToolSpec) -> Self {
        Self::with_settings(
            sandbox,
            BrowserSettings::default(),
            CodeInterpreterSettings::default(),
        )
    }

    /// Create a registry wired from a [`Config`] and the two sandbox clients
    pub fn from_config(
        config: &Config,
        browser: Box<dyn BrowserClient>,
        code_interpreter: Box<dyn CodeInterpreterClient>,
    ) -> Self {
        let sandbox = AgentCoreToolSpec::from_config(config, browser, code_interpreter);
        Self::with_settings(
            sandbox,
            config.browser.clone(),
            config.code_interpreter.clone(),
        )
    }

    fn with_settings(
        sandbox: AgentCoreToolSpec,
        browser_settings: BrowserSettings,
        code_interpreter_settings: CodeInterpreterSettings,
    ) -> Self {
        let mut registry = Self {
            definitions: HashMap::new(),
            categories: HashMap::new(),
            sandbox,
            browser_settings,
            code_interpreter_settings,
        };

        registry.register_browser_tools();
        registry.register_code_interpreter_tools();

        registry
    }

    /// Register the browser sandbox tools
    fn register_browser_tools(&mut self) {
        self.register(
            ToolDefinition::function(
                "browser_start",
                "Start a browser sandbox session",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "identifier": {
                            "type": "string",
                            "description": "The browser sandbox identifier to use"
                        },
                        "name": {
                            "type": "string",
                            "description": "A name for the browser session"
                        },
                        "session_timeout_seconds": {
                            "type": "integer",
                            "description": "The timeout for the session in seconds"
                        }
                    }
                }),
            ),
            ToolCategory::Browser,
        );

        self.register(
            ToolDefinition::function(
                "browser_stop",
                "Stop the current browser session",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolCategory::Browser,
        );

        self.register(
            ToolDefinition::function(
                "browser_view",
                "Generate a pre-signed URL to view the browser session",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "expires": {
                            "type": "integer",
                            "description": "The number of seconds until the pre-signed URL expires"
                        }
                    }
                }),
            ),
            ToolCategory::Browser,
        );

        self.register(
            ToolDefinition::function(
                "browser_control",
                "Take control of the browser session",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolCategory::Browser,
        );

        self.register(
            ToolDefinition::function(
                "browser_release",
                "Release control of the browser session",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolCategory::Browser,
        );

        self.register(
            ToolDefinition::function(
                "browser_ws_headers",
                "Generate WebSocket headers for connecting to the browser sandbox",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolCategory::Browser,
        );
    }

    /// Register the code interpreter sandbox tools
    fn register_code_interpreter_tools(&mut self) {
        self.register(
            ToolDefinition::function(
                "code_interpreter_start",
                "Start a code interpreter sandbox session",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "identifier": {
                            "type": "string",
                            "description": "The code interpreter sandbox identifier to use"
                        },
                        "name": {
                            "type": "string",
                            "description": "A name for the code interpreter session"
                        },
                        "session_timeout_seconds": {
                            "type": "integer",
                            "description": "The timeout for the session in seconds"
                        }
                    }
                }),
            ),
            ToolCategory::CodeInterpreter,
        );

        self.register(
            ToolDefinition::function(
                "code_interpreter_stop",
                "Stop the current code interpreter session",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            ToolCategory::CodeInterpreter,
        );

        self.register(
            ToolDefinition::function(
                "code_interpreter_execute",
                "Execute code in the code interpreter sandbox",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "method": {
                            "type": "string",
                            "description": "The name of the method to invoke in the sandbox"
                        },
                        "params": {
                            "type": "object",
                            "description": "Parameters to pass to the method"
                        }
                    }
                }),
            ),
            ToolCategory::CodeInterpreter,
        );
    }

    /// Register a tool definition
    pub fn register(&mut self, definition: ToolDefinition, category: ToolCategory) {
        let name = definition.function.name.clone();
        self.definitions.insert(name.clone(), definition);
        self.categories.insert(name, category);
    }

    /// Get all tool definitions
    pub fn all_definitions(&self) -> Vec<&ToolDefinition> {
        self.definitions.values().collect()
    }

    /// Get tool definitions by category
    pub fn definitions_by_category(&self, category: ToolCategory) -> Vec<&ToolDefinition> {
        self.definitions
            .iter()
            .filter(|(name, _)| self.categories.get(*name) == Some(&category))
            .map(|(_, def)| def)
            .collect()
    }

    /// Get browser tool definitions
    pub fn browser_tools(&self) -> Vec<&ToolDefinition> {
        self.definitions_by_category(ToolCategory::Browser)
    }

    /// Get code interpreter tool definitions
    pub fn code_interpreter_tools(&self) -> Vec<&ToolDefinition> {
        self.definitions_by_category(ToolCategory::CodeInterpreter)
    }

    /// Get the underlying tool spec
    pub fn tool_spec(&self) -> &AgentCoreToolSpec {
        &self.sandbox
    }

    /// Execute a tool call
    pub async fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        match self.categories.get(&tool_call.name) {
            Some(ToolCategory::Browser) => self.execute_browser_tool(tool_call).await,
            Some(ToolCategory::CodeInterpreter) => {
                self.execute_code_interpreter_tool(tool_call).await
            }
            None => Ok(ToolResult::failure(
                &tool_call.name,
                format!("Unknown tool: {}", tool_call.name),
            )),
        }
    }

    /// Execute a browser tool
    async fn execute_browser_tool(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let output = match tool_call.name.as_str() {
            "browser_start" => {
                let identifier = tool_call
                    .get_string("identifier")
                    .unwrap_or_else(|| self.browser_settings.identifier.clone());
                let name = tool_call.get_string("name");
                let timeout = tool_call
                    .get_u64("session_timeout_seconds")
                    .unwrap_or(self.browser_settings.session_timeout_secs);
                self.sandbox
                    .browser_start(Some(identifier.as_str()), name.as_deref(), Some(timeout))
                    .await?
            }
            "browser_stop" => self.sandbox.browser_stop().await?,
            "browser_view" => {
                let expires = tool_call
                    .get_u64("expires")
                    .unwrap_or(self.browser_settings.live_view_expires_secs);
                self.sandbox.browser_view(Some(expires)).await?
            }
            "browser_control" => self.sandbox.browser_control().await?,
            "browser_release" => self.sandbox.browser_release().await?,
            "browser_ws_headers" => self.sandbox.browser_ws_headers().await?,
            _ => {
                return Ok(ToolResult::failure(
                    &tool_call.name,
                    format!("Unknown browser tool: {}", tool_call.name),
                ))
            }
        };

        Ok(ToolResult::success(&tool_call.name, output))
    }

    /// Execute a code interpreter tool
    async fn execute_code_interpreter_tool(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        let output = match tool_call.name.as_str() {
            "code_interpreter_start" => {
                let identifier = tool_call
                    .get_string("identifier")
                    .unwrap_or_else(|| self.code_interpreter_settings.identifier.clone());
                let name = tool_call.get_string("name");
                let timeout = tool_call
                    .get_u64("session_timeout_seconds")
                    .unwrap_or(self.code_interpreter_settings.session_timeout_secs);
                self.sandbox
                    .code_interpreter_start(Some(identifier.as_str()), name.as_deref(), Some(timeout))
                    .await?
            }
            "code_interpreter_stop" => self.sandbox.code_interpreter_stop().await?,
            "code_interpreter_execute" => {
                let method = tool_call.get_string("method");
                let params = tool_call.get_object("params");
                self.sandbox
                    .code_interpreter_execute(method.as_deref(), params)
                    .await?
            }
            _ => {
                return Ok(ToolResult::failure(
                    &tool_call.name,
                    format!("Unknown code interpreter tool: {}", tool_call.name),
                ))
            }
        };

        Ok(ToolResult::success(&tool_call.name, output))
    }
}
