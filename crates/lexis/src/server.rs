//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analysis engine over stdio so assistants can call it as a set
//! of tools. Every analysis tool answers with the boundary envelope:
//! `{"success": true, "result": ...}` on success, or a tool error carrying
//! `{"success": false, "error": "..."}` when the request itself is invalid.
//! Failures inside the engine surface as protocol-level internal errors.
//!
//! The server is a presentation layer. Each `#[tool]` method delegates to
//! [`Engine`] and does no analysis of its own.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use lexis_core::response::{Envelope, ErrorClass};
use lexis_core::{AnalysisError, AnalysisOptions, Engine, lexicon};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze. Must contain a non-whitespace character.
    pub text: String,
    /// Optional stage switches; server defaults apply when omitted.
    pub options: Option<AnalysisOptions>,
}

/// Parameters for the `batch_analyze` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BatchAnalyzeParams {
    /// Texts to analyze in order. One blank text fails the whole batch.
    pub texts: Vec<String>,
    /// Optional stage switches applied to every text.
    pub options: Option<AnalysisOptions>,
}

/// Parameters for the `compare_similarity` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareSimilarityParams {
    /// First text.
    pub text1: String,
    /// Second text.
    pub text2: String,
}

/// MCP server wrapping one shared [`Engine`].
#[derive(Clone)]
pub struct LexisServer {
    engine: Engine,
    options: AnalysisOptions,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for LexisServer {
    fn default() -> Self {
        Self::new(
            Engine::new(),
            AnalysisOptions::default(),
            Some(lexis_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

/// Serialize a successful payload into a tool result.
fn success<T: Serialize>(result: T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(&Envelope::ok(result))
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Report an invalid request as a tool error carrying the failure envelope.
fn client_error(message: impl Into<String>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(&Envelope::<()>::failure(message))
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::error(vec![Content::text(json)]))
}

/// Map an engine outcome onto the boundary.
fn respond<T: Serialize>(
    tool: &'static str,
    result: Result<T, AnalysisError>,
) -> Result<CallToolResult, McpError> {
    match Envelope::from_result(result) {
        (envelope, None) => {
            tracing::info!(tool = tool, "MCP tool completed");
            let json = serde_json::to_string_pretty(&envelope).map_err(|e| {
                McpError::internal_error(format!("serialization error: {e}"), None)
            })?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        (envelope, Some(ErrorClass::Client)) => {
            let message = envelope.error.unwrap_or_default();
            tracing::warn!(tool = tool, error = %message, "rejected invalid request");
            client_error(message)
        }
        (envelope, Some(ErrorClass::Server)) => {
            let message = envelope.error.unwrap_or_default();
            tracing::error!(tool = tool, error = %message, "MCP tool failed");
            Err(McpError::internal_error(message, None))
        }
    }
}

impl LexisServer {
    /// The first text over the input limit, as an error message.
    fn oversized<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> Option<String> {
        let max = self.max_input?;
        texts.into_iter().find(|t| t.len() > max).map(|t| {
            format!(
                "input too large: {} bytes (limit: {max} bytes)",
                t.len()
            )
        })
    }
}

#[tool_router]
impl LexisServer {
    /// Create a server over `engine`, using `options` when a call omits them.
    pub fn new(engine: Engine, options: AnalysisOptions, max_input: Option<usize>) -> Self {
        Self {
            engine,
            options,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full analysis of one text.
    #[tool(
        description = "Analyze a text: sentiment, keywords, entities (NUMBER, EMAIL, URL), summary statistics, and language (zh, en, unknown)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", "executing MCP tool");
        if let Some(message) = self.oversized([params.text.as_str()]) {
            return client_error(message);
        }
        let options = params.options.unwrap_or(self.options);
        respond("analyze_text", self.engine.analyze(&params.text, &options))
    }

    /// Analyze many texts with shared options.
    #[tool(
        description = "Analyze a list of texts in order with shared options. Fails on the first blank text and reports its index."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", items = params.texts.len()))]
    fn batch_analyze(
        &self,
        Parameters(params): Parameters<BatchAnalyzeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "batch_analyze", "executing MCP tool");
        if let Some(message) = self.oversized(params.texts.iter().map(String::as_str)) {
            return client_error(message);
        }
        let options = params.options.unwrap_or(self.options);
        respond(
            "batch_analyze",
            self.engine.batch_analyze(&params.texts, &options),
        )
    }

    /// Hybrid similarity of two texts.
    #[tool(
        description = "Compare two texts. Returns a hybrid similarity in [0, 1] built from word-set Jaccard overlap and Jaro-Winkler closeness."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_similarity(
        &self,
        Parameters(params): Parameters<CompareSimilarityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_similarity", "executing MCP tool");
        if let Some(message) = self.oversized([params.text1.as_str(), params.text2.as_str()]) {
            return client_error(message);
        }
        respond(
            "compare_similarity",
            self.engine.compare_similarity(&params.text1, &params.text2),
        )
    }

    /// List supported features.
    #[tool(description = "List the analysis features this engine supports.")]
    #[tracing::instrument(skip_all, fields(otel.kind = "server"))]
    fn get_supported_features(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_supported_features", "executing MCP tool");
        success(self.engine.supported_features())
    }

    /// Engine readiness.
    #[tool(description = "Report engine readiness and version.")]
    #[tracing::instrument(skip_all, fields(otel.kind = "server"))]
    fn get_status(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_status", "executing MCP tool");
        success(serde_json::json!({
            "status": self.engine.status(),
            "builtinLexicons": lexicon::status(),
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }
}

#[tool_handler]
impl ServerHandler for LexisServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for sentiment, keywords, entities, summary and language; compare_similarity for text similarity.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
