use crate::{
    Error, Result, ToolResult,
    schema::{FieldValidator, InputSchema, SchemaValidator, ValidatedInput},
};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, future::Future, sync::Arc};

/// Minimum similarity for an unknown name to be answered with a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The behavior behind a registered tool.
///
/// Implemented for any `Fn(ValidatedInput) -> impl Future<Output = anyhow::Result<ToolResult>>`,
/// so plain `async fn`s can be registered directly.
pub trait ToolHandler: Send + Sync {
    fn call(&self, input: ValidatedInput) -> BoxFuture<'static, anyhow::Result<ToolResult>>;
}

impl<F, Fut> ToolHandler for F
where
    F: Fn(ValidatedInput) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<ToolResult>> + Send + 'static,
{
    fn call(&self, input: ValidatedInput) -> BoxFuture<'static, anyhow::Result<ToolResult>> {
        self(input).boxed()
    }
}

pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: InputSchema,
    handler: Box<dyn ToolHandler>,
}

impl ToolDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Binds tool names to their descriptions, input schemas and handlers.
///
/// Tools are registered at startup through `&mut self`; the registry is then
/// shared read-only, so invocation needs no locking.
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDefinition>,
    validator: Arc<dyn SchemaValidator>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::with_validator(FieldValidator)
    }

    pub fn with_validator(validator: impl SchemaValidator + 'static) -> Self {
        Self {
            tools: BTreeMap::new(),
            validator: Arc::new(validator),
        }
    }

    /// Registers a tool. Names are unique: registering an existing name fails
    /// and keeps the original definition.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
        handler: impl ToolHandler + 'static,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidToolName(name));
        }
        if self.tools.contains_key(&name) {
            return Err(Error::DuplicateTool(name));
        }

        tracing::debug!(tool = %name, "registering tool");
        let definition = ToolDefinition {
            name: name.clone(),
            description: description.into(),
            input_schema,
            handler: Box::new(handler),
        };
        self.tools.insert(name, definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validates `raw` against the tool's schema and runs its handler.
    pub async fn invoke(&self, name: &str, raw: &Value) -> Result<ToolResult> {
        let Some(tool) = self.tools.get(name) else {
            return Err(Error::UnknownTool {
                name: name.to_string(),
                suggestion: self.suggest(name),
            });
        };

        let input = self
            .validator
            .validate(&tool.input_schema, raw)
            .map_err(|source| {
                tracing::warn!(tool = %name, error = %source, "rejected tool input");
                Error::InvalidInput {
                    tool: name.to_string(),
                    source,
                }
            })?;

        tracing::debug!(tool = %name, "invoking tool");
        let result = tool.handler.call(input).await.map_err(|source| {
            tracing::error!(tool = %name, error = %source, "tool handler failed");
            Error::HandlerError {
                tool: name.to_string(),
                source,
            }
        })?;

        if result.is_empty() {
            return Err(Error::HandlerError {
                tool: name.to_string(),
                source: anyhow::anyhow!("handler returned no content"),
            });
        }

        Ok(result)
    }

    fn suggest(&self, name: &str) -> Option<String> {
        self.tools
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&candidate.to_lowercase(), &name.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, candidate)| candidate.clone())
    }
}
