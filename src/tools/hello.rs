use crate::{InputSchema, ToolResult, ValidatedInput};
use serde::Deserialize;

pub const NAME: &str = "Hello";
pub const DESCRIPTION: &str = "Get a greeting with your name";

#[derive(Debug, Deserialize)]
struct Params {
    name: String,
}

pub fn schema() -> InputSchema {
    InputSchema::new().string("name", "Your name")
}

pub async fn handle(input: ValidatedInput) -> anyhow::Result<ToolResult> {
    let params: Params = input.parse()?;
    Ok(ToolResult::text(greeting(&params.name)))
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! Welcome to MCP Tools.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentItem, ToolRegistry};
    use serde_json::json;

    #[tokio::test]
    async fn test_hello_world() {
        let mut registry = ToolRegistry::new();
        registry.register(NAME, DESCRIPTION, schema(), handle).unwrap();

        let result = registry
            .invoke(NAME, &json!({ "name": "World" }))
            .await
            .unwrap();

        assert_eq!(
            result.content,
            vec![ContentItem::text("Hello, World! Welcome to MCP Tools.")]
        );
    }

    #[test]
    fn test_greeting_keeps_name_verbatim() {
        assert_eq!(greeting(""), "Hello, ! Welcome to MCP Tools.");
        assert_eq!(greeting("Zoë"), "Hello, Zoë! Welcome to MCP Tools.");
    }
}
