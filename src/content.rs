use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// The response envelope every tool handler returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
}

/// One unit of a tool's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text { text: String },
}

impl ToolResult {
    /// A result holding a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The text of the first text item, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentItem::as_text)
    }
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentItem::Text { text } => Some(text),
        }
    }
}

impl From<ContentItem> for Content {
    fn from(item: ContentItem) -> Self {
        match item {
            ContentItem::Text { text } => Content::text(text),
        }
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        CallToolResult::success(result.content.into_iter().map(Content::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let result = ToolResult::text("hi");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "content": [{ "type": "text", "text": "hi" }] })
        );
    }

    #[test]
    fn test_into_call_tool_result() {
        let result = ToolResult {
            content: vec![ContentItem::text("one"), ContentItem::text("two")],
        };
        let result = CallToolResult::from(result);

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.content[1].as_text().unwrap().text, "two");
    }
}
