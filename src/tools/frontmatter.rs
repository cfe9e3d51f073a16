use crate::{Clock, InputSchema, ToolHandler, ToolResult, ValidatedInput};
use futures::future::{BoxFuture, FutureExt};
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};

pub const NAME: &str = "get_frontmatter";
pub const DESCRIPTION: &str = "Generate frontmatter for a blog post";

const DEFAULT_AUTHOR: &str = "Anonymous";

static HEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s*").unwrap());

#[derive(Debug, Default, Deserialize)]
pub struct Params {
    pub content: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub fn schema() -> InputSchema {
    InputSchema::new()
        .string("content", "The content of the blog post")
        .optional_string("title", "The title of the blog post")
        .optional_string("author", "The author of the blog post")
        .optional_string_array("tags", "Tags for the blog post")
}

/// Prepends a title/author/date/tags block to blog post content.
pub struct Frontmatter {
    clock: Arc<dyn Clock>,
}

impl Frontmatter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl ToolHandler for Frontmatter {
    fn call(&self, input: ValidatedInput) -> BoxFuture<'static, anyhow::Result<ToolResult>> {
        let date = self.clock.today();
        async move {
            let params: Params = input.parse()?;
            Ok(ToolResult::text(render(&params, &date)))
        }
        .boxed()
    }
}

/// The first line of `content` without its leading `#` marker.
pub fn derive_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    HEADING_MARKER.replace(first_line, "").into_owned()
}

pub fn render(params: &Params, date: &str) -> String {
    let title = match params.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => derive_title(&params.content),
    };
    let author = params
        .author
        .as_deref()
        .filter(|author| !author.is_empty())
        .unwrap_or(DEFAULT_AUTHOR);
    let tags = params
        .tags
        .iter()
        .flatten()
        .map(|tag| format!("\"{tag}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let block = [
        "---".to_string(),
        format!("title: \"{title}\""),
        format!("author: \"{author}\""),
        format!("date: \"{date}\""),
        format!("tags: [{tags}]"),
        "---".to_string(),
    ]
    .join("\n");

    format!("{block}\n\n{}", params.content)
}
