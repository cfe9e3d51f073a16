mod clock;
mod config;
mod content;
mod error;
pub mod registry;
pub mod schema;
mod server;
#[cfg(test)]
mod tests;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use content::{ContentItem, ToolResult};
pub use error::{Error, Result};
pub use registry::{ToolDefinition, ToolHandler, ToolRegistry};
pub use schema::{
    FieldKind, FieldValidator, InputSchema, SchemaValidator, ValidatedInput, ValidationError,
};
pub use server::Server;
