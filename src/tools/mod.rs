//! The tools served by the `mcp-tools` binary.

use crate::{Clock, Result, ToolRegistry};
use std::sync::Arc;

pub mod alerts;
pub mod frontmatter;
pub mod hello;

/// Registers `Hello`, `get_alerts` and `get_frontmatter`.
pub fn register_all(registry: &mut ToolRegistry, clock: Arc<dyn Clock>) -> Result<()> {
    registry.register(hello::NAME, hello::DESCRIPTION, hello::schema(), hello::handle)?;
    registry.register(
        alerts::NAME,
        alerts::DESCRIPTION,
        alerts::schema(),
        alerts::handle,
    )?;
    registry.register(
        frontmatter::NAME,
        frontmatter::DESCRIPTION,
        frontmatter::schema(),
        frontmatter::Frontmatter::new(clock),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SystemClock};

    #[test]
    fn test_register_all() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, Arc::new(SystemClock)).unwrap();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["Hello", "get_alerts", "get_frontmatter"]
        );
    }

    #[test]
    fn test_register_all_twice_is_rejected() {
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, Arc::new(SystemClock)).unwrap();

        let err = register_all(&mut registry, Arc::new(SystemClock)).unwrap_err();
        assert!(matches!(err, Error::DuplicateTool(ref name) if name == "Hello"));
        assert_eq!(registry.len(), 3);
    }
}
