use crate::schema::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("invalid tool name: {0:?}")]
    InvalidToolName(String),

    #[error("unknown tool '{name}'{}", did_you_mean(.suggestion))]
    UnknownTool {
        name: String,
        suggestion: Option<String>,
    },

    #[error("invalid input for tool '{tool}': {source}")]
    InvalidInput {
        tool: String,
        #[source]
        source: ValidationError,
    },

    #[error("tool '{tool}' failed: {source}")]
    HandlerError {
        tool: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<Error> for rmcp::ErrorData {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownTool { .. } => rmcp::ErrorData::new(
                rmcp::model::ErrorCode::INVALID_PARAMS,
                err.to_string(),
                None,
            ),
            Error::InvalidInput { ref source, .. } => {
                let data = serde_json::json!({
                    "path": source.path,
                    "constraint": source.constraint,
                    "actual": source.actual,
                });
                rmcp::ErrorData::new(
                    rmcp::model::ErrorCode::INVALID_PARAMS,
                    err.to_string(),
                    Some(data),
                )
            }
            _ => rmcp::ErrorData::new(
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                format!("internal error: {err}"),
                None,
            ),
        }
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean '{name}'?"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_unknown_tool_message() {
        let err = Error::UnknownTool {
            name: "helo".into(),
            suggestion: Some("Hello".into()),
        };
        assert_eq!(err.to_string(), "unknown tool 'helo', did you mean 'Hello'?");

        let err = Error::UnknownTool {
            name: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown tool 'zzz'");
    }

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let err = Error::InvalidInput {
            tool: "get_alerts".into(),
            source: ValidationError::new("state", "string of at most 2 characters", json!("CAL")),
        };
        let data = rmcp::ErrorData::from(err);
        assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
        assert!(data.message.contains("state"));
        assert_eq!(data.data.unwrap()["actual"], "CAL");
    }

    #[test]
    fn test_handler_error_maps_to_internal_error() {
        let err = Error::HandlerError {
            tool: "broken".into(),
            source: anyhow::anyhow!("disk on fire"),
        };
        let data = rmcp::ErrorData::from(err);
        assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
        assert!(data.message.contains("disk on fire"));
    }
}
