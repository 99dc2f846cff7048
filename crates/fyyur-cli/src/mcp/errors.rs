//! Error handling utilities for MCP server

use fyyur_core::DirectoryError;
use rmcp::ErrorData;

/// Helper to convert directory errors to MCP errors
///
/// Errors caused by the request (unknown IDs, invalid fields, rejected
/// references) become `invalid_params`; store failures become
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &DirectoryError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use fyyur_core::EntityKind;
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_not_found_is_invalid_params() {
        let error = to_mcp_error(
            "Failed to get venue",
            &DirectoryError::not_found(EntityKind::Venue, 9),
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("Failed to get venue"));
        assert!(error.message.contains("9"));
    }

    #[test]
    fn test_validation_is_invalid_params() {
        let error = to_mcp_error(
            "Failed to create show",
            &DirectoryError::invalid_input("start_time", "not a date"),
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("start_time"));
    }

    #[test]
    fn test_setup_failure_is_internal() {
        let error = to_mcp_error(
            "Failed to list venues",
            &DirectoryError::Configuration {
                message: "Task join error".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
