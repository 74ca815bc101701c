//! Validation helper functions for the goal tracker MCP server
//!
//! This module turns raw tool arguments into domain values and domain
//! failures into tool errors.

use crate::tracker::{Category, TrackerError};
use mcp_attr::Result as McpResult;

/// Convert a tracker failure into a user-visible tool error
pub fn tracker_error(err: TrackerError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(err.to_string(), true)
}

/// Parse and validate a category argument
///
/// # Arguments
/// * `category` - Category name (academic, spiritual, financial, personal)
pub fn parse_category(category: &str) -> McpResult<Category> {
    category.parse::<Category>().map_err(tracker_error)
}

/// Convert a 1-based list position into a 0-based index
///
/// # Arguments
/// * `position` - Position as shown by `list` (starts at 1)
pub fn parse_position(position: u32) -> McpResult<usize> {
    if position == 0 {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                "Invalid position 0. Positions start at 1, as shown by list.".to_string(),
                true,
            ),
        );
    }
    Ok(position as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("financial").ok(), Some(Category::Financial));
        assert!(parse_category("fitness").is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(1).ok(), Some(0));
        assert_eq!(parse_position(7).ok(), Some(6));
        assert!(parse_position(0).is_err());
    }
}
