//! MCP tool handlers for the goal tracker server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler group is in a separate file.

pub mod budget;
pub mod export;
pub mod goals;
pub mod list;
pub mod timetable;
