//! FitTracker Tools module
//!
//! Tool implementations shared by the MCP server and the utility binaries.

pub mod diary;
pub mod status;
