//! FitTracker Library
//!
//! Daily food and exercise diary: a static catalog, the entry factory,
//! stats aggregation and goal progress, plus the SQLite-backed entry store.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod db;
pub mod diary;
pub mod mcp;
pub mod models;
pub mod tools;
