//! FitTracker MCP Server Implementation
//!
//! Exposes the diary tools over MCP.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::db::SqliteEntryStore;
use crate::diary::SystemClock;
use crate::models::DailyGoals;
use crate::tools::diary;
use crate::tools::status::StatusTracker;

/// FitTracker MCP Service
#[derive(Clone)]
pub struct FitTrackerService {
    status_tracker: Arc<StatusTracker>,
    store: SqliteEntryStore,
    goals: DailyGoals,
    clock: SystemClock,
    tool_router: ToolRouter<FitTrackerService>,
}

impl FitTrackerService {
    pub fn new(database_path: PathBuf, store: SqliteEntryStore, goals: DailyGoals) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(database_path, goals)),
            store,
            goals,
            clock: SystemClock,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of the food name, case-insensitive. Empty returns no results.
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchExercisesParams {
    /// Part of the exercise name, case-insensitive. Empty returns no results.
    pub query: String,
    /// Duration used for the calorie preview (default 30)
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    /// Exact catalog food name, e.g. "Frango Grelhado"
    pub name: String,
    /// breakfast, lunch, dinner or snack (default lunch)
    pub meal: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddExerciseParams {
    /// Exact catalog exercise name, e.g. "Corrida"
    pub name: String,
    /// Minutes exercised, at least 1 (default 30)
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveEntryParams {
    /// Id of the food or exercise entry to remove
    pub id: String,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl FitTrackerService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitTracker service including build, diary entry counts, active goals and memory use")]
    fn fittracker_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status(&self.store))
    }

    #[tool(description = "Get instructions for logging food and exercise. Call this when starting a logging session or when unsure how to use the diary tools.")]
    fn diary_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::DIARY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(DIARY_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "Search the food catalog by name (case-insensitive substring)")]
    fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        json_result(&diary::search_foods(&p.query))
    }

    #[tool(description = "Search the exercise catalog by name, with calories per minute and a burn preview for the given duration")]
    fn search_exercises(&self, Parameters(p): Parameters<SearchExercisesParams>) -> Result<CallToolResult, McpError> {
        json_result(&diary::search_exercises(&p.query, p.duration_minutes))
    }

    // --- Entries ---

    #[tool(description = "Log one serving of a catalog food under a meal (breakfast, lunch, dinner, snack). Returns the entry and updated daily stats.")]
    fn add_food(&self, Parameters(p): Parameters<AddFoodParams>) -> Result<CallToolResult, McpError> {
        let result = diary::add_food(&self.store, &self.clock, &p.name, p.meal.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Log a catalog exercise for a number of minutes. Calories burned scale with duration. Returns the entry and updated daily stats.")]
    fn add_exercise(&self, Parameters(p): Parameters<AddExerciseParams>) -> Result<CallToolResult, McpError> {
        let result = diary::add_exercise(&self.store, &self.clock, &p.name, p.duration_minutes)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove a food or exercise entry by id. Removing an unknown id is a no-op.")]
    fn remove_entry(&self, Parameters(p): Parameters<RemoveEntryParams>) -> Result<CallToolResult, McpError> {
        let result = diary::remove_entry(&self.store, &p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Summary ---

    #[tool(description = "Get today's totals, net calories, progress toward each daily goal, and calories remaining")]
    fn get_daily_summary(&self) -> Result<CallToolResult, McpError> {
        let result = diary::get_daily_summary(&self.store, &self.goals)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List today's food entries grouped by meal with calorie subtotals")]
    fn list_meals(&self) -> Result<CallToolResult, McpError> {
        let result = diary::list_meals(&self.store).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List today's exercise entries with total minutes and calories burned")]
    fn list_exercises(&self) -> Result<CallToolResult, McpError> {
        let result = diary::list_exercises(&self.store).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitTrackerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fittracker".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitTracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitTracker - daily food and exercise diary. \
                 Call diary_instructions first. \
                 Catalog: search_foods, search_exercises. \
                 Entries: add_food, add_exercise, remove_entry. \
                 Day: get_daily_summary, list_meals, list_exercises. \
                 Service: fittracker_status."
                    .into(),
            ),
        }
    }
}
