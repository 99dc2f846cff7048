//! MCP tool handlers implementation

use std::sync::Arc;

use fyyur_core::{params as core, Directory, OperationStatus};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// McpParams wraps a core parameter type in a transparent serde container and
// forwards its JSON schema, so the core types need no MCP-specific derives.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type Search = McpParams<core::Search>;
pub type CreateVenue = McpParams<core::CreateVenue>;
pub type UpdateVenue = McpParams<core::UpdateVenue>;
pub type CreateArtist = McpParams<core::CreateArtist>;
pub type UpdateArtist = McpParams<core::UpdateArtist>;
pub type CreateShow = McpParams<core::CreateShow>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    directory: Arc<Directory>,
}

impl McpHandlers {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    pub async fn list_venues(&self) -> McpResult {
        debug!("list_venues");

        let areas = self
            .directory
            .list_venue_areas()
            .await
            .map_err(|e| to_mcp_error("Failed to list venues", &e))?;

        text(format!("# Venues\n\n{areas}"))
    }

    pub async fn search_venues(&self, Parameters(params): Parameters<Search>) -> McpResult {
        debug!("search_venues: {params:?}");

        let results = self
            .directory
            .search_venues_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to search venues", &e))?;

        text(results)
    }

    pub async fn show_venue(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_venue: {params:?}");

        let detail = self
            .directory
            .show_venue_detail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get venue", &e))?;

        text(detail)
    }

    pub async fn create_venue(&self, Parameters(params): Parameters<CreateVenue>) -> McpResult {
        debug!("create_venue: {params:?}");

        let inner = params.as_ref();
        let result = self
            .directory
            .create_venue_result(inner)
            .await
            .map_err(|e| to_mcp_error(&OperationStatus::venue_not_listed(&inner.name).message, &e))?;

        text(result)
    }

    pub async fn venue_form(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("venue_form: {params:?}");

        let form = self
            .directory
            .venue_form(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get venue", &e))?;

        text(form)
    }

    pub async fn update_venue(&self, Parameters(params): Parameters<UpdateVenue>) -> McpResult {
        debug!("update_venue: {params:?}");

        let result = self
            .directory
            .update_venue_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update venue", &e))?;

        text(result)
    }

    pub async fn delete_venue(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_venue: {params:?}");

        let result = self
            .directory
            .delete_venue_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete venue", &e))?;

        text(result)
    }

    pub async fn list_artists(&self) -> McpResult {
        debug!("list_artists");

        let artists = self
            .directory
            .list_artist_entries()
            .await
            .map_err(|e| to_mcp_error("Failed to list artists", &e))?;

        text(format!("# Artists\n\n{artists}"))
    }

    pub async fn search_artists(&self, Parameters(params): Parameters<Search>) -> McpResult {
        debug!("search_artists: {params:?}");

        let results = self
            .directory
            .search_artists_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to search artists", &e))?;

        text(results)
    }

    pub async fn show_artist(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_artist: {params:?}");

        let detail = self
            .directory
            .show_artist_detail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get artist", &e))?;

        text(detail)
    }

    pub async fn create_artist(&self, Parameters(params): Parameters<CreateArtist>) -> McpResult {
        debug!("create_artist: {params:?}");

        let inner = params.as_ref();
        let result = self
            .directory
            .create_artist_result(inner)
            .await
            .map_err(|e| {
                to_mcp_error(&OperationStatus::artist_not_listed(&inner.name).message, &e)
            })?;

        text(result)
    }

    pub async fn artist_form(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("artist_form: {params:?}");

        let form = self
            .directory
            .artist_form(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get artist", &e))?;

        text(form)
    }

    pub async fn update_artist(&self, Parameters(params): Parameters<UpdateArtist>) -> McpResult {
        debug!("update_artist: {params:?}");

        let result = self
            .directory
            .update_artist_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update artist", &e))?;

        text(result)
    }

    pub async fn list_shows(&self) -> McpResult {
        debug!("list_shows");

        let shows = self
            .directory
            .list_show_listings()
            .await
            .map_err(|e| to_mcp_error("Failed to list shows", &e))?;

        text(format!("# Shows\n\n{shows}"))
    }

    pub async fn create_show(&self, Parameters(params): Parameters<CreateShow>) -> McpResult {
        debug!("create_show: {params:?}");

        let result = self
            .directory
            .create_show_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error(&OperationStatus::show_not_listed().message, &e))?;

        text(result)
    }
}
