//! MCP server implementation for Fyyur
//!
//! Exposes the booking directory as Model Context Protocol tools, one per
//! page of the directory, so AI assistants can browse venues and artists and
//! book shows.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use fyyur_core::Directory;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateArtist, CreateShow, CreateVenue, Id, McpResult, Search, UpdateArtist, UpdateVenue,
};

/// MCP server for Fyyur
#[derive(Clone)]
pub struct FyyurMcpServer {
    directory: Arc<Directory>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FyyurMcpServer {
    /// Create a new Fyyur MCP server
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(directory),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.directory.clone())
    }

    #[tool(
        name = "list_venues",
        description = "List all venues grouped by city and state. Each venue shows its ID and how many upcoming shows it has."
    )]
    async fn list_venues(&self) -> McpResult {
        self.handlers().list_venues().await
    }

    #[tool(
        name = "search_venues",
        description = "Search venues by name. The search_term is matched case-insensitively anywhere in the name; an empty term returns every venue. Returns the match count and each venue with its upcoming show count."
    )]
    async fn search_venues(&self, params: Parameters<Search>) -> McpResult {
        self.handlers().search_venues(params).await
    }

    #[tool(
        name = "show_venue",
        description = "Show a venue's full profile with its past and upcoming shows, including the performing artist of each show. Use the venue ID from list_venues or search_venues."
    )]
    async fn show_venue(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_venue(params).await
    }

    #[tool(
        name = "create_venue",
        description = "List a new venue. Requires name, city, state, address and at least one genre. Optional: phone, image_link, facebook_link, website, seeking_talent (defaults to true) and seeking_description."
    )]
    async fn create_venue(&self, params: Parameters<CreateVenue>) -> McpResult {
        self.handlers().create_venue(params).await
    }

    #[tool(
        name = "delete_venue",
        description = "Permanently delete a venue and every show booked at it. This cannot be undone."
    )]
    async fn delete_venue(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_venue(params).await
    }

    #[tool(
        name = "list_artists",
        description = "List all artists with their IDs."
    )]
    async fn list_artists(&self) -> McpResult {
        self.handlers().list_artists().await
    }

    #[tool(
        name = "search_artists",
        description = "Search artists by name. The search_term is matched case-insensitively anywhere in the name; an empty term returns every artist. Returns the match count and each artist with their upcoming show count."
    )]
    async fn search_artists(&self, params: Parameters<Search>) -> McpResult {
        self.handlers().search_artists(params).await
    }

    #[tool(
        name = "show_artist",
        description = "Show an artist's full profile with their past and upcoming shows, including the venue of each show. Use the artist ID from list_artists or search_artists."
    )]
    async fn show_artist(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_artist(params).await
    }

    #[tool(
        name = "artist_form",
        description = "Show the current values of an artist's editable fields. Read this before update_artist, since update_artist clears any field it is not given."
    )]
    async fn artist_form(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().artist_form(params).await
    }

    #[tool(
        name = "update_artist",
        description = "Edit an artist's name, city, state, phone, genres and facebook_link.

        IMPORTANT: every one of these fields is overwritten. A field left out of the request becomes empty, so pass the current value (see artist_form) for anything that should stay the same."
    )]
    async fn update_artist(&self, params: Parameters<UpdateArtist>) -> McpResult {
        self.handlers().update_artist(params).await
    }

    #[tool(
        name = "venue_form",
        description = "Show the current values of a venue's editable fields. Read this before update_venue, since update_venue clears any field it is not given."
    )]
    async fn venue_form(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().venue_form(params).await
    }

    #[tool(
        name = "update_venue",
        description = "Edit a venue's name, city, state, address, phone, genres and facebook_link.

        IMPORTANT: every one of these fields is overwritten. A field left out of the request becomes empty, so pass the current value (see venue_form) for anything that should stay the same."
    )]
    async fn update_venue(&self, params: Parameters<UpdateVenue>) -> McpResult {
        self.handlers().update_venue(params).await
    }

    #[tool(
        name = "create_artist",
        description = "List a new artist. Requires name, city, state and at least one genre. Optional: phone, image_link, facebook_link, website, seeking_venue and seeking_description."
    )]
    async fn create_artist(&self, params: Parameters<CreateArtist>) -> McpResult {
        self.handlers().create_artist(params).await
    }

    #[tool(
        name = "list_shows",
        description = "List every show ordered by start time, with venue and artist names and IDs."
    )]
    async fn list_shows(&self) -> McpResult {
        self.handlers().list_shows().await
    }

    #[tool(
        name = "create_show",
        description = "Book an artist at a venue. Requires venue_id, artist_id and start_time. start_time is RFC 3339 (2019-05-21T21:30:00Z) or a local date-time without offset (2019-05-21T21:30:00)."
    )]
    async fn create_show(&self, params: Parameters<CreateShow>) -> McpResult {
        self.handlers().create_show(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FyyurMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fyyur".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Fyyur is a booking directory for live music. Venues and artists are listed with their profiles, and shows book an artist at a venue at a start time.

## Core Concepts
- **Venues**: name, city, state, address, genres and contact links; a venue may be seeking talent
- **Artists**: name, city, state, genres and contact links; an artist may be seeking venues
- **Shows**: an artist playing a venue at a start time. Shows starting now or later are upcoming, earlier ones are past

## Workflow Examples

### Finding a Place to Play
1. Use `search_venues` or `list_venues` to find venues and their upcoming show counts
2. Use `show_venue` to see a venue's profile and its past and upcoming shows

### Booking a Show
1. Find the venue ID and artist ID with the list or search tools
2. Use `create_show` with both IDs and a start time

### Editing a Profile
1. Read the current values with `venue_form` or `artist_form`
2. Send every field to `update_venue` or `update_artist`; omitted fields are cleared

## Tool Categories
- **Venues**: list_venues, search_venues, show_venue, create_venue, venue_form, update_venue, delete_venue
- **Artists**: list_artists, search_artists, show_artist, create_artist, artist_form, update_artist
- **Shows**: list_shows, create_show"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FyyurMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Fyyur MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
