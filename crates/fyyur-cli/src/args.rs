use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ArtistCommands, ShowCommands, VenueCommands};

/// Main command-line interface for the Fyyur booking directory
///
/// Fyyur lists venues and artists and books shows between them. The CLI
/// covers every page of the directory (listings, search, detail pages, the
/// create and edit forms) and can also run as an MCP (Model Context Protocol)
/// server for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "fyyur")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fyyur/fyyur.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the view model as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Fyyur CLI
///
/// - `venue`: venue listing, search, detail, create, edit and delete
/// - `artist`: artist listing, search, detail, create and edit
/// - `show`: show listing and booking
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage venues
    #[command(alias = "v")]
    Venue {
        #[command(subcommand)]
        command: VenueCommands,
    },
    /// Manage artists
    #[command(alias = "a")]
    Artist {
        #[command(subcommand)]
        command: ArtistCommands,
    },
    /// List and book shows
    #[command(alias = "s")]
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Start the MCP server
    Serve,
}
