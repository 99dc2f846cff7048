//! Fyyur CLI Application
//!
//! Command-line and MCP front end for the Fyyur booking directory.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fyyur_core::DirectoryBuilder;
use log::info;
use mcp::{run_stdio_server, FyyurMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let directory = DirectoryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize directory")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Fyyur started with database {}", directory.database_path().display());

    match command {
        Some(Venue { command }) => {
            Cli::new(directory, renderer, json)
                .handle_venue_command(command)
                .await
        }
        Some(Artist { command }) => {
            Cli::new(directory, renderer, json)
                .handle_artist_command(command)
                .await
        }
        Some(Show { command }) => {
            Cli::new(directory, renderer, json)
                .handle_show_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Fyyur MCP server");
            run_stdio_server(FyyurMcpServer::new(directory))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(directory, renderer, json).list_venues().await,
    }
}
