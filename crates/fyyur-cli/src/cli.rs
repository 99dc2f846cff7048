//! Command-line interface definitions and command handlers
//!
//! The argument structures here carry the clap derives and convert into the
//! interface-agnostic parameter types of `fyyur_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Directory
//! ```
//!
//! [`Cli`] then runs the directory operation and prints the returned view
//! model, either as markdown through the [`TerminalRenderer`] or as JSON when
//! `--json` is given.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use fyyur_core::{params::*, Directory, OperationStatus};
use log::debug;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// Each wrapper defines the clap-facing shape of one command and converts into
// the matching core parameter type with a `From` impl.

/// Search venues or artists by name
#[derive(Args)]
pub struct SearchArgs {
    #[arg(
        default_value = "",
        help = "Case-insensitive part of the name; omit to match everything"
    )]
    pub search_term: String,
}

impl From<SearchArgs> for Search {
    fn from(val: SearchArgs) -> Self {
        Search {
            search_term: val.search_term,
        }
    }
}

/// Select a record by ID
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the record")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// List a new venue
#[derive(Args)]
pub struct CreateVenueArgs {
    /// Name of the venue
    pub name: String,
    #[arg(long, help = "City the venue is in")]
    pub city: String,
    #[arg(long, help = "State the venue is in")]
    pub state: String,
    #[arg(long, help = "Street address")]
    pub address: String,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        help = "Genres as a comma-separated list or repeated flags"
    )]
    pub genres: Vec<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub image_link: Option<String>,
    #[arg(long)]
    pub facebook_link: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long, help = "Whether the venue is looking for talent (default: true)")]
    pub seeking_talent: Option<bool>,
    #[arg(long, help = "What kind of talent the venue is looking for")]
    pub seeking_description: Option<String>,
}

impl From<CreateVenueArgs> for CreateVenue {
    fn from(val: CreateVenueArgs) -> Self {
        CreateVenue {
            name: val.name,
            city: val.city,
            state: val.state,
            address: val.address,
            genres: val.genres,
            phone: val.phone,
            image_link: val.image_link,
            facebook_link: val.facebook_link,
            website: val.website,
            seeking_talent: val.seeking_talent,
            seeking_description: val.seeking_description,
        }
    }
}

/// Edit a venue
///
/// Every editable field is overwritten: a flag left out clears that field.
#[derive(Args)]
pub struct UpdateVenueArgs {
    #[arg(help = "Unique identifier of the venue to edit")]
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(short, long, value_delimiter = ',', help = "Genres as a comma-separated list")]
    pub genres: Option<Vec<String>>,
    #[arg(long)]
    pub facebook_link: Option<String>,
}

impl From<UpdateVenueArgs> for UpdateVenue {
    fn from(val: UpdateVenueArgs) -> Self {
        UpdateVenue {
            id: val.id,
            name: val.name,
            city: val.city,
            state: val.state,
            address: val.address,
            phone: val.phone,
            genres: val.genres,
            facebook_link: val.facebook_link,
        }
    }
}

/// List a new artist
#[derive(Args)]
pub struct CreateArtistArgs {
    /// Name of the artist
    pub name: String,
    #[arg(long, help = "City the artist is based in")]
    pub city: String,
    #[arg(long, help = "State the artist is based in")]
    pub state: String,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        help = "Genres as a comma-separated list or repeated flags"
    )]
    pub genres: Vec<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub image_link: Option<String>,
    #[arg(long)]
    pub facebook_link: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long, help = "Whether the artist is looking for venues")]
    pub seeking_venue: Option<bool>,
    #[arg(long, help = "What kind of venue the artist is looking for")]
    pub seeking_description: Option<String>,
}

impl From<CreateArtistArgs> for CreateArtist {
    fn from(val: CreateArtistArgs) -> Self {
        CreateArtist {
            name: val.name,
            city: val.city,
            state: val.state,
            genres: val.genres,
            phone: val.phone,
            image_link: val.image_link,
            facebook_link: val.facebook_link,
            website: val.website,
            seeking_venue: val.seeking_venue,
            seeking_description: val.seeking_description,
        }
    }
}

/// Edit an artist
///
/// Every editable field is overwritten: a flag left out clears that field.
#[derive(Args)]
pub struct UpdateArtistArgs {
    #[arg(help = "Unique identifier of the artist to edit")]
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(short, long, value_delimiter = ',', help = "Genres as a comma-separated list")]
    pub genres: Option<Vec<String>>,
    #[arg(long)]
    pub facebook_link: Option<String>,
}

impl From<UpdateArtistArgs> for UpdateArtist {
    fn from(val: UpdateArtistArgs) -> Self {
        UpdateArtist {
            id: val.id,
            name: val.name,
            city: val.city,
            state: val.state,
            phone: val.phone,
            genres: val.genres,
            facebook_link: val.facebook_link,
        }
    }
}

/// Book a show
#[derive(Args)]
pub struct CreateShowArgs {
    #[arg(long, help = "ID of the venue hosting the show")]
    pub venue_id: u64,
    #[arg(long, help = "ID of the performing artist")]
    pub artist_id: u64,
    #[arg(
        long,
        help = "Start time, e.g. 2019-05-21T21:30:00Z or 2019-05-21 21:30 (local time)"
    )]
    pub start_time: String,
}

impl From<CreateShowArgs> for CreateShow {
    fn from(val: CreateShowArgs) -> Self {
        CreateShow {
            venue_id: val.venue_id,
            artist_id: val.artist_id,
            start_time: val.start_time,
        }
    }
}

#[derive(Subcommand)]
pub enum VenueCommands {
    /// List venues grouped by city and state
    #[command(aliases = ["l", "ls"])]
    List,
    /// Search venues by name
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Show a venue with its past and upcoming shows
    #[command(alias = "s")]
    Show(IdArgs),
    /// List a new venue
    #[command(alias = "c")]
    Create(CreateVenueArgs),
    /// Show the current values of the venue edit form
    Form(IdArgs),
    /// Edit a venue
    #[command(alias = "u")]
    Update(UpdateVenueArgs),
    /// Delete a venue and its shows
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

#[derive(Subcommand)]
pub enum ArtistCommands {
    /// List artists
    #[command(aliases = ["l", "ls"])]
    List,
    /// Search artists by name
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Show an artist with their past and upcoming shows
    #[command(alias = "s")]
    Show(IdArgs),
    /// List a new artist
    #[command(alias = "c")]
    Create(CreateArtistArgs),
    /// Show the current values of the artist edit form
    Form(IdArgs),
    /// Edit an artist
    #[command(alias = "u")]
    Update(UpdateArtistArgs),
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// List all shows by start time
    #[command(aliases = ["l", "ls"])]
    List,
    /// Book a show
    #[command(alias = "c")]
    Create(CreateShowArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a [`Directory`] and prints the results.
pub struct Cli {
    directory: Directory,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(directory: Directory, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            directory,
            renderer,
            json,
        }
    }

    /// Print a view model as markdown, or as JSON in `--json` mode.
    fn emit<T: Display + Serialize>(&self, view: &T) -> Result<()> {
        if self.json {
            self.renderer.render_json(view)
        } else {
            self.renderer.render(&view.to_string())
        }
    }

    /// Print a listing under a title, or the bare view model in `--json` mode.
    fn emit_titled<T: Display + Serialize>(&self, title: &str, view: &T) -> Result<()> {
        if self.json {
            self.renderer.render_json(view)
        } else {
            self.renderer.render(&format!("# {title}\n\n{view}"))
        }
    }

    pub async fn handle_venue_command(&self, command: VenueCommands) -> Result<()> {
        match command {
            VenueCommands::List => self.list_venues().await,
            VenueCommands::Search(args) => {
                let results = self
                    .directory
                    .search_venues_result(&args.into())
                    .await
                    .context("Failed to search venues")?;
                self.emit(&results)
            }
            VenueCommands::Show(args) => {
                let detail = self
                    .directory
                    .show_venue_detail(&args.into())
                    .await
                    .context("Failed to load venue")?;
                self.emit(&detail)
            }
            VenueCommands::Create(args) => {
                let params: CreateVenue = args.into();
                debug!("venue create: {params:?}");
                match self.directory.create_venue_result(&params).await {
                    Ok(result) => self.emit(&result),
                    Err(e) => {
                        self.emit(&OperationStatus::venue_not_listed(&params.name))?;
                        Err(e).context("Failed to create venue")
                    }
                }
            }
            VenueCommands::Form(args) => {
                let form = self
                    .directory
                    .venue_form(&args.into())
                    .await
                    .context("Failed to load venue form")?;
                self.emit(&form)
            }
            VenueCommands::Update(args) => {
                let result = self
                    .directory
                    .update_venue_result(&args.into())
                    .await
                    .context("Failed to update venue")?;
                self.emit(&result)
            }
            VenueCommands::Delete(args) => {
                let result = self
                    .directory
                    .delete_venue_result(&args.into())
                    .await
                    .context("Failed to delete venue")?;
                self.emit(&result)
            }
        }
    }

    pub async fn handle_artist_command(&self, command: ArtistCommands) -> Result<()> {
        match command {
            ArtistCommands::List => {
                let artists = self
                    .directory
                    .list_artist_entries()
                    .await
                    .context("Failed to list artists")?;
                self.emit_titled("Artists", &artists)
            }
            ArtistCommands::Search(args) => {
                let results = self
                    .directory
                    .search_artists_result(&args.into())
                    .await
                    .context("Failed to search artists")?;
                self.emit(&results)
            }
            ArtistCommands::Show(args) => {
                let detail = self
                    .directory
                    .show_artist_detail(&args.into())
                    .await
                    .context("Failed to load artist")?;
                self.emit(&detail)
            }
            ArtistCommands::Create(args) => {
                let params: CreateArtist = args.into();
                debug!("artist create: {params:?}");
                match self.directory.create_artist_result(&params).await {
                    Ok(result) => self.emit(&result),
                    Err(e) => {
                        self.emit(&OperationStatus::artist_not_listed(&params.name))?;
                        Err(e).context("Failed to create artist")
                    }
                }
            }
            ArtistCommands::Form(args) => {
                let form = self
                    .directory
                    .artist_form(&args.into())
                    .await
                    .context("Failed to load artist form")?;
                self.emit(&form)
            }
            ArtistCommands::Update(args) => {
                let result = self
                    .directory
                    .update_artist_result(&args.into())
                    .await
                    .context("Failed to update artist")?;
                self.emit(&result)
            }
        }
    }

    pub async fn handle_show_command(&self, command: ShowCommands) -> Result<()> {
        match command {
            ShowCommands::List => {
                let shows = self
                    .directory
                    .list_show_listings()
                    .await
                    .context("Failed to list shows")?;
                self.emit_titled("Shows", &shows)
            }
            ShowCommands::Create(args) => {
                let params: CreateShow = args.into();
                debug!("show create: {params:?}");
                match self.directory.create_show_result(&params).await {
                    Ok(result) => self.emit(&result),
                    Err(e) => {
                        self.emit(&OperationStatus::show_not_listed())?;
                        Err(e).context("Failed to create show")
                    }
                }
            }
        }
    }

    /// Venue listing grouped by area; also the default command.
    pub async fn list_venues(&self) -> Result<()> {
        let areas = self
            .directory
            .list_venue_areas()
            .await
            .context("Failed to list venues")?;
        self.emit_titled("Venues", &areas)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args, Commands};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fyyur").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_venue_create_genres_split_on_commas_and_repeats() {
        let args = parse(&[
            "venue",
            "create",
            "The Musical Hop",
            "--city",
            "San Francisco",
            "--state",
            "CA",
            "--address",
            "1015 Folsom Street",
            "--genres",
            "Jazz,Reggae",
            "-g",
            "Swing",
        ]);

        let Some(Commands::Venue {
            command: VenueCommands::Create(create),
        }) = args.command
        else {
            panic!("Expected venue create command");
        };

        let params: CreateVenue = create.into();
        assert_eq!(params.name, "The Musical Hop");
        assert_eq!(params.genres, vec!["Jazz", "Reggae", "Swing"]);
        assert_eq!(params.seeking_talent, None);
    }

    #[test]
    fn test_venue_create_requires_genres() {
        let result = Args::try_parse_from([
            "fyyur",
            "venue",
            "create",
            "Hop",
            "--city",
            "SF",
            "--state",
            "CA",
            "--address",
            "1 Main",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_leaves_omitted_fields_unset() {
        let args = parse(&["artist", "update", "4", "--city", "Oakland"]);

        let Some(Commands::Artist {
            command: ArtistCommands::Update(update),
        }) = args.command
        else {
            panic!("Expected artist update command");
        };

        let params: UpdateArtist = update.into();
        assert_eq!(params.id, 4);
        assert_eq!(params.city.as_deref(), Some("Oakland"));
        assert!(params.name.is_none());
        assert!(params.genres.is_none());
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        let args = parse(&["a", "f"]);

        let Some(Commands::Artist {
            command: ArtistCommands::Search(search),
        }) = args.command
        else {
            panic!("Expected artist search command");
        };

        let params: Search = search.into();
        assert_eq!(params.search_term, "");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["show", "list", "--json", "--no-color"]);
        assert!(args.json);
        assert!(args.no_color);
        assert!(matches!(
            args.command,
            Some(Commands::Show {
                command: ShowCommands::List
            })
        ));
    }
}
