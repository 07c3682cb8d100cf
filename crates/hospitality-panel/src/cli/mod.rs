//! Command-line interface.
//!
//! `hospitality [--config PATH] [--api-url URL] [--output MODE] [-v...] <command>`

mod commands;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{parse_api_url, parse_base_path, Config};
use crate::error::Result;
use crate::hostel_form::{HostelDraft, HostelPatch, RoomType};
use crate::render::OutputMode;
use crate::screens::{parse_filter, Screen, ViewArgs};

pub use commands::{run, Context};

/// Seconds between refreshes for a bare `--watch`, matching the web panel.
pub const DEFAULT_WATCH_SECS: &str = "5";

/// Anokha hospitality panel
#[derive(Debug, Parser)]
#[command(name = "hospitality", version, about = "Anokha hospitality panel")]
pub struct Cli {
    /// Config file (default: ~/.hospitality/config.yml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads the config file and environment, then applies global flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(url) = &self.api_url {
            config.api_url = parse_api_url(url)?;
        }
        if let Command::Serve(args) = &self.command {
            if let Some(dist) = &args.dist {
                config.dist_dir = dist.clone();
            }
            if let Some(base) = &args.base {
                config.base_path = parse_base_path(base)?;
            }
            if let Some(port) = args.port {
                config.port = port;
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login(LoginArgs),

    /// End the session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Accommodation status of every registrant
    Registrants(ListArgs),

    /// Campus gate crossings
    GateLogs(LogArgs),

    /// Hostel check-in scans
    HostelLogs(LogArgs),

    /// Beds allotted but not yet claimed
    #[command(subcommand)]
    Allotments(AllotmentsCommand),

    /// Hostel inventory
    #[command(subcommand)]
    Hostels(HostelsCommand),

    /// Campus presence and bed occupancy
    Analytics,

    /// Interactive session on one screen
    Browse(BrowseArgs),

    /// Serve the built web panel
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Prompted for when omitted
    #[arg(long, env = "HOSPITALITY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl std::fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginArgs")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive search across the screen's search fields
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Filter as DIMENSION=VALUE (repeatable)
    #[arg(short, long = "filter", value_name = "DIM=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Page to show (clamped to the last page)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Records per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,

    /// Include filter options in the output
    #[arg(long)]
    pub facets: bool,
}

impl ListArgs {
    pub fn view_args(&self) -> ViewArgs {
        ViewArgs {
            search: self.search.clone(),
            filters: self.filters.clone(),
            page: self.page,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Refresh every SECS seconds until Ctrl-C
    #[arg(long, value_name = "SECS", num_args = 0..=1, default_missing_value = DEFAULT_WATCH_SECS)]
    pub watch: Option<u64>,
}

impl LogArgs {
    pub fn watch_interval(&self) -> Option<Duration> {
        self.watch.map(|secs| Duration::from_secs(secs.max(1)))
    }
}

#[derive(Debug, Subcommand)]
pub enum AllotmentsCommand {
    /// List unclaimed beds
    List(ListArgs),

    /// Release an unclaimed bed
    Remove {
        id: String,
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum HostelsCommand {
    /// List hostels
    List(ListArgs),

    /// Add a hostel
    Create(HostelCreateArgs),

    /// Edit a hostel
    Update(HostelUpdateArgs),

    /// Delete a hostel
    Delete {
        id: String,
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostelGender {
    Male,
    Female,
}

impl HostelGender {
    fn is_male(self) -> bool {
        self == HostelGender::Male
    }
}

#[derive(Debug, Clone, Args)]
pub struct HostelCreateArgs {
    /// Base name; stored as "<NAME> BHAVANAM - <ROOM TYPE>"
    #[arg(long)]
    pub name: String,

    /// SINGLE, DORM or "4 SHARING"
    #[arg(long, default_value_t = RoomType::Single)]
    pub room_type: RoomType,

    #[arg(long, value_enum)]
    pub gender: HostelGender,

    /// Available rooms
    #[arg(long, allow_negative_numbers = true)]
    pub rooms: i64,

    /// Rooms already filled
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub filled: i64,

    #[arg(long)]
    pub warden_email: String,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<String>,

    #[arg(long)]
    pub map_url: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub day_scholar_price: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub outsider_price: f64,

    /// Validate and show the hostel without sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl HostelCreateArgs {
    pub fn draft(&self) -> HostelDraft {
        HostelDraft {
            base_name: self.name.clone(),
            room_type: self.room_type,
            is_male: self.gender.is_male(),
            room_count: self.rooms,
            room_filled: self.filled,
            warden_email: self.warden_email.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            map_url: self.map_url.clone(),
            day_scholar_price: self.day_scholar_price,
            outsider_price: self.outsider_price,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct HostelUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub room_type: Option<RoomType>,

    #[arg(long, value_enum)]
    pub gender: Option<HostelGender>,

    #[arg(long, allow_negative_numbers = true)]
    pub rooms: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub filled: Option<i64>,

    #[arg(long)]
    pub warden_email: Option<String>,

    /// Empty string clears the value
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<String>,

    #[arg(long)]
    pub map_url: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub day_scholar_price: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub outsider_price: Option<f64>,

    #[arg(long)]
    pub dry_run: bool,
}

impl HostelUpdateArgs {
    pub fn patch(&self) -> HostelPatch {
        HostelPatch {
            base_name: self.name.clone(),
            room_type: self.room_type,
            is_male: self.gender.map(HostelGender::is_male),
            room_count: self.rooms,
            room_filled: self.filled,
            warden_email: self.warden_email.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            map_url: self.map_url.clone(),
            day_scholar_price: self.day_scholar_price,
            outsider_price: self.outsider_price,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    #[arg(value_enum)]
    pub screen: Screen,

    #[arg(long, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Build output directory
    #[arg(long, value_name = "DIR")]
    pub dist: Option<PathBuf>,

    /// Mount path
    #[arg(long, value_name = "PATH")]
    pub base: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}
