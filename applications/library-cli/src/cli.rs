/// Command-line arguments
use clap::{Parser, Subcommand};
use soul_web_client::LibraryKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "soul-library")]
#[command(about = "Check and edit saved tracks and albums", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    /// Access token (overrides the config file)
    #[arg(long, env = "SOUL_WEB_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Saved tracks
    Tracks {
        #[command(subcommand)]
        action: Action,
    },
    /// Saved albums
    Albums {
        #[command(subcommand)]
        action: Action,
    },
}

impl Commands {
    pub fn kind(&self) -> LibraryKind {
        match self {
            Commands::Tracks { .. } => LibraryKind::Tracks,
            Commands::Albums { .. } => LibraryKind::Albums,
        }
    }

    pub fn action(&self) -> &Action {
        match self {
            Commands::Tracks { action } | Commands::Albums { action } => action,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Check which IDs are saved
    Contains {
        /// Catalog IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Save IDs to the library
    Add {
        /// Catalog IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove IDs from the library
    Remove {
        /// Catalog IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl Action {
    pub fn ids(&self) -> &[String] {
        match self {
            Action::Contains { ids } | Action::Add { ids } | Action::Remove { ids } => ids,
        }
    }
}
