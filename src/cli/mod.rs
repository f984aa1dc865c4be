pub mod commands;
pub mod output;

use crate::bitbucket::BitbucketClient;
use crate::config::load_settings;
use crate::errors::Result;
use crate::resource::RepositoryResource;
use crate::state::StateFile;
use clap::{Parser, Subcommand};
use commands::repository;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bbrepo")]
#[command(about = "Manage Bitbucket Server repositories declaratively")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file (JSON); BITBUCKET_* environment variables override it
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a repository from a record file
    Create {
        /// Repository record (JSON)
        #[arg(long)]
        config: PathBuf,

        /// State file to record the repository in
        #[arg(long)]
        state: PathBuf,
    },

    /// Refresh a recorded repository from the server
    Read {
        /// State file of the repository
        #[arg(long)]
        state: PathBuf,
    },

    /// Apply a record file to a recorded repository
    Update {
        /// Repository record (JSON)
        #[arg(long)]
        config: PathBuf,

        /// State file of the repository
        #[arg(long)]
        state: PathBuf,
    },

    /// Delete a recorded repository
    Delete {
        /// State file of the repository
        #[arg(long)]
        state: PathBuf,
    },

    /// Start tracking an existing repository
    Import {
        /// Repository identity, `project_key/slug`
        id: String,

        /// State file to record the repository in
        #[arg(long)]
        state: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        let settings = load_settings(self.settings.as_deref())?;
        let resource = RepositoryResource::new(BitbucketClient::new(&settings)?);

        match self.command {
            Commands::Create { config, state } => {
                repository::create(&resource, &config, &StateFile::new(state)).await
            }
            Commands::Read { state } => repository::read(&resource, &StateFile::new(state)).await,
            Commands::Update { config, state } => {
                repository::update(&resource, &config, &StateFile::new(state)).await
            }
            Commands::Delete { state } => {
                repository::delete(&resource, &StateFile::new(state)).await
            }
            Commands::Import { id, state } => {
                repository::import(&resource, &id, &StateFile::new(state)).await
            }
        }
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time();

        if self.no_color {
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
