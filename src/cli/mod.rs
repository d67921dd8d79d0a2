//! Command-line interface.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Movie catalog and per-user cart service
#[derive(Parser)]
#[command(name = "movie-rental")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Load movies from a JSON file into the catalog
    Seed {
        /// JSON array of movies
        file: PathBuf,
    },

    /// Print the catalog, optionally filtered
    #[command(alias = "ls")]
    Movies {
        /// Case-insensitive substring of the genre
        #[arg(long, default_value = "")]
        genre: String,
        /// Case-insensitive substring of the actor list
        #[arg(long, default_value = "")]
        actor: String,
        /// Exact release year
        #[arg(long, default_value = "")]
        year: String,
    },
}

pub use commands::*;
