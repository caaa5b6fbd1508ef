//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "places")]
#[command(about = "Save, browse and edit map pins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pin store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Map type (standard, satellite, hybrid)
        #[arg(short, long, default_value = "standard")]
        map_type: String,
    },

    /// Drop a pin
    #[command(allow_negative_numbers = true)]
    Add {
        title: String,

        subtitle: String,

        /// Latitude in degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
    },

    /// List saved pins
    List,

    /// Show the map region around a pin
    Show {
        /// Row number from 'places list'
        row: usize,
    },

    /// Delete a pin
    Delete {
        /// Row number from 'places list'
        row: usize,
    },

    /// Change a pin's title and/or subtitle
    Edit {
        /// Row number from 'places list'
        row: usize,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        subtitle: Option<String>,
    },

    /// Step through pins with the previous/next buttons
    Tour {
        /// Button to press (next, prev)
        #[arg(short, long, default_value = "next")]
        direction: String,

        /// Number of presses (default: one per pin)
        #[arg(short = 'n', long)]
        steps: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
