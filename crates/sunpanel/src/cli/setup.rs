use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sunpanelapp::model::Collection;

#[derive(Parser, Debug)]
#[command(name = "sunpanel", bin_name = "sunpanel", version)]
#[command(
    about = "Manage the ordered content collections of a solar-services site",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root or `.sunpanel` directory to use instead of searching from cwd
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory
    #[command(display_order = 1)]
    Init,

    /// Show every collection with its record count and order health
    #[command(alias = "status", display_order = 2)]
    Collections {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List a collection in display order
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Collection name (defaults to `default_collection`)
        collection: Option<Collection>,

        /// Only show records with a string field containing this term
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one or more records in full
    #[command(alias = "v", display_order = 4)]
    View {
        collection: Collection,

        /// Positions, ranges, ids or a search term (e.g. 1 3-4)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a record at the end of a collection
    #[command(alias = "n", display_order = 5)]
    Create {
        collection: Collection,

        /// Field assignment: key=value, key:=<json>
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },

    /// Change a record's fields
    #[command(alias = "e", display_order = 6)]
    Edit {
        collection: Collection,

        /// Position, id or search term of the record
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Field assignment: key=value, key:=<json>, key= to remove
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },

    /// Move a record one position up
    #[command(display_order = 7)]
    Up {
        collection: Collection,

        /// Position, id or search term of the record
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Move a record one position down
    #[command(display_order = 8)]
    Down {
        collection: Collection,

        /// Position, id or search term of the record
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete records and close the gap they leave
    #[command(alias = "rm", display_order = 9)]
    Delete {
        collection: Collection,

        /// Positions, ranges, ids or a search term (e.g. 1 3-4)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Check order values; renumber with --fix
    #[command(display_order = 10)]
    Doctor {
        collection: Collection,

        /// Rewrite order values to 0..N-1 in current display order
        #[arg(long)]
        fix: bool,
    },

    /// Show the resolved configuration and paths
    #[command(display_order = 11)]
    Config,
}
