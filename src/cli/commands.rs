use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(version, about = "A local-first portfolio catalog manager")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an atelier workspace in the current directory
    Init,

    /// Add a work to the catalog
    Add {
        /// Work title
        title: String,

        /// Work category
        #[arg(long, short = 'c')]
        category: String,

        /// Work description
        #[arg(long, short = 'd')]
        description: String,

        /// Primary image; falls back to the default image when omitted
        #[arg(long, default_value = "")]
        image: String,

        /// Gallery image (can be specified multiple times)
        #[arg(long = "gallery", short = 'g')]
        images: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog works
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a single work by id
    Get {
        /// Work id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the mutable fields of a work
    Update {
        /// Work id
        id: i64,

        /// New title
        #[arg(long)]
        title: String,

        /// New category
        #[arg(long, short = 'c')]
        category: String,

        /// New description
        #[arg(long, short = 'd')]
        description: String,

        /// New primary image; the existing one is kept when omitted
        #[arg(long, default_value = "")]
        image: String,

        /// New gallery image (can be specified multiple times); the
        /// existing gallery is kept when none are given
        #[arg(long = "gallery", short = 'g')]
        images: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a work by id
    Delete {
        /// Work id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show catalog statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the built-in showcase of priced works
    Works(WorksCommand),

    /// Build an order from the showcase and print the share link
    Order {
        /// Order lines in format "ID" or "ID:QTY" (can be repeated)
        #[arg(value_name = "ID[:QTY]", required = true)]
        items: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct WorksCommand {
    #[command(subcommand)]
    pub action: WorksAction,
}

#[derive(Subcommand, Debug)]
pub enum WorksAction {
    /// List priced works, optionally narrowed to one category
    List {
        /// Category filter ("Все" matches everything)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one work with its image gallery
    Show {
        /// Work id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the order message and share link for one work
    Order {
        /// Work id
        id: i64,
    },
}
