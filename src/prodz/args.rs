use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pz")]
#[command(about = "File-backed product catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the user-wide catalog
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the catalog
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        thumbnail: String,

        #[arg(long)]
        code: String,

        #[arg(long)]
        stock: u32,
    },

    /// List products
    #[command(alias = "ls")]
    List {
        /// Only show the first N products
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<i64>,
    },

    /// Show a product by id
    #[command(alias = "g")]
    Get { id: u64 },

    /// Update fields of a product
    #[command(alias = "u")]
    Update {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        thumbnail: Option<String>,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        stock: Option<u32>,
    },

    /// Delete a product by id
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Export the catalog as a tar.gz archive
    Export,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    Init,
}
