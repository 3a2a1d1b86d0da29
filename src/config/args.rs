use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "move-manifest")]
#[command(about = "Track numbered moving boxes, exchange them as CSV and print packing labels")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the directory holding stored boxes
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every box with its room and contents
    List,

    /// Add a box; the number defaults to the next free one
    Add {
        #[arg(long)]
        number: Option<String>,

        #[arg(long, default_value = "")]
        room: String,

        /// Contents, one item per value
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Remove a box by id
    Remove { id: String },

    /// Change a box's number
    Renumber { id: String, number: String },

    /// Append an item to a box
    AddItem { id: String, item: String },

    /// Remove the item at a zero-based position
    RemoveItem { id: String, index: usize },

    /// Write all boxes as CSV ("-" for stdout)
    Export {
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace all boxes with the contents of a CSV file
    Import { file: String },

    /// Render packing labels as a printable HTML document
    Labels {
        /// Label width in centimeters; remembered for next time
        #[arg(long)]
        width: Option<String>,

        /// Split long contents onto continuation labels above this height (cm)
        #[arg(long)]
        max_height: Option<String>,

        /// Only label these box ids (default: every box)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Leave these box ids out of the batch
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        #[arg(short, long, default_value = "labels.html")]
        output: String,
    },
}
