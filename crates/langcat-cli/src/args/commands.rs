use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive catalog viewer
    Browse,

    /// Print catalog entries, optionally filtered by a search query
    List {
        /// Case-insensitive text matched against name and description
        query: Option<String>,
    },

    /// Show the details of one language
    Show {
        /// Language name (case-insensitive exact match)
        name: String,
    },

    /// Print the popularity chart
    Chart {
        /// Chart width in columns (default: terminal width)
        #[arg(long)]
        width: Option<usize>,
    },
}
