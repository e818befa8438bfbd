use clap::{Parser, Subcommand};

/// Restaurant ordering client for the terminal
#[derive(Debug, Parser)]
#[command(name = "jamnaw", version, about)]
pub struct Cli {
    /// Backend root URL, overrides API_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds, overrides API_TIMEOUT_SECS
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// One line typed into the running session.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct SessionInput {
    #[command(subcommand)]
    pub command: Command,
}

impl SessionInput {
    pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|input| input.command)
    }
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// List restaurants, nearest first
    Home,
    /// Select a restaurant marker on the map
    Select { id: i64 },
    /// Clear the marker selection
    Unselect,
    /// Show restaurant details and ratings
    Info { id: i64 },
    /// Add or remove a restaurant from favorites
    Favorite { id: i64 },
    /// Rate a restaurant from 1 to 5 with a comment
    Rate {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        score: i64,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Open the menu of a restaurant
    Menu { id: i64 },
    /// Show details of an item on the open menu
    Item { id: i64 },
    /// Add an item of the open menu to the cart
    Add { id: i64 },
    /// Show the cart
    Cart,
    /// Increase the quantity of a cart line
    Inc { id: i64 },
    /// Decrease the quantity of a cart line
    Dec { id: i64 },
    /// Remove a cart line
    Remove { id: i64 },
    /// Empty the cart
    Clear,
    /// Place the order for the cart
    Order,
    /// Start payment for the cart total
    Pay,
    /// Show favorites and tag preferences
    Account,
    /// Toggle a preferred tag
    Tag {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List all known tags
    Tags,
    /// Handle the text of a scanned QR code
    Scan {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
        data: Vec<String>,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}
