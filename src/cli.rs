use clap::{Parser, Subcommand};

use crate::config::Aggregation;
use crate::domain::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament pairings")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Where standings are aggregated (defaults to $STANDINGS_AGGREGATION or store)
    #[arg(short, long, global = true, value_enum)]
    pub aggregation: Option<Aggregation>,

    /// Command (prints the next round's pairings when omitted)
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the schema if it does not exist yet
    Init,
    /// Drop all players and matches and recreate the schema
    Reset,
    /// Register a player
    Register {
        /// Player name, need not be unique
        name: String,
    },
    /// Record the outcome of a match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Print the number of registered players
    Count,
    /// Print current standings
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    DeleteMatches,
    /// Remove all players along with their matches
    DeletePlayers,
}
