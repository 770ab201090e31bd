use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";
pub const AGGREGATION_ENV: &str = "STANDINGS_AGGREGATION";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
            connection_timeout_secs: 5,
        }
    }
}

/// Where win/match counting happens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Aggregation {
    /// Let SQLite compute standings through its views
    #[default]
    Store,
    /// Fetch raw players and matches and count them here
    InProcess,
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "store" => Ok(Aggregation::Store),
            "in-process" | "in_process" | "inprocess" => Ok(Aggregation::InProcess),
            other => Err(format!("Unknown aggregation mode: {}", other)),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Store => write!(f, "store"),
            Aggregation::InProcess => write!(f, "in-process"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StandingsSettings {
    pub aggregation: Aggregation,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub standings: StandingsSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH` and `STANDINGS_AGGREGATION`
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(path) = std::env::var(DATABASE_PATH_ENV) {
            config.database.path = path;
        }

        if let Ok(raw) = std::env::var(AGGREGATION_ENV) {
            match raw.parse() {
                Ok(aggregation) => config.standings.aggregation = aggregation,
                Err(e) => log::warn!("Ignoring {}: {}", AGGREGATION_ENV, e),
            }
        }

        config
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.standings.aggregation = aggregation;
        self
    }
}
