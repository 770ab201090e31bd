pub mod settings;

pub use settings::{Aggregation, AppConfig, DatabaseSettings, StandingsSettings};
