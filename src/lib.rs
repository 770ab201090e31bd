pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod services;
pub mod standings;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::domain::PlayerId;
use crate::services::{render, TournamentService};
use crate::store::SqliteStore;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(path) = &cli.database {
        config = config.with_database_path(path.clone());
    }
    if let Some(aggregation) = cli.aggregation {
        config = config.with_aggregation(aggregation);
    }
    config
}

fn open_service(config: &AppConfig) -> Result<TournamentService<SqliteStore>> {
    let store = SqliteStore::open(&config.database)?;
    Ok(TournamentService::new(store, config.standings.clone()))
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    open_service(config)?;
    println!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service.store().reset()?;
    println!("Database reset");
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let service = open_service(config)?;
    let id = service.register_player(name)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let service = open_service(config)?;
    service.report_match(winner, loser)?;
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let standings = service.player_standings()?;

    if json {
        println!("{}", render::to_json(&standings)?);
    } else {
        print!("{}", render::standings_table(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let pairings = service.swiss_pairings()?;

    if json {
        println!("{}", render::to_json(&pairings)?);
    } else {
        print!("{}", render::pairings_table(&pairings));
    }
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service.delete_matches()?;
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service.delete_players()?;
    Ok(())
}
