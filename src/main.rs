use anyhow::Result;

use swiss_pairings::cli::{Cli, Command};
use swiss_pairings::config::AppConfig;
use swiss_pairings::{
    build_config, handle_count, handle_delete_matches, handle_delete_players, handle_init,
    handle_pairings, handle_register, handle_report, handle_reset, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = build_config(&cli);
    let command = cli.command.unwrap_or(Command::Pairings { json: false });
    execute_command(&command, &config)
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Init => handle_init(config),
        Command::Reset => handle_reset(config),
        Command::Register { name } => handle_register(config, name),
        Command::Report { winner, loser } => handle_report(config, *winner, *loser),
        Command::Count => handle_count(config),
        Command::Standings { json } => handle_standings(config, *json),
        Command::Pairings { json } => handle_pairings(config, *json),
        Command::DeleteMatches => handle_delete_matches(config),
        Command::DeletePlayers => handle_delete_players(config),
    }
}
