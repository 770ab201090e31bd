use log::{debug, info};

use crate::config::{Aggregation, StandingsSettings};
use crate::domain::{MatchId, Pairing, PlayerId, StandingRow};
use crate::errors::{Result, TournamentError};
use crate::pairing;
use crate::standings;
use crate::store::RecordStore;

/// Swiss tournament operations over an injected record store
pub struct TournamentService<S: RecordStore> {
    store: S,
    settings: StandingsSettings,
}

impl<S: RecordStore> TournamentService<S> {
    pub fn new(store: S, settings: StandingsSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a player and returns the id the store assigned
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidInput(
                "player name must not be blank".to_string(),
            ));
        }

        let id = self.store.insert_player(name)?;
        info!("Registered player {} as #{}", name, id);
        Ok(id)
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        let id = self.store.insert_match(winner, loser)?;
        info!("Recorded match #{}: #{} beat #{}", id, winner, loser);
        Ok(id)
    }

    pub fn delete_matches(&self) -> Result<()> {
        self.store.delete_all_matches()
    }

    pub fn delete_players(&self) -> Result<()> {
        self.store.delete_all_players()
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    /// Current standings, most wins first, ties by ascending id
    pub fn player_standings(&self) -> Result<Vec<StandingRow>> {
        let rows = match self.settings.aggregation {
            Aggregation::Store => self.store.fetch_standings()?,
            Aggregation::InProcess => {
                let players = self.store.list_players()?;
                let matches = self.store.list_matches()?;
                standings::compute_standings(&players, &matches)
            }
        };

        debug!(
            "Fetched {} standing rows ({} aggregation)",
            rows.len(),
            self.settings.aggregation
        );
        Ok(rows)
    }

    /// Pairings for the next round, built from the current standings
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.player_standings()?;
        pairing::generate_pairings(&standings)
    }
}
