use log::info;

use crate::config::DatabaseSettings;
use crate::database::{self, DbConn, DbPool};
use crate::domain::{Match, MatchId, Player, PlayerId, StandingRow};
use crate::errors::Result;
use crate::standings;

/// Persistence for players and match results.
pub trait RecordStore {
    fn insert_player(&self, name: &str) -> Result<PlayerId>;
    fn delete_all_players(&self) -> Result<()>;
    fn count_players(&self) -> Result<usize>;
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId>;
    fn delete_all_matches(&self) -> Result<()>;
    fn list_players(&self) -> Result<Vec<Player>>;
    fn list_matches(&self) -> Result<Vec<Match>>;

    /// Aggregated standings. Stores that can count on their side override this.
    fn fetch_standings(&self) -> Result<Vec<StandingRow>> {
        let players = self.list_players()?;
        let matches = self.list_matches()?;
        Ok(standings::compute_standings(&players, &matches))
    }
}

/// SQLite-backed store. Each operation checks out its own pooled connection,
/// which goes back to the pool when the operation returns, on success or error.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(settings)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> Result<Self> {
        let pool = database::create_memory_pool()?;
        Self::from_pool(pool)
    }

    fn from_pool(pool: DbPool) -> Result<Self> {
        let store = Self { pool };
        store.with_connection(database::setup::ensure_schema)?;
        Ok(store)
    }

    /// Drop and recreate all tables
    pub fn reset(&self) -> Result<()> {
        self.with_connection(database::setup::reset_database)
    }

    fn with_connection<T>(&self, op: impl FnOnce(&mut DbConn) -> Result<T>) -> Result<T> {
        let mut conn = database::get_connection(&self.pool)?;
        op(&mut conn)
    }
}

impl RecordStore for SqliteStore {
    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        let player = self.with_connection(|conn| database::players::insert_player(conn, name))?;
        Ok(player.id)
    }

    fn delete_all_players(&self) -> Result<()> {
        let removed = self.with_connection(database::players::delete_all)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        self.with_connection(database::players::count_all)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        let recorded =
            self.with_connection(|conn| database::matches::insert_match(conn, winner, loser))?;
        Ok(recorded.id)
    }

    fn delete_all_matches(&self) -> Result<()> {
        let removed = self.with_connection(database::matches::delete_all)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        self.with_connection(database::players::list_all)
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        self.with_connection(database::matches::list_all)
    }

    fn fetch_standings(&self) -> Result<Vec<StandingRow>> {
        self.with_connection(database::standings::fetch_standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_connection_is_released_after_each_operation() {
        // The in-memory pool holds a single connection, so a leaked
        // checkout would make the second call time out.
        let store = SqliteStore::in_memory().unwrap();

        store.insert_player("Ann").unwrap();
        store.insert_player("Bob").unwrap();

        assert_eq!(store.count_players().unwrap(), 2);
    }

    #[test]
    fn test_sql_and_default_aggregation_agree() {
        let store = SqliteStore::in_memory().unwrap();
        let ids: Vec<_> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|name| store.insert_player(name).unwrap())
            .collect();
        store.insert_match(ids[3], ids[0]).unwrap();
        store.insert_match(ids[4], ids[1]).unwrap();
        store.insert_match(ids[3], ids[4]).unwrap();

        let from_sql = store.fetch_standings().unwrap();
        let in_process = standings::compute_standings(
            &store.list_players().unwrap(),
            &store.list_matches().unwrap(),
        );

        assert_eq!(from_sql, in_process);
        assert_eq!(from_sql[0].id, ids[3]);
        assert_eq!(from_sql[0].wins, 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = SqliteStore::in_memory().unwrap();
        let a = store.insert_player("A").unwrap();
        let b = store.insert_player("B").unwrap();
        store.insert_match(a, b).unwrap();

        store.reset().unwrap();

        assert_eq!(store.count_players().unwrap(), 0);
        assert!(store.list_matches().unwrap().is_empty());
    }
}
