use super::connection::DbConn;
use crate::domain::StandingRow;
use crate::errors::{Result, StoreContext};

// Players without matches have no row in either view, hence the LEFT JOINs
// keyed on players.id and the COALESCE.
const PLAYER_STANDINGS: &str = "
    SELECT
        p.id,
        p.name,
        COALESCE(tw.total_wins, 0) AS wins,
        COALESCE(tm.total_matches, 0) AS matches
    FROM players p
    LEFT JOIN total_matches tm ON p.id = tm.player_id
    LEFT JOIN total_wins tw ON p.id = tw.player_id
    ORDER BY wins DESC, p.id ASC
";

pub fn fetch_standings(conn: &mut DbConn) -> Result<Vec<StandingRow>> {
    let mut stmt = conn
        .prepare(PLAYER_STANDINGS)
        .store_context("Failed to prepare standings query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StandingRow {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .store_context("Failed to fetch standings")?;

    Ok(rows)
}
