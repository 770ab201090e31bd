use rusqlite::params;

use super::connection::DbConn;
use crate::domain::Player;
use crate::errors::{Result, StoreContext};

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .store_context("Failed to insert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

/// Removes every player. Their matches go with them through the cascade.
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .store_context("Failed to delete players")
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .store_context("Failed to count players")?;

    Ok(count as usize)
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql).store_context("Failed to list players")?;
    let rows = stmt
        .query_map([], parse_player_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .store_context("Failed to list players")?;

    Ok(rows)
}
