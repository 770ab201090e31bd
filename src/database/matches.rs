use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{Match, PlayerId};
use crate::errors::{Result, StoreContext};

pub fn insert_match(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, created_at";

    conn.query_row(sql, params![winner, loser], parse_match_row)
        .store_context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .store_context("Failed to delete matches")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner, loser, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql).store_context("Failed to list matches")?;
    let rows = stmt
        .query_map([], parse_match_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .store_context("Failed to list matches")?;

    Ok(rows)
}
