use log::{debug, info};

use super::connection::DbConn;
use crate::errors::{Result, StoreContext};

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = include_str!("drop.sql");

/// Create tables and views that do not exist yet. Safe to run on every open.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    run_script(conn, SCHEMA_SQL)?;
    debug!("Database schema verified");
    Ok(())
}

/// Drop every table and view, then recreate them empty
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    run_script(conn, DROP_SQL)?;
    run_script(conn, SCHEMA_SQL)?;

    info!("Database schema reset successfully");
    Ok(())
}

fn run_script(conn: &mut DbConn, script: &str) -> Result<()> {
    let statements = split_sql_statements(script);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement, idx + 1)?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str, position: usize) -> Result<()> {
    conn.execute(sql, [])
        .store_context(&format!("Failed to execute schema statement {}", position))
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection};

    fn count_objects(conn: &mut DbConn, kind: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name NOT LIKE 'sqlite_%'",
            [kind],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_split_sql_statements_skips_blanks() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n ; CREATE TABLE b (y);\n");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        ensure_schema(&mut conn).unwrap();

        assert_eq!(count_objects(&mut conn, "table"), 2);
        assert_eq!(count_objects(&mut conn, "view"), 2);
    }

    #[test]
    fn test_reset_database_empties_tables() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO players (name) VALUES ('Ada')", [])
            .unwrap();

        reset_database(&mut conn).unwrap();

        let players: i64 = conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .unwrap();
        assert_eq!(players, 0);
        assert_eq!(count_objects(&mut conn, "view"), 2);
    }
}
