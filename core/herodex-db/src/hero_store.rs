//! Persistent hero store backed by SQLite.

use crate::error::{StoreError, StoreResult};
use herodex_types::{Hero, HeroQuery, HeroStats};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

const HERO_COLUMNS: &str = "id, name, intelligence, strength, speed, power";

/// Hero repository.
///
/// At most one row exists per exact `name`; the unique constraint is what
/// keeps concurrent upserts for the same hero from producing duplicates.
pub struct HeroStore {
    conn: Mutex<Connection>,
}

impl HeroStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        register_functions(&conn)?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS heroes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                intelligence INTEGER NOT NULL,
                strength INTEGER NOT NULL,
                speed INTEGER NOT NULL,
                power INTEGER NOT NULL
            );
            ",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Creates the hero if no row has this exact name, otherwise overwrites
    /// its four stats in place.
    ///
    /// Returns the stored record and whether a new row was created.
    pub fn upsert(&self, stats: &HeroStats) -> StoreResult<(Hero, bool)> {
        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM heroes WHERE name = ?1",
                params![stats.name],
                |row| row.get(0),
            )
            .optional()?;

        let hero = tx.query_row(
            &format!(
                "INSERT INTO heroes (name, intelligence, strength, speed, power)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(name) DO UPDATE SET
                    intelligence = excluded.intelligence,
                    strength = excluded.strength,
                    speed = excluded.speed,
                    power = excluded.power
                 RETURNING {HERO_COLUMNS}"
            ),
            params![
                stats.name,
                stats.intelligence,
                stats.strength,
                stats.speed,
                stats.power,
            ],
            hero_from_row,
        )?;
        tx.commit()?;

        let created = existing.is_none();
        debug!(id = hero.id, name = %hero.name, created, "Upserted hero");
        Ok((hero, created))
    }

    /// Returns every hero matching all predicates in `query`, ordered by name.
    pub fn find(&self, query: &HeroQuery) -> StoreResult<Vec<Hero>> {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(name) = &query.name {
            values.push(Value::Text(name.clone()));
            clauses.push(format!("casefold(name) = casefold(?{})", values.len()));
        }
        for (stat, filter) in &query.stats {
            values.push(Value::Integer(filter.value));
            clauses.push(format!(
                "{} {} ?{}",
                stat.as_str(),
                filter.comparison.sql_operator(),
                values.len()
            ));
        }

        let mut sql = format!("SELECT {HERO_COLUMNS} FROM heroes");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY name ASC");

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let heroes = stmt
            .query_map(params_from_iter(values.iter()), hero_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(predicates = clauses.len(), matched = heroes.len(), "Queried heroes");
        Ok(heroes)
    }

    /// Loads a hero by id.
    pub fn get(&self, id: i64) -> StoreResult<Option<Hero>> {
        let conn = self.lock()?;
        let hero = conn
            .query_row(
                &format!("SELECT {HERO_COLUMNS} FROM heroes WHERE id = ?1"),
                params![id],
                hero_from_row,
            )
            .optional()?;
        Ok(hero)
    }

    /// Returns the total number of stored heroes.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM heroes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn hero_from_row(row: &Row<'_>) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        intelligence: row.get(2)?,
        strength: row.get(3)?,
        speed: row.get(4)?,
        power: row.get(5)?,
    })
}

/// SQLite's built-in `lower()` only folds ASCII.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )
}
