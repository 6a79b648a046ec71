//! Calculation History
//!
//! SQLite-backed record of past calculations, one row per calculation keyed
//! by an opaque user id. Breakdown figures are stored as individual columns;
//! the questionnaire answers and recommendations are stored as JSON text.
//!
//! The emission engine never reads from here.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advice::Recommendation;
use crate::emissions::{EmissionBreakdown, ResultRecord};
use crate::lifestyle::LifestyleInput;
use crate::utils::round_to;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored timestamp '{0}' is not RFC 3339")]
    Timestamp(String),

    #[error("database lock poisoned")]
    LockPoisoned,
}

/// A calculation as read back from history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCalculation {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub total_emissions: f64,
    pub breakdown: EmissionBreakdown,
    pub lifestyle_data: LifestyleInput,
    pub recommendations: Vec<Recommendation>,
}

/// Aggregate figures over all stored calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_calculations: u64,
    pub average_emissions: f64,
    pub latest_calculation: Option<DateTime<Utc>>,
}

pub struct CalculationStore {
    conn: Mutex<Connection>,
}

impl CalculationStore {
    /// Open (or create) the history database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::with_connection(conn)
    }

    /// Throwaway in-memory database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS carbon_calculations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                calculation_date TEXT NOT NULL,
                total_emissions REAL NOT NULL,
                travel_emissions REAL NOT NULL,
                transport_emissions REAL NOT NULL,
                diet_emissions REAL NOT NULL,
                shopping_emissions REAL NOT NULL,
                home_energy_emissions REAL NOT NULL,
                lifestyle_data TEXT NOT NULL,
                recommendations TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_carbon_calculations_user ON carbon_calculations(user_id)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Persist one calculation, returning its row id
    pub fn save_calculation(
        &self,
        user_id: &str,
        result: &ResultRecord,
        recommendations: &[Recommendation],
    ) -> Result<i64, StoreError> {
        let lifestyle_json = serde_json::to_string(&result.lifestyle_data)?;
        let recommendations_json = serde_json::to_string(recommendations)?;
        let b = &result.breakdown;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO carbon_calculations
                (user_id, calculation_date, total_emissions, travel_emissions, transport_emissions,
                 diet_emissions, shopping_emissions, home_energy_emissions, lifestyle_data, recommendations)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                user_id,
                Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
                result.total_emissions,
                b.travel,
                b.transport,
                b.diet,
                b.shopping,
                b.home_energy,
                lifestyle_json,
                recommendations_json,
            ],
        )?;

        let id = conn.last_insert_rowid();
        tracing::debug!("Saved calculation {} for user {}", id, user_id);
        Ok(id)
    }

    /// Most recent calculations for `user_id`, newest first
    pub fn user_history(&self, user_id: &str, limit: usize) -> Result<Vec<StoredCalculation>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, calculation_date, total_emissions, travel_emissions, transport_emissions,
                    diet_emissions, shopping_emissions, home_energy_emissions, lifestyle_data, recommendations
             FROM carbon_calculations
             WHERE user_id = ?1
             ORDER BY calculation_date DESC, id DESC
             LIMIT ?2",
        )?;

        let rows = stmt
            .query_map(params![user_id, limit as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    EmissionBreakdown {
                        travel: row.get(3)?,
                        transport: row.get(4)?,
                        diet: row.get(5)?,
                        shopping: row.get(6)?,
                        home_energy: row.get(7)?,
                    },
                    row.get::<_, String>(8)?,
                    row.get::<_, String>(9)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, date, total_emissions, breakdown, lifestyle, recs)| {
                Ok(StoredCalculation {
                    id,
                    date: parse_timestamp(&date)?,
                    total_emissions,
                    breakdown,
                    lifestyle_data: serde_json::from_str(&lifestyle)?,
                    recommendations: serde_json::from_str(&recs)?,
                })
            })
            .collect()
    }

    /// Count, average total (2 dp) and latest date across all users
    pub fn statistics(&self) -> Result<Statistics, StoreError> {
        let conn = self.lock()?;
        let (count, average, latest) = conn.query_row(
            "SELECT COUNT(*), AVG(total_emissions), MAX(calculation_date) FROM carbon_calculations",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<f64>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )?;

        Ok(Statistics {
            total_calculations: count.max(0) as u64,
            average_emissions: round_to(average.unwrap_or(0.0), 2),
            latest_calculation: latest.as_deref().map(parse_timestamp).transpose()?,
        })
    }

    /// Remove every calculation for `user_id`. Returns whether anything was deleted.
    pub fn delete_user_data(&self, user_id: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let deleted = conn.execute(
            "DELETE FROM carbon_calculations WHERE user_id = ?1",
            params![user_id],
        )?;
        Ok(deleted > 0)
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StoreError::Timestamp(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::fallback_recommendations;
    use crate::advice::top_categories;
    use crate::emissions::EmissionModel;
    use approx::assert_abs_diff_eq;

    fn sample(flights_long: u32) -> ResultRecord {
        EmissionModel::compute(&LifestyleInput {
            flights_short: 0,
            flights_long,
            transport_type: "Public Transport".to_string(),
            daily_distance: 10.0,
            meat_frequency: "Never".to_string(),
            dairy_frequency: "Rarely".to_string(),
            clothing_spend: 0.0,
            online_shopping: 0.0,
            home_type: "Apartment/Flat".to_string(),
            heating_type: "Gas Boiler".to_string(),
        })
    }

    #[test]
    fn test_save_and_read_back() {
        let store = CalculationStore::open_in_memory().unwrap();
        let result = sample(2);
        let recs = fallback_recommendations(&top_categories(&result.breakdown));

        let id = store.save_calculation("user-1", &result, &recs).unwrap();
        let history = store.user_history("user-1", 10).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, id);
        assert_eq!(history[0].breakdown, result.breakdown);
        assert_eq!(history[0].lifestyle_data, result.lifestyle_data);
        assert_eq!(history[0].recommendations, recs);
        assert_eq!(history[0].total_emissions, result.total_emissions);
    }

    #[test]
    fn test_provider_items_survive_storage_unchanged() {
        let store = CalculationStore::open_in_memory().unwrap();
        let recs = vec![
            Recommendation::Other(serde_json::json!("Cycle to work")),
            Recommendation::Other(serde_json::json!({"title": "Insulate", "potential_savings": 1.2})),
        ];

        store.save_calculation("dana", &sample(0), &recs).unwrap();
        let history = store.user_history("dana", 1).unwrap();
        assert_eq!(history[0].recommendations, recs);
    }

    #[test]
    fn test_history_is_per_user_newest_first_and_limited() {
        let store = CalculationStore::open_in_memory().unwrap();
        for n in 0..3 {
            store.save_calculation("alice", &sample(n), &[]).unwrap();
        }
        store.save_calculation("bob", &sample(5), &[]).unwrap();

        let history = store.user_history("alice", 2).unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].id > history[1].id);
        assert!(history.iter().all(|c| c.breakdown.travel <= 3.0));
    }

    #[test]
    fn test_statistics() {
        let store = CalculationStore::open_in_memory().unwrap();

        let empty = store.statistics().unwrap();
        assert_eq!(empty.total_calculations, 0);
        assert_eq!(empty.average_emissions, 0.0);
        assert!(empty.latest_calculation.is_none());

        let a = sample(0);
        let b = sample(2);
        store.save_calculation("u", &a, &[]).unwrap();
        store.save_calculation("v", &b, &[]).unwrap();

        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_calculations, 2);
        assert_abs_diff_eq!(
            stats.average_emissions,
            round_to((a.total_emissions + b.total_emissions) / 2.0, 2),
            epsilon = 1e-9
        );
        assert!(stats.latest_calculation.is_some());
    }

    #[test]
    fn test_delete_user_data() {
        let store = CalculationStore::open_in_memory().unwrap();
        store.save_calculation("alice", &sample(1), &[]).unwrap();

        assert!(store.delete_user_data("alice").unwrap());
        assert!(!store.delete_user_data("alice").unwrap());
        assert!(store.user_history("alice", 10).unwrap().is_empty());
    }

    #[test]
    fn test_open_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        {
            let store = CalculationStore::open(&path).unwrap();
            store.save_calculation("carol", &sample(1), &[]).unwrap();
        }

        let reopened = CalculationStore::open(&path).unwrap();
        assert_eq!(reopened.user_history("carol", 10).unwrap().len(), 1);
    }
}
