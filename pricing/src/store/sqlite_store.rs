//! SqlitePricingStore
//! ------------------
//! SQLite-backed implementation of the `PricingStore` trait, so that surge
//! state survives restarts. The tracker operates in-memory and writes through
//! here on every transition, so the schema is one row per flight with the
//! attempt window serialized as JSON.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::PricingStore;
use crate::model::{FlightPricing, Surge};
use crate::window::AttemptWindow;

pub struct SqlitePricingStore {
    pool: SqlitePool,
}

impl SqlitePricingStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `path` and ensure the schema exists.
    pub async fn new(path: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(path).await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the pricing table if it does not exist.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS flight_pricing (
                flight_id TEXT PRIMARY KEY,
                surge_percentage INTEGER NOT NULL,
                surge_activated_at_ms INTEGER,
                attempts_json TEXT NOT NULL
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PricingStore for SqlitePricingStore {
    async fn load(&self, flight_id: &str) -> anyhow::Result<Option<FlightPricing>> {
        let row = sqlx::query("SELECT * FROM flight_pricing WHERE flight_id = ?")
            .bind(flight_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let flight_id: String = row.get("flight_id");
        let percentage = row.get::<i64, _>("surge_percentage") as u32;
        let activated_at_ms = row
            .get::<Option<i64>, _>("surge_activated_at_ms")
            .map(|v| v as u64);
        let attempts_json: String = row.get("attempts_json");

        // A positive percentage without an activation time cannot be
        // represented, so treat anything else as inactive.
        let surge = match activated_at_ms {
            Some(at) if percentage > 0 => Surge::Active {
                percentage,
                activated_at_ms: at,
            },
            _ => {
                let attempts: AttemptWindow =
                    serde_json::from_str(&attempts_json).map_err(|e| {
                        anyhow::anyhow!("invalid attempts JSON '{}': {}", attempts_json, e)
                    })?;
                Surge::Inactive { attempts }
            }
        };

        Ok(Some(FlightPricing { flight_id, surge }))
    }

    /// Store or update a pricing record with upsert semantics.
    async fn save(&self, pricing: &FlightPricing) -> anyhow::Result<()> {
        let (percentage, activated_at_ms, attempts) = match &pricing.surge {
            Surge::Active {
                percentage,
                activated_at_ms,
            } => (
                *percentage as i64,
                Some(*activated_at_ms as i64),
                AttemptWindow::new(),
            ),
            Surge::Inactive { attempts } => (0, None, attempts.clone()),
        };

        let attempts_json = serde_json::to_string(&attempts)?;

        sqlx::query(
            r#"
            INSERT INTO flight_pricing (
                flight_id, surge_percentage, surge_activated_at_ms, attempts_json
            )
            VALUES (?, ?, ?, ?)
            ON CONFLICT(flight_id) DO UPDATE SET
                surge_percentage = excluded.surge_percentage,
                surge_activated_at_ms = excluded.surge_activated_at_ms,
                attempts_json = excluded.attempts_json;
        "#,
        )
        .bind(&pricing.flight_id)
        .bind(percentage)
        .bind(activated_at_ms)
        .bind(&attempts_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
