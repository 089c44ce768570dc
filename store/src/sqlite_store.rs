//! SqliteQuotationStore
//! --------------------
//! SQLite-backed implementation of [`QuotationStore`]. The pool is the only
//! process-wide shared resource of the service; every insert is a single
//! statement, so no transaction ever spans more than one row.
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::QuotationStore;
use crate::model::StoredQuotation;
use crate::schema;

pub struct SqliteQuotationStore {
    pool: SqlitePool,
}

impl SqliteQuotationStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file when missing) and ensure the schema exists.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(16)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        schema::migrate(&self.pool).await
    }

    /// Every persisted row, oldest first.
    pub async fn load_all(&self) -> anyhow::Result<Vec<StoredQuotation>> {
        let rows = sqlx::query("SELECT ID AS id, bid, timestamp FROM quotations ORDER BY ID")
            .fetch_all(&self.pool)
            .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(StoredQuotation {
                id: row.try_get("id")?,
                bid: row.try_get::<Option<String>, _>("bid")?.unwrap_or_default(),
                timestamp: row
                    .try_get::<Option<String>, _>("timestamp")?
                    .unwrap_or_default(),
            });
        }

        Ok(out)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuotationStore for SqliteQuotationStore {
    async fn insert(&self, bid: &str, recorded_at: DateTime<Utc>) -> anyhow::Result<i64> {
        let timestamp = recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true);

        let res = sqlx::query("INSERT INTO quotations(bid, timestamp) VALUES(?, ?)")
            .bind(bid)
            .bind(&timestamp)
            .execute(&self.pool)
            .await?;

        let id = res.last_insert_rowid();
        debug!(id, bid, timestamp = %timestamp, "quotation row inserted");

        Ok(id)
    }
}
