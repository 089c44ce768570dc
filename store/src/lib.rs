pub mod model;
pub mod schema;
pub mod sqlite_store;

pub use model::StoredQuotation;
pub use sqlite_store::SqliteQuotationStore;

use chrono::{DateTime, Utc};

/// Append-only persistence for quotation bids.
///
/// The service holds one implementation behind an `Arc` and calls `insert`
/// once per successful upstream fetch.
#[async_trait::async_trait]
pub trait QuotationStore: Send + Sync {
    /// Appends one row and returns its id.
    async fn insert(&self, bid: &str, recorded_at: DateTime<Utc>) -> anyhow::Result<i64>;
}
