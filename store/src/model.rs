/// One persisted row of the `quotations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredQuotation {
    pub id: i64,
    pub bid: String,
    /// RFC3339, UTC, seconds precision.
    pub timestamp: String,
}
