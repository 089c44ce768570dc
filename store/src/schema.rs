use sqlx::SqlitePool;

pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS quotations (
  ID INTEGER PRIMARY KEY AUTOINCREMENT,
  bid TEXT,
  timestamp TEXT
);
"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
