use std::path::Path;

use crate::error::RequesterError;

pub fn render(bid: &str) -> String {
    format!("Dólar: {bid}")
}

/// Replaces whatever `path` held with the rendered bid.
pub async fn write_quotation(path: &Path, bid: &str) -> Result<(), RequesterError> {
    tokio::fs::write(path, render(bid))
        .await
        .map_err(|source| RequesterError::Io {
            path: path.to_path_buf(),
            source,
        })
}
