use std::path::PathBuf;

use common::{BudgetError, DeadlineExceeded};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequesterError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Deadline(#[from] DeadlineExceeded),

    #[error("invalid quotation payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error(transparent)]
    Budget(#[from] BudgetError),
}
