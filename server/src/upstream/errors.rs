use common::DeadlineExceeded;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Deadline(#[from] DeadlineExceeded),

    #[error("invalid quotation payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    pub fn is_deadline(&self) -> bool {
        matches!(self, UpstreamError::Deadline(_))
    }
}
