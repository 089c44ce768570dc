use std::path::PathBuf;

use common::Budget;
use reqwest::Url;

use crate::error::RequesterError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/cotacao";
pub const DEFAULT_OUTPUT_PATH: &str = "cotacao.txt";

#[derive(Clone, Debug)]
pub struct RequesterConfig {
    /// Quotation service endpoint.
    pub endpoint: String,

    /// File overwritten with the received bid.
    pub output_path: PathBuf,

    /// Bound on the whole call: building the request, sending it and reading the body.
    pub budget: Budget,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            budget: Budget::requester(),
        }
    }
}

impl RequesterConfig {
    pub fn validate(&self) -> Result<(), RequesterError> {
        let url =
            Url::parse(&self.endpoint).map_err(|_| RequesterError::Endpoint(self.endpoint.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RequesterError::Endpoint(self.endpoint.clone()));
        }

        self.budget.validate()?;

        Ok(())
    }
}
