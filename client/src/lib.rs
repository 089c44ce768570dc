pub mod config;
pub mod error;
pub mod output;
pub mod requester;

pub use config::RequesterConfig;
pub use error::RequesterError;

use common::logger::{TraceId, request_span};
use reqwest::Client;
use tracing::{Instrument, info};

/// Asks the quotation service for the current bid and writes it to the
/// configured output file. Returns the bid that was written.
///
/// The output file is only touched once a complete response has been decoded.
pub async fn run(cfg: &RequesterConfig) -> Result<String, RequesterError> {
    cfg.validate()?;

    let http = Client::builder().build()?;
    let trace_id = TraceId::new();

    async {
        info!(endpoint = %cfg.endpoint, "requesting quotation");
        let bid = requester::fetch_bid(&http, cfg).await?;
        info!(bid = %bid, "quotation received");

        output::write_quotation(&cfg.output_path, &bid).await?;
        info!(path = %cfg.output_path.display(), "quotation written");

        Ok::<_, RequesterError>(bid)
    }
    .instrument(request_span("requester", &trace_id))
    .await
}
