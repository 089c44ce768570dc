use client::{RequesterConfig, RequesterError};
use common::logger::init_logger;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logger("client");

    let cfg = RequesterConfig::default();

    match client::run(&cfg).await {
        Ok(bid) => {
            info!(bid = %bid, path = %cfg.output_path.display(), "done");
        }
        Err(RequesterError::Deadline(e)) => {
            error!(
                budget_ms = e.limit.as_millis() as u64,
                "timed out waiting for the quotation service"
            );
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "quotation request failed");
            std::process::exit(1);
        }
    }
}
