use common::QuotationEnvelope;
use reqwest::Client;
use tracing::debug;

use crate::config::RequesterConfig;
use crate::error::RequesterError;

/// One bounded GET against the quotation service, returning `USDBRL.bid`.
///
/// The budget clock starts before the request is built and stops once the
/// body has been read and decoded.
pub async fn fetch_bid(http: &Client, cfg: &RequesterConfig) -> Result<String, RequesterError> {
    let envelope = cfg
        .budget
        .run(async {
            let req = http.get(&cfg.endpoint).build()?;
            let resp = http.execute(req).await?.error_for_status()?;
            let body = resp.bytes().await?;

            Ok::<_, RequesterError>(serde_json::from_slice::<QuotationEnvelope>(&body)?)
        })
        .await??;

    debug!(quotation = ?envelope.usdbrl, "quotation decoded");

    Ok(envelope.usdbrl.bid)
}
