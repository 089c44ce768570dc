use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use common::logger::{TraceId, child_span, request_span};
use common::{Budget, QuotationEnvelope};
use store::QuotationStore;
use tracing::{Instrument, error, info};

use crate::error::AppError;
use crate::upstream::QuotationClient;

/// Dependencies handed to every request. Cloned per request; the store is
/// the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub upstream: QuotationClient,
    pub store: Arc<dyn QuotationStore>,
    pub persistence_budget: Budget,
}

/// `GET /cotacao`
pub async fn get_quotation(
    State(state): State<AppState>,
) -> Result<Json<QuotationEnvelope>, AppError> {
    let trace_id = TraceId::new();

    serve_quotation(&state)
        .instrument(request_span("cotacao", &trace_id))
        .await
        .map(Json)
}

async fn serve_quotation(state: &AppState) -> Result<QuotationEnvelope, AppError> {
    info!("quotation request received");

    let quotation = state
        .upstream
        .fetch()
        .instrument(child_span("upstream"))
        .await
        .inspect_err(|e| {
            if e.is_deadline() {
                error!(error = %e, "upstream did not answer within its budget");
            } else {
                error!(error = %e, "failed to fetch quotation");
            }
        })?;

    let id = state
        .persistence_budget
        .run(state.store.insert(quotation.bid(), Utc::now()))
        .instrument(child_span("persistence"))
        .await
        .map_err(|e| {
            error!(error = %e, "store did not answer within its budget");
            AppError::PersistenceDeadline(e)
        })?
        .map_err(|e| {
            error!(error = %e, "failed to store quotation");
            AppError::Persistence(e)
        })?;

    info!(id, bid = %quotation.bid(), "quotation stored, responding");

    Ok(quotation)
}
