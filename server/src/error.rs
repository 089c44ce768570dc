use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::DeadlineExceeded;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Every failure is terminal for the request that hit it.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    PersistenceDeadline(DeadlineExceeded),

    #[error("persistence failed: {0:#}")]
    Persistence(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Callers only ever see a generic message; details stay in the logs.
        let message = match self {
            AppError::Upstream(_) => "failed to fetch quotation",
            AppError::PersistenceDeadline(_) | AppError::Persistence(_) => {
                "failed to store quotation"
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn upstream_errors_map_to_generic_500() {
        let err = AppError::Upstream(UpstreamError::Deadline(DeadlineExceeded {
            label: "upstream",
            limit: Duration::from_millis(200),
        }));

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(resp).await, "failed to fetch quotation");
    }

    #[tokio::test]
    async fn persistence_deadline_maps_to_store_failure() {
        let err = AppError::PersistenceDeadline(DeadlineExceeded {
            label: "persistence",
            limit: Duration::from_millis(10),
        });

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(resp).await, "failed to store quotation");
    }

    #[tokio::test]
    async fn persistence_errors_do_not_leak_details() {
        let err = AppError::Persistence(anyhow::anyhow!("database is locked"));

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(resp).await, "failed to store quotation");
    }
}
