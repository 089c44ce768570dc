pub mod client;
pub mod errors;

pub use client::QuotationClient;
pub use errors::UpstreamError;
