// thor-client/src/lib.rs

//! Client-side object model for a VeChain Thor node
//!
//! This crate provides:
//! - Thorest data types (blocks, transactions, receipts, accounts)
//! - The `ThorClient` trait, the seam the provider calls through
//! - An HTTP implementation speaking the Thorest REST API

pub mod client;
pub mod http;
pub mod types;

pub use client::ThorClient;
pub use http::{ClientConfig, HttpClient};
pub use types::*;

/// Average block interval of the chain, in seconds
pub const BLOCK_INTERVAL: u64 = 10;

/// Result type for backing-client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the Thor node
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}
