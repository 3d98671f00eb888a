// provider/src/lib.rs

//! Ethereum JSON-RPC facade over a VeChain Thor client
//!
//! This crate provides:
//! - `Provider`, the dispatcher mapping `eth_*` methods to handlers
//! - Input formatting of call parameters
//! - Output shape converters from Thor objects to Ethereum ones
//! - The caller-facing error taxonomy

pub mod convert;
pub mod formatter;
pub mod provider;
pub mod types;

pub use provider::{Provider, SUPPORTED_METHODS};
pub use types::{RpcCall, RpcResponse};

use thor_client::ClientError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors surfaced to the JSON-RPC caller.
///
/// The vocabulary is deliberately open: `Client` carries backing-client
/// failures through unchanged instead of re-wording them.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Method {method}: parameter #{index} not supported")]
    MethodParamNotSupported { method: String, index: usize },

    #[error("Method {method}: option {option} not supported")]
    MethodOptNotSupported { method: String, option: String },

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ProviderError {
    /// JSON-RPC 2.0 error code
    pub fn code(&self) -> i32 {
        match self {
            ProviderError::MethodNotFound(_) => -32601,
            ProviderError::MethodParamNotSupported { .. } => -32602,
            ProviderError::MethodOptNotSupported { .. } => -32602,
            ProviderError::InvalidParams(_) => -32602,
            ProviderError::BlockNotFound(_) => -32001,
            ProviderError::TransactionNotFound(_) => -32002,
            ProviderError::Client(_) => -32000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ProviderError::MethodNotFound("eth_mining".into()).code(), -32601);
        assert_eq!(
            ProviderError::MethodParamNotSupported { method: "getBalance".into(), index: 2 }.code(),
            -32602
        );
        assert_eq!(ProviderError::BlockNotFound("pending".into()).code(), -32001);
        assert_eq!(ProviderError::TransactionNotFound("0x00".into()).code(), -32002);
    }

    #[test]
    fn test_client_error_text_passes_through() {
        let inner = ClientError::InvalidResponse("node has no best block".into());
        let text = inner.to_string();
        let err = ProviderError::from(inner);
        assert_eq!(err.to_string(), text);
    }
}
