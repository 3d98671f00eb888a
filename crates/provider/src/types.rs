// provider/src/types.rs
use serde::{Deserialize, Serialize};

/// One inbound JSON-RPC call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcCall {
    /// Correlation id, echoed unchanged into the response
    pub id: serde_json::Value,
    pub method: String,
    /// Positional parameters
    #[serde(default)]
    pub params: Vec<serde_json::Value>,
}

impl RpcCall {
    pub fn new(
        id: impl Into<serde_json::Value>,
        method: impl Into<String>,
        params: Vec<serde_json::Value>,
    ) -> Self {
        Self { id: id.into(), method: method.into(), params }
    }
}

/// Successful response to an [`RpcCall`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// The id of the call this answers
    pub id: serde_json::Value,
    pub result: serde_json::Value,
}
