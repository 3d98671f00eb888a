// provider/src/provider.rs
use crate::convert::{eth_block, eth_receipt, eth_transaction};
use crate::formatter;
use crate::types::{RpcCall, RpcResponse};
use crate::{ProviderError, ProviderResult};
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};
use thor_client::{ClientError, Revision, ThorClient, BLOCK_INTERVAL};

/// The closed set of JSON-RPC methods this provider answers
pub const SUPPORTED_METHODS: &[&str] = &[
    "eth_getBlockByHash",
    "eth_getBlockByNumber",
    "eth_chainId",
    "eth_getTransactionByHash",
    "eth_getBalance",
    "eth_blockNumber",
    "eth_getCode",
    "eth_syncing",
    "eth_getTransactionReceipt",
    "eth_getStorageAt",
];

/// Ethereum JSON-RPC facade over a Thor client.
///
/// The chain tag is derived once from the genesis id at construction and never
/// changes for the lifetime of the provider.
pub struct Provider<C: ThorClient> {
    client: C,
    chain_tag: u8,
    genesis_timestamp: u64,
}

impl<C: ThorClient> Provider<C> {
    /// Build a provider over `client`, fetching the genesis descriptor once.
    pub async fn new(client: C) -> ProviderResult<Self> {
        let genesis = client.genesis().await?;
        let chain_tag = chain_tag(&genesis.id)?;
        tracing::debug!(chain_tag, genesis = %genesis.id, "provider ready");

        Ok(Self {
            client,
            chain_tag,
            genesis_timestamp: genesis.timestamp,
        })
    }

    /// The numeric chain identifier answered for `eth_chainId`
    pub fn chain_tag(&self) -> u8 {
        self.chain_tag
    }

    pub fn supports(method: &str) -> bool {
        SUPPORTED_METHODS.contains(&method)
    }

    /// The injected backing client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Dispatch one call and wrap the result in a response envelope, echoing
    /// the call id unchanged.
    pub async fn send(&self, call: RpcCall) -> ProviderResult<RpcResponse> {
        let result = self.handle(&call.method, &call.params).await?;
        Ok(RpcResponse { id: call.id, result })
    }

    /// Dispatch one call. Unknown methods fail before any backing-client
    /// call is made.
    pub async fn handle(&self, method: &str, params: &[Value]) -> ProviderResult<Value> {
        tracing::debug!(method, "dispatching");

        let result = match method {
            "eth_getBlockByHash" => self.get_block_by_hash(params).await,
            "eth_getBlockByNumber" => self.get_block_by_number(params).await,
            "eth_chainId" => Ok(json!(self.chain_tag)),
            "eth_getTransactionByHash" => self.get_transaction_by_hash(params).await,
            "eth_getBalance" => self.get_balance(params).await,
            "eth_blockNumber" => self.get_block_number().await,
            "eth_getCode" => self.get_code(params).await,
            "eth_syncing" => self.syncing().await,
            "eth_getTransactionReceipt" => self.get_transaction_receipt(params).await,
            "eth_getStorageAt" => self.get_storage_at(params).await,
            other => Err(ProviderError::MethodNotFound(other.to_string())),
        };

        if let Err(err) = &result {
            tracing::warn!(method, %err, "call failed");
        }
        result
    }

    async fn get_block_by_hash(&self, params: &[Value]) -> ProviderResult<Value> {
        let hash = formatter::param_str(params, 0, "block hash")?;
        match self.client.block(&Revision::Id(hash.to_string())).await? {
            Some(blk) => Ok(json!(eth_block(&blk))),
            None => Err(ProviderError::BlockNotFound(hash.to_string())),
        }
    }

    async fn get_block_by_number(&self, params: &[Value]) -> ProviderResult<Value> {
        let revision = formatter::block_revision(params.first())?;
        match self.client.block(&revision).await? {
            Some(blk) => Ok(json!(eth_block(&blk))),
            None => {
                // Report the caller's value; a bare/"latest" request reports
                // the literal tag.
                let requested = match revision {
                    Revision::Best => "latest".to_string(),
                    other => other.to_string(),
                };
                Err(ProviderError::BlockNotFound(requested))
            }
        }
    }

    async fn get_block_number(&self) -> ProviderResult<Value> {
        match self.client.block(&Revision::Best).await? {
            Some(blk) => Ok(json!(blk.number)),
            None => Err(ProviderError::BlockNotFound("latest".to_string())),
        }
    }

    async fn get_transaction_by_hash(&self, params: &[Value]) -> ProviderResult<Value> {
        let hash = formatter::param_str(params, 0, "transaction hash")?;
        match self.client.transaction(hash).await? {
            Some(tx) => Ok(json!(eth_transaction(&tx))),
            None => Err(ProviderError::TransactionNotFound(hash.to_string())),
        }
    }

    /// Absent receipt is a valid "not yet included" answer, not an error.
    async fn get_transaction_receipt(&self, params: &[Value]) -> ProviderResult<Value> {
        let hash = formatter::param_str(params, 0, "transaction hash")?;
        match self.client.receipt(hash).await? {
            Some(receipt) => Ok(json!(eth_receipt(&receipt))),
            None => Ok(Value::Null),
        }
    }

    async fn get_balance(&self, params: &[Value]) -> ProviderResult<Value> {
        formatter::default_block_param("getBalance", params, 2)?;
        let address = formatter::param_str(params, 0, "address")?;
        let account = self.client.account(address).await?;
        Ok(json!(account.balance))
    }

    async fn get_code(&self, params: &[Value]) -> ProviderResult<Value> {
        formatter::default_block_param("getCode", params, 2)?;
        let address = formatter::param_str(params, 0, "address")?;
        let code = self.client.code(address).await?;
        Ok(json!(code.code))
    }

    async fn get_storage_at(&self, params: &[Value]) -> ProviderResult<Value> {
        formatter::default_block_opt("getStorageAt", params, 3, "defaultBlock")?;
        let address = formatter::param_str(params, 0, "address")?;
        let key = formatter::to_bytes32(params.get(1))?;
        let storage = self.client.storage(address, &key).await?;
        Ok(json!(storage.value))
    }

    async fn syncing(&self) -> ProviderResult<Value> {
        let status = self.client.status().await?;
        if status.progress == 1.0 {
            return Ok(json!(false));
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Ok(json!({
            "currentBlock": status.head.number,
            "highestBlock": highest_block_estimate(self.genesis_timestamp, now),
            "head": status.head,
        }))
    }
}

/// Estimated chain height assuming one block every [`BLOCK_INTERVAL`] seconds
/// since genesis.
fn highest_block_estimate(genesis_timestamp: u64, now: u64) -> u64 {
    now.saturating_sub(genesis_timestamp) / BLOCK_INTERVAL
}

/// The chain tag is the low byte of the genesis id.
fn chain_tag(genesis_id: &str) -> ProviderResult<u8> {
    let digits = genesis_id.strip_prefix("0x").unwrap_or(genesis_id);
    let low = digits
        .get(digits.len().saturating_sub(2)..)
        .filter(|low| low.len() == 2)
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!("genesis id too short: {genesis_id}"))
        })?;

    u8::from_str_radix(low, 16).map_err(|_| {
        ClientError::InvalidResponse(format!("genesis id is not hex: {genesis_id}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_tag_is_low_byte_of_genesis_id() {
        let mainnet = "0x00000000851caf3cfdb6e899cf5958bfb1ac3413d346d43539627e6be7ec1b4a";
        assert_eq!(chain_tag(mainnet).unwrap(), 0x4a);

        let testnet = "0x000000000b2bce3c70bc649a02749e8687721b09ed2e15997f466536b20bb127";
        assert_eq!(chain_tag(testnet).unwrap(), 0x27);
    }

    #[test]
    fn test_chain_tag_rejects_malformed_ids() {
        assert!(chain_tag("0x4").is_err());
        assert!(chain_tag("").is_err());
        assert!(chain_tag("0xzz").is_err());
    }

    #[test]
    fn test_highest_block_estimate() {
        // 100 seconds of chain life at one block per 10 seconds
        assert_eq!(highest_block_estimate(1_000, 1_100), 10);
        assert_eq!(highest_block_estimate(1_000, 1_109), 10);
        assert_eq!(highest_block_estimate(1_000, 1_000), 0);
        // Clock behind genesis must not underflow
        assert_eq!(highest_block_estimate(2_000, 1_000), 0);
    }

    #[test]
    fn test_supported_method_surface() {
        assert_eq!(SUPPORTED_METHODS.len(), 10);
        assert!(super::Provider::<thor_client::HttpClient>::supports("eth_chainId"));
        assert!(!super::Provider::<thor_client::HttpClient>::supports("eth_sendTransaction"));
    }
}
