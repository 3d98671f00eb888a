// thor-client/src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup key for block retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The best (most recent) block
    Best,
    /// Block height
    Number(u64),
    /// 32-byte block id
    Id(String),
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Best => write!(f, "best"),
            Revision::Number(n) => write!(f, "{}", n),
            Revision::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A Thor block as returned by the node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block id (32-byte hex, encodes the height in the first 4 bytes)
    pub id: String,
    /// Block height
    pub number: u64,
    /// RLP-encoded size in bytes
    pub size: u64,
    /// Id of the parent block
    #[serde(rename = "parentID")]
    pub parent_id: String,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    pub gas_limit: u64,
    /// Address receiving block rewards
    pub beneficiary: String,
    pub gas_used: u64,
    pub total_score: u64,
    pub txs_root: String,
    pub state_root: String,
    pub receipts_root: String,
    /// Address of the block proposer
    pub signer: String,
    /// Transaction ids included in the block
    #[serde(default)]
    pub transactions: Vec<String>,
}

/// A single clause of a Thor transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    /// Recipient, `None` for contract creation
    pub to: Option<String>,
    /// Amount in wei as a hex string
    pub value: String,
    /// Call data
    pub data: String,
}

/// Block context a transaction or receipt was found in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxMeta {
    #[serde(rename = "blockID")]
    pub block_id: String,
    pub block_number: u64,
    pub block_timestamp: u64,
}

/// A Thor transaction as returned by the node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction id (32-byte hex)
    pub id: String,
    pub chain_tag: u8,
    pub block_ref: String,
    pub expiration: u32,
    /// One transaction carries one or more clauses
    pub clauses: Vec<Clause>,
    pub gas_price_coef: u8,
    pub gas: u64,
    /// Sender address
    pub origin: String,
    pub nonce: String,
    pub depends_on: Option<String>,
    pub size: u64,
    pub meta: TxMeta,
}

/// Per-clause execution output in a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Created contract address, if the clause deployed one
    pub contract_address: Option<String>,
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
    #[serde(default)]
    pub transfers: Vec<serde_json::Value>,
}

/// Block and transaction context of a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptMeta {
    #[serde(rename = "blockID")]
    pub block_id: String,
    pub block_number: u64,
    pub block_timestamp: u64,
    #[serde(rename = "txID")]
    pub tx_id: String,
    pub tx_origin: String,
}

/// A Thor transaction receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub gas_used: u64,
    /// Account that paid for the gas (may differ from the origin)
    pub gas_payer: String,
    /// Energy paid, hex string
    pub paid: String,
    /// Reward to the block proposer, hex string
    pub reward: String,
    /// Whether execution was reverted
    pub reverted: bool,
    /// One output per clause; empty when reverted
    #[serde(default)]
    pub outputs: Vec<Output>,
    pub meta: ReceiptMeta,
}

/// Account state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// VET balance in wei as a hex string
    pub balance: String,
    /// VTHO balance in wei as a hex string
    pub energy: String,
    pub has_code: bool,
}

/// Contract bytecode of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Code {
    pub code: String,
}

/// A single storage slot value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageValue {
    pub value: String,
}

/// Summary of the head block, part of [`Status`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadBlock {
    pub id: String,
    pub number: u64,
    pub timestamp: u64,
    #[serde(rename = "parentID")]
    pub parent_id: String,
}

/// Sync status of the node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    /// Sync progress in `0..=1`; `1` means fully synced
    pub progress: f64,
    pub head: HeadBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_display() {
        assert_eq!(Revision::Best.to_string(), "best");
        assert_eq!(Revision::Number(11473393).to_string(), "11473393");

        let id = "0x00af11f1090c43dcb9e23f3acd04fb9271ac08df0e1303711a851c03a960d571";
        assert_eq!(Revision::Id(id.to_string()).to_string(), id);
    }

    #[test]
    fn test_block_deserializes_thorest_fields() {
        let raw = serde_json::json!({
            "id": "0x00000000851caf3cfdb6e899cf5958bfb1ac3413d346d43539627e6be7ec1b4a",
            "number": 0,
            "size": 170,
            "parentID": "0xffffffff53616c757465202620526573706563742c20526f62657274204c2e20",
            "timestamp": 1530316800,
            "gasLimit": 10000000,
            "beneficiary": "0x0000000000000000000000000000000000000000",
            "gasUsed": 0,
            "totalScore": 0,
            "txsRoot": "0x45b0cfc220ceec5b7c1c62c4d4193d38e4eba48e8815729ce75f9c0ab0e4c1c0",
            "stateRoot": "0x09bfdf9e24dd5cd5b63f3c1b5d58b97ff02ca0490214a021ed7d99b93867839c",
            "receiptsRoot": "0x45b0cfc220ceec5b7c1c62c4d4193d38e4eba48e8815729ce75f9c0ab0e4c1c0",
            "signer": "0x0000000000000000000000000000000000000000",
            "transactions": []
        });

        let blk: Block = serde_json::from_value(raw).unwrap();
        assert_eq!(blk.number, 0);
        assert!(blk.parent_id.starts_with("0xffffffff"));
        assert!(blk.transactions.is_empty());
    }

    #[test]
    fn test_receipt_meta_tx_fields() {
        let raw = serde_json::json!({
            "gasUsed": 21000,
            "gasPayer": "0x7567d83b7b8d80addcb281a71d54fc7b3364ffed",
            "paid": "0x1b5b8c4e33f51f5e8",
            "reward": "0x835107ddc5bdf3e8",
            "reverted": false,
            "outputs": [],
            "meta": {
                "blockID": "0x00003abbf8435573e0c50fed42647160eabbe140a87efbe0ffab8ef895b7686e",
                "blockNumber": 15035,
                "blockTimestamp": 1530164750,
                "txID": "0x9daa5b584a98976dfca3d70348b44ba5332f966e187ba84510efb810a0f9f851",
                "txOrigin": "0x7567d83b7b8d80addcb281a71d54fc7b3364ffed"
            }
        });

        let receipt: Receipt = serde_json::from_value(raw).unwrap();
        assert_eq!(receipt.meta.block_number, 15035);
        assert!(!receipt.reverted);
    }
}
