// provider/src/convert.rs

//! Output shape converters: pure mappings from Thor objects to the Ethereum
//! JSON-RPC result shapes the caller expects.
//!
//! Callers speak in `hash`/`parentHash`, Thor speaks in `id`/`parentID`; the
//! converted shapes carry both spellings with equal values. Block numbers and
//! timestamps cross the boundary as plain numbers, gas and value fields as
//! hex strings.

use serde::{Deserialize, Serialize};
use thor_client::{Block, Clause, Receipt, Transaction};

/// Block in the caller-facing shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthBlock {
    pub hash: String,
    pub id: String,
    pub number: u64,
    pub parent_hash: String,
    #[serde(rename = "parentID")]
    pub parent_id: String,
    pub timestamp: u64,
    pub gas_limit: String,
    pub gas_used: String,
    pub miner: String,
    pub size: u64,
    pub state_root: String,
    pub receipts_root: String,
    pub transactions_root: String,
    pub transactions: Vec<String>,
}

/// Transaction in the caller-facing shape.
///
/// A single-clause transaction flattens into `to`/`value`/`input`. Transactions
/// with any other clause count keep those fields null and expose the raw
/// `clauses` array instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    pub hash: String,
    pub block_hash: String,
    pub block_number: u64,
    pub from: String,
    pub gas: String,
    pub nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clauses: Option<Vec<Clause>>,
}

/// Receipt in the caller-facing shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthReceipt {
    pub transaction_hash: String,
    pub block_hash: String,
    pub block_number: u64,
    pub from: String,
    pub gas_used: String,
    pub gas_payer: String,
    /// `0x1` on success, `0x0` when execution reverted
    pub status: String,
    pub contract_address: Option<String>,
}

fn hex_u64(value: u64) -> String {
    format!("0x{value:x}")
}

/// Convert a Thor block, aliasing `id` to `hash` and `parentID` to
/// `parentHash`.
pub fn eth_block(blk: &Block) -> EthBlock {
    EthBlock {
        hash: blk.id.clone(),
        id: blk.id.clone(),
        number: blk.number,
        parent_hash: blk.parent_id.clone(),
        parent_id: blk.parent_id.clone(),
        timestamp: blk.timestamp,
        gas_limit: hex_u64(blk.gas_limit),
        gas_used: hex_u64(blk.gas_used),
        miner: blk.signer.clone(),
        size: blk.size,
        state_root: blk.state_root.clone(),
        receipts_root: blk.receipts_root.clone(),
        transactions_root: blk.txs_root.clone(),
        transactions: blk.transactions.clone(),
    }
}

/// Convert a Thor transaction, flattening a single clause into top-level
/// `to`/`value`/`input`.
pub fn eth_transaction(tx: &Transaction) -> EthTransaction {
    let (to, value, input, clauses) = match tx.clauses.as_slice() {
        [clause] => (
            clause.to.clone(),
            Some(clause.value.clone()),
            Some(clause.data.clone()),
            None,
        ),
        _ => (None, None, None, Some(tx.clauses.clone())),
    };

    EthTransaction {
        hash: tx.id.clone(),
        block_hash: tx.meta.block_id.clone(),
        block_number: tx.meta.block_number,
        from: tx.origin.clone(),
        gas: hex_u64(tx.gas),
        nonce: tx.nonce.clone(),
        to,
        value,
        input,
        clauses,
    }
}

/// Convert a Thor receipt, mapping the `reverted` flag to the Ethereum
/// `status` field.
pub fn eth_receipt(receipt: &Receipt) -> EthReceipt {
    EthReceipt {
        transaction_hash: receipt.meta.tx_id.clone(),
        block_hash: receipt.meta.block_id.clone(),
        block_number: receipt.meta.block_number,
        from: receipt.meta.tx_origin.clone(),
        gas_used: hex_u64(receipt.gas_used),
        gas_payer: receipt.gas_payer.clone(),
        status: if receipt.reverted { "0x0".into() } else { "0x1".into() },
        contract_address: receipt
            .outputs
            .first()
            .and_then(|out| out.contract_address.clone()),
    }
}
