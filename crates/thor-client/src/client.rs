// thor-client/src/client.rs
use crate::types::*;
use crate::ClientResult;
use async_trait::async_trait;

/// Async interface to a Thor node.
///
/// Every call is independent; implementations hold no mutable state across
/// calls. Lookups return `Ok(None)` when the requested object does not exist,
/// reserving `Err` for transport and node failures.
#[async_trait]
pub trait ThorClient: Send + Sync {
    /// Retrieve a block by revision.
    async fn block(&self, revision: &Revision) -> ClientResult<Option<Block>>;

    /// Retrieve the state of an account.
    async fn account(&self, address: &str) -> ClientResult<Account>;

    /// Retrieve the bytecode of an account.
    async fn code(&self, address: &str) -> ClientResult<Code>;

    /// Retrieve one storage slot of an account. `key` must be a 32-byte hex
    /// string.
    async fn storage(&self, address: &str, key: &str) -> ClientResult<StorageValue>;

    /// Retrieve a transaction by id.
    async fn transaction(&self, id: &str) -> ClientResult<Option<Transaction>>;

    /// Retrieve the receipt of a transaction, `None` while the transaction is
    /// not yet included.
    async fn receipt(&self, id: &str) -> ClientResult<Option<Receipt>>;

    /// Retrieve the genesis block.
    async fn genesis(&self) -> ClientResult<Block>;

    /// Retrieve the sync status of the node.
    async fn status(&self) -> ClientResult<Status>;
}
