// thor-client/src/http.rs
use crate::client::ThorClient;
use crate::types::*;
use crate::{ClientError, ClientResult, BLOCK_INTERVAL};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Configuration for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Thorest API, e.g. `https://mainnet.veblocks.net`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8669".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`ThorClient`] implementation over the Thorest REST API
pub struct HttpClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Client against `base_url` with default settings
    pub fn connect(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        resp.json::<T>().await.map_err(ClientError::from)
    }
}

#[async_trait]
impl ThorClient for HttpClient {
    async fn block(&self, revision: &Revision) -> ClientResult<Option<Block>> {
        // Thorest answers a literal `null` body for unknown revisions
        self.get(&format!("blocks/{}", revision)).await
    }

    async fn account(&self, address: &str) -> ClientResult<Account> {
        self.get(&format!("accounts/{}", address)).await
    }

    async fn code(&self, address: &str) -> ClientResult<Code> {
        self.get(&format!("accounts/{}/code", address)).await
    }

    async fn storage(&self, address: &str, key: &str) -> ClientResult<StorageValue> {
        self.get(&format!("accounts/{}/storage/{}", address, key)).await
    }

    async fn transaction(&self, id: &str) -> ClientResult<Option<Transaction>> {
        self.get(&format!("transactions/{}", id)).await
    }

    async fn receipt(&self, id: &str) -> ClientResult<Option<Receipt>> {
        self.get(&format!("transactions/{}/receipt", id)).await
    }

    async fn genesis(&self) -> ClientResult<Block> {
        self.block(&Revision::Number(0))
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("node has no genesis block".into()))
    }

    async fn status(&self) -> ClientResult<Status> {
        let head = self
            .block(&Revision::Best)
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("node has no best block".into()))?;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Ok(Status {
            progress: sync_progress(head.timestamp, now),
            head: HeadBlock {
                id: head.id,
                number: head.number,
                timestamp: head.timestamp,
                parent_id: head.parent_id,
            },
        })
    }
}

/// A head within two block intervals of the wall clock counts as fully synced;
/// otherwise progress is the elapsed-time ratio.
fn sync_progress(head_timestamp: u64, now: u64) -> f64 {
    if now <= head_timestamp + 2 * BLOCK_INTERVAL {
        return 1.0;
    }
    head_timestamp as f64 / now as f64
}
