//! JSON-RPC transport to the node hosting the staking contracts.
//!
//! All on-chain reads and writes flow through the [`EthRpc`] trait so the
//! client logic can be driven by a mock transport in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::{hex, Address, B256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::calls::CallRequest;
use crate::error::DelegationError;

/// A mined transaction receipt, reduced to what confirmation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Whether the transaction succeeded
    pub status: bool,
    /// The block the transaction was included in
    pub block_number: u64,
}

#[async_trait]
pub trait EthRpc: Send + Sync {
    /// Executes a read-only contract call at the latest block.
    async fn call(&self, from: Address, request: &CallRequest) -> Result<Vec<u8>, DelegationError>;

    /// Submits a state-changing transaction, returning its hash.
    async fn send_transaction(
        &self,
        from: Address,
        request: &CallRequest,
        gas: u64,
    ) -> Result<B256, DelegationError>;

    /// The receipt of a transaction, or `None` while it is still pending.
    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, DelegationError>;

    /// The latest block number.
    async fn block_number(&self) -> Result<u64, DelegationError>;
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct RawReceipt {
    status: Option<String>,
    #[serde(rename = "blockNumber")]
    block_number: Option<String>,
}

/// HTTP JSON-RPC transport.
pub struct HttpRpc {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpRpc {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, DelegationError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        let response: RpcResponse = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;
        if let Some(error) = response.error {
            return Err(DelegationError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response
            .result
            .ok_or_else(|| DelegationError::InvalidResponse(format!("{method}: empty result")))
    }

    /// The chain id reported by the node.
    pub async fn chain_id(&self) -> Result<u64, DelegationError> {
        let result = self.request("eth_chainId", json!([])).await?;
        parse_quantity(&expect_string(result)?)
    }

    /// Installs the signer key on the node and unlocks the derived account.
    ///
    /// The key text is handed to the node and never logged.
    pub async fn import_signer_key(&self, key_hex: &str) -> Result<Address, DelegationError> {
        let key = key_hex.trim().trim_start_matches("0x");
        let result = self
            .request("personal_importRawKey", json!([key, ""]))
            .await?;
        let address = expect_string(result)?
            .parse::<Address>()
            .map_err(|e| DelegationError::InvalidResponse(e.to_string()))?;
        self.request("personal_unlockAccount", json!([address, "", 0]))
            .await?;
        Ok(address)
    }
}

#[async_trait]
impl EthRpc for HttpRpc {
    async fn call(&self, from: Address, request: &CallRequest) -> Result<Vec<u8>, DelegationError> {
        let params = json!([
            {
                "from": from,
                "to": request.to,
                "data": hex::encode_prefixed(&request.data),
            },
            "latest"
        ]);
        let result = self.request("eth_call", params).await?;
        hex::decode(expect_string(result)?)
            .map_err(|e| DelegationError::InvalidResponse(e.to_string()))
    }

    async fn send_transaction(
        &self,
        from: Address,
        request: &CallRequest,
        gas: u64,
    ) -> Result<B256, DelegationError> {
        let params = json!([{
            "from": from,
            "to": request.to,
            "gas": to_quantity(gas),
            "value": format!("{:#x}", request.value),
            "data": hex::encode_prefixed(&request.data),
        }]);
        let result = self.request("eth_sendTransaction", params).await?;
        expect_string(result)?
            .parse::<B256>()
            .map_err(|e| DelegationError::InvalidResponse(e.to_string()))
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, DelegationError> {
        let result = self
            .request("eth_getTransactionReceipt", json!([hash]))
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        let raw: RawReceipt = serde_json::from_value(result)
            .map_err(|e| DelegationError::InvalidResponse(e.to_string()))?;
        let block_number = match raw.block_number {
            Some(number) => parse_quantity(&number)?,
            // Mined receipts always carry a block number; treat its absence
            // as still pending.
            None => return Ok(None),
        };
        let status = match raw.status.as_deref() {
            Some("0x0") => false,
            _ => true,
        };
        Ok(Some(TransactionReceipt {
            status,
            block_number,
        }))
    }

    async fn block_number(&self) -> Result<u64, DelegationError> {
        let result = self.request("eth_blockNumber", json!([])).await?;
        parse_quantity(&expect_string(result)?)
    }
}

fn expect_string(value: serde_json::Value) -> Result<String, DelegationError> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        other => Err(DelegationError::InvalidResponse(format!(
            "expected string, got {other}"
        ))),
    }
}

fn to_quantity(value: u64) -> String {
    format!("{value:#x}")
}

fn parse_quantity(text: &str) -> Result<u64, DelegationError> {
    u64::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|e| DelegationError::InvalidResponse(format!("bad quantity {text}: {e}")))
}
