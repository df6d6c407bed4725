use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::{address, keccak256, Address, B256};
use async_trait::async_trait;

use tsd::calls::CallRequest;
use tsd::error::DelegationError;
use tsd::rpc::{EthRpc, TransactionReceipt};
use tsd::{StakingContracts, TxOptions};

#[allow(dead_code)]
pub const OWNER: Address = address!("923c5dbf353e99394a21aa7b67f3327ca111c67d");

#[allow(dead_code)]
pub const OPERATOR_1: Address = address!("1833a1a046db585d9c405ad93bfce085d43b2b04");

#[allow(dead_code)]
pub const OPERATOR_2: Address = address!("b4f78caa0ad8c8c700eaac42b68e5db4f9efeddf");

#[allow(dead_code)]
pub const OPERATOR_3: Address = address!("9f778b5d9b6e598e5a9dfb789500f6cf20e3203e");

#[allow(dead_code)]
pub const TOKEN: Address = address!("0101010101010101010101010101010101010101");

#[allow(dead_code)]
pub const TOKEN_STAKING: Address = address!("0202020202020202020202020202020202020202");

#[allow(dead_code)]
pub const OPERATOR_CONTRACT: Address = address!("0303030303030303030303030303030303030303");

#[allow(dead_code)]
pub fn contracts() -> StakingContracts {
    StakingContracts {
        token: TOKEN,
        token_staking: TOKEN_STAKING,
        operator_contract: OPERATOR_CONTRACT,
    }
}

/// Confirmation budgets shrunk so mock-backed waits finish instantly.
#[allow(dead_code)]
pub fn fast_options() -> TxOptions {
    TxOptions {
        polling_interval: Duration::from_millis(1),
        polling_timeout: Duration::from_secs(5),
        ..TxOptions::default()
    }
}

/// A transaction recorded by the mock transport.
#[derive(Clone, Debug)]
pub struct SentTx {
    pub from: Address,
    pub to: Address,
    pub data: Vec<u8>,
    pub hash: B256,
}

#[allow(dead_code)]
impl SentTx {
    pub fn selector(&self) -> [u8; 4] {
        self.data[..4].try_into().unwrap()
    }
}

#[derive(Default)]
struct MockState {
    sent: Vec<SentTx>,
    reject_selectors: Vec<[u8; 4]>,
    revert_selectors: Vec<[u8; 4]>,
    revert_patterns: Vec<Vec<u8>>,
    call_results: HashMap<[u8; 4], Vec<u8>>,
    receipts: HashMap<B256, TransactionReceipt>,
    block: u64,
}

/// In-memory transport standing in for a node.
///
/// Transactions are "mined" into the next block immediately; the block
/// number advances on every query so confirmation waits terminate.
#[derive(Clone, Default)]
pub struct MockRpc {
    state: Arc<Mutex<MockState>>,
}

#[allow(dead_code)]
impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the node reject submissions carrying this selector.
    pub fn reject_selector(&self, selector: [u8; 4]) {
        self.state.lock().unwrap().reject_selectors.push(selector);
    }

    /// Mines transactions carrying this selector with a failed status.
    pub fn revert_selector(&self, selector: [u8; 4]) {
        self.state.lock().unwrap().revert_selectors.push(selector);
    }

    /// Mines transactions whose calldata contains this byte pattern with a
    /// failed status.
    pub fn revert_containing(&self, pattern: &[u8]) {
        self.state
            .lock()
            .unwrap()
            .revert_patterns
            .push(pattern.to_vec());
    }

    /// Fixes the eth_call result for a view selector.
    pub fn set_call_result(&self, selector: [u8; 4], result: Vec<u8>) {
        self.state.lock().unwrap().call_results.insert(selector, result);
    }

    pub fn sent(&self) -> Vec<SentTx> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn sent_with_selector(&self, selector: [u8; 4]) -> Vec<SentTx> {
        self.sent()
            .into_iter()
            .filter(|tx| tx.selector() == selector)
            .collect()
    }
}

#[async_trait]
impl EthRpc for MockRpc {
    async fn call(&self, _from: Address, request: &CallRequest) -> Result<Vec<u8>, DelegationError> {
        let state = self.state.lock().unwrap();
        let selector: [u8; 4] = request.data[..4].try_into().unwrap();
        state
            .call_results
            .get(&selector)
            .cloned()
            .ok_or_else(|| DelegationError::InvalidResponse("no mock call result".into()))
    }

    async fn send_transaction(
        &self,
        from: Address,
        request: &CallRequest,
        _gas: u64,
    ) -> Result<B256, DelegationError> {
        let mut state = self.state.lock().unwrap();
        let selector: [u8; 4] = request.data[..4].try_into().unwrap();
        if state.reject_selectors.contains(&selector) {
            return Err(DelegationError::Rpc {
                code: -32000,
                message: "transaction rejected by mock".into(),
            });
        }

        let mut preimage = request.data.clone();
        preimage.extend_from_slice(from.as_slice());
        preimage.extend_from_slice(&(state.sent.len() as u64).to_be_bytes());
        let hash = keccak256(&preimage);

        let status = !state.revert_selectors.contains(&selector)
            && !state.revert_patterns.iter().any(|pattern| {
                request
                    .data
                    .windows(pattern.len())
                    .any(|window| window == pattern)
            });
        let block_number = state.block + 1;
        state.receipts.insert(
            hash,
            TransactionReceipt {
                status,
                block_number,
            },
        );
        state.sent.push(SentTx {
            from,
            to: request.to,
            data: request.data.clone(),
            hash,
        });
        Ok(hash)
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, DelegationError> {
        Ok(self.state.lock().unwrap().receipts.get(&hash).copied())
    }

    async fn block_number(&self) -> Result<u64, DelegationError> {
        let mut state = self.state.lock().unwrap();
        state.block += 1;
        Ok(state.block)
    }
}
