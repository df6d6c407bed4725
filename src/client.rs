//! Typed client for the staking platform contracts.
//!
//! The approve-then-delegate sequence is enforced by construction: the only
//! way to obtain an [`Approval`] is a confirmed, successful approve
//! transaction, and [`StakingClient::stake`] consumes it. A rejected approval
//! leaves the delegate step unreachable.

use std::time::Duration;

use alloy_primitives::{Address, B256, U256};
use log::{debug, info};
use tokio::time::Instant;

use crate::artifacts::StakingContracts;
use crate::calls;
use crate::consts::{
    CONFIRMATION_BLOCKS, DEFAULT_GAS, TRANSACTION_BLOCK_TIMEOUT, TRANSACTION_POLLING_INTERVAL_MS,
    TRANSACTION_POLLING_TIMEOUT_SECS,
};
use crate::error::DelegationError;
use crate::rpc::{EthRpc, TransactionReceipt};
use crate::state::{DelegationInfo, DelegationPayload};

/// Transaction budgets applied to every state-changing call.
#[derive(Clone, Copy, Debug)]
pub struct TxOptions {
    pub gas: u64,
    pub confirmation_blocks: u64,
    pub block_timeout: u64,
    pub polling_interval: Duration,
    pub polling_timeout: Duration,
}

impl Default for TxOptions {
    fn default() -> Self {
        Self {
            gas: DEFAULT_GAS,
            confirmation_blocks: CONFIRMATION_BLOCKS,
            block_timeout: TRANSACTION_BLOCK_TIMEOUT,
            polling_interval: Duration::from_millis(TRANSACTION_POLLING_INTERVAL_MS),
            polling_timeout: Duration::from_secs(TRANSACTION_POLLING_TIMEOUT_SECS),
        }
    }
}

/// Witness of a confirmed, successful token approval.
///
/// Cannot be constructed outside this module; holding one proves the approve
/// transaction was observed to succeed.
#[derive(Debug)]
pub struct Approval {
    owner: Address,
    amount: U256,
    tx_hash: B256,
}

impl Approval {
    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }

    pub fn tx_hash(&self) -> B256 {
        self.tx_hash
    }
}

/// Client for staking, authorization, and delegation queries.
pub struct StakingClient<R> {
    rpc: R,
    contracts: StakingContracts,
    options: TxOptions,
}

impl<R: EthRpc> StakingClient<R> {
    pub fn new(rpc: R, contracts: StakingContracts) -> Self {
        Self::with_options(rpc, contracts, TxOptions::default())
    }

    pub fn with_options(rpc: R, contracts: StakingContracts, options: TxOptions) -> Self {
        Self {
            rpc,
            contracts,
            options,
        }
    }

    pub fn contracts(&self) -> &StakingContracts {
        &self.contracts
    }

    /// Approves the staking contract to pull `amount` from `owner`'s tokens.
    ///
    /// Returns the approval witness only once the transaction is confirmed
    /// and succeeded.
    pub async fn approve(&self, owner: Address, amount: U256) -> Result<Approval, DelegationError> {
        let call = calls::approve(self.contracts.token, self.contracts.token_staking, amount);
        let tx_hash = self
            .rpc
            .send_transaction(owner, &call, self.options.gas)
            .await?;
        debug!("approve tx {tx_hash} submitted for owner {owner}");
        match self.wait_for_confirmations(tx_hash).await {
            Err(DelegationError::TransactionReverted(hash)) => {
                Err(DelegationError::ApprovalRejected(hash))
            }
            Err(e) => Err(e),
            Ok(_) => Ok(Approval {
                owner,
                amount,
                tx_hash,
            }),
        }
    }

    /// Completes a witnessed approval by delegating the stake.
    ///
    /// Consumes the approval, so each one funds exactly one delegate call.
    pub async fn stake(
        &self,
        approval: Approval,
        payload: &DelegationPayload,
    ) -> Result<B256, DelegationError> {
        let call = calls::receive_approval(
            self.contracts.token_staking,
            approval.owner,
            approval.amount,
            self.contracts.token,
            payload,
        );
        let tx_hash = self
            .rpc
            .send_transaction(approval.owner, &call, self.options.gas)
            .await?;
        self.wait_for_confirmations(tx_hash).await?;
        info!(
            "staked on operator {} (approval {})",
            payload.operator(),
            approval.tx_hash
        );
        Ok(tx_hash)
    }

    /// Stakes in a single transaction via the token's approveAndCall.
    pub async fn approve_and_call(
        &self,
        owner: Address,
        amount: U256,
        payload: &DelegationPayload,
    ) -> Result<B256, DelegationError> {
        let call = calls::approve_and_call(
            self.contracts.token,
            self.contracts.token_staking,
            amount,
            payload,
        );
        let tx_hash = self
            .rpc
            .send_transaction(owner, &call, self.options.gas)
            .await?;
        self.wait_for_confirmations(tx_hash).await?;
        Ok(tx_hash)
    }

    /// Authorizes the operator contract for an operator account.
    pub async fn authorize_operator_contract(
        &self,
        authorizer: Address,
        operator: Address,
    ) -> Result<B256, DelegationError> {
        let call = calls::authorize_operator_contract(
            self.contracts.token_staking,
            operator,
            self.contracts.operator_contract,
        );
        let tx_hash = self
            .rpc
            .send_transaction(authorizer, &call, self.options.gas)
            .await?;
        self.wait_for_confirmations(tx_hash).await?;
        Ok(tx_hash)
    }

    /// Fetches the delegated-stake data displayed for an operator.
    pub async fn delegation_info_of(
        &self,
        viewer: Address,
        operator: Address,
    ) -> Result<DelegationInfo, DelegationError> {
        let staking = self.contracts.token_staking;
        let balance = self
            .rpc
            .call(viewer, &calls::balance_of(staking, operator))
            .await?;
        let owner = self
            .rpc
            .call(viewer, &calls::owner_of(staking, operator))
            .await?;
        let beneficiary = self
            .rpc
            .call(viewer, &calls::beneficiary_of(staking, operator))
            .await?;
        Ok(DelegationInfo {
            staked_balance: crate::abi::decode_uint(&balance)?,
            owner: crate::abi::decode_address(&owner)?,
            beneficiary: crate::abi::decode_address(&beneficiary)?,
        })
    }

    /// Waits until a transaction is mined with the configured number of
    /// confirmation blocks on top, within the block and wall-clock budgets.
    pub async fn wait_for_confirmations(
        &self,
        tx_hash: B256,
    ) -> Result<TransactionReceipt, DelegationError> {
        let deadline = Instant::now() + self.options.polling_timeout;
        let submitted_at = self.rpc.block_number().await?;

        let receipt = loop {
            if let Some(receipt) = self.rpc.transaction_receipt(tx_hash).await? {
                break receipt;
            }
            let head = self.rpc.block_number().await?;
            if head.saturating_sub(submitted_at) > self.options.block_timeout
                || Instant::now() >= deadline
            {
                return Err(DelegationError::ConfirmationTimeout(tx_hash));
            }
            tokio::time::sleep(self.options.polling_interval).await;
        };

        if !receipt.status {
            return Err(DelegationError::TransactionReverted(tx_hash));
        }

        let confirmed_at = receipt.block_number + self.options.confirmation_blocks;
        loop {
            if self.rpc.block_number().await? >= confirmed_at {
                return Ok(receipt);
            }
            if Instant::now() >= deadline {
                return Err(DelegationError::ConfirmationTimeout(tx_hash));
            }
            tokio::time::sleep(self.options.polling_interval).await;
        }
    }
}
