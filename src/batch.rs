//! Batch staking and authorization of operator accounts.
//!
//! Each operator is handled end to end before the next step fires:
//! stake, wait for confirmation, then authorize. Authorization must never
//! race an unconfirmed staking transaction for the same account.

use alloy_primitives::{Address, U256};
use log::{error, info};

use crate::client::StakingClient;
use crate::error::DelegationError;
use crate::rpc::EthRpc;
use crate::state::DelegationPayload;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct StakeRun {
    /// Operators staked and authorized
    pub staked: Vec<Address>,
    /// Operators that failed, with the error that stopped them
    pub failures: Vec<(Address, DelegationError)>,
}

impl StakeRun {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Stakes `amount` base units on each operator and authorizes the operator
/// contract for it, on behalf of `owner`.
///
/// The owner acts as both beneficiary and authorizer. One account's failure
/// is recorded and does not stop the remaining accounts.
pub async fn stake_and_authorize<R: EthRpc>(
    client: &StakingClient<R>,
    owner: Address,
    operators: &[Address],
    amount: U256,
) -> StakeRun {
    let mut run = StakeRun::default();

    for &operator in operators {
        match stake_one(client, owner, operator, amount).await {
            Ok(()) => run.staked.push(operator),
            Err(e) => {
                error!("operator {operator}: {e}");
                run.failures.push((operator, e));
            }
        }
    }

    info!(
        "batch complete: {} staked, {} failed",
        run.staked.len(),
        run.failures.len()
    );
    run
}

async fn stake_one<R: EthRpc>(
    client: &StakingClient<R>,
    owner: Address,
    operator: Address,
    amount: U256,
) -> Result<(), DelegationError> {
    let payload = DelegationPayload::new(owner, operator, owner);

    info!("staking on operator account {operator}");
    let stake_tx = client.approve_and_call(owner, amount, &payload).await?;
    info!("operator {operator} staked in tx {stake_tx}");

    info!(
        "authorizing operator contract {} for operator {operator}",
        client.contracts().operator_contract
    );
    let authorize_tx = client.authorize_operator_contract(owner, operator).await?;
    info!("operator {operator} authorized in tx {authorize_tx}");

    Ok(())
}
