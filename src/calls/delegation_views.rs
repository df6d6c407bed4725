//! View calls backing the delegated-stake dashboard data.

use alloy_primitives::Address;

use crate::abi;
use crate::calls::CallRequest;

pub const BALANCE_OF_SIG: &str = "balanceOf(address)";
pub const OWNER_OF_SIG: &str = "ownerOf(address)";
pub const BENEFICIARY_OF_SIG: &str = "beneficiaryOf(address)";

fn single_address_call(staking_contract: Address, signature: &str, subject: Address) -> CallRequest {
    let mut data = Vec::with_capacity(4 + abi::WORD);
    data.extend_from_slice(&abi::selector(signature));
    data.extend_from_slice(&abi::encode_address(subject));
    CallRequest::new(staking_contract, data)
}

/// Builds the staked-balance query for an operator.
pub fn balance_of(staking_contract: Address, operator: Address) -> CallRequest {
    single_address_call(staking_contract, BALANCE_OF_SIG, operator)
}

/// Builds the delegation-owner query for an operator.
pub fn owner_of(staking_contract: Address, operator: Address) -> CallRequest {
    single_address_call(staking_contract, OWNER_OF_SIG, operator)
}

/// Builds the reward-beneficiary query for an operator.
pub fn beneficiary_of(staking_contract: Address, operator: Address) -> CallRequest {
    single_address_call(staking_contract, BENEFICIARY_OF_SIG, operator)
}
