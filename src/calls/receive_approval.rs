use alloy_primitives::{Address, U256};

use crate::abi;
use crate::calls::CallRequest;
use crate::state::DelegationPayload;

/// The signature of the staking contract's token-approval callback.
pub const RECEIVE_APPROVAL_SIG: &str = "receiveApproval(address,uint256,address,bytes)";

/// Builds the receiveApproval call that completes a previously approved
/// delegation on the staking contract.
pub fn receive_approval(
    staking_contract: Address,
    owner: Address,
    amount: U256,
    token: Address,
    payload: &DelegationPayload,
) -> CallRequest {
    let extra_data = payload.to_bytes();
    let mut data = Vec::with_capacity(4 + 6 * abi::WORD + extra_data.len());
    data.extend_from_slice(&abi::selector(RECEIVE_APPROVAL_SIG));
    data.extend_from_slice(&abi::encode_address(owner));
    data.extend_from_slice(&abi::encode_uint(amount));
    data.extend_from_slice(&abi::encode_address(token));
    data.extend_from_slice(&abi::encode_offset(4));
    data.extend_from_slice(&abi::encode_bytes(extra_data));
    CallRequest::new(staking_contract, data)
}
