use alloy_primitives::{Address, U256};

use crate::abi;
use crate::calls::CallRequest;

/// The signature of the ERC20 approve method.
pub const APPROVE_SIG: &str = "approve(address,uint256)";

/// Builds an ERC20 approve call on the staking token.
pub fn approve(token: Address, spender: Address, amount: U256) -> CallRequest {
    let mut data = Vec::with_capacity(4 + 2 * abi::WORD);
    data.extend_from_slice(&abi::selector(APPROVE_SIG));
    data.extend_from_slice(&abi::encode_address(spender));
    data.extend_from_slice(&abi::encode_uint(amount));
    CallRequest::new(token, data)
}
