use alloy_primitives::{Address, U256};

use crate::abi;
use crate::calls::CallRequest;
use crate::state::DelegationPayload;

/// The signature of the token's approve-and-call method.
pub const APPROVE_AND_CALL_SIG: &str = "approveAndCall(address,uint256,bytes)";

/// Builds an approveAndCall on the staking token, carrying the delegation
/// payload through to the staking contract in one transaction.
pub fn approve_and_call(
    token: Address,
    staking_contract: Address,
    amount: U256,
    payload: &DelegationPayload,
) -> CallRequest {
    let extra_data = payload.to_bytes();
    let mut data = Vec::with_capacity(4 + 5 * abi::WORD + extra_data.len());
    data.extend_from_slice(&abi::selector(APPROVE_AND_CALL_SIG));
    data.extend_from_slice(&abi::encode_address(staking_contract));
    data.extend_from_slice(&abi::encode_uint(amount));
    data.extend_from_slice(&abi::encode_offset(3));
    data.extend_from_slice(&abi::encode_bytes(extra_data));
    CallRequest::new(token, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_bytes_ride_in_the_dynamic_tail() {
        let token = Address::repeat_byte(0x01);
        let staking = Address::repeat_byte(0x02);
        let payload = DelegationPayload::new(
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
            Address::repeat_byte(0xcc),
        );

        let call = approve_and_call(token, staking, U256::from(1u64), &payload);

        assert_eq!(call.to, token);
        assert_eq!(call.selector(), Some(abi::selector(APPROVE_AND_CALL_SIG)));
        // head: staking address, amount, offset to tail
        assert_eq!(
            abi::decode_uint(&call.data[68..100]).unwrap(),
            U256::from(3 * abi::WORD)
        );
        // tail: length word then the 60 payload bytes
        assert_eq!(
            abi::decode_uint(&call.data[100..132]).unwrap(),
            U256::from(60)
        );
        assert_eq!(&call.data[132..192], payload.to_bytes());
    }
}
