use alloy_primitives::Address;

use crate::abi;
use crate::calls::CallRequest;

/// The signature of the staking contract's operator authorization method.
pub const AUTHORIZE_OPERATOR_CONTRACT_SIG: &str = "authorizeOperatorContract(address,address)";

/// Builds the call authorizing an operator contract for an operator account.
pub fn authorize_operator_contract(
    staking_contract: Address,
    operator: Address,
    operator_contract: Address,
) -> CallRequest {
    let mut data = Vec::with_capacity(4 + 2 * abi::WORD);
    data.extend_from_slice(&abi::selector(AUTHORIZE_OPERATOR_CONTRACT_SIG));
    data.extend_from_slice(&abi::encode_address(operator));
    data.extend_from_slice(&abi::encode_address(operator_contract));
    CallRequest::new(staking_contract, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_encodes_operator_then_operator_contract() {
        let staking = Address::repeat_byte(0x0a);
        let operator = Address::repeat_byte(0x0b);
        let operator_contract = Address::repeat_byte(0x0c);

        let call = authorize_operator_contract(staking, operator, operator_contract);

        assert_eq!(call.to, staking);
        assert_eq!(
            call.selector(),
            Some(abi::selector(AUTHORIZE_OPERATOR_CONTRACT_SIG))
        );
        assert_eq!(&call.data[4..36], &abi::encode_address(operator));
        assert_eq!(&call.data[36..], &abi::encode_address(operator_contract));
    }
}
