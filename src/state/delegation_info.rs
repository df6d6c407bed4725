use alloy_primitives::{Address, U256};

use crate::utils::display_amount;

/// Delegated-stake data for an operator, as reported by the staking contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegationInfo {
    /// Tokens staked on the operator, in base units
    pub staked_balance: U256,

    /// The owner that delegated the stake
    pub owner: Address,

    /// The address receiving the staking rewards
    pub beneficiary: Address,
}

impl DelegationInfo {
    /// Whole-token balance for display, or `None` when nothing is staked.
    ///
    /// Dashboards leave the balance element empty for a zero stake rather
    /// than printing "0".
    pub fn formatted_balance(&self, decimals: u8) -> Option<String> {
        if self.staked_balance.is_zero() {
            return None;
        }
        Some(display_amount(self.staked_balance, decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOKEN_DECIMALS;

    #[test]
    fn zero_balance_formats_as_none() {
        let info = DelegationInfo {
            staked_balance: U256::ZERO,
            owner: Address::repeat_byte(0x11),
            beneficiary: Address::repeat_byte(0x22),
        };
        assert_eq!(info.formatted_balance(TOKEN_DECIMALS), None);
    }

    #[test]
    fn nonzero_balance_formats_in_whole_tokens() {
        let info = DelegationInfo {
            staked_balance: U256::from(5u64) * U256::from(10u64).pow(U256::from(18u64)),
            owner: Address::repeat_byte(0x11),
            beneficiary: Address::repeat_byte(0x22),
        };
        assert_eq!(info.formatted_balance(18).as_deref(), Some("5"));
    }
}
