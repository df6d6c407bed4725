use alloy_primitives::U256;

use crate::error::DelegationError;

/// Converts whole tokens to base units (`whole * 10^decimals`).
pub fn token_amount(whole: u64, decimals: u8) -> Result<U256, DelegationError> {
    let scale = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(DelegationError::AmountOverflow)?;
    U256::from(whole)
        .checked_mul(scale)
        .ok_or(DelegationError::AmountOverflow)
}

/// Renders base units as a whole-token amount, truncating dust.
///
/// A scale too large for 256 bits exceeds any representable balance, so the
/// whole-token amount is "0".
pub fn display_amount(base_units: U256, decimals: u8) -> String {
    match U256::from(10u64).checked_pow(U256::from(decimals)) {
        Some(scale) => (base_units / scale).to_string(),
        None => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_STAKE_TOKENS, TOKEN_DECIMALS};

    #[test]
    fn default_stake_scales_to_base_units() {
        let amount = token_amount(DEFAULT_STAKE_TOKENS, TOKEN_DECIMALS).unwrap();
        assert_eq!(
            amount.to_string(),
            "20000000000000000000000000" // 20M tokens at 18 decimals
        );
    }

    #[test]
    fn display_is_the_inverse_of_token_amount() {
        let amount = token_amount(1234, TOKEN_DECIMALS).unwrap();
        assert_eq!(display_amount(amount, TOKEN_DECIMALS), "1234");
    }

    #[test]
    fn dust_truncates_toward_zero() {
        let just_under_two = token_amount(2, 18).unwrap() - U256::from(1u64);
        assert_eq!(display_amount(just_under_two, 18), "1");
    }

    #[test]
    fn absurd_decimals_overflow() {
        assert!(token_amount(u64::MAX, 255).is_err());
    }

    #[test]
    fn display_with_overflowing_scale_is_zero_not_wrapped() {
        // 10^255 exceeds 256 bits; a wrapping pow would divide by garbage.
        assert_eq!(display_amount(U256::MAX, 255), "0");
        assert_eq!(display_amount(U256::MAX, 78), "0");
    }
}
