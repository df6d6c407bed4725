//! Minimal ABI encoding for the handful of staking contract methods in use.
//!
//! Only what the call builders need: 4-byte selectors, static address/uint
//! words, and a single trailing dynamic `bytes` argument.

use alloy_primitives::{keccak256, Address, U256};

use crate::error::DelegationError;

/// The size of an ABI word.
pub const WORD: usize = 32;

/// First four bytes of the keccak-256 hash of the method signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// An address, left-padded to a full word.
pub fn encode_address(address: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// A uint256 as a big-endian word.
pub fn encode_uint(value: U256) -> [u8; WORD] {
    value.to_be_bytes()
}

/// The head word pointing at the dynamic tail, given the head size in words.
pub fn encode_offset(head_words: usize) -> [u8; WORD] {
    encode_uint(U256::from(head_words * WORD))
}

/// The tail of a dynamic `bytes` argument: length word plus right-padded data.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(WORD) * WORD;
    let mut out = Vec::with_capacity(WORD + padded_len);
    out.extend_from_slice(&encode_uint(U256::from(data.len())));
    out.extend_from_slice(data);
    out.resize(WORD + padded_len, 0);
    out
}

/// Decodes a single returned uint256 word.
pub fn decode_uint(data: &[u8]) -> Result<U256, DelegationError> {
    if data.len() != WORD {
        return Err(DelegationError::InvalidAbiWord {
            expected: WORD,
            actual: data.len(),
        });
    }
    Ok(U256::from_be_slice(data))
}

/// Decodes a single returned address word.
pub fn decode_address(data: &[u8]) -> Result<Address, DelegationError> {
    if data.len() != WORD {
        return Err(DelegationError::InvalidAbiWord {
            expected: WORD,
            actual: data.len(),
        });
    }
    Ok(Address::from_slice(&data[12..]))
}
