use alloy_primitives::{Address, U256};

mod approve;
mod approve_and_call;
mod authorize_operator_contract;
mod delegation_views;
mod receive_approval;

pub use approve::*;
pub use approve_and_call::*;
pub use authorize_operator_contract::*;
pub use delegation_views::*;
pub use receive_approval::*;

/// A built contract call: target address plus ABI-encoded calldata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

impl CallRequest {
    pub fn new(to: Address, data: Vec<u8>) -> Self {
        Self {
            to,
            value: U256::ZERO,
            data,
        }
    }

    /// The 4-byte method selector of the calldata, if present.
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4)?.try_into().ok()
    }
}
