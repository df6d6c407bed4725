use alloy_primitives::Address;
use bytemuck::{Pod, Zeroable};

use crate::{impl_to_bytes, impl_try_from_bytes};

/// The delegation payload handed to the staking contract.
///
/// Three raw 20-byte addresses, concatenated with no separators. The staking
/// contract slices the blob positionally, so the layout is the wire format.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct DelegationPayload {
    /// The address receiving staking rewards
    pub beneficiary: [u8; 20],

    /// The address performing staking duties on the owner's behalf
    pub operator: [u8; 20],

    /// The address permitted to authorize operator contracts
    pub authorizer: [u8; 20],
}

impl DelegationPayload {
    pub fn new(beneficiary: Address, operator: Address, authorizer: Address) -> Self {
        Self {
            beneficiary: beneficiary.into(),
            operator: operator.into(),
            authorizer: authorizer.into(),
        }
    }

    pub fn beneficiary(&self) -> Address {
        Address::from(self.beneficiary)
    }

    pub fn operator(&self) -> Address {
        Address::from(self.operator)
    }

    pub fn authorizer(&self) -> Address {
        Address::from(self.authorizer)
    }
}

impl_to_bytes!(DelegationPayload);
impl_try_from_bytes!(DelegationPayload);
