//! Client toolkit for the token staking delegation contracts.
//!
//! The contracts themselves live on chain and are reached over JSON-RPC;
//! this crate builds their calldata, enforces the approve-then-delegate
//! sequencing in the type system, and batches staking operations.

pub mod abi;
pub mod artifacts;
pub mod batch;
pub mod calls;
pub mod chain;
pub mod client;
pub mod consts;
pub mod error;
pub mod rpc;
pub mod state;
pub mod utils;

pub use artifacts::{ArtifactSet, ContractArtifact, StakingContracts};
pub use client::{Approval, StakingClient, TxOptions};
pub use error::{DelegationError, ErrorCode};
pub use state::{DelegationInfo, DelegationPayload};
