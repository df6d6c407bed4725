use std::path::PathBuf;

use alloy_primitives::B256;
use num_enum::IntoPrimitive;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelegationError {
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },
    #[error("invalid ABI word in response: expected {expected} bytes, got {actual}")]
    InvalidAbiWord { expected: usize, actual: usize },
    #[error("failed to read contract artifact {path}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse contract artifact {path}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("contract {contract} has no deployment for network {chain_id}")]
    UnknownNetwork { contract: String, chain_id: u64 },
    #[error("transport error")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed rpc response: {0}")]
    InvalidResponse(String),
    #[error("transaction {0} reverted")]
    TransactionReverted(B256),
    #[error("approval transaction {0} rejected by the token contract")]
    ApprovalRejected(B256),
    #[error("transaction {0} not confirmed within the polling budget")]
    ConfirmationTimeout(B256),
    #[error("signer key not found in environment variable {0}")]
    MissingSignerKey(&'static str),
    #[error("token amount overflows 256 bits")]
    AmountOverflow,
}

/// Stable numeric classification of errors, used in batch run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum ErrorCode {
    InvalidPayloadLength = 0,
    InvalidAbiWord = 1,
    ArtifactIo = 2,
    ArtifactParse = 3,
    UnknownNetwork = 4,
    Transport = 5,
    Rpc = 6,
    InvalidResponse = 7,
    TransactionReverted = 8,
    ApprovalRejected = 9,
    ConfirmationTimeout = 10,
    MissingSignerKey = 11,
    AmountOverflow = 12,
}

impl DelegationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DelegationError::InvalidPayloadLength { .. } => ErrorCode::InvalidPayloadLength,
            DelegationError::InvalidAbiWord { .. } => ErrorCode::InvalidAbiWord,
            DelegationError::ArtifactIo { .. } => ErrorCode::ArtifactIo,
            DelegationError::ArtifactParse { .. } => ErrorCode::ArtifactParse,
            DelegationError::UnknownNetwork { .. } => ErrorCode::UnknownNetwork,
            DelegationError::Transport(_) => ErrorCode::Transport,
            DelegationError::Rpc { .. } => ErrorCode::Rpc,
            DelegationError::InvalidResponse(_) => ErrorCode::InvalidResponse,
            DelegationError::TransactionReverted(_) => ErrorCode::TransactionReverted,
            DelegationError::ApprovalRejected(_) => ErrorCode::ApprovalRejected,
            DelegationError::ConfirmationTimeout(_) => ErrorCode::ConfirmationTimeout,
            DelegationError::MissingSignerKey(_) => ErrorCode::MissingSignerKey,
            DelegationError::AmountOverflow => ErrorCode::AmountOverflow,
        }
    }
}
