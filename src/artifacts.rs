//! Truffle-style contract artifacts, consumed as read-only configuration.
//!
//! Each artifact file carries the contract ABI and a `networks` table keyed
//! by chain id, holding the deployed address per network.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::consts::{OPERATOR_CONTRACT_ARTIFACT, STAKING_TOKEN_ARTIFACT, TOKEN_STAKING_ARTIFACT};
use crate::error::DelegationError;

/// A deployment entry in an artifact's `networks` table.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkDeployment {
    pub address: Address,
}

/// A parsed contract artifact.
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    #[serde(skip)]
    name: String,
    #[serde(default)]
    pub abi: serde_json::Value,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDeployment>,
}

impl ContractArtifact {
    pub fn from_path(path: &Path) -> Result<Self, DelegationError> {
        let raw = fs::read_to_string(path).map_err(|source| DelegationError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut artifact: ContractArtifact =
            serde_json::from_str(&raw).map_err(|source| DelegationError::ArtifactParse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(artifact)
    }

    /// The deployed address of this contract on the given network.
    pub fn address_on(&self, chain_id: u64) -> Result<Address, DelegationError> {
        self.networks
            .get(&chain_id.to_string())
            .map(|deployment| deployment.address)
            .ok_or_else(|| DelegationError::UnknownNetwork {
                contract: self.name.clone(),
                chain_id,
            })
    }
}

/// The deployed address triple every staking operation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakingContracts {
    pub token: Address,
    pub token_staking: Address,
    pub operator_contract: Address,
}

/// The artifact files of the staking platform, loaded from one directory.
#[derive(Clone, Debug)]
pub struct ArtifactSet {
    pub token: ContractArtifact,
    pub token_staking: ContractArtifact,
    pub operator_contract: ContractArtifact,
}

impl ArtifactSet {
    /// Loads the three artifacts from their conventional file names.
    pub fn load(dir: &Path) -> Result<Self, DelegationError> {
        Ok(Self {
            token: ContractArtifact::from_path(&dir.join(STAKING_TOKEN_ARTIFACT))?,
            token_staking: ContractArtifact::from_path(&dir.join(TOKEN_STAKING_ARTIFACT))?,
            operator_contract: ContractArtifact::from_path(&dir.join(OPERATOR_CONTRACT_ARTIFACT))?,
        })
    }

    /// Resolves the deployed addresses for a network.
    pub fn contracts(&self, chain_id: u64) -> Result<StakingContracts, DelegationError> {
        Ok(StakingContracts {
            token: self.token.address_on(chain_id)?,
            token_staking: self.token_staking.address_on(chain_id)?,
            operator_contract: self.operator_contract.address_on(chain_id)?,
        })
    }
}
