use alloy_primitives::{Address, B256};

use crate::consts::MAINNET_CHAIN_ID;

/// The block-explorer base URL for a chain id.
pub fn explorer_url(chain_id: u64) -> &'static str {
    if chain_id == MAINNET_CHAIN_ID {
        "https://explorer.rsk.co/"
    } else {
        "https://explorer.testnet.rsk.co"
    }
}

/// Explorer link for a transaction.
pub fn transaction_url(chain_id: u64, tx_hash: B256) -> String {
    format!("{}/tx/{tx_hash}", explorer_url(chain_id).trim_end_matches('/'))
}

/// Explorer link for an address.
pub fn address_url(chain_id: u64, address: Address) -> String {
    format!(
        "{}/address/{address:#x}",
        explorer_url(chain_id).trim_end_matches('/')
    )
}
