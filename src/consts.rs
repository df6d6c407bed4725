/// The byte length of a delegation payload (beneficiary, operator, authorizer).
pub const DELEGATION_PAYLOAD_LEN: usize = 60;

/// The decimals of the staking token.
pub const TOKEN_DECIMALS: u8 = 18;

/// The default stake, in whole tokens, placed on each operator account.
pub const DEFAULT_STAKE_TOKENS: u64 = 20_000_000;

/// The default gas limit attached to staking transactions.
pub const DEFAULT_GAS: u64 = 4_712_388;

/// Blocks on top of the inclusion block before a transaction counts as confirmed.
///
/// Node defaults (25 confirmations, 50 block timeout) make scripts crawl on
/// small private testnets, so the budgets are overridden down.
pub const CONFIRMATION_BLOCKS: u64 = 3;

/// Blocks to wait for a submitted transaction to be mined before giving up.
pub const TRANSACTION_BLOCK_TIMEOUT: u64 = 25;

/// Wall-clock budget for the whole confirmation wait, in seconds.
pub const TRANSACTION_POLLING_TIMEOUT_SECS: u64 = 480;

/// Interval between receipt polls, in milliseconds.
pub const TRANSACTION_POLLING_INTERVAL_MS: u64 = 500;

/// The chain id of the mainnet deployment.
pub const MAINNET_CHAIN_ID: u64 = 30;

/// The artifact file of the staking token contract.
pub const STAKING_TOKEN_ARTIFACT: &str = "StakingToken.json";

/// The artifact file of the token staking contract.
pub const TOKEN_STAKING_ARTIFACT: &str = "TokenStaking.json";

/// The artifact file of the operator contract operators get authorized for.
pub const OPERATOR_CONTRACT_ARTIFACT: &str = "OperatorContract.json";

/// The environment variable holding the contract owner's signing key.
pub const SIGNER_KEY_ENV: &str = "CONTRACT_OWNER_ETH_ACCOUNT_PRIVATE_KEY";
