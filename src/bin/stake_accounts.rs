//! Stakes and authorizes a list of operator accounts against the deployed
//! staking contracts.
//!
//! The contract owner's signing key is read from the environment, installed
//! on the node, and used as beneficiary and authorizer for every delegation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::{error, info};

use tsd::batch::stake_and_authorize;
use tsd::chain::address_url;
use tsd::consts::{DEFAULT_STAKE_TOKENS, SIGNER_KEY_ENV, TOKEN_DECIMALS};
use tsd::rpc::HttpRpc;
use tsd::utils::token_amount;
use tsd::{ArtifactSet, DelegationError, StakingClient};

#[derive(Debug, Parser)]
#[command(name = "stake-accounts", about = "Stake and authorize operator accounts")]
struct Args {
    /// JSON-RPC endpoint of the node
    #[arg(long)]
    eth_url: String,

    /// Network id the contract artifacts are keyed by
    #[arg(long)]
    chain_id: u64,

    /// Directory holding the contract artifact JSON files
    #[arg(long)]
    contract_dir: PathBuf,

    /// Stake per operator, in whole tokens
    #[arg(long, default_value_t = DEFAULT_STAKE_TOKENS)]
    amount: u64,

    /// File with one operator address per line (# starts a comment)
    #[arg(long, conflicts_with = "operators")]
    operators_file: Option<PathBuf>,

    /// Operator addresses to stake and authorize
    #[arg(value_name = "OPERATOR")]
    operators: Vec<Address>,
}

fn read_operators_file(path: &PathBuf) -> Result<Vec<Address>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading operators file {}", path.display()))?;
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.parse::<Address>()
                .map_err(|e| anyhow!("bad operator address {line}: {e}"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let operators = match &args.operators_file {
        Some(path) => read_operators_file(path)?,
        None => args.operators.clone(),
    };
    if operators.is_empty() {
        bail!("no operator addresses given");
    }

    let signer_key = std::env::var(SIGNER_KEY_ENV)
        .map_err(|_| DelegationError::MissingSignerKey(SIGNER_KEY_ENV))?;

    let rpc = HttpRpc::new(&args.eth_url);
    let node_chain_id = rpc.chain_id().await.context("querying node chain id")?;
    if node_chain_id != args.chain_id {
        bail!(
            "node reports chain id {node_chain_id}, artifacts were requested for {}",
            args.chain_id
        );
    }

    let owner = rpc
        .import_signer_key(&signer_key)
        .await
        .context("installing the signer key on the node")?;
    info!("signing as contract owner {owner}");

    let artifacts =
        ArtifactSet::load(&args.contract_dir).context("loading contract artifacts")?;
    let contracts = artifacts.contracts(args.chain_id)?;
    info!(
        "contracts on network {}: token {}, staking {}, operator contract {}",
        args.chain_id, contracts.token, contracts.token_staking, contracts.operator_contract
    );

    let amount = token_amount(args.amount, TOKEN_DECIMALS)?;
    info!(
        "staking {} tokens on each of {} operator accounts",
        args.amount,
        operators.len()
    );

    let client = StakingClient::new(rpc, contracts);
    let run = stake_and_authorize(&client, owner, &operators, amount).await;

    for operator in &run.staked {
        info!("staked and authorized: {operator}");
    }
    for (operator, err) in &run.failures {
        error!("failed (code {}): {operator}: {err}", u32::from(err.code()));
    }
    if !run.staked.is_empty() {
        info!(
            "inspect delegations at {}",
            address_url(args.chain_id, contracts.token_staking)
        );
    }

    if run.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
