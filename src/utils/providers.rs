use std::str::FromStr;

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::{local::PrivateKeySigner, Signer},
};
use anyhow::{Context, Result};
use url::Url;

use crate::config::Env;

/// Sepolia chain id, pinned on both the signer and the wallet provider.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// The run's two connection handles, created once at startup. The wallet
/// provider signs and submits; the read provider serves factory, pool and
/// balance queries without ever touching the key.
pub struct ChainHandles {
    pub wallet_provider: DynProvider,
    pub read_provider: DynProvider,
    pub wallet_address: Address,
}

pub fn create_providers(env: &Env) -> Result<ChainHandles> {
    let private_key = if env.private_key.starts_with("0x") {
        env.private_key.clone()
    } else {
        format!("0x{}", env.private_key)
    };
    let signer = PrivateKeySigner::from_str(&private_key)
        .context("parsing PRIVATE_KEY")?
        .with_chain_id(Some(SEPOLIA_CHAIN_ID));
    let wallet_address = signer.address();

    let url: Url = env.rpc_url.parse().context("parsing RPC_URL")?;
    let wallet_provider = ProviderBuilder::new()
        .wallet(signer)
        .with_chain_id(SEPOLIA_CHAIN_ID)
        .connect_http(url.clone())
        .erased();
    let read_provider = ProviderBuilder::new().connect_http(url).erased();

    Ok(ChainHandles {
        wallet_provider,
        read_provider,
        wallet_address,
    })
}
