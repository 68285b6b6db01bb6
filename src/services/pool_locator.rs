use alloy::{
    primitives::{aliases::U24, Address},
    providers::DynProvider,
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::interfaces::{IUniswapV3Factory, IUniswapV3Pool};

/// Fee tier used for pool discovery. 0.3% is the only tier this pipeline
/// trades.
pub const POOL_FEE_TIER: u32 = 3000;

/// The factory returned the zero address for the requested pair and tier.
#[derive(Debug, thiserror::Error)]
#[error("no pool for {token_in}/{token_out} at fee tier {fee}")]
pub struct PoolNotFound {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
}

/// A located pool: its read-only handle plus the token ordering and fee
/// resolved from the pool itself.
#[derive(Debug)]
pub struct PoolInfo {
    pub address: Address,
    pub pool: IUniswapV3Pool::IUniswapV3PoolInstance<DynProvider>,
    pub token0: Address,
    pub token1: Address,
    pub fee: U24,
}

/// Resolve the pool for a token pair through the factory, then read its two
/// constituent tokens and fee. The three reads are independent and awaited
/// jointly.
pub async fn locate_pool(
    provider: DynProvider,
    factory: Address,
    token_in: Address,
    token_out: Address,
) -> Result<PoolInfo> {
    let factory = IUniswapV3Factory::new(factory, provider.clone());
    let pool_address = factory
        .getPool(token_in, token_out, U24::from(POOL_FEE_TIER))
        .call()
        .await
        .context("querying factory for pool address")?;
    if pool_address == Address::ZERO {
        return Err(PoolNotFound {
            token_in,
            token_out,
            fee: POOL_FEE_TIER,
        }
        .into());
    }

    // The pool handle stays unauthenticated; only token and router calls
    // ever go through the signer.
    let pool = IUniswapV3Pool::new(pool_address, provider);
    let token0_call = pool.token0();
    let token1_call = pool.token1();
    let fee_call = pool.fee();
    let (token0, token1, fee) =
        tokio::try_join!(token0_call.call(), token1_call.call(), fee_call.call())
            .context("reading pool token pair and fee")?;
    debug!(%pool_address, %token0, %token1, fee = fee.to::<u32>(), "pool resolved");

    Ok(PoolInfo {
        address: pool_address,
        pool,
        token0,
        token1,
        fee,
    })
}
