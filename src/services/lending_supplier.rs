use std::time::Duration;

use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, Provider},
    rpc::types::TransactionReceipt,
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::interfaces::IAavePool;
use crate::services::TransactionReverted;
use crate::utils::logger::Logger;

/// Referral program is retired; deposits always pass zero.
pub const AAVE_REFERRAL_CODE: u16 = 0;

/// Deposit `amount` of `asset` into the lending pool on behalf of the
/// signer, awaiting mining under the confirmation timeout.
pub async fn supply(
    provider: DynProvider,
    aave_pool: Address,
    asset: Address,
    amount: U256,
    on_behalf_of: Address,
    confirmation_timeout: Duration,
) -> Result<TransactionReceipt> {
    let lending_pool = IAavePool::new(aave_pool, provider.clone());
    let tx = lending_pool
        .deposit(asset, amount, on_behalf_of, AAVE_REFERRAL_CODE)
        .into_transaction_request();

    let pending = provider
        .send_transaction(tx)
        .await
        .context("submitting supply transaction")?;
    let hash = *pending.tx_hash();
    debug!(%hash, %asset, %amount, "supply submitted");

    let receipt = pending
        .with_timeout(Some(confirmation_timeout))
        .get_receipt()
        .await
        .context("awaiting supply confirmation")?;
    if !receipt.status() {
        return Err(TransactionReverted { hash }.into());
    }

    Logger::tx_confirmed("Supply transaction", receipt.transaction_hash);
    Ok(receipt)
}
