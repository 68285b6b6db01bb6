use std::time::Duration;

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::TransactionReceipt,
};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::debug;

use crate::interfaces::IERC20;
use crate::services::TransactionReverted;
use crate::utils::amounts::{to_base_units, USDC_DECIMALS};
use crate::utils::logger::Logger;

/// Grant `spender` an allowance of `amount` (human units, scaled by the fixed
/// USDC exponent) on the caller's behalf. The call is built from the token
/// binding and re-submitted through the signer's send path, then held until
/// the approval is mined or the confirmation timeout fires.
///
/// Failures are returned to the caller; whether an unconfirmed allowance
/// aborts the run is the orchestrator's decision.
pub async fn approve_token(
    provider: DynProvider,
    token: Address,
    spender: Address,
    amount: Decimal,
    confirmation_timeout: Duration,
) -> Result<TransactionReceipt> {
    let approve_amount = to_base_units(amount, USDC_DECIMALS)?;
    let erc20 = IERC20::new(token, provider.clone());
    let tx = erc20
        .approve(spender, approve_amount)
        .into_transaction_request();

    let pending = provider
        .send_transaction(tx)
        .await
        .context("submitting approval transaction")?;
    let hash = *pending.tx_hash();
    debug!(%hash, %token, %spender, "approval submitted");

    let receipt = pending
        .with_timeout(Some(confirmation_timeout))
        .get_receipt()
        .await
        .context("awaiting approval confirmation")?;
    if !receipt.status() {
        return Err(TransactionReverted { hash }.into());
    }

    Logger::tx_confirmed("Approval transaction", receipt.transaction_hash);
    Ok(receipt)
}
