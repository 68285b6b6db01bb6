use std::time::Duration;

use alloy::{
    primitives::{
        aliases::{U160, U24},
        Address, U256,
    },
    providers::{DynProvider, Provider},
    rpc::types::TransactionReceipt,
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::interfaces::{ISwapRouter, IUniswapV3Pool};
use crate::services::TransactionReverted;
use crate::utils::logger::Logger;

/// Assemble the exact-input-single request. The fee is read back from the
/// pool handle, while the token pair comes from the run configuration, not
/// from the located pool's token ordering.
pub async fn prepare_swap_params(
    pool: &IUniswapV3Pool::IUniswapV3PoolInstance<DynProvider>,
    recipient: Address,
    token_in: Address,
    token_out: Address,
    amount_in: U256,
) -> Result<ISwapRouter::ExactInputSingleParams> {
    let fee = pool.fee().call().await.context("reading pool fee")?;
    Ok(swap_params(token_in, token_out, fee, recipient, amount_in))
}

/// The minimum output and price limit are both pinned to zero: the swap
/// executes at whatever price the pool offers.
pub fn swap_params(
    token_in: Address,
    token_out: Address,
    fee: U24,
    recipient: Address,
    amount_in: U256,
) -> ISwapRouter::ExactInputSingleParams {
    ISwapRouter::ExactInputSingleParams {
        tokenIn: token_in,
        tokenOut: token_out,
        fee,
        recipient,
        amountIn: amount_in,
        amountOutMinimum: U256::ZERO,
        sqrtPriceLimitX96: U160::ZERO,
    }
}

/// Invoke the router's exact-input-single entry point, submit through the
/// signer's send path and await mining under the confirmation timeout. Any
/// failure, including a reverted receipt, propagates.
pub async fn execute_swap(
    provider: DynProvider,
    router: Address,
    params: ISwapRouter::ExactInputSingleParams,
    confirmation_timeout: Duration,
) -> Result<TransactionReceipt> {
    let router = ISwapRouter::new(router, provider.clone());
    let tx = router.exactInputSingle(params).into_transaction_request();

    let pending = provider
        .send_transaction(tx)
        .await
        .context("submitting swap transaction")?;
    let hash = *pending.tx_hash();
    debug!(%hash, "swap submitted");

    let receipt = pending
        .with_timeout(Some(confirmation_timeout))
        .get_receipt()
        .await
        .context("awaiting swap confirmation")?;
    if !receipt.status() {
        return Err(TransactionReverted { hash }.into());
    }

    Logger::tx_confirmed("Swap transaction", receipt.transaction_hash);
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_output_and_price_limit_are_exactly_zero() {
        let params = swap_params(
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            U24::from(3000u32),
            Address::repeat_byte(0xaa),
            U256::from(100_000_000u64),
        );
        assert_eq!(params.amountOutMinimum, U256::ZERO);
        assert_eq!(params.sqrtPriceLimitX96, U160::ZERO);
    }

    #[test]
    fn params_carry_the_caller_inputs_through() {
        let token_in = Address::repeat_byte(0x11);
        let token_out = Address::repeat_byte(0x22);
        let recipient = Address::repeat_byte(0xaa);
        let amount_in = U256::from(42_000_000u64);

        let params = swap_params(token_in, token_out, U24::from(3000u32), recipient, amount_in);
        assert_eq!(params.tokenIn, token_in);
        assert_eq!(params.tokenOut, token_out);
        assert_eq!(params.fee, U24::from(3000u32));
        assert_eq!(params.recipient, recipient);
        assert_eq!(params.amountIn, amount_in);
    }
}
