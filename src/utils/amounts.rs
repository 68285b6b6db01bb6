use alloy::primitives::{
    utils::{format_units, parse_units},
    U256,
};
use anyhow::{Context, Result};
use rust_decimal::Decimal;

/// Decimal exponent applied to every monetary amount in a run. Both the
/// approval amount and the swap input amount are scaled with this same
/// constant; the output token's own decimals are never queried.
pub const USDC_DECIMALS: u8 = 6;

/// Scale a human-readable amount to integer base units.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256> {
    let parsed = parse_units(&amount.to_string(), decimals)
        .with_context(|| format!("scaling {} to {} decimals", amount, decimals))?;
    Ok(parsed.get_absolute())
}

/// Render base units back into human units for display.
pub fn format_base_units(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
