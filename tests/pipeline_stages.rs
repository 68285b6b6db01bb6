//! Scenario tests for the orchestrator's failure and ordering contract,
//! driven against mocked transports.

mod common;

use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::transports::mock::Asserter;
use rust_decimal::Decimal;

use common::{encode_address, encode_uint, mocked_provider, test_contracts};
use swap_supply_bot::services::pipeline::{run_pipeline, Stage};
use swap_supply_bot::services::pool_locator::{locate_pool, PoolNotFound, POOL_FEE_TIER};

const TIMEOUT: Duration = Duration::from_secs(5);

fn wallet() -> Address {
    Address::repeat_byte(0xaa)
}

#[tokio::test]
async fn zero_pool_address_from_the_factory_is_pool_not_found() {
    let read_asserter = Asserter::new();
    read_asserter.push_success(&encode_address(Address::ZERO));

    let contracts = test_contracts();
    let err = locate_pool(
        mocked_provider(&read_asserter),
        contracts.uniswap_v3_factory,
        contracts.usdc,
        contracts.link,
    )
    .await
    .unwrap_err();

    let not_found = err.downcast_ref::<PoolNotFound>().expect("typed NotFound error");
    assert_eq!(not_found.fee, POOL_FEE_TIER);
    assert_eq!(not_found.token_in, contracts.usdc);
    assert_eq!(not_found.token_out, contracts.link);
}

#[tokio::test]
async fn locate_pool_returns_the_pool_resolved_ordering() {
    let read_asserter = Asserter::new();
    let contracts = test_contracts();
    let pool_address = Address::repeat_byte(0x66);

    read_asserter.push_success(&encode_address(pool_address));
    // Metadata reads are answered in request order: token0, token1, fee.
    // The pool reports the pair in the reverse of the query order.
    read_asserter.push_success(&encode_address(contracts.link));
    read_asserter.push_success(&encode_address(contracts.usdc));
    read_asserter.push_success(&encode_uint(U256::from(3000)));

    let info = locate_pool(
        mocked_provider(&read_asserter),
        contracts.uniswap_v3_factory,
        contracts.usdc,
        contracts.link,
    )
    .await
    .unwrap();

    assert_eq!(info.address, pool_address);
    assert_eq!(info.token0, contracts.link);
    assert_eq!(info.token1, contracts.usdc);
    assert_eq!(info.fee.to::<u32>(), 3000);
}

#[tokio::test]
async fn approval_failure_does_not_abort_the_run() {
    // The wallet transport has no queued responses, so the approval
    // submission fails outright. The run must still reach the pool lookup,
    // which here also fails (zero pool address) to terminate the test.
    let wallet_asserter = Asserter::new();
    let read_asserter = Asserter::new();
    read_asserter.push_success(&encode_address(Address::ZERO));

    let contracts = test_contracts();
    let failure = run_pipeline(
        &contracts,
        mocked_provider(&wallet_asserter),
        mocked_provider(&read_asserter),
        wallet(),
        Decimal::from(100),
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert_eq!(failure.stage, Stage::LocatingPool);
    assert!(failure.error.downcast_ref::<PoolNotFound>().is_some());
}

#[tokio::test]
async fn swap_failure_ends_the_run_before_supply() {
    // Reads succeed through the params builder; every signed submission
    // (approval, then the swap) fails against the empty wallet transport.
    let wallet_asserter = Asserter::new();
    let read_asserter = Asserter::new();
    let contracts = test_contracts();
    let pool_address = Address::repeat_byte(0x66);

    read_asserter.push_success(&encode_address(pool_address));
    read_asserter.push_success(&encode_address(contracts.usdc));
    read_asserter.push_success(&encode_address(contracts.link));
    read_asserter.push_success(&encode_uint(U256::from(3000)));
    // The params builder re-queries the fee from the pool.
    read_asserter.push_success(&encode_uint(U256::from(3000)));

    let failure = run_pipeline(
        &contracts,
        mocked_provider(&wallet_asserter),
        mocked_provider(&read_asserter),
        wallet(),
        Decimal::from(100),
        TIMEOUT,
    )
    .await
    .unwrap_err();

    // The run dies at the swap; the balance read and the lending deposit
    // must never be issued.
    assert_eq!(failure.stage, Stage::Swapping);
}
