//! Shared helpers for the pipeline scenario tests.

use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    sol_types::SolValue,
    transports::mock::Asserter,
};

use swap_supply_bot::config::ContractAddresses;

/// ABI-encode an address as a single eth_call return word.
pub fn encode_address(value: Address) -> String {
    format!("0x{}", alloy::hex::encode(value.abi_encode()))
}

/// ABI-encode an unsigned integer as a single eth_call return word.
pub fn encode_uint(value: U256) -> String {
    format!("0x{}", alloy::hex::encode(value.abi_encode()))
}

/// A provider whose transport answers from the asserter's response queue.
/// An empty queue makes every request fail, which is how the tests simulate
/// a rejecting RPC endpoint.
pub fn mocked_provider(asserter: &Asserter) -> DynProvider {
    ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased()
}

pub fn test_contracts() -> ContractAddresses {
    ContractAddresses {
        usdc: Address::repeat_byte(0x11),
        link: Address::repeat_byte(0x22),
        swap_router: Address::repeat_byte(0x33),
        aave_pool: Address::repeat_byte(0x44),
        uniswap_v3_factory: Address::repeat_byte(0x55),
    }
}
