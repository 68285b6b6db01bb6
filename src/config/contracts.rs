use alloy::primitives::{address, Address};

/// Circle's Sepolia USDC deployment.
pub const SEPOLIA_USDC: Address = address!("1c7d4b196cb0c7b01d743fbc6116a902379c7238");

/// Chainlink's Sepolia LINK token.
pub const SEPOLIA_LINK: Address = address!("779877a7b0d9e8603169ddbd7836e478b4624789");

/// Uniswap V3 SwapRouter02 on Sepolia.
pub const SEPOLIA_SWAP_ROUTER: Address = address!("3bfa4769fb09eefc5a80d6e87c3b9c650f7ae48e");

/// Uniswap V3 factory on Sepolia.
pub const SEPOLIA_UNISWAP_V3_FACTORY: Address = address!("0227628f3f023bb0b980b67d528571c95c6dac1c");

/// Aave v3 pool on Sepolia.
pub const SEPOLIA_AAVE_POOL: Address = address!("6ae43d3271ff6888e7fc43fd7321a503ff738951");

/// The five externally-defined contracts a run talks to, resolved once at
/// startup and passed by reference into each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAddresses {
    pub usdc: Address,
    pub link: Address,
    pub swap_router: Address,
    pub aave_pool: Address,
    pub uniswap_v3_factory: Address,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            usdc: SEPOLIA_USDC,
            link: SEPOLIA_LINK,
            swap_router: SEPOLIA_SWAP_ROUTER,
            aave_pool: SEPOLIA_AAVE_POOL,
            uniswap_v3_factory: SEPOLIA_UNISWAP_V3_FACTORY,
        }
    }
}
