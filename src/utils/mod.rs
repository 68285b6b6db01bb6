pub mod amounts;
pub mod logger;
pub mod providers;

// Re-export commonly used items
pub use amounts::{format_base_units, to_base_units, USDC_DECIMALS};
pub use logger::Logger;
pub use providers::{create_providers, ChainHandles, SEPOLIA_CHAIN_ID};
