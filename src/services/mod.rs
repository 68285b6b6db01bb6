pub mod lending_supplier;
pub mod pipeline;
pub mod pool_locator;
pub mod swap;
pub mod token_approver;

pub use pipeline::{run_pipeline, Stage, StageFailure};
pub use pool_locator::{locate_pool, PoolInfo, PoolNotFound};

use alloy::primitives::B256;

/// A mined transaction whose receipt carries a failed status.
#[derive(Debug, thiserror::Error)]
#[error("transaction {hash} reverted")]
pub struct TransactionReverted {
    pub hash: B256,
}
