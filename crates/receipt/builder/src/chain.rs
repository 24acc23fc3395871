use receipt_chain_config::{ChainConfig, Hardfork};
use receipt_codec::Receipt;

use crate::{ExecutionOutcome, ExecutionReceiptBuilder, L1ReceiptBuilder};

/// Error that occurs when building a receipt for a chain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No hardfork is active at the block.
    #[error(
        "No known hardfork for block number {block_number} and timestamp {timestamp}. Check the chain's hardfork activations."
    )]
    UnknownHardfork {
        /// The block number
        block_number: u64,
        /// The block timestamp
        timestamp: u64,
    },
}

/// Builds receipts in the format of the hardfork that is active at the block
/// they are included in.
#[derive(Clone, Debug)]
pub struct ChainReceiptBuilder<BuilderT = L1ReceiptBuilder> {
    config: ChainConfig<Hardfork>,
    builder: BuilderT,
}

impl ChainReceiptBuilder {
    /// Constructs a new instance that builds L1 receipts.
    pub fn new(config: ChainConfig<Hardfork>) -> Self {
        Self::with_builder(config, L1ReceiptBuilder)
    }
}

impl<BuilderT> ChainReceiptBuilder<BuilderT> {
    /// Constructs a new instance that delegates to the provided builder.
    pub fn with_builder(config: ChainConfig<Hardfork>, builder: BuilderT) -> Self {
        Self { config, builder }
    }

    /// Returns the chain's configuration.
    pub fn config(&self) -> &ChainConfig<Hardfork> {
        &self.config
    }

    /// Builds the receipt of a transaction included in the block with the
    /// provided number and timestamp.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, outcome)))]
    pub fn build_receipt_at<LogT>(
        &self,
        outcome: ExecutionOutcome<LogT>,
        block_number: u64,
        timestamp: u64,
    ) -> Result<Receipt<LogT>, BuildError>
    where
        BuilderT: ExecutionReceiptBuilder<LogT>,
    {
        let hardfork = self
            .config
            .hardfork_activations
            .hardfork_at_block(block_number, timestamp)
            .ok_or(BuildError::UnknownHardfork {
                block_number,
                timestamp,
            })?;

        log::trace!(
            "Building {hardfork} receipt for block {block_number} of chain {}",
            self.config.name
        );

        Ok(self.builder.build_receipt(outcome, hardfork))
    }
}
