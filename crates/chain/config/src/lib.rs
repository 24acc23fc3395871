//! Chain configuration: which hardfork, and thus which receipt format, is
//! active at a given block.

mod hardfork;
mod l1;

pub use self::{
    hardfork::{ConversionError, Hardfork, name},
    l1::{classic_mainnet, mainnet},
};

/// Fork condition for a hardfork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForkCondition {
    /// Activation based on block number.
    Block(u64),
    /// Activation based on UNIX timestamp.
    Timestamp(u64),
}

impl ForkCondition {
    /// Whether the condition is met at the provided block.
    pub fn is_met(&self, block_number: u64, timestamp: u64) -> bool {
        match self {
            ForkCondition::Block(activation) => block_number >= *activation,
            ForkCondition::Timestamp(activation) => timestamp >= *activation,
        }
    }
}

/// A type representing the activation of a hardfork.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardforkActivation<HardforkT = Hardfork> {
    /// The condition for the hardfork activation.
    pub condition: ForkCondition,
    /// The hardfork to be activated.
    pub hardfork: HardforkT,
}

/// Hardfork activations of a chain, in activation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct HardforkActivations<HardforkT = Hardfork> {
    hardforks: Vec<HardforkActivation<HardforkT>>,
}

impl<HardforkT> HardforkActivations<HardforkT> {
    /// Constructs a new instance with the provided hardforks.
    pub fn new(hardforks: Vec<HardforkActivation<HardforkT>>) -> Self {
        Self { hardforks }
    }

    /// Creates a new instance for a chain that starts at the provided
    /// hardfork.
    pub fn with_hardfork(hardfork: HardforkT) -> Self {
        Self {
            hardforks: vec![HardforkActivation {
                condition: ForkCondition::Block(0),
                hardfork,
            }],
        }
    }

    /// Whether no hardforks activations are present.
    pub fn is_empty(&self) -> bool {
        self.hardforks.is_empty()
    }
}

impl<HardforkT: Clone> HardforkActivations<HardforkT> {
    /// Returns the last hardfork whose condition is met at the provided block,
    /// if any.
    pub fn hardfork_at_block(&self, block_number: u64, timestamp: u64) -> Option<HardforkT> {
        self.hardforks
            .iter()
            .rev()
            .find(|HardforkActivation { condition, .. }| condition.is_met(block_number, timestamp))
            .map(|activation| activation.hardfork.clone())
    }
}

impl<HardforkT: Clone> From<&[HardforkActivation<HardforkT>]> for HardforkActivations<HardforkT> {
    fn from(hardforks: &[HardforkActivation<HardforkT>]) -> Self {
        Self {
            hardforks: hardforks.to_vec(),
        }
    }
}

/// Type that stores the configuration for a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig<HardforkT = Hardfork> {
    /// Chain name
    pub name: String,
    /// Hardfork activations for the chain
    pub hardfork_activations: HardforkActivations<HardforkT>,
}
