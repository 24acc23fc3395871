use std::sync::OnceLock;

use crate::{ChainConfig, ForkCondition, Hardfork, HardforkActivation};

const MAINNET_HARDFORKS: &[HardforkActivation<Hardfork>] = &[
    HardforkActivation {
        condition: ForkCondition::Block(0),
        hardfork: Hardfork::Frontier,
    },
    HardforkActivation {
        condition: ForkCondition::Block(1_150_000),
        hardfork: Hardfork::Homestead,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_463_000),
        hardfork: Hardfork::TangerineWhistle,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_675_000),
        hardfork: Hardfork::SpuriousDragon,
    },
    HardforkActivation {
        condition: ForkCondition::Block(4_370_000),
        hardfork: Hardfork::Byzantium,
    },
];

/// Returns the configuration of Ethereum mainnet.
pub fn mainnet() -> &'static ChainConfig<Hardfork> {
    static CONFIG: OnceLock<ChainConfig<Hardfork>> = OnceLock::new();

    CONFIG.get_or_init(|| ChainConfig {
        name: "Mainnet".to_owned(),
        hardfork_activations: MAINNET_HARDFORKS.into(),
    })
}

// Ethereum Classic adopted EIP-658 with Atlantis, not at Byzantium's block.
const CLASSIC_MAINNET_HARDFORKS: &[HardforkActivation<Hardfork>] = &[
    HardforkActivation {
        condition: ForkCondition::Block(0),
        hardfork: Hardfork::Frontier,
    },
    HardforkActivation {
        condition: ForkCondition::Block(1_150_000),
        hardfork: Hardfork::Homestead,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_500_000),
        hardfork: Hardfork::TangerineWhistle,
    },
    HardforkActivation {
        condition: ForkCondition::Block(3_000_000),
        hardfork: Hardfork::SpuriousDragon,
    },
    HardforkActivation {
        condition: ForkCondition::Block(8_772_000),
        hardfork: Hardfork::Byzantium,
    },
];

/// Returns the configuration of Ethereum Classic mainnet.
pub fn classic_mainnet() -> &'static ChainConfig<Hardfork> {
    static CONFIG: OnceLock<ChainConfig<Hardfork>> = OnceLock::new();

    CONFIG.get_or_init(|| ChainConfig {
        name: "Classic Mainnet".to_owned(),
        hardfork_activations: CLASSIC_MAINNET_HARDFORKS.into(),
    })
}
