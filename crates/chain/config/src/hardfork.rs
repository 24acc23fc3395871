/// Hardfork names.
pub mod name {
    /// Frontier hardfork name.
    pub const FRONTIER: &str = "frontier";
    /// Homestead hardfork name.
    pub const HOMESTEAD: &str = "homestead";
    /// Tangerine Whistle hardfork name.
    pub const TANGERINE_WHISTLE: &str = "tangerineWhistle";
    /// Spurious Dragon hardfork name.
    pub const SPURIOUS_DRAGON: &str = "spuriousDragon";
    /// Byzantium hardfork name.
    pub const BYZANTIUM: &str = "byzantium";
}

/// Hardforks that affect the receipt format.
///
/// Later hardforks keep the post-Byzantium receipt format and map to
/// [`Hardfork::Byzantium`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Hardfork {
    /// Frontier
    Frontier = 0,
    /// Homestead
    Homestead = 1,
    /// Tangerine Whistle (EIP-150)
    TangerineWhistle = 2,
    /// Spurious Dragon (EIP-155, EIP-158)
    SpuriousDragon = 3,
    /// Byzantium, the first hardfork with status receipts (EIP-658)
    #[default]
    Byzantium = 4,
}

impl Hardfork {
    /// Whether receipts carry a status code instead of an intermediate state
    /// root (EIP-658).
    pub fn is_eip658_active(&self) -> bool {
        *self >= Hardfork::Byzantium
    }

    /// Returns the hardfork's name.
    pub fn name(&self) -> &'static str {
        match self {
            Hardfork::Frontier => name::FRONTIER,
            Hardfork::Homestead => name::HOMESTEAD,
            Hardfork::TangerineWhistle => name::TANGERINE_WHISTLE,
            Hardfork::SpuriousDragon => name::SPURIOUS_DRAGON,
            Hardfork::Byzantium => name::BYZANTIUM,
        }
    }
}

impl std::fmt::Display for Hardfork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type that occurs when converting a string to a [`Hardfork`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Unknown hardfork name.
    #[error("Unknown hardfork name: {0}")]
    UnknownHardforkName(String),
}

impl TryFrom<&str> for Hardfork {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            name::FRONTIER => Ok(Hardfork::Frontier),
            name::HOMESTEAD => Ok(Hardfork::Homestead),
            name::TANGERINE_WHISTLE => Ok(Hardfork::TangerineWhistle),
            name::SPURIOUS_DRAGON => Ok(Hardfork::SpuriousDragon),
            name::BYZANTIUM => Ok(Hardfork::Byzantium),
            value => Err(ConversionError::UnknownHardforkName(value.to_string())),
        }
    }
}
