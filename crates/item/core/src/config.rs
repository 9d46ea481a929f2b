use crate::meta::Enchantment;

/// Builder configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Fill `italic = false` into names and lore lines that leave italic unset.
    /// The client renders custom names in italics unless told otherwise.
    pub remove_parent_italics: bool,
}

impl BuilderConfig {
    // ===== glow encoding =====
    /// Enchantment used to produce the glint. Infinity has no effect outside bows.
    pub const GLOW_ENCHANTMENT: Enchantment = Enchantment::Infinity;
    /// Level of the glow enchantment. Below the natural minimum, so the host must
    /// be told to ignore level restrictions.
    pub const GLOW_LEVEL: u16 = 0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AMOUNT: u32 = 1;
    pub const DEFAULT_REMOVE_PARENT_ITALICS: bool = true;

    pub fn new() -> Self {
        Self {
            remove_parent_italics: Self::DEFAULT_REMOVE_PARENT_ITALICS,
        }
    }

    pub fn with_remove_parent_italics(remove_parent_italics: bool) -> Self {
        Self {
            remove_parent_italics,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
