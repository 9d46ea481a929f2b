//! Item metadata snapshots.
//!
//! [`ItemMeta`] is a plain value: the host hands out clones and accepts whole
//! snapshots back on commit, so editing one never touches an item until it is
//! committed. Kind-specific data lives in [`MetaVariant`]; callers branch on
//! [`ItemMeta::supports_identity`] instead of probing for a concrete type.
mod enchantment;
mod flags;
mod identity;

use std::collections::BTreeMap;

pub use enchantment::Enchantment;
pub use flags::ItemFlags;
pub use identity::{PlayerIdentity, PlayerProfile, ProfileProperty};

use crate::text::TextComponent;

/// Metadata shared by every item kind plus the kind-specific variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemMeta {
    display_name: Option<TextComponent>,
    lore: Option<Vec<TextComponent>>,
    enchants: BTreeMap<Enchantment, u16>,
    flags: ItemFlags,
    custom_model_data: Option<i32>,
    variant: MetaVariant,
}

/// Kind-specific metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetaVariant {
    /// No kind-specific data.
    #[default]
    Basic,

    /// Head-shaped items: can carry an owning player.
    Skull(SkullMeta),
}

/// Identity data of a head-shaped item.
///
/// A head holds a single profile. The owning player is a view of that profile,
/// so writing either one replaces the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkullMeta {
    profile: Option<PlayerProfile>,
}

impl SkullMeta {
    pub fn player_profile(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }

    pub fn set_player_profile(&mut self, profile: Option<PlayerProfile>) {
        self.profile = profile;
    }

    /// `None` unless the profile carries an account id.
    pub fn owning_player(&self) -> Option<PlayerIdentity> {
        self.profile.as_ref().and_then(PlayerProfile::identity)
    }

    /// Replaces the whole profile, dropping any properties it carried.
    pub fn set_owning_player(&mut self, owner: Option<PlayerIdentity>) {
        self.profile = owner.map(PlayerProfile::from);
    }
}

impl ItemMeta {
    pub fn new(variant: MetaVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Empty metadata for a head-shaped item.
    pub fn new_skull() -> Self {
        Self::new(MetaVariant::Skull(SkullMeta::default()))
    }

    // ===== display =====

    pub fn display_name(&self) -> Option<&TextComponent> {
        self.display_name.as_ref()
    }

    pub fn set_display_name(&mut self, name: Option<TextComponent>) {
        self.display_name = name;
    }

    pub fn lore(&self) -> Option<&[TextComponent]> {
        self.lore.as_deref()
    }

    pub fn set_lore(&mut self, lore: Option<Vec<TextComponent>>) {
        self.lore = lore;
    }

    // ===== enchantments =====

    pub fn enchants(&self) -> &BTreeMap<Enchantment, u16> {
        &self.enchants
    }

    pub fn has_enchant(&self, enchantment: Enchantment) -> bool {
        self.enchants.contains_key(&enchantment)
    }

    pub fn enchant_level(&self, enchantment: Enchantment) -> Option<u16> {
        self.enchants.get(&enchantment).copied()
    }

    /// Adds or replaces an enchantment.
    ///
    /// Levels outside the enchantment's natural range are refused unless
    /// `ignore_level_restriction` is set. Returns whether the metadata changed.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: u16,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && !enchantment.accepts_level(level) {
            return false;
        }
        self.enchants.insert(enchantment, level) != Some(level)
    }

    /// Returns whether the enchantment was present.
    pub fn remove_enchant(&mut self, enchantment: Enchantment) -> bool {
        self.enchants.remove(&enchantment).is_some()
    }

    // ===== flags =====

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn has_flags(&self, flags: ItemFlags) -> bool {
        self.flags.contains(flags)
    }

    pub fn add_flags(&mut self, flags: ItemFlags) {
        self.flags.insert(flags);
    }

    pub fn remove_flags(&mut self, flags: ItemFlags) {
        self.flags.remove(flags);
    }

    // ===== custom model data =====

    pub fn has_custom_model_data(&self) -> bool {
        self.custom_model_data.is_some()
    }

    /// Stored value, or `0` when none was set.
    pub fn custom_model_data(&self) -> i32 {
        self.custom_model_data.unwrap_or_default()
    }

    pub fn set_custom_model_data(&mut self, value: Option<i32>) {
        self.custom_model_data = value;
    }

    // ===== kind-specific =====

    pub fn variant(&self) -> &MetaVariant {
        &self.variant
    }

    pub fn supports_identity(&self) -> bool {
        matches!(self.variant, MetaVariant::Skull(_))
    }

    pub fn skull(&self) -> Option<&SkullMeta> {
        match &self.variant {
            MetaVariant::Skull(skull) => Some(skull),
            MetaVariant::Basic => None,
        }
    }

    pub fn skull_mut(&mut self) -> Option<&mut SkullMeta> {
        match &mut self.variant {
            MetaVariant::Skull(skull) => Some(skull),
            MetaVariant::Basic => None,
        }
    }

    /// Whether `other` has the same variant shape, ignoring the data inside it.
    pub fn same_variant(&self, other: &ItemMeta) -> bool {
        std::mem::discriminant(&self.variant) == std::mem::discriminant(&other.variant)
    }
}
