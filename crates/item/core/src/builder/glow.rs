//! Glow effect.
//!
//! The item model has no glow attribute. An item glows when it carries any
//! enchantment, so glow is encoded as an inert enchantment plus
//! [`ItemFlags::HIDE_ENCHANTS`] to keep the tooltip clean.

use super::ItemBuilder;
use crate::config::BuilderConfig;
use crate::meta::ItemFlags;
use crate::platform::{ItemPlatform, PlatformError};

impl<P: ItemPlatform + ?Sized> ItemBuilder<'_, P> {
    /// Last glow value set through this builder.
    ///
    /// This is not derived from the metadata: an item enchanted by other means
    /// still reports `false` here.
    pub fn glowing(&self) -> bool {
        self.glowing
    }

    /// Adds or removes the glow encoding. Each call performs a full edit.
    ///
    /// Turning glow off removes the glow enchantment even when something else
    /// added it; the builder's flag is authoritative.
    pub fn set_glowing(&mut self, glowing: bool) -> Result<(), PlatformError> {
        self.edit_meta(|meta| {
            if glowing {
                meta.add_enchant(
                    BuilderConfig::GLOW_ENCHANTMENT,
                    BuilderConfig::GLOW_LEVEL,
                    true,
                );
                meta.add_flags(ItemFlags::HIDE_ENCHANTS);
            } else {
                meta.remove_enchant(BuilderConfig::GLOW_ENCHANTMENT);
                meta.remove_flags(ItemFlags::HIDE_ENCHANTS);
            }
        })?;
        self.glowing = glowing;
        tracing::debug!(kind = %self.stack.kind(), glowing, "applied glow");
        Ok(())
    }

    pub fn with_glowing(mut self, glowing: bool) -> Result<Self, PlatformError> {
        self.set_glowing(glowing)?;
        Ok(self)
    }
}
