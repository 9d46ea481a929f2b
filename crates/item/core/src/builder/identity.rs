//! Owning player of head-shaped items.
//!
//! Only [`MetaVariant::Skull`](crate::meta::MetaVariant::Skull) carries an
//! identity. On any other kind the getters return `None` and the setters do
//! nothing, so callers can configure items without checking the kind first.

use super::ItemBuilder;
use crate::meta::{PlayerIdentity, PlayerProfile, SkullMeta};
use crate::platform::{ItemPlatform, PlatformError};

impl<P: ItemPlatform + ?Sized> ItemBuilder<'_, P> {
    /// Derived from the player profile; `None` when the profile has no id.
    pub fn skull_owner(&self) -> Option<PlayerIdentity> {
        self.meta()
            .skull()
            .and_then(SkullMeta::owning_player)
    }

    /// Replaces the player profile with one built from `owner`.
    /// Ignored unless the item supports identity.
    pub fn set_skull_owner(&mut self, owner: Option<PlayerIdentity>) -> Result<(), PlatformError> {
        self.edit_identity("skull_owner", |skull| skull.set_owning_player(owner))
    }

    pub fn with_skull_owner(mut self, owner: PlayerIdentity) -> Result<Self, PlatformError> {
        self.set_skull_owner(Some(owner))?;
        Ok(self)
    }

    pub fn player_profile(&self) -> Option<PlayerProfile> {
        self.meta()
            .skull()
            .and_then(|skull| skull.player_profile().cloned())
    }

    /// Ignored unless the item supports identity.
    pub fn set_player_profile(
        &mut self,
        profile: Option<PlayerProfile>,
    ) -> Result<(), PlatformError> {
        self.edit_identity("player_profile", |skull| skull.set_player_profile(profile))
    }

    pub fn with_player_profile(mut self, profile: PlayerProfile) -> Result<Self, PlatformError> {
        self.set_player_profile(Some(profile))?;
        Ok(self)
    }

    /// Scoped edit of the skull data; skips the commit for other variants.
    fn edit_identity(
        &mut self,
        attribute: &'static str,
        edit: impl FnOnce(&mut SkullMeta),
    ) -> Result<(), PlatformError> {
        let mut meta = self.meta();
        let Some(skull) = meta.skull_mut() else {
            tracing::trace!(kind = %self.stack.kind(), attribute, "ignored identity on non-head item");
            return Ok(());
        };
        edit(skull);
        self.commit(meta)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::builder::ItemBuilder;
    use crate::config::BuilderConfig;
    use crate::meta::{ItemFlags, PlayerIdentity, PlayerProfile, ProfileProperty};
    use crate::platform::CatalogPlatform;

    fn notch() -> PlayerIdentity {
        PlayerIdentity::new(Uuid::from_u128(0x069a79f4_44e9_4726_a5be_fca90e38aaf5))
            .with_name("Notch")
    }

    #[test]
    fn head_keeps_skull_owner() {
        let platform = CatalogPlatform::vanilla();
        let mut builder = ItemBuilder::new(&platform, "player_head").unwrap();
        builder.set_skull_owner(Some(notch())).unwrap();
        assert_eq!(builder.skull_owner(), Some(notch()));

        builder.set_glowing(true).unwrap();
        let meta = builder.meta();
        assert_eq!(meta.enchants().len(), 1);
        assert!(meta.has_enchant(BuilderConfig::GLOW_ENCHANTMENT));
        assert!(meta.has_flags(ItemFlags::HIDE_ENCHANTS));
        assert_eq!(builder.skull_owner(), Some(notch()));
    }

    #[test]
    fn non_head_ignores_identity() {
        let platform = CatalogPlatform::vanilla();
        let mut builder = ItemBuilder::new(&platform, "stone")
            .unwrap()
            .with_name("Cobble")
            .unwrap();
        let before = builder.meta();

        builder.set_skull_owner(Some(notch())).unwrap();
        builder
            .set_player_profile(Some(PlayerProfile::from(notch())))
            .unwrap();

        assert_eq!(builder.skull_owner(), None);
        assert_eq!(builder.player_profile(), None);
        assert_eq!(builder.meta(), before);
    }

    #[test]
    fn head_keeps_player_profile() {
        let platform = CatalogPlatform::vanilla();
        let profile = PlayerProfile::new(None, Some("Steve".into()))
            .with_property(ProfileProperty::new(PlayerProfile::TEXTURES, "e3RleHR1cmVzfQ=="));

        let builder = ItemBuilder::new(&platform, "player_head")
            .unwrap()
            .with_player_profile(profile.clone())
            .unwrap();

        assert_eq!(builder.player_profile(), Some(profile));
        // Steve's profile has no account id, so there is no owner to report.
        assert_eq!(builder.skull_owner(), None);
    }

    #[test]
    fn owner_and_profile_are_one_identity() {
        let platform = CatalogPlatform::vanilla();
        let steve = PlayerProfile::new(Some(Uuid::from_u128(1)), Some("Steve".into()));
        let mut builder = ItemBuilder::new(&platform, "player_head").unwrap();

        builder.set_player_profile(Some(steve.clone())).unwrap();
        assert_eq!(
            builder.skull_owner(),
            Some(PlayerIdentity::new(Uuid::from_u128(1)).with_name("Steve"))
        );

        builder.set_skull_owner(Some(notch())).unwrap();
        assert_eq!(builder.skull_owner(), Some(notch()));
        assert_eq!(builder.player_profile(), Some(PlayerProfile::from(notch())));

        builder.set_player_profile(None).unwrap();
        assert_eq!(builder.skull_owner(), None);
    }

    #[test]
    fn none_clears_owner() {
        let platform = CatalogPlatform::vanilla();
        let mut builder = ItemBuilder::new(&platform, "zombie_head")
            .unwrap()
            .with_skull_owner(notch())
            .unwrap();
        builder.set_skull_owner(None).unwrap();
        assert_eq!(builder.skull_owner(), None);
        assert!(builder.meta().supports_identity());
    }
}
