//! Declarative item templates.
//!
//! A template names the attributes of one GUI item. Applying it drives an
//! [`ItemBuilder`], so templates go through the same scoped edits, italics
//! policy and glow encoding as hand-written builder code.

use std::collections::BTreeMap;

use item_core::{
    BuilderConfig, ItemBuilder, ItemPlatform, ItemStack, Material, PlatformError, PlayerIdentity,
    PlayerProfile, TextComponent,
};

/// Text in a template: either a bare string or a full component.
///
/// In RON a rich value is written as a struct, with bare identifiers for
/// decorations and colors:
///
/// ```ron
/// (content: "Shop", style: (color: Some(gold), decorations: { italic: true }))
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TemplateText {
    Plain(String),
    Rich(TextComponent),
}

// Hand-written so the component is read straight from the source format.
// An untagged derive buffers the input first, which loses RON identifiers.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TemplateText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};

        struct TemplateTextVisitor;

        impl<'de> Visitor<'de> for TemplateTextVisitor {
            type Value = TemplateText;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or a text component")
            }

            fn visit_str<E>(self, value: &str) -> Result<TemplateText, E>
            where
                E: de::Error,
            {
                Ok(TemplateText::Plain(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<TemplateText, E>
            where
                E: de::Error,
            {
                Ok(TemplateText::Plain(value))
            }

            fn visit_map<A>(self, map: A) -> Result<TemplateText, A::Error>
            where
                A: MapAccess<'de>,
            {
                use serde::Deserialize;

                TextComponent::deserialize(MapAccessDeserializer::new(map)).map(TemplateText::Rich)
            }
        }

        deserializer.deserialize_any(TemplateTextVisitor)
    }
}

impl From<TemplateText> for TextComponent {
    fn from(text: TemplateText) -> Self {
        match text {
            TemplateText::Plain(content) => TextComponent::text(content),
            TemplateText::Rich(component) => component,
        }
    }
}

impl From<&str> for TemplateText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

/// Attributes of a single item. Unset fields leave the builder's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemTemplate {
    pub kind: Material,
    pub amount: Option<u32>,
    pub name: Option<TemplateText>,
    pub lore: Option<Vec<TemplateText>>,
    pub glowing: bool,
    pub custom_model_data: Option<i32>,
    pub skull_owner: Option<PlayerIdentity>,
    /// Applied after `skull_owner`, so it wins when both are set.
    pub player_profile: Option<PlayerProfile>,
    /// Overrides [`BuilderConfig::remove_parent_italics`] for this item.
    pub remove_parent_italics: Option<bool>,
}

impl ItemTemplate {
    pub fn new(kind: impl Into<Material>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Builds a stack from this template.
    pub fn build<P>(&self, platform: &P, config: &BuilderConfig) -> Result<ItemStack, PlatformError>
    where
        P: ItemPlatform + ?Sized,
    {
        let amount = self.amount.unwrap_or(BuilderConfig::DEFAULT_AMOUNT);
        let mut builder = ItemBuilder::with_config(platform, self.kind.clone(), amount, config)?;
        self.apply(&mut builder)?;
        Ok(builder.build())
    }

    /// Writes every set attribute through `builder`. The amount is left alone.
    pub fn apply<P>(&self, builder: &mut ItemBuilder<'_, P>) -> Result<(), PlatformError>
    where
        P: ItemPlatform + ?Sized,
    {
        if let Some(remove) = self.remove_parent_italics {
            builder.set_remove_parent_italics(remove);
        }
        if let Some(name) = &self.name {
            builder.set_name(Some(name.clone().into()))?;
        }
        if let Some(lore) = &self.lore {
            let lines = lore.iter().cloned().map(TextComponent::from).collect();
            builder.set_lore(Some(lines))?;
        }
        if let Some(value) = self.custom_model_data {
            builder.set_custom_model_data(value)?;
        }
        if let Some(owner) = &self.skull_owner {
            builder.set_skull_owner(Some(owner.clone()))?;
        }
        if let Some(profile) = &self.player_profile {
            builder.set_player_profile(Some(profile.clone()))?;
        }
        if self.glowing {
            builder.set_glowing(true)?;
        }
        Ok(())
    }
}

/// Named templates, keyed by an id used by menus (`"close_button"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemplateSet {
    pub items: BTreeMap<String, ItemTemplate>,
}

impl TemplateSet {
    pub fn get(&self, id: &str) -> Option<&ItemTemplate> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the template `id`; `None` when no such template exists.
    pub fn build<P>(
        &self,
        id: &str,
        platform: &P,
        config: &BuilderConfig,
    ) -> Option<Result<ItemStack, PlatformError>>
    where
        P: ItemPlatform + ?Sized,
    {
        let template = self.get(id)?;
        tracing::debug!(id, kind = %template.kind, "building item template");
        Some(template.build(platform, config))
    }
}
