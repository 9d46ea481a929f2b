//! Display name and lore.
//!
//! Item text renders italic by default on the client. With the italics policy
//! on, every name and lore line gets `italic = false` filled in unless the
//! caller already set italic explicitly.

use super::ItemBuilder;
use crate::platform::{ItemPlatform, PlatformError};
use crate::text::{TextComponent, TextDecoration};

impl<P: ItemPlatform + ?Sized> ItemBuilder<'_, P> {
    pub fn name(&self) -> Option<TextComponent> {
        self.meta().display_name().cloned()
    }

    /// `None` clears the display name.
    pub fn set_name(&mut self, name: Option<TextComponent>) -> Result<(), PlatformError> {
        let name = name.map(|name| self.default_italics(name));
        self.edit_meta(|meta| meta.set_display_name(name))
    }

    pub fn with_name(mut self, name: impl Into<TextComponent>) -> Result<Self, PlatformError> {
        self.set_name(Some(name.into()))?;
        Ok(self)
    }

    pub fn lore(&self) -> Option<Vec<TextComponent>> {
        self.meta().lore().map(<[TextComponent]>::to_vec)
    }

    /// Each entry is one rendered line; `None` clears the lore.
    ///
    /// Newline characters inside a line are removed, not turned into line
    /// breaks. Multi-line lore must be passed as separate entries.
    pub fn set_lore(&mut self, lore: Option<Vec<TextComponent>>) -> Result<(), PlatformError> {
        let lore = lore.map(|lines| {
            lines
                .into_iter()
                .map(|line| self.default_italics(line))
                .collect::<Vec<_>>()
        });
        let lore = sanitize_lore(lore);
        self.edit_meta(|meta| meta.set_lore(lore))
    }

    pub fn with_lore<I>(mut self, lines: I) -> Result<Self, PlatformError>
    where
        I: IntoIterator,
        I::Item: Into<TextComponent>,
    {
        self.set_lore(Some(lines.into_iter().map(Into::into).collect()))?;
        Ok(self)
    }

    fn default_italics(&self, text: TextComponent) -> TextComponent {
        if self.remove_parent_italics {
            text.decoration_if_absent(TextDecoration::Italic, false)
        } else {
            text
        }
    }
}

/// Strips literal newlines from every line, including nested components.
fn sanitize_lore(lore: Option<Vec<TextComponent>>) -> Option<Vec<TextComponent>> {
    lore.map(|lines| {
        lines
            .into_iter()
            .map(|line| line.replace_literal("\n", ""))
            .collect()
    })
}
