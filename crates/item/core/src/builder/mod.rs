//! Declarative configuration of a single item.
//!
//! [`ItemBuilder`] owns one [`ItemStack`] and exposes getter/setter pairs for the
//! attributes a GUI item usually needs. Getters read a detached metadata
//! snapshot from the platform; setters run a scoped edit (snapshot, mutate the
//! copy, commit the copy) so every write is applied immediately and atomically.
//! The stack is well-formed between any two calls.
//!
//! # Example
//!
//! ```
//! use item_core::{CatalogPlatform, ItemBuilder};
//!
//! let platform = CatalogPlatform::vanilla();
//! let stack = ItemBuilder::new(&platform, "stone")?
//!     .with_name("Cobble")?
//!     .with_lore(["Line one", "Line two"])?
//!     .with_glowing(true)?
//!     .build();
//! assert_eq!(stack.clone_meta().display_name().unwrap().plain_text(), "Cobble");
//! # Ok::<(), item_core::PlatformError>(())
//! ```
mod glow;
mod identity;
mod text;

use crate::config::BuilderConfig;
use crate::meta::ItemMeta;
use crate::platform::{ItemPlatform, PlatformError};
use crate::stack::{ItemStack, Material};

/// Builder over one item instance.
///
/// Besides the stack, the builder keeps two pieces of local state: the italics
/// policy applied to names and lore, and the last glow value set through it.
/// Glow is not recomputed from enchantments; see [`ItemBuilder::glowing`].
#[derive(Debug)]
pub struct ItemBuilder<'a, P: ItemPlatform + ?Sized> {
    platform: &'a P,
    stack: ItemStack,
    remove_parent_italics: bool,
    glowing: bool,
}

impl<'a, P: ItemPlatform + ?Sized> ItemBuilder<'a, P> {
    /// Creates a builder for a single item of `kind`.
    pub fn new(platform: &'a P, kind: impl Into<Material>) -> Result<Self, PlatformError> {
        Self::with_amount(platform, kind, BuilderConfig::DEFAULT_AMOUNT)
    }

    pub fn with_amount(
        platform: &'a P,
        kind: impl Into<Material>,
        amount: u32,
    ) -> Result<Self, PlatformError> {
        Self::with_config(platform, kind, amount, &BuilderConfig::default())
    }

    pub fn with_config(
        platform: &'a P,
        kind: impl Into<Material>,
        amount: u32,
        config: &BuilderConfig,
    ) -> Result<Self, PlatformError> {
        let kind = kind.into();
        let stack = platform.create_item(&kind, amount)?;
        tracing::debug!(%kind, amount, "created item builder");

        Ok(Self {
            platform,
            stack,
            remove_parent_italics: config.remove_parent_italics,
            glowing: false,
        })
    }

    /// The stack under construction.
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Finishes configuration and hands the stack to the caller.
    pub fn build(self) -> ItemStack {
        self.stack
    }

    /// Detached snapshot of the current metadata.
    pub fn meta(&self) -> ItemMeta {
        self.platform.item_meta(&self.stack)
    }

    pub fn remove_parent_italics(&self) -> bool {
        self.remove_parent_italics
    }

    /// Applies to names and lore set afterwards; already committed text is kept.
    pub fn set_remove_parent_italics(&mut self, remove: bool) {
        self.remove_parent_italics = remove;
    }

    /// Direct access to the underlying stack, bypassing the platform.
    pub fn edit_stack<R>(&mut self, edit: impl FnOnce(&mut ItemStack) -> R) -> R {
        edit(&mut self.stack)
    }

    // ===== scoped metadata edit =====

    /// Runs `transform` on a detached metadata copy and commits the copy.
    ///
    /// If `transform` fails, nothing is committed and its error is returned
    /// unchanged. Platform rejections of the commit convert into `E`.
    pub fn try_edit_meta<E>(
        &mut self,
        transform: impl FnOnce(&mut ItemMeta) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<PlatformError>,
    {
        let mut meta = self.meta();
        transform(&mut meta)?;
        self.commit(meta)?;
        Ok(())
    }

    /// Infallible-transform form of [`ItemBuilder::try_edit_meta`].
    pub fn edit_meta(&mut self, transform: impl FnOnce(&mut ItemMeta)) -> Result<(), PlatformError> {
        self.try_edit_meta(|meta| {
            transform(meta);
            Ok(())
        })
    }

    fn commit(&mut self, meta: ItemMeta) -> Result<(), PlatformError> {
        self.platform.commit_meta(&mut self.stack, meta)?;
        tracing::trace!(kind = %self.stack.kind(), "committed item metadata");
        Ok(())
    }

    // ===== scalar attributes =====

    pub fn amount(&self) -> u32 {
        self.stack.amount()
    }

    /// Range checks are the platform's; its error is returned as is.
    pub fn set_amount(&mut self, amount: u32) -> Result<(), PlatformError> {
        self.platform.set_amount(&mut self.stack, amount)
    }

    pub fn with_amount_set(mut self, amount: u32) -> Result<Self, PlatformError> {
        self.set_amount(amount)?;
        Ok(self)
    }

    /// Custom model data, or `0` when unset.
    pub fn custom_model_data(&self) -> i32 {
        self.meta().custom_model_data()
    }

    pub fn set_custom_model_data(&mut self, value: i32) -> Result<(), PlatformError> {
        self.edit_meta(|meta| meta.set_custom_model_data(Some(value)))
    }

    pub fn with_custom_model_data(mut self, value: i32) -> Result<Self, PlatformError> {
        self.set_custom_model_data(value)?;
        Ok(self)
    }
}

/// Builds one item of `kind`, configured by `configure`.
///
/// ```
/// use item_core::{CatalogPlatform, Material, item};
///
/// let platform = CatalogPlatform::vanilla();
/// let filler = item(&platform, "gray_stained_glass_pane", |pane| {
///     pane.set_name(Some(" ".into()))
/// })?;
/// assert_eq!(filler.kind(), &Material::new("gray_stained_glass_pane"));
/// # Ok::<(), item_core::PlatformError>(())
/// ```
pub fn item<P, F>(
    platform: &P,
    kind: impl Into<Material>,
    configure: F,
) -> Result<ItemStack, PlatformError>
where
    P: ItemPlatform + ?Sized,
    F: FnOnce(&mut ItemBuilder<'_, P>) -> Result<(), PlatformError>,
{
    let mut builder = ItemBuilder::new(platform, kind)?;
    configure(&mut builder)?;
    Ok(builder.build())
}
