//! Declarative item construction on top of a host item model.
//!
//! `item-core` defines the value types of the host model (stacks, metadata
//! snapshots, rich text, enchantments, flags, player identities), the
//! [`ItemPlatform`] trait through which the host is reached, and
//! [`ItemBuilder`], which turns attribute writes into scoped metadata edits.
//! [`CatalogPlatform`] is an in-memory host for tools and tests.
pub mod builder;
pub mod config;
pub mod error;
pub mod meta;
pub mod platform;
pub mod stack;
pub mod text;

pub use builder::{ItemBuilder, item};
pub use config::BuilderConfig;
pub use error::{ErrorSeverity, ItemError};
pub use meta::{
    Enchantment, ItemFlags, ItemMeta, MetaVariant, PlayerIdentity, PlayerProfile, ProfileProperty,
    SkullMeta,
};
pub use platform::{
    CatalogPlatform, ItemPlatform, MaterialCatalog, MaterialShape, MaterialSpec, PlatformError,
};
pub use stack::{ItemStack, Material};
pub use text::{DecorationState, NamedColor, Style, TextComponent, TextDecoration};
