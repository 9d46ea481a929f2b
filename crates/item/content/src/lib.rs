//! Data-driven item content and loaders.
//!
//! This crate houses declarative item definitions and provides loaders for
//! TOML/RON data files:
//! - Material catalogs (TOML) backing an in-memory [`item_core::CatalogPlatform`]
//! - Builder configuration (TOML)
//! - Item templates (RON), applied through [`item_core::ItemBuilder`]
//!
//! All loaders use item-core types directly with serde for deserialization.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::{ItemTemplate, TemplateSet, TemplateText};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult, TemplateLoader};
