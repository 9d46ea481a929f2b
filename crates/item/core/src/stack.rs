//! Item kinds and item stacks.

use std::borrow::Cow;
use std::fmt;

use crate::meta::ItemMeta;

/// Identifier of an item kind in the host's vocabulary (`stone`, `player_head`).
///
/// Identifiers are normalized on construction: lowercase, `-` and spaces become
/// `_`, and a leading `minecraft:` namespace is dropped. Whether a material is
/// actually known is decided by the host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Material(Cow<'static, str>);

impl Material {
    pub const AIR: Material = Material(Cow::Borrowed("air"));
    pub const NAMESPACE: &'static str = "minecraft:";

    pub fn new(key: impl AsRef<str>) -> Self {
        let key = key.as_ref().trim();
        let key = key.strip_prefix(Self::NAMESPACE).unwrap_or(key);
        let normalized: String = key
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self(Cow::Owned(normalized))
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn is_air(&self) -> bool {
        self.key() == Self::AIR.key()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::AIR
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::NAMESPACE, self.0)
    }
}

impl From<&str> for Material {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Material {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Material> for String {
    fn from(value: Material) -> Self {
        value.0.into_owned()
    }
}

/// A stack of one material with its metadata.
///
/// The metadata is only reachable as a detached clone; writes go through
/// [`ItemStack::store_meta`], which hosts call after validating a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    kind: Material,
    amount: u32,
    meta: ItemMeta,
}

impl ItemStack {
    pub fn new(kind: Material, amount: u32, meta: ItemMeta) -> Self {
        Self { kind, amount, meta }
    }

    pub fn kind(&self) -> &Material {
        &self.kind
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Detached copy of the current metadata.
    pub fn clone_meta(&self) -> ItemMeta {
        self.meta.clone()
    }

    /// Replaces the metadata wholesale. No validation happens here.
    pub fn store_meta(&mut self, meta: ItemMeta) {
        self.meta = meta;
    }

    /// Replaces the count. No validation happens here.
    pub fn store_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.kind.is_air()
    }
}
