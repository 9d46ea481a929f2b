//! Host item platform.
//!
//! The builder never touches an [`ItemStack`]'s metadata directly: it asks the
//! platform for a detached snapshot and hands edited snapshots back. Hosts
//! decide which kinds exist, which metadata variant each kind carries, and which
//! stack sizes are legal. [`CatalogPlatform`] is an in-memory host driven by a
//! [`MaterialCatalog`].
mod catalog;

pub use catalog::{CatalogPlatform, MaterialCatalog, MaterialShape, MaterialSpec};

use crate::error::{ErrorSeverity, ItemError};
use crate::meta::ItemMeta;
use crate::stack::{ItemStack, Material};

/// Item model provided by the host.
pub trait ItemPlatform {
    /// Creates a stack of `kind` with default metadata for that kind.
    fn create_item(&self, kind: &Material, amount: u32) -> Result<ItemStack, PlatformError>;

    /// Returns a detached copy of the stack's metadata.
    fn item_meta(&self, stack: &ItemStack) -> ItemMeta {
        stack.clone_meta()
    }

    /// Replaces the stack's metadata with `meta` in one step.
    fn commit_meta(&self, stack: &mut ItemStack, meta: ItemMeta) -> Result<(), PlatformError>;

    /// Changes the stack's count.
    fn set_amount(&self, stack: &mut ItemStack, amount: u32) -> Result<(), PlatformError>;
}

/// Errors signalled by the host item model.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformError {
    /// The kind is not part of the host's vocabulary.
    #[error("unknown item kind {0}")]
    InvalidKind(Material),

    /// The stack size is outside the range the host supports for this kind.
    #[error("amount {amount} is out of range for {kind} (1..={max})")]
    AmountOutOfRange {
        kind: Material,
        amount: u32,
        max: u32,
    },

    /// A snapshot of the wrong variant was committed to a stack.
    #[error("metadata variant does not belong to {kind}")]
    MetaMismatch { kind: Material },
}

impl ItemError for PlatformError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidKind(_) | Self::AmountOutOfRange { .. } => ErrorSeverity::Validation,
            Self::MetaMismatch { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidKind(_) => "INVALID_KIND",
            Self::AmountOutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
            Self::MetaMismatch { .. } => "META_MISMATCH",
        }
    }
}
