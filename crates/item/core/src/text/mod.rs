//! Rich text used for item names and lore.
//!
//! Only the operations the builder needs are modelled: literal content with
//! children, per-component decorations with "fill if absent" semantics, literal
//! replacement across the tree, and plain-text rendering.
mod component;
mod style;

pub use component::TextComponent;
pub use style::{DecorationState, NamedColor, Style, TextDecoration};
