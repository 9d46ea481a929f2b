//! Text style primitives: decorations, their tri-state values, and colors.

use std::collections::BTreeMap;

/// Font decoration that can be toggled on a text component.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TextDecoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

/// Tri-state value of a decoration.
///
/// `NotSet` means the component inherits the value from its parent (or from the
/// client's default, which is italic for item names and lore).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DecorationState {
    #[default]
    NotSet,
    False,
    True,
}

impl DecorationState {
    pub fn is_set(self) -> bool {
        !matches!(self, Self::NotSet)
    }
}

impl From<bool> for DecorationState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

/// The sixteen legacy chat colors.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Style attached to a single component. Children inherit unset values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub color: Option<NamedColor>,
    /// Explicitly set decorations only; absent keys are [`DecorationState::NotSet`].
    pub decorations: BTreeMap<TextDecoration, bool>,
}

impl Style {
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.decorations
            .get(&decoration)
            .copied()
            .map(DecorationState::from)
            .unwrap_or_default()
    }

    pub fn set_decoration(&mut self, decoration: TextDecoration, state: DecorationState) {
        match state {
            DecorationState::NotSet => {
                self.decorations.remove(&decoration);
            }
            DecorationState::True => {
                self.decorations.insert(decoration, true);
            }
            DecorationState::False => {
                self.decorations.insert(decoration, false);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }
}
