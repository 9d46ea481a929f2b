use std::fmt;

use super::style::{DecorationState, NamedColor, Style, TextDecoration};

/// Rich text: literal content, a style, and styled children appended after it.
///
/// Values are immutable-by-convention: styling methods consume `self` and return
/// the modified component, so a caller's component is never edited behind its back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextComponent {
    content: String,
    style: Style,
    children: Vec<TextComponent>,
}

impl TextComponent {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[TextComponent] {
        &self.children
    }

    pub fn color(mut self, color: NamedColor) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn append(mut self, child: impl Into<TextComponent>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns this component's own state for `decoration`, ignoring ancestors.
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.style.decoration(decoration)
    }

    /// Sets `decoration`, overriding any existing value.
    pub fn decorate(mut self, decoration: TextDecoration, state: impl Into<DecorationState>) -> Self {
        self.style.set_decoration(decoration, state.into());
        self
    }

    /// Sets `decoration` only when this component leaves it unset.
    ///
    /// Children that set the decoration themselves keep their value; children that
    /// leave it unset inherit the filled-in default from this component.
    pub fn decoration_if_absent(
        mut self,
        decoration: TextDecoration,
        state: impl Into<DecorationState>,
    ) -> Self {
        if !self.style.decoration(decoration).is_set() {
            self.style.set_decoration(decoration, state.into());
        }
        self
    }

    /// Replaces every occurrence of `pattern` in this component's content and in
    /// all descendants. Matches never span component boundaries.
    pub fn replace_literal(mut self, pattern: &str, replacement: &str) -> Self {
        if !pattern.is_empty() && self.content.contains(pattern) {
            self.content = self.content.replace(pattern, replacement);
        }
        self.children = self
            .children
            .into_iter()
            .map(|child| child.replace_literal(pattern, replacement))
            .collect();
        self
    }

    /// Concatenated content of this component and its descendants, depth first.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.content.len());
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

impl fmt::Display for TextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}

impl From<&str> for TextComponent {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for TextComponent {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}
