//! The CSS-like declaration block stored in the `style` attribute.

use itertools::Itertools;

use crate::attribute::{Attribute, Attributes};
use crate::name::QualName;

/// A parsed `style` declaration block. (e.g. `display: none; opacity: 0.5`)
///
/// Property names compare case-insensitively; the spelling of the first
/// write is kept. Within one block the last declaration for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Parses a declaration block.
    ///
    /// Empty segments and segments that don't split into exactly one name
    /// and one value on `:` are discarded; both sides are trimmed.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::default();
        for segment in text.split(';').filter(|s| !s.is_empty()) {
            let parts: Vec<&str> = segment.split(':').collect();
            let &[name, value] = &parts[..] else {
                continue;
            };
            map.insert(name.trim(), value.trim());
        }
        map
    }

    /// Returns the value declared for the name, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Declares a value for the name, replacing any existing declaration
    /// with a case-insensitively equal name.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, old)) => *old = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Removes the declaration for the name, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self
            .entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index).1)
    }

    /// The number of declarations in the block.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the block back to attribute text. (`name: value` pairs
    /// joined by `;`)
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .join(";")
    }
}

/// A live view over an element's `style` attribute.
///
/// Every operation re-parses the attribute's current text and flattens the
/// whole block back on write; no parsed state is cached, so the view is
/// always derived from ground truth. A read-modify-write against the same
/// attribute from two views is last-write-wins, not a merge.
#[derive(Clone, Copy)]
pub struct Styles<'arena> {
    attrs: Attributes<'arena>,
}

impl<'arena> Styles<'arena> {
    pub(crate) fn new(attrs: Attributes<'arena>) -> Self {
        Self { attrs }
    }

    /// Parses the attribute's current text. Absence parses as an empty map.
    pub fn map(&self) -> StyleMap {
        match self.attrs.get("style") {
            Some(attr) => StyleMap::parse(&attr.value),
            None => StyleMap::default(),
        }
    }

    fn write(&self, map: &StyleMap) {
        if map.is_empty() {
            self.attrs.remove("style");
        } else {
            self.attrs
                .set(Attribute::new(QualName::local("style"), map.to_text()));
        }
    }

    /// Returns the value declared for the property, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.map().get(name).map(str::to_string)
    }

    /// Declares a value for the property.
    pub fn set(&self, name: &str, value: &str) {
        let mut map = self.map();
        map.insert(name, value);
        self.write(&map);
    }

    /// Removes the property; removing the last one removes the attribute.
    pub fn remove(&self, name: &str) {
        let mut map = self.map();
        map.remove(name);
        self.write(&map);
    }
}
