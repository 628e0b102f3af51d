//! The whitespace-separated token set stored in the `class` attribute.

use itertools::Itertools;

use crate::attribute::{Attribute, Attributes};
use crate::name::QualName;

/// A list observing and manipulating the tokens of the `class` attribute.
///
/// Every operation re-parses the attribute's current text and flattens the
/// tokens back on write; no token state is cached. Duplicates collapse on
/// parse and insertion order is preserved. Removing the last token removes
/// the attribute itself rather than leaving an empty string behind.
#[derive(Clone, Copy)]
pub struct ClassList<'arena> {
    attrs: Attributes<'arena>,
}

impl<'arena> ClassList<'arena> {
    pub(crate) fn new(attrs: Attributes<'arena>) -> Self {
        Self { attrs }
    }

    /// The tokens parsed from the attribute's current text.
    pub fn tokens(&self) -> Vec<String> {
        match self.attrs.get("class") {
            Some(attr) => attr
                .value
                .split_whitespace()
                .unique()
                .map(str::to_string)
                .collect(),
            None => vec![],
        }
    }

    fn write(&self, tokens: &[String]) {
        if tokens.is_empty() {
            self.attrs.remove("class");
        } else {
            self.attrs.set(Attribute::new(
                QualName::local("class"),
                tokens.iter().join(" "),
            ));
        }
    }

    /// The number of tokens in the list.
    pub fn length(&self) -> usize {
        self.tokens().len()
    }

    /// Returns whether the list contains the given token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().iter().any(|t| t == token)
    }

    /// Adds the given token to the list, skipping if already present.
    pub fn add(&self, token: &str) {
        debug_assert!(!token.chars().any(char::is_whitespace));
        let mut tokens = self.tokens();
        if tokens.iter().any(|t| t == token) {
            log::debug!("class {token:?} not added, already present");
            return;
        }
        tokens.push(token.to_string());
        self.write(&tokens);
    }

    /// Removes the given token from the list.
    pub fn remove(&self, token: &str) {
        let mut tokens = self.tokens();
        let Some(index) = tokens.iter().position(|t| t == token) else {
            log::debug!("class {token:?} not removed, not present");
            return;
        };
        tokens.remove(index);
        self.write(&tokens);
    }

    /// Removes the token if present, returning `false`; otherwise adds it,
    /// returning `true`.
    pub fn toggle(&self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token);
            true
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> RefCell<Vec<Attribute>> {
        RefCell::new(vec![])
    }

    #[test]
    fn add_then_contains() {
        let store = store();
        let classes = ClassList::new(Attributes(&store));

        classes.add("a");
        assert!(classes.contains("a"));
        classes.add("b");
        classes.add("a");
        assert_eq!(classes.tokens(), ["a", "b"]);
        assert_eq!(store.borrow()[0].value, "a b");
    }

    #[test]
    fn removing_last_token_removes_attribute() {
        let store = store();
        let classes = ClassList::new(Attributes(&store));

        classes.add("a");
        classes.remove("a");
        assert!(!classes.contains("a"));
        // Absence, not an empty string.
        assert!(store.borrow().is_empty());
    }

    #[test]
    fn toggle() {
        let store = store();
        let classes = ClassList::new(Attributes(&store));

        assert!(classes.toggle("a"));
        assert!(classes.contains("a"));
        assert!(!classes.toggle("a"));
        assert!(!classes.contains("a"));
    }

    #[test]
    fn parse_collapses_duplicates_and_whitespace() {
        let store = store();
        let attrs = Attributes(&store);
        attrs.set(Attribute::new(
            QualName::local("class"),
            "  a\t b a \n c ",
        ));

        let classes = ClassList::new(attrs);
        assert_eq!(classes.tokens(), ["a", "b", "c"]);
        assert_eq!(classes.length(), 3);
    }
}
