//! Element attribute storage.
//!
//! An element owns one attribute table: a list of `(name, text)` entries
//! where keys are unique per `(namespace, local name)` pair and order carries
//! no meaning. Typed access over this raw text lives on
//! [`Element`](crate::element::Element).

use std::cell::{Ref, RefCell};
use std::fmt::Debug;

use crate::name::QualName;

/// One attribute of an element. (e.g. the `r` of `r="4"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The name of the attribute.
    pub name: QualName,
    /// The attribute's text value.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute from a name and text value.
    pub fn new(name: QualName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// The list of attributes of an element.
#[derive(Clone, Copy)]
pub struct Attributes<'arena>(pub(crate) &'arena RefCell<Vec<Attribute>>);

impl<'arena> Attributes<'arena> {
    /// The number of attributes stored in the collection.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the collection holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the un-namespaced attribute with the given local name.
    pub fn get(&self, local: &str) -> Option<Ref<'arena, Attribute>> {
        Ref::filter_map(self.0.borrow(), |v| {
            v.iter().find(|a| a.name.matches(None, local))
        })
        .ok()
    }

    /// Returns the attribute with the given local name in the given namespace.
    pub fn get_ns(&self, ns: &str, local: &str) -> Option<Ref<'arena, Attribute>> {
        Ref::filter_map(self.0.borrow(), |v| {
            v.iter().find(|a| a.name.matches(Some(ns), local))
        })
        .ok()
    }

    /// Puts the attribute in the collection, replacing any existing entry
    /// with the same `(namespace, local)` key. Returns the replaced entry.
    pub fn set(&self, attr: Attribute) -> Option<Attribute> {
        let attrs = &mut *self.0.borrow_mut();
        if let Some(index) = attrs
            .iter()
            .position(|a| a.name.matches(attr.name.ns.as_deref(), &attr.name.local))
        {
            Some(std::mem::replace(&mut attrs[index], attr))
        } else {
            attrs.push(attr);
            None
        }
    }

    /// Removes the un-namespaced attribute with the given local name.
    pub fn remove(&self, local: &str) -> Option<Attribute> {
        self.remove_by(None, local)
    }

    /// Removes the attribute with the given local name in the given namespace.
    pub fn remove_ns(&self, ns: &str, local: &str) -> Option<Attribute> {
        self.remove_by(Some(ns), local)
    }

    fn remove_by(&self, ns: Option<&str>, local: &str) -> Option<Attribute> {
        let mut attrs = self.0.borrow_mut();
        let index = attrs.iter().position(|a| a.name.matches(ns, local))?;
        Some(attrs.remove(index))
    }
}

impl Debug for Attributes<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Attributes { ")?;
        self.0.borrow().iter().try_for_each(|a| {
            f.write_fmt(format_args!(r#"{}="{}" "#, a.name, a.value))
        })?;
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    const NS: &str = "http://www.inkscape.org/namespaces/inkscape";

    #[test]
    fn set_replaces_by_namespace_and_local() {
        let store = RefCell::new(vec![]);
        let attrs = Attributes(&store);

        attrs.set(Attribute::new(QualName::local("label"), "plain"));
        attrs.set(Attribute::new(
            QualName::namespaced("inkscape", NS, "label"),
            "layered",
        ));
        assert_eq!(attrs.len(), 2);

        attrs.set(Attribute::new(QualName::local("label"), "replaced"));
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("label").unwrap().value, "replaced");
        assert_eq!(attrs.get_ns(NS, "label").unwrap().value, "layered");
    }

    #[test]
    fn remove_is_keyed() {
        let store = RefCell::new(vec![]);
        let attrs = Attributes(&store);
        attrs.set(Attribute::new(QualName::local("label"), "plain"));
        attrs.set(Attribute::new(
            QualName::namespaced("inkscape", NS, "label"),
            "layered",
        ));

        assert!(attrs.remove_ns(NS, "label").is_some());
        assert!(attrs.remove_ns(NS, "label").is_none());
        assert_eq!(attrs.get("label").unwrap().value, "plain");
        assert!(attrs.remove("label").is_some());
        assert!(attrs.is_empty());
    }
}
