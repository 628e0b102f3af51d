//! Qualified names for tags and attributes.

use std::fmt::Display;

/// The namespace URI reserved for `xmlns:` declarations.
pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";

/// The SVG namespace URI, declared on every document root.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A qualified name used for the names of tags and attributes.
///
/// Attributes are keyed by `(namespace, local)`; the prefix only matters for
/// writing the name back out.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualName {
    /// The prefix (e.g. the `inkscape` of `inkscape:label`).
    pub prefix: Option<String>,
    /// The namespace URI the name resolves to.
    pub ns: Option<String>,
    /// The local part (e.g. the `label` of `inkscape:label`).
    pub local: String,
}

impl QualName {
    /// Creates a name with no prefix and no namespace.
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            ns: None,
            local: local.into(),
        }
    }

    /// Creates a namespace-qualified, prefixed name.
    pub fn namespaced(
        prefix: impl Into<String>,
        ns: impl Into<String>,
        local: impl Into<String>,
    ) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ns: Some(ns.into()),
            local: local.into(),
        }
    }

    /// Whether the name resolves to the same attribute slot as
    /// `(namespace, local)`.
    pub fn matches(&self, ns: Option<&str>, local: &str) -> bool {
        self.ns.as_deref() == ns && self.local == local
    }
}

impl Display for QualName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(p) => f.write_fmt(format_args!("{p}:{}", self.local)),
            None => Display::fmt(&self.local, f),
        }
    }
}

#[test]
fn qual_name_identity() {
    let plain = QualName::local("label");
    let inkscape = QualName::namespaced(
        "inkscape",
        "http://www.inkscape.org/namespaces/inkscape",
        "label",
    );
    assert!(plain.matches(None, "label"));
    assert!(!plain.matches(Some("http://www.inkscape.org/namespaces/inkscape"), "label"));
    assert!(inkscape.matches(Some("http://www.inkscape.org/namespaces/inkscape"), "label"));
    assert!(!inkscape.matches(None, "label"));
    assert_eq!(inkscape.to_string(), "inkscape:label");
    assert_eq!(plain.to_string(), "label");
}
