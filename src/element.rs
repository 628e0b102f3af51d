//! Element wrapper and the typed attribute store.

use std::cell::RefCell;
use std::fmt::Debug;

use crate::{
    attribute::{Attribute, Attributes},
    class_list::ClassList,
    color::Color,
    defaults,
    error::Error,
    name::{QualName, XMLNS_NS},
    node::{NodeData, Ref},
    style::Styles,
    value::{AttrValue, StrokeLineCap},
};

/// An element of the document tree.
///
/// The wrapper holds a non-owning reference into the arena; any number of
/// wrappers may alias one node. All typed access goes through the element's
/// attribute table: reads decode the attribute's current text (absence
/// resolves to the caller's default, malformed text is a hard error), writes
/// encode before touching the table.
#[derive(Clone, Copy)]
pub struct Element<'arena> {
    node: Ref<'arena>,
}

impl<'arena> Element<'arena> {
    /// Converts the node into an element, if it is one.
    pub fn new(node: Ref<'arena>) -> Option<Self> {
        matches!(node.node_data, NodeData::Element { .. }).then_some(Self { node })
    }

    /// The wrapped node.
    pub fn node(&self) -> Ref<'arena> {
        self.node
    }

    fn data(&self) -> (&'arena QualName, &'arena RefCell<Vec<Attribute>>) {
        if let NodeData::Element { name, attrs } = &self.node.node_data {
            (name, attrs)
        } else {
            unreachable!("Element contains non-element data. This is a bug!")
        }
    }

    /// The element's qualified tag name.
    pub fn qual_name(&self) -> &'arena QualName {
        self.data().0
    }

    /// The local part of the element's tag name.
    pub fn local_name(&self) -> &'arena str {
        &self.qual_name().local
    }

    /// The element's attribute collection.
    pub fn attributes(&self) -> Attributes<'arena> {
        Attributes(self.data().1)
    }

    /// Adds the element to the end of this element's child list.
    pub fn append(&self, child: Element<'arena>) {
        self.node.append_child(child.node);
    }

    /// The element's parent, if it has one and it is an element.
    pub fn parent_element(&self) -> Option<Self> {
        self.node.parent.get().and_then(Element::new)
    }

    /// Returns an iterator over the element's child elements.
    pub fn children_iter(&self) -> impl Iterator<Item = Element<'arena>> {
        self.node.child_nodes_iter().filter_map(Element::new)
    }

    /// The topmost element of the tree this element participates in.
    ///
    /// Walks the parent links to the top; when the top is a document root
    /// node, its document element is returned instead.
    pub fn document_element(&self) -> Self {
        let mut top = self.node;
        while let Some(parent) = top.parent.get() {
            top = parent;
        }
        match Element::new(top) {
            Some(element) => element,
            None => top
                .child_nodes_iter()
                .find_map(Element::new)
                .unwrap_or(*self),
        }
    }

    /// Declares `xmlns:prefix="uri"` on this element. Re-declaring the same
    /// prefix replaces the previous declaration, so the call is idempotent.
    pub fn declare_namespace(&self, prefix: &str, uri: &str) {
        if self.attributes().get_ns(XMLNS_NS, prefix).is_some() {
            log::debug!("namespace {prefix:?} already declared");
        }
        self.attributes().set(Attribute::new(
            QualName::namespaced("xmlns", XMLNS_NS, prefix),
            uri,
        ));
    }

    // Raw text primitives. These are the only operations that touch the
    // attribute table; everything typed builds on them.

    /// The raw text of the un-namespaced attribute, if present.
    pub fn attribute(&self, local: &str) -> Option<String> {
        self.attributes().get(local).map(|a| a.value.clone())
    }

    /// The raw text of the namespace-qualified attribute, if present.
    pub fn attribute_ns(&self, ns: &str, local: &str) -> Option<String> {
        self.attributes().get_ns(ns, local).map(|a| a.value.clone())
    }

    /// Writes raw text as the un-namespaced attribute, creating it if absent.
    pub fn set_attribute(&self, local: &str, value: &str) {
        self.attributes()
            .set(Attribute::new(QualName::local(local), value));
    }

    /// Writes raw text as the namespace-qualified attribute.
    pub fn set_attribute_ns(&self, prefix: &str, ns: &str, local: &str, value: &str) {
        self.attributes()
            .set(Attribute::new(QualName::namespaced(prefix, ns, local), value));
    }

    /// Removes the un-namespaced attribute, if present.
    pub fn remove_attribute(&self, local: &str) {
        self.attributes().remove(local);
    }

    /// Removes the namespace-qualified attribute, if present.
    pub fn remove_attribute_ns(&self, ns: &str, local: &str) {
        self.attributes().remove_ns(ns, local);
    }

    // The typed store.

    /// Reads the attribute as a `T`, falling back to `default` when absent.
    ///
    /// Only absence yields the default; present-but-malformed text is a
    /// [`Error::MalformedValue`] carrying the attribute name and raw text.
    pub fn get<T: AttrValue>(&self, name: &str, default: T) -> Result<T, Error> {
        match self.attribute(name) {
            None => Ok(default),
            Some(text) => T::decode(&text).map_err(|kind| Error::malformed(name, text, kind)),
        }
    }

    /// Namespace-qualified [`Element::get`].
    pub fn get_ns<T: AttrValue>(&self, ns: &str, name: &str, default: T) -> Result<T, Error> {
        match self.attribute_ns(ns, name) {
            None => Ok(default),
            Some(text) => T::decode(&text).map_err(|kind| Error::malformed(name, text, kind)),
        }
    }

    /// Encodes the value and writes it as the attribute's text.
    ///
    /// A failed encode surfaces before the attribute table is touched.
    pub fn set<T: AttrValue>(&self, name: &str, value: &T) -> Result<(), Error> {
        let text = encode(name, value)?;
        self.set_attribute(name, &text);
        Ok(())
    }

    /// Namespace-qualified [`Element::set`].
    pub fn set_ns<T: AttrValue>(
        &self,
        prefix: &str,
        ns: &str,
        name: &str,
        value: &T,
    ) -> Result<(), Error> {
        let text = encode(name, value)?;
        self.set_attribute_ns(prefix, ns, name, &text);
        Ok(())
    }

    /// Reads an optional attribute; absence decodes to `None`.
    pub fn get_opt<T: AttrValue>(&self, name: &str) -> Result<Option<T>, Error> {
        match self.attribute(name) {
            None => Ok(None),
            Some(text) => T::decode(&text)
                .map(Some)
                .map_err(|kind| Error::malformed(name, text, kind)),
        }
    }

    /// Writes an optional attribute; `None` removes it rather than writing
    /// any text.
    pub fn set_opt<T: AttrValue>(&self, name: &str, value: Option<&T>) -> Result<(), Error> {
        match value {
            Some(value) => self.set(name, value),
            None => {
                self.remove_attribute(name);
                Ok(())
            }
        }
    }

    // Presentation properties shared by every element.

    /// The `id` attribute, or empty when absent.
    pub fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    /// Sets the `id` attribute.
    pub fn set_id(&self, id: &str) {
        self.set_attribute("id", id);
    }

    /// The `transform` attribute, passed through as raw text.
    pub fn transform(&self) -> String {
        self.attribute("transform").unwrap_or_default()
    }

    /// Sets the `transform` attribute.
    pub fn set_transform(&self, transform: &str) {
        self.set_attribute("transform", transform);
    }

    /// The `tabindex` attribute; absence is `None`.
    pub fn tab_index(&self) -> Result<Option<i32>, Error> {
        self.get_opt("tabindex")
    }

    /// Sets the `tabindex` attribute; `None` removes it.
    pub fn set_tab_index(&self, value: Option<i32>) -> Result<(), Error> {
        self.set_opt("tabindex", value.as_ref())
    }

    /// The `fill` paint.
    pub fn fill(&self) -> Result<Color, Error> {
        self.get("fill", defaults::FILL)
    }

    /// Sets the `fill` paint.
    pub fn set_fill(&self, color: Color) -> Result<(), Error> {
        self.set("fill", &color)
    }

    /// The `fill-opacity` value.
    pub fn fill_opacity(&self) -> Result<f64, Error> {
        self.get("fill-opacity", defaults::FILL_OPACITY)
    }

    /// Sets the `fill-opacity` value.
    pub fn set_fill_opacity(&self, opacity: f64) -> Result<(), Error> {
        self.set("fill-opacity", &opacity)
    }

    /// The `stroke` paint.
    pub fn stroke(&self) -> Result<Color, Error> {
        self.get("stroke", defaults::STROKE)
    }

    /// Sets the `stroke` paint.
    pub fn set_stroke(&self, color: Color) -> Result<(), Error> {
        self.set("stroke", &color)
    }

    /// The `stroke-opacity` value.
    pub fn stroke_opacity(&self) -> Result<f64, Error> {
        self.get("stroke-opacity", defaults::STROKE_OPACITY)
    }

    /// Sets the `stroke-opacity` value.
    pub fn set_stroke_opacity(&self, opacity: f64) -> Result<(), Error> {
        self.set("stroke-opacity", &opacity)
    }

    /// The `stroke-width` value.
    pub fn stroke_width(&self) -> Result<f64, Error> {
        self.get("stroke-width", defaults::STROKE_WIDTH)
    }

    /// Sets the `stroke-width` value.
    pub fn set_stroke_width(&self, width: f64) -> Result<(), Error> {
        self.set("stroke-width", &width)
    }

    /// The `stroke-linecap` style.
    pub fn stroke_line_cap(&self) -> Result<StrokeLineCap, Error> {
        self.get("stroke-linecap", defaults::STROKE_LINECAP)
    }

    /// Sets the `stroke-linecap` style.
    pub fn set_stroke_line_cap(&self, cap: StrokeLineCap) -> Result<(), Error> {
        self.set("stroke-linecap", &cap)
    }

    /// A live view over the tokens of the `class` attribute.
    pub fn class_list(&self) -> ClassList<'arena> {
        ClassList::new(self.attributes())
    }

    /// A live view over the declarations of the `style` attribute.
    pub fn styles(&self) -> Styles<'arena> {
        Styles::new(self.attributes())
    }

    /// Whether the element is visible: true unless the `display` style
    /// declaration is `none`.
    pub fn is_visible(&self) -> bool {
        self.styles().get("display").as_deref() != Some("none")
    }

    /// Sets visibility through the `display` style declaration: hiding
    /// writes `display: none`, showing removes the declaration entirely.
    pub fn set_visible(&self, visible: bool) {
        if visible {
            self.styles().remove("display");
        } else {
            self.styles().set("display", "none");
        }
    }
}

fn encode<T: AttrValue>(name: &str, value: &T) -> Result<String, Error> {
    value.encode().map_err(|_| Error::unrepresentable(name))
}

impl Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Element {{ <{} {:?}> {} child nodes }}",
            self.qual_name(),
            self.attributes(),
            self.node.child_node_count()
        ))
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(other.node)
    }
}

impl Eq for Element<'_> {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::ValueErrorKind, node::Node};

    fn element<'arena>(arena: crate::node::Arena<'arena>, name: &str) -> Element<'arena> {
        let node = arena.alloc(Node::new(NodeData::Element {
            name: QualName::local(name),
            attrs: RefCell::new(vec![]),
        }));
        Element::new(node).unwrap()
    }

    #[test]
    fn absent_attribute_yields_default_without_writing() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        assert_eq!(rect.get("stroke-width", 2.5), Ok(2.5));
        assert!(rect.attributes().is_empty());
    }

    #[test]
    fn set_then_get_ignores_default() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        rect.set("stroke-width", &4.0).unwrap();
        assert_eq!(rect.get("stroke-width", 99.0), Ok(4.0));
        assert_eq!(rect.attribute("stroke-width").as_deref(), Some("4"));
    }

    #[test]
    fn malformed_text_is_an_error_not_a_default() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");
        rect.set_attribute("stroke-width", "abc");

        assert_eq!(
            rect.get("stroke-width", 1.0),
            Err(Error::MalformedValue {
                name: "stroke-width".to_string(),
                value: "abc".to_string(),
                kind: ValueErrorKind::Number,
            })
        );
    }

    #[test]
    fn optional_attribute() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        assert_eq!(rect.tab_index(), Ok(None));
        rect.set_tab_index(Some(3)).unwrap();
        assert_eq!(rect.tab_index(), Ok(Some(3)));
        assert_eq!(rect.attribute("tabindex").as_deref(), Some("3"));
        rect.set_tab_index(None).unwrap();
        assert_eq!(rect.attribute("tabindex"), None);
    }

    #[test]
    fn namespaced_attributes_are_distinct() {
        let arena = typed_arena::Arena::new();
        let g = element(&arena, "g");
        const NS: &str = "http://www.inkscape.org/namespaces/inkscape";

        g.set_attribute("label", "plain");
        g.set_attribute_ns("inkscape", NS, "label", "layered");
        assert_eq!(g.attribute("label").as_deref(), Some("plain"));
        assert_eq!(g.attribute_ns(NS, "label").as_deref(), Some("layered"));
    }

    #[test]
    fn namespaced_typed_access() {
        let arena = typed_arena::Arena::new();
        let g = element(&arena, "g");
        const NS: &str = "http://www.inkscape.org/namespaces/inkscape";

        g.set_ns("inkscape", NS, "version", &1.5).unwrap();
        assert_eq!(g.get_ns(NS, "version", 0.0), Ok(1.5));
        assert_eq!(g.get_ns(NS, "missing", 7.0), Ok(7.0));
        assert_eq!(g.attribute_ns(NS, "version").as_deref(), Some("1.5"));
    }

    #[test]
    fn presentation_defaults() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        assert_eq!(rect.fill(), Ok(Color::Rgb(0, 0, 0)));
        assert_eq!(rect.stroke(), Ok(Color::None));
        assert_eq!(rect.fill_opacity(), Ok(1.0));
        assert_eq!(rect.stroke_width(), Ok(1.0));
        assert_eq!(rect.stroke_line_cap(), Ok(StrokeLineCap::Butt));
    }

    #[test]
    fn fill_round_trips_through_text() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        rect.set_fill(Color::Rgb(255, 0, 170)).unwrap();
        assert_eq!(rect.attribute("fill").as_deref(), Some("#FF00AA"));
        assert_eq!(rect.fill(), Ok(Color::Rgb(255, 0, 170)));
    }

    #[test]
    fn visibility_through_display_style() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        assert!(rect.is_visible());
        rect.set_visible(false);
        assert!(!rect.is_visible());
        assert_eq!(rect.attribute("style").as_deref(), Some("display: none"));

        // Showing again removes the declaration, and with it the attribute.
        rect.set_visible(true);
        assert!(rect.is_visible());
        assert_eq!(rect.attribute("style"), None);
    }

    #[test]
    fn class_operations() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");

        rect.class_list().add("a");
        assert!(rect.class_list().contains("a"));
        rect.class_list().remove("a");
        assert!(!rect.class_list().contains("a"));
        assert_eq!(rect.attribute("class"), None);
    }

    #[test]
    fn wrappers_alias_one_node() {
        let arena = typed_arena::Arena::new();
        let rect = element(&arena, "rect");
        let alias = Element::new(rect.node()).unwrap();

        alias.set_id("shared");
        assert_eq!(rect.id(), "shared");
        assert_eq!(rect, alias);
    }
}
