//! Document construction and root namespace declarations.

use std::cell::RefCell;

use crate::{
    element::Element,
    name::{QualName, SVG_NS},
    node::{Arena, Node, NodeData},
};

/// An in-memory SVG document: a root node whose document element is `svg`.
///
/// The arena owns every node; the document and all element wrappers hold
/// non-owning references into it.
#[derive(Clone, Copy)]
pub struct Document<'arena> {
    root: Element<'arena>,
}

impl<'arena> Document<'arena> {
    /// Creates a document with an empty `svg` document element carrying the
    /// default SVG namespace declaration.
    pub fn new(arena: Arena<'arena>) -> Self {
        let root_node = &*arena.alloc(Node::new(NodeData::Root));
        let svg = Self::alloc_element(arena, "svg");
        root_node.append_child(svg.node());
        svg.set_attribute("xmlns", SVG_NS);
        Self { root: svg }
    }

    /// The document element.
    pub fn root(&self) -> Element<'arena> {
        self.root
    }

    /// Creates a detached element with the given tag name.
    pub fn create_element(&self, arena: Arena<'arena>, tag_name: &str) -> Element<'arena> {
        Self::alloc_element(arena, tag_name)
    }

    fn alloc_element(arena: Arena<'arena>, tag_name: &str) -> Element<'arena> {
        let node = arena.alloc(Node::new(NodeData::Element {
            name: QualName::local(tag_name),
            attrs: RefCell::new(vec![]),
        }));
        Element::new(node).expect("created element should be an element")
    }
}
