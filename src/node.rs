//! Tree nodes and the arena that owns them.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;

use crate::{attribute::Attribute, name::QualName};

/// The allocator that owns every node of a document.
pub type Arena<'arena> = &'arena typed_arena::Arena<Node<'arena>>;
/// A non-owning reference to a node.
pub type Ref<'arena> = &'arena Node<'arena>;
/// A settable reference to a node.
pub type Link<'arena> = Cell<Option<Ref<'arena>>>;

/// The data of a node in the document tree.
#[derive(Debug)]
pub enum NodeData {
    /// The root of a document; its first child is the document element.
    Root,
    /// An element with a tag name and attributes. (e.g. `<circle r="4"/>`)
    Element {
        /// The qualified name of the element's tag.
        name: QualName,
        /// The attributes of the element.
        attrs: RefCell<Vec<Attribute>>,
    },
}

/// A node in the document tree.
///
/// Nodes are owned exclusively by the arena; wrappers hold `&'arena`
/// references, so any number of them may alias one node. Tree wiring lives
/// in [`Cell`]s and is mutated through shared references.
pub struct Node<'arena> {
    /// The node's parent.
    pub parent: Link<'arena>,
    /// The node after this one in the parent's child list.
    pub next_sibling: Link<'arena>,
    /// The node before this one in the parent's child list.
    pub previous_sibling: Link<'arena>,
    /// The node's first child.
    pub first_child: Link<'arena>,
    /// The node's last child.
    pub last_child: Link<'arena>,
    /// The node's type and associated data.
    pub node_data: NodeData,
}

impl<'arena> Node<'arena> {
    /// Creates a detached node with the given node data.
    pub fn new(data: NodeData) -> Self {
        Self {
            parent: Cell::new(None),
            next_sibling: Cell::new(None),
            previous_sibling: Cell::new(None),
            first_child: Cell::new(None),
            last_child: Cell::new(None),
            node_data: data,
        }
    }

    /// Adds a node to the end of this node's list of children, updating the
    /// child's parent link.
    pub fn append_child(&'arena self, a_child: Ref<'arena>) {
        a_child.parent.set(Some(self));
        if let Some(last) = self.last_child.get() {
            last.next_sibling.set(Some(a_child));
            a_child.previous_sibling.set(Some(last));
        } else {
            self.first_child.set(Some(a_child));
        }
        self.last_child.set(Some(a_child));
    }

    /// Returns an iterator over this node's children, front to back.
    pub fn child_nodes_iter(&self) -> impl Iterator<Item = Ref<'arena>> {
        ChildNodes {
            next: self.first_child.get(),
        }
    }

    /// Returns the number of child nodes by iteration.
    pub fn child_node_count(&self) -> usize {
        self.child_nodes_iter().count()
    }

    /// Whether the underlying allocation is the same as the other's.
    pub fn ptr_eq(&self, other: &Node<'arena>) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.node_data)
            .field("children", &self.child_node_count())
            .finish()
    }
}

struct ChildNodes<'arena> {
    next: Option<Ref<'arena>>,
}

impl<'arena> Iterator for ChildNodes<'arena> {
    type Item = Ref<'arena>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling.get();
        Some(current)
    }
}
