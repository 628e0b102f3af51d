//! Shape façades over fixed tag names.
//!
//! A façade is only obtained by appending a new, empty element of its fixed
//! tag to a parent; a façade never wraps a node of the wrong tag. Each one
//! derefs to [`Element`], so the shared presentation properties (fill,
//! stroke, classes, visibility, ...) are available on every shape.

use std::cell::RefCell;
use std::ops::Deref;

use crate::{
    defaults,
    element::Element,
    error::Error,
    name::QualName,
    node::{Arena, Node, NodeData},
    points::{self, Point},
    value::FillRule,
};

/// The Inkscape namespace used by [`Layer`].
pub const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

fn append_new<'arena>(parent: Element<'arena>, arena: Arena<'arena>, tag: &str) -> Element<'arena> {
    let node = arena.alloc(Node::new(NodeData::Element {
        name: QualName::local(tag),
        attrs: RefCell::new(vec![]),
    }));
    let element = Element::new(node).expect("created element should be an element");
    parent.append(element);
    element
}

/// A `<circle>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle<'arena>(Element<'arena>);

impl<'arena> Circle<'arena> {
    /// Appends a new, empty `circle` to the parent and wraps it.
    pub fn create(parent: Element<'arena>, arena: Arena<'arena>) -> Self {
        Self(append_new(parent, arena, "circle"))
    }

    /// The wrapped element.
    pub fn element(&self) -> Element<'arena> {
        self.0
    }

    /// The center's x coordinate (`cx`).
    pub fn cx(&self) -> Result<f64, Error> {
        self.0.get("cx", defaults::CX)
    }

    /// Sets the center's x coordinate.
    pub fn set_cx(&self, value: f64) -> Result<(), Error> {
        self.0.set("cx", &value)
    }

    /// The center's y coordinate (`cy`).
    pub fn cy(&self) -> Result<f64, Error> {
        self.0.get("cy", defaults::CY)
    }

    /// Sets the center's y coordinate.
    pub fn set_cy(&self, value: f64) -> Result<(), Error> {
        self.0.set("cy", &value)
    }

    /// The radius (`r`).
    pub fn r(&self) -> Result<f64, Error> {
        self.0.get("r", defaults::R)
    }

    /// Sets the radius.
    pub fn set_r(&self, value: f64) -> Result<(), Error> {
        self.0.set("r", &value)
    }

    /// Sets both center coordinates.
    pub fn set_center(&self, x: f64, y: f64) -> Result<(), Error> {
        self.set_cx(x)?;
        self.set_cy(y)
    }
}

impl<'arena> Deref for Circle<'arena> {
    type Target = Element<'arena>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

macro_rules! poly_points {
    () => {
        /// The wrapped element.
        pub fn element(&self) -> Element<'arena> {
            self.0
        }

        /// The point sequence, decoded pairwise from the `points` attribute.
        pub fn points(&self) -> Result<Vec<Point>, Error> {
            let text = self.0.attribute("points").unwrap_or_default();
            points::parse_pairs(&text).map_err(|kind| Error::malformed("points", text, kind))
        }

        /// Writes the point sequence in the canonical pairwise encoding.
        pub fn set_points(&self, points: &[Point]) {
            self.0.set_attribute("points", &points::write_pairs(points));
        }

        /// The flat-scalar compatibility view over the `points` attribute.
        ///
        /// The flat reader requires the exact `", "` separator; see
        /// [`crate::points`] for why the two views don't mix.
        pub fn points_flat(&self) -> Result<Vec<f64>, Error> {
            let text = self.0.attribute("points").unwrap_or_default();
            points::parse_flat(&text).map_err(|kind| Error::malformed("points", text, kind))
        }

        /// Writes the flat scalar sequence joined by `", "`.
        pub fn set_points_flat(&self, scalars: &[f64]) {
            self.0.set_attribute("points", &points::write_flat(scalars));
        }
    };
}

/// A `<polyline>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polyline<'arena>(Element<'arena>);

impl<'arena> Polyline<'arena> {
    /// Appends a new, empty `polyline` to the parent and wraps it.
    pub fn create(parent: Element<'arena>, arena: Arena<'arena>) -> Self {
        Self(append_new(parent, arena, "polyline"))
    }

    poly_points!();
}

impl<'arena> Deref for Polyline<'arena> {
    type Target = Element<'arena>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A `<polygon>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon<'arena>(Element<'arena>);

impl<'arena> Polygon<'arena> {
    /// Appends a new, empty `polygon` to the parent and wraps it.
    pub fn create(parent: Element<'arena>, arena: Arena<'arena>) -> Self {
        Self(append_new(parent, arena, "polygon"))
    }

    poly_points!();

    /// The `fill-rule` of the polygon.
    pub fn fill_rule(&self) -> Result<FillRule, Error> {
        self.0.get("fill-rule", defaults::FILL_RULE)
    }

    /// Sets the `fill-rule` of the polygon.
    pub fn set_fill_rule(&self, rule: FillRule) -> Result<(), Error> {
        self.0.set("fill-rule", &rule)
    }
}

impl<'arena> Deref for Polygon<'arena> {
    type Target = Element<'arena>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An Inkscape layer: a `g` element carrying layer metadata in the Inkscape
/// namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer<'arena>(Element<'arena>);

impl<'arena> Layer<'arena> {
    /// Appends a new layer `g` to the parent and wraps it.
    ///
    /// Sets `inkscape:groupmode="layer"` and `inkscape:label` on the new
    /// element, and declares `xmlns:inkscape` on the document element of the
    /// parent's tree (idempotent when already declared).
    pub fn create(parent: Element<'arena>, arena: Arena<'arena>, label: &str) -> Self {
        parent
            .document_element()
            .declare_namespace("inkscape", INKSCAPE_NS);
        let element = append_new(parent, arena, "g");
        element.set_attribute_ns("inkscape", INKSCAPE_NS, "groupmode", "layer");
        let layer = Self(element);
        layer.set_label(label);
        layer
    }

    /// The wrapped element.
    pub fn element(&self) -> Element<'arena> {
        self.0
    }

    /// The layer's `inkscape:label`, or empty when absent.
    pub fn label(&self) -> String {
        self.0
            .attribute_ns(INKSCAPE_NS, "label")
            .unwrap_or_default()
    }

    /// Sets the layer's `inkscape:label`.
    pub fn set_label(&self, label: &str) {
        self.0
            .set_attribute_ns("inkscape", INKSCAPE_NS, "label", label);
    }
}

impl<'arena> Deref for Layer<'arena> {
    type Target = Element<'arena>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{color::Color, document::Document};

    #[test]
    fn circle_is_appended_with_its_fixed_tag() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let circle = Circle::create(doc.root(), &arena);

        assert_eq!(circle.local_name(), "circle");
        assert_eq!(circle.parent_element(), Some(doc.root()));
        assert_eq!(circle.r(), Ok(0.0));

        circle.set_center(1.5, -2.0).unwrap();
        circle.set_r(4.0).unwrap();
        assert_eq!(circle.element().attribute("cx").as_deref(), Some("1.5"));
        assert_eq!(circle.element().attribute("cy").as_deref(), Some("-2"));
        assert_eq!(circle.cx(), Ok(1.5));
        assert_eq!(circle.cy(), Ok(-2.0));
        assert_eq!(circle.r(), Ok(4.0));
    }

    #[test]
    fn shapes_share_presentation_properties() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let circle = Circle::create(doc.root(), &arena);

        circle.set_fill(Color::Rgb(255, 0, 170)).unwrap();
        circle.set_stroke_width(2.0).unwrap();
        assert_eq!(circle.fill(), Ok(Color::Rgb(255, 0, 170)));
        assert_eq!(circle.stroke_width(), Ok(2.0));
    }

    #[test]
    fn polyline_points_round_trip() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let polyline = Polyline::create(doc.root(), &arena);

        polyline.set_points(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(
            polyline.element().attribute("points").as_deref(),
            Some("1,2, 3,4")
        );
        assert_eq!(
            polyline.points(),
            Ok(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)])
        );
        // The canonical encoding happens to satisfy the flat reader too.
        assert_eq!(polyline.points_flat(), Ok(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn polyline_points_absent_is_empty() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let polyline = Polyline::create(doc.root(), &arena);

        assert_eq!(polyline.points(), Ok(vec![]));
        assert_eq!(polyline.points_flat(), Ok(vec![]));
    }

    #[test]
    fn flat_reader_rejects_pairwise_compact_text() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let polygon = Polygon::create(doc.root(), &arena);
        polygon.element().set_attribute("points", "1,2,3,4");

        assert_eq!(
            polygon.points(),
            Ok(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)])
        );
        assert!(matches!(
            polygon.points_flat(),
            Err(Error::MalformedValue { .. })
        ));
    }

    #[test]
    fn polygon_fill_rule() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let polygon = Polygon::create(doc.root(), &arena);

        assert_eq!(polygon.fill_rule(), Ok(FillRule::NonZero));
        polygon.set_fill_rule(FillRule::EvenOdd).unwrap();
        assert_eq!(
            polygon.element().attribute("fill-rule").as_deref(),
            Some("evenodd")
        );
        assert_eq!(polygon.fill_rule(), Ok(FillRule::EvenOdd));
    }

    #[test]
    fn layer_declares_namespace_on_document_element() {
        let arena = typed_arena::Arena::new();
        let doc = Document::new(&arena);
        let layer = Layer::create(doc.root(), &arena, "Background");

        assert_eq!(layer.local_name(), "g");
        assert_eq!(layer.label(), "Background");
        assert_eq!(
            layer.element().attribute_ns(INKSCAPE_NS, "groupmode").as_deref(),
            Some("layer")
        );
        assert_eq!(
            doc.root()
                .attribute_ns(crate::name::XMLNS_NS, "inkscape")
                .as_deref(),
            Some(INKSCAPE_NS)
        );

        // Creating a second layer re-declares without duplicating.
        let nested = Layer::create(layer.element(), &arena, "Detail");
        assert_eq!(nested.label(), "Detail");
        assert_eq!(doc.root().attributes().len(), 2);
    }
}
