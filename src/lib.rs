//! Typed attribute marshalling over an arena-backed SVG element tree.
//!
//! Storage is always plain attribute text; callers read and write strongly
//! typed values (numbers, keyword enumerations, colors, point lists, class
//! tokens, style declarations) through [`element::Element`] and the shape
//! façades in [`shape`]. Absent attributes resolve to well-defined defaults;
//! present-but-malformed text is a hard [`error::Error`], never a silent
//! default.
//!
//! # Example
//!
//! ```
//! use svgml::{color::Color, document::Document, shape::Circle};
//!
//! let arena = typed_arena::Arena::new();
//! let doc = Document::new(&arena);
//!
//! let circle = Circle::create(doc.root(), &arena);
//! circle.set_center(10.0, 20.0)?;
//! circle.set_r(4.5)?;
//! circle.set_fill(Color::Rgb(255, 0, 170))?;
//!
//! assert_eq!(circle.element().attribute("fill").as_deref(), Some("#FF00AA"));
//! assert_eq!(circle.r(), Ok(4.5));
//! # Ok::<(), svgml::error::Error>(())
//! ```

pub mod attribute;
pub mod class_list;
pub mod color;
pub mod defaults;
pub mod document;
pub mod element;
pub mod error;
pub mod name;
pub mod node;
pub mod points;
pub mod shape;
pub mod style;
pub mod value;
