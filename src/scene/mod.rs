/// Scene graph nodes and shape constructors.
pub mod node;
/// SVG text serialization.
pub mod svg;

pub use node::{Element, Node, Stroke};
