//! Deterministic procedural card art.
//!
//! Every deck entry id maps to a SHA-256 derived seed. The seed picks a palette, lays out
//! sparkles and poses the mascot; the id itself picks an icon. The resulting scene is serialized
//! as an SVG document that is byte-identical for the same id and title on every run.
//!
//! - [`render_document`] renders one entry.
//! - [`update_catalog`] renders a whole [`Catalog`] into a [`DocumentSink`] and updates each
//!   entry's `image` reference.
#![forbid(unsafe_code)]

mod foundation;

pub mod catalog;
pub mod character;
pub mod compose;
pub mod document;
pub mod icon;
pub mod palette;
pub mod scene;
pub mod seed;
pub mod sink;
pub mod sparkle;
pub mod update;

pub use catalog::{Catalog, Entry};
pub use compose::{ArtPlan, CANVAS_HEIGHT, CANVAS_WIDTH, compose_scene};
pub use document::{RenderedDocument, render_document};
pub use foundation::error::{DeckartError, DeckartResult};
pub use icon::{ICON_BY_ID, Icon, IconColors, render_icon};
pub use palette::{PALETTES, Palette, palette_index, select_palette};
pub use seed::{SceneParameters, Seed};
pub use sink::{DirSink, DocumentSink, InMemorySink};
pub use update::{UpdateOpts, UpdateReport, image_ref, update_catalog};
