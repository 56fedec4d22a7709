use crate::{
    compose::{ArtPlan, compose_scene},
    scene::svg::write_document,
};

pub const DOCUMENT_EXT: &str = "svg";

/// Serialized artwork for one entry. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    id: String,
    svg: String,
}

impl RenderedDocument {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn as_str(&self) -> &str {
        &self.svg
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }

    pub fn file_name(&self) -> String {
        format!("{}.{DOCUMENT_EXT}", self.id)
    }
}

/// Render the SVG document for `id`, labelled with `title`.
///
/// The output depends only on the two strings and the static tables.
#[tracing::instrument(level = "debug", skip(title))]
pub fn render_document(id: &str, title: &str) -> RenderedDocument {
    let plan = ArtPlan::for_id(id);
    tracing::debug!(
        seed = plan.seed,
        palette = plan.palette_index,
        icon = plan.icon.name(),
        "planned artwork"
    );
    let scene = compose_scene(&plan, title);
    RenderedDocument {
        id: id.to_string(),
        svg: write_document(&scene),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_byte_identical() {
        let a = render_document("whisker-compass", "Whisker Compass");
        let b = render_document("whisker-compass", "Whisker Compass");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn title_is_escaped() {
        let doc = render_document("hay-horizon", "Hay & Horizon");
        assert!(
            doc.as_str()
                .contains(r#"<title id="title">Hay &amp; Horizon</title>"#)
        );
    }

    #[test]
    fn file_name_uses_id() {
        assert_eq!(render_document("a-b", "t").file_name(), "a-b.svg");
    }

    #[test]
    fn different_ids_render_differently() {
        let a = render_document("cozy-lap", "same");
        let b = render_document("cozy-burrow", "same");
        assert_ne!(a.as_str(), b.as_str());
    }
}
