use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    document::RenderedDocument,
    foundation::error::{DeckartError, DeckartResult},
};

/// Destination for rendered documents, keyed by entry id.
pub trait DocumentSink {
    fn write_document(&mut self, doc: &RenderedDocument) -> DeckartResult<()>;
}

/// Writes `<dir>/<id>.svg` for every document.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn create(dir: impl Into<PathBuf>) -> DeckartResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| DeckartError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, doc: &RenderedDocument) -> DeckartResult<PathBuf> {
        validate_file_stem(doc.id())?;
        Ok(self.dir.join(doc.file_name()))
    }
}

impl DocumentSink for DirSink {
    fn write_document(&mut self, doc: &RenderedDocument) -> DeckartResult<()> {
        let path = self.path_for(doc)?;
        std::fs::write(&path, doc.as_bytes()).map_err(|e| DeckartError::io(&path, e))?;
        tracing::trace!(path = %path.display(), "wrote document");
        Ok(())
    }
}

fn validate_file_stem(id: &str) -> DeckartResult<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(DeckartError::validation(format!(
            "entry id '{id}' cannot be used as a file name"
        )));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct InMemorySink {
    docs: BTreeMap<String, String>,
    order: Vec<String>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.docs.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn write_order(&self) -> &[String] {
        &self.order
    }
}

impl DocumentSink for InMemorySink {
    fn write_document(&mut self, doc: &RenderedDocument) -> DeckartResult<()> {
        self.order.push(doc.id().to_string());
        self.docs.insert(doc.id().to_string(), doc.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::render_document;

    #[test]
    fn dir_sink_writes_named_file() {
        let dir = PathBuf::from("target").join("sink_unit").join("named");
        let _ = std::fs::remove_dir_all(&dir);
        let mut sink = DirSink::create(&dir).unwrap();

        let doc = render_document("cozy-lap", "Cozy Lap");
        sink.write_document(&doc).unwrap();

        let written = std::fs::read_to_string(dir.join("cozy-lap.svg")).unwrap();
        assert_eq!(written, doc.as_str());
    }

    #[test]
    fn dir_sink_rejects_path_like_ids() {
        let dir = PathBuf::from("target").join("sink_unit").join("reject");
        let mut sink = DirSink::create(&dir).unwrap();
        for id in ["../escape", "a/b", "a\\b", ".."] {
            let err = sink.write_document(&render_document(id, "t")).unwrap_err();
            assert!(matches!(err, DeckartError::Validation(_)), "{id}: {err}");
        }
    }

    #[test]
    fn in_memory_sink_records_order() {
        let mut sink = InMemorySink::new();
        sink.write_document(&render_document("b", "B")).unwrap();
        sink.write_document(&render_document("a", "A")).unwrap();
        assert_eq!(sink.write_order(), ["b", "a"]);
        assert_eq!(sink.len(), 2);
        assert!(sink.get("a").unwrap().contains("<title id=\"title\">A</title>"));
    }
}
