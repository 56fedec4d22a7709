use std::{borrow::Cow, fs::File, io::BufReader, path::Path};

use serde_json::{Map, Value};

use crate::foundation::error::{DeckartError, DeckartResult};

/// One deck record, kept as the JSON object it was read from.
///
/// Only `id`, `title` and `image` are interpreted. Key order and every other field round-trip
/// untouched; setting `image` updates an existing key in place.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Entry {
    fields: Map<String, Value>,
}

const ID: &str = "id";
const TITLE: &str = "title";
const IMAGE: &str = "image";

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(ID.to_string(), Value::String(id.into()));
        fields.insert(TITLE.to_string(), Value::String(title.into()));
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Trimmed id, or `None` when missing, blank, or not a string or number.
    pub fn key(&self) -> Option<String> {
        let id = scalar_text(self.fields.get(ID)?)?;
        let id = id.trim();
        (!id.is_empty()).then(|| id.to_string())
    }

    /// Trimmed title, defaulting to the trimmed id.
    pub fn display_title(&self) -> String {
        match self.fields.get(TITLE).and_then(scalar_text) {
            Some(title) => title.trim().to_string(),
            None => self.key().unwrap_or_default(),
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.fields.get(IMAGE).and_then(Value::as_str)
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.fields.insert(IMAGE.to_string(), Value::String(image.into()));
    }
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

/// Ordered deck of entries, stored on disk as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn from_path(path: &Path) -> DeckartResult<Self> {
        let f = File::open(path).map_err(|e| DeckartError::io(path, e))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            DeckartError::serde(format!("parse catalog '{}': {e}", path.display()))
        })
    }

    pub fn from_json_str(s: &str) -> DeckartResult<Self> {
        serde_json::from_str(s).map_err(|e| DeckartError::serde(format!("parse catalog: {e}")))
    }

    /// Two-space indented JSON with a trailing newline; non-ASCII text is written as is.
    pub fn to_json_string(&self) -> DeckartResult<String> {
        let mut s = serde_json::to_string_pretty(self)
            .map_err(|e| DeckartError::serde(format!("encode catalog: {e}")))?;
        s.push('\n');
        Ok(s)
    }

    pub fn save(&self, path: &Path) -> DeckartResult<()> {
        let s = self.to_json_string()?;
        std::fs::write(path, s).map_err(|e| DeckartError::io(path, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"[
  {
    "id": "popcorning",
    "title": "Popcorning",
    "keywords": [
      "play"
    ],
    "prompt": "jump"
  },
  {
    "title": "No Id"
  }
]
"#;

    #[test]
    fn roundtrip_preserves_text() {
        let deck = Catalog::from_json_str(DECK).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.to_json_string().unwrap(), DECK);
    }

    #[test]
    fn unknown_fields_keep_their_order() {
        let deck = Catalog::from_json_str(DECK).unwrap();
        let keys: Vec<_> = deck.entries[0].fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "title", "keywords", "prompt"]);
    }

    #[test]
    fn image_updates_in_place_and_new_keys_append() {
        let src = r#"[{"title":"T","image":"./cards/old.png","id":"a","keywords":[]}]"#;
        let mut deck = Catalog::from_json_str(src).unwrap();
        deck.entries[0].set_image("./cards/a.svg");
        let keys: Vec<_> = deck.entries[0].fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "image", "id", "keywords"]);

        let mut deck = Catalog::from_json_str(DECK).unwrap();
        deck.entries[0].set_image("./cards/popcorning.svg");
        let keys: Vec<_> = deck.entries[0].fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "title", "keywords", "prompt", "image"]);
        assert_eq!(deck.entries[0].image(), Some("./cards/popcorning.svg"));
    }

    #[test]
    fn explicit_nulls_survive_a_round_trip() {
        let src = "[\n  {\n    \"id\": null,\n    \"title\": null\n  }\n]\n";
        let deck = Catalog::from_json_str(src).unwrap();
        assert_eq!(deck.entries[0].key(), None);
        assert_eq!(deck.to_json_string().unwrap(), src);
    }

    #[test]
    fn key_trims_and_rejects_blank() {
        assert_eq!(Entry::new("  a-b ", "t").key().as_deref(), Some("a-b"));
        assert_eq!(Entry::new("   ", "t").key(), None);
        assert_eq!(Entry::default().key(), None);
    }

    #[test]
    fn numeric_ids_become_strings() {
        let deck = Catalog::from_json_str(r#"[{"id": 42}, {"id": true}, {"id": [1]}]"#).unwrap();
        assert_eq!(deck.entries[0].key().as_deref(), Some("42"));
        assert_eq!(deck.entries[0].display_title(), "42");
        assert_eq!(deck.entries[1].key(), None);
        assert_eq!(deck.entries[2].key(), None);
    }

    #[test]
    fn title_defaults_to_id() {
        let deck = Catalog::from_json_str(r#"[{"id": " mint "}]"#).unwrap();
        assert_eq!(deck.entries[0].display_title(), "mint");
        assert_eq!(Entry::new("mint", " Sprig ").display_title(), "Sprig");
    }

    #[test]
    fn rejects_non_array_catalog() {
        let err = Catalog::from_json_str(r#"{"id": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("serialization error:"));
    }
}
