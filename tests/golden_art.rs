use sha2::{Digest as _, Sha256};

use deckart::{ICON_BY_ID, render_document};

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[test]
fn named_icon_matches_golden() {
    let doc = render_document("hay-horizon", "Hay Horizon");
    assert_eq!(doc.as_str(), include_str!("data/golden/hay-horizon.svg"));
}

#[test]
fn default_icon_and_escaped_title_match_golden() {
    let doc = render_document("unlisted-entry", r#"Tom & Jerry's <"Den">"#);
    assert_eq!(doc.as_str(), include_str!("data/golden/unlisted-entry.svg"));
}

#[test]
fn wide_bit_offsets_match_golden() {
    let doc = render_document("queen-shiver", "Queen Shiver");
    assert_eq!(doc.as_str(), include_str!("data/golden/queen-shiver.svg"));

    let doc = render_document("chat-x", "x");
    assert_eq!(doc.as_str(), include_str!("data/golden/chat-x.svg"));
}

#[test]
fn every_table_entry_matches_recorded_digest() {
    let digests: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("data/golden_digests.json")).unwrap();
    assert_eq!(digests.len(), ICON_BY_ID.len());

    for (id, _) in ICON_BY_ID.iter() {
        let doc = render_document(id, id);
        let expected = digests[*id].as_str().unwrap();
        assert_eq!(sha256_hex(doc.as_bytes()), expected, "digest mismatch for '{id}'");
    }
}

#[test]
fn rendered_documents_parse_as_svg() {
    let opts = usvg::Options::default();
    for id in ["hay-horizon", "unlisted-entry", "clover-crown", "munch-mask"] {
        let doc = render_document(id, "Title & <Things>");
        let tree = usvg::Tree::from_str(doc.as_str(), &opts)
            .unwrap_or_else(|e| panic!("'{id}' is not valid svg: {e}"));
        assert_eq!(tree.size().width(), 1200.0);
        assert_eq!(tree.size().height(), 760.0);
        assert!(tree.root().has_children());
    }
}
