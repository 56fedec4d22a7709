use std::path::{Path, PathBuf};

use deckart::{Catalog, DirSink, Entry, InMemorySink, Seed, UpdateOpts, update_catalog};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("catalog_update").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn read_dir_sorted(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let path = e.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            (name, std::fs::read(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}

#[test]
fn fixture_deck_updates_to_expected_json() {
    let dir = scratch_dir("fixture");
    let deck_path = dir.join("deck.json");
    std::fs::write(&deck_path, include_str!("data/deck.json")).unwrap();

    let mut catalog = Catalog::from_path(&deck_path).unwrap();
    let mut sink = DirSink::create(dir.join("cards")).unwrap();
    let report = update_catalog(&mut catalog, &mut sink, &UpdateOpts::default()).unwrap();
    catalog.save(&deck_path).unwrap();

    assert_eq!(report.rendered, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        std::fs::read_to_string(&deck_path).unwrap(),
        include_str!("data/deck.expected.json")
    );

    let cards = read_dir_sorted(&dir.join("cards"));
    let names: Vec<_> = cards.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        ["clover-crown.svg", "hay-horizon.svg", "mystery-card.svg"]
    );
    assert_eq!(
        cards[0].1,
        include_bytes!("data/golden/clover-crown.svg").to_vec()
    );
    assert_eq!(
        cards[2].1,
        include_bytes!("data/golden/mystery-card.svg").to_vec()
    );
}

#[test]
fn second_run_is_idempotent() {
    let dir = scratch_dir("idempotent");
    let deck_path = dir.join("deck.json");
    let cards_dir = dir.join("cards");
    std::fs::write(&deck_path, include_str!("data/deck.json")).unwrap();

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let mut catalog = Catalog::from_path(&deck_path).unwrap();
        let mut sink = DirSink::create(&cards_dir).unwrap();
        update_catalog(&mut catalog, &mut sink, &UpdateOpts::default()).unwrap();
        catalog.save(&deck_path).unwrap();

        let images: Vec<_> = catalog
            .entries
            .iter()
            .map(|e| e.image().map(str::to_string))
            .collect();
        snapshots.push((
            images,
            std::fs::read_to_string(&deck_path).unwrap(),
            read_dir_sorted(&cards_dir),
        ));
    }

    assert_eq!(snapshots[0], snapshots[1]);
}

#[test]
fn distinct_ids_get_distinct_seeds_and_documents() {
    let ids: Vec<String> = deckart::ICON_BY_ID
        .iter()
        .map(|(id, _)| id.to_string())
        .chain((0..20).map(|i| format!("extra-card-{i}")))
        .collect();
    assert!(ids.len() >= 40);

    let mut seeds: Vec<_> = ids.iter().map(|id| Seed::for_id(id)).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), ids.len());

    let mut catalog = Catalog::new(ids.iter().map(|id| Entry::new(id, "same title")).collect());
    let mut sink = InMemorySink::new();
    update_catalog(&mut catalog, &mut sink, &UpdateOpts::default()).unwrap();

    let mut docs: Vec<_> = ids.iter().map(|id| sink.get(id).unwrap()).collect();
    docs.sort_unstable();
    docs.dedup();
    assert_eq!(docs.len(), ids.len());
}

#[test]
fn custom_image_dir_is_used_in_references() {
    let mut catalog = Catalog::new(vec![Entry::new("seed-of-trust", "Seed of Trust")]);
    let opts = UpdateOpts {
        image_dir: "./assets/art/".to_string(),
        ..UpdateOpts::default()
    };
    update_catalog(&mut catalog, &mut InMemorySink::new(), &opts).unwrap();
    assert_eq!(
        catalog.entries[0].image(),
        Some("./assets/art/seed-of-trust.svg")
    );
}
