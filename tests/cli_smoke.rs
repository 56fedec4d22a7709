use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_deckart")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "deckart.exe"
            } else {
                "deckart"
            });
            p
        })
}

#[test]
fn cli_render_writes_cards_and_updates_deck() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let deck_path = dir.join("deck.json");
    let cards_dir = dir.join("cards");
    std::fs::write(&deck_path, include_str!("data/deck.json")).unwrap();

    let deck_arg = deck_path.to_string_lossy().to_string();
    let cards_arg = cards_dir.to_string_lossy().to_string();

    let status = std::process::Command::new(exe())
        .args(["render", "--deck", deck_arg.as_str(), "--cards-dir"])
        .arg(cards_arg.as_str())
        .args(["--image-dir", "cards"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(cards_dir.join("hay-horizon.svg").exists());
    assert_eq!(
        std::fs::read_to_string(&deck_path).unwrap(),
        include_str!("data/deck.expected.json")
    );
}

#[test]
fn cli_render_needs_image_dir_for_absolute_cards_dir() {
    let dir = PathBuf::from("target").join("cli_smoke_abs");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let deck_path = dir.join("deck.json");
    std::fs::write(&deck_path, include_str!("data/deck.json")).unwrap();
    let cards_dir = std::env::current_dir().unwrap().join(&dir).join("cards");

    let out = std::process::Command::new(exe())
        .args(["render", "--deck"])
        .arg(&deck_path)
        .arg("--cards-dir")
        .arg(&cards_dir)
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--image-dir"));
    assert!(!cards_dir.exists());
    assert_eq!(
        std::fs::read_to_string(&deck_path).unwrap(),
        include_str!("data/deck.json")
    );
}

#[test]
fn cli_inspect_prints_plan() {
    let out = std::process::Command::new(exe())
        .args(["inspect", "hay-horizon", "unlisted-entry"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("hay-horizon:"));
    assert!(stdout.contains("seed:     17548997456041306798"));
    assert!(stdout.contains("icon:     horizon"));
    assert!(stdout.contains("icon:     spark"));
}
