use crate::seed::Seed;

/// Named color roles used consistently across one entry's artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Palette {
    pub background_start: &'static str,
    pub background_end: &'static str,
    pub ink: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub fur: &'static str,
    pub ear: &'static str,
    pub nose: &'static str,
    pub ground: &'static str,
}

impl Palette {
    pub fn roles(&self) -> [(&'static str, &'static str); 9] {
        [
            ("background-start", self.background_start),
            ("background-end", self.background_end),
            ("ink", self.ink),
            ("accent", self.accent),
            ("accent-soft", self.accent_soft),
            ("fur", self.fur),
            ("ear", self.ear),
            ("nose", self.nose),
            ("ground", self.ground),
        ]
    }
}

pub static PALETTES: [Palette; 8] = [
    // parchment
    Palette {
        background_start: "#f7eddc",
        background_end: "#e7d4b5",
        ink: "#4f3a2a",
        accent: "#c78554",
        accent_soft: "#f2c7a2",
        fur: "#b9845f",
        ear: "#dbac89",
        nose: "#7a4e43",
        ground: "#d7c0a1",
    },
    // sage
    Palette {
        background_start: "#eef6ee",
        background_end: "#d4e7cf",
        ink: "#2f4a35",
        accent: "#6ea06f",
        accent_soft: "#b8dcb8",
        fur: "#8ba86e",
        ear: "#b9cf9b",
        nose: "#48633e",
        ground: "#bfd5b7",
    },
    // sky
    Palette {
        background_start: "#eef5fb",
        background_end: "#d0e0ef",
        ink: "#2d455c",
        accent: "#5f8fb8",
        accent_soft: "#b8d1e6",
        fur: "#86a6bf",
        ear: "#bdd3e4",
        nose: "#4b6982",
        ground: "#c4d7e6",
    },
    // rose
    Palette {
        background_start: "#fbeef0",
        background_end: "#f0d2d9",
        ink: "#5a3641",
        accent: "#b86a80",
        accent_soft: "#e7b5c4",
        fur: "#c88ca0",
        ear: "#e7b9c7",
        nose: "#8e5264",
        ground: "#e5c0cb",
    },
    // lavender
    Palette {
        background_start: "#f3eff9",
        background_end: "#d9d0ea",
        ink: "#403b5e",
        accent: "#7f73ab",
        accent_soft: "#c3bddd",
        fur: "#978ebe",
        ear: "#cbc5e2",
        nose: "#5f5986",
        ground: "#cec7e1",
    },
    // oat
    Palette {
        background_start: "#f6f1e9",
        background_end: "#e6dccd",
        ink: "#504433",
        accent: "#a48458",
        accent_soft: "#d8c2a2",
        fur: "#b69772",
        ear: "#d9bf9c",
        nose: "#7a664d",
        ground: "#d8ccb8",
    },
    // mint
    Palette {
        background_start: "#eef8f6",
        background_end: "#cfe7df",
        ink: "#2d4f4b",
        accent: "#4f9f90",
        accent_soft: "#a8d9d0",
        fur: "#6fae9f",
        ear: "#abd3cb",
        nose: "#44746d",
        ground: "#bad8d0",
    },
    // apricot
    Palette {
        background_start: "#fbf1e8",
        background_end: "#edd6c3",
        ink: "#584133",
        accent: "#c47f4e",
        accent_soft: "#efc59f",
        fur: "#c08e67",
        ear: "#e2b995",
        nose: "#865846",
        ground: "#dfc3a8",
    },
];

pub fn palette_index(seed: Seed) -> usize {
    (seed.get() % PALETTES.len() as u64) as usize
}

pub fn select_palette(seed: Seed) -> &'static Palette {
    &PALETTES[palette_index(seed)]
}
