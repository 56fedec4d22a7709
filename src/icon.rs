use crate::scene::node::{Element, Stroke, circle, ellipse, group, line, path, polyline, rect};

/// Symbolic motif drawn above the mascot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Horizon,
    Burst,
    Footsteps,
    LeavesPair,
    Tunnel,
    Target,
    Bell,
    Compass,
    Boop,
    Sunbeam,
    MoonZoom,
    Trio,
    Chat,
    Hay,
    Brush,
    Magnifier,
    Pillow,
    Squeak,
    Bottle,
    Hide,
    Crinkle,
    Corner,
    Checkin,
    Trail,
    Balance,
    Mint,
    Chew,
    Stretch,
    Lap,
    PawPause,
    Window,
    Seed,
    Hideout,
    Truth,
    Map,
    PillowStack,
    Meadow,
    HomeHop,
    Halo,
    Flower,
    ShadowLeaf,
    Mask,
    CrownSnow,
    Clover,
    /// Default motif for ids missing from [`ICON_BY_ID`].
    Spark,
}

/// Static id to icon table covering the known deck.
pub static ICON_BY_ID: [(&str, Icon); 44] = [
    ("hay-horizon", Icon::Horizon),
    ("popcorning", Icon::Burst),
    ("rumble-strut", Icon::Footsteps),
    ("pea-flake-pact", Icon::LeavesPair),
    ("cozy-burrow", Icon::Tunnel),
    ("tunnel-vision", Icon::Target),
    ("snack-alarm", Icon::Bell),
    ("whisker-compass", Icon::Compass),
    ("nose-boop", Icon::Boop),
    ("sunbeam-sprawl", Icon::Sunbeam),
    ("midnight-zoomies", Icon::MoonZoom),
    ("herd-harmony", Icon::Trio),
    ("chitter-chat", Icon::Chat),
    ("mellow-munch", Icon::Hay),
    ("gentle-groom", Icon::Brush),
    ("curiosity-nibble", Icon::Magnifier),
    ("soft-bedding", Icon::Pillow),
    ("brave-squeak", Icon::Squeak),
    ("water-bottle-wisdom", Icon::Bottle),
    ("the-great-hide", Icon::Hide),
    ("paper-crinkle", Icon::Crinkle),
    ("quiet-corner", Icon::Corner),
    ("herd-check-in", Icon::Checkin),
    ("treat-trail", Icon::Trail),
    ("nibble-and-rest", Icon::Balance),
    ("sprig-of-mint", Icon::Mint),
    ("slow-chew", Icon::Chew),
    ("the-long-stretch", Icon::Stretch),
    ("cozy-lap", Icon::Lap),
    ("paws-and-pause", Icon::PawPause),
    ("window-watch", Icon::Window),
    ("seed-of-trust", Icon::Seed),
    ("new-hideout", Icon::Hideout),
    ("squeak-of-truth", Icon::Truth),
    ("the-burrow-map", Icon::Map),
    ("pillow-pile", Icon::PillowStack),
    ("meadow-mind", Icon::Meadow),
    ("homecoming-hop", Icon::HomeHop),
    ("saint-whisker", Icon::Halo),
    ("lady-nibble", Icon::Flower),
    ("gnawshade", Icon::ShadowLeaf),
    ("munch-mask", Icon::Mask),
    ("queen-shiver", Icon::CrownSnow),
    ("clover-crown", Icon::Clover),
];

/// Local origin of every icon fragment in document space.
pub const ICON_ORIGIN: (i32, i32) = (600, 258);

impl Icon {
    pub const ALL: [Icon; 45] = [
        Icon::Horizon,
        Icon::Burst,
        Icon::Footsteps,
        Icon::LeavesPair,
        Icon::Tunnel,
        Icon::Target,
        Icon::Bell,
        Icon::Compass,
        Icon::Boop,
        Icon::Sunbeam,
        Icon::MoonZoom,
        Icon::Trio,
        Icon::Chat,
        Icon::Hay,
        Icon::Brush,
        Icon::Magnifier,
        Icon::Pillow,
        Icon::Squeak,
        Icon::Bottle,
        Icon::Hide,
        Icon::Crinkle,
        Icon::Corner,
        Icon::Checkin,
        Icon::Trail,
        Icon::Balance,
        Icon::Mint,
        Icon::Chew,
        Icon::Stretch,
        Icon::Lap,
        Icon::PawPause,
        Icon::Window,
        Icon::Seed,
        Icon::Hideout,
        Icon::Truth,
        Icon::Map,
        Icon::PillowStack,
        Icon::Meadow,
        Icon::HomeHop,
        Icon::Halo,
        Icon::Flower,
        Icon::ShadowLeaf,
        Icon::Mask,
        Icon::CrownSnow,
        Icon::Clover,
        Icon::Spark,
    ];

    /// Resolve the icon for an entry id, falling back to [`Icon::Spark`].
    pub fn for_id(id: &str) -> Self {
        ICON_BY_ID
            .iter()
            .find(|(key, _)| *key == id)
            .map_or(Self::Spark, |(_, icon)| *icon)
    }

    /// Parse an icon name; unknown names render as [`Icon::Spark`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or(Self::Spark)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Horizon => "horizon",
            Self::Burst => "burst",
            Self::Footsteps => "footsteps",
            Self::LeavesPair => "leaves-pair",
            Self::Tunnel => "tunnel",
            Self::Target => "target",
            Self::Bell => "bell",
            Self::Compass => "compass",
            Self::Boop => "boop",
            Self::Sunbeam => "sunbeam",
            Self::MoonZoom => "moon-zoom",
            Self::Trio => "trio",
            Self::Chat => "chat",
            Self::Hay => "hay",
            Self::Brush => "brush",
            Self::Magnifier => "magnifier",
            Self::Pillow => "pillow",
            Self::Squeak => "squeak",
            Self::Bottle => "bottle",
            Self::Hide => "hide",
            Self::Crinkle => "crinkle",
            Self::Corner => "corner",
            Self::Checkin => "checkin",
            Self::Trail => "trail",
            Self::Balance => "balance",
            Self::Mint => "mint",
            Self::Chew => "chew",
            Self::Stretch => "stretch",
            Self::Lap => "lap",
            Self::PawPause => "paw-pause",
            Self::Window => "window",
            Self::Seed => "seed",
            Self::Hideout => "hideout",
            Self::Truth => "truth",
            Self::Map => "map",
            Self::PillowStack => "pillow-stack",
            Self::Meadow => "meadow",
            Self::HomeHop => "home-hop",
            Self::Halo => "halo",
            Self::Flower => "flower",
            Self::ShadowLeaf => "shadow-leaf",
            Self::Mask => "mask",
            Self::CrownSnow => "crown-snow",
            Self::Clover => "clover",
            Self::Spark => "spark",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Palette roles an icon is drawn with.
#[derive(Clone, Copy, Debug)]
pub struct IconColors<'a> {
    pub ink: &'a str,
    pub accent: &'a str,
    pub accent_soft: &'a str,
}

/// Build the icon fragment: the shared base disc and ring, then the icon's own shapes, all
/// inside a group translated to [`ICON_ORIGIN`].
pub fn render_icon(icon: Icon, colors: IconColors<'_>) -> Element {
    let thin = Stroke::thin(colors.ink);
    group()
        .translate(ICON_ORIGIN.0, ICON_ORIGIN.1)
        .child(circle(0, 0, 170).fill(colors.accent_soft).opacity("0.35"))
        .child(circle(0, 0, 150).stroke(thin).opacity("0.28"))
        .children(icon_shapes(icon, colors))
}

fn icon_shapes(icon: Icon, colors: IconColors<'_>) -> Vec<Element> {
    let IconColors {
        ink,
        accent,
        accent_soft: soft,
    } = colors;
    let bold = Stroke::bold(ink);
    let thin = Stroke::thin(ink);

    match icon {
        Icon::Horizon => vec![
            circle(0, -42, 34).fill(accent).opacity("0.8"),
            path("M-122 44 Q0 -50 122 44 Z").fill(accent).opacity("0.55"),
            line(-128, 44, 128, 44).stroke(thin),
        ],
        Icon::Burst => vec![
            circle(0, 0, 38).fill(accent).opacity("0.82"),
            line(-110, 0, -62, 0).stroke(bold),
            line(110, 0, 62, 0).stroke(bold),
            line(0, -110, 0, -62).stroke(bold),
            line(0, 110, 0, 62).stroke(bold),
            line(-80, -80, -48, -48).stroke(thin),
            line(80, -80, 48, -48).stroke(thin),
            line(-80, 80, -48, 48).stroke(thin),
            line(80, 80, 48, 48).stroke(thin),
        ],
        Icon::Footsteps => vec![
            ellipse(-45, 6, 32, 44).fill(accent).opacity("0.72"),
            ellipse(38, -18, 28, 38).fill(accent).opacity("0.72"),
            circle(-68, -40, 9).fill(ink).opacity("0.78"),
            circle(-40, -58, 8).fill(ink).opacity("0.78"),
            circle(22, -66, 8).fill(ink).opacity("0.78"),
            circle(46, -54, 7).fill(ink).opacity("0.78"),
        ],
        Icon::LeavesPair => vec![
            path("M-84 20 Q-22 -94 0 0 Q-38 30 -84 20 Z")
                .fill(accent)
                .opacity("0.78"),
            path("M84 20 Q22 -94 0 0 Q38 30 84 20 Z")
                .fill(accent)
                .opacity("0.78"),
            line(-70, 18, -10, -38).stroke(thin),
            line(70, 18, 10, -38).stroke(thin),
        ],
        Icon::Tunnel => vec![
            path("M-118 82 V16 Q-118 -84 0 -84 Q118 -84 118 16 V82 Z")
                .fill(accent)
                .opacity("0.62"),
            path("M-78 82 V20 Q-78 -42 0 -42 Q78 -42 78 20 V82 Z")
                .fill(soft)
                .opacity("0.72"),
            path("M-118 82 V16 Q-118 -84 0 -84 Q118 -84 118 16 V82").stroke(bold),
        ],
        Icon::Target => vec![
            circle(0, 0, 96).fill(accent).opacity("0.24"),
            circle(0, 0, 70).stroke(bold),
            circle(0, 0, 42).stroke(thin),
            circle(0, 0, 15).fill(accent),
        ],
        Icon::Bell => vec![
            path("M-78 40 Q-78 -74 0 -84 Q78 -74 78 40 Z")
                .fill(accent)
                .opacity("0.68"),
            path("M-96 40 H96").stroke(bold),
            circle(0, 58, 12).fill(ink),
            path("M-78 40 Q-78 -74 0 -84 Q78 -74 78 40").stroke(bold),
        ],
        Icon::Compass => vec![
            circle(0, 0, 90).stroke(thin),
            path("M0 -96 L20 -20 L96 0 L20 20 L0 96 L-20 20 L-96 0 L-20 -20 Z")
                .fill(accent)
                .opacity("0.76"),
            circle(0, 0, 14).fill(ink),
        ],
        Icon::Boop => vec![
            circle(-44, 0, 46).fill(accent).opacity("0.68"),
            circle(44, 0, 46).fill(accent).opacity("0.68"),
            path(
                "M0 48 C30 18 52 6 72 -12 C47 -22 23 -15 0 8 C-23 -15 -47 -22 -72 -12 C-52 6 -30 18 0 48 Z",
            )
            .fill(ink)
            .opacity("0.2"),
            circle(0, 5, 11).fill(ink),
        ],
        Icon::Sunbeam => vec![
            circle(0, -10, 44).fill(accent).opacity("0.82"),
            path("M-96 96 L-18 24 H18 L96 96 Z")
                .fill(soft)
                .opacity("0.82"),
            line(-110, -10, -70, -10).stroke(thin),
            line(110, -10, 70, -10).stroke(thin),
            line(0, -120, 0, -72).stroke(thin),
        ],
        Icon::MoonZoom => vec![
            circle(-14, -18, 52).fill(accent).opacity("0.78"),
            circle(14, -30, 46).fill(soft).opacity("0.95"),
            line(40, 10, 120, -10).stroke(bold),
            line(28, 38, 114, 18).stroke(thin),
            line(22, 64, 96, 50).stroke(thin),
        ],
        Icon::Trio => vec![
            circle(-56, 8, 34).fill(accent).opacity("0.72"),
            circle(56, 8, 34).fill(accent).opacity("0.72"),
            circle(0, -28, 34).fill(accent).opacity("0.72"),
            path("M-56 8 Q0 72 56 8 Q0 -48 -56 8 Z")
                .fill(soft)
                .opacity("0.4"),
        ],
        Icon::Chat => vec![
            path(
                "M-122 -36 H24 Q48 -36 48 -12 V36 Q48 60 24 60 H-32 L-72 96 V60 H-122 Q-146 60 -146 36 V-12 Q-146 -36 -122 -36 Z",
            )
            .fill(accent)
            .opacity("0.64"),
            path(
                "M18 -74 H120 Q146 -74 146 -48 V8 Q146 34 120 34 H66 L28 68 V34 H18 Q-8 34 -8 8 V-48 Q-8 -74 18 -74 Z",
            )
            .fill(soft)
            .opacity("0.88"),
        ],
        Icon::Hay => vec![
            path("M-92 80 L-44 -56 L4 80 Z").fill(accent).opacity("0.76"),
            path("M-22 80 L28 -72 L74 80 Z").fill(accent).opacity("0.66"),
            line(-96, 80, 96, 80).stroke(bold),
        ],
        Icon::Brush => vec![
            rect(-20, -92, 40, 124, 18).fill(accent).opacity("0.74"),
            path("M-70 34 H70 V72 Q0 110 -70 72 Z")
                .fill(soft)
                .opacity("0.88"),
            line(-70, 34, 70, 34).stroke(thin),
            line(-40, 58, -20, 86).stroke(thin),
            line(0, 58, 0, 90).stroke(thin),
            line(40, 58, 20, 86).stroke(thin),
        ],
        Icon::Magnifier => vec![
            circle(-22, -10, 62).fill(soft).opacity("0.88"),
            circle(-22, -10, 62).stroke(bold),
            line(26, 36, 96, 102).stroke(bold),
            path("M-22 8 Q26 -30 58 10 Q16 44 -22 8 Z")
                .fill(accent)
                .opacity("0.72"),
        ],
        Icon::Pillow => vec![
            rect(-110, -52, 220, 118, 44).fill(accent).opacity("0.64"),
            path("M-60 -12 Q0 18 60 -12").stroke(thin),
            circle(0, 8, 9).fill(ink).opacity("0.75"),
        ],
        Icon::Squeak => vec![
            path("M-118 -34 L4 -62 V62 L-118 34 Z")
                .fill(accent)
                .opacity("0.72"),
            line(30, -38, 88, -58).stroke(thin),
            line(40, 0, 106, 0).stroke(thin),
            line(30, 38, 88, 58).stroke(thin),
        ],
        Icon::Bottle => vec![
            rect(-44, -84, 88, 152, 28).fill(accent).opacity("0.66"),
            rect(-20, -118, 40, 40, 12).fill(soft),
            path("M0 40 C34 40 34 92 0 92 C-34 92 -34 40 0 40 Z")
                .fill(soft)
                .opacity("0.92"),
        ],
        Icon::Hide => vec![
            path("M-118 84 Q-70 -86 0 84 Z").fill(accent).opacity("0.64"),
            path("M0 84 Q50 -94 118 84 Z").fill(soft).opacity("0.86"),
            circle(-20, 20, 12).fill(ink).opacity("0.7"),
        ],
        Icon::Crinkle => vec![
            path(
                "M-112 -66 L-42 -86 L12 -40 L82 -64 L118 -18 L74 34 L118 78 L44 102 L-16 58 L-76 88 L-122 36 L-78 -10 Z",
            )
            .fill(accent)
            .opacity("0.62"),
            polyline("-94 -26 -48 -12 -8 -40 30 -8 76 -18").stroke(thin),
            polyline("-86 30 -40 44 0 18 38 46 86 36").stroke(thin),
        ],
        Icon::Corner => vec![
            path("M-110 -86 H10 V-44 H-62 V98 H-110 Z")
                .fill(accent)
                .opacity("0.68"),
            circle(50, 10, 42).fill(soft).opacity("0.84"),
            circle(50, 10, 10).fill(ink),
        ],
        Icon::Checkin => vec![
            circle(0, 0, 92).stroke(thin),
            circle(-74, -14, 22).fill(accent).opacity("0.8"),
            circle(74, -14, 22).fill(accent).opacity("0.8"),
            circle(0, 62, 22).fill(accent).opacity("0.8"),
            path("M-52 -10 Q0 20 52 -10").stroke(thin),
            path("M52 -10 Q20 34 0 52").stroke(thin),
            path("M-52 -10 Q-20 34 0 52").stroke(thin),
        ],
        Icon::Trail => vec![
            path("M-116 64 Q-42 14 8 34 Q62 58 116 16").stroke(bold),
            circle(-86, 40, 11).fill(accent),
            circle(-28, 28, 11).fill(accent),
            circle(26, 38, 11).fill(accent),
            circle(86, 24, 11).fill(accent),
        ],
        Icon::Balance => vec![
            circle(-24, 0, 58).fill(accent).opacity("0.66"),
            circle(24, 0, 58).fill(soft).opacity("0.92"),
            circle(-24, 0, 10).fill(ink),
            circle(24, 0, 10).fill(ink),
            path("M-70 0 H70").stroke(thin),
        ],
        Icon::Mint => vec![
            line(0, 90, 0, -78).stroke(bold),
            path("M0 -22 Q-88 -58 -96 8 Q-42 22 0 -22 Z")
                .fill(accent)
                .opacity("0.74"),
            path("M0 -42 Q88 -78 96 -12 Q42 2 0 -42 Z")
                .fill(accent)
                .opacity("0.74"),
            path("M0 24 Q-64 0 -78 44 Q-38 58 0 24 Z")
                .fill(soft)
                .opacity("0.9"),
            path("M0 8 Q64 -16 78 26 Q38 40 0 8 Z").fill(soft).opacity("0.9"),
        ],
        Icon::Chew => vec![
            path(
                "M-72 24 C-92 -40 -2 -92 54 -60 C96 -36 90 24 40 44 C4 58 -40 44 -56 14 C-66 -8 -56 -24 -38 -24 C-12 -24 -6 12 -26 18",
            )
            .stroke(bold),
            line(-96, 86, -28, 26).stroke(thin),
        ],
        Icon::Stretch => vec![
            path("M-116 24 Q-14 -76 116 8").stroke(bold),
            path("M-116 24 L-82 14 L-92 48 Z").fill(accent),
            path("M116 8 L82 -2 L92 32 Z").fill(accent),
        ],
        Icon::Lap => vec![
            path("M-110 70 Q-58 12 -8 70").fill(accent).opacity("0.7"),
            path("M110 70 Q58 12 8 70").fill(accent).opacity("0.7"),
            path(
                "M0 54 C28 24 56 16 76 -4 C48 -18 22 -8 0 14 C-22 -8 -48 -18 -76 -4 C-56 16 -28 24 0 54 Z",
            )
            .fill(soft)
            .opacity("0.95"),
        ],
        Icon::PawPause => vec![
            ellipse(-42, 20, 42, 34).fill(accent).opacity("0.72"),
            circle(-76, -18, 13).fill(accent).opacity("0.86"),
            circle(-42, -30, 13).fill(accent).opacity("0.86"),
            circle(-8, -18, 13).fill(accent).opacity("0.86"),
            rect(38, -38, 24, 86, 10).fill(ink).opacity("0.86"),
            rect(78, -38, 24, 86, 10).fill(ink).opacity("0.86"),
        ],
        Icon::Window => vec![
            rect(-102, -82, 204, 164, 16).fill(accent).opacity("0.58"),
            line(0, -82, 0, 82).stroke(bold),
            line(-102, 0, 102, 0).stroke(bold),
            circle(42, 20, 22).fill(soft).opacity("0.92"),
            circle(50, 20, 6).fill(ink),
        ],
        Icon::Seed => vec![
            ellipse(-18, 34, 44, 58).fill(accent).opacity("0.74"),
            path("M14 12 Q92 -10 82 68 Q24 76 14 12 Z")
                .fill(soft)
                .opacity("0.95"),
            path("M-6 -22 Q8 -62 42 -78 Q54 -36 20 -12 Z")
                .fill(soft)
                .opacity("0.92"),
        ],
        Icon::Hideout => vec![
            path("M-112 44 Q0 -80 112 44 V92 H-112 Z")
                .fill(accent)
                .opacity("0.66"),
            rect(-58, 24, 116, 68, 30).fill(soft).opacity("0.9"),
            circle(0, 58, 10).fill(ink),
        ],
        Icon::Truth => vec![
            line(-110, 0, -62, 0).stroke(thin),
            path("M-60 0 Q-24 -48 12 0 Q48 48 84 0").stroke(bold),
            path("M-60 24 Q-24 -24 12 24 Q48 72 84 24").stroke(thin),
            path("M-60 -24 Q-24 -72 12 -24 Q48 24 84 -24").stroke(thin),
        ],
        Icon::Map => vec![
            path("M-112 -74 L-34 -94 L34 -66 L112 -86 V74 L34 94 L-34 66 L-112 86 Z")
                .fill(accent)
                .opacity("0.58"),
            polyline("-34 -94 -34 66").stroke(thin),
            polyline("34 -66 34 94").stroke(thin),
            path("M-68 -14 L-24 14 L8 -20 L48 8").stroke(bold),
        ],
        Icon::PillowStack => vec![
            rect(-104, 34, 208, 66, 28).fill(accent).opacity("0.58"),
            rect(-88, -14, 176, 66, 28).fill(accent).opacity("0.7"),
            rect(-70, -60, 140, 62, 26).fill(soft).opacity("0.95"),
        ],
        Icon::Meadow => vec![
            path("M-122 84 Q-70 34 -16 84 Z").fill(accent).opacity("0.72"),
            path("M-18 84 Q38 26 98 84 Z").fill(accent).opacity("0.58"),
            line(-62, 84, -62, 8).stroke(thin),
            circle(-62, -10, 17).fill(soft),
            line(24, 84, 24, 0).stroke(thin),
            circle(24, -18, 19).fill(soft),
        ],
        Icon::HomeHop => vec![
            path("M-102 16 L0 -82 L102 16 V86 H-102 Z")
                .fill(accent)
                .opacity("0.64"),
            rect(-34, 22, 68, 64, 18).fill(soft).opacity("0.94"),
            path("M-122 -10 Q-24 -118 92 -34").stroke(bold),
        ],
        Icon::Halo => vec![
            ellipse(0, -54, 82, 24).fill(soft).opacity("0.95"),
            ellipse(0, -54, 82, 24).stroke(thin),
            circle(0, 20, 54).fill(accent).opacity("0.72"),
            line(0, -122, 0, -90).stroke(thin),
        ],
        Icon::Flower => vec![
            circle(0, 0, 16).fill(ink),
            circle(-40, 0, 24).fill(accent).opacity("0.8"),
            circle(40, 0, 24).fill(accent).opacity("0.8"),
            circle(0, -40, 24).fill(accent).opacity("0.8"),
            circle(0, 40, 24).fill(accent).opacity("0.8"),
            line(0, 62, 0, 108).stroke(thin),
        ],
        Icon::ShadowLeaf => vec![
            circle(-18, -6, 64).fill(accent).opacity("0.64"),
            circle(20, -24, 60).fill(soft).opacity("0.95"),
            path("M-26 52 Q42 -48 92 44 Q42 56 -26 52 Z")
                .fill(ink)
                .opacity("0.22"),
        ],
        Icon::Mask => vec![
            path("M-124 -12 Q-92 -78 -34 -64 H34 Q92 -78 124 -12 Q104 74 0 98 Q-104 74 -124 -12 Z")
                .fill(accent)
                .opacity("0.72"),
            ellipse(-44, 2, 24, 16).fill(ink).opacity("0.76"),
            ellipse(44, 2, 24, 16).fill(ink).opacity("0.76"),
        ],
        Icon::CrownSnow => vec![
            path("M-110 54 L-74 -44 L-16 10 L16 -58 L74 10 L110 -44 L110 54 Z")
                .fill(accent)
                .opacity("0.76"),
            line(0, -2, 0, 68).stroke(thin),
            line(-30, 26, 30, 26).stroke(thin),
            line(-20, 12, 20, 40).stroke(thin),
            line(-20, 40, 20, 12).stroke(thin),
        ],
        Icon::Clover => vec![
            circle(-24, -22, 28).fill(accent).opacity("0.82"),
            circle(24, -22, 28).fill(accent).opacity("0.82"),
            circle(0, 20, 28).fill(accent).opacity("0.82"),
            line(0, 48, 0, 106).stroke(thin),
            path("M-84 -72 L0 -120 L84 -72 L68 -34 H-68 Z")
                .fill(soft)
                .opacity("0.9"),
        ],
        Icon::Spark => vec![
            circle(0, 0, 42).fill(accent).opacity("0.85"),
            line(-94, 0, -46, 0).stroke(thin),
            line(94, 0, 46, 0).stroke(thin),
            line(0, -94, 0, -46).stroke(thin),
            line(0, 94, 0, 46).stroke(thin),
        ],
    }
}
