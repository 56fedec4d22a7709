use sha2::{Digest as _, Sha256};

/// Deterministic 64-bit seed derived from an entry id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(pub u64);

impl Seed {
    /// Derive the seed for `id`.
    ///
    /// The seed is the first 16 hex digits of the SHA-256 digest of the UTF-8 bytes of `id`,
    /// read as a base-16 integer. That is the first eight digest bytes in big-endian order.
    /// Callers skip empty ids before getting here.
    pub fn for_id(id: &str) -> Self {
        let digest = Sha256::digest(id.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(head))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Draw a bounded integer from the bit window starting at `offset`.
    ///
    /// Offsets of 64 or more shift every bit out and sample zero.
    pub fn sample(self, offset: u32, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "sample range must satisfy min <= max");
        if max <= min {
            return min;
        }
        let span = (max - min).max(1);
        let value = (self.0.checked_shr(offset).unwrap_or(0) & 0xFFFF) as i64;
        min + value % (span + 1)
    }

    pub fn draw(self, slot: Slot) -> i64 {
        self.sample(slot.offset, slot.min, slot.max)
    }
}

/// One row of the parameter table: a bit offset and an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub offset: u32,
    pub min: i64,
    pub max: i64,
}

impl Slot {
    pub const fn new(offset: u32, min: i64, max: i64) -> Self {
        Self { offset, min, max }
    }

    pub fn contains(self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }
}

pub const SPARKLE_COUNT: usize = 8;

pub const OFFSET_X: Slot = Slot::new(33, -28, 28);
pub const OFFSET_Y: Slot = Slot::new(39, -20, 20);
pub const BODY_SHIFT: Slot = Slot::new(17, -12, 12);
pub const EAR_SHIFT: Slot = Slot::new(21, -10, 10);
pub const EYE_SHIFT: Slot = Slot::new(25, -8, 8);

/// Per-sparkle slots. Offsets overlap between parameters and sparkles; the table is kept as is
/// so previously rendered art stays byte-identical.
pub fn sparkle_slots(k: usize) -> SparkleSlots {
    let k = k as u32;
    SparkleSlots {
        x: Slot::new(k * 7 + 1, 100, 1100),
        y: Slot::new(k * 9 + 3, 70, 420),
        radius: Slot::new(k * 5 + 11, 5, 14),
        opacity: Slot::new(k * 4 + 13, 0, 20),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparkleSlots {
    pub x: Slot,
    pub y: Slot,
    pub radius: Slot,
    /// Hundredths added on top of the base opacity.
    pub opacity: Slot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SparkleParams {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
    /// Opacity in hundredths (`12..=32`).
    pub opacity_pct: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PoseParams {
    pub body_shift: i64,
    pub ear_shift: i64,
    pub eye_shift: i64,
}

/// Every seed-driven value a scene needs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneParameters {
    pub offset_x: i64,
    pub offset_y: i64,
    pub sparkles: [SparkleParams; SPARKLE_COUNT],
    pub pose: PoseParams,
}

const SPARKLE_BASE_OPACITY_PCT: i64 = 12;

impl SceneParameters {
    pub fn from_seed(seed: Seed) -> Self {
        let sparkles = std::array::from_fn(|k| {
            let slots = sparkle_slots(k);
            SparkleParams {
                x: seed.draw(slots.x),
                y: seed.draw(slots.y),
                radius: seed.draw(slots.radius),
                opacity_pct: SPARKLE_BASE_OPACITY_PCT + seed.draw(slots.opacity),
            }
        });

        Self {
            offset_x: seed.draw(OFFSET_X),
            offset_y: seed.draw(OFFSET_Y),
            sparkles,
            pose: PoseParams {
                body_shift: seed.draw(BODY_SHIFT),
                ear_shift: seed.draw(EAR_SHIFT),
                eye_shift: seed.draw(EYE_SHIFT),
            },
        }
    }
}
