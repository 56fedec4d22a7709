//! The deck mascot: a guinea pig standing on a ground shadow.

use crate::{
    palette::Palette,
    scene::node::{Element, circle, ellipse, group, path},
    seed::PoseParams,
};

const WHISKERS: [&str; 3] = [
    "M882 544 C912 536 934 526 954 510",
    "M882 552 C914 552 934 560 954 574",
    "M882 560 C914 570 934 592 952 612",
];

/// Ground shadow followed by the pose group.
///
/// The shadow sits outside the pose group so body jitter never lifts the figure off the ground.
pub fn render_character(pose: PoseParams, palette: &Palette) -> [Element; 2] {
    let ear_shift = pose.ear_shift as i32;
    let eye_shift = pose.eye_shift as i32;

    let shadow = ellipse(600, 640, 338, 88)
        .fill(palette.ground)
        .opacity("0.58");

    let whiskers = WHISKERS.iter().map(|d| {
        path(d)
            .attr("stroke", palette.ink)
            .attr("stroke-width", 7)
            .attr("stroke-linecap", "round")
            .fill("none")
            .opacity("0.75")
    });

    let figure = group()
        .translate(0, pose.body_shift)
        .child(ellipse(550, 528, 238, 150).fill(palette.fur).opacity("0.96"))
        .child(ellipse(794, 510, 150, 118).fill(palette.fur).opacity("0.98"))
        .child(
            ellipse(866, 422 + ear_shift, 45, 56)
                .fill(palette.ear)
                .opacity("0.95"),
        )
        .child(
            ellipse(792, 416 - ear_shift, 38, 48)
                .fill(palette.ear)
                .opacity("0.95"),
        )
        .child(circle(830 + eye_shift, 512, 10).fill(palette.ink))
        .child(circle(876, 544, 8).fill(palette.nose))
        .children(whiskers)
        .child(ellipse(702, 654, 64, 28).fill(palette.ear).opacity("0.62"))
        .child(ellipse(548, 656, 64, 28).fill(palette.ear).opacity("0.62"));

    [shadow, figure]
}
