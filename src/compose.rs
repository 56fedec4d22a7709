use crate::{
    character::render_character,
    icon::{Icon, IconColors, render_icon},
    palette::{PALETTES, Palette, palette_index},
    scene::node::{Element, group},
    seed::{SceneParameters, Seed},
    sparkle::render_sparkles,
};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 760;

/// Every choice derived from an entry id, before any markup is built.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ArtPlan {
    pub seed: u64,
    pub palette_index: usize,
    pub icon: Icon,
    pub params: SceneParameters,
}

impl ArtPlan {
    pub fn for_id(id: &str) -> Self {
        let seed = Seed::for_id(id);
        Self {
            seed: seed.get(),
            palette_index: palette_index(seed),
            icon: Icon::for_id(id),
            params: SceneParameters::from_seed(seed),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        &PALETTES[self.palette_index]
    }
}

/// Assemble the full scene for one entry.
///
/// Z-order, back to front: background gradient, mist highlight, border, then one group shifted by
/// the global offset holding sparkles, the icon and the mascot.
pub fn compose_scene(plan: &ArtPlan, title: &str) -> Element {
    let palette = plan.palette();
    let params = &plan.params;

    let icon = render_icon(
        plan.icon,
        IconColors {
            ink: palette.ink,
            accent: palette.accent,
            accent_soft: palette.accent_soft,
        },
    );

    let body = group()
        .translate(params.offset_x, params.offset_y)
        .children(render_sparkles(&params.sparkles, palette.accent))
        .child(icon)
        .children(render_character(params.pose, palette));

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
        .attr(
            "viewBox",
            format_args!("0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}"),
        )
        .attr("role", "img")
        .attr("aria-labelledby", "title desc")
        .child(Element::new("title").attr("id", "title").text(title))
        .child(
            Element::new("desc")
                .attr("id", "desc")
                .text(format!("Illustration for {title}")),
        )
        .child(defs(palette))
        .child(canvas_rect().fill("url(#bg)"))
        .child(canvas_rect().fill("url(#mist)"))
        .child(border(palette))
        .child(body)
}

fn defs(palette: &Palette) -> Element {
    let background = Element::new("linearGradient")
        .attr("id", "bg")
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "100%")
        .attr("y2", "100%")
        .child(stop("0%", palette.background_start))
        .child(stop("100%", palette.background_end));

    let mist = Element::new("radialGradient")
        .attr("id", "mist")
        .attr("cx", "20%")
        .attr("cy", "0%")
        .attr("r", "70%")
        .child(stop("0%", palette.accent_soft).attr("stop-opacity", "0.72"))
        .child(stop("100%", "#ffffff").attr("stop-opacity", "0"));

    Element::new("defs").child(background).child(mist)
}

fn stop(offset: &str, color: &str) -> Element {
    Element::new("stop")
        .attr("offset", offset)
        .attr("stop-color", color)
}

fn canvas_rect() -> Element {
    Element::new("rect")
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
        .attr("rx", 36)
}

fn border(palette: &Palette) -> Element {
    Element::new("rect")
        .attr("x", 14)
        .attr("y", 14)
        .attr("width", CANVAS_WIDTH - 28)
        .attr("height", CANVAS_HEIGHT - 28)
        .attr("rx", 28)
        .fill("none")
        .attr("stroke", palette.ink)
        .attr("stroke-opacity", "0.18")
        .attr("stroke-width", 4)
}
