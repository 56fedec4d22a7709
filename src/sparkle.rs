use crate::{
    scene::node::{Element, circle},
    seed::SparkleParams,
};

/// Small translucent circles scattered behind the icon and mascot.
pub fn render_sparkles(sparkles: &[SparkleParams], color: &str) -> Vec<Element> {
    sparkles
        .iter()
        .map(|s| {
            circle(s.x as i32, s.y as i32, s.radius as i32)
                .fill(color)
                .opacity(&format_hundredths(s.opacity_pct))
        })
        .collect()
}

/// Format a non-negative hundredths value with exactly two decimals.
fn format_hundredths(pct: i64) -> String {
    let pct = pct.max(0);
    format!("{}.{:02}", pct / 100, pct % 100)
}
