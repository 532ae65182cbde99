use super::{points_string, GeometrySnapshot};
use crate::core_types::Skill;
use crate::decor::theme::Palette;

#[derive(Debug, Clone, Copy)]
pub struct SvgStyle {
    pub palette: Palette,
    /// Opacity of the background fill, 0.4..=1.0.
    pub contrast: f64,
    /// Opacity of the grain overlay; 0 leaves it out.
    pub noise: f64,
    pub view_half_extent: f64,
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone SVG document: guide circle, spokes, the filled polygon and labels.
///
/// `skills` must be the collection the snapshot was computed from; labels are
/// paired with anchors by position.
pub fn render(snapshot: &GeometrySnapshot, skills: &[Skill], style: &SvgStyle) -> String {
    let half = style.view_half_extent;
    let side = half * 2.0;
    let p = &style.palette;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
        -half, -half, side, side, side, side
    ));
    svg.push_str(&format!(
        "  <defs>\n    <linearGradient id=\"gradient\" x1=\"0\" y1=\"1\" x2=\"1\" y2=\"0\">\n      <stop offset=\"0%\" stop-color=\"{fg}\"/>\n      <stop offset=\"100%\" stop-color=\"{fg}\" stop-opacity=\"0.8\"/>\n    </linearGradient>\n    <filter id=\"glow\">\n      <feGaussianBlur stdDeviation=\"5\" result=\"blur\"/>\n      <feFlood flood-color=\"{fg}\" flood-opacity=\"0.5\"/>\n      <feComposite in2=\"blur\" operator=\"in\"/>\n      <feMerge><feMergeNode/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n    </filter>\n",
        fg = p.foreground
    ));
    if style.noise > 0.0 {
        svg.push_str(
            "    <filter id=\"grain\">\n      <feTurbulence type=\"fractalNoise\" baseFrequency=\"0.9\" numOctaves=\"2\" stitchTiles=\"stitch\"/>\n      <feColorMatrix type=\"saturate\" values=\"0\"/>\n    </filter>\n",
        );
    }
    svg.push_str("  </defs>\n");

    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
        -half, -half, side, side, p.background, style.contrast
    ));
    svg.push_str(&format!(
        "  <circle cx=\"0\" cy=\"0\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        snapshot.guide_radius, p.guide_line
    ));
    for end in &snapshot.spokes {
        svg.push_str(&format!(
            "  <line x1=\"0\" y1=\"0\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            end.x, end.y, p.guide_line
        ));
    }
    if !snapshot.is_empty() {
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"url(#gradient)\" filter=\"url(#glow)\"/>\n",
            points_string(&snapshot.vertices)
        ));
    }
    for (anchor, skill) in snapshot.labels.iter().zip(skills) {
        let at = anchor.position();
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\" fill=\"{}\">{}</text>\n",
            at.x,
            at.y,
            anchor.anchor,
            p.foreground,
            escape_xml(&skill.label)
        ));
    }
    if style.noise > 0.0 {
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" filter=\"url(#grain)\" opacity=\"{}\" style=\"mix-blend-mode:multiply\"/>\n",
            -half, -half, side, side, style.noise
        ));
    }
    svg.push_str("</svg>\n");
    svg
}
