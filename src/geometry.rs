//! Radial polygon geometry.
//!
//! Every function here is pure: the same `(index, value, count)` always maps to the
//! same coordinates. Coordinates are centered on the polygon's origin with +y pointing
//! down (screen space), so index 0 sits at the top and items proceed clockwise.

pub mod svg;

use crate::config::CanvasParams;
use crate::consts::{LABEL_OFFSET_X, LABEL_OFFSET_Y, MAX_SCORE};
use crate::core_types::Skill;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the point around the origin, in (-π, π].
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Horizontal text alignment of a label. Names match SVG `text-anchor` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Nudges applied to labels so they clear their spoke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOffsets {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for LabelOffsets {
    fn default() -> Self {
        Self {
            horizontal: LABEL_OFFSET_X,
            vertical: LABEL_OFFSET_Y,
        }
    }
}

impl From<&CanvasParams> for LabelOffsets {
    fn from(canvas: &CanvasParams) -> Self {
        Self {
            horizontal: canvas.label_offset_x,
            vertical: canvas.label_offset_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    /// Point on the label circle, before the offset.
    pub point: Point,
    pub anchor: Anchor,
    pub offset: Point,
}

impl LabelAnchor {
    /// Where the text is actually drawn.
    pub fn position(&self) -> Point {
        Point::new(self.point.x + self.offset.x, self.point.y + self.offset.y)
    }
}

/// Angle of slot `index` among `count` evenly spaced slots. None when `count` is 0.
pub fn slot_angle(index: usize, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some((index as f64 / count as f64) * TAU - FRAC_PI_2)
}

/// Wraps an angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Vertex of a `value` scored item at slot `index` of `count`, on a polygon whose
/// full score reaches `max_radius`.
pub fn compute_vertex(index: usize, value: f64, count: usize, max_radius: f64) -> Option<Point> {
    if index >= count {
        return None;
    }
    let angle = slot_angle(index, count)?;
    let radius = (value / MAX_SCORE as f64) * max_radius;
    Some(Point::new(radius * angle.cos(), radius * angle.sin()))
}

pub fn compute_label_anchor(index: usize, count: usize, label_radius: f64) -> Option<LabelAnchor> {
    compute_label_anchor_with(index, count, label_radius, LabelOffsets::default())
}

pub fn compute_label_anchor_with(
    index: usize,
    count: usize,
    label_radius: f64,
    offsets: LabelOffsets,
) -> Option<LabelAnchor> {
    if index >= count {
        return None;
    }
    let angle = slot_angle(index, count)?;
    let point = Point::new(label_radius * angle.cos(), label_radius * angle.sin());
    let (anchor, offset) = label_alignment(normalize_angle(angle), offsets);
    Some(LabelAnchor {
        point,
        anchor,
        offset,
    })
}

/// Four-way sector split. The last arm takes everything the others leave,
/// including the exact -π/4 boundary.
fn label_alignment(angle: f64, offsets: LabelOffsets) -> (Anchor, Point) {
    if angle > -FRAC_PI_4 && angle < FRAC_PI_4 {
        (Anchor::Start, Point::new(offsets.horizontal, 0.0))
    } else if angle > 3.0 * FRAC_PI_4 || angle < -3.0 * FRAC_PI_4 {
        (Anchor::End, Point::new(-offsets.horizontal, 0.0))
    } else if (FRAC_PI_4..=3.0 * FRAC_PI_4).contains(&angle) {
        (Anchor::Middle, Point::new(0.0, -offsets.vertical))
    } else {
        (Anchor::Middle, Point::new(0.0, offsets.vertical))
    }
}

/// Closed polygon outline, one vertex per skill in render order.
pub fn polygon(skills: &[Skill], max_radius: f64) -> Vec<Point> {
    let count = skills.len();
    skills
        .iter()
        .enumerate()
        .filter_map(|(i, s)| compute_vertex(i, s.value as f64, count, max_radius))
        .collect()
}

pub fn label_anchors(skills: &[Skill], label_radius: f64, offsets: LabelOffsets) -> Vec<LabelAnchor> {
    let count = skills.len();
    (0..count)
        .filter_map(|i| compute_label_anchor_with(i, count, label_radius, offsets))
        .collect()
}

/// End points of the guide spokes, on the guide circle.
pub fn spokes(count: usize, guide_radius: f64) -> Vec<Point> {
    (0..count)
        .filter_map(|i| compute_vertex(i, MAX_SCORE as f64, count, guide_radius))
        .collect()
}

/// `"x,y x,y ..."` as used by an SVG `points` attribute.
pub fn points_string(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything a renderer needs for one frame, derived from one collection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub guide_radius: f64,
    pub label_radius: f64,
    pub vertices: Vec<Point>,
    pub labels: Vec<LabelAnchor>,
    pub spokes: Vec<Point>,
}

impl GeometrySnapshot {
    pub fn compute(skills: &[Skill], canvas: &CanvasParams) -> Self {
        Self {
            guide_radius: canvas.guide_radius,
            label_radius: canvas.label_radius,
            vertices: polygon(skills, canvas.guide_radius),
            labels: label_anchors(skills, canvas.label_radius, LabelOffsets::from(canvas)),
            spokes: spokes(skills.len(), canvas.guide_radius),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn points(&self) -> String {
        points_string(&self.vertices)
    }
}
