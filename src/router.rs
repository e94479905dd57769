//! Edge path computation between node rectangles.
//!
//! Every edge leaves its source at the bottom-center anchor and enters its
//! target at the top-center anchor. Two routing modes exist:
//!
//! - [`RouteMode::Orthogonal`]: three axis-aligned segments, the horizontal
//!   one at the vertical midpoint between the anchors. Used while a flow is
//!   being worked through.
//! - [`RouteMode::Curved`]: one cubic whose control points sit vertically
//!   off each anchor by `min(50, |dy| / 2)`. Used while editing.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Rect},
    model::{Edge, EdgeId, Flow, NodeId},
};

/// Upper bound of the curved-mode control point offset.
const MAX_CONTROL_OFFSET: f64 = 50.0;
/// Half of the arrowhead base.
const ARROW_HALF_WIDTH: f64 = 5.0;
const ORTHOGONAL_ARROW_LENGTH: f64 = 8.0;
const CURVED_ARROW_LENGTH: f64 = 5.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RouteMode {
    #[default]
    Orthogonal,
    Curved,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        c1: Point,
        c2: Point,
        to: Point,
    },
}

/// Geometry of one routed edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub segments: Vec<PathSegment>,
    /// Triangle with its tip on the target anchor.
    pub arrowhead: [Point; 3],
}

impl EdgePath {
    /// SVG path data, e.g. `M 185 150 L 185 225 L 185 225 L 185 300`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = match seg {
                PathSegment::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathSegment::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathSegment::CubicTo {
                    c1,
                    c2,
                    to,
                } => write!(d, "C {} {}, {} {}, {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y),
            };
        }
        d
    }

    /// SVG polygon points, e.g. `185,300 180,292 190,292`.
    pub fn arrowhead_points(&self) -> String {
        self.arrowhead.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
    }

    pub fn start(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn end(&self) -> Option<Point> {
        match self.segments.last() {
            Some(PathSegment::MoveTo(p)) | Some(PathSegment::LineTo(p)) => Some(*p),
            Some(PathSegment::CubicTo {
                to,
                ..
            }) => Some(*to),
            None => None,
        }
    }
}

/// An edge of a flow together with its computed geometry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub path: EdgePath,
}

/// Routes from the bottom-center of `source` to the top-center of `target`.
pub fn route(
    source: &Rect,
    target: &Rect,
    mode: RouteMode,
) -> EdgePath {
    let start = source.bottom_center();
    let end = target.top_center();

    match mode {
        RouteMode::Orthogonal => {
            let mid_y = start.y + (end.y - start.y) / 2.0;
            EdgePath {
                segments: vec![
                    PathSegment::MoveTo(start),
                    PathSegment::LineTo(Point::new(start.x, mid_y)),
                    PathSegment::LineTo(Point::new(end.x, mid_y)),
                    PathSegment::LineTo(end),
                ],
                arrowhead: arrowhead(end, ORTHOGONAL_ARROW_LENGTH),
            }
        }
        RouteMode::Curved => {
            let offset = MAX_CONTROL_OFFSET.min((end.y - start.y).abs() / 2.0);
            EdgePath {
                segments: vec![
                    PathSegment::MoveTo(start),
                    PathSegment::CubicTo {
                        c1: Point::new(start.x, start.y + offset),
                        c2: Point::new(end.x, end.y - offset),
                        to: end,
                    },
                ],
                arrowhead: arrowhead(end, CURVED_ARROW_LENGTH),
            }
        }
    }
}

fn arrowhead(
    tip: Point,
    length: f64,
) -> [Point; 3] {
    [
        tip,
        Point::new(tip.x - ARROW_HALF_WIDTH, tip.y - length),
        Point::new(tip.x + ARROW_HALF_WIDTH, tip.y - length),
    ]
}

/// Routes a single edge, `None` when either endpoint is missing from `flow`.
pub fn route_edge(
    flow: &Flow,
    edge: &Edge,
    mode: RouteMode,
) -> Option<EdgePath> {
    let source = flow.find_node(&edge.source)?;
    let target = flow.find_node(&edge.target)?;
    Some(route(&source.rect(), &target.rect(), mode))
}

/// Routes every edge of `flow`, silently omitting dangling ones.
pub fn route_flow(
    flow: &Flow,
    mode: RouteMode,
) -> Vec<RoutedEdge> {
    flow.edges
        .iter()
        .filter_map(|edge| {
            route_edge(flow, edge, mode).map(|path| RoutedEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                path,
            })
        })
        .collect()
}
