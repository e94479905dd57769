//! Maps a flow and the editing surface state to a drawable scene.
//!
//! A [`Scene`] is plain data: node boxes in draw order plus routed edges
//! already styled for the surface mode. Hosts may draw it themselves or
//! serialize it with [`Scene::to_svg`].

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::{
    editor::{Editor, Hit, SurfaceMode},
    geometry::{Point, Rect},
    model::{EdgeId, Flow, NodeId, NodeKind, NodeStatus},
    router::{self, EdgePath},
};

pub const PRIMARY_COLOR: &str = "#007AFF";
pub const EDIT_EDGE_COLOR: &str = "#C7C7CC";
pub const COMPLETED_COLOR: &str = "#34C759";
const USE_BACKGROUND: &str = "#F2F2F7";
const EDIT_BACKGROUND: &str = "#FFFFFF";

const EDGE_WIDTH: f64 = 2.0;
const EDIT_EDGE_DASH: &str = "5,5";
const NODE_RADIUS: f64 = 12.0;
/// Side of the square the resize handle reacts to.
const HANDLE_SIZE: f64 = 32.0;
/// Blank space kept around the content in SVG output.
const CANVAS_MARGIN: f64 = 40.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
    /// SVG dash pattern; solid when absent.
    pub dash: Option<String>,
}

impl EdgeStyle {
    pub fn for_mode(mode: SurfaceMode) -> Self {
        match mode {
            SurfaceMode::Use => Self {
                color: PRIMARY_COLOR.to_string(),
                width: EDGE_WIDTH,
                dash: None,
            },
            SurfaceMode::Edit => Self {
                color: EDIT_EDGE_COLOR.to_string(),
                width: EDGE_WIDTH,
                dash: Some(EDIT_EDGE_DASH.to_string()),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub rect: Rect,
    pub selected: bool,
    /// Chosen as the source of the pending connection.
    pub connect_source: bool,
    pub handle_visible: bool,
    /// Connection ports are drawn while connect mode is on.
    pub ports_visible: bool,
}

impl NodeBox {
    /// Area reacting to a resize press, anchored at the bottom-right corner.
    pub fn handle_rect(&self) -> Rect {
        Rect::new(
            self.rect.origin.x + self.rect.size.width - HANDLE_SIZE,
            self.rect.bottom() - HANDLE_SIZE,
            HANDLE_SIZE,
            HANDLE_SIZE,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub id: EdgeId,
    pub path: EdgePath,
    pub style: EdgeStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scene {
    pub mode: SurfaceMode,
    pub nodes: Vec<NodeBox>,
    pub edges: Vec<EdgeView>,
    /// Prompt shown above the canvas while connecting.
    pub banner: Option<String>,
}

impl Scene {
    /// Builds the scene for the editor's draft in its current state.
    pub fn build(editor: &Editor) -> Self {
        let mode = editor.mode();
        let connect = editor.connect();
        let flow = editor.flow();

        let nodes = flow
            .nodes
            .iter()
            .map(|n| NodeBox {
                id: n.id.clone(),
                label: n.label.clone(),
                kind: n.kind,
                status: n.status,
                rect: n.rect(),
                selected: editor.is_editing() && editor.selected() == Some(&n.id),
                connect_source: editor.is_editing() && connect.source() == Some(&n.id),
                handle_visible: editor.resize_handle_visible(&n.id),
                ports_visible: editor.is_editing() && connect.is_active(),
            })
            .collect();

        Self {
            mode,
            nodes,
            edges: Self::route_edges(flow, mode),
            banner: editor.connect_prompt().map(str::to_string),
        }
    }

    /// Scene of a committed flow as shown in use mode.
    pub fn for_flow(flow: &Flow) -> Self {
        Self::build(&Editor::new(flow))
    }

    fn route_edges(
        flow: &Flow,
        mode: SurfaceMode,
    ) -> Vec<EdgeView> {
        let style = EdgeStyle::for_mode(mode);
        router::route_flow(flow, mode.route_mode())
            .into_iter()
            .map(|r| EdgeView {
                id: r.id,
                path: r.path,
                style: style.clone(),
            })
            .collect()
    }

    /// Smallest rectangle holding every node, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.nodes.first()?.rect;
        let (mut min, mut max) = (first.origin, Point::new(first.origin.x + first.size.width, first.bottom()));
        for n in &self.nodes[1..] {
            min.x = min.x.min(n.rect.origin.x);
            min.y = min.y.min(n.rect.origin.y);
            max.x = max.x.max(n.rect.origin.x + n.rect.size.width);
            max.y = max.y.max(n.rect.bottom());
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Resolves what a press at `at` lands on. Later nodes are drawn on top
    /// and win.
    pub fn hit_test(
        &self,
        at: Point,
    ) -> Hit {
        for n in self.nodes.iter().rev() {
            if n.handle_visible && n.handle_rect().contains(at) {
                return Hit::ResizeHandle(n.id.clone());
            }
            if n.rect.contains(at) {
                return Hit::Node(n.id.clone());
            }
        }
        Hit::Canvas
    }

    pub fn to_svg(&self) -> String {
        let bounds = self.bounds().unwrap_or_default();
        let (x, y) = (bounds.origin.x.min(0.0) - CANVAS_MARGIN, bounds.origin.y.min(0.0) - CANVAS_MARGIN);
        let width = bounds.origin.x + bounds.size.width + CANVAS_MARGIN - x;
        let height = bounds.origin.y + bounds.size.height + CANVAS_MARGIN - y;
        let background = match self.mode {
            SurfaceMode::Use => USE_BACKGROUND,
            SurfaceMode::Edit => EDIT_BACKGROUND,
        };

        let mut svg = String::new();
        let _ = writeln!(svg, "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">", width, height, x, y, width, height);
        let _ = writeln!(svg, "<rect x=\"{}\" y=\"{}\" width=\"100%\" height=\"100%\" fill=\"{}\"/>", x, y, background);

        for e in &self.edges {
            let dash = e.style.dash.as_deref().map(|d| format!(" stroke-dasharray=\"{}\"", d)).unwrap_or_default();
            let _ = writeln!(
                svg,
                "<path data-edge=\"{}\" d=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{} stroke-linejoin=\"round\" fill=\"none\"/>",
                escape_xml(&e.id),
                e.path.to_svg_d(),
                e.style.color,
                e.style.width,
                dash
            );
            let _ = writeln!(svg, "<polygon points=\"{}\" fill=\"{}\"/>", e.path.arrowhead_points(), e.style.color);
        }

        for n in &self.nodes {
            self.write_node(&mut svg, n);
        }

        if let Some(banner) = &self.banner {
            let _ = writeln!(svg, "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-weight=\"600\">{}</text>", x + 16.0, y + 24.0, PRIMARY_COLOR, escape_xml(banner));
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn write_node(
        &self,
        svg: &mut String,
        n: &NodeBox,
    ) {
        let r = &n.rect;
        let (fill, text, stroke, stroke_width) = match self.mode {
            SurfaceMode::Use if n.status == NodeStatus::Completed => (COMPLETED_COLOR, "#FFFFFF", "#E5E5EA", 1.0),
            SurfaceMode::Use => ("#FFFFFF", "#000000", "#E5E5EA", 1.0),
            SurfaceMode::Edit if n.selected || n.connect_source => ("#FFFFFF", "#000000", PRIMARY_COLOR, 4.0),
            SurfaceMode::Edit => ("#FFFFFF", "#000000", "#99CAFF", 2.0),
        };

        let _ = writeln!(
            svg,
            "<g data-node=\"{}\" data-type=\"{}\" data-status=\"{}\">",
            escape_xml(&n.id),
            n.kind.as_ref(),
            n.status.as_ref()
        );
        let _ = writeln!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            r.origin.x, r.origin.y, r.size.width, r.size.height, NODE_RADIUS, fill, stroke, stroke_width
        );

        for (i, line) in n.label.lines().enumerate() {
            let _ = writeln!(
                svg,
                "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"17\">{}</text>",
                r.origin.x + 16.0,
                r.origin.y + 30.0 + 22.0 * i as f64,
                text,
                escape_xml(line)
            );
        }

        if n.ports_visible {
            for p in [r.top_center(), r.bottom_center()] {
                let _ = writeln!(svg, "<circle cx=\"{}\" cy=\"{}\" r=\"8\" fill=\"{}\" stroke=\"#FFFFFF\" stroke-width=\"2\"/>", p.x, p.y, PRIMARY_COLOR);
            }
        }

        if n.handle_visible {
            let (hx, hy) = (r.origin.x + r.size.width - 4.0, r.bottom() - 4.0);
            let _ = writeln!(
                svg,
                "<path data-handle=\"resize\" d=\"M {} {} L {} {} L {} {}\" stroke=\"{}\" stroke-width=\"2\" fill=\"none\"/>",
                hx,
                hy - 16.0,
                hx,
                hy,
                hx - 16.0,
                hy,
                PRIMARY_COLOR
            );
        }

        svg.push_str("</g>\n");
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
