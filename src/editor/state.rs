//! State carried by the editing surface between pointer events.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Size},
    model::NodeId,
    router::RouteMode,
};

pub const PROMPT_SELECT_SOURCE: &str = "Select the starting node.";
pub const PROMPT_SELECT_TARGET: &str = "Select the next node to connect to.";

/// Whether the surface is being worked through or edited.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SurfaceMode {
    /// Clicking a node toggles its status.
    #[default]
    Use,
    /// Nodes can be dragged, resized, connected and deleted.
    Edit,
}

impl SurfaceMode {
    pub fn route_mode(self) -> RouteMode {
        match self {
            SurfaceMode::Use => RouteMode::Orthogonal,
            SurfaceMode::Edit => RouteMode::Curved,
        }
    }
}

/// The pointer gesture in progress.
///
/// Lives from pointer-down to pointer-up; dragging and resizing never
/// overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        node: NodeId,
        /// node position at pointer-down
        origin: Point,
        /// pointer position at pointer-down
        pointer: Point,
    },
    Resizing {
        node: NodeId,
        /// node size at pointer-down
        origin: Size,
        /// pointer position at pointer-down
        pointer: Point,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging {
                node,
                ..
            }
            | Gesture::Resizing {
                node,
                ..
            } => Some(node),
        }
    }
}

/// Connect mode. Outlives gestures: stays on until toggled off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectState {
    #[default]
    Off,
    AwaitingSource,
    AwaitingTarget(NodeId),
}

impl ConnectState {
    pub fn is_active(&self) -> bool {
        !matches!(self, ConnectState::Off)
    }

    pub fn source(&self) -> Option<&NodeId> {
        match self {
            ConnectState::AwaitingTarget(source) => Some(source),
            _ => None,
        }
    }

    /// Guidance shown while connecting.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            ConnectState::Off => None,
            ConnectState::AwaitingSource => Some(PROMPT_SELECT_SOURCE),
            ConnectState::AwaitingTarget(_) => Some(PROMPT_SELECT_TARGET),
        }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Empty canvas.
    Canvas,
    /// A node body.
    Node(NodeId),
    /// The resize affordance of a node.
    ResizeHandle(NodeId),
}

/// Visible part of the canvas, used to place new nodes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
}
