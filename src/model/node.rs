use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// node id
pub type NodeId = String;

pub const DEFAULT_NODE_WIDTH: f64 = 220.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 100.0;
pub const MIN_NODE_WIDTH: f64 = 150.0;
pub const MIN_NODE_HEIGHT: f64 = 80.0;

/// Category of a step. Purely descriptive: no kind behaves differently.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Start,
    #[default]
    Task,
    Decision,
    Milestone,
    End,
}

/// Completion status of a step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeStatus {
    #[default]
    Pending,
    Completed,
}

impl NodeStatus {
    pub fn toggled(self) -> Self {
        match self {
            NodeStatus::Pending => NodeStatus::Completed,
            NodeStatus::Completed => NodeStatus::Pending,
        }
    }
}

/// A single step of a flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// node id, unique within its flow
    pub id: NodeId,
    /// node text
    pub label: String,
    /// node category
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// top-left x
    pub x: f64,
    /// top-left y
    pub y: f64,
    /// explicit width, `DEFAULT_NODE_WIDTH` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// explicit height, `DEFAULT_NODE_HEIGHT` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// completion status
    #[serde(default)]
    pub status: NodeStatus,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        kind: NodeKind,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            x,
            y,
            width: None,
            height: None,
            status: NodeStatus::Pending,
        }
    }

    pub fn with_size(
        mut self,
        width: f64,
        height: f64,
    ) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_status(
        mut self,
        status: NodeStatus,
    ) -> Self {
        self.status = status;
        self
    }

    pub fn width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_NODE_WIDTH)
    }

    pub fn height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_NODE_HEIGHT)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    pub fn is_completed(&self) -> bool {
        self.status == NodeStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_defaults() {
        let node = Node::new("n1", "Draft Content", NodeKind::Start, 100.0, 50.0);
        assert_eq!(node.size(), Size::new(220.0, 100.0));
        assert_eq!(node.rect(), Rect::new(100.0, 50.0, 220.0, 100.0));
        assert!(!node.is_completed());
    }

    #[test]
    fn test_node_json_shape() {
        let node: Node = serde_json::from_value(json!({
            "id": "t1",
            "label": "Research Competitors",
            "type": "milestone",
            "x": -30,
            "y": 180,
            "status": "completed"
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Milestone);
        assert_eq!(node.x, -30.0);
        assert!(node.width.is_none());
        assert!(node.is_completed());

        let value = serde_json::to_value(node.with_size(250.0, 100.0)).unwrap();
        assert_eq!(value["type"], "milestone");
        assert_eq!(value["width"], 250.0);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(NodeStatus::Pending.toggled(), NodeStatus::Completed);
        assert_eq!(NodeStatus::Pending.toggled().toggled(), NodeStatus::Pending);
        assert_eq!(NodeKind::from_str("decision").unwrap(), NodeKind::Decision);
        assert_eq!(NodeStatus::Completed.as_ref(), "completed");
    }
}
