use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    CheckflowError, Result,
    model::{Edge, Node},
    utils,
};

/// flow id
pub type FlowId = String;

/// Text reported by [`Flow::next_task`] once nothing is pending.
pub const ALL_STEPS_COMPLETED: &str = "All steps completed";

/// A named graph of steps.
///
/// Node order carries no meaning beyond default layout. Edges may reference
/// node ids that no longer exist; such edges are skipped when routing and
/// dropped by [`Flow::prune_dangling_edges`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: FlowId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "utils::time::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// List-view digest of a flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowSummary {
    pub id: FlowId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    /// completion percentage in [0, 100]
    pub progress: u32,
    pub completed: usize,
    pub total: usize,
    pub next_task: String,
}

impl Flow {
    /// Creates an empty flow with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), title)
    }

    pub fn with_id(
        id: impl Into<FlowId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            updated_at: utils::time::now(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str::<Flow>(s).map_err(|e| CheckflowError::Flow(format!("{}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// get node by id
    pub fn find_node(
        &self,
        id: &str,
    ) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub(crate) fn find_node_mut(
        &mut self,
        id: &str,
    ) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains_node(
        &self,
        id: &str,
    ) -> bool {
        self.find_node(id).is_some()
    }

    /// Edges naming `id` as source or target.
    pub fn incident_edges(
        &self,
        id: &str,
    ) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(id)).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_completed()).count()
    }

    /// `round(100 * completed / total)`, 0 for an empty flow.
    pub fn progress(&self) -> u32 {
        if self.nodes.is_empty() {
            return 0;
        }
        (self.completed_count() as f64 / self.nodes.len() as f64 * 100.0).round() as u32
    }

    /// Label of the first pending node in node order.
    pub fn next_task(&self) -> &str {
        self.nodes.iter().find(|n| !n.is_completed()).map(|n| n.label.as_str()).unwrap_or(ALL_STEPS_COMPLETED)
    }

    pub fn summary(&self) -> FlowSummary {
        FlowSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            updated_at: self.updated_at,
            progress: self.progress(),
            completed: self.completed_count(),
            total: self.nodes.len(),
            next_task: self.next_task().to_string(),
        }
    }

    /// Removes every edge whose source or target is missing.
    /// Returns the number of edges removed.
    pub fn prune_dangling_edges(&mut self) -> usize {
        let before = self.edges.len();
        let nodes = &self.nodes;
        self.edges.retain(|e| nodes.iter().any(|n| n.id == e.source) && nodes.iter().any(|n| n.id == e.target));
        before - self.edges.len()
    }

    /// Marks every node pending.
    pub fn reset_status(&mut self) {
        for node in self.nodes.iter_mut() {
            node.status = Default::default();
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = utils::time::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, NodeStatus};

    fn newsletter() -> Flow {
        let mut flow = Flow::with_id("2", "Weekly Newsletter");
        flow.nodes = vec![
            Node::new("n1", "Draft Content", NodeKind::Start, 100.0, 50.0).with_status(NodeStatus::Completed),
            Node::new("n2", "Proofread", NodeKind::Task, 100.0, 200.0),
            Node::new("n3", "Schedule Send", NodeKind::Task, 100.0, 350.0),
        ];
        flow.edges = vec![Edge::new("e1", "n1", "n2"), Edge::new("e2", "n2", "n3")];
        flow
    }

    // ==================== query tests ====================

    #[test]
    fn test_find_and_incident_edges() {
        let flow = newsletter();
        assert_eq!(flow.find_node("n2").unwrap().label, "Proofread");
        assert!(flow.find_node("missing").is_none());

        let ids: Vec<&str> = flow.incident_edges("n2").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
        assert_eq!(flow.incident_edges("n3").len(), 1);
    }

    #[test]
    fn test_progress() {
        let empty = Flow::new("empty");
        assert_eq!(empty.progress(), 0);
        assert_eq!(empty.next_task(), ALL_STEPS_COMPLETED);

        let mut flow = newsletter();
        assert_eq!(flow.completed_count(), 1);
        assert_eq!(flow.progress(), 33);
        assert_eq!(flow.next_task(), "Proofread");

        flow.nodes[1].status = NodeStatus::Completed;
        assert_eq!(flow.progress(), 67);

        flow.nodes[2].status = NodeStatus::Completed;
        assert_eq!(flow.progress(), 100);
        assert_eq!(flow.next_task(), ALL_STEPS_COMPLETED);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        let mut flow = Flow::new("half");
        for i in 0..8 {
            flow.nodes.push(Node::new(format!("n{}", i), "step", NodeKind::Task, 0.0, 0.0));
        }
        // 1/8 = 12.5%
        flow.nodes[0].status = NodeStatus::Completed;
        assert_eq!(flow.progress(), 13);
    }

    #[test]
    fn test_summary() {
        let summary = newsletter().summary();
        assert_eq!(summary.id, "2");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.progress, 33);
        assert_eq!(summary.next_task, "Proofread");
    }

    // ==================== mutation tests ====================

    #[test]
    fn test_prune_dangling_edges() {
        let mut flow = newsletter();
        flow.edges.push(Edge::new("e3", "n3", "ghost"));
        flow.edges.push(Edge::new("e4", "ghost", "n1"));
        assert_eq!(flow.prune_dangling_edges(), 2);
        assert_eq!(flow.edges.len(), 2);
        assert_eq!(flow.prune_dangling_edges(), 0);
    }

    #[test]
    fn test_reset_status() {
        let mut flow = newsletter();
        flow.reset_status();
        assert_eq!(flow.completed_count(), 0);
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let flow = Flow::from_json(
            r#"{
                "id": "1",
                "title": "Website Redesign Flow",
                "description": "Main workflow",
                "updatedAt": "2024-05-01T10:00:00Z",
                "nodes": [{ "id": "start", "label": "Kick-off", "type": "start", "x": 80, "y": 40, "status": "completed" }],
                "edges": [{ "id": "e1", "source": "start", "target": "t1" }]
            }"#,
        )
        .unwrap();
        assert_eq!(flow.description.as_deref(), Some("Main workflow"));
        assert_eq!(flow.nodes[0].kind, NodeKind::Start);
        assert_eq!(flow.edges[0].target, "t1");

        let json: serde_json::Value = serde_json::from_str(&flow.to_json().unwrap()).unwrap();
        assert_eq!(json["updatedAt"], "2024-05-01T10:00:00Z");
        assert!(Flow::from_json("{").is_err());
    }
}
