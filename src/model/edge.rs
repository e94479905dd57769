use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Unique identifier for an edge within a flow.
pub type EdgeId = String;

/// Directed link `source -> target` between two nodes of the same flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Creates an edge with a freshly generated id.
    pub fn connect(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), source, target)
    }

    /// Whether `nid` is the source or the target of this edge.
    pub fn touches(
        &self,
        nid: &str,
    ) -> bool {
        self.source == nid || self.target == nid
    }
}
