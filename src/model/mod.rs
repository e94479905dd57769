mod edge;
mod flow;
mod node;

pub use edge::{Edge, EdgeId};
pub use flow::{ALL_STEPS_COMPLETED, Flow, FlowId, FlowSummary};
pub use node::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT, MIN_NODE_WIDTH, Node, NodeId, NodeKind, NodeStatus};
