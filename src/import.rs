//! Flat-text import: one step per line, chained in file order.

use tracing::warn;

use crate::{
    CheckflowError, Result,
    model::{Edge, Flow, Node, NodeKind},
};

pub const EMPTY_FILE_MESSAGE: &str = "The uploaded file is empty.";
pub const DEFAULT_IMPORT_TITLE: &str = "Imported Flow";

pub(crate) const IMPORT_X: f64 = 60.0;
pub(crate) const IMPORT_TOP: f64 = 50.0;
pub(crate) const IMPORT_ROW_SPACING: f64 = 130.0;
pub(crate) const IMPORT_NODE_WIDTH: f64 = 250.0;
pub(crate) const IMPORT_NODE_HEIGHT: f64 = 100.0;

/// Builds a flow from `text`.
///
/// Lines are trimmed and blank lines dropped. The first remaining line
/// becomes the `start` node, every other line a `task`, stacked in a single
/// column and linked by a linear chain of edges. The title is `file_name`
/// without its `.txt` suffix.
pub fn import_text(
    file_name: &str,
    text: &str,
) -> Result<Flow> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        warn!("import::import_text({}) rejected: empty file", file_name);
        return Err(CheckflowError::Import(EMPTY_FILE_MESSAGE.to_string()));
    }

    let mut flow = Flow::new(import_title(file_name));

    for (index, line) in lines.into_iter().enumerate() {
        let kind = if index == 0 {
            NodeKind::Start
        } else {
            NodeKind::Task
        };
        let node = Node::new(uuid::Uuid::new_v4().to_string(), line, kind, IMPORT_X, IMPORT_TOP + index as f64 * IMPORT_ROW_SPACING)
            .with_size(IMPORT_NODE_WIDTH, IMPORT_NODE_HEIGHT);

        if let Some(prev) = flow.nodes.last() {
            flow.edges.push(Edge::connect(prev.id.clone(), node.id.clone()));
        }
        flow.nodes.push(node);
    }

    Ok(flow)
}

fn import_title(file_name: &str) -> String {
    let title = file_name.replacen(".txt", "", 1);
    if title.is_empty() {
        DEFAULT_IMPORT_TITLE.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeStatus;

    #[test]
    fn test_import_three_lines() {
        let flow = import_text("checklist.txt", "Open valve\nCheck pressure\nClose valve\n").unwrap();
        assert_eq!(flow.title, "checklist");

        let kinds: Vec<NodeKind> = flow.nodes.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Start, NodeKind::Task, NodeKind::Task]);
        assert!(flow.nodes.iter().all(|n| n.status == NodeStatus::Pending));

        assert_eq!(flow.edges.len(), 2);
        assert_eq!(flow.edges[0].source, flow.nodes[0].id);
        assert_eq!(flow.edges[0].target, flow.nodes[1].id);
        assert_eq!(flow.edges[1].source, flow.nodes[1].id);
        assert_eq!(flow.edges[1].target, flow.nodes[2].id);
    }

    #[test]
    fn test_import_layout() {
        let flow = import_text("steps.txt", "a\nb\nc").unwrap();
        let ys: Vec<f64> = flow.nodes.iter().map(|n| n.y).collect();
        assert_eq!(ys, vec![50.0, 180.0, 310.0]);
        assert!(flow.nodes.iter().all(|n| n.x == 60.0 && n.width == Some(250.0) && n.height == Some(100.0)));
    }

    #[test]
    fn test_import_trims_and_skips_blank_lines() {
        let flow = import_text("notes", "  first  \r\n\r\n\t\nsecond\n").unwrap();
        let labels: Vec<&str> = flow.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(flow.title, "notes");
    }

    #[test]
    fn test_import_single_line() {
        let flow = import_text("one.txt", "only step").unwrap();
        assert_eq!(flow.nodes.len(), 1);
        assert!(flow.edges.is_empty());
    }

    #[test]
    fn test_import_empty_rejected() {
        for text in ["", "\n\n", "   \n\t"] {
            assert_eq!(import_text("empty.txt", text), Err(CheckflowError::Import(EMPTY_FILE_MESSAGE.to_string())));
        }
    }

    #[test]
    fn test_import_default_title() {
        let flow = import_text(".txt", "step").unwrap();
        assert_eq!(flow.title, DEFAULT_IMPORT_TITLE);
    }
}
