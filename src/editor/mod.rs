//! Pointer-driven editing of a draft flow.
//!
//! An [`Editor`] owns a private draft of one flow. Pointer events and
//! toolbar actions mutate the draft; nothing reaches the committed copy until
//! the draft is saved through the workspace. Dropping the editor discards
//! every unsaved edit.
//!
//! The draft lives behind an `Arc`: [`Editor::snapshot`] hands out an
//! immutable view without copying, and the next mutation copies the flow
//! only if such a snapshot is still held.

mod state;

use std::sync::Arc;

use tracing::debug;

pub use state::{ConnectState, Gesture, Hit, PROMPT_SELECT_SOURCE, PROMPT_SELECT_TARGET, SurfaceMode, Viewport};

use crate::{
    CheckflowError, Result,
    geometry::Point,
    model::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, Edge, Flow, MIN_NODE_HEIGHT, MIN_NODE_WIDTH, Node, NodeId, NodeKind, NodeStatus},
    router::RouteMode,
};

pub const NEW_NODE_LABEL: &str = "New Step";
/// Vertical distance between the last node and a node appended below it.
const NEW_NODE_SPACING: f64 = 140.0;
const NEW_NODE_FALLBACK: Point = Point::new(100.0, 100.0);

/// Editing surface over a draft copy of a flow.
#[derive(Debug, Clone)]
pub struct Editor {
    draft: Arc<Flow>,
    mode: SurfaceMode,
    selected: Option<NodeId>,
    gesture: Gesture,
    connect: ConnectState,
}

impl Editor {
    /// Opens `flow` in use mode on a private copy.
    pub fn new(flow: &Flow) -> Self {
        Self {
            draft: Arc::new(flow.clone()),
            mode: SurfaceMode::Use,
            selected: None,
            gesture: Gesture::Idle,
            connect: ConnectState::Off,
        }
    }

    pub fn flow(&self) -> &Flow {
        &self.draft
    }

    /// Immutable view of the draft as it is now.
    pub fn snapshot(&self) -> Arc<Flow> {
        self.draft.clone()
    }

    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    pub fn route_mode(&self) -> RouteMode {
        self.mode.route_mode()
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SurfaceMode::Edit
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn connect(&self) -> &ConnectState {
        &self.connect
    }

    pub fn connect_prompt(&self) -> Option<&'static str> {
        if !self.is_editing() {
            return None;
        }
        self.connect.prompt()
    }

    /// The resize affordance is only offered on the selected node.
    pub fn resize_handle_visible(
        &self,
        nid: &str,
    ) -> bool {
        self.is_editing() && self.selected.as_deref() == Some(nid)
    }

    pub fn can_delete(&self) -> bool {
        self.is_editing() && self.selected.is_some()
    }

    pub fn enter_edit(&mut self) {
        debug!("editor::enter_edit({})", self.draft.id);
        self.mode = SurfaceMode::Edit;
    }

    fn flow_mut(&mut self) -> &mut Flow {
        Arc::make_mut(&mut self.draft)
    }

    fn require_edit(
        &self,
        action: &str,
    ) -> Result<()> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(CheckflowError::Editor(format!("{} requires edit mode", action)))
        }
    }

    /// The draft as it would be committed. Leaves the editor untouched.
    pub(crate) fn pending_commit(&self) -> Flow {
        let mut flow = Flow::clone(&self.draft);
        flow.touch();
        flow
    }

    /// Adopts the committed `flow`, leaves edit mode and clears all
    /// transient state.
    pub(crate) fn committed(
        &mut self,
        flow: Flow,
    ) {
        self.draft = Arc::new(flow);
        self.mode = SurfaceMode::Use;
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.connect = ConnectState::Off;
    }

    // ==================== pointer events ====================

    /// Handles a pointer press. Ignored outside edit mode.
    pub fn pointer_down(
        &mut self,
        hit: Hit,
        at: Point,
    ) {
        if !self.is_editing() {
            return;
        }

        match hit {
            Hit::Canvas => {
                if !self.connect.is_active() && self.gesture.is_idle() {
                    self.selected = None;
                }
            }
            Hit::Node(nid) => self.press_node(nid, at),
            Hit::ResizeHandle(nid) => {
                if self.connect.is_active() || !self.resize_handle_visible(&nid) {
                    self.press_node(nid, at);
                    return;
                }
                let Some(origin) = self.draft.find_node(&nid).map(|n| n.size()) else {
                    return;
                };
                debug!("editor::resize_start({})", nid);
                self.gesture = Gesture::Resizing {
                    node: nid,
                    origin,
                    pointer: at,
                };
            }
        }
    }

    fn press_node(
        &mut self,
        nid: NodeId,
        at: Point,
    ) {
        let Some(origin) = self.draft.find_node(&nid).map(|n| n.position()) else {
            debug!("editor::press_node({}) ignored, node not found", nid);
            return;
        };

        if self.connect.is_active() {
            self.connect_click(nid);
            return;
        }

        debug!("editor::drag_start({})", nid);
        self.selected = Some(nid.clone());
        self.gesture = Gesture::Dragging {
            node: nid,
            origin,
            pointer: at,
        };
    }

    fn connect_click(
        &mut self,
        nid: NodeId,
    ) {
        match std::mem::take(&mut self.connect) {
            ConnectState::AwaitingTarget(source) if source != nid && self.draft.contains_node(&source) => {
                let edge = Edge::connect(source, nid);
                debug!("editor::connect({} -> {}, id: {})", edge.source, edge.target, edge.id);
                let flow = self.flow_mut();
                flow.edges.push(edge);
                flow.prune_dangling_edges();
                self.connect = ConnectState::AwaitingSource;
            }
            _ => {
                self.connect = ConnectState::AwaitingTarget(nid);
            }
        }
    }

    /// Applies pointer movement to the active gesture. Returns whether the
    /// draft changed.
    pub fn pointer_move(
        &mut self,
        at: Point,
    ) -> bool {
        if !self.is_editing() {
            return false;
        }

        match self.gesture.clone() {
            Gesture::Idle => false,
            Gesture::Dragging {
                node,
                origin,
                pointer,
            } => {
                let pos = origin + (at - pointer);
                match self.flow_mut().find_node_mut(&node) {
                    Some(n) => {
                        n.x = pos.x;
                        n.y = pos.y;
                        true
                    }
                    None => false,
                }
            }
            Gesture::Resizing {
                node,
                origin,
                pointer,
            } => {
                let delta = at - pointer;
                let width = (origin.width + delta.x).max(MIN_NODE_WIDTH);
                let height = (origin.height + delta.y).max(MIN_NODE_HEIGHT);
                match self.flow_mut().find_node_mut(&node) {
                    Some(n) => {
                        n.width = Some(width);
                        n.height = Some(height);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Ends the active gesture.
    pub fn pointer_up(&mut self) {
        if !self.gesture.is_idle() {
            debug!("editor::gesture_end({:?})", self.gesture.node());
        }
        self.gesture = Gesture::Idle;
    }

    /// The pointer left the surface: same as releasing it.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    // ==================== toolbar actions ====================

    /// Turns connect mode on (clearing the selection) or off.
    pub fn toggle_connect(&mut self) -> Result<()> {
        self.require_edit("connect")?;
        self.gesture = Gesture::Idle;
        if self.connect.is_active() {
            self.connect = ConnectState::Off;
        } else {
            self.connect = ConnectState::AwaitingSource;
            self.selected = None;
        }
        debug!("editor::toggle_connect({:?})", self.connect);
        Ok(())
    }

    /// Removes the selected node and every edge incident to it.
    pub fn delete_selected(&mut self) -> Result<Option<Node>> {
        self.require_edit("delete")?;
        let Some(nid) = self.selected.take() else {
            return Ok(None);
        };
        if self.gesture.node() == Some(&nid) {
            self.gesture = Gesture::Idle;
        }

        let flow = self.flow_mut();
        let removed = flow.nodes.iter().position(|n| n.id == nid).map(|idx| flow.nodes.remove(idx));
        flow.edges.retain(|e| !e.touches(&nid));
        flow.prune_dangling_edges();
        debug!("editor::delete({})", nid);

        Ok(removed)
    }

    /// Removes a single edge.
    pub fn remove_edge(
        &mut self,
        id: &str,
    ) -> Result<Option<Edge>> {
        self.require_edit("remove edge")?;
        let flow = self.flow_mut();
        let removed = flow.edges.iter().position(|e| e.id == id).map(|idx| flow.edges.remove(idx));
        flow.prune_dangling_edges();
        Ok(removed)
    }

    /// Appends a "New Step" task node and selects it.
    ///
    /// The node is centred in `viewport` when given, otherwise placed below
    /// the last node, otherwise at a fixed fallback position.
    pub fn add_node(
        &mut self,
        viewport: Option<Viewport>,
    ) -> Result<NodeId> {
        self.require_edit("add node")?;

        let at = match (viewport, self.draft.nodes.last()) {
            (Some(v), _) => Point::new(v.width / 2.0 - DEFAULT_NODE_WIDTH / 2.0, v.scroll_top + v.height / 2.0 - DEFAULT_NODE_HEIGHT / 2.0),
            (None, Some(last)) => Point::new(last.x, last.y + NEW_NODE_SPACING),
            (None, None) => NEW_NODE_FALLBACK,
        };

        let node = Node::new(uuid::Uuid::new_v4().to_string(), NEW_NODE_LABEL, NodeKind::Task, at.x, at.y)
            .with_size(DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT);
        let nid = node.id.clone();
        self.flow_mut().nodes.push(node);
        self.selected = Some(nid.clone());
        debug!("editor::add_node({})", nid);

        Ok(nid)
    }

    pub fn set_label(
        &mut self,
        nid: &str,
        label: impl Into<String>,
    ) -> Result<()> {
        self.require_edit("label edit")?;
        let node = self.flow_mut().find_node_mut(nid).ok_or_else(|| CheckflowError::Node(format!("node {} not found", nid)))?;
        node.label = label.into();
        Ok(())
    }

    pub fn set_title(
        &mut self,
        title: impl Into<String>,
    ) -> Result<()> {
        self.require_edit("title edit")?;
        self.flow_mut().title = title.into();
        Ok(())
    }

    /// Flips a node between pending and completed. Use mode only; the
    /// workspace commits the result straight away.
    pub fn toggle_status(
        &mut self,
        nid: &str,
    ) -> Result<NodeStatus> {
        if self.is_editing() {
            return Err(CheckflowError::Editor("status toggle is not available in edit mode".to_string()));
        }
        let node = self.flow_mut().find_node_mut(nid).ok_or_else(|| CheckflowError::Node(format!("node {} not found", nid)))?;
        node.status = node.status.toggled();
        debug!("editor::toggle_status({}, {})", nid, node.status.as_ref());
        Ok(node.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Flow {
        let mut flow = Flow::with_id("f1", "Chain");
        flow.nodes = vec![
            Node::new("a", "A", NodeKind::Start, 0.0, 0.0),
            Node::new("b", "B", NodeKind::Task, 0.0, 150.0),
            Node::new("c", "C", NodeKind::Task, 300.0, 150.0).with_size(250.0, 100.0),
        ];
        flow.edges = vec![Edge::new("ab", "a", "b"), Edge::new("ac", "a", "c"), Edge::new("bc", "b", "c")];
        flow
    }

    fn editing() -> Editor {
        let mut editor = Editor::new(&chain());
        editor.enter_edit();
        editor
    }

    // ==================== drag tests ====================

    #[test]
    fn test_drag_applies_screen_delta() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("b".into()), Point::new(500.0, 500.0));
        assert_eq!(editor.selected().map(String::as_str), Some("b"));

        assert!(editor.pointer_move(Point::new(510.0, 480.0)));
        assert_eq!(editor.flow().find_node("b").unwrap().position(), Point::new(10.0, 130.0));

        // deltas are measured from the press, not the previous move
        assert!(editor.pointer_move(Point::new(501.0, 501.0)));
        assert_eq!(editor.flow().find_node("b").unwrap().position(), Point::new(1.0, 151.0));

        editor.pointer_up();
        assert!(editor.gesture().is_idle());
        assert!(!editor.pointer_move(Point::new(900.0, 900.0)));
        assert_eq!(editor.flow().find_node("b").unwrap().position(), Point::new(1.0, 151.0));
    }

    #[test]
    fn test_pointer_leave_ends_gesture() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        editor.pointer_leave();
        assert_eq!(editor.gesture(), &Gesture::Idle);
        assert_eq!(editor.selected().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_use_mode_ignores_pointer() {
        let original = chain();
        let mut editor = Editor::new(&original);
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        assert!(editor.selected().is_none());
        assert!(!editor.pointer_move(Point::new(50.0, 50.0)));
        assert_eq!(editor.flow(), &original);
    }

    // ==================== resize tests ====================

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("c".into()), Point::new(0.0, 0.0));
        editor.pointer_up();

        editor.pointer_down(Hit::ResizeHandle("c".into()), Point::new(100.0, 100.0));
        assert!(matches!(editor.gesture(), Gesture::Resizing { .. }));

        editor.pointer_move(Point::new(130.0, 125.0));
        let node = editor.flow().find_node("c").unwrap();
        assert_eq!((node.width(), node.height()), (280.0, 125.0));

        for (dx, dy) in [(-1000.0, -1000.0), (-99.0, -19.0), (-101.0, -21.0), (-5000.0, 40.0)] {
            editor.pointer_move(Point::new(100.0 + dx, 100.0 + dy));
            let node = editor.flow().find_node("c").unwrap();
            assert!(node.width() >= MIN_NODE_WIDTH, "width {} after ({}, {})", node.width(), dx, dy);
            assert!(node.height() >= MIN_NODE_HEIGHT, "height {} after ({}, {})", node.height(), dx, dy);
        }
        let node = editor.flow().find_node("c").unwrap();
        assert_eq!((node.width(), node.height()), (150.0, 140.0));
        // resizing never moves the node
        assert_eq!(node.position(), Point::new(300.0, 150.0));
    }

    #[test]
    fn test_resize_uses_default_size() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        editor.pointer_up();
        editor.pointer_down(Hit::ResizeHandle("a".into()), Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(10.0, 10.0));
        let node = editor.flow().find_node("a").unwrap();
        assert_eq!((node.width, node.height), (Some(230.0), Some(110.0)));
    }

    #[test]
    fn test_resize_handle_requires_selection() {
        let mut editor = editing();
        assert!(!editor.resize_handle_visible("b"));
        editor.pointer_down(Hit::ResizeHandle("b".into()), Point::new(0.0, 0.0));
        // treated as a body press: selects and drags
        assert!(matches!(editor.gesture(), Gesture::Dragging { .. }));
        assert!(editor.resize_handle_visible("b"));
    }

    // ==================== connect tests ====================

    #[test]
    fn test_connect_creates_edges_in_click_order() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        editor.toggle_connect().unwrap();
        assert!(editor.selected().is_none());
        assert_eq!(editor.connect_prompt(), Some(PROMPT_SELECT_SOURCE));

        editor.pointer_down(Hit::Node("c".into()), Point::new(0.0, 0.0));
        assert_eq!(editor.connect(), &ConnectState::AwaitingTarget("c".into()));
        assert_eq!(editor.connect_prompt(), Some(PROMPT_SELECT_TARGET));

        let before = editor.flow().edges.len();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        let flow = editor.flow();
        assert_eq!(flow.edges.len(), before + 1);
        let edge = flow.edges.last().unwrap();
        assert_eq!((edge.source.as_str(), edge.target.as_str()), ("c", "a"));
        assert!(!edge.id.is_empty());

        // still connecting, waiting for the next source
        assert_eq!(editor.connect(), &ConnectState::AwaitingSource);
        assert!(editor.gesture().is_idle());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn test_connect_reselects_same_source() {
        let mut editor = editing();
        editor.toggle_connect().unwrap();
        editor.pointer_down(Hit::Node("b".into()), Point::new(0.0, 0.0));
        editor.pointer_down(Hit::Node("b".into()), Point::new(0.0, 0.0));
        assert_eq!(editor.connect(), &ConnectState::AwaitingTarget("b".into()));
        assert_eq!(editor.flow().edges.len(), 3);
    }

    #[test]
    fn test_connect_session_creates_many_edges() {
        let mut editor = editing();
        editor.toggle_connect().unwrap();
        for (s, t) in [("c", "b"), ("b", "a"), ("c", "b")] {
            editor.pointer_down(Hit::Node(s.into()), Point::new(0.0, 0.0));
            editor.pointer_down(Hit::Node(t.into()), Point::new(0.0, 0.0));
        }
        let flow = editor.flow();
        assert_eq!(flow.edges.len(), 6);
        // duplicates are allowed but ids stay unique
        assert_ne!(flow.edges[3].id, flow.edges[5].id);

        editor.toggle_connect().unwrap();
        assert_eq!(editor.connect(), &ConnectState::Off);
        assert!(editor.connect_prompt().is_none());
    }

    #[test]
    fn test_connect_toggle_off_while_awaiting_target() {
        let mut editor = editing();
        editor.toggle_connect().unwrap();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        assert_eq!(editor.connect(), &ConnectState::AwaitingTarget("a".into()));

        editor.toggle_connect().unwrap();
        assert_eq!(editor.connect(), &ConnectState::Off);
        assert_eq!(editor.flow().edges, chain().edges);

        // clicks after leaving connect mode select and drag again
        editor.pointer_down(Hit::Node("b".into()), Point::new(0.0, 0.0));
        assert_eq!(editor.flow().edges.len(), 3);
        assert_eq!(editor.selected().map(String::as_str), Some("b"));
        assert!(matches!(editor.gesture(), Gesture::Dragging { .. }));
    }

    #[test]
    fn test_connect_suspends_drag_and_canvas_clear() {
        let mut editor = editing();
        editor.toggle_connect().unwrap();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        assert!(editor.gesture().is_idle());
        assert!(!editor.pointer_move(Point::new(40.0, 40.0)));

        editor.pointer_down(Hit::Canvas, Point::new(0.0, 0.0));
        assert_eq!(editor.connect(), &ConnectState::AwaitingTarget("a".into()));
    }

    // ==================== selection / delete tests ====================

    #[test]
    fn test_canvas_click_clears_selection() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        editor.pointer_up();
        assert!(editor.can_delete());
        editor.pointer_down(Hit::Canvas, Point::new(0.0, 0.0));
        assert!(editor.selected().is_none());
        assert!(!editor.can_delete());
    }

    #[test]
    fn test_delete_cascades_to_incident_edges() {
        let mut editor = editing();
        editor.pointer_down(Hit::Node("b".into()), Point::new(0.0, 0.0));
        editor.pointer_up();

        let removed = editor.delete_selected().unwrap().unwrap();
        assert_eq!(removed.id, "b");

        let flow = editor.flow();
        assert!(flow.find_node("b").is_none());
        assert!(flow.edges.iter().all(|e| !e.touches("b")));
        assert_eq!(flow.edges, vec![Edge::new("ac", "a", "c")]);
        assert!(editor.selected().is_none());
        assert_eq!(editor.delete_selected().unwrap(), None);
    }

    #[test]
    fn test_remove_edge() {
        let mut editor = editing();
        assert_eq!(editor.remove_edge("ac").unwrap().unwrap().id, "ac");
        assert_eq!(editor.remove_edge("ac").unwrap(), None);
        assert_eq!(editor.flow().edges.len(), 2);
    }

    #[test]
    fn test_toolbar_requires_edit_mode() {
        let mut editor = Editor::new(&chain());
        assert!(matches!(editor.toggle_connect(), Err(CheckflowError::Editor(_))));
        assert!(matches!(editor.delete_selected(), Err(CheckflowError::Editor(_))));
        assert!(matches!(editor.add_node(None), Err(CheckflowError::Editor(_))));
        assert!(matches!(editor.set_label("a", "x"), Err(CheckflowError::Editor(_))));
    }

    // ==================== add / label tests ====================

    #[test]
    fn test_add_node_placement() {
        let mut editor = editing();
        let below = editor.add_node(None).unwrap();
        let node = editor.flow().find_node(&below).unwrap().clone();
        assert_eq!(node.position(), Point::new(300.0, 290.0));
        assert_eq!(node.label, NEW_NODE_LABEL);
        assert_eq!(node.kind, NodeKind::Task);
        assert_eq!(editor.selected(), Some(&below));

        let centred = editor
            .add_node(Some(Viewport {
                scroll_top: 200.0,
                width: 400.0,
                height: 600.0,
            }))
            .unwrap();
        assert_eq!(editor.flow().find_node(&centred).unwrap().position(), Point::new(90.0, 450.0));

        let mut empty = Editor::new(&Flow::new("empty"));
        empty.enter_edit();
        let first = empty.add_node(None).unwrap();
        assert_eq!(empty.flow().find_node(&first).unwrap().position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_set_label_and_title() {
        let mut editor = editing();
        editor.set_label("a", "Kick-off").unwrap();
        editor.set_title("Renamed").unwrap();
        assert_eq!(editor.flow().find_node("a").unwrap().label, "Kick-off");
        assert_eq!(editor.flow().title, "Renamed");
        assert!(matches!(editor.set_label("zz", "x"), Err(CheckflowError::Node(_))));
    }

    // ==================== status / draft tests ====================

    #[test]
    fn test_toggle_status_twice_restores() {
        let original = chain();
        let mut editor = Editor::new(&original);
        assert_eq!(editor.toggle_status("b").unwrap(), NodeStatus::Completed);
        assert_eq!(editor.flow().find_node("a").unwrap().status, NodeStatus::Pending);
        assert_eq!(editor.flow().edges, original.edges);
        assert_eq!(editor.toggle_status("b").unwrap(), NodeStatus::Pending);
        assert_eq!(editor.flow(), &original);

        editor.enter_edit();
        assert!(matches!(editor.toggle_status("b"), Err(CheckflowError::Editor(_))));
    }

    #[test]
    fn test_snapshot_is_copy_on_write() {
        let mut editor = editing();
        let before = editor.snapshot();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(25.0, 0.0));

        assert_eq!(before.find_node("a").unwrap().x, 0.0);
        assert_eq!(editor.flow().find_node("a").unwrap().x, 25.0);
        assert!(!Arc::ptr_eq(&before, &editor.snapshot()));
    }

    #[test]
    fn test_commit_resets_surface() {
        let mut editor = editing();
        editor.toggle_connect().unwrap();
        editor.pointer_down(Hit::Node("a".into()), Point::new(0.0, 0.0));
        let flow = editor.pending_commit();
        assert_eq!(flow.id, "f1");
        assert!(editor.is_editing());

        editor.committed(flow.clone());
        assert_eq!(editor.flow(), &flow);
        assert_eq!(editor.mode(), SurfaceMode::Use);
        assert_eq!(editor.connect(), &ConnectState::Off);
        assert_eq!(editor.route_mode(), RouteMode::Orthogonal);
    }
}
