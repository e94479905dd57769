//! Workspace - the main entry point for Checkflow.
//!
//! The workspace owns the committed flows and coordinates everything that
//! writes to them:
//! - Opening a flow in an [`Editor`] and saving the draft back
//! - Immediate commits of status toggles
//! - Flat-text import and generative synthesis of new flows
//! - Templates and renames

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{info, warn};

use crate::{
    CheckflowError, Config, Result,
    editor::Editor,
    generate::FlowGenerator,
    import,
    model::{Flow, FlowSummary, NodeStatus},
    store::Store,
};

/// Marks a generation as in flight for as long as it is held.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CheckflowError::Generate("a flow is already being generated".to_string()))?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The application facade.
///
/// # Example
///
/// ```rust,ignore
/// let workspace = WorkspaceBuilder::new().samples(true).build()?;
///
/// let mut editor = workspace.open("2")?;
/// workspace.toggle_status(&mut editor, "n2")?;
///
/// editor.enter_edit();
/// editor.add_node(None)?;
/// workspace.save(&mut editor)?;
/// ```
pub struct Workspace {
    config: Config,
    /// Committed flows and templates.
    store: Store,
    /// Generative collaborator.
    generator: Arc<dyn FlowGenerator>,
    /// Set while a generation request is pending.
    generating: AtomicBool,
}

impl Workspace {
    pub(crate) fn new(
        config: Config,
        store: Store,
        generator: Arc<dyn FlowGenerator>,
    ) -> Self {
        Self {
            config,
            store,
            generator,
            generating: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// All committed flows, newest first.
    pub fn flows(&self) -> Result<Vec<Flow>> {
        self.store.flows().list()
    }

    pub fn summaries(&self) -> Result<Vec<FlowSummary>> {
        Ok(self.flows()?.iter().map(Flow::summary).collect())
    }

    pub fn flow(
        &self,
        id: &str,
    ) -> Result<Flow> {
        self.store.flows().find(id)
    }

    pub fn templates(&self) -> Result<Vec<Flow>> {
        self.store.templates().list()
    }

    // ==================== editing ====================

    /// Opens a committed flow on a private draft.
    pub fn open(
        &self,
        id: &str,
    ) -> Result<Editor> {
        let flow = self.store.flows().find(id).map_err(|_| CheckflowError::Flow(format!("flow {} not found", id)))?;
        Ok(Editor::new(&flow))
    }

    /// Commits the editor's draft and returns the editor to use mode.
    pub fn save(
        &self,
        editor: &mut Editor,
    ) -> Result<Flow> {
        let flow = editor.pending_commit();
        self.store.commit(&flow)?;
        editor.committed(flow.clone());
        info!("workspace::save({}, nodes: {}, edges: {})", flow.id, flow.nodes.len(), flow.edges.len());
        Ok(flow)
    }

    /// Flips a node's status and commits it at once, without an explicit
    /// save.
    ///
    /// Only that node's status is written: the rest of the committed flow is
    /// left as the store has it, whatever the draft holds.
    pub fn toggle_status(
        &self,
        editor: &mut Editor,
        nid: &str,
    ) -> Result<NodeStatus> {
        let status = editor.toggle_status(nid)?;
        let fid = editor.flow().id.clone();
        if let Err(e) = self.commit_status(&fid, nid, status) {
            // keep the draft in step with the store
            editor.toggle_status(nid)?;
            return Err(e);
        }
        Ok(status)
    }

    fn commit_status(
        &self,
        fid: &str,
        nid: &str,
        status: NodeStatus,
    ) -> Result<()> {
        let flows = self.store.flows();
        let mut flow = flows.find(fid)?;
        let node = flow.find_node_mut(nid).ok_or_else(|| CheckflowError::Node(format!("node {} not found in flow {}", nid, fid)))?;
        node.status = status;
        flows.update(&flow)?;
        Ok(())
    }

    pub fn rename_flow(
        &self,
        id: &str,
        title: impl Into<String>,
    ) -> Result<Flow> {
        let flows = self.store.flows();
        let mut flow = flows.find(id)?;
        flow.title = title.into();
        flows.update(&flow)?;
        Ok(flow)
    }

    // ==================== new flows ====================

    /// Imports a flat-text checklist as a new flow.
    pub fn import_text(
        &self,
        file_name: &str,
        text: &str,
    ) -> Result<Flow> {
        let flow = import::import_text(file_name, text)?;
        self.store.flows().create(&flow)?;
        info!("workspace::import_text({}, steps: {})", flow.id, flow.nodes.len());
        Ok(flow)
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// Asks the generator for a flow titled after `prompt`.
    ///
    /// Only one request may be pending; a second call fails immediately.
    /// Failures are not retried and leave the store untouched.
    pub async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Flow> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(CheckflowError::Generate("prompt is empty".to_string()));
        }

        let _in_flight = InFlight::acquire(&self.generating)?;
        let graph = self.generator.generate(prompt).await.inspect_err(|e| warn!("workspace::generate failed: {}", e))?;

        let flow = graph.into_flow(prompt);
        self.store.flows().create(&flow)?;
        info!("workspace::generate({}, nodes: {}, edges: {})", flow.id, flow.nodes.len(), flow.edges.len());
        Ok(flow)
    }

    // ==================== templates ====================

    /// Stores a copy of `flow` as a template with every step pending.
    pub fn save_as_template(
        &self,
        flow: &Flow,
    ) -> Result<Flow> {
        let mut template = Flow::new(format!("{} (Template)", flow.title));
        template.description = flow.description.clone();
        template.nodes = flow.nodes.clone();
        template.edges = flow.edges.clone();
        template.reset_status();

        self.store.templates().create(&template)?;
        info!("workspace::save_as_template({} -> {})", flow.id, template.id);
        Ok(template)
    }

    /// Starts a new flow from a template.
    pub fn create_from_template(
        &self,
        template_id: &str,
    ) -> Result<Flow> {
        let template = self.store.templates().find(template_id)?;

        let mut flow = Flow::new(format!("{} (Copy)", template.title));
        flow.description = template.description;
        flow.nodes = template.nodes;
        flow.edges = template.edges;
        flow.reset_status();

        self.store.flows().create(&flow)?;
        info!("workspace::create_from_template({} -> {})", template_id, flow.id);
        Ok(flow)
    }
}
