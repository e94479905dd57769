use std::sync::Arc;

use tracing::trace;

use crate::{CheckflowError, Result, model::Flow};

use super::{FlowCollection, InsertOrder, MemCollection, StoreIden};

/// Committed flows and saved templates.
pub struct Store {
    flows: Arc<dyn FlowCollection>,
    templates: Arc<dyn FlowCollection>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// In-memory store: flows newest first, templates in creation order.
    pub fn new() -> Self {
        Self::with_collections(
            Arc::new(MemCollection::new(StoreIden::Flows, InsertOrder::Front)),
            Arc::new(MemCollection::new(StoreIden::Templates, InsertOrder::Back)),
        )
    }

    pub fn with_collections(
        flows: Arc<dyn FlowCollection>,
        templates: Arc<dyn FlowCollection>,
    ) -> Self {
        Self {
            flows,
            templates,
        }
    }

    pub fn flows(&self) -> Arc<dyn FlowCollection> {
        self.flows.clone()
    }

    pub fn templates(&self) -> Arc<dyn FlowCollection> {
        self.templates.clone()
    }

    /// Writes `flow` over its committed copy, creating it if absent.
    pub fn commit(
        &self,
        flow: &Flow,
    ) -> Result<bool> {
        trace!("store::commit({})", flow.id);
        if flow.id.is_empty() {
            return Err(CheckflowError::Flow("missing id in flow".into()));
        }
        if self.flows.exists(&flow.id)? {
            self.flows.update(flow)
        } else {
            self.flows.create(flow)
        }
    }
}
