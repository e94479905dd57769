use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::{
    CheckflowError, Result, ShareLock,
    model::Flow,
    store::{FlowCollection, StoreIden},
};

/// Where [`MemCollection::create`] places new flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertOrder {
    /// Newest first.
    #[default]
    Front,
    /// Oldest first.
    Back,
}

/// In-memory ordered flow collection.
#[derive(Debug, Clone)]
pub struct MemCollection {
    iden: StoreIden,
    order: InsertOrder,
    items: ShareLock<Vec<Flow>>,
}

impl MemCollection {
    pub fn new(
        iden: StoreIden,
        order: InsertOrder,
    ) -> Self {
        Self {
            iden,
            order,
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Flow>>> {
        self.items.read().map_err(|e| CheckflowError::Store(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Flow>>> {
        self.items.write().map_err(|e| CheckflowError::Store(e.to_string()))
    }

    fn not_found(
        &self,
        id: &str,
    ) -> CheckflowError {
        CheckflowError::Store(format!("flow {} not found in {}", id, self.iden.as_ref()))
    }
}

impl FlowCollection for MemCollection {
    fn iden(&self) -> StoreIden {
        self.iden
    }

    fn exists(
        &self,
        id: &str,
    ) -> Result<bool> {
        Ok(self.read()?.iter().any(|f| f.id == id))
    }

    fn find(
        &self,
        id: &str,
    ) -> Result<Flow> {
        trace!("{}::find({})", self.iden.as_ref(), id);
        self.read()?.iter().find(|f| f.id == id).cloned().ok_or_else(|| self.not_found(id))
    }

    fn list(&self) -> Result<Vec<Flow>> {
        Ok(self.read()?.clone())
    }

    fn create(
        &self,
        flow: &Flow,
    ) -> Result<bool> {
        trace!("{}::create({})", self.iden.as_ref(), flow.id);
        let mut items = self.write()?;
        if items.iter().any(|f| f.id == flow.id) {
            return Err(CheckflowError::Store(format!("flow {} already exists in {}", flow.id, self.iden.as_ref())));
        }
        match self.order {
            InsertOrder::Front => items.insert(0, flow.clone()),
            InsertOrder::Back => items.push(flow.clone()),
        }
        Ok(true)
    }

    fn update(
        &self,
        flow: &Flow,
    ) -> Result<bool> {
        trace!("{}::update({})", self.iden.as_ref(), flow.id);
        let mut items = self.write()?;
        let slot = items.iter_mut().find(|f| f.id == flow.id).ok_or_else(|| self.not_found(&flow.id))?;
        *slot = flow.clone();
        Ok(true)
    }

    fn delete(
        &self,
        id: &str,
    ) -> Result<bool> {
        trace!("{}::delete({})", self.iden.as_ref(), id);
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|f| f.id != id);
        Ok(items.len() != before)
    }
}
