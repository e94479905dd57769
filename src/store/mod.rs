//! Storage layer for committed flows and templates.
//!
//! Collections are kept in process memory by [`MemCollection`]. The
//! [`FlowCollection`] trait is the boundary a durable backend would
//! implement.

mod mem;
mod store;

use strum::AsRefStr;

use crate::{Result, model::Flow};

pub use mem::{InsertOrder, MemCollection};
pub use store::Store;

/// Identifiers for the storage collections.
#[derive(Debug, Clone, Copy, AsRefStr, PartialEq, Hash, Eq)]
pub enum StoreIden {
    /// Flows the user works with.
    #[strum(serialize = "flows")]
    Flows,
    /// Saved templates.
    #[strum(serialize = "templates")]
    Templates,
}

/// Trait for flow collection operations.
pub trait FlowCollection: Send + Sync {
    /// Returns the collection identifier.
    fn iden(&self) -> StoreIden;

    /// Checks if a flow with the given ID exists.
    fn exists(
        &self,
        id: &str,
    ) -> Result<bool>;

    /// Finds a flow by ID.
    fn find(
        &self,
        id: &str,
    ) -> Result<Flow>;

    /// Lists all flows in display order.
    fn list(&self) -> Result<Vec<Flow>>;

    /// Creates a new flow. Fails if the ID is taken.
    fn create(
        &self,
        flow: &Flow,
    ) -> Result<bool>;

    /// Replaces an existing flow.
    fn update(
        &self,
        flow: &Flow,
    ) -> Result<bool>;

    /// Deletes a flow by ID.
    fn delete(
        &self,
        id: &str,
    ) -> Result<bool>;
}
