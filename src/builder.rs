use std::sync::Arc;

use tracing::warn;

use crate::{
    Config, Result, Workspace,
    generate::{FlowGenerator, GeminiGenerator},
    samples,
    store::Store,
};

pub struct WorkspaceBuilder {
    config: Config,
    generator: Option<Arc<dyn FlowGenerator>>,
    store: Option<Store>,
    samples: bool,
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            generator: None,
            store: None,
            samples: false,
        }
    }
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(
        mut self,
        config: Config,
    ) -> Self {
        self.config = config;
        self
    }

    /// Replaces the generator built from the config.
    pub fn generator(
        mut self,
        generator: Arc<dyn FlowGenerator>,
    ) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn store(
        mut self,
        store: Store,
    ) -> Self {
        self.store = Some(store);
        self
    }

    /// Seed the store with the demo flows.
    pub fn samples(
        mut self,
        enabled: bool,
    ) -> Self {
        self.samples = enabled;
        self
    }

    pub fn build(self) -> Result<Workspace> {
        let generator = match self.generator {
            Some(generator) => generator,
            None => Arc::new(GeminiGenerator::new(&self.config.generator)?),
        };
        let store = self.store.unwrap_or_default();

        if self.samples {
            let flows = store.flows();
            // new flows are listed first: insert in reverse to keep sample order
            for flow in samples::all().into_iter().rev() {
                if flows.exists(&flow.id)? {
                    warn!("builder: sample flow {} already present, skipped", flow.id);
                    continue;
                }
                flows.create(&flow)?;
            }
        }

        Ok(Workspace::new(self.config, store, generator))
    }
}
