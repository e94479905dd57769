//! Generative flow synthesis.
//!
//! A [`FlowGenerator`] turns a free-text prompt into a node/edge set. The
//! crate treats it as an opaque collaborator: one call, no retry. Whatever
//! text the collaborator returns is checked against [`schema`] before it is
//! trusted.

mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    CheckflowError, Result,
    model::{Edge, Flow, Node},
};

pub use gemini::GeminiGenerator;

/// Nodes and edges proposed by a generator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GeneratedGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GeneratedGraph {
    /// Wraps the graph in a new flow titled `title`.
    pub fn into_flow(
        self,
        title: &str,
    ) -> Flow {
        let mut flow = Flow::new(title);
        flow.nodes = self.nodes;
        flow.edges = self.edges;
        flow
    }
}

#[async_trait]
pub trait FlowGenerator: Send + Sync {
    /// Synthesizes a graph for `prompt`.
    ///
    /// # Returns
    ///
    /// Returns a [`GeneratedGraph`], or [`CheckflowError::Generate`] on a
    /// missing credential, transport failure or malformed payload.
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GeneratedGraph>;
}

/// JSON schema every generated payload must satisfy.
pub fn schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["nodes", "edges"],
        "properties": {
            "nodes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "label", "type", "x", "y", "status"],
                    "properties": {
                        "id": { "type": "string" },
                        "label": { "type": "string" },
                        "type": { "type": "string", "enum": ["start", "task", "decision", "milestone"] },
                        "x": { "type": "number" },
                        "y": { "type": "number" },
                        "width": { "type": "number" },
                        "height": { "type": "number" },
                        "status": { "type": "string", "enum": ["pending", "completed"] }
                    }
                }
            },
            "edges": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "source", "target"],
                    "properties": {
                        "id": { "type": "string" },
                        "source": { "type": "string" },
                        "target": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Parses collaborator text into a validated graph.
///
/// Markdown code fences around the JSON are tolerated.
pub fn parse_generated(text: &str) -> Result<GeneratedGraph> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(CheckflowError::Generate("generator returned an empty response".to_string()));
    }

    let value: Value = serde_json::from_str(cleaned).map_err(|e| CheckflowError::Generate(format!("failed to parse generated flow: {}", e)))?;
    jsonschema::validate(&schema(), &value)?;

    serde_json::from_value(value).map_err(|e| CheckflowError::Generate(format!("malformed generated flow: {}", e)))
}
