use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    CheckflowError, Result,
    config::GeneratorConfig,
    generate::{FlowGenerator, GeneratedGraph, parse_generated},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

const SYSTEM_PROMPT: &str = "You are an expert workflow architect.
Create a node-based workflow for the user's request.
Return strictly JSON.
Layout logic:
- Start node at x: 200, y: 50.
- Subsequent nodes should flow downwards (increase y by ~150px).
- Branching should spread x by ~250px.
- Keep coordinates within x: 0-800 range if possible.";

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize, Debug, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug, Default)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Generator backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key: None,
            client,
        })
    }

    /// Uses `api_key` instead of reading the configured environment variable.
    pub fn with_api_key(
        mut self,
        api_key: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CheckflowError::Generate(format!("{} not found in environment", self.api_key_env)))
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn headers(
        &self,
        api_key: &str,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            api_key.parse().map_err(|err: InvalidHeaderValue| CheckflowError::Generate(err.to_string()))?,
        );
        headers.insert(HeaderName::from_static("accept"), HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_PROMPT }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("Create a workflow for: {}", prompt) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        })
    }

    /// Output schema in the OpenAPI subset the API accepts.
    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "nodes": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "STRING" },
                            "label": { "type": "STRING" },
                            "type": { "type": "STRING", "enum": ["start", "task", "decision", "milestone"] },
                            "x": { "type": "NUMBER" },
                            "y": { "type": "NUMBER" },
                            "status": { "type": "STRING", "enum": ["pending", "completed"] }
                        },
                        "required": ["id", "label", "type", "x", "y", "status"]
                    }
                },
                "edges": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "STRING" },
                            "source": { "type": "STRING" },
                            "target": { "type": "STRING" }
                        },
                        "required": ["id", "source", "target"]
                    }
                }
            },
            "required": ["nodes", "edges"]
        })
    }
}

#[async_trait]
impl FlowGenerator for GeminiGenerator {
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GeneratedGraph> {
        let api_key = self.api_key().inspect_err(|e| warn!("generate::gemini: {}", e))?;

        debug!("generate::gemini({}, prompt: {})", self.model, prompt);
        let res = self
            .client
            .post(self.url())
            .headers(self.headers(&api_key)?)
            .json(&Self::request_body(prompt))
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateContentResponse = res.json().await?;
        let text = body.text().ok_or_else(|| CheckflowError::Generate("generator returned no content".to_string()))?;

        parse_generated(&text)
    }
}
