//! Remote minimizer adapter.
//!
//! Posts the model to an HTTP minimizer service and decodes the best
//! sample from the response. The wire format is deliberately plain: a
//! JSON map of linear biases keyed by wire name, and the quadratic biases
//! as `[u, v, bias]` triples (JSON objects cannot key on pairs).

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Result, TriageError};
use crate::model::{BinaryQuadraticModel, Sample, Variable};
use crate::solver::MinimizerService;

/// Remote minimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteMinimizerConfig {
    /// Service base URL; the adapter posts to `{base_url}/minimize`.
    pub base_url: String,
    /// Authentication token (optional for open endpoints).
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteMinimizerConfig {
    fn default() -> Self {
        RemoteMinimizerConfig {
            base_url: std::env::var("QTRIAGE_SOLVER_URL")
                .unwrap_or_else(|_| "http://localhost:8135".to_string()),
            token: std::env::var("QTRIAGE_SOLVER_TOKEN").ok(),
            timeout_secs: std::env::var("QTRIAGE_SOLVER_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(120),
        }
    }
}

impl RemoteMinimizerConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific endpoint.
    pub fn new(base_url: &str) -> Self {
        RemoteMinimizerConfig {
            base_url: base_url.to_string(),
            token: None,
            timeout_secs: 120,
        }
    }

    /// Set authentication token.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
struct MinimizeRequest {
    linear: BTreeMap<String, f64>,
    quadratic: Vec<(String, String, f64)>,
}

impl MinimizeRequest {
    fn from_model(model: &BinaryQuadraticModel) -> Self {
        MinimizeRequest {
            linear: model
                .linear()
                .iter()
                .map(|(v, &bias)| (v.to_string(), bias))
                .collect(),
            quadratic: model
                .quadratic()
                .iter()
                .map(|(&(a, b), &bias)| (a.to_string(), b.to_string(), bias))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MinimizeResponse {
    assignment: BTreeMap<String, u8>,
    energy: f64,
}

impl MinimizeResponse {
    fn into_sample(self) -> Result<Sample> {
        let mut assignment = BTreeMap::new();
        for (name, bit) in self.assignment {
            let variable: Variable = name
                .parse()
                .map_err(TriageError::SolverUnavailable)?;
            assignment.insert(variable, bit);
        }
        Ok(Sample {
            assignment,
            energy: self.energy,
        })
    }
}

/// HTTP adapter to an external minimizer service.
pub struct RemoteMinimizer {
    config: RemoteMinimizerConfig,
    http_client: reqwest::Client,
}

impl RemoteMinimizer {
    pub fn new(config: RemoteMinimizerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("qtriage/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(RemoteMinimizer {
            config,
            http_client,
        })
    }

    /// Create an adapter from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(RemoteMinimizerConfig::from_env())
    }
}

#[async_trait]
impl MinimizerService for RemoteMinimizer {
    async fn minimize(&self, model: &BinaryQuadraticModel) -> Result<Sample> {
        let url = format!("{}/minimize", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, variables = model.num_variables(), "submitting model");

        let mut request = self
            .http_client
            .post(&url)
            .json(&MinimizeRequest::from_model(model));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(TriageError::SolverUnavailable(format!(
                "minimizer at {url} answered {}",
                response.status()
            )));
        }

        let body: MinimizeResponse = response.json().await?;
        body.into_sample()
    }
}
