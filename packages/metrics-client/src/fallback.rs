//! Ordered provider chains for best-effort metrics.
//!
//! A [`FallbackChain`] holds a list of [`MetricSource`]s and asks them in
//! order. The first source that produces a value wins; sources that fail or
//! return an unrecognised payload are logged and skipped. When every source is
//! exhausted the chain resolves to `None`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MetricsError, Result};

/// One provider of a metric value.
#[async_trait]
pub trait MetricSource<T>: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Fetch the value. `Ok(None)` means the provider answered but the payload
    /// did not contain a usable value.
    async fn fetch(&self) -> Result<Option<T>>;
}

/// Ordered list of sources tried until one succeeds.
pub struct FallbackChain<T> {
    sources: Vec<Box<dyn MetricSource<T>>>,
}

impl<T: Send> FallbackChain<T> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source to the end of the chain.
    pub fn with_source(mut self, source: impl MetricSource<T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Try each source in order and return the first value produced.
    pub async fn resolve(&self) -> Option<T> {
        for source in &self.sources {
            match source.fetch().await {
                Ok(Some(value)) => {
                    debug!(source = source.name(), "Metric resolved");
                    return Some(value);
                }
                Ok(None) => {
                    warn!(source = source.name(), "Metric payload had no usable value");
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Metric source failed");
                }
            }
        }
        None
    }
}

impl<T: Send> Default for FallbackChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a numeric value can live in a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// The whole body is the number.
    Bare,
    /// The number sits under a top-level field.
    Field(&'static str),
}

/// Shapes the primary TVL endpoint has been seen to answer with.
pub const TVL_SHAPES: &[ValueShape] = &[
    ValueShape::Bare,
    ValueShape::Field("tvl"),
    ValueShape::Field("totalValueLocked"),
    ValueShape::Field("value"),
];

/// Shapes understood on the explorer stats endpoint.
pub const EXPLORER_TVL_SHAPES: &[ValueShape] = &[
    ValueShape::Field("tvl"),
    ValueShape::Field("totalValueLocked"),
];

/// Pull a number out of `body` following `shapes` in order.
///
/// Numbers encoded as strings are accepted. A bare number is taken as is,
/// zero included; a zero under a field counts as absent and the next shape
/// is tried.
pub fn extract_number(body: &Value, shapes: &[ValueShape]) -> Option<f64> {
    shapes.iter().find_map(|shape| match shape {
        ValueShape::Bare => as_number(body),
        ValueShape::Field(name) => as_number(body.get(*name)?).filter(|n| *n != 0.0),
    })
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// A JSON endpoint that carries a single number in one of several shapes.
pub struct JsonNumberSource {
    name: String,
    url: String,
    shapes: &'static [ValueShape],
    http: Client,
}

impl JsonNumberSource {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        shapes: &'static [ValueShape],
        http: Client,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            shapes,
            http,
        }
    }
}

#[async_trait]
impl MetricSource<f64> for JsonNumberSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Option<f64>> {
        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MetricsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| MetricsError::Parse(e.to_string()))?;
        Ok(extract_number(&body, self.shapes))
    }
}
