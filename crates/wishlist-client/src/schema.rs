//! Schema discovery: reads the OpenAPI document a backend publishes.
//!
//! Fetched once at startup (or on demand by tooling), never per request.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::NamedClient;
use crate::error::{ClientError, Result};
use crate::request::ApiRequest;

const HTTP_METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// One method + path template pair, e.g. `GET /wishlists/{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Operation {
    pub path: String,
    /// Upper-case HTTP method.
    pub method: String,
}

impl Operation {
    /// Whether a concrete request path fits this operation's template.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        if !self.method.eq_ignore_ascii_case(method.as_str()) {
            return false;
        }

        let template: Vec<&str> = self.path.split('/').collect();
        let concrete: Vec<&str> = path.split('?').next().unwrap_or_default().split('/').collect();
        template.len() == concrete.len()
            && template.iter().zip(&concrete).all(|(t, c)| {
                if t.starts_with('{') && t.ends_with('}') {
                    !c.is_empty()
                } else {
                    t == c
                }
            })
    }
}

/// The parts of a schema document the client cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub title: Option<String>,
    pub version: Option<String>,
    operations: Vec<Operation>,
}

impl SchemaDocument {
    /// Fetch the schema configured for `client`, through the client itself.
    ///
    /// Relative addresses starting with `/` resolve against the application
    /// origin; other relative addresses against the client's base URL.
    pub async fn fetch(client: &NamedClient) -> Result<Self> {
        let schema = client.config().schema.clone();
        let mut request = ApiRequest::get(schema.as_str());
        if schema.starts_with('/') {
            request = request.from_origin();
        }

        let document: Value = client.send_json(request).await?;
        let parsed = Self::parse(&document)?;
        debug!(client = client.name(), operations = parsed.operations.len(), "schema loaded");
        Ok(parsed)
    }

    pub fn parse(document: &Value) -> Result<Self> {
        let paths = document
            .get("paths")
            .and_then(Value::as_object)
            .ok_or_else(|| ClientError::Schema("document has no 'paths' object".into()))?;

        let mut operations: Vec<Operation> = paths
            .iter()
            .flat_map(|(path, item)| {
                HTTP_METHODS
                    .iter()
                    .filter(move |m| item.get(**m).is_some())
                    .map(move |m| Operation {
                        path: path.clone(),
                        method: m.to_ascii_uppercase(),
                    })
            })
            .collect();
        operations.sort();

        let info = document.get("info");
        let text = |key: &str| {
            info.and_then(|i| i.get(key))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Ok(Self {
            title: text("title"),
            version: text("version"),
            operations,
        })
    }

    /// All operations, sorted by path then method.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn supports(&self, method: &Method, path: &str) -> bool {
        self.operations.iter().any(|op| op.matches(method, path))
    }
}
