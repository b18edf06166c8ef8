use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::ports::{ServiceProbe, ServiceStatus};

/// Short-timeout GET against a local health endpoint.
#[derive(Debug, Clone)]
pub struct HttpServiceProbe {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Option<Vec<serde_json::Value>>,
}

impl HttpServiceProbe {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ServiceProbe for HttpServiceProbe {
    fn probe(&self, url: &Url) -> ServiceStatus {
        tracing::debug!(%url, "probing service");
        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => return ServiceStatus::NotDetected(e.to_string()),
        };

        if response.status() != StatusCode::OK {
            return ServiceStatus::NotDetected(format!("status {}", response.status()));
        }

        let models = response
            .json::<TagsResponse>()
            .ok()
            .and_then(|body| body.models)
            .map(|models| models.len());
        ServiceStatus::Running { models }
    }
}
