use url::Url;

/// Result of probing an optional local service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Endpoint answered `200`. `models` is filled when the body lists them.
    Running { models: Option<usize> },
    NotDetected(String),
}

pub trait ServiceProbe {
    fn probe(&self, url: &Url) -> ServiceStatus;
}
