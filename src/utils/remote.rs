mod security;

use crate::error::{ComposeDiffError, Result};
use crate::project_identity;
use crate::traits::ByteSource;
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// HTTP byte source backed by a blocking reqwest client.
///
/// The response body is returned as a reader; large manifests are never
/// buffered in full.
pub struct HttpSource {
    client: Client,
    allow_insecure: bool,
}

impl HttpSource {
    pub fn new(timeout: Duration, allow_insecure: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(project_identity::user_agent())
            .build()
            .map_err(|e| ComposeDiffError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            allow_insecure,
        })
    }
}

impl ByteSource for HttpSource {
    fn open(&self, location: &str) -> Result<Box<dyn Read + Send>> {
        security::validate_url(location, self.allow_insecure)?;

        tracing::debug!(url = location, "opening HTTP stream");
        let resp = self
            .client
            .get(location)
            .send()
            .map_err(|e| ComposeDiffError::fetch(location, format!("Network error: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ComposeDiffError::fetch(location, format!("HTTP {}", status)));
        }

        Ok(Box::new(resp))
    }
}

#[cfg(test)]
mod tests;
