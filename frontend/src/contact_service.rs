use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use webcraft_shared::{ContactFormData, ContactSubmitter, SubmitError};

use crate::config::SiteConfig;

/// Error body hosted form services send back with a 4xx, e.g. `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
}

fn rejection_reason(body: &str) -> Option<String> {
    serde_json::from_str::<RejectionBody>(body).ok()?.error
}

/// Posts the form as JSON to a hosted form backend (Formspree, Getform, a
/// serverless function...). Anything but a 2xx counts as a rejection.
pub struct HttpContactSubmitter {
    endpoint: String,
}

impl HttpContactSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpContactSubmitter {
    async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(form)
            .map_err(|err| SubmitError::Encode(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        if response.ok() {
            log::info!("contact message accepted by {}", self.endpoint);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            match rejection_reason(&body) {
                Some(reason) => log::warn!("form endpoint rejected the message ({}): {}", status, reason),
                None => log::warn!("form endpoint rejected the message ({})", status),
            }
            Err(SubmitError::Rejected { status })
        }
    }
}

/// Stand-in used when no endpoint is configured: waits, then reports success.
pub struct SimulatedContactSubmitter {
    delay_ms: u32,
}

impl SimulatedContactSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedContactSubmitter {
    async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError> {
        log::debug!("simulating delivery of a `{}` enquiry", form.service.as_str());
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

pub fn submitter_for(config: &SiteConfig) -> Box<dyn ContactSubmitter> {
    match &config.contact_endpoint {
        Some(endpoint) => Box::new(HttpContactSubmitter::new(endpoint.clone())),
        None => {
            log::warn!("WEBCRAFT_CONTACT_ENDPOINT not set at build time, contact messages are simulated");
            Box::new(SimulatedContactSubmitter::new(config.simulated_delay_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_reason_reads_error_field() {
        assert_eq!(
            rejection_reason(r#"{"error": "Form not found", "ok": false}"#).as_deref(),
            Some("Form not found")
        );
        assert_eq!(rejection_reason("<html>Bad Gateway</html>"), None);
        assert_eq!(rejection_reason("{}"), None);
    }
}
