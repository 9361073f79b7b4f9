//! Itinerary webhook client
//!
//! Sends one trip request per submission to the configured webhook. No retry,
//! no timeout and no cancellation: a single best-effort POST.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::WebhookConfig;
use crate::error::RequestError;
use crate::models::TripRequest;

/// Raw webhook response; its shape is only interpreted by [`crate::normalize`]
pub type ItineraryResponse = Value;

/// Message carried by the synthetic failure response
pub const GENERATION_FAILED: &str = "Failed to generate itinerary";

/// Sends a trip request and returns the parsed response body
#[async_trait]
pub trait ItineraryTransport: Send + Sync {
    async fn submit(&self, request: &TripRequest) -> Result<ItineraryResponse, RequestError>;
}

/// Response body the view layer receives when the transport failed
#[must_use]
pub fn failure_response() -> ItineraryResponse {
    json!({ "success": false, "error": GENERATION_FAILED })
}

/// HTTP client for the itinerary webhook
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ItineraryTransport for WebhookClient {
    #[instrument(
        name = "submit_trip",
        skip(self, request),
        fields(destination = %request.destination(), user_id = %request.user_id())
    )]
    async fn submit(&self, request: &TripRequest) -> Result<ItineraryResponse, RequestError> {
        info!("Posting trip request to {}", self.url);
        let start_time = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .inspect_err(|e| warn!("Webhook request failed: {}", e))?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body = %body, "Raw webhook response");

        if !status.is_success() {
            // The body still decides; a JSON error page is a transport success.
            warn!("Webhook answered with status {}", status);
        }

        let parsed: Value = serde_json::from_str(&body)
            .inspect_err(|e| warn!("Webhook response is not JSON: {}", e))?;

        info!(
            "Webhook settled in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(parsed)
    }
}
