//! Relay implementation that posts bookings to a Formspree-style endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use fastclear_core::ports::{BookingPayload, BookingRelay, RelayError};

/// Booking relay delivering JSON payloads to a form-relay HTTP endpoint.
pub struct FormspreeRelay {
    client: Client,
    endpoint: String,
}

impl FormspreeRelay {
    /// Create a relay bound to the given HTTP client and endpoint URL.
    #[must_use]
    pub fn new<S: Into<String>>(client: Client, endpoint: S) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl BookingRelay for FormspreeRelay {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, booking: &BookingPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(booking)
            .send()
            .await?;

        // Form relays answer with a template body we have no use for; only
        // the status matters.
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected { status })
        }
    }
}

/// Build the relay bundle for a configured endpoint.
#[must_use]
pub fn relay<S: Into<String>>(client: Client, endpoint: S) -> Arc<dyn BookingRelay> {
    Arc::new(FormspreeRelay::new(client, endpoint))
}
