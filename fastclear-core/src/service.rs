//! High-level service facade combining pricing, summaries, and the relay.

use std::sync::Arc;

use tracing::info;

use crate::model::{ExtraOption, QuoteSelection};
use crate::ports::{BookingPayload, BookingRelay, RelayError};
use crate::pricing::{Estimate, PricingTable, standard_extras};
use crate::summary::quote_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a booking submission was dispatched.
pub enum Dispatch {
    /// Delivered to the configured relay endpoint.
    Sent,
    /// No relay configured; the payload was written to the log instead.
    Logged,
}

/// Public entry point for estimates, quote summaries, and bookings.
pub struct QuoteService {
    pricing: PricingTable,
    extras: Vec<ExtraOption>,
    relay: Option<Arc<dyn BookingRelay>>,
}

impl QuoteService {
    /// Create a service over the standard price list.
    ///
    /// Without a relay the service runs in demo mode: submissions are
    /// logged, never sent.
    #[must_use]
    pub fn new(relay: Option<Arc<dyn BookingRelay>>) -> Self {
        Self {
            pricing: PricingTable::standard(),
            extras: standard_extras(),
            relay,
        }
    }

    /// The bookable extras, in display order.
    #[must_use]
    pub fn extras(&self) -> &[ExtraOption] {
        &self.extras
    }

    /// Whether submissions actually leave the machine.
    #[must_use]
    pub fn has_relay(&self) -> bool {
        self.relay.is_some()
    }

    /// Price breakdown for the current selection.
    #[must_use]
    pub fn estimate(&self, selection: &QuoteSelection) -> Estimate {
        Estimate::compute(&self.pricing, &self.extras, selection)
    }

    /// Copyable text summary of the current selection.
    #[must_use]
    pub fn summary(&self, selection: &QuoteSelection) -> String {
        let estimate = self.estimate(selection);
        quote_summary(selection, &estimate, &self.extras)
    }

    /// Submit a booking request for the current selection.
    ///
    /// With a relay configured this is a single delivery attempt; in demo
    /// mode the payload is logged and the call always succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the relay cannot be reached or rejects
    /// the booking.
    pub async fn submit_booking(
        &self,
        selection: &QuoteSelection,
    ) -> Result<Dispatch, RelayError> {
        let estimate = self.estimate(selection);
        let payload = BookingPayload::from_selection(selection, &estimate, &self.extras);

        match &self.relay {
            Some(relay) => {
                relay.submit(&payload).await?;
                info!(endpoint = relay.endpoint(), "booking request delivered");
                Ok(Dispatch::Sent)
            }
            None => {
                let rendered =
                    serde_json::to_string(&payload).unwrap_or_else(|_| format!("{payload:?}"));
                info!(payload = %rendered, "demo mode: booking captured in the log");
                Ok(Dispatch::Logged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    use crate::model::{LoadSize, WasteCategory};

    use super::*;

    fn booking_ready_selection() -> QuoteSelection {
        let mut selection = QuoteSelection::new();
        selection.customer_name = "John Smith".to_owned();
        selection.phone = "07123 456789".to_owned();
        selection.category = Some(WasteCategory::Household);
        selection.load_size = Some(LoadSize::Quarter);
        selection.date_time = "2026-08-12 09:00".to_owned();
        selection.agree = true;
        selection
    }

    struct RecordingRelay {
        sent: Mutex<Vec<BookingPayload>>,
    }

    #[async_trait]
    impl BookingRelay for RecordingRelay {
        fn endpoint(&self) -> &str {
            "test://recording"
        }

        async fn submit(&self, booking: &BookingPayload) -> Result<(), RelayError> {
            self.sent
                .lock()
                .expect("relay mutex poisoned")
                .push(booking.clone());
            Ok(())
        }
    }

    struct RejectingRelay;

    #[async_trait]
    impl BookingRelay for RejectingRelay {
        fn endpoint(&self) -> &str {
            "test://rejecting"
        }

        async fn submit(&self, _booking: &BookingPayload) -> Result<(), RelayError> {
            Err(RelayError::Rejected {
                status: StatusCode::BAD_GATEWAY,
            })
        }
    }

    #[tokio::test]
    async fn demo_mode_logs_instead_of_sending() {
        let service = QuoteService::new(None);

        let dispatch = service
            .submit_booking(&booking_ready_selection())
            .await
            .expect("demo submission cannot fail");

        assert_eq!(dispatch, Dispatch::Logged);
        assert!(!service.has_relay(), "no relay configured");
    }

    #[tokio::test]
    async fn configured_relay_receives_the_booking() {
        let relay = Arc::new(RecordingRelay {
            sent: Mutex::new(Vec::new()),
        });
        let service = QuoteService::new(Some(relay.clone()));

        let dispatch = service
            .submit_booking(&booking_ready_selection())
            .await
            .expect("recording relay accepts everything");

        assert_eq!(dispatch, Dispatch::Sent);

        let sent = relay.sent.lock().expect("relay mutex poisoned");
        assert_eq!(sent.len(), 1, "exactly one delivery attempt");
        let booking = sent.first().expect("one payload recorded");
        assert_eq!(booking.customer_name, "John Smith");
        assert_eq!(booking.waste_type, "Household");
    }

    #[tokio::test]
    async fn relay_rejection_surfaces_as_an_error() {
        let service = QuoteService::new(Some(Arc::new(RejectingRelay)));

        let result = service.submit_booking(&booking_ready_selection()).await;

        assert!(
            matches!(result, Err(RelayError::Rejected { .. })),
            "rejection passes through untouched"
        );
    }
}
