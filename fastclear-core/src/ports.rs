//! Booking relay port and the wire payload it carries.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::{ExtraOption, QuoteSelection};
use crate::pricing::Estimate;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while handing a booking to the relay.
pub enum RelayError {
    /// Network layer failed before a response arrived.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The relay answered with a non-success status.
    #[error("Relay rejected the booking: HTTP {status}")]
    Rejected {
        /// Status code of the rejection.
        status: StatusCode,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Flat booking structure posted to the relay endpoint.
///
/// Field names are part of the relay contract; notification templates key
/// on them, so they stay camelCase on the wire.
pub struct BookingPayload {
    /// Business receiving the booking.
    pub business: String,
    /// Customer full name.
    pub customer_name: String,
    /// Customer phone number.
    pub phone: String,
    /// Customer email.
    pub email: String,
    /// Collection postcode.
    pub postcode: String,
    /// Street address.
    pub address: String,
    /// Chosen waste category name, empty if unset.
    pub waste_type: String,
    /// Chosen load-size slug, empty if unset.
    pub load_size: String,
    /// Ids of the selected extras, in catalog order.
    pub extras: Vec<String>,
    /// Travel fee included in the total.
    pub travel_fee: Decimal,
    /// Estimated total quoted to the customer.
    pub estimated_total: Decimal,
    /// Preferred collection date and time.
    pub date_time: String,
    /// Freeform notes.
    pub notes: String,
}

impl BookingPayload {
    /// Assemble the payload from the current selection and its estimate.
    #[must_use]
    pub fn from_selection(
        selection: &QuoteSelection,
        estimate: &Estimate,
        catalog: &[ExtraOption],
    ) -> Self {
        let extras = catalog
            .iter()
            .filter(|extra| selection.has_extra(&extra.id))
            .map(|extra| extra.id.0.clone())
            .collect();

        Self {
            business: selection.business_name.clone(),
            customer_name: selection.customer_name.clone(),
            phone: selection.phone.clone(),
            email: selection.email.clone(),
            postcode: selection.postcode.clone(),
            address: selection.address.clone(),
            waste_type: selection
                .category
                .map(|category| category.to_string())
                .unwrap_or_default(),
            load_size: selection
                .load_size
                .map(|size| size.slug().to_owned())
                .unwrap_or_default(),
            extras,
            travel_fee: estimate.travel,
            estimated_total: estimate.total,
            date_time: selection.date_time.clone(),
            notes: selection.notes.clone(),
        }
    }
}

#[async_trait]
/// Trait for backends that forward booking requests as notifications.
pub trait BookingRelay: Send + Sync {
    /// Endpoint the relay delivers to, for logging and display.
    fn endpoint(&self) -> &str;

    /// Hand a booking to the relay. A single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the request cannot reach the relay or
    /// the relay answers with a non-success status.
    async fn submit(&self, booking: &BookingPayload) -> Result<(), RelayError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::{ExtraId, LoadSize, QuoteSelection, WasteCategory};
    use crate::pricing::{Estimate, PricingTable, standard_extras};

    use super::*;

    #[test]
    fn payload_serializes_with_the_relay_field_names() {
        let catalog = standard_extras();

        let mut selection = QuoteSelection::new();
        selection.customer_name = "John Smith".to_owned();
        selection.category = Some(WasteCategory::Construction);
        selection.load_size = Some(LoadSize::ThreeQuarter);
        selection.toggle_extra(&ExtraId::new("tv"));
        selection.toggle_extra(&ExtraId::new("fridge"));

        let estimate = Estimate::compute(&PricingTable::standard(), &catalog, &selection);
        let payload = BookingPayload::from_selection(&selection, &estimate, &catalog);

        let value = serde_json::to_value(&payload).expect("payload serializes");
        let object = value.as_object().expect("payload is a flat object");

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "address",
                "business",
                "customerName",
                "dateTime",
                "email",
                "estimatedTotal",
                "extras",
                "loadSize",
                "notes",
                "phone",
                "postcode",
                "travelFee",
                "wasteType",
            ]
        );

        assert_eq!(object.get("wasteType"), Some(&"Construction".into()));
        assert_eq!(object.get("loadSize"), Some(&"threeQuarter".into()));
    }

    #[test]
    fn payload_lists_selected_extras_in_catalog_order() {
        let catalog = standard_extras();

        let mut selection = QuoteSelection::new();
        selection.toggle_extra(&ExtraId::new("tv"));
        selection.toggle_extra(&ExtraId::new("fridge"));

        let estimate = Estimate::compute(&PricingTable::standard(), &catalog, &selection);
        let payload = BookingPayload::from_selection(&selection, &estimate, &catalog);

        assert_eq!(payload.extras, vec!["fridge".to_owned(), "tv".to_owned()]);
    }

    #[test]
    fn payload_leaves_unset_choices_empty() {
        let catalog = standard_extras();
        let selection = QuoteSelection::new();
        let estimate = Estimate::compute(&PricingTable::standard(), &catalog, &selection);

        let payload = BookingPayload::from_selection(&selection, &estimate, &catalog);

        assert_eq!(payload.waste_type, "");
        assert_eq!(payload.load_size, "");
        assert!(payload.extras.is_empty(), "no extras selected");
    }
}
