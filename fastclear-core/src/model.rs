//! Domain data structures for waste categories, load sizes, extras, and the
//! quote form input.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business name shown in the header and stamped on every quote.
pub const BUSINESS_NAME: &str = "FastClear Portsmouth";

/// Home postcode pre-filled into a fresh quote form.
pub const HOME_POSTCODE: &str = "PO1 1AA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Waste categories the crew will clear.
pub enum WasteCategory {
    /// General household clearance.
    Household,
    /// Green waste, soil, and garden clearance.
    Garden,
    /// Construction and demolition waste.
    Construction,
    /// Office and commercial clearance.
    Office,
}

impl WasteCategory {
    /// All categories in menu order.
    pub const ALL: [WasteCategory; 4] = [
        WasteCategory::Household,
        WasteCategory::Garden,
        WasteCategory::Construction,
        WasteCategory::Office,
    ];
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WasteCategory::Household => "Household",
            WasteCategory::Garden => "Garden",
            WasteCategory::Construction => "Construction",
            WasteCategory::Office => "Office",
        };
        write!(formatter, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Load-size tiers, as a fraction of a full van.
pub enum LoadSize {
    /// Quarter van load.
    Quarter,
    /// Half van load.
    Half,
    /// Three-quarter van load.
    ThreeQuarter,
    /// Full van load.
    Full,
}

impl LoadSize {
    /// All tiers in menu order, smallest first.
    pub const ALL: [LoadSize; 4] = [
        LoadSize::Quarter,
        LoadSize::Half,
        LoadSize::ThreeQuarter,
        LoadSize::Full,
    ];

    /// Wire identifier used in booking payloads and quote summaries.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            LoadSize::Quarter => "quarter",
            LoadSize::Half => "half",
            LoadSize::ThreeQuarter => "threeQuarter",
            LoadSize::Full => "full",
        }
    }

    /// Human-friendly label with the approximate volume.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LoadSize::Quarter => "¼ load (≈3.5 yd³)",
            LoadSize::Half => "½ load (≈7 yd³)",
            LoadSize::ThreeQuarter => "¾ load (≈10 yd³)",
            LoadSize::Full => "Full load (≈14 yd³)",
        }
    }
}

impl fmt::Display for LoadSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for an optional add-on item.
pub struct ExtraId(pub String);

impl ExtraId {
    /// Construct an id from any string-like value.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        ExtraId(id.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Optional add-on with a fixed surcharge.
pub struct ExtraOption {
    /// Stable identifier used in selections and payloads.
    pub id: ExtraId,
    /// Display label.
    pub label: String,
    /// Fixed surcharge in GBP.
    pub price: Decimal,
}

#[derive(Debug, Clone)]
/// Mutable form state backing the quote screen.
///
/// Created once with the business defaults, mutated by input events, and
/// never persisted past the session.
pub struct QuoteSelection {
    /// Business the quote is issued for.
    pub business_name: String,
    /// Customer full name.
    pub customer_name: String,
    /// Customer phone number.
    pub phone: String,
    /// Customer email (optional).
    pub email: String,
    /// Collection postcode; drives the travel fee.
    pub postcode: String,
    /// Street address (optional).
    pub address: String,
    /// Chosen waste category, if any.
    pub category: Option<WasteCategory>,
    /// Chosen load size, if any.
    pub load_size: Option<LoadSize>,
    /// Ids of the selected extras.
    pub extras: HashSet<ExtraId>,
    /// Preferred collection date and time, freeform.
    pub date_time: String,
    /// Access notes, parking, special items.
    pub notes: String,
    /// Customer confirmed the details are correct.
    pub agree: bool,
}

impl QuoteSelection {
    /// Fresh form with the business defaults filled in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            business_name: BUSINESS_NAME.to_owned(),
            customer_name: String::new(),
            phone: String::new(),
            email: String::new(),
            postcode: HOME_POSTCODE.to_owned(),
            address: String::new(),
            category: None,
            load_size: None,
            extras: HashSet::new(),
            date_time: String::new(),
            notes: String::new(),
            agree: false,
        }
    }

    /// Flip an extra in or out of the selection.
    pub fn toggle_extra(&mut self, id: &ExtraId) {
        if !self.extras.remove(id) {
            self.extras.insert(id.clone());
        }
    }

    /// Whether the given extra is currently selected.
    #[must_use]
    pub fn has_extra(&self, id: &ExtraId) -> bool {
        self.extras.contains(id)
    }

    /// Everything required for a booking is present: customer name, phone,
    /// postcode, category, load size, preferred date/time, and agreement.
    #[must_use]
    pub fn ready_to_book(&self) -> bool {
        !self.customer_name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.postcode.trim().is_empty()
            && self.category.is_some()
            && self.load_size.is_some()
            && !self.date_time.trim().is_empty()
            && self.agree
    }
}

impl Default for QuoteSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a GBP amount the way quotes print it, e.g. `£150.00`.
#[must_use]
pub fn format_gbp(amount: Decimal) -> String {
    format!("£{amount:.2}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn booking_ready_selection() -> QuoteSelection {
        let mut selection = QuoteSelection::new();
        selection.customer_name = "John Smith".to_owned();
        selection.phone = "07123 456789".to_owned();
        selection.category = Some(WasteCategory::Household);
        selection.load_size = Some(LoadSize::Half);
        selection.date_time = "2026-08-12 09:00".to_owned();
        selection.agree = true;
        selection
    }

    #[test]
    fn fresh_selection_carries_business_defaults() {
        let selection = QuoteSelection::new();

        assert_eq!(selection.business_name, BUSINESS_NAME);
        assert_eq!(selection.postcode, HOME_POSTCODE);
        assert_eq!(selection.category, None);
        assert!(!selection.agree, "agreement must start unchecked");
    }

    #[test]
    fn toggle_extra_flips_membership() {
        let mut selection = QuoteSelection::new();
        let fridge = ExtraId::new("fridge");

        selection.toggle_extra(&fridge);
        assert!(selection.has_extra(&fridge), "first toggle selects");

        selection.toggle_extra(&fridge);
        assert!(!selection.has_extra(&fridge), "second toggle deselects");
    }

    #[test]
    fn ready_to_book_with_all_required_fields() {
        assert!(booking_ready_selection().ready_to_book(), "all fields set");
    }

    #[test]
    fn ready_to_book_rejects_each_missing_field() {
        let mut missing_name = booking_ready_selection();
        missing_name.customer_name.clear();
        assert!(!missing_name.ready_to_book(), "name required");

        let mut missing_phone = booking_ready_selection();
        missing_phone.phone = "   ".to_owned();
        assert!(!missing_phone.ready_to_book(), "phone required");

        let mut missing_postcode = booking_ready_selection();
        missing_postcode.postcode.clear();
        assert!(!missing_postcode.ready_to_book(), "postcode required");

        let mut missing_category = booking_ready_selection();
        missing_category.category = None;
        assert!(!missing_category.ready_to_book(), "category required");

        let mut missing_size = booking_ready_selection();
        missing_size.load_size = None;
        assert!(!missing_size.ready_to_book(), "load size required");

        let mut missing_date = booking_ready_selection();
        missing_date.date_time.clear();
        assert!(!missing_date.ready_to_book(), "date/time required");

        let mut missing_agree = booking_ready_selection();
        missing_agree.agree = false;
        assert!(!missing_agree.ready_to_book(), "agreement required");
    }

    #[test]
    fn gbp_formatting_pads_to_two_decimals() {
        assert_eq!(format_gbp(dec!(80)), "£80.00");
        assert_eq!(format_gbp(dec!(12.5)), "£12.50");
        assert_eq!(format_gbp(dec!(0)), "£0.00");
    }
}
