//! Plain-text quote summary, formatted for pasting into a message.

use crate::model::{ExtraOption, LoadSize, QuoteSelection, format_gbp};
use crate::pricing::Estimate;

/// Render the multi-line quote summary the customer can copy.
///
/// Unset choices print as `-`, an empty extras selection prints as `None`.
#[must_use]
pub fn quote_summary(
    selection: &QuoteSelection,
    estimate: &Estimate,
    catalog: &[ExtraOption],
) -> String {
    let waste_type = selection
        .category
        .map_or_else(|| "-".to_owned(), |category| category.to_string());
    let load_size = selection.load_size.map_or("-", LoadSize::slug);

    let extra_labels: Vec<&str> = catalog
        .iter()
        .filter(|extra| selection.has_extra(&extra.id))
        .map(|extra| extra.label.as_str())
        .collect();
    let extras = if extra_labels.is_empty() {
        "None".to_owned()
    } else {
        extra_labels.join(", ")
    };

    let date_time = if selection.date_time.is_empty() {
        "-"
    } else {
        selection.date_time.as_str()
    };
    let notes = if selection.notes.is_empty() {
        "-"
    } else {
        selection.notes.as_str()
    };

    format!(
        "Quote for {business}

Customer: {customer_name}
Contact: {phone} | {email}
Address: {address}
Postcode: {postcode}

Waste type: {waste_type}
Load size: {load_size}
Extras: {extras}
Travel fee: {travel_fee}

Estimated total: {estimated_total}
Preferred date/time: {date_time}

Notes: {notes}
",
        business = selection.business_name,
        customer_name = selection.customer_name,
        phone = selection.phone,
        email = selection.email,
        address = selection.address,
        postcode = selection.postcode,
        travel_fee = format_gbp(estimate.travel),
        estimated_total = format_gbp(estimate.total),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::{ExtraId, QuoteSelection, WasteCategory};
    use crate::pricing::{Estimate, PricingTable, standard_extras};

    use super::*;

    #[test]
    fn summary_renders_a_complete_quote() {
        let catalog = standard_extras();

        let mut selection = QuoteSelection::new();
        selection.customer_name = "John Smith".to_owned();
        selection.phone = "07123 456789".to_owned();
        selection.email = "john@example.com".to_owned();
        selection.address = "1 High Street".to_owned();
        selection.postcode = "SO14 3AB".to_owned();
        selection.category = Some(WasteCategory::Garden);
        selection.load_size = Some(LoadSize::ThreeQuarter);
        selection.toggle_extra(&ExtraId::new("fridge"));
        selection.toggle_extra(&ExtraId::new("tv"));
        selection.date_time = "2026-08-12 09:00".to_owned();
        selection.notes = "Gate code 1234".to_owned();

        let estimate = Estimate::compute(&PricingTable::standard(), &catalog, &selection);
        let summary = quote_summary(&selection, &estimate, &catalog);

        assert_eq!(
            summary,
            "Quote for FastClear Portsmouth

Customer: John Smith
Contact: 07123 456789 | john@example.com
Address: 1 High Street
Postcode: SO14 3AB

Waste type: Garden
Load size: threeQuarter
Extras: Fridge/Freezer, TV/Monitor
Travel fee: £10.00

Estimated total: £275.00
Preferred date/time: 2026-08-12 09:00

Notes: Gate code 1234
"
        );
    }

    #[test]
    fn summary_dashes_out_unset_fields() {
        let catalog = standard_extras();
        let selection = QuoteSelection::new();
        let estimate = Estimate::compute(&PricingTable::standard(), &catalog, &selection);

        let summary = quote_summary(&selection, &estimate, &catalog);

        assert!(summary.contains("Waste type: -"), "unset category dashes");
        assert!(summary.contains("Load size: -"), "unset size dashes");
        assert!(summary.contains("Extras: None"), "empty extras print None");
        assert!(
            summary.contains("Preferred date/time: -"),
            "unset date dashes"
        );
        assert!(summary.contains("Notes: -"), "empty notes dash");
    }
}
