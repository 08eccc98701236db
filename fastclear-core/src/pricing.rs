//! Static pricing configuration and the estimate calculator.
//!
//! Everything here is arithmetic over fixed tables: no I/O, no error paths,
//! cheap enough to recompute on every input change.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::model::{ExtraId, ExtraOption, LoadSize, QuoteSelection, WasteCategory};

/// Price list mapping waste category and load size to a base price in GBP.
///
/// Built once at startup and never mutated.
pub struct PricingTable {
    prices: HashMap<WasteCategory, HashMap<LoadSize, Decimal>>,
}

impl PricingTable {
    /// The published FastClear price list.
    #[must_use]
    pub fn standard() -> Self {
        let rates: [(WasteCategory, [u32; 4]); 4] = [
            (WasteCategory::Household, [80, 150, 220, 300]),
            (WasteCategory::Garden, [90, 160, 230, 320]),
            (WasteCategory::Construction, [100, 180, 250, 350]),
            (WasteCategory::Office, [95, 170, 240, 330]),
        ];

        let mut prices = HashMap::new();
        for (category, tier_rates) in rates {
            let tiers = LoadSize::ALL
                .into_iter()
                .zip(tier_rates)
                .map(|(size, rate)| (size, Decimal::from(rate)))
                .collect();
            prices.insert(category, tiers);
        }

        Self { prices }
    }

    /// Base price for a category/size pair, or zero while either is unset.
    ///
    /// Absent keys cannot occur for the fixed enumerations, so a miss simply
    /// prices at zero rather than erroring.
    #[must_use]
    pub fn base_price(
        &self,
        category: Option<WasteCategory>,
        load_size: Option<LoadSize>,
    ) -> Decimal {
        let (Some(category), Some(load_size)) = (category, load_size) else {
            return Decimal::ZERO;
        };

        self.prices
            .get(&category)
            .and_then(|tiers| tiers.get(&load_size))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// The fixed, ordered catalog of bookable extras.
#[must_use]
pub fn standard_extras() -> Vec<ExtraOption> {
    let items: [(&str, &str, u32); 4] = [
        ("fridge", "Fridge/Freezer", 25),
        ("mattress", "Mattress", 15),
        ("paint", "Paint tins (up to 5)", 20),
        ("tv", "TV/Monitor", 10),
    ];

    items
        .into_iter()
        .map(|(id, label, price)| ExtraOption {
            id: ExtraId::new(id),
            label: label.to_owned(),
            price: Decimal::from(price),
        })
        .collect()
}

/// Sum of the surcharges for the selected extras.
///
/// Ids that do not appear in the catalog contribute nothing.
#[must_use]
pub fn extras_total(catalog: &[ExtraOption], selected: &HashSet<ExtraId>) -> Decimal {
    catalog
        .iter()
        .filter(|extra| selected.contains(&extra.id))
        .map(|extra| extra.price)
        .sum()
}

/// Flat travel fee derived from the postcode prefix.
///
/// Ordered prefix match, first rule wins: empty input and the home "PO"
/// area travel free, the neighbouring "SO" and "GU" areas pay £10, and any
/// other non-empty postcode pays £15.
#[must_use]
pub fn travel_fee(postcode: &str) -> Decimal {
    let normalized = postcode.trim().to_uppercase();

    if normalized.is_empty() || normalized.starts_with("PO") {
        return Decimal::ZERO;
    }
    if normalized.starts_with("SO") || normalized.starts_with("GU") {
        return Decimal::from(10_u32);
    }
    Decimal::from(15_u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Price breakdown shown next to the form.
pub struct Estimate {
    /// Base price for the chosen category and load size.
    pub base: Decimal,
    /// Sum of the selected extras.
    pub extras: Decimal,
    /// Flat travel fee for the postcode.
    pub travel: Decimal,
    /// Grand total.
    pub total: Decimal,
}

impl Estimate {
    /// Recompute the full breakdown from the current selection.
    #[must_use]
    pub fn compute(
        table: &PricingTable,
        catalog: &[ExtraOption],
        selection: &QuoteSelection,
    ) -> Self {
        let base = table.base_price(selection.category, selection.load_size);
        let extras = extras_total(catalog, &selection.extras);
        let travel = travel_fee(&selection.postcode);

        Self {
            base,
            extras,
            travel,
            total: base + extras + travel,
        }
    }
}
