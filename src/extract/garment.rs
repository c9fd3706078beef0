//! Garment category classifier
//!
//! First-match-wins keyword scan over the case-folded full text against a
//! fixed vocabulary. Shoe keywords are tested first; everything unmatched
//! falls back to generic clothes. Keyword-driven, and therefore independent
//! of the numeric shoe-band heuristic in the age classifier.

use crate::models::GarmentCategory;

const GARMENT_RULES: &[(&[&str], GarmentCategory)] = &[
    (
        &["sapato", "sapatilha", "ténis", "tenis", "botas", "chinelos"],
        GarmentCategory::Shoes,
    ),
    (&["camisola"], GarmentCategory::Sweater),
    (&["casaco"], GarmentCategory::Jacket),
    (&["calças", "calcas"], GarmentCategory::Trousers),
    (&["t-shirt", "tshirt"], GarmentCategory::Tshirt),
    (&["vestido"], GarmentCategory::Dress),
    (&["saia"], GarmentCategory::Skirt),
    (&["babygrow"], GarmentCategory::Babygrow),
    (&["meias"], GarmentCategory::Socks),
];

/// Classify garment category from case-folded text; `Clothes` when nothing
/// matches
pub fn classify(folded: &str) -> GarmentCategory {
    GARMENT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| folded.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(GarmentCategory::Clothes)
}
