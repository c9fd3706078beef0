//! Attribute extraction pipeline
//!
//! Composes the size pattern matcher, the normalizer, and the three
//! classifiers into one entry point:
//!
//! ```text
//! raw text → size token → canonical size
//!                       → gender / age category / garment category
//! ```
//!
//! Extraction is all-or-nothing: no recognizable size token means no
//! attribute tuple at all, never a partial one. The whole pipeline is pure:
//! the reconciliation engine calls it twice per edit (old and new text) and
//! relies on getting identical results independent of call order.

pub mod age_category;
pub mod garment;
pub mod gender;
pub mod normalize;
pub mod size_pattern;

use std::ops::RangeInclusive;

use crate::models::AttributeTuple;

/// Default numeric shoe-size band (inclusive)
pub const DEFAULT_SHOE_BAND: RangeInclusive<u32> = 16..=59;

/// Attribute extractor with its classification parameters
#[derive(Debug, Clone)]
pub struct Extractor {
    shoe_band: RangeInclusive<u32>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            shoe_band: DEFAULT_SHOE_BAND,
        }
    }
}

impl Extractor {
    pub fn new(shoe_band: RangeInclusive<u32>) -> Self {
        Self { shoe_band }
    }

    /// Extract the canonical attribute tuple from a lot description
    ///
    /// Returns `None` for empty text and for text without a recognizable
    /// size token. Total over arbitrary input; never fails.
    pub fn extract(&self, description: &str) -> Option<AttributeTuple> {
        let text = description.trim();
        if text.is_empty() {
            return None;
        }

        let folded = text.to_lowercase();
        let token = size_pattern::find_size_token(&folded)?;
        let size = normalize::normalize_size(token);

        Some(AttributeTuple {
            gender: gender::classify(&folded),
            age_category: age_category::classify(&size, &self.shoe_band),
            garment_category: garment::classify(&folded),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeCategory, GarmentCategory, Gender};

    #[test]
    fn test_girl_jacket_months() {
        let tuple = Extractor::default()
            .extract("casaco menina 4-8 meses")
            .unwrap();
        assert_eq!(tuple.size, "4-8 MESES");
        assert_eq!(tuple.gender, Gender::Girl);
        assert_eq!(tuple.age_category, AgeCategory::Baby);
        assert_eq!(tuple.garment_category, GarmentCategory::Jacket);
    }

    #[test]
    fn test_mens_shoe() {
        let tuple = Extractor::default().extract("sapato homem 42").unwrap();
        assert_eq!(tuple.size, "42");
        assert_eq!(tuple.gender, Gender::M);
        assert_eq!(tuple.age_category, AgeCategory::Shoes);
        assert_eq!(tuple.garment_category, GarmentCategory::Shoes);
    }

    #[test]
    fn test_empty_and_unmatched_yield_none() {
        let extractor = Extractor::default();
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("   "), None);
        assert_eq!(extractor.extract("roupa variada de inverno"), None);
    }

    #[test]
    fn test_deterministic() {
        let extractor = Extractor::default();
        let text = "vestido M senhora";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_keyword_and_band_shoe_detection_disagree() {
        // Numeric size in the shoe band on a keyword-classified jacket:
        // the two shoe heuristics are computed independently.
        let tuple = Extractor::default().extract("casaco 42").unwrap();
        assert_eq!(tuple.age_category, AgeCategory::Shoes);
        assert_eq!(tuple.garment_category, GarmentCategory::Jacket);
    }
}
