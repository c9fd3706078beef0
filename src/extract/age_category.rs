//! Age category classifier
//!
//! Derived from the normalized size, not from the raw text: month sizes are
//! baby scale, year sizes child scale, centimeter sizes baby scale, and bare
//! numbers inside the configured shoe band are shoes. Everything else is
//! adult clothing scale.

use std::ops::RangeInclusive;

use crate::models::AgeCategory;

/// Classify the age scale of a canonical size string
///
/// Only a size that is nothing but a number can enter the shoe band; unit
/// and marker forms ("4-8 MESES", "TAM 38") never parse and fall through to
/// the adult default.
pub fn classify(size: &str, shoe_band: &RangeInclusive<u32>) -> AgeCategory {
    if size.contains("MESES") {
        AgeCategory::Baby
    } else if size.contains("ANOS") {
        AgeCategory::Child
    } else if size.contains("CM") {
        AgeCategory::Baby
    } else if let Ok(number) = size.parse::<u32>() {
        if shoe_band.contains(&number) {
            AgeCategory::Shoes
        } else {
            AgeCategory::Clothes
        }
    } else {
        AgeCategory::Clothes
    }
}
