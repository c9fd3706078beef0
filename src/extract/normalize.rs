//! Size token normalization
//!
//! Canonicalizes a raw size token into the stable textual form the ledger is
//! keyed on: unit spelled out, range syntax standardized, upper case,
//! trimmed. Pure and idempotent; the same raw token always normalizes to the
//! same canonical string.

use once_cell::sync::Lazy;
use regex::Regex;

const LETTER_SIZES_UPPER: &str = "XXXS|XXS|XS|XXXL|XXL|XL|[45678]XL|S|M|L";

static MONTH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})\s*(?:[-/]|A)\s*(\d{1,2})\s*(?:MESES|MÊS|MES|M)\b").unwrap()
});
static MONTH_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(?:MESES|MÊS|MES|M)\b").unwrap());
static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})\s*(?:[-/]|A)\s*(\d{1,2})\s*(?:ANOS|A|Y)\b").unwrap()
});
static YEAR_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(?:ANOS|A|Y)\b").unwrap());
static LETTER_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^({LETTER_SIZES_UPPER})\s*(?:[-/]|\bA\b)\s*({LETTER_SIZES_UPPER})$"
    ))
    .unwrap()
});

/// Normalize a raw size token into canonical form
///
/// Rules are applied in sequence, ranges before their single-value
/// counterparts. Tokens no rule recognizes are upper-cased verbatim.
pub fn normalize_size(raw: &str) -> String {
    let mut size = raw.trim().to_uppercase();

    size = MONTH_RANGE.replace(&size, "${1}-${2} MESES").into_owned();
    size = MONTH_SINGLE.replace(&size, "${1} MESES").into_owned();
    size = YEAR_RANGE.replace(&size, "${1}-${2} ANOS").into_owned();
    size = YEAR_SINGLE.replace(&size, "${1} ANOS").into_owned();
    size = LETTER_RANGE.replace(&size, "${1}-${2}").into_owned();

    size.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_forms() {
        assert_eq!(normalize_size("4-8 meses"), "4-8 MESES");
        assert_eq!(normalize_size("4/8m"), "4-8 MESES");
        assert_eq!(normalize_size("4 a 8 meses"), "4-8 MESES");
        assert_eq!(normalize_size("6m"), "6 MESES");
        assert_eq!(normalize_size("6 mês"), "6 MESES");
    }

    #[test]
    fn test_year_forms() {
        assert_eq!(normalize_size("6-8 anos"), "6-8 ANOS");
        assert_eq!(normalize_size("10a"), "10 ANOS");
        assert_eq!(normalize_size("10y"), "10 ANOS");
        assert_eq!(normalize_size("10 anos"), "10 ANOS");
    }

    #[test]
    fn test_letter_ranges() {
        assert_eq!(normalize_size("xs-m"), "XS-M");
        assert_eq!(normalize_size("s/l"), "S-L");
        assert_eq!(normalize_size("m a l"), "M-L");
    }

    #[test]
    fn test_verbatim_tokens() {
        assert_eq!(normalize_size("xl"), "XL");
        assert_eq!(normalize_size("42"), "42");
        assert_eq!(normalize_size(" tam 38 "), "TAM 38");
        assert_eq!(normalize_size("62cm"), "62CM");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "4-8 meses", "6m", "6-8 anos", "10a", "xs-m", "m a l", "xl", "42", "tam 38", "62cm",
            "50-56 cm", "",
        ] {
            let once = normalize_size(raw);
            assert_eq!(normalize_size(&once), once, "not idempotent for {raw:?}");
        }
    }
}
