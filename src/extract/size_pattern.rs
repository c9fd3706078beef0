//! Size pattern matcher
//!
//! An ordered table of sub-patterns tried against case-folded text. The first
//! sub-pattern that matches anywhere wins, and within it the leftmost
//! occurrence is taken. Order is load-bearing: several sub-patterns overlap
//! lexically (a letter range contains single letters, a month range contains
//! a single month, and a bare number is the most ambiguous signal of all, so
//! it goes last).

use once_cell::sync::Lazy;
use regex::Regex;

/// Letter-size vocabulary, longest alternatives first so `XXL` is not
/// consumed as `XL`
const LETTER_SIZES: &str = "xxxs|xxs|xs|xxxl|xxl|xl|[45678]xl|s|m|l";

static SIZE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 1. Explicit "tam/tamanho N" marker forms: tam 38, tamanho: 12.
        //    Numeric only; a letter after the marker is picked up by the
        //    plain letter sub-patterns below.
        r"\btam(?:anho)?\.?[\s:nº]*\d{1,2}\b".to_string(),
        // 2. Letter-size ranges: xs-m, s/l, m a l. Both sides standalone
        //    tokens from the vocabulary, so "sal" is not an S-L range.
        format!(r"\b(?:{LETTER_SIZES})\b\s*(?:[-/]|\ba\b)\s*\b(?:{LETTER_SIZES})\b"),
        // 3. Month ranges: 4-8 meses, 4/8m, 4 a 8 meses
        r"\b\d{1,2}\s*(?:[-/]|a)\s*\d{1,2}\s*(?:meses|mês|mes|m)\b".to_string(),
        // 4. Single months: 6 meses, 6m
        r"\b\d{1,2}\s*(?:meses|mês|mes|m)\b".to_string(),
        // 5. Year ranges: 6-8 anos
        r"\b\d{1,2}\s*(?:[-/]|a)\s*\d{1,2}\s*(?:anos|a|y)\b".to_string(),
        // 6. Single years: 10 anos, 10a, 10y
        r"\b\d{1,2}\s*(?:anos|a|y)\b".to_string(),
        // 7. Centimeter ranges, then single centimeters: 50-56 cm, 62cm
        r"\b\d{1,3}\s*(?:[-/]|a)\s*\d{1,3}\s*cm\b".to_string(),
        r"\b\d{1,3}\s*cm\b".to_string(),
        // 8. Single letter sizes
        format!(r"\b(?:{LETTER_SIZES})\b"),
        // 9. Bare numerics, adult band then shoe band. An unqualified
        //    number is the weakest signal, hence the lowest priority.
        r"\b(?:3[0-9]|4[0-9]|5[0-6])\b".to_string(),
        r"\b(?:1[0-9]|2[0-9]|3[0-9]|4[0-9]|5[0-9])\b".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("size pattern must compile"))
    .collect()
});

/// Find the raw size token in case-folded text, if any
///
/// Total over arbitrary text: no match is a normal outcome, not an error.
pub fn find_size_token(folded: &str) -> Option<&str> {
    SIZE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(folded))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_in_plain_text() {
        assert_eq!(find_size_token("roupa variada de inverno"), None);
        assert_eq!(find_size_token(""), None);
    }

    #[test]
    fn test_month_range_beats_single_month() {
        assert_eq!(find_size_token("body 4-8 meses"), Some("4-8 meses"));
        assert_eq!(find_size_token("body 4/8m"), Some("4/8m"));
    }

    #[test]
    fn test_letter_range_beats_single_letter() {
        assert_eq!(find_size_token("camisola xs-m"), Some("xs-m"));
        assert_eq!(find_size_token("camisola m a l"), Some("m a l"));
    }

    #[test]
    fn test_letter_range_beats_bare_number() {
        // Priority rule: the range is more specific than the ambiguous 10
        assert_eq!(find_size_token("tam s-m, idade 10"), Some("s-m"));
    }

    #[test]
    fn test_sal_is_not_a_letter_range() {
        assert_eq!(find_size_token("sal"), None);
    }

    #[test]
    fn test_marker_form() {
        assert_eq!(find_size_token("calças tam 38"), Some("tam 38"));
        assert_eq!(find_size_token("tamanho: 12"), Some("tamanho: 12"));
    }

    #[test]
    fn test_marker_with_letter_falls_to_letter_pattern() {
        assert_eq!(find_size_token("casaco tam m"), Some("m"));
    }

    #[test]
    fn test_year_forms() {
        assert_eq!(find_size_token("vestido 6-8 anos"), Some("6-8 anos"));
        assert_eq!(find_size_token("vestido 10 anos"), Some("10 anos"));
        assert_eq!(find_size_token("vestido 10y"), Some("10y"));
    }

    #[test]
    fn test_centimeters() {
        assert_eq!(find_size_token("babygrow 50-56 cm"), Some("50-56 cm"));
        assert_eq!(find_size_token("babygrow 62cm"), Some("62cm"));
    }

    #[test]
    fn test_bare_numbers() {
        assert_eq!(find_size_token("sapato homem 42"), Some("42"));
        // Below the numeric bands entirely
        assert_eq!(find_size_token("conjunto de 9 peças"), None);
    }

    #[test]
    fn test_leftmost_within_winning_pattern() {
        assert_eq!(find_size_token("camisolas m e l"), Some("m"));
    }
}
