//! Gender classifier
//!
//! First-match-wins keyword scan over the case-folded full text. The order
//! is fixed: "senhora" must be tested before "senhor" ever gets a chance,
//! and the standalone `f`/`m` letters need word boundaries so they do not
//! fire inside ordinary words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Gender;

static GENDER_RULES: Lazy<Vec<(Regex, Gender)>> = Lazy::new(|| {
    [
        (r"senhora|mulher|feminino|\bf\b", Gender::F),
        (r"senhor|homem|masculino|\bm\b", Gender::M),
        (r"menina|rapariga", Gender::Girl),
        (r"menino|rapaz", Gender::Boy),
        (r"bebé|bebe|baby|infantil", Gender::Baby),
    ]
    .iter()
    .map(|(pattern, gender)| {
        (
            Regex::new(pattern).expect("gender pattern must compile"),
            *gender,
        )
    })
    .collect()
});

/// Classify gender from case-folded text; `Unisex` when nothing matches
pub fn classify(folded: &str) -> Gender {
    GENDER_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(folded))
        .map(|(_, gender)| *gender)
        .unwrap_or(Gender::Unisex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("vestido senhora"), Gender::F);
        assert_eq!(classify("camisa homem"), Gender::M);
        assert_eq!(classify("saia menina"), Gender::Girl);
        assert_eq!(classify("calções rapaz"), Gender::Boy);
        assert_eq!(classify("body bebé"), Gender::Baby);
        assert_eq!(classify("roupa variada"), Gender::Unisex);
    }

    #[test]
    fn test_senhora_wins_over_senhor() {
        // "senhora" textually contains "senhor"; F is tested first
        assert_eq!(classify("casaco senhora"), Gender::F);
    }

    #[test]
    fn test_standalone_letters_need_boundaries() {
        assert_eq!(classify("camisola f"), Gender::F);
        assert_eq!(classify("camisola m 38"), Gender::M);
        // No standalone f or m inside words
        assert_eq!(classify("fato de treino"), Gender::Unisex);
    }

    #[test]
    fn test_unissexo_is_unisex() {
        assert_eq!(classify("6 anos unissexo"), Gender::Unisex);
    }
}
