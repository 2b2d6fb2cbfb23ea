//! Cleanup applied to raw text before it reaches the classifier or the
//! statement row patterns. Digit sequences, punctuation inside reference
//! codes and `@` characters are left untouched; UPI handles depend on them.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static CURRENCY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:rs\.?|inr)\s*").unwrap());

/// Lowercased view of a message used by the transaction gate. Field
/// extraction keeps the original casing so proper nouns and reference codes
/// survive.
pub fn classification_text(raw: &str) -> String {
    collapse(&raw.replace('|', " ")).to_lowercase()
}

/// Case-preserving cleanup for OCR'd statement text: collapses runs of
/// whitespace, drops pipe artifacts and canonicalizes currency tokens to `₹`.
pub fn scrub(raw: &str) -> String {
    let text = raw.replace('|', " ");
    let text = CURRENCY_TOKEN.replace_all(&text, "₹");
    collapse(&text)
}

pub(crate) fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_text_lowercases_and_collapses() {
        assert_eq!(
            classification_text("BOI -  Rs.410.00 | Credited"),
            "boi - rs.410.00 credited"
        );
    }

    #[test]
    fn test_scrub_preserves_case_and_canonicalizes_currency() {
        assert_eq!(
            scrub("Paid  Rs. 1,200 to ACME | INR 50 pending"),
            "Paid ₹1,200 to ACME ₹50 pending"
        );
    }

    #[test]
    fn test_scrub_keeps_upi_handles_and_references_intact() {
        assert_eq!(
            scrub("UPI Ref:285432014240 from 8855916700@ptyes"),
            "UPI Ref:285432014240 from 8855916700@ptyes"
        );
    }
}
