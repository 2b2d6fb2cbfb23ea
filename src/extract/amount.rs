use crate::patterns;

/// First strictly positive match across the ordered amount patterns.
/// Thousands-separator commas are stripped before the numeric parse; a
/// non-positive parse rejects the pattern and the walk continues.
pub fn amount(text: &str) -> Option<f64> {
    if let Some(value) = patterns::AMOUNT.first(text, |caps| parse_positive(&caps[1])) {
        return Some(value);
    }

    // The regex crate has no lookahead, so the bare-decimal fallback is
    // gated here: it only applies when a transaction verb occurs elsewhere
    // in the message, which keeps phone numbers and dates out.
    if patterns::TRANSACTION_VERB.is_match(text) {
        return patterns::BARE_DECIMAL
            .captures(text)
            .and_then(|caps| parse_positive(&caps[1]));
    }

    None
}

fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    (value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_prefixed() {
        assert_eq!(amount("Rs.410.00 Credited to your Ac"), Some(410.0));
        assert_eq!(amount("INR 1,250.50 debited"), Some(1250.5));
        assert_eq!(amount("₹99 paid"), Some(99.0));
    }

    #[test]
    fn test_currency_suffixed() {
        assert_eq!(amount("2500 Rs withdrawn from ATM"), Some(2500.0));
    }

    #[test]
    fn test_verb_anchored_without_currency() {
        assert_eq!(amount("A/C X8659 debited by 35.0 on date 21Apr25"), Some(35.0));
    }

    #[test]
    fn test_first_amount_wins_over_balance() {
        assert_eq!(
            amount("Debit Rs.2355.00 for UPI to sima. Avl Bal Rs.2.13."),
            Some(2355.0)
        );
    }

    #[test]
    fn test_bare_decimal_requires_transaction_verb() {
        // No verb: the stray decimal must not be read as an amount.
        assert_eq!(amount("your OTP expires at 12.30 today"), None);
        // With a verb the same shape qualifies.
        assert_eq!(amount("12.30 was debited"), Some(12.3));
    }

    #[test]
    fn test_never_negative_and_none_when_absent() {
        for text in ["no numbers here", "call 1800111109", ""] {
            let value = amount(text);
            assert!(value.is_none());
            // Call sites treating absence as the old 0.0 sentinel see
            // exactly the old behavior.
            assert_eq!(value.unwrap_or(0.0), 0.0);
        }
    }
}
