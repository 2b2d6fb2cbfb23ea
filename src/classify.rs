//! The two gates in front of field extraction: is this message a financial
//! transaction at all, and which way did the money move.

use crate::normalize::classification_text;
use crate::patterns;
use crate::record::Direction;

/// Deterministic boolean gate over four clauses. Transaction vocabulary
/// alone is ambiguous ("credit card offer"), so each clause requires a
/// co-occurring amount or account signal.
pub fn is_transaction_message(text: &str) -> bool {
    let lower = classification_text(text);

    let has_transaction_keyword = patterns::TRANSACTION_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword));
    let has_amount_keyword = patterns::AMOUNT_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
        || patterns::DECIMAL_NUMBER.is_match(&lower);
    let has_account_keyword = patterns::ACCOUNT_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword));
    let has_bank_name = patterns::BANK_NAMES.iter().any(|name| lower.contains(name));
    let has_upi_reference = lower.contains("ref")
        && (lower.contains("upi") || patterns::LABELLED_REFERENCE.is_match(&lower));
    let has_account_pattern = patterns::MASKED_ACCOUNT.is_match(&lower);

    (has_transaction_keyword && (has_amount_keyword || has_account_keyword))
        || (has_bank_name && has_amount_keyword)
        || has_upi_reference
        || (has_account_pattern && has_amount_keyword)
}

/// Ordered rule list, first match wins. The "credit card"/"debit card"
/// exclusions keep bare mentions of the instrument from being read as a
/// transaction; they are the dominant source of false positives and the
/// rule order is a deliberate tie-break.
pub fn direction(text: &str) -> Direction {
    let lower = text.to_lowercase();

    if lower.contains("credited") {
        return Direction::Credit;
    }
    if lower.contains("received") {
        return Direction::Credit;
    }
    if lower.contains("credit") && !lower.contains("credit card") {
        return Direction::Credit;
    }
    if lower.contains("debited") {
        return Direction::Debit;
    }
    if lower.contains("debit") && !lower.contains("debit card") {
        return Direction::Debit;
    }
    if lower.contains("payment of") || lower.contains("paid") {
        return Direction::Debit;
    }
    if lower.contains("sent") {
        return Direction::Debit;
    }
    if lower.contains("payment") && lower.contains("credited to your card") {
        return Direction::Credit;
    }
    if lower.contains("payment") && lower.contains("card") {
        return Direction::Debit;
    }

    Direction::Unknown
}
