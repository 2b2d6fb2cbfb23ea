//! The single home for every keyword set and ordered regex table used by the
//! extraction pipeline. Both the SMS path and the statement-line path import
//! from here, so a pattern fix applies to every call site at once.
//!
//! All tables are first-match-wins: order encodes deliberate precedence
//! (explicit labels before generic shapes), so entries must not be reordered
//! without checking the disambiguation cases covered in the extractor tests.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Verbs that indicate money actually moved.
pub const TRANSACTION_KEYWORDS: &[&str] = &[
    "credited",
    "debited",
    "payment",
    "sent",
    "received",
    "debit",
    "credit",
    "transferred",
    "withdrawn",
    "deposited",
    "trf",
    "transaction",
];

/// Currency markers. Matched against lowercased text.
pub const AMOUNT_KEYWORDS: &[&str] = &["rs.", "rs ", "inr", "₹", "rupees"];

/// Account and payment-rail vocabulary.
pub const ACCOUNT_KEYWORDS: &[&str] = &[
    "a/c", "acct", "account", "ac ", "bank", "upi", "neft", "imps", "rtgs",
];

/// Bank and PSP names seen in Indian transaction SMS sender text and bodies.
pub const BANK_NAMES: &[&str] = &[
    "boi", "sbi", "hdfc", "icici", "axis", "kotak", "pnb", "canara", "union", "ippb", "paytm",
    "phonepe", "gpay", "googlepay",
];

/// An ordered list of candidate patterns for one field, evaluated by
/// short-circuiting over the list. A pattern whose first occurrence is
/// rejected by the caller's acceptance check does not get a second chance;
/// the walk moves on to the next pattern, mirroring how the pattern lists
/// were tuned.
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    fn compile(patterns: &[&str]) -> Self {
        PatternSet {
            patterns: patterns
                .iter()
                .map(|pattern| Regex::new(pattern).unwrap())
                .collect(),
        }
    }

    /// Walks the table in order and returns the first accepted capture.
    pub fn first<T>(
        &self,
        text: &str,
        mut accept: impl FnMut(&Captures<'_>) -> Option<T>,
    ) -> Option<T> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(text).and_then(|caps| accept(&caps)))
    }
}

/// `123.45` style decimal, the structural amount signal used when no
/// currency keyword is present.
pub static DECIMAL_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\.\d{1,2}\b").unwrap());

/// `ref no 123456` and friends, used by the classifier's UPI-reference signal.
pub static LABELLED_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ref\s*(?:no\.?)?\s*\d{6,}").unwrap());

/// Masked account shape: `X5678`, `XX0589`.
pub static MASKED_ACCOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bx{1,2}\d{4,}\b").unwrap());

/// Transaction verbs that license the bare-decimal amount fallback.
pub static TRANSACTION_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)credited|debited|sent|received").unwrap());

/// Bare decimal used as the last-resort amount pattern, only consulted when
/// [`TRANSACTION_VERB`] matches elsewhere in the message.
pub static BARE_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]+\.[0-9]{1,2})\b").unwrap());

const NUMBER: &str = r"([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)";
const CURRENCY: &str = r"(?:rs\.?|inr|₹)";

/// Amount candidates, anchored to currency markers or transaction verbs.
pub static AMOUNT: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        &format!(r"(?i){CURRENCY}\s*{NUMBER}"),
        &format!(r"(?i){NUMBER}\s*{CURRENCY}"),
        r"(?i)sent\s+rs\.?\s*([0-9]+(?:\.[0-9]{1,2})?)",
        r"(?i)received\s+rs\.?\s*([0-9]+(?:\.[0-9]{1,2})?)",
        &format!(r"(?i)(?:debited|credited)\s+(?:by|with|of)?\s*{CURRENCY}?\s*{NUMBER}"),
        &format!(r"(?i)(?:debit|credit)\s+{CURRENCY}\s*{NUMBER}"),
        &format!(r"(?i)^{CURRENCY}\s*{NUMBER}"),
    ])
});

/// Account-number candidates, explicit labels before generic masked shapes.
/// Captured digits shorter than four characters are rejected by the caller.
pub static ACCOUNT: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)a/c\s*x+([0-9]+)",
        r"(?i)acct\s*x+([0-9]+)",
        r"(?i)account\s*x+([0-9]+)",
        r"(?i)\bac\s*x+([0-9]+)",
        r"(?i)bank\s*ac\s*x+([0-9]+)",
        r"(?i)\b[a-z]+\s+bank\s+ac\s*x+([0-9]+)",
        r"(?i)\bx{1,2}([0-9]{4,})\b",
        r"(?i)(?:your|to your)\s*ac\s*x{1,2}([0-9]+)",
        r"(?i)(?:account|ac|a/c)\s*(?:no\.?|number)?\s*[:#]?\s*([0-9]{4,})",
        r"(?i)x{2,}([0-9]{4,})",
    ])
});

/// Card-number candidates, tried independently of [`ACCOUNT`] and never
/// allowed to overwrite its result.
pub static CARD: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)card\s*(?:no\.?)?\s*(?:ending(?:\s+in)?)?\s*([0-9]{4,})",
        r"(?i)card\s*x+([0-9]{4})",
        r"(?i)(?:debit|credit)\s*card\s*x*([0-9]{4,})",
    ])
});

/// UPI handle candidates, ordered from provider-specific to generic.
pub static UPI: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"[a-zA-Z0-9]+@ybl",
        r"[0-9]+@ptyes",
        r"[0-9]{10}@[a-zA-Z]+",
        r"[a-zA-Z0-9._-]{3,}@[a-zA-Z]{2,}",
        r"\b[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]{2,}\b",
    ])
});

/// Phone-number-based UPI handle, reported by its phone prefix when used as
/// a counterparty display name.
pub static PHONE_UPI_HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}@[a-zA-Z]+$").unwrap());

pub static TRAILING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:]$").unwrap());

/// Counterparty candidates for debit messages: the payee follows "to".
pub static COUNTERPARTY_DEBIT: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)(?:to|paid to|sent to)\s+(\S+(?:\s+\S+)*?)\s+(?:on|at|via|ref|\d)",
        r"(?i)(?:to|paid to|sent to)\s+(\S+(?:\s+\S+)*?)$",
        r"(?i)for\s+upi\s+to\s+(\S+(?:\s+\S+)*?)\s+(?:on|at|via|ref|\d)",
        r"(?i)trf\s+to\s+(\S+(?:\s+\S+)*?)\s+(?:refno|ref|\d)",
        r"(?i)to\s+([a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+)",
        r"(?i)to\s+(\d{10}@[a-zA-Z]+)",
        r"\bto\s+([A-Za-z]\S*(?:\s+[A-Za-z]\S*)*?)\s+(?:on|at|via|ref|Ref|\d)",
    ])
});

/// Counterparty candidates for credit messages: the payer follows "from".
pub static COUNTERPARTY_CREDIT: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)(?:from|received from)\s+(\S+(?:\s+\S+)*?)\s+(?:on|at|via|ref|\d)",
        r"(?i)(?:from|received from)\s+(\S+(?:\s+\S+)*?)$",
        r"(?i)from\s+([a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+)",
        r"(?i)from\s+(\d{10}@[a-zA-Z]+)",
        r"(?i)by\s+upi\s+(?:ref\s+no\.?)?\s*([A-Za-z0-9]+)",
        r"\bfrom\s+([A-Za-z]\S*(?:\s+[A-Za-z]\S*)*?)\s+(?:on|at|via|ref|Ref|\d)",
    ])
});

/// Counterparty fallback when the direction is unresolved.
pub static COUNTERPARTY_ANY: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)(?:to|from|paid to|received from|sent to)\s+(\S+(?:\s+\S+)*?)\s+(?:on|at|via|ref|\d)",
        r"(?i)(?:to|from|paid to|received from|sent to)\s+(\S+(?:\s+\S+)*?)$",
        r"(?i)to\s+([a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+)",
        r"(?i)from\s+([a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+)",
    ])
});

/// Balance candidates. "Avl Bal" first, then labelled balances, then a
/// trailing-of-message amount, then the bare "Bal" fallback.
pub static BALANCE: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        &format!(r"(?i)avl\.?\s*bal\s*(?:is)?\s*{CURRENCY}?\s*{NUMBER}"),
        &format!(r"(?i)(?:available|avl|bal)(?:ance)?\s*(?:is)?\s*{CURRENCY}\s*{NUMBER}"),
        &format!(r"(?i)(?:balance|bal)\s*{CURRENCY}?\s*{NUMBER}\s*\.?\s*$"),
        &format!(r"(?i)\bbal\s*{CURRENCY}?\s*{NUMBER}"),
    ])
});

/// Reference-number candidates. Captures shorter than six characters are
/// rejected by the caller and the next pattern tried.
pub static REFERENCE: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"(?i)(?:ref(?:erence)?|txn)\s*(?:no\.?|number)?\s*[:#]?\s*([A-Za-z0-9]+)",
        r"(?i)imps(?::|\s+)([A-Za-z0-9]+)",
        r"(?i)neft(?::|\s+)([A-Za-z0-9]+)",
        r"(?i)upi\s*ref\s*(?:no\.?)?\s*[:#]?\s*([0-9]+)",
        r"(?i)ref\s*no\.\s*([0-9]+)",
        r"(?i)\bref\s+([0-9]+)",
        r"(?i)refno\s+([0-9]+)",
        r"(?i)(?:reference|ref)\s*[:#]?\s*([A-Za-z0-9]{6,})",
    ])
});

/// How a date pattern's capture groups are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// day, numeric month, year
    Numeric,
    /// day, three-letter month name, year
    MonthName,
}

/// Date candidates. Unanchored search also covers the "on"/"on date"
/// prefixed forms.
pub static DATES: Lazy<Vec<(Regex, DateShape)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})\b").unwrap(),
            DateShape::Numeric,
        ),
        (
            Regex::new(r"\b(\d{1,2})-([A-Za-z]{3})-?(\d{2,4})\b").unwrap(),
            DateShape::MonthName,
        ),
        (
            Regex::new(r"\b(\d{1,2})([A-Za-z]{3})(\d{2})\b").unwrap(),
            DateShape::MonthName,
        ),
    ]
});

/// Time-of-day candidates: `H:MM` anywhere, separator-less or dotted forms
/// only behind an "at" anchor. Out-of-range values are non-matches.
pub static TIME_OF_DAY: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&[
        r"\b(\d{1,2}):(\d{2})\b",
        r"(?i)\bat\s+(\d{1,2})[:.]?(\d{2})\b",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_walk_is_ordered() {
        let set = PatternSet::compile(&[r"b(\d)", r"a(\d)"]);
        // Both patterns match; the first in table order wins.
        let hit = set.first("a1 b2", |caps| Some(caps[1].to_string()));
        assert_eq!(hit.as_deref(), Some("2"));
    }

    #[test]
    fn test_rejected_capture_falls_through_to_next_pattern() {
        let set = PatternSet::compile(&[r"x(\d+)", r"y(\d+)"]);
        let hit = set.first("x12 y123456", |caps| {
            let digits = caps[1].to_string();
            (digits.len() >= 6).then_some(digits)
        });
        assert_eq!(hit.as_deref(), Some("123456"));
    }

    #[test]
    fn test_masked_account_shape() {
        assert!(MASKED_ACCOUNT.is_match("a/c xx0589 credited"));
        assert!(MASKED_ACCOUNT.is_match("X5678"));
        assert!(!MASKED_ACCOUNT.is_match("x589"));
        assert!(!MASKED_ACCOUNT.is_match("tax2024"));
    }
}
