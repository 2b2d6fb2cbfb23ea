use crate::patterns;

/// Account and card identifiers extracted from one message. The two walks
/// are independent; a card hit never overwrites the account result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountInfo {
    pub account: Option<String>,
    pub card: Option<String>,
}

/// Banks always mask accounts down to at least four trailing digits, so
/// shorter captures are stray digit fragments and the walk moves on.
pub fn account_info(text: &str) -> AccountInfo {
    let account = patterns::ACCOUNT.first(text, |caps| {
        let digits = caps[1].to_string();
        (digits.len() >= 4).then_some(digits)
    });

    let card = patterns::CARD.first(text, |caps| Some(caps[1].to_string()));

    AccountInfo { account, card }
}
