use crate::patterns;
use crate::record::Direction;

/// Merchant or payer name. Debit messages name the payee after "to",
/// credit messages the payer after "from"; an unresolved direction tries
/// both generically.
pub fn counterparty(text: &str, direction: Direction) -> Option<String> {
    let table = match direction {
        Direction::Debit => &patterns::COUNTERPARTY_DEBIT,
        Direction::Credit => &patterns::COUNTERPARTY_CREDIT,
        Direction::Unknown => &patterns::COUNTERPARTY_ANY,
    };

    table.first(text, |caps| clean(&caps[1]))
}

fn clean(raw: &str) -> Option<String> {
    let name = patterns::TRAILING_PUNCTUATION
        .replace(raw.trim(), "")
        .into_owned();

    if name.contains('@') {
        // Phone-number handles are displayed by their phone prefix; other
        // handles stand as the counterparty verbatim.
        if patterns::PHONE_UPI_HANDLE.is_match(&name) {
            return name.split('@').next().map(str::to_string);
        }
        return Some(name);
    }

    // The length bound guards against regex over-capture swallowing the
    // rest of the message.
    (!name.is_empty() && name.len() <= 50).then_some(name)
}
