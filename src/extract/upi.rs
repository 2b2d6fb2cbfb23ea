use crate::patterns;

/// First syntactically valid UPI handle, provider-specific shapes before
/// generic `local@domain`. A handle must contain `@` and be at least five
/// characters long.
pub fn upi_handle(text: &str) -> Option<String> {
    patterns::UPI.first(text, |caps| {
        let handle = caps[0].to_string();
        (handle.contains('@') && handle.len() >= 5).then_some(handle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_suffix_handle() {
        assert_eq!(
            upi_handle("Sent Rs.20.00 to q674757157@ybl on 26-05-25").as_deref(),
            Some("q674757157@ybl")
        );
    }

    #[test]
    fn test_phone_number_handle_stays_whole() {
        // Unlike the counterparty extractor, the standalone UPI extractor
        // always reports the full handle.
        assert_eq!(
            upi_handle("Received from 8855916700@ptyes").as_deref(),
            Some("8855916700@ptyes")
        );
    }

    #[test]
    fn test_generic_handle() {
        assert_eq!(
            upi_handle("paid to merchant.name@okhdfcbank yesterday").as_deref(),
            Some("merchant.name@okhdfcbank")
        );
    }

    #[test]
    fn test_none_without_at_sign() {
        assert_eq!(upi_handle("A/C X5678 Debit Rs.2355.00 Ref 046519653003"), None);
    }
}
