use crate::patterns;

/// Balance reported alongside the transaction. `None` means "no balance
/// reported", which is distinct from a genuinely zero balance.
pub fn balance(text: &str) -> Option<f64> {
    patterns::BALANCE.first(text, |caps| {
        let value: f64 = caps[1].replace(',', "").parse().ok()?;
        (value >= 0.0).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avl_bal_without_currency() {
        assert_eq!(
            balance("by UPI ref No.589400102736.Avl Bal 4583.96"),
            Some(4583.96)
        );
    }

    #[test]
    fn test_avl_bal_with_currency() {
        assert_eq!(balance("Ref 046519653003. Avl Bal Rs.2.13."), Some(2.13));
    }

    #[test]
    fn test_labelled_balance() {
        assert_eq!(balance("available balance is Rs 12,500.00"), Some(12500.0));
    }

    #[test]
    fn test_zero_balance_is_not_absence() {
        assert_eq!(balance("Avl Bal 0.00"), Some(0.0));
        assert_eq!(balance("Sent Rs.20.00 to q674757157@ybl"), None);
    }
}
