use crate::patterns;

/// Transaction reference code. Captures shorter than six characters are
/// usually truncated phone numbers or stray digits, so they reject the
/// pattern and the walk continues.
pub fn reference_number(text: &str) -> Option<String> {
    patterns::REFERENCE.first(text, |caps| {
        let reference = caps[1].to_string();
        (reference.len() >= 6).then_some(reference)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_no_dot_form() {
        assert_eq!(
            reference_number("by UPI ref No.589400102736.Avl Bal 4583.96").as_deref(),
            Some("589400102736")
        );
    }

    #[test]
    fn test_bare_ref_form() {
        assert_eq!(
            reference_number("on 19-05-25 Ref 046519653003. Avl Bal").as_deref(),
            Some("046519653003")
        );
    }

    #[test]
    fn test_refno_form() {
        assert_eq!(
            reference_number("trf to Mr SHREYASH SAN Refno 763846935006.").as_deref(),
            Some("763846935006")
        );
    }

    #[test]
    fn test_upi_ref_colon_form() {
        assert_eq!(
            reference_number("on 24-05-25.UPI Ref:285432014240.").as_deref(),
            Some("285432014240")
        );
    }

    #[test]
    fn test_imps_labelled_form() {
        assert_eq!(
            reference_number("IMPS:P2406041234 credited").as_deref(),
            Some("P2406041234")
        );
    }

    #[test]
    fn test_short_captures_are_discarded() {
        assert_eq!(reference_number("Ref 12345 pending"), None);
    }
}
