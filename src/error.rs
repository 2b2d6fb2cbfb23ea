use thiserror::Error;

/// A validity invariant the assembled record failed to meet. Reported in
/// logs so the pattern tables can be tuned against real drop reasons.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("direction could not be resolved to credit or debit")]
    UnknownDirection,
    #[error("no strictly positive amount was found")]
    NonPositiveAmount,
    #[error("timestamp is not positive")]
    BadTimestamp,
    #[error("neither an account number nor a upi handle is present")]
    MissingIdentifier,
    #[error("counterparty is empty")]
    MissingCounterparty,
}

/// Why a message produced no record. Both outcomes are expected and
/// high-frequency; neither is a fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("message does not describe a financial transaction")]
    NotTransactional,
    #[error("record failed validation: {0}")]
    Invalid(#[from] InvariantViolation),
}
