//! Orchestration of the SMS path: gate, classify, extract, assemble,
//! validate. Every step is deterministic, so the same text and reference
//! instant always produce the same outcome.

use chrono::{DateTime, Local};
use log::debug;

use crate::classify;
use crate::error::{InvariantViolation, Rejection};
use crate::extract;
use crate::record::{Channel, Direction, TransactionRecord};

/// Raw extraction results before validation. Each field is filled by one
/// extractor and absent fields stay `None` until [`assemble`] decides
/// whether the whole is a valid record.
pub(crate) struct Fields {
    pub direction: Direction,
    pub amount: Option<f64>,
    pub timestamp_millis: i64,
    pub counterparty: Option<String>,
    pub account_number: Option<String>,
    pub card_number: Option<String>,
    pub upi_handle: Option<String>,
    pub channel: Channel,
    pub balance_after: Option<f64>,
    pub reference_number: Option<String>,
}

/// Validates extracted fields into a record. Partial extractions never
/// leak out: a record either meets every invariant or is dropped whole.
pub(crate) fn assemble(fields: Fields) -> Result<TransactionRecord, InvariantViolation> {
    if fields.direction == Direction::Unknown {
        return Err(InvariantViolation::UnknownDirection);
    }

    let amount = fields
        .amount
        .filter(|amount| *amount > 0.0)
        .ok_or(InvariantViolation::NonPositiveAmount)?;

    if fields.timestamp_millis <= 0 {
        return Err(InvariantViolation::BadTimestamp);
    }

    if fields.account_number.is_none() && fields.upi_handle.is_none() {
        return Err(InvariantViolation::MissingIdentifier);
    }

    let counterparty = fields
        .counterparty
        .unwrap_or_else(|| String::from("Unknown"));
    if counterparty.trim().is_empty() {
        return Err(InvariantViolation::MissingCounterparty);
    }

    Ok(TransactionRecord {
        direction: fields.direction,
        amount,
        timestamp_millis: fields.timestamp_millis,
        counterparty,
        account_number: fields.account_number,
        card_number: fields.card_number,
        upi_handle: fields.upi_handle,
        channel: fields.channel,
        balance_after: fields.balance_after,
        reference_number: fields.reference_number,
    })
}

/// Parses one SMS body into a transaction record, using the current time
/// as the fallback timestamp for undated messages.
pub fn parse_message(text: &str) -> Result<TransactionRecord, Rejection> {
    parse_message_at(text, Local::now())
}

/// Like [`parse_message`], but with an explicit reference instant. Two
/// calls with the same text and the same `now` return the same result.
pub fn parse_message_at(
    text: &str,
    now: DateTime<Local>,
) -> Result<TransactionRecord, Rejection> {
    if !classify::is_transaction_message(text) {
        debug!("not a transaction message: {text:?}");
        return Err(Rejection::NotTransactional);
    }

    let direction = classify::direction(text);
    let accounts = extract::account_info(text);

    let fields = Fields {
        direction,
        amount: extract::amount(text),
        timestamp_millis: extract::timestamp(text, now),
        counterparty: extract::counterparty(text, direction),
        account_number: accounts.account,
        card_number: accounts.card,
        upi_handle: extract::upi_handle(text),
        channel: extract::channel(text),
        balance_after: extract::balance(text),
        reference_number: extract::reference_number(text),
    };

    assemble(fields).map_err(|violation| {
        debug!("dropping message ({violation}): {text:?}");
        Rejection::Invalid(violation)
    })
}
