//! Tabular statement-line parsing for OCR'd bank-statement text. Rows are
//! columnar, so date, description, reference, amount, Dr/Cr flag and balance
//! are captured jointly by wide row regexes instead of per-field walks; the
//! per-field extractors are still reused for identifiers inside the line.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use itertools::Itertools;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify;
use crate::extract;
use crate::normalize;
use crate::pipeline::{assemble, Fields};
use crate::record::{Channel, Direction, TransactionRecord};

/// Capture layout of a row pattern. `Full` rows carry a reference column,
/// `NoReference` rows skip it, `Flagged` rows end in a bare Dr/Cr token and
/// `Simple` rows are date/description/amount only.
#[derive(Debug, Clone, Copy)]
enum RowShape {
    Full,
    NoReference,
    Flagged,
    Simple,
}

/// Row candidates, widest and most explicit first. The flagged shape sits
/// ahead of the simple shapes so an explicit Dr/Cr token is captured
/// whenever the row carries one; simple-shape matches fall back to keyword
/// direction inference.
static ROW_PATTERNS: Lazy<Vec<(Regex, RowShape)>> = Lazy::new(|| {
    [
        (
            r"(?i)(\d{1,2}-\d{1,2}-\d{4})\s+([^0-9]+?)\s+([A-Z0-9-]{6,})\s+([0-9,.]+)\s*\(?(dr|cr)\)?\s+([0-9,.]+)",
            RowShape::Full,
        ),
        (
            r"(?i)(\d{1,2}/\d{1,2}/\d{4})\s+([^0-9]+?)\s+([A-Z0-9-]{6,})\s+([0-9,.]+)\s*\(?(dr|cr)\)?\s+([0-9,.]+)",
            RowShape::Full,
        ),
        (
            r"(?i)(\d{1,2}[-/]\d{1,2}[-/]\d{4})\s+([A-Za-z0-9\s@._-]+?)\s+([0-9,.]+)\s*\(?(dr|cr)\)?\s+([0-9,.]+)",
            RowShape::NoReference,
        ),
        (
            r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+([^.]*?)\s+₹?(\d+\.\d{2}|\d+,\d{3}\.\d{2})\s*\(?(dr|cr)\b\)?",
            RowShape::Flagged,
        ),
        (
            r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+(?:upi[-\s])?([^.]*?)(?:upi[-\s])?\s+₹?(\d+\.\d{2}|\d+,\d{3}\.\d{2})",
            RowShape::Simple,
        ),
        (
            r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+(?:pos|atm|card)\s+([^.]*?)\s+₹?(\d+\.\d{2}|\d+,\d{3}\.\d{2})",
            RowShape::Simple,
        ),
        (
            r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+(?:neft|imps|rtgs)\s+([^.]*?)\s+₹?(\d+\.\d{2}|\d+,\d{3}\.\d{2})",
            RowShape::Simple,
        ),
        (
            r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+([A-Za-z0-9\s.,_:-]+?)\s+₹?(\d+\.\d{2}|\d+,\d{3}\.\d{2})",
            RowShape::Simple,
        ),
        (
            r"(?i)(\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4})\s+([A-Za-z0-9\s.@,_:-]+?)\s+([0-9,.]+)",
            RowShape::Simple,
        ),
    ]
    .into_iter()
    .map(|(pattern, shape)| (Regex::new(pattern).unwrap(), shape))
    .collect()
});

static DESCRIPTION_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s@.,_-]").unwrap());

/// One matched row, pre-validation.
struct Row<'a> {
    date: &'a str,
    description: &'a str,
    reference: Option<&'a str>,
    amount: &'a str,
    flag: Option<&'a str>,
    balance: Option<&'a str>,
}

fn match_row(line: &str) -> Option<Row<'_>> {
    ROW_PATTERNS.iter().find_map(|(pattern, shape)| {
        let caps = pattern.captures(line)?;
        let group = |index: usize| caps.get(index).map(|group| group.as_str());

        Some(match shape {
            RowShape::Full => Row {
                date: group(1)?,
                description: group(2)?,
                reference: group(3),
                amount: group(4)?,
                flag: group(5),
                balance: group(6),
            },
            RowShape::NoReference => Row {
                date: group(1)?,
                description: group(2)?,
                reference: None,
                amount: group(3)?,
                flag: group(4),
                balance: group(5),
            },
            RowShape::Flagged => Row {
                date: group(1)?,
                description: group(2)?,
                reference: None,
                amount: group(3)?,
                flag: group(4),
                balance: None,
            },
            RowShape::Simple => Row {
                date: group(1)?,
                description: group(2)?,
                reference: None,
                amount: group(3)?,
                flag: None,
                balance: None,
            },
        })
    })
}

/// Statement dates are day-first; the month-first form covers statements
/// exported with US locale settings. Separators are normalized before the
/// parse so dotted OCR output shares the same formats.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.replace(['/', '.'], "-");
    let four_digit_year = date.rsplit('-').next().map_or(false, |year| year.len() == 4);
    let formats: &[&str] = if four_digit_year {
        &["%d-%m-%Y", "%m-%d-%Y"]
    } else {
        &["%d-%m-%y"]
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&date, format).ok())
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', "").trim_end_matches('.').parse().ok()
}

/// Channel detection for statement rows. Wider vocabulary than the SMS path
/// and a BANK_TRANSFER default, since a matched row is known to be a bank
/// movement even without a rail token.
fn statement_channel(line: &str) -> Channel {
    let lower = line.to_lowercase();

    if lower.contains("upi") {
        Channel::Upi
    } else if lower.contains("neft") {
        Channel::Neft
    } else if lower.contains("imps") {
        Channel::Imps
    } else if lower.contains("rtgs") {
        Channel::Rtgs
    } else if lower.contains("atm") {
        Channel::Atm
    } else if lower.contains("pos") || lower.contains("card") {
        Channel::Pos
    } else if lower.contains("cash") {
        Channel::Cash
    } else if lower.contains("cheque") || lower.contains("chq") {
        Channel::Cheque
    } else {
        Channel::BankTransfer
    }
}

fn clean_description(raw: &str) -> Option<String> {
    let text = DESCRIPTION_NOISE.replace_all(raw, "");
    let text: String = normalize::collapse(&text).chars().take(50).collect();
    (!text.is_empty()).then_some(text)
}

fn parse_row(line: &str, now: DateTime<Local>) -> Option<TransactionRecord> {
    let row = match_row(line)?;
    let date = parse_date(row.date)?;

    // An explicit Dr/Cr column wins; keyword inference is only the fallback
    // for shapes that do not capture a flag.
    let direction = match row.flag {
        Some(flag) if flag.eq_ignore_ascii_case("dr") => Direction::Debit,
        Some(flag) if flag.eq_ignore_ascii_case("cr") => Direction::Credit,
        _ => classify::direction(line),
    };

    let reference_number = row
        .reference
        .filter(|reference| reference.len() >= 6)
        .map(str::to_string)
        .or_else(|| extract::reference_number(line));
    let accounts = extract::account_info(line);
    // Statement rows rarely repeat the masked account; the row reference
    // stands in as the account identifier when none is found.
    let account_number = accounts.account.or_else(|| reference_number.clone());

    let fields = Fields {
        direction,
        amount: parse_decimal(row.amount).filter(|amount| *amount > 0.0),
        timestamp_millis: extract::resolve_millis(date.and_time(NaiveTime::MIN), now),
        counterparty: clean_description(row.description),
        account_number,
        card_number: accounts.card,
        upi_handle: extract::upi_handle(line),
        channel: statement_channel(line),
        balance_after: row
            .balance
            .and_then(parse_decimal)
            .filter(|balance| *balance >= 0.0),
        reference_number,
    };

    match assemble(fields) {
        Ok(record) => Some(record),
        Err(violation) => {
            debug!("dropping statement row ({violation}): {line:?}");
            None
        }
    }
}

/// Parses a page of OCR'd statement text into validated records, oldest
/// first. Non-row lines (headers, footers, OCR noise) produce nothing.
pub fn parse_statement(text: &str) -> Vec<TransactionRecord> {
    parse_statement_at(text, Local::now())
}

/// Like [`parse_statement`], but with an explicit reference instant.
pub fn parse_statement_at(text: &str, now: DateTime<Local>) -> Vec<TransactionRecord> {
    text.lines()
        .map(normalize::scrub)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_row(&line, now))
        .sorted_by_key(|record| record.timestamp_millis)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, TimeZone};
    use unindent::unindent;

    use super::*;

    fn fixed_now() -> DateTime<Local> {
        let midnight = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);
        Local.from_local_datetime(&midnight).earliest().unwrap()
    }

    fn day_of(record: &TransactionRecord) -> (i32, u32, u32) {
        let when = Local
            .timestamp_millis_opt(record.timestamp_millis)
            .single()
            .unwrap();
        (when.year(), when.month(), when.day())
    }

    #[test]
    fn test_full_rows_parse_and_sort_by_date() {
        let statement = unindent(
            "
            Kotak Mahindra Bank Statement
            02-04-2025 REFUND CREDITED SWIGGY REF046519653003 450.00 (Dr) 11,895.67
            01-04-2025 UPI PAYMENT GROCERY MART REF384380308617 2,500.00 (Dr) 12,345.67
            Page 1 of 2
            ",
        );

        let records = parse_statement_at(&statement, fixed_now());
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].counterparty, "UPI PAYMENT GROCERY MART");
        assert_eq!(day_of(&records[0]), (2025, 4, 1));
        assert_eq!(records[0].amount, 2500.0);
        assert_eq!(records[0].channel, Channel::Upi);
        assert_eq!(records[0].balance_after, Some(12345.67));
        assert_eq!(
            records[0].reference_number.as_deref(),
            Some("REF384380308617")
        );

        // The explicit (Dr) column overrides the CREDITED keyword.
        assert_eq!(records[1].direction, Direction::Debit);
        assert_eq!(day_of(&records[1]), (2025, 4, 2));
    }

    #[test]
    fn test_row_reference_stands_in_for_account() {
        let records = parse_statement_at(
            "01-04-2025 UPI PAYMENT GROCERY MART REF384380308617 2,500.00 (Dr) 12,345.67",
            fixed_now(),
        );
        assert_eq!(
            records[0].account_number.as_deref(),
            Some("REF384380308617")
        );
    }

    #[test]
    fn test_simple_upi_row_with_currency_token() {
        let records = parse_statement_at(
            "03/04/2025 UPI paid swiggy@ybl Rs. 320.00",
            fixed_now(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].direction, Direction::Debit);
        assert_eq!(records[0].amount, 320.0);
        assert_eq!(records[0].upi_handle.as_deref(), Some("swiggy@ybl"));
        assert_eq!(records[0].channel, Channel::Upi);
    }

    #[test]
    fn test_row_without_any_identifier_is_dropped() {
        let records = parse_statement_at(
            "05-04-2025 POS AMZN MART 1,299.00 (Dr) 9,500.00",
            fixed_now(),
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_trailing_flag_beats_keyword_inference() {
        // "RECEIVED" would infer a credit; the bare Dr token wins.
        let records = parse_statement_at(
            "07-04-2025 TRANSFER RECEIVED ravi@okaxis 500.00 Dr",
            fixed_now(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].direction, Direction::Debit);
        assert_eq!(records[0].upi_handle.as_deref(), Some("ravi@okaxis"));
    }

    #[test]
    fn test_atm_row_with_account_column() {
        let records = parse_statement_at(
            "06-04-2025 ATM WDL A/c 12345678 2,000.00 (Dr) 7,500.00",
            fixed_now(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].channel, Channel::Atm);
        assert_eq!(records[0].account_number.as_deref(), Some("12345678"));
        assert_eq!(records[0].direction, Direction::Debit);
    }

    #[test]
    fn test_dotted_date_row() {
        let records = parse_statement_at(
            "15.04.2025 NEFT SALARY CREDITED acme@hdfcbank 50,000.00",
            fixed_now(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].direction, Direction::Credit);
        assert_eq!(records[0].channel, Channel::Neft);
        assert_eq!(day_of(&records[0]), (2025, 4, 15));
    }

    #[test]
    fn test_statement_channel_vocabulary() {
        assert_eq!(statement_channel("CHQ DEP 445566"), Channel::Cheque);
        assert_eq!(statement_channel("CASH DEP BRANCH"), Channel::Cash);
        assert_eq!(statement_channel("CARD PURCHASE"), Channel::Pos);
        assert_eq!(statement_channel("SALARY TRANSFER"), Channel::BankTransfer);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let statement = unindent(
            "
            01-04-2025 UPI PAYMENT GROCERY MART REF384380308617 2,500.00 (Dr) 12,345.67
            03/04/2025 UPI paid swiggy@ybl 320.00
            ",
        );
        assert_eq!(
            parse_statement_at(&statement, fixed_now()),
            parse_statement_at(&statement, fixed_now())
        );
    }
}
