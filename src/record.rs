use std::fmt::Display;

use chrono::{Local, TimeZone};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Which way the money moved. `Unknown` never survives validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Credit,
    Debit,
    Unknown,
}

impl Direction {
    /// Name of the direction-keyed sub-collection records are persisted
    /// under, for the two directions that can reach the sink.
    pub fn collection(&self) -> Option<&'static str> {
        match self {
            Direction::Credit => Some("credit"),
            Direction::Debit => Some("debit"),
            Direction::Unknown => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "CREDIT",
            Direction::Debit => "DEBIT",
            Direction::Unknown => "UNKNOWN",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment rail the transaction travelled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Upi,
    Neft,
    Imps,
    Rtgs,
    Atm,
    Pos,
    Cash,
    Cheque,
    BankTransfer,
    Unknown,
}

impl Channel {
    fn as_str(&self) -> &'static str {
        match self {
            Channel::Upi => "UPI",
            Channel::Neft => "NEFT",
            Channel::Imps => "IMPS",
            Channel::Rtgs => "RTGS",
            Channel::Atm => "ATM",
            Channel::Pos => "POS",
            Channel::Cash => "CASH",
            Channel::Cheque => "CHEQUE",
            Channel::BankTransfer => "BANK_TRANSFER",
            Channel::Unknown => "UNKNOWN",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The structured output of the pipeline. Absent fields are `None`, never a
/// sentinel domain value, so a genuinely zero balance is distinguishable
/// from "no balance reported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub direction: Direction,
    pub amount: f64,
    pub timestamp_millis: i64,
    /// Merchant or payer display name; the sentinel `"Unknown"` when no
    /// pattern resolved one.
    pub counterparty: String,
    /// Masked-account digit suffix, e.g. `"0589"` out of `XX0589`.
    pub account_number: Option<String>,
    /// Card digits. Extracted independently of `account_number`; both may
    /// be present and they are never conflated.
    pub card_number: Option<String>,
    pub upi_handle: Option<String>,
    pub channel: Channel,
    pub balance_after: Option<f64>,
    pub reference_number: Option<String>,
}

impl Display for TransactionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let direction = match self.direction {
            Direction::Credit => self.direction.as_str().green().bold(),
            Direction::Debit => self.direction.as_str().red().bold(),
            Direction::Unknown => self.direction.as_str().yellow().bold(),
        };

        write!(f, "{direction} ₹{:.2} via {}", self.amount, self.channel)?;
        write!(f, " | {}", self.counterparty.bold())?;
        if let Some(account) = &self.account_number {
            write!(f, " | a/c {account}")?;
        }
        if let Some(card) = &self.card_number {
            write!(f, " | card {card}")?;
        }
        if let Some(upi) = &self.upi_handle {
            write!(f, " | {upi}")?;
        }
        if let Some(reference) = &self.reference_number {
            write!(f, " | ref {reference}")?;
        }
        if let Some(balance) = self.balance_after {
            write!(f, " | bal ₹{balance:.2}")?;
        }
        if let Some(when) = Local.timestamp_millis_opt(self.timestamp_millis).single() {
            write!(f, " | {}", when.format("%Y-%m-%d %H:%M"))?;
        }

        Ok(())
    }
}
