//! Rule-based extraction of structured transaction records from Indian bank
//! SMS notifications and OCR'd bank-statement text. Regex and keyword
//! driven, fully deterministic; messages that are not transactions or that
//! fail validation are rejected, never partially emitted.
//!
//! ```
//! use finsift::{parse_message, Direction};
//!
//! let record = parse_message(
//!     "BOI -  Rs.410.00 Credited to your Ac XX0589 on 26-05-25 by UPI \
//!      ref No.589400102736.Avl Bal 4583.96",
//! )
//! .unwrap();
//!
//! assert_eq!(record.direction, Direction::Credit);
//! assert_eq!(record.amount, 410.0);
//! assert_eq!(record.account_number.as_deref(), Some("0589"));
//! ```

pub mod classify;
mod error;
pub mod extract;
mod normalize;
pub mod patterns;
mod pipeline;
pub mod record;
pub mod sink;
pub mod statement;

pub use error::{InvariantViolation, Rejection};
pub use normalize::{classification_text, scrub};
pub use pipeline::{parse_message, parse_message_at};
pub use record::{Channel, Direction, TransactionRecord};
pub use sink::{MemorySink, TransactionSink};
pub use statement::{parse_statement, parse_statement_at};
