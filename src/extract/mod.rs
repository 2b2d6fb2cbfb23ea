//! Independent, single-responsibility field extractors. Each walks an
//! ordered candidate list from [`crate::patterns`] and returns the first
//! structurally valid match; a terminal non-match is `None` (or `Unknown`
//! for enums), never an error.

mod account;
mod amount;
mod balance;
mod channel;
mod counterparty;
mod reference;
mod timestamp;
mod upi;

pub use account::{account_info, AccountInfo};
pub use amount::amount;
pub use balance::balance;
pub use channel::channel;
pub use counterparty::counterparty;
pub use reference::reference_number;
pub use timestamp::timestamp;
pub(crate) use timestamp::resolve_millis;
pub use upi::upi_handle;
