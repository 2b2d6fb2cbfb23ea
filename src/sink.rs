//! Persistence seam. Validated records leave the pipeline through a
//! [`TransactionSink`], keyed by user and by the direction-named
//! sub-collection the record belongs to. The in-memory implementation backs
//! the demo binary and tests; real storage lives behind the same trait.

use std::collections::HashMap;

use crate::record::TransactionRecord;

/// Destination for validated records. `append` stores a record under the
/// given user and the record's own direction, and returns a sink-assigned
/// identifier.
pub trait TransactionSink {
    type Id;

    fn append(&mut self, user: &str, record: TransactionRecord) -> Self::Id;
}

/// In-memory sink grouping records per `(user, collection)` pair, where the
/// collection is the record's direction name ("credit" or "debit").
#[derive(Debug, Default)]
pub struct MemorySink {
    collections: HashMap<(String, String), Vec<TransactionRecord>>,
    next_id: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Records stored for one user's direction-named collection, in append
    /// order.
    pub fn records(&self, user: &str, collection: &str) -> &[TransactionRecord] {
        self.collections
            .get(&(user.to_string(), collection.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl TransactionSink for MemorySink {
    type Id = u64;

    fn append(&mut self, user: &str, record: TransactionRecord) -> u64 {
        let collection = record
            .direction
            .collection()
            .unwrap_or("unknown")
            .to_string();

        self.collections
            .entry((user.to_string(), collection))
            .or_default()
            .push(record);

        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
