//! Revisions Ledger Entity
//!
//! The ordered list of releases known to the remote host. On the wire it is
//! the JSON envelope `{ "data": [RevisionRecord, ...] }`, replaced wholesale
//! on every publish.

use serde::{Deserialize, Serialize};

use super::RevisionRecord;

/// Ordered sequence of revision records
///
/// At most one record is active. Mutations never reorder untouched records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<RevisionRecord>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    data: &'a [RevisionRecord],
}

#[derive(Deserialize)]
struct Envelope {
    data: Vec<RevisionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the remote `{ "data": [...] }` document
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let envelope: Envelope = serde_json::from_str(content)?;
        Ok(Self {
            records: envelope.data,
        })
    }

    /// Serialize to the remote `{ "data": [...] }` document
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&EnvelopeRef {
            data: &self.records,
        })
    }

    /// Ledger state after deploying `record`
    ///
    /// Any record with the same revision is dropped, every remaining record
    /// is deactivated in place, and `record` is appended as the only active
    /// entry. A redeployed revision therefore moves to the end.
    pub fn compute_next(&self, record: RevisionRecord) -> Ledger {
        let mut records: Vec<RevisionRecord> = self
            .records
            .iter()
            .filter(|r| r.revision != record.revision)
            .cloned()
            .map(|r| r.with_active(false))
            .collect();
        records.push(record.with_active(true));
        Ledger { records }
    }

    /// Ledger state after re-activating a revision that is already listed
    ///
    /// Order is kept as-is. Returns `None` when `revision` is unknown.
    pub fn activate_existing(&self, revision: &str) -> Option<Ledger> {
        self.get(revision)?;
        let records = self
            .records
            .iter()
            .cloned()
            .map(|r| {
                let active = r.revision == revision;
                r.with_active(active)
            })
            .collect();
        Some(Ledger { records })
    }

    /// The currently active record, if any
    pub fn active(&self) -> Option<&RevisionRecord> {
        self.records.iter().find(|r| r.active)
    }

    pub fn get(&self, revision: &str) -> Option<&RevisionRecord> {
        self.records.iter().find(|r| r.revision == revision)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RevisionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[RevisionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<RevisionRecord>> for Ledger {
    fn from(records: Vec<RevisionRecord>) -> Self {
        Self { records }
    }
}

impl IntoIterator for Ledger {
    type Item = RevisionRecord;
    type IntoIter = std::vec::IntoIter<RevisionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
