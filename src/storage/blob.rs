//! Single-blob local storage
//!
//! Each user's partition is one JSON file. A commit reads the blob, applies
//! the unit of work in memory and writes the result back atomically, so a
//! commit is all-or-nothing by construction.

use std::path::PathBuf;

use super::file_io::{read_json, write_json_atomic};
use super::snapshot::Snapshot;
use super::unit_of_work::UnitOfWork;
use super::PersistenceAdapter;
use crate::error::LedgerResult;
use crate::models::UserId;

pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    /// Create a blob store keeping one `<user>.json` per user under `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn blob_path(&self, user: &UserId) -> PathBuf {
        self.dir.join(format!("{}.json", user.as_str()))
    }
}

impl PersistenceAdapter for BlobStore {
    fn name(&self) -> &'static str {
        "blob"
    }

    fn load_all(&self, user: &UserId) -> LedgerResult<Snapshot> {
        let mut snapshot: Snapshot = read_json(self.blob_path(user))?;
        snapshot.normalize();
        tracing::debug!(
            user = %user,
            accounts = snapshot.accounts.len(),
            transactions = snapshot.transactions.len(),
            "loaded blob"
        );
        Ok(snapshot)
    }

    fn commit(&self, user: &UserId, work: &UnitOfWork) -> LedgerResult<()> {
        if work.is_empty() {
            return Ok(());
        }
        let path = self.blob_path(user);
        let mut snapshot: Snapshot = read_json(&path)?;
        work.apply_to(&mut snapshot);
        snapshot.normalize();
        write_json_atomic(&path, &snapshot)
    }
}
