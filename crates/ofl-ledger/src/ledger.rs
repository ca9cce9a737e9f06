use ofl_store::LedgerStore;
use ofl_types::{OrderFormRecord, RecordType};

use crate::error::ErrorKind;
use crate::response::{
    AmendResponse, CreateResponse, Failure, GetResponse, HistoryResponse, WriteAck,
};

/// Number of positional arguments for the write operations (create, amend).
const WRITE_ARG_COUNT: usize = 10;

/// The ten positional fields of a write operation, in wire order.
struct WriteArgs<'a> {
    unique_key: &'a str,
    user_id: &'a str,
    source_hash: &'a str,
    content_hash: &'a str,
    identity: &'a str,
    group_id: &'a str,
    company_id: &'a str,
    form_sequence_number: &'a str,
    record_type_text: &'a str,
    department_id: &'a str,
}

impl<'a> WriteArgs<'a> {
    fn parse(args: &'a [String]) -> Option<Self> {
        if args.len() != WRITE_ARG_COUNT {
            return None;
        }
        Some(Self {
            unique_key: &args[0],
            user_id: &args[1],
            source_hash: &args[2],
            content_hash: &args[3],
            identity: &args[4],
            group_id: &args[5],
            company_id: &args[6],
            form_sequence_number: &args[7],
            record_type_text: &args[8],
            department_id: &args[9],
        })
    }
}

fn unix_now_string() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Record lifecycle logic over a [`LedgerStore`].
///
/// Each operation runs under the store's unit-of-work guard, so its
/// read-then-write sequence commits as a single unit even when the store is
/// shared across threads. Every application-level failure is recovered into
/// a structured response; nothing here propagates past the operation
/// boundary.
pub struct RecordLedger<S> {
    store: S,
}

impl<S: LedgerStore> RecordLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a record under a never-before-written key.
    ///
    /// Create-only, never upsert: an existing key fails with
    /// `DuplicateKey` and leaves the stored record untouched. The record
    /// type is validated before the duplicate check.
    pub fn create(&self, args: &[String]) -> CreateResponse {
        let Some(input) = WriteArgs::parse(args) else {
            return CreateResponse::Failed(Failure::bare(ErrorKind::InvalidArgumentCount));
        };

        let record_type = match RecordType::parse_arg(input.record_type_text) {
            Ok(record_type) => record_type,
            Err(_) => {
                return CreateResponse::Failed(Failure::keyed(
                    input.unique_key,
                    ErrorKind::InvalidRecordType,
                ));
            }
        };

        let _uow = self.store.unit_of_work();

        match self.store.get(input.unique_key) {
            Err(err) => {
                tracing::warn!(unique_key = input.unique_key, error = %err, "store read failed");
                return CreateResponse::Failed(Failure::keyed(
                    input.unique_key,
                    ErrorKind::StoreAccess,
                ));
            }
            Ok(Some(_)) => {
                return CreateResponse::Failed(Failure::keyed(
                    input.unique_key,
                    ErrorKind::DuplicateKey,
                ));
            }
            Ok(None) => {}
        }

        let transaction_id = self.store.current_transaction_id();
        let timestamp = unix_now_string();
        let record = OrderFormRecord {
            transaction_id: transaction_id.clone(),
            content_hash: input.content_hash.to_string(),
            source_hash: input.source_hash.to_string(),
            identity: input.identity.to_string(),
            group_id: input.group_id.to_string(),
            company_id: input.company_id.to_string(),
            department_id: input.department_id.to_string(),
            user_id: input.user_id.to_string(),
            form_sequence_number: input.form_sequence_number.to_string(),
            record_type,
            timestamp: timestamp.clone(),
        };

        match self.commit(input.unique_key, &record) {
            Ok(()) => CreateResponse::Created(WriteAck {
                unique_key: input.unique_key.to_string(),
                transaction_id,
                timestamp,
            }),
            Err(kind) => CreateResponse::Failed(Failure::keyed(input.unique_key, kind)),
        }
    }

    /// Read the current version of a record.
    pub fn get(&self, args: &[String]) -> GetResponse {
        let [unique_key] = args else {
            return GetResponse::Failed(Failure::bare(ErrorKind::InvalidArgumentCount));
        };

        let _uow = self.store.unit_of_work();

        match self.fetch(unique_key) {
            Ok(record) => GetResponse::Found {
                unique_key: unique_key.to_string(),
                record,
            },
            Err(kind) => GetResponse::Failed(Failure::keyed(unique_key, kind)),
        }
    }

    /// Read every committed version of a record, oldest first.
    ///
    /// A key with no versions is reported as `RecordNotFound`; a store
    /// failure mid-scan discards the partial result. Each decoded version
    /// is cross-checked against the transaction id the store committed it
    /// under.
    pub fn history(&self, args: &[String]) -> HistoryResponse {
        let [unique_key] = args else {
            return HistoryResponse::Failed(Failure::bare(ErrorKind::InvalidArgumentCount));
        };

        let _uow = self.store.unit_of_work();

        let entries = match self.store.history_of(unique_key) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(unique_key = unique_key.as_str(), error = %err, "history scan failed to open");
                return HistoryResponse::Failed(Failure::keyed(
                    unique_key,
                    ErrorKind::StoreAccess,
                ));
            }
        };

        let mut versions = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(unique_key = unique_key.as_str(), error = %err, "history scan aborted");
                    return HistoryResponse::Failed(Failure::keyed(
                        unique_key,
                        ErrorKind::StoreAccess,
                    ));
                }
            };
            let record = match OrderFormRecord::from_bytes(&entry.value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(unique_key = unique_key.as_str(), error = %err, "corrupt version in history");
                    return HistoryResponse::Failed(Failure::keyed(
                        unique_key,
                        ErrorKind::StoreAccess,
                    ));
                }
            };
            // Every version is committed with the record's own transaction
            // id; a divergent entry means the stored bytes do not belong to
            // the write that committed them.
            if record.transaction_id != entry.transaction_id {
                tracing::warn!(
                    unique_key = unique_key.as_str(),
                    "transaction id divergence in history"
                );
                return HistoryResponse::Failed(Failure::keyed(
                    unique_key,
                    ErrorKind::StoreAccess,
                ));
            }
            versions.push(record);
        }

        if versions.is_empty() {
            return HistoryResponse::Failed(Failure::keyed(
                unique_key,
                ErrorKind::RecordNotFound,
            ));
        }

        HistoryResponse::Found {
            unique_key: unique_key.to_string(),
            versions,
        }
    }

    /// Amend the mutable fields of an existing record.
    ///
    /// The identity-scoping fields are compared against the stored record in
    /// strict order (`identity`, `groupId`, `companyId`,
    /// `formSequenceNumber`); the first mismatch determines the reported
    /// error. The record type is validated only after those checks pass.
    pub fn amend(&self, args: &[String]) -> AmendResponse {
        let Some(input) = WriteArgs::parse(args) else {
            return AmendResponse::Failed(Failure::bare(ErrorKind::InvalidArgumentCount));
        };

        let _uow = self.store.unit_of_work();

        let stored = match self.fetch(input.unique_key) {
            Ok(record) => record,
            Err(kind) => return AmendResponse::Failed(Failure::keyed(input.unique_key, kind)),
        };

        if let Some(kind) = Self::scoping_mismatch(&stored, &input) {
            return AmendResponse::Failed(Failure::keyed(input.unique_key, kind));
        }

        let record_type = match RecordType::parse_arg(input.record_type_text) {
            Ok(record_type) => record_type,
            Err(_) => {
                return AmendResponse::Failed(Failure::keyed(
                    input.unique_key,
                    ErrorKind::InvalidRecordType,
                ));
            }
        };

        let transaction_id = self.store.current_transaction_id();
        let timestamp = unix_now_string();
        let updated = OrderFormRecord {
            transaction_id: transaction_id.clone(),
            user_id: input.user_id.to_string(),
            source_hash: input.source_hash.to_string(),
            content_hash: input.content_hash.to_string(),
            department_id: input.department_id.to_string(),
            record_type,
            timestamp: timestamp.clone(),
            ..stored
        };

        match self.commit(input.unique_key, &updated) {
            Ok(()) => AmendResponse::Amended(WriteAck {
                unique_key: input.unique_key.to_string(),
                transaction_id,
                timestamp,
            }),
            Err(kind) => AmendResponse::Failed(Failure::keyed(input.unique_key, kind)),
        }
    }

    /// First identity-scoping mismatch between the stored record and the
    /// supplied fields, in the fixed check order.
    fn scoping_mismatch(stored: &OrderFormRecord, input: &WriteArgs<'_>) -> Option<ErrorKind> {
        if stored.identity != input.identity {
            Some(ErrorKind::IdentityMismatch)
        } else if stored.group_id != input.group_id {
            Some(ErrorKind::GroupMismatch)
        } else if stored.company_id != input.company_id {
            Some(ErrorKind::CompanyMismatch)
        } else if stored.form_sequence_number != input.form_sequence_number {
            Some(ErrorKind::FormSequenceMismatch)
        } else {
            None
        }
    }

    /// Read and decode the current record under `key`.
    ///
    /// Corrupt stored bytes are reported as a store access failure, not
    /// silently decoded into a zero-valued record.
    fn fetch(&self, key: &str) -> Result<OrderFormRecord, ErrorKind> {
        let bytes = match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Err(ErrorKind::RecordNotFound),
            Err(err) => {
                tracing::warn!(unique_key = key, error = %err, "store read failed");
                return Err(ErrorKind::StoreAccess);
            }
        };
        OrderFormRecord::from_bytes(&bytes).map_err(|err| {
            tracing::warn!(unique_key = key, error = %err, "corrupt stored record");
            ErrorKind::StoreAccess
        })
    }

    fn commit(&self, key: &str, record: &OrderFormRecord) -> Result<(), ErrorKind> {
        let bytes = record.to_bytes().map_err(|err| {
            tracing::warn!(unique_key = key, error = %err, "record encoding failed");
            ErrorKind::StoreAccess
        })?;
        self.store.put(key, &bytes).map_err(|err| {
            tracing::warn!(unique_key = key, error = %err, "store write failed");
            ErrorKind::StoreAccess
        })?;
        tracing::debug!(unique_key = key, "committed record version");
        Ok(())
    }
}
