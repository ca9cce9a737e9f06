//! Typed operation responses and their flat wire-document encoding.
//!
//! Each operation returns a tagged response: a success variant carrying
//! typed fields, or a [`Failure`] carrying an [`ErrorKind`]. For transport
//! compatibility every response serializes to a flat JSON document with
//! `returnCode` and `message` fields; successes use code `0`.

use serde_json::{Map, Value};

use ofl_types::OrderFormRecord;

use crate::error::ErrorKind;

/// Return code reported for successful operations.
pub const RETURN_CODE_SUCCESS: i64 = 0;

/// Message reported for successful operations.
pub const MESSAGE_SUCCESS: &str = "success";

/// Receipt for a committed write (create or amend).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteAck {
    pub unique_key: String,
    pub transaction_id: String,
    /// Unix seconds at write time, string-encoded.
    pub timestamp: String,
}

/// A recovered application-level failure.
///
/// `unique_key` is present whenever the arity check passed; arity failures
/// happen before any argument can be trusted, so they carry no key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub unique_key: Option<String>,
    pub kind: ErrorKind,
}

impl Failure {
    /// Failure reported before the arguments could be read.
    pub fn bare(kind: ErrorKind) -> Self {
        Self {
            unique_key: None,
            kind,
        }
    }

    /// Failure scoped to a known unique key.
    pub fn keyed(unique_key: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            unique_key: Some(unique_key.into()),
            kind,
        }
    }
}

/// Outcome of [`RecordLedger::create`](crate::RecordLedger::create).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateResponse {
    Created(WriteAck),
    Failed(Failure),
}

/// Outcome of [`RecordLedger::get`](crate::RecordLedger::get).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GetResponse {
    Found {
        unique_key: String,
        record: OrderFormRecord,
    },
    Failed(Failure),
}

/// Outcome of [`RecordLedger::history`](crate::RecordLedger::history).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryResponse {
    Found {
        unique_key: String,
        /// Every committed version, oldest first.
        versions: Vec<OrderFormRecord>,
    },
    Failed(Failure),
}

/// Outcome of [`RecordLedger::amend`](crate::RecordLedger::amend).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmendResponse {
    Amended(WriteAck),
    Failed(Failure),
}

/// Response of any dispatched operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Create(CreateResponse),
    Get(GetResponse),
    History(HistoryResponse),
    Amend(AmendResponse),
}

fn wire_base(code: i64, message: &str) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("returnCode".into(), Value::from(code));
    doc.insert("message".into(), Value::from(message));
    doc
}

fn failure_wire(failure: &Failure) -> Value {
    let mut doc = wire_base(failure.kind.code(), failure.kind.message());
    if let Some(key) = &failure.unique_key {
        doc.insert("uniqueKey".into(), Value::from(key.clone()));
    }
    Value::Object(doc)
}

fn ack_wire(ack: &WriteAck) -> Value {
    let mut doc = wire_base(RETURN_CODE_SUCCESS, MESSAGE_SUCCESS);
    doc.insert("uniqueKey".into(), Value::from(ack.unique_key.clone()));
    doc.insert(
        "transactionId".into(),
        Value::from(ack.transaction_id.clone()),
    );
    doc.insert("timestamp".into(), Value::from(ack.timestamp.clone()));
    Value::Object(doc)
}

fn record_wire(record: &OrderFormRecord) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert(
        "transactionId".into(),
        Value::from(record.transaction_id.clone()),
    );
    doc.insert(
        "contentHash".into(),
        Value::from(record.content_hash.clone()),
    );
    doc.insert("sourceHash".into(), Value::from(record.source_hash.clone()));
    doc.insert("identity".into(), Value::from(record.identity.clone()));
    doc.insert("groupId".into(), Value::from(record.group_id.clone()));
    doc.insert("companyId".into(), Value::from(record.company_id.clone()));
    doc.insert(
        "departmentId".into(),
        Value::from(record.department_id.clone()),
    );
    doc.insert("userId".into(), Value::from(record.user_id.clone()));
    doc.insert(
        "formSequenceNumber".into(),
        Value::from(record.form_sequence_number.clone()),
    );
    doc.insert("recordType".into(), Value::from(record.record_type.as_i64()));
    doc.insert("timestamp".into(), Value::from(record.timestamp.clone()));
    doc
}

impl CreateResponse {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Created(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            Self::Created(ack) => ack_wire(ack),
            Self::Failed(failure) => failure_wire(failure),
        }
    }
}

impl GetResponse {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Found { .. } => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            Self::Found { unique_key, record } => {
                let mut doc = wire_base(RETURN_CODE_SUCCESS, MESSAGE_SUCCESS);
                doc.insert("uniqueKey".into(), Value::from(unique_key.clone()));
                doc.extend(record_wire(record));
                Value::Object(doc)
            }
            Self::Failed(failure) => failure_wire(failure),
        }
    }
}

impl HistoryResponse {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Found { .. } => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            Self::Found {
                unique_key,
                versions,
            } => {
                let mut doc = wire_base(RETURN_CODE_SUCCESS, MESSAGE_SUCCESS);
                doc.insert("uniqueKey".into(), Value::from(unique_key.clone()));
                let info: Vec<Value> = versions
                    .iter()
                    .map(|record| Value::Object(record_wire(record)))
                    .collect();
                doc.insert("info".into(), Value::Array(info));
                Value::Object(doc)
            }
            Self::Failed(failure) => failure_wire(failure),
        }
    }
}

impl AmendResponse {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Amended(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            Self::Amended(ack) => ack_wire(ack),
            Self::Failed(failure) => failure_wire(failure),
        }
    }
}

impl Response {
    /// The numeric return code this response reports on the wire.
    pub fn return_code(&self) -> i64 {
        self.failure()
            .map(|failure| failure.kind.code())
            .unwrap_or(RETURN_CODE_SUCCESS)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Create(r) => r.failure(),
            Self::Get(r) => r.failure(),
            Self::History(r) => r.failure(),
            Self::Amend(r) => r.failure(),
        }
    }

    /// Serialize to the flat key-value wire document.
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Create(r) => r.to_wire(),
            Self::Get(r) => r.to_wire(),
            Self::History(r) => r.to_wire(),
            Self::Amend(r) => r.to_wire(),
        }
    }
}
