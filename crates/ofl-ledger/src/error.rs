use std::fmt;

use thiserror::Error;

/// Closed taxonomy of application-level failures.
///
/// Every kind carries its fixed numeric return code and caller-facing
/// message as associated data. All of these are recovered at the operation
/// boundary and reported as a structured response with a nonzero
/// `returnCode`; none of them crosses the transport as a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of positional arguments for the operation.
    InvalidArgumentCount,
    /// The Ledger Store failed on read, write, or history iteration.
    StoreAccess,
    /// Create attempted on a key that already holds a record.
    DuplicateKey,
    /// Get, history, or amend attempted on a key with no record.
    RecordNotFound,
    /// `recordType` outside the valid set `{0, 1}`.
    InvalidRecordType,
    /// Amendment supplied a different `identity` than the stored record.
    IdentityMismatch,
    /// Amendment supplied a different `groupId` than the stored record.
    GroupMismatch,
    /// Amendment supplied a different `companyId` than the stored record.
    CompanyMismatch,
    /// Amendment supplied a different `formSequenceNumber` than the stored
    /// record.
    FormSequenceMismatch,
}

impl ErrorKind {
    /// The fixed numeric return code reported on the wire.
    pub const fn code(self) -> i64 {
        match self {
            Self::InvalidArgumentCount => 101,
            Self::StoreAccess => 102,
            Self::DuplicateKey => 103,
            Self::RecordNotFound => 104,
            Self::InvalidRecordType => 105,
            Self::IdentityMismatch => 106,
            Self::GroupMismatch => 107,
            Self::CompanyMismatch => 108,
            Self::FormSequenceMismatch => 109,
        }
    }

    /// The fixed caller-facing message reported on the wire.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidArgumentCount => "Incorrect number of parameters",
            Self::StoreAccess => "An exception occurred while accessing data",
            Self::DuplicateKey => "This key value already exists",
            Self::RecordNotFound => "This key value has not been stored in the ledger",
            Self::InvalidRecordType => "The type field is greater than 1",
            Self::IdentityMismatch => "The identity field is different",
            Self::GroupMismatch => "The groupId field is different",
            Self::CompanyMismatch => "The companyId field is different",
            Self::FormSequenceMismatch => "The formSeqNo field is different",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors the dispatcher itself cannot recover into a structured response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The operation name is not one of `create`, `get`, `history`, `amend`.
    #[error("invalid ledger operation name: {operation}")]
    UnknownOperation { operation: String },
}
