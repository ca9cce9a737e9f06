//! Record lifecycle core for the Order-Form Ledger (OFL).
//!
//! This crate is the heart of OFL. It provides:
//! - `RecordLedger`, the four record operations over any [`ofl_store::LedgerStore`]:
//!   create (first-write-only), get, history, and amend
//! - The immutability rules: identity-scoping fields (`identity`, `groupId`,
//!   `companyId`, `formSequenceNumber`) are checked in strict order on every
//!   amendment, and the first mismatch wins
//! - The closed [`ErrorKind`] taxonomy carrying fixed return codes and
//!   messages as associated data, so codes and messages cannot drift apart
//! - Typed per-operation responses with their flat wire-document encoding
//! - A pure [`dispatch`] function mapping `(operation, args)` to a response,
//!   testable without any live store or transport

pub mod dispatch;
pub mod error;
pub mod ledger;
pub mod response;

pub use dispatch::{dispatch, ops};
pub use error::{DispatchError, ErrorKind};
pub use ledger::RecordLedger;
pub use response::{
    AmendResponse, CreateResponse, Failure, GetResponse, HistoryResponse, Response, WriteAck,
};
