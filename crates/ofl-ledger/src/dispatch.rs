use ofl_store::LedgerStore;

use crate::error::DispatchError;
use crate::ledger::RecordLedger;
use crate::response::Response;

/// Operation names accepted by [`dispatch`].
pub mod ops {
    pub const CREATE: &str = "create";
    pub const GET: &str = "get";
    pub const HISTORY: &str = "history";
    pub const AMEND: &str = "amend";
}

/// Route a named operation to the record ledger.
///
/// Application-level failures come back as a `Response` with a nonzero
/// return code. Only an unrecognized operation name is an `Err`; that is
/// the one condition the transport reports as a failure.
pub fn dispatch<S: LedgerStore>(
    ledger: &RecordLedger<S>,
    operation: &str,
    args: &[String],
) -> Result<Response, DispatchError> {
    match operation {
        ops::CREATE => Ok(Response::Create(ledger.create(args))),
        ops::GET => Ok(Response::Get(ledger.get(args))),
        ops::HISTORY => Ok(Response::History(ledger.history(args))),
        ops::AMEND => Ok(Response::Amend(ledger.amend(args))),
        other => Err(DispatchError::UnknownOperation {
            operation: other.to_string(),
        }),
    }
}
