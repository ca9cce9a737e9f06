use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Classification of the payload an order-form record describes.
///
/// Stored and transmitted as an integer. Only `0` (file) and `1` (string)
/// are valid; every other value is rejected at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum RecordType {
    /// A compressed document plus its attachments.
    #[default]
    File,
    /// A raw string payload.
    Text,
}

impl RecordType {
    /// Parse the textual `recordType` argument supplied by a caller.
    ///
    /// Unparsable text and out-of-range integers are both rejected; the
    /// ledger does not default silently.
    pub fn parse_arg(text: &str) -> Result<Self, TypeError> {
        let value: i64 = text
            .parse()
            .map_err(|_| TypeError::InvalidRecordType(text.to_string()))?;
        Self::try_from(value)
    }

    /// The wire integer for this record type.
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::File => 0,
            Self::Text => 1,
        }
    }
}

impl TryFrom<i64> for RecordType {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::File),
            1 => Ok(Self::Text),
            other => Err(TypeError::InvalidRecordType(other.to_string())),
        }
    }
}

impl From<RecordType> for i64 {
    fn from(rt: RecordType) -> Self {
        rt.as_i64()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// One committed version of an order-form provenance entry.
///
/// The record is keyed externally by a caller-chosen unique key; the key is
/// not part of the persisted value. `transaction_id` and `timestamp` are
/// assigned by the ledger on every write and never accepted from callers.
///
/// Of the remaining fields, `identity`, `group_id`, `company_id`, and
/// `form_sequence_number` are identity-scoping: they must hold the same
/// values across every version of a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormRecord {
    /// Identifier of the write that produced this version.
    pub transaction_id: String,
    /// Hash of the document plus all attachments.
    pub content_hash: String,
    /// Hash of the aggregated source data the document was derived from.
    pub source_hash: String,
    /// Name of the originating system.
    pub identity: String,
    pub group_id: String,
    pub company_id: String,
    pub department_id: String,
    /// Acting end-user identifier.
    pub user_id: String,
    /// Business document number.
    pub form_sequence_number: String,
    pub record_type: RecordType,
    /// Unix seconds at write time, string-encoded.
    pub timestamp: String,
}

impl OrderFormRecord {
    /// Encode this record to its persisted JSON form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Decode a record from its persisted JSON form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderFormRecord {
        OrderFormRecord {
            transaction_id: "tx-1".into(),
            content_hash: "ch1".into(),
            source_hash: "sh1".into(),
            identity: "sysA".into(),
            group_id: "g1".into(),
            company_id: "c1".into(),
            department_id: "d1".into(),
            user_id: "u1".into(),
            form_sequence_number: "F001".into(),
            record_type: RecordType::File,
            timestamp: "1700000000".into(),
        }
    }

    #[test]
    fn parse_arg_accepts_zero_and_one() {
        assert_eq!(RecordType::parse_arg("0").unwrap(), RecordType::File);
        assert_eq!(RecordType::parse_arg("1").unwrap(), RecordType::Text);
    }

    #[test]
    fn parse_arg_rejects_out_of_range() {
        assert_eq!(
            RecordType::parse_arg("2").unwrap_err(),
            TypeError::InvalidRecordType("2".into())
        );
        assert_eq!(
            RecordType::parse_arg("-1").unwrap_err(),
            TypeError::InvalidRecordType("-1".into())
        );
    }

    #[test]
    fn parse_arg_rejects_unparsable_text() {
        let err = RecordType::parse_arg("file").unwrap_err();
        assert_eq!(err, TypeError::InvalidRecordType("file".into()));
    }

    #[test]
    fn record_roundtrips_through_bytes() {
        let record = sample();
        let bytes = record.to_bytes().unwrap();
        let decoded = OrderFormRecord::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn persisted_field_names_are_camel_case() {
        let value: serde_json::Value =
            serde_json::from_slice(&sample().to_bytes().unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "transactionId",
            "contentHash",
            "sourceHash",
            "identity",
            "groupId",
            "companyId",
            "departmentId",
            "userId",
            "formSequenceNumber",
            "recordType",
            "timestamp",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj.len(), 11);
    }

    #[test]
    fn record_type_serializes_as_integer() {
        let value: serde_json::Value =
            serde_json::from_slice(&sample().to_bytes().unwrap()).unwrap();
        assert_eq!(value["recordType"], serde_json::json!(0));
    }

    #[test]
    fn malformed_bytes_are_rejected() {
        let err = OrderFormRecord::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, TypeError::Serialization(_)));
    }

    proptest::proptest! {
        #[test]
        fn roundtrip_preserves_arbitrary_field_content(
            content_hash in "\\PC*",
            user_id in "\\PC*",
            form_sequence_number in "\\PC*",
        ) {
            let mut record = sample();
            record.content_hash = content_hash;
            record.user_id = user_id;
            record.form_sequence_number = form_sequence_number;
            let decoded = OrderFormRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
            proptest::prop_assert_eq!(decoded, record);
        }
    }

    #[test]
    fn stored_record_with_invalid_type_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&sample().to_bytes().unwrap()).unwrap();
        value["recordType"] = serde_json::json!(7);
        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            OrderFormRecord::from_bytes(&bytes).unwrap_err(),
            TypeError::Serialization(_)
        ));
    }
}
