use crate::operation::OperationDocument;

/// The `persistedQuery` request extension of the automatic persisted queries protocol.
///
/// A transport serializes this under `extensions.persistedQuery` and may omit the document
/// text on the first attempt; when the server answers with `PersistedQueryNotFound` the
/// transport retries with the full [`OperationDocument::document`] text attached.
#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQueryExtension {
    /// The protocol version, always `1`.
    pub version: u32,
    /// The lowercase hex SHA-256 hash of the full document text.
    pub sha256_hash: String,
}

impl PersistedQueryExtension {
    /// Creates the extension for an operation from its precomputed identifier.
    pub fn new(operation: &OperationDocument<'_>) -> Self {
        PersistedQueryExtension {
            version: 1,
            sha256_hash: operation.persisted_query_id().to_string(),
        }
    }
}
