/// An `<Object>` entry of a batch-delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObject {
    pub key: String,
    /// Wire element `VersionId`; omitted when empty.
    pub version_id: String,
}

impl DeleteObject {
    /// Delete the current version of `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: String::new(),
        }
    }

    /// Delete a specific version of `key`.
    #[must_use]
    pub fn with_version(key: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: version_id.into(),
        }
    }
}

/// Body of DeleteObjects (root element `Delete`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteMultiObjects {
    /// Ask the server to report only failures.
    pub quiet: bool,
    /// Wire element `Object`, repeated.
    pub objects: Vec<DeleteObject>,
}
