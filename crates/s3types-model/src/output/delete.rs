/// A `<Deleted>` entry of a batch-delete response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedObject {
    pub key: String,
    /// Wire element `VersionId`.
    pub version_id: String,
    pub delete_marker: bool,
    /// Wire element `DeleteMarkerVersionId`.
    pub delete_marker_version_id: String,
}

/// An `<Error>` entry (failed deletion) of a batch-delete response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonDeletedObject {
    pub key: String,
    pub code: String,
    pub message: String,
    /// Wire element `VersionId`.
    pub version_id: String,
}

/// Response of DeleteObjects (`DeleteResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteMultiObjectsResult {
    /// `<Deleted>` entries, in document order.
    pub deleted_objects: Vec<DeletedObject>,
    /// `<Error>` entries, in document order.
    pub undeleted_objects: Vec<NonDeletedObject>,
}

impl DeleteMultiObjectsResult {
    /// Whether every requested key was deleted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.undeleted_objects.is_empty()
    }
}
