use crate::checksum::ChecksumMode;
use crate::types::{CommonPrefix, ErasureInfo, ObjectInfo, Owner, StringMap, UrlMap};

/// One entry of an object's version history: a live version or a delete marker.
///
/// Both kinds share every field; [`Version::is_delete_marker`] tells them
/// apart. The flag reflects only which element produced the record and is
/// never derived from the other fields. It can only be set by appending the
/// record to a listing with [`ListVersionsResult::push_delete_marker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    /// Wire element `ETag`.
    pub e_tag: String,
    pub is_latest: bool,
    pub key: String,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub owner: Owner,
    pub size: i64,
    pub storage_class: String,
    /// Wire element `VersionId`.
    pub version_id: String,
    pub user_metadata: StringMap,
    pub user_tags: UrlMap,
    pub internal: Option<ErasureInfo>,
    pub checksum_crc32: String,
    pub checksum_crc32c: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_crc64nvme: String,
    /// `FULL_OBJECT`, `COMPOSITE`, or empty.
    pub checksum_type: String,

    pub(crate) is_delete_marker: bool,
}

impl Version {
    /// Whether this record came from a `<DeleteMarker>` element.
    #[must_use]
    pub fn is_delete_marker(&self) -> bool {
        self.is_delete_marker
    }

    /// The checksum mode, `COMPOSITE` when unset.
    #[must_use]
    pub fn checksum_mode(&self) -> ChecksumMode {
        ChecksumMode::from(self.checksum_type.as_str())
    }
}

/// Response of ListObjectVersions (`ListVersionsResult`).
///
/// `versions` keeps the exact order in which the server emitted `<Version>`
/// and `<DeleteMarker>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVersionsResult {
    pub versions: Vec<Version>,

    pub common_prefixes: Vec<CommonPrefix>,
    pub name: String,
    pub prefix: String,
    pub delimiter: String,
    pub max_keys: i64,
    pub encoding_type: String,
    pub is_truncated: bool,
    pub key_marker: String,
    /// Wire element `VersionIdMarker`.
    pub version_id_marker: String,
    pub next_key_marker: String,
    /// Wire element `NextVersionIdMarker`.
    pub next_version_id_marker: String,
}

impl ListVersionsResult {
    /// Append an entry read from a `<Version>` element.
    pub fn push_version(&mut self, mut version: Version) {
        version.is_delete_marker = false;
        self.versions.push(version);
    }

    /// Append an entry read from a `<DeleteMarker>` element.
    pub fn push_delete_marker(&mut self, mut marker: Version) {
        marker.is_delete_marker = true;
        self.versions.push(marker);
    }

    /// Delete markers, in listing order.
    pub fn delete_markers(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter().filter(|v| v.is_delete_marker())
    }

    /// Live versions, in listing order.
    pub fn live_versions(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter().filter(|v| !v.is_delete_marker())
    }
}

/// Response of ListObjects (V1, `ListBucketResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketResult {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<ObjectInfo>,
    pub delimiter: String,
    pub encoding_type: String,
    pub is_truncated: bool,
    pub marker: String,
    pub max_keys: i64,
    pub name: String,
    /// Only returned when a delimiter was requested; otherwise continue
    /// from the last key of `contents`.
    pub next_marker: String,
    pub prefix: String,
}

/// Response of ListObjectsV2 (`ListBucketResult` with continuation tokens).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketV2Result {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<ObjectInfo>,
    pub delimiter: String,
    pub encoding_type: String,
    pub is_truncated: bool,
    pub max_keys: i64,
    pub key_count: i64,
    pub name: String,
    pub next_continuation_token: String,
    pub continuation_token: String,
    pub prefix: String,

    /// Reserved; decoded for wire compatibility only.
    pub fetch_owner: String,
    /// Reserved; decoded for wire compatibility only.
    pub start_after: String,
}
