//! Shapes shared by several S3 response bodies.

use std::collections::BTreeMap;

/// `x-amz-meta-*` values keyed by name (prefix stripped).
///
/// Wire form: `<UserMetadata><Name>value</Name>...</UserMetadata>`.
pub type StringMap = BTreeMap<String, String>;

/// Object tags decoded from a URL-encoded query string.
///
/// Wire form: `<UserTags>k1=v1&amp;k2=v2</UserTags>`.
pub type UrlMap = BTreeMap<String, String>;

/// S3 Owner (bucket or object owner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub display_name: String,
    /// Wire element `ID`.
    pub id: String,
}

/// S3 Initiator of a multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Initiator {
    /// Wire element `ID`.
    pub id: String,
    pub display_name: String,
}

/// S3 CommonPrefix, returned only when a delimiter was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPrefix {
    pub prefix: String,
}

/// Erasure-coding shape of an object (wire element `Internal`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErasureInfo {
    /// Data blocks (wire `K`).
    pub k: i64,
    /// Parity blocks (wire `M`).
    pub m: i64,
}

/// S3 Bucket entry of a bucket listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketInfo {
    pub name: String,
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
    pub bucket_region: String,
}

/// A `<Contents>` entry of an object listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectInfo {
    /// Wire element `ETag`.
    pub e_tag: String,
    pub key: String,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub size: i64,
    pub owner: Owner,
    pub storage_class: String,
    /// Wire element `VersionId`.
    pub version_id: String,
    pub is_latest: bool,
    pub user_metadata: StringMap,
    pub user_tags: UrlMap,
    pub user_tag_count: i64,
    pub internal: Option<ErasureInfo>,
    pub checksum_crc32: String,
    pub checksum_crc32c: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_crc64nvme: String,
    pub checksum_type: String,
}

/// An `<Upload>` entry of a multipart-upload listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMultipartInfo {
    pub initiated: Option<chrono::DateTime<chrono::Utc>>,
    pub initiator: Initiator,
    pub owner: Owner,
    pub storage_class: String,
    pub key: String,
    pub size: i64,
    /// Wire element `UploadId`.
    pub upload_id: String,
}

/// A flat `<Error>` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Wire element `BucketName`.
    pub bucket_name: String,
    pub key: String,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
    pub region: String,
}
