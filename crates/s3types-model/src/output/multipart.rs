use crate::checksum::{ChecksumAlgorithm, ChecksumMode};
use crate::types::{CommonPrefix, Initiator, ObjectMultipartInfo, Owner};

/// A part already uploaded to a multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPart {
    pub part_number: i32,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Wire element `ETag`.
    pub e_tag: String,
    pub size: i64,
    pub checksum_crc32: String,
    pub checksum_crc32c: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_crc64nvme: String,
}

/// Response of ListParts (`ListPartsResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectPartsResult {
    pub bucket: String,
    pub key: String,
    /// Wire element `UploadId`.
    pub upload_id: String,

    pub initiator: Initiator,
    pub owner: Owner,

    pub storage_class: String,
    pub part_number_marker: i32,
    pub next_part_number_marker: i32,
    pub max_parts: i32,

    /// `CRC32`, `CRC32C`, ... or empty.
    pub checksum_algorithm: String,
    /// `FULL_OBJECT` or `COMPOSITE`; composite when unset.
    pub checksum_type: String,

    pub is_truncated: bool,
    /// Wire element `Part`, repeated.
    pub object_parts: Vec<ObjectPart>,

    pub encoding_type: String,
}

impl ListObjectPartsResult {
    /// The declared checksum algorithm, if any and recognised.
    #[must_use]
    pub fn algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm.parse().ok()
    }

    /// The checksum mode, `COMPOSITE` when unset.
    #[must_use]
    pub fn checksum_mode(&self) -> ChecksumMode {
        ChecksumMode::from(self.checksum_type.as_str())
    }
}

/// Response of ListMultipartUploads (`ListMultipartUploadsResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMultipartUploadsResult {
    pub bucket: String,
    pub key_marker: String,
    /// Wire element `UploadIdMarker`.
    pub upload_id_marker: String,
    pub next_key_marker: String,
    /// Wire element `NextUploadIdMarker`.
    pub next_upload_id_marker: String,
    pub encoding_type: String,
    pub max_uploads: i64,
    pub is_truncated: bool,
    /// Wire element `Upload`, repeated.
    pub uploads: Vec<ObjectMultipartInfo>,
    pub prefix: String,
    pub delimiter: String,
    pub common_prefixes: Vec<CommonPrefix>,
}

/// Response of CreateMultipartUpload (`InitiateMultipartUploadResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitiateMultipartUploadResult {
    pub bucket: String,
    pub key: String,
    /// Wire element `UploadId`.
    pub upload_id: String,
}

/// Response of CompleteMultipartUpload (`CompleteMultipartUploadResult`).
///
/// Checksums here are checksums of the part checksums unless
/// `checksum_type` is `FULL_OBJECT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadResult {
    pub location: String,
    pub bucket: String,
    pub key: String,
    /// Wire element `ETag`.
    pub e_tag: String,
    pub checksum_crc32: String,
    pub checksum_crc32c: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_crc64nvme: String,
    pub checksum_type: String,
}

/// Response of CopyObject / UploadPartCopy (`CopyObjectResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    /// Wire element `ETag`.
    pub e_tag: String,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}
