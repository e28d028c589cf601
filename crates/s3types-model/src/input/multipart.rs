/// A part submitted to CompleteMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletePart {
    pub part_number: i32,
    /// Wire element `ETag`.
    pub e_tag: String,

    // Each checksum element is omitted when empty.
    pub checksum_crc32: String,
    pub checksum_crc32c: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_crc64nvme: String,
}

/// Body of CompleteMultipartUpload; parts must be in ascending part-number order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUpload {
    /// Wire element `Part`, repeated.
    pub parts: Vec<CompletePart>,
}
