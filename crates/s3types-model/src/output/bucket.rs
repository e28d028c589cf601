use crate::types::{BucketInfo, Owner};

/// Response of ListBuckets (`ListAllMyBucketsResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllMyBucketsResult {
    /// Entries of the `<Buckets>` wrapper.
    pub buckets: Vec<BucketInfo>,
    pub owner: Owner,
}

/// Response of ListDirectoryBuckets (`ListAllMyDirectoryBucketsResult`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAllMyDirectoryBucketsResult {
    /// Entries of the `<Buckets>` wrapper.
    pub buckets: Vec<BucketInfo>,
    pub continuation_token: String,
}
