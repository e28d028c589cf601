//! Response bodies decoded from the server.

mod bucket;
mod delete;
mod list;
mod multipart;

pub use bucket::{ListAllMyBucketsResult, ListAllMyDirectoryBucketsResult};
pub use delete::{DeleteMultiObjectsResult, DeletedObject, NonDeletedObject};
pub use list::{ListBucketResult, ListBucketV2Result, ListVersionsResult, Version};
pub use multipart::{
    CompleteMultipartUploadResult, CopyObjectResult, InitiateMultipartUploadResult,
    ListMultipartUploadsResult, ListObjectPartsResult, ObjectPart,
};
