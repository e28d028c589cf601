//! Request bodies encoded by the client.

mod bucket;
mod delete;
mod multipart;

pub use bucket::CreateBucketConfiguration;
pub use delete::{DeleteMultiObjects, DeleteObject};
pub use multipart::{CompleteMultipartUpload, CompletePart};
