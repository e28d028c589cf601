//! Typed records for S3-compatible XML bodies.
//!
//! The records here are plain data: every field that is absent on the wire
//! holds its zero value (`""`, `0`, `false`, `None`). Decoding and encoding
//! live in `s3types-xml`; this crate only defines the shapes and the
//! checksum accessor shared by parts, completed parts, and object versions.
//!
//! # Layout
//!
//! - [`types`]: shared shapes (owners, prefixes, listing entries, maps)
//! - [`output`]: response bodies decoded from the server
//! - [`input`]: request bodies encoded by the client
//! - [`checksum`]: algorithm catalog and the [`ChecksumAccess`] accessor

#![allow(missing_docs)]

pub mod checksum;
pub mod input;
pub mod output;
pub mod types;

pub use checksum::{
    ChecksumAccess, ChecksumAlgorithm, ChecksumError, ChecksumMode, ChecksumSpec, ChecksumType,
    ParseChecksumAlgorithmError,
};
pub use input::{
    CompleteMultipartUpload, CompletePart, CreateBucketConfiguration, DeleteMultiObjects,
    DeleteObject,
};
pub use output::{
    CompleteMultipartUploadResult, CopyObjectResult, DeleteMultiObjectsResult, DeletedObject,
    InitiateMultipartUploadResult, ListAllMyBucketsResult, ListAllMyDirectoryBucketsResult,
    ListBucketResult, ListBucketV2Result, ListMultipartUploadsResult, ListObjectPartsResult,
    ListVersionsResult, NonDeletedObject, ObjectPart, Version,
};
pub use types::{
    BucketInfo, CommonPrefix, ErasureInfo, ErrorResponse, Initiator, ObjectInfo,
    ObjectMultipartInfo, Owner, StringMap, UrlMap,
};
