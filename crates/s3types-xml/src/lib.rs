//! XML codec for S3-compatible response and request bodies.
//!
//! Decodes server responses into the records of `s3types-model` and encodes
//! the request bodies a client sends.
//!
//! # Key components
//!
//! - [`S3Deserialize`] trait and [`from_xml`] for parsing response bodies
//! - [`S3Serialize`], [`XmlRoot`] and [`encode_request`] for writing request bodies
//! - [`XmlConfig`] for reader and writer settings
//!
//! # Decoding rules
//!
//! - Elements are matched by local name; namespaces and prefixes are ignored
//! - Absent elements leave the zero value; unknown elements are skipped
//! - `ListVersionsResult` keeps `<Version>` / `<DeleteMarker>` order and
//!   fails on unknown top-level elements
//!
//! ```
//! use s3types_model::ListVersionsResult;
//!
//! let body = b"<ListVersionsResult>\
//!     <Version><Key>a</Key><VersionId>2</VersionId></Version>\
//!     <DeleteMarker><Key>a</Key><VersionId>1</VersionId></DeleteMarker>\
//! </ListVersionsResult>";
//! let listing: ListVersionsResult = s3types_xml::from_xml(body).unwrap();
//! assert!(listing.versions[1].is_delete_marker());
//! ```

pub mod config;
pub mod deserialize;
pub mod error;
pub mod serialize;
mod versions;

pub use config::XmlConfig;
pub use deserialize::{S3Deserialize, from_xml, from_xml_with};
pub use error::XmlError;
pub use serialize::{
    S3_NAMESPACE, S3Serialize, XmlRoot, encode_request, encode_request_with, to_xml, to_xml_with,
};
