//! S3 XML serialization: converting request bodies to S3-compatible XML.
//!
//! This module provides the [`S3Serialize`] trait and implementations for the
//! request bodies a client sends. The output follows the S3 RestXml
//! conventions:
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - Booleans: lowercase `true`/`false`
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - Optional values are omitted when empty

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use s3types_model::{
    CompleteMultipartUpload, CompletePart, CreateBucketConfiguration, DeleteMultiObjects,
    DeleteObject,
};

use crate::config::XmlConfig;
use crate::error::XmlError;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Trait for serializing S3 types to XML.
///
/// Implementors write their content as child elements inside the current XML context.
/// The root element name and namespace are handled by the top-level [`to_xml`] function.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait S3Serialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// A request body with a fixed root element.
pub trait XmlRoot: S3Serialize {
    /// Name of the document's root element.
    const ROOT_ELEMENT: &'static str;
}

/// Serialize a value as S3-compatible XML with declaration and namespace.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: S3Serialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    to_xml_with(&XmlConfig::default(), root_element, value)
}

/// Serialize a value as S3-compatible XML under `root_element`.
///
/// The declaration and indentation follow `config`; the root always carries
/// the S3 namespace.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml_with<T: S3Serialize>(
    config: &XmlConfig,
    root_element: &str,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = if config.indent > 0 {
        Writer::new_with_indent(&mut buf, b' ', config.indent)
    } else {
        Writer::new(&mut buf)
    };

    if config.write_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    writer
        .create_element(root_element)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

/// Encode a request body under its own root element.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn encode_request<T: XmlRoot>(value: &T) -> Result<Vec<u8>, XmlError> {
    encode_request_with(&XmlConfig::default(), value)
}

/// Encode a request body under its own root element with explicit settings.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn encode_request_with<T: XmlRoot>(
    config: &XmlConfig,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let body = to_xml_with(config, T::ROOT_ELEMENT, value)?;
    tracing::trace!(root = T::ROOT_ELEMENT, bytes = body.len(), "encoded request body");
    Ok(body)
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the text is non-empty.
fn write_non_empty<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    if !text.is_empty() {
        write_text_element(writer, tag, text)?;
    }
    Ok(())
}

fn write_bool<W: Write>(writer: &mut Writer<W>, tag: &str, value: bool) -> io::Result<()> {
    write_text_element(writer, tag, if value { "true" } else { "false" })
}

// ---------------------------------------------------------------------------
// S3Serialize implementations for request bodies
// ---------------------------------------------------------------------------

impl S3Serialize for CreateBucketConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "LocationConstraint", &self.location)
    }
}

impl XmlRoot for CreateBucketConfiguration {
    const ROOT_ELEMENT: &'static str = "CreateBucketConfiguration";
}

impl S3Serialize for DeleteObject {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Key", &self.key)?;
        write_non_empty(writer, "VersionId", &self.version_id)
    }
}

impl S3Serialize for DeleteMultiObjects {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_bool(writer, "Quiet", self.quiet)?;
        for object in &self.objects {
            writer
                .create_element("Object")
                .write_inner_content(|w| object.serialize_xml(w))?;
        }
        Ok(())
    }
}

impl XmlRoot for DeleteMultiObjects {
    const ROOT_ELEMENT: &'static str = "Delete";
}

impl S3Serialize for CompletePart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "PartNumber", &self.part_number.to_string())?;
        write_text_element(writer, "ETag", &self.e_tag)?;
        write_non_empty(writer, "ChecksumCRC32", &self.checksum_crc32)?;
        write_non_empty(writer, "ChecksumCRC32C", &self.checksum_crc32c)?;
        write_non_empty(writer, "ChecksumSHA1", &self.checksum_sha1)?;
        write_non_empty(writer, "ChecksumSHA256", &self.checksum_sha256)?;
        write_non_empty(writer, "ChecksumCRC64NVME", &self.checksum_crc64nvme)
    }
}

impl S3Serialize for CompleteMultipartUpload {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for part in &self.parts {
            writer
                .create_element("Part")
                .write_inner_content(|w| part.serialize_xml(w))?;
        }
        Ok(())
    }
}

impl XmlRoot for CompleteMultipartUpload {
    const ROOT_ELEMENT: &'static str = "CompleteMultipartUpload";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str<T: XmlRoot>(value: &T) -> String {
        let xml = encode_request(value).expect("serialization should succeed");
        String::from_utf8(xml).expect("valid UTF-8")
    }

    #[test]
    fn test_should_serialize_create_bucket_configuration() {
        let xml_str = encode_str(&CreateBucketConfiguration::new("eu-west-1"));

        assert!(xml_str.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml_str.contains(
            "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">"
        ));
        assert!(xml_str.contains("<LocationConstraint>eu-west-1</LocationConstraint>"));
    }

    #[test]
    fn test_should_always_write_location_constraint() {
        let xml_str = encode_str(&CreateBucketConfiguration::default());
        assert!(xml_str.contains("<LocationConstraint></LocationConstraint>"));
    }

    #[test]
    fn test_should_serialize_delete_request() {
        let request = DeleteMultiObjects {
            quiet: false,
            objects: vec![
                DeleteObject::new("a.txt"),
                DeleteObject::with_version("b.txt", "v1"),
            ],
        };

        let xml_str = encode_str(&request);
        assert!(xml_str.contains("<Delete xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">"));
        assert!(xml_str.contains("<Quiet>false</Quiet>"));
        assert!(xml_str.contains("<Object><Key>a.txt</Key></Object>"));
        assert!(xml_str.contains("<Object><Key>b.txt</Key><VersionId>v1</VersionId></Object>"));
        assert!(xml_str.ends_with("</Delete>"));
    }

    #[test]
    fn test_should_serialize_quiet_delete() {
        let request = DeleteMultiObjects {
            quiet: true,
            objects: vec![DeleteObject::new("a.txt")],
        };
        assert!(encode_str(&request).contains("<Quiet>true</Quiet>"));
    }

    #[test]
    fn test_should_serialize_complete_multipart_upload() {
        let request = CompleteMultipartUpload {
            parts: vec![
                CompletePart {
                    part_number: 1,
                    e_tag: "etag-1".to_string(),
                    checksum_crc32c: "mnG7TA==".to_string(),
                    ..CompletePart::default()
                },
                CompletePart {
                    part_number: 2,
                    e_tag: "etag-2".to_string(),
                    ..CompletePart::default()
                },
            ],
        };

        let xml_str = encode_str(&request);
        assert!(xml_str.contains(
            "<Part><PartNumber>1</PartNumber><ETag>etag-1</ETag><ChecksumCRC32C>mnG7TA==</ChecksumCRC32C></Part>"
        ));
        assert!(xml_str.contains("<Part><PartNumber>2</PartNumber><ETag>etag-2</ETag></Part>"));
        assert!(!xml_str.contains("ChecksumSHA256"));
        assert!(!xml_str.contains("ChecksumCRC32<"));
    }

    #[test]
    fn test_should_serialize_xml_special_characters() {
        let request = DeleteMultiObjects {
            quiet: false,
            objects: vec![DeleteObject::new("a&b<c>.txt")],
        };

        let xml_str = encode_str(&request);
        assert!(xml_str.contains("a&amp;b&lt;c&gt;.txt"));
    }

    #[test]
    fn test_should_respect_writer_config() {
        let config = XmlConfig::builder()
            .write_declaration(false)
            .indent(2)
            .build();
        let xml = encode_request_with(&config, &CreateBucketConfiguration::new("us-east-2"))
            .expect("serialization should succeed");
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");

        assert!(xml_str.starts_with("<CreateBucketConfiguration"));
        assert!(xml_str.contains("\n  <LocationConstraint>us-east-2</LocationConstraint>"));
    }

    #[test]
    fn test_should_serialize_under_custom_root() {
        let xml = to_xml("Custom", &CreateBucketConfiguration::new("x"))
            .expect("serialization should succeed");
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");
        assert!(xml_str.contains("<Custom xmlns="));
    }
}
