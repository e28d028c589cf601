//! S3 XML deserialization: parsing S3-compatible response bodies into Rust types.
//!
//! This module provides the [`S3Deserialize`] trait and implementations for the
//! flat response shapes. Flat shapes are order-insensitive and skip child
//! elements they do not know. The object-version listing, which must keep
//! element order and rejects unknown children, lives in [`crate::versions`].

use std::cell::Cell;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::config::XmlConfig;
use crate::error::XmlError;

/// Trait for deserializing S3 types from XML.
///
/// Implementors parse XML elements from the reader and populate the struct fields.
/// The root element has already been consumed by the caller; the implementation
/// reads child elements until the matching end tag.
pub trait S3Deserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// The reader is positioned just after the opening tag of this element.
    /// The implementation should read all child content and return when
    /// the matching end tag is consumed.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or a value fails to parse.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize S3-compatible XML into a typed value using default settings.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml<T: S3Deserialize>(xml: &[u8]) -> Result<T, XmlError> {
    from_xml_with(&XmlConfig::default(), xml)
}

/// Deserialize S3-compatible XML into a typed value.
///
/// Finds the root element and delegates to the type's `S3Deserialize` implementation.
/// The root element's name is not checked.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml_with<T: S3Deserialize>(config: &XmlConfig, xml: &[u8]) -> Result<T, XmlError> {
    let _trim = TrimScope::enter(config.trim_text);
    let mut reader = Reader::from_reader(xml);
    let reader_config = reader.config_mut();
    // Reader-level trimming would cut the text around each entity reference.
    reader_config.trim_text(false);
    reader_config.check_end_names = config.check_end_names;
    // `<Prefix/>` then arrives as Start + End and needs no separate handling.
    reader_config.expand_empty_elements = true;

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

thread_local! {
    static TRIM_TEXT: Cell<bool> = const { Cell::new(false) };
}

/// Sets whether [`read_text_content`] trims values for the current decode.
#[derive(Debug)]
struct TrimScope {
    previous: bool,
}

impl TrimScope {
    fn enter(trim: bool) -> Self {
        Self {
            previous: TRIM_TEXT.replace(trim),
        }
    }
}

impl Drop for TrimScope {
    fn drop(&mut self) {
        TRIM_TEXT.set(self.previous);
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Local name of a start tag, without any namespace prefix.
pub(crate) fn local_name(start: &quick_xml::events::BytesStart<'_>) -> Result<String, XmlError> {
    let local = start.local_name();
    std::str::from_utf8(local.as_ref())
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Call `visit` with the local name of every child element until the
/// enclosing end tag.
///
/// `visit` must consume the child completely, either by reading it or with
/// [`skip_unknown`].
pub(crate) fn for_each_child<'a, F>(
    reader: &mut Reader<&'a [u8]>,
    context: &str,
    mut visit: F,
) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&'a [u8]>, &str) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag_name = local_name(&e)?;
                visit(reader, &tag_name)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(XmlError::UnexpectedEof(context.to_owned())),
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event. Text is
/// returned verbatim apart from entity resolution; text inside nested
/// elements is appended in document order. With `XmlConfig::trim_text` the
/// assembled value is trimmed once, after entities are resolved.
pub(crate) fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    let mut depth: u32 = 0;
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let resolved = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                if let Some(ch) = resolved {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let entity = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity: &{name};")))?;
                    text.push_str(entity);
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    if TRIM_TEXT.get() {
                        let trimmed = text.trim();
                        if trimmed.len() != text.len() {
                            return Ok(trimmed.to_owned());
                        }
                    }
                    return Ok(text);
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("text content".to_string()));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
pub(crate) fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("skipped element".to_string()));
            }
            _ => {}
        }
    }
}

/// Skip a child that a lenient decoder does not map.
pub(crate) fn skip_unknown(
    reader: &mut Reader<&[u8]>,
    context: &str,
    tag_name: &str,
) -> Result<(), XmlError> {
    tracing::trace!(context, element = tag_name, "skipping unknown element");
    skip_element(reader)
}

/// Parse a boolean the way S3 servers in the wild emit them.
///
/// Empty text is `false`.
pub(crate) fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s.trim() {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        other => Err(XmlError::ParseError(format!("invalid boolean: {other}"))),
    }
}

/// Parse an i32 from XML text. Empty text is zero.
pub(crate) fn parse_i32(s: &str) -> Result<i32, XmlError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }
    s.parse::<i32>()
        .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
}

/// Parse an i64 from XML text. Empty text is zero.
pub(crate) fn parse_i64(s: &str) -> Result<i64, XmlError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }
    s.parse::<i64>()
        .map_err(|e| XmlError::ParseError(format!("invalid i64 '{s}': {e}")))
}

/// Parse an ISO 8601 timestamp from XML text. Empty text is `None`.
pub(crate) fn parse_timestamp(
    s: &str,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, XmlError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            // Try parsing the S3 format: 2006-02-03T16:45:09.000Z
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map(Some)
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{s}': {e}")))
}

pub(crate) fn read_bool(reader: &mut Reader<&[u8]>) -> Result<bool, XmlError> {
    parse_bool(&read_text_content(reader)?)
}

pub(crate) fn read_i32(reader: &mut Reader<&[u8]>) -> Result<i32, XmlError> {
    parse_i32(&read_text_content(reader)?)
}

pub(crate) fn read_i64(reader: &mut Reader<&[u8]>) -> Result<i64, XmlError> {
    parse_i64(&read_text_content(reader)?)
}

pub(crate) fn read_timestamp(
    reader: &mut Reader<&[u8]>,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, XmlError> {
    parse_timestamp(&read_text_content(reader)?)
}

/// Read `<UserMetadata><Name>value</Name>...</UserMetadata>`.
pub(crate) fn read_string_map(reader: &mut Reader<&[u8]>) -> Result<StringMap, XmlError> {
    let mut map = StringMap::new();
    for_each_child(reader, "UserMetadata", |reader, tag_name| {
        let value = read_text_content(reader)?;
        map.insert(tag_name.to_owned(), value);
        Ok(())
    })?;
    Ok(map)
}

/// Read `<UserTags>k1=v1&amp;k2=v2</UserTags>`; the first value of a key wins.
pub(crate) fn read_url_map(reader: &mut Reader<&[u8]>) -> Result<UrlMap, XmlError> {
    let text = read_text_content(reader)?;
    let mut map = UrlMap::new();
    for (key, value) in form_urlencoded::parse(text.trim().as_bytes()) {
        map.entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    Ok(map)
}

/// Deserialize a list of items where each item is wrapped in the given element name.
fn deserialize_list<T: S3Deserialize>(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();
    for_each_child(reader, "list", |reader, tag_name| {
        if tag_name == item_tag {
            items.push(T::deserialize_xml(reader)?);
            Ok(())
        } else {
            skip_unknown(reader, item_tag, tag_name)
        }
    })?;
    Ok(items)
}

// ---------------------------------------------------------------------------
// S3Deserialize implementations for shared types
// ---------------------------------------------------------------------------

use s3types_model::types::{
    BucketInfo, CommonPrefix, ErasureInfo, ErrorResponse, Initiator, ObjectInfo,
    ObjectMultipartInfo, Owner, StringMap, UrlMap,
};
use s3types_model::{
    CompleteMultipartUploadResult, CopyObjectResult, DeleteMultiObjectsResult, DeletedObject,
    InitiateMultipartUploadResult, ListAllMyBucketsResult, ListAllMyDirectoryBucketsResult,
    ListBucketResult, ListBucketV2Result, ListMultipartUploadsResult, ListObjectPartsResult,
    NonDeletedObject, ObjectPart,
};

impl S3Deserialize for Owner {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut owner = Owner::default();
        for_each_child(reader, "Owner", |reader, tag_name| {
            match tag_name {
                "ID" => owner.id = read_text_content(reader)?,
                "DisplayName" => owner.display_name = read_text_content(reader)?,
                _ => skip_unknown(reader, "Owner", tag_name)?,
            }
            Ok(())
        })?;
        Ok(owner)
    }
}

impl S3Deserialize for Initiator {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut initiator = Initiator::default();
        for_each_child(reader, "Initiator", |reader, tag_name| {
            match tag_name {
                "ID" => initiator.id = read_text_content(reader)?,
                "DisplayName" => initiator.display_name = read_text_content(reader)?,
                _ => skip_unknown(reader, "Initiator", tag_name)?,
            }
            Ok(())
        })?;
        Ok(initiator)
    }
}

impl S3Deserialize for CommonPrefix {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut prefix = CommonPrefix::default();
        for_each_child(reader, "CommonPrefixes", |reader, tag_name| {
            match tag_name {
                "Prefix" => prefix.prefix = read_text_content(reader)?,
                _ => skip_unknown(reader, "CommonPrefixes", tag_name)?,
            }
            Ok(())
        })?;
        Ok(prefix)
    }
}

impl S3Deserialize for ErasureInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut info = ErasureInfo::default();
        for_each_child(reader, "Internal", |reader, tag_name| {
            match tag_name {
                "K" => info.k = read_i64(reader)?,
                "M" => info.m = read_i64(reader)?,
                _ => skip_unknown(reader, "Internal", tag_name)?,
            }
            Ok(())
        })?;
        Ok(info)
    }
}

impl S3Deserialize for BucketInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut bucket = BucketInfo::default();
        for_each_child(reader, "Bucket", |reader, tag_name| {
            match tag_name {
                "Name" => bucket.name = read_text_content(reader)?,
                "CreationDate" => bucket.creation_date = read_timestamp(reader)?,
                "BucketRegion" => bucket.bucket_region = read_text_content(reader)?,
                _ => skip_unknown(reader, "Bucket", tag_name)?,
            }
            Ok(())
        })?;
        Ok(bucket)
    }
}

impl S3Deserialize for ObjectInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut object = ObjectInfo::default();
        for_each_child(reader, "Contents", |reader, tag_name| {
            match tag_name {
                "ETag" => object.e_tag = read_text_content(reader)?,
                "Key" => object.key = read_text_content(reader)?,
                "LastModified" => object.last_modified = read_timestamp(reader)?,
                "Size" => object.size = read_i64(reader)?,
                "Owner" => object.owner = Owner::deserialize_xml(reader)?,
                "StorageClass" => object.storage_class = read_text_content(reader)?,
                "VersionId" => object.version_id = read_text_content(reader)?,
                "IsLatest" => object.is_latest = read_bool(reader)?,
                "UserMetadata" => object.user_metadata = read_string_map(reader)?,
                "UserTags" => object.user_tags = read_url_map(reader)?,
                "UserTagCount" => object.user_tag_count = read_i64(reader)?,
                "Internal" => object.internal = Some(ErasureInfo::deserialize_xml(reader)?),
                "ChecksumCRC32" => object.checksum_crc32 = read_text_content(reader)?,
                "ChecksumCRC32C" => object.checksum_crc32c = read_text_content(reader)?,
                "ChecksumSHA1" => object.checksum_sha1 = read_text_content(reader)?,
                "ChecksumSHA256" => object.checksum_sha256 = read_text_content(reader)?,
                "ChecksumCRC64NVME" => object.checksum_crc64nvme = read_text_content(reader)?,
                "ChecksumType" => object.checksum_type = read_text_content(reader)?,
                _ => skip_unknown(reader, "Contents", tag_name)?,
            }
            Ok(())
        })?;
        Ok(object)
    }
}

impl S3Deserialize for ObjectMultipartInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut upload = ObjectMultipartInfo::default();
        for_each_child(reader, "Upload", |reader, tag_name| {
            match tag_name {
                "Initiated" => upload.initiated = read_timestamp(reader)?,
                "Initiator" => upload.initiator = Initiator::deserialize_xml(reader)?,
                "Owner" => upload.owner = Owner::deserialize_xml(reader)?,
                "StorageClass" => upload.storage_class = read_text_content(reader)?,
                "Key" => upload.key = read_text_content(reader)?,
                "Size" => upload.size = read_i64(reader)?,
                "UploadId" => upload.upload_id = read_text_content(reader)?,
                _ => skip_unknown(reader, "Upload", tag_name)?,
            }
            Ok(())
        })?;
        Ok(upload)
    }
}

impl S3Deserialize for ErrorResponse {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut error = ErrorResponse::default();
        for_each_child(reader, "Error", |reader, tag_name| {
            match tag_name {
                "Code" => error.code = read_text_content(reader)?,
                "Message" => error.message = read_text_content(reader)?,
                "BucketName" => error.bucket_name = read_text_content(reader)?,
                "Key" => error.key = read_text_content(reader)?,
                "Resource" => error.resource = read_text_content(reader)?,
                "RequestId" => error.request_id = read_text_content(reader)?,
                "HostId" => error.host_id = read_text_content(reader)?,
                "Region" => error.region = read_text_content(reader)?,
                _ => skip_unknown(reader, "Error", tag_name)?,
            }
            Ok(())
        })?;
        Ok(error)
    }
}

// ---------------------------------------------------------------------------
// S3Deserialize implementations for listing responses
// ---------------------------------------------------------------------------

impl S3Deserialize for ListAllMyBucketsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListAllMyBucketsResult::default();
        for_each_child(reader, "ListAllMyBucketsResult", |reader, tag_name| {
            match tag_name {
                "Buckets" => result.buckets = deserialize_list(reader, "Bucket")?,
                "Owner" => result.owner = Owner::deserialize_xml(reader)?,
                _ => skip_unknown(reader, "ListAllMyBucketsResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for ListAllMyDirectoryBucketsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListAllMyDirectoryBucketsResult::default();
        for_each_child(
            reader,
            "ListAllMyDirectoryBucketsResult",
            |reader, tag_name| {
                match tag_name {
                    "Buckets" => result.buckets = deserialize_list(reader, "Bucket")?,
                    "ContinuationToken" => result.continuation_token = read_text_content(reader)?,
                    _ => skip_unknown(reader, "ListAllMyDirectoryBucketsResult", tag_name)?,
                }
                Ok(())
            },
        )?;
        Ok(result)
    }
}

impl S3Deserialize for ListBucketResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListBucketResult::default();
        for_each_child(reader, "ListBucketResult", |reader, tag_name| {
            match tag_name {
                "CommonPrefixes" => result
                    .common_prefixes
                    .push(CommonPrefix::deserialize_xml(reader)?),
                "Contents" => result.contents.push(ObjectInfo::deserialize_xml(reader)?),
                "Delimiter" => result.delimiter = read_text_content(reader)?,
                "EncodingType" => result.encoding_type = read_text_content(reader)?,
                "IsTruncated" => result.is_truncated = read_bool(reader)?,
                "Marker" => result.marker = read_text_content(reader)?,
                "MaxKeys" => result.max_keys = read_i64(reader)?,
                "Name" => result.name = read_text_content(reader)?,
                "NextMarker" => result.next_marker = read_text_content(reader)?,
                "Prefix" => result.prefix = read_text_content(reader)?,
                _ => skip_unknown(reader, "ListBucketResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for ListBucketV2Result {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListBucketV2Result::default();
        for_each_child(reader, "ListBucketResult", |reader, tag_name| {
            match tag_name {
                "CommonPrefixes" => result
                    .common_prefixes
                    .push(CommonPrefix::deserialize_xml(reader)?),
                "Contents" => result.contents.push(ObjectInfo::deserialize_xml(reader)?),
                "Delimiter" => result.delimiter = read_text_content(reader)?,
                "EncodingType" => result.encoding_type = read_text_content(reader)?,
                "IsTruncated" => result.is_truncated = read_bool(reader)?,
                "MaxKeys" => result.max_keys = read_i64(reader)?,
                "KeyCount" => result.key_count = read_i64(reader)?,
                "Name" => result.name = read_text_content(reader)?,
                "NextContinuationToken" => {
                    result.next_continuation_token = read_text_content(reader)?;
                }
                "ContinuationToken" => result.continuation_token = read_text_content(reader)?,
                "Prefix" => result.prefix = read_text_content(reader)?,
                "FetchOwner" => result.fetch_owner = read_text_content(reader)?,
                "StartAfter" => result.start_after = read_text_content(reader)?,
                _ => skip_unknown(reader, "ListBucketResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for ListMultipartUploadsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListMultipartUploadsResult::default();
        for_each_child(reader, "ListMultipartUploadsResult", |reader, tag_name| {
            match tag_name {
                "Bucket" => result.bucket = read_text_content(reader)?,
                "KeyMarker" => result.key_marker = read_text_content(reader)?,
                "UploadIdMarker" => result.upload_id_marker = read_text_content(reader)?,
                "NextKeyMarker" => result.next_key_marker = read_text_content(reader)?,
                "NextUploadIdMarker" => {
                    result.next_upload_id_marker = read_text_content(reader)?;
                }
                "EncodingType" => result.encoding_type = read_text_content(reader)?,
                "MaxUploads" => result.max_uploads = read_i64(reader)?,
                "IsTruncated" => result.is_truncated = read_bool(reader)?,
                "Upload" => result
                    .uploads
                    .push(ObjectMultipartInfo::deserialize_xml(reader)?),
                "Prefix" => result.prefix = read_text_content(reader)?,
                "Delimiter" => result.delimiter = read_text_content(reader)?,
                "CommonPrefixes" => result
                    .common_prefixes
                    .push(CommonPrefix::deserialize_xml(reader)?),
                _ => skip_unknown(reader, "ListMultipartUploadsResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// S3Deserialize implementations for multipart and copy responses
// ---------------------------------------------------------------------------

impl S3Deserialize for ObjectPart {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut part = ObjectPart::default();
        for_each_child(reader, "Part", |reader, tag_name| {
            match tag_name {
                "PartNumber" => part.part_number = read_i32(reader)?,
                "LastModified" => part.last_modified = read_timestamp(reader)?,
                "ETag" => part.e_tag = read_text_content(reader)?,
                "Size" => part.size = read_i64(reader)?,
                "ChecksumCRC32" => part.checksum_crc32 = read_text_content(reader)?,
                "ChecksumCRC32C" => part.checksum_crc32c = read_text_content(reader)?,
                "ChecksumSHA1" => part.checksum_sha1 = read_text_content(reader)?,
                "ChecksumSHA256" => part.checksum_sha256 = read_text_content(reader)?,
                "ChecksumCRC64NVME" => part.checksum_crc64nvme = read_text_content(reader)?,
                _ => skip_unknown(reader, "Part", tag_name)?,
            }
            Ok(())
        })?;
        Ok(part)
    }
}

impl S3Deserialize for ListObjectPartsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = ListObjectPartsResult::default();
        for_each_child(reader, "ListPartsResult", |reader, tag_name| {
            match tag_name {
                "Bucket" => result.bucket = read_text_content(reader)?,
                "Key" => result.key = read_text_content(reader)?,
                "UploadId" => result.upload_id = read_text_content(reader)?,
                "Initiator" => result.initiator = Initiator::deserialize_xml(reader)?,
                "Owner" => result.owner = Owner::deserialize_xml(reader)?,
                "StorageClass" => result.storage_class = read_text_content(reader)?,
                "PartNumberMarker" => result.part_number_marker = read_i32(reader)?,
                "NextPartNumberMarker" => result.next_part_number_marker = read_i32(reader)?,
                "MaxParts" => result.max_parts = read_i32(reader)?,
                "ChecksumAlgorithm" => result.checksum_algorithm = read_text_content(reader)?,
                "ChecksumType" => result.checksum_type = read_text_content(reader)?,
                "IsTruncated" => result.is_truncated = read_bool(reader)?,
                "Part" => result.object_parts.push(ObjectPart::deserialize_xml(reader)?),
                "EncodingType" => result.encoding_type = read_text_content(reader)?,
                _ => skip_unknown(reader, "ListPartsResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for InitiateMultipartUploadResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = InitiateMultipartUploadResult::default();
        for_each_child(reader, "InitiateMultipartUploadResult", |reader, tag_name| {
            match tag_name {
                "Bucket" => result.bucket = read_text_content(reader)?,
                "Key" => result.key = read_text_content(reader)?,
                "UploadId" => result.upload_id = read_text_content(reader)?,
                _ => skip_unknown(reader, "InitiateMultipartUploadResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for CompleteMultipartUploadResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = CompleteMultipartUploadResult::default();
        for_each_child(reader, "CompleteMultipartUploadResult", |reader, tag_name| {
            match tag_name {
                "Location" => result.location = read_text_content(reader)?,
                "Bucket" => result.bucket = read_text_content(reader)?,
                "Key" => result.key = read_text_content(reader)?,
                "ETag" => result.e_tag = read_text_content(reader)?,
                "ChecksumCRC32" => result.checksum_crc32 = read_text_content(reader)?,
                "ChecksumCRC32C" => result.checksum_crc32c = read_text_content(reader)?,
                "ChecksumSHA1" => result.checksum_sha1 = read_text_content(reader)?,
                "ChecksumSHA256" => result.checksum_sha256 = read_text_content(reader)?,
                "ChecksumCRC64NVME" => result.checksum_crc64nvme = read_text_content(reader)?,
                "ChecksumType" => result.checksum_type = read_text_content(reader)?,
                _ => skip_unknown(reader, "CompleteMultipartUploadResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

impl S3Deserialize for CopyObjectResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = CopyObjectResult::default();
        for_each_child(reader, "CopyObjectResult", |reader, tag_name| {
            match tag_name {
                "ETag" => result.e_tag = read_text_content(reader)?,
                "LastModified" => result.last_modified = read_timestamp(reader)?,
                _ => skip_unknown(reader, "CopyObjectResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// S3Deserialize implementations for batch delete
// ---------------------------------------------------------------------------

impl S3Deserialize for DeletedObject {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut deleted = DeletedObject::default();
        for_each_child(reader, "Deleted", |reader, tag_name| {
            match tag_name {
                "Key" => deleted.key = read_text_content(reader)?,
                "VersionId" => deleted.version_id = read_text_content(reader)?,
                "DeleteMarker" => deleted.delete_marker = read_bool(reader)?,
                "DeleteMarkerVersionId" => {
                    deleted.delete_marker_version_id = read_text_content(reader)?;
                }
                _ => skip_unknown(reader, "Deleted", tag_name)?,
            }
            Ok(())
        })?;
        Ok(deleted)
    }
}

impl S3Deserialize for NonDeletedObject {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut failed = NonDeletedObject::default();
        for_each_child(reader, "Error", |reader, tag_name| {
            match tag_name {
                "Key" => failed.key = read_text_content(reader)?,
                "Code" => failed.code = read_text_content(reader)?,
                "Message" => failed.message = read_text_content(reader)?,
                "VersionId" => failed.version_id = read_text_content(reader)?,
                _ => skip_unknown(reader, "Error", tag_name)?,
            }
            Ok(())
        })?;
        Ok(failed)
    }
}

impl S3Deserialize for DeleteMultiObjectsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = DeleteMultiObjectsResult::default();
        for_each_child(reader, "DeleteResult", |reader, tag_name| {
            match tag_name {
                "Deleted" => result
                    .deleted_objects
                    .push(DeletedObject::deserialize_xml(reader)?),
                "Error" => result
                    .undeleted_objects
                    .push(NonDeletedObject::deserialize_xml(reader)?),
                _ => skip_unknown(reader, "DeleteResult", tag_name)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}
