//! Decoding of ListObjectVersions responses.
//!
//! `<Version>` and `<DeleteMarker>` siblings are interleaved in the order the
//! server lists an object's history, newest first. Both decode into a single
//! [`Version`] list so that order survives; the delete-marker flag is taken
//! from the element name alone. Unlike the flat decoders in
//! [`crate::deserialize`], an unknown top-level child here is an error.

use quick_xml::Reader;

use s3types_model::types::{CommonPrefix, ErasureInfo, Owner};
use s3types_model::{ListVersionsResult, Version};

use crate::deserialize::{
    S3Deserialize, for_each_child, read_bool, read_i64, read_string_map, read_text_content,
    read_timestamp, read_url_map, skip_unknown,
};
use crate::error::XmlError;

impl S3Deserialize for Version {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut version = Version::default();
        for_each_child(reader, "Version", |reader, tag_name| {
            match tag_name {
                "ETag" => version.e_tag = read_text_content(reader)?,
                "IsLatest" => version.is_latest = read_bool(reader)?,
                "Key" => version.key = read_text_content(reader)?,
                "LastModified" => version.last_modified = read_timestamp(reader)?,
                "Owner" => version.owner = Owner::deserialize_xml(reader)?,
                "Size" => version.size = read_i64(reader)?,
                "StorageClass" => version.storage_class = read_text_content(reader)?,
                "VersionId" => version.version_id = read_text_content(reader)?,
                "UserMetadata" => version.user_metadata = read_string_map(reader)?,
                "UserTags" => version.user_tags = read_url_map(reader)?,
                "Internal" => version.internal = Some(ErasureInfo::deserialize_xml(reader)?),
                "ChecksumCRC32" => version.checksum_crc32 = read_text_content(reader)?,
                "ChecksumCRC32C" => version.checksum_crc32c = read_text_content(reader)?,
                "ChecksumSHA1" => version.checksum_sha1 = read_text_content(reader)?,
                "ChecksumSHA256" => version.checksum_sha256 = read_text_content(reader)?,
                "ChecksumCRC64NVME" => version.checksum_crc64nvme = read_text_content(reader)?,
                "ChecksumType" => version.checksum_type = read_text_content(reader)?,
                _ => skip_unknown(reader, "Version", tag_name)?,
            }
            Ok(())
        })?;
        Ok(version)
    }
}

impl S3Deserialize for ListVersionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        use quick_xml::events::Event;

        let mut result = ListVersionsResult::default();
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag_name = crate::deserialize::local_name(&e)?;
                    match tag_name.as_str() {
                        "Version" => result.push_version(Version::deserialize_xml(reader)?),
                        "DeleteMarker" => {
                            result.push_delete_marker(Version::deserialize_xml(reader)?);
                        }
                        "CommonPrefixes" => result
                            .common_prefixes
                            .push(CommonPrefix::deserialize_xml(reader)?),
                        "Name" => result.name = read_text_content(reader)?,
                        "Prefix" => result.prefix = read_text_content(reader)?,
                        "Delimiter" => result.delimiter = read_text_content(reader)?,
                        "MaxKeys" => result.max_keys = read_i64(reader)?,
                        "EncodingType" => result.encoding_type = read_text_content(reader)?,
                        "IsTruncated" => result.is_truncated = read_bool(reader)?,
                        "KeyMarker" => result.key_marker = read_text_content(reader)?,
                        "VersionIdMarker" => result.version_id_marker = read_text_content(reader)?,
                        "NextKeyMarker" => result.next_key_marker = read_text_content(reader)?,
                        "NextVersionIdMarker" => {
                            result.next_version_id_marker = read_text_content(reader)?;
                        }
                        other => {
                            tracing::warn!(element = other, "unrecognized element in ListVersionsResult");
                            return Err(XmlError::UnrecognizedElement(other.to_owned()));
                        }
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedEof("ListVersionsResult".to_owned()));
                }
                _ => {}
            }
        }

        tracing::debug!(
            bucket = %result.name,
            entries = result.versions.len(),
            delete_markers = result.delete_markers().count(),
            prefixes = result.common_prefixes.len(),
            truncated = result.is_truncated,
            "decoded version listing"
        );
        Ok(result)
    }
}
