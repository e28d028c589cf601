//! Checksum catalog and per-record checksum access.
//!
//! S3 records carry up to five optional base64 checksum strings, one per
//! algorithm family. [`ChecksumAccess`] selects the string matching a
//! requested algorithm and, through [`ChecksumAccess::checksum_raw`], decodes
//! it and checks the decoded length against the algorithm's raw digest size.
//!
//! The accessor only needs two capabilities from an algorithm, captured by
//! [`ChecksumSpec`]. [`ChecksumAlgorithm`] and [`ChecksumType`] implement it.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::input::CompletePart;
use crate::output::{CompleteMultipartUploadResult, ObjectPart, Version};

// ---------------------------------------------------------------------------
// ChecksumAlgorithm
// ---------------------------------------------------------------------------

/// Checksum algorithm families understood by S3 (MD5 is only used for ETags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    /// CRC-32 (IEEE 802.3).
    #[serde(rename = "CRC32")]
    Crc32,
    /// CRC-32C (Castagnoli).
    #[serde(rename = "CRC32C")]
    Crc32c,
    /// SHA-1.
    #[serde(rename = "SHA1")]
    Sha1,
    /// SHA-256.
    #[serde(rename = "SHA256")]
    Sha256,
    /// CRC-64/NVME.
    #[serde(rename = "CRC64NVME")]
    Crc64Nvme,
}

impl ChecksumAlgorithm {
    /// Order in which [`ChecksumAccess::checksum`] probes a [`ChecksumSpec`].
    pub const PROBE_ORDER: [Self; 5] = [
        Self::Crc32c,
        Self::Crc32,
        Self::Sha1,
        Self::Sha256,
        Self::Crc64Nvme,
    ];

    /// Return the canonical string used in S3 headers and XML.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC32",
            Self::Crc32c => "CRC32C",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Crc64Nvme => "CRC64NVME",
        }
    }

    /// Size in bytes of a raw (not base64) digest.
    #[must_use]
    pub fn raw_byte_len(&self) -> usize {
        match self {
            Self::Crc32 | Self::Crc32c => 4,
            Self::Crc64Nvme => 8,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`ChecksumAlgorithm`] from a string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown checksum algorithm: {0}")]
pub struct ParseChecksumAlgorithmError(String);

impl FromStr for ChecksumAlgorithm {
    type Err = ParseChecksumAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CRC32" => Ok(Self::Crc32),
            "CRC32C" => Ok(Self::Crc32c),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "CRC64NVME" => Ok(Self::Crc64Nvme),
            _ => Err(ParseChecksumAlgorithmError(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// ChecksumMode / ChecksumType
// ---------------------------------------------------------------------------

/// Whether a checksum covers the whole object or is built from part checksums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumMode {
    /// Checksum of the concatenated part checksums. Assumed when unset.
    #[default]
    #[serde(rename = "COMPOSITE")]
    Composite,
    /// Checksum of the full object content.
    #[serde(rename = "FULL_OBJECT")]
    FullObject,
}

impl ChecksumMode {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Composite => "COMPOSITE",
            Self::FullObject => "FULL_OBJECT",
        }
    }
}

impl fmt::Display for ChecksumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ChecksumMode {
    fn from(s: &str) -> Self {
        match s {
            "FULL_OBJECT" => Self::FullObject,
            _ => Self::default(),
        }
    }
}

/// An algorithm family together with its checksum mode.
///
/// Two types with the same family but different modes are the same family
/// as far as [`ChecksumSpec::is`] is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecksumType {
    /// Algorithm family.
    pub algorithm: ChecksumAlgorithm,
    /// Whole-object or composite.
    pub mode: ChecksumMode,
}

impl ChecksumType {
    /// A composite checksum of the given family.
    #[must_use]
    pub fn composite(algorithm: ChecksumAlgorithm) -> Self {
        Self {
            algorithm,
            mode: ChecksumMode::Composite,
        }
    }

    /// A full-object checksum of the given family.
    #[must_use]
    pub fn full_object(algorithm: ChecksumAlgorithm) -> Self {
        Self {
            algorithm,
            mode: ChecksumMode::FullObject,
        }
    }
}

impl From<ChecksumAlgorithm> for ChecksumType {
    fn from(algorithm: ChecksumAlgorithm) -> Self {
        Self::composite(algorithm)
    }
}

// ---------------------------------------------------------------------------
// Capability + accessor
// ---------------------------------------------------------------------------

/// What the checksum accessor needs to know about an algorithm.
pub trait ChecksumSpec {
    /// Whether this value belongs to the `other` algorithm family.
    fn is(&self, other: ChecksumAlgorithm) -> bool;

    /// Length in bytes of a raw digest for this family.
    fn raw_byte_len(&self) -> usize;
}

impl ChecksumSpec for ChecksumAlgorithm {
    fn is(&self, other: ChecksumAlgorithm) -> bool {
        *self == other
    }

    fn raw_byte_len(&self) -> usize {
        ChecksumAlgorithm::raw_byte_len(self)
    }
}

impl ChecksumSpec for ChecksumType {
    fn is(&self, other: ChecksumAlgorithm) -> bool {
        self.algorithm == other
    }

    fn raw_byte_len(&self) -> usize {
        self.algorithm.raw_byte_len()
    }
}

/// Failures of [`ChecksumAccess::checksum_raw`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumError {
    /// The record has no checksum for the requested family.
    #[error("no checksum set")]
    NotSet,

    /// The stored value is not valid standard base64.
    #[error("invalid checksum encoding: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded value has the wrong size for the requested family.
    #[error("checksum length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Raw length declared by the algorithm.
        expected: usize,
        /// Length of the decoded value.
        actual: usize,
    },
}

/// Uniform access to the per-algorithm checksum fields of a record.
///
/// Implementors only map a family to its field; selection and validation
/// are shared so every record kind behaves the same way.
pub trait ChecksumAccess {
    /// The stored base64 checksum for `algorithm`, or `""` when unset.
    fn field(&self, algorithm: ChecksumAlgorithm) -> &str;

    /// The base64 checksum matching `spec`'s family, or `""` when unset.
    fn checksum<S: ChecksumSpec + ?Sized>(&self, spec: &S) -> &str {
        ChecksumAlgorithm::PROBE_ORDER
            .into_iter()
            .find(|algorithm| spec.is(*algorithm))
            .map_or("", |algorithm| self.field(algorithm))
    }

    /// Decode the checksum matching `spec` and check its length.
    fn checksum_raw<S: ChecksumSpec + ?Sized>(&self, spec: &S) -> Result<Vec<u8>, ChecksumError> {
        let encoded = self.checksum(spec);
        if encoded.is_empty() {
            return Err(ChecksumError::NotSet);
        }
        let decoded = BASE64_STANDARD.decode(encoded)?;
        let expected = spec.raw_byte_len();
        if decoded.len() != expected {
            return Err(ChecksumError::LengthMismatch {
                expected,
                actual: decoded.len(),
            });
        }
        Ok(decoded)
    }
}

// Every record kind names its checksum fields identically.
macro_rules! impl_checksum_access {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ChecksumAccess for $ty {
                fn field(&self, algorithm: ChecksumAlgorithm) -> &str {
                    match algorithm {
                        ChecksumAlgorithm::Crc32 => &self.checksum_crc32,
                        ChecksumAlgorithm::Crc32c => &self.checksum_crc32c,
                        ChecksumAlgorithm::Sha1 => &self.checksum_sha1,
                        ChecksumAlgorithm::Sha256 => &self.checksum_sha256,
                        ChecksumAlgorithm::Crc64Nvme => &self.checksum_crc64nvme,
                    }
                }
            }
        )+
    };
}

impl_checksum_access!(ObjectPart, CompletePart, Version, CompleteMultipartUploadResult);

#[cfg(test)]
mod tests {
    use super::*;

    // Four raw bytes: 9a 71 bb 4c.
    const CRC32C_VALUE: &str = "mnG7TA==";
    // SHA-256 of the empty string.
    const SHA256_EMPTY: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

    fn part_with_crc32c(value: &str) -> ObjectPart {
        ObjectPart {
            part_number: 1,
            checksum_crc32c: value.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_report_raw_lengths() {
        assert_eq!(ChecksumAlgorithm::Crc32.raw_byte_len(), 4);
        assert_eq!(ChecksumAlgorithm::Crc32c.raw_byte_len(), 4);
        assert_eq!(ChecksumAlgorithm::Crc64Nvme.raw_byte_len(), 8);
        assert_eq!(ChecksumAlgorithm::Sha1.raw_byte_len(), 20);
        assert_eq!(ChecksumAlgorithm::Sha256.raw_byte_len(), 32);
    }

    #[test]
    fn test_should_parse_checksum_algorithm() {
        assert_eq!(
            "crc64nvme".parse::<ChecksumAlgorithm>().ok(),
            Some(ChecksumAlgorithm::Crc64Nvme)
        );
        assert_eq!(
            "SHA256".parse::<ChecksumAlgorithm>().ok(),
            Some(ChecksumAlgorithm::Sha256)
        );
        assert!("MD5".parse::<ChecksumAlgorithm>().is_err());
    }

    #[test]
    fn test_should_match_family_regardless_of_mode() {
        let full = ChecksumType::full_object(ChecksumAlgorithm::Crc32);
        assert!(full.is(ChecksumAlgorithm::Crc32));
        assert!(!full.is(ChecksumAlgorithm::Crc32c));
        assert_eq!(full.raw_byte_len(), 4);
    }

    #[test]
    fn test_should_select_same_field_for_part_and_complete_part() {
        let part = part_with_crc32c(CRC32C_VALUE);
        let complete = CompletePart {
            part_number: 1,
            checksum_crc32c: CRC32C_VALUE.to_owned(),
            ..Default::default()
        };

        for spec in [
            ChecksumType::composite(ChecksumAlgorithm::Crc32c),
            ChecksumType::full_object(ChecksumAlgorithm::Crc32c),
        ] {
            assert_eq!(part.checksum(&spec), CRC32C_VALUE);
            assert_eq!(complete.checksum(&spec), CRC32C_VALUE);
        }
        assert_eq!(part.checksum(&ChecksumAlgorithm::Crc32), "");
        assert_eq!(complete.checksum(&ChecksumAlgorithm::Sha1), "");
    }

    #[test]
    fn test_should_return_empty_when_no_family_matches() {
        struct Unknown;
        impl ChecksumSpec for Unknown {
            fn is(&self, _other: ChecksumAlgorithm) -> bool {
                false
            }
            fn raw_byte_len(&self) -> usize {
                16
            }
        }

        let part = part_with_crc32c(CRC32C_VALUE);
        assert_eq!(part.checksum(&Unknown), "");
        assert_eq!(part.checksum_raw(&Unknown), Err(ChecksumError::NotSet));
    }

    #[test]
    fn test_should_decode_raw_checksum() {
        let part = part_with_crc32c(CRC32C_VALUE);
        let raw = part
            .checksum_raw(&ChecksumAlgorithm::Crc32c)
            .expect("valid checksum");
        assert_eq!(raw, vec![0x9a, 0x71, 0xbb, 0x4c]);

        let version = Version {
            checksum_sha256: SHA256_EMPTY.to_owned(),
            ..Default::default()
        };
        let raw = version
            .checksum_raw(&ChecksumAlgorithm::Sha256)
            .expect("valid checksum");
        assert_eq!(raw.len(), 32);
        assert_eq!(raw[0], 0xe3);
    }

    #[test]
    fn test_should_fail_when_checksum_not_set() {
        let part = ObjectPart::default();
        assert_eq!(
            part.checksum_raw(&ChecksumAlgorithm::Sha1),
            Err(ChecksumError::NotSet)
        );
    }

    #[test]
    fn test_should_fail_on_length_mismatch() {
        // A valid SHA-256 digest requested as CRC32C.
        let part = part_with_crc32c(SHA256_EMPTY);
        assert_eq!(
            part.checksum_raw(&ChecksumAlgorithm::Crc32c),
            Err(ChecksumError::LengthMismatch {
                expected: 4,
                actual: 32,
            })
        );
    }

    #[test]
    fn test_should_fail_on_invalid_base64() {
        let part = part_with_crc32c("not base64!");
        assert!(matches!(
            part.checksum_raw(&ChecksumAlgorithm::Crc32c),
            Err(ChecksumError::Decode(_))
        ));
    }

    #[test]
    fn test_should_parse_checksum_mode() {
        assert_eq!(ChecksumMode::from("FULL_OBJECT"), ChecksumMode::FullObject);
        assert_eq!(ChecksumMode::from("COMPOSITE"), ChecksumMode::Composite);
        assert_eq!(ChecksumMode::from(""), ChecksumMode::Composite);
    }

    #[test]
    fn test_should_serialize_checksum_type_with_wire_names() {
        let json = serde_json::to_string(&ChecksumType::full_object(ChecksumAlgorithm::Crc64Nvme))
            .expect("serialize");
        assert_eq!(json, r#"{"algorithm":"CRC64NVME","mode":"FULL_OBJECT"}"#);
    }
}
