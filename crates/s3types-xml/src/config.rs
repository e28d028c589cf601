//! Reader and writer settings.
//!
//! Provides [`XmlConfig`], loaded from environment variables or built
//! explicitly. The defaults suit S3 wire traffic and rarely need changing.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Settings for [`crate::from_xml_with`] and [`crate::to_xml_with`].
///
/// # Examples
///
/// ```
/// use s3types_xml::XmlConfig;
///
/// let config = XmlConfig::builder().indent(2).build();
/// assert_eq!(config.indent, 2);
/// assert!(!config.trim_text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct XmlConfig {
    /// Trim whitespace around every decoded text value, after entity
    /// resolution. Off by default: object keys may legitimately start or
    /// end with spaces.
    #[builder(default = false)]
    pub trim_text: bool,

    /// Reject documents whose closing tags do not match their opening tags.
    #[builder(default = true)]
    pub check_end_names: bool,

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before request bodies.
    #[builder(default = true)]
    pub write_declaration: bool,

    /// Indentation width for request bodies; `0` writes compact XML.
    #[builder(default = 0)]
    pub indent: usize,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            trim_text: false,
            check_end_names: true,
            write_declaration: true,
            indent: 0,
        }
    }
}

impl XmlConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `S3TYPES_XML_TRIM_TEXT` | `trim_text` |
    /// | `S3TYPES_XML_CHECK_END_NAMES` | `check_end_names` |
    /// | `S3TYPES_XML_DECLARATION` | `write_declaration` |
    /// | `S3TYPES_XML_INDENT` | `indent` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("S3TYPES_XML_TRIM_TEXT") {
            config.trim_text = parse_flag(&v);
        }
        if let Some(v) = lookup("S3TYPES_XML_CHECK_END_NAMES") {
            config.check_end_names = parse_flag(&v);
        }
        if let Some(v) = lookup("S3TYPES_XML_DECLARATION") {
            config.write_declaration = parse_flag(&v);
        }
        if let Some(v) = lookup("S3TYPES_XML_INDENT") {
            match v.parse() {
                Ok(indent) => config.indent = indent,
                Err(e) => {
                    tracing::warn!(value = %v, error = %e, "ignoring invalid S3TYPES_XML_INDENT");
                }
            }
        }

        config
    }
}

fn parse_flag(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}
