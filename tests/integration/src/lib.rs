//! Cross-crate tests for the S3 XML records and codec.
//!
//! Each test feeds a captured-style server body through `s3types-xml` and
//! checks the records of `s3types-model`, or encodes a request and checks
//! the bytes a server would receive.
//!
//! Run them with:
//! ```text
//! cargo test -p s3types-integration
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Decode `body` as `T`, initializing tracing first.
pub fn decode<T: s3types_xml::S3Deserialize>(body: &str) -> anyhow::Result<T> {
    init_tracing();
    let value = s3types_xml::from_xml(body.as_bytes())?;
    Ok(value)
}

/// Encode `value` under its root element as a UTF-8 string.
pub fn encode<T: s3types_xml::XmlRoot>(value: &T) -> anyhow::Result<String> {
    init_tracing();
    let body = s3types_xml::encode_request(value)?;
    tracing::debug!(bytes = body.len(), "encoded request");
    Ok(String::from_utf8(body)?)
}

mod test_delete;
mod test_multipart;
mod test_versions;
