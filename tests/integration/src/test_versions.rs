//! Version listing decoding.

#[cfg(test)]
mod tests {
    use s3types_model::ListVersionsResult;

    use crate::decode;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListVersionsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>b</Name>
  <Prefix></Prefix>
  <KeyMarker></KeyMarker>
  <VersionIdMarker></VersionIdMarker>
  <MaxKeys>1000</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>false</IsTruncated>
  <Version>
    <Key>x</Key>
    <VersionId>v2</VersionId>
    <IsLatest>true</IsLatest>
    <LastModified>2024-05-01T12:00:00.000Z</LastModified>
    <ETag>"d41d8cd98f00b204e9800998ecf8427e"</ETag>
    <Size>0</Size>
    <Owner><ID>02d6176db174dc93cb1b899f7c6078f08654445fe8cf1b6ce98d8855f66bdbf4</ID></Owner>
    <StorageClass>STANDARD</StorageClass>
  </Version>
  <DeleteMarker>
    <Key>x</Key>
    <VersionId>v1</VersionId>
    <IsLatest>false</IsLatest>
    <LastModified>2024-04-01T12:00:00.000Z</LastModified>
    <Owner><ID>02d6176db174dc93cb1b899f7c6078f08654445fe8cf1b6ce98d8855f66bdbf4</ID></Owner>
  </DeleteMarker>
  <CommonPrefixes><Prefix>dir/</Prefix></CommonPrefixes>
</ListVersionsResult>"#;

    #[test]
    fn test_should_decode_versioned_listing_in_order() -> anyhow::Result<()> {
        let result: ListVersionsResult = decode(LISTING)?;

        assert_eq!(result.name, "b");
        assert_eq!(result.delimiter, "/");
        assert!(!result.is_truncated);
        assert_eq!(result.versions.len(), 2);
        assert_eq!(result.versions[0].version_id, "v2");
        assert!(!result.versions[0].is_delete_marker());
        assert!(result.versions[0].is_latest);
        assert_eq!(result.versions[1].version_id, "v1");
        assert!(result.versions[1].is_delete_marker());
        assert_eq!(result.common_prefixes.len(), 1);
        assert_eq!(result.common_prefixes[0].prefix, "dir/");
        Ok(())
    }

    #[test]
    fn test_should_decode_entries_before_trailing_flags() -> anyhow::Result<()> {
        let result: ListVersionsResult = decode(
            r#"<ListVersionsResult>
  <Version><Key>x</Key><VersionId>v1</VersionId></Version>
  <DeleteMarker><Key>x</Key><VersionId>v2</VersionId></DeleteMarker>
  <CommonPrefixes><Prefix>dir/</Prefix></CommonPrefixes>
  <IsTruncated>false</IsTruncated>
</ListVersionsResult>"#,
        )?;

        let entries: Vec<_> = result
            .versions
            .iter()
            .map(|v| (v.version_id.as_str(), v.is_delete_marker()))
            .collect();
        assert_eq!(entries, [("v1", false), ("v2", true)]);
        assert_eq!(result.common_prefixes.len(), 1);
        assert!(!result.is_truncated);
        Ok(())
    }

    #[test]
    fn test_should_page_with_next_markers() -> anyhow::Result<()> {
        let page: ListVersionsResult = decode(
            r#"<ListVersionsResult>
  <Name>b</Name>
  <MaxKeys>1</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextKeyMarker>x</NextKeyMarker>
  <NextVersionIdMarker>v2</NextVersionIdMarker>
  <Version><Key>x</Key><VersionId>v2</VersionId></Version>
</ListVersionsResult>"#,
        )?;

        assert!(page.is_truncated);
        assert_eq!(page.next_key_marker, "x");
        assert_eq!(page.next_version_id_marker, "v2");
        Ok(())
    }

    #[test]
    fn test_should_fail_on_unrecognized_listing_element() {
        let result = decode::<ListVersionsResult>(
            "<ListVersionsResult><Name>b</Name><Unexpected/></ListVersionsResult>",
        );
        let err = result.expect_err("unknown element");
        assert!(err.to_string().contains("Unexpected"));
    }
}
