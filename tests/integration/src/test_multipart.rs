//! Multipart listing and completion with checksums.

#[cfg(test)]
mod tests {
    use s3types_model::{
        ChecksumAccess, ChecksumAlgorithm, ChecksumError, ChecksumType, CompleteMultipartUpload,
        CompletePart, ListObjectPartsResult,
    };

    use crate::{decode, encode};

    const PARTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListPartsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>b</Bucket>
  <Key>big.bin</Key>
  <UploadId>upload-1</UploadId>
  <MaxParts>1000</MaxParts>
  <IsTruncated>false</IsTruncated>
  <ChecksumAlgorithm>SHA256</ChecksumAlgorithm>
  <Part>
    <PartNumber>1</PartNumber>
    <ETag>etag-1</ETag>
    <Size>5242880</Size>
    <ChecksumSHA256>47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=</ChecksumSHA256>
  </Part>
  <Part>
    <PartNumber>2</PartNumber>
    <ETag>etag-2</ETag>
    <Size>17</Size>
    <ChecksumSHA256>bad!</ChecksumSHA256>
  </Part>
</ListPartsResult>"#;

    #[test]
    fn test_should_read_part_checksums_by_declared_algorithm() -> anyhow::Result<()> {
        let result: ListObjectPartsResult = decode(PARTS)?;
        let algorithm = result.algorithm().expect("declared algorithm");
        assert_eq!(algorithm, ChecksumAlgorithm::Sha256);

        let first = &result.object_parts[0];
        assert_eq!(
            first.checksum(&algorithm),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        assert_eq!(first.checksum_raw(&algorithm)?.len(), 32);
        assert_eq!(first.checksum(&ChecksumAlgorithm::Crc32), "");

        let second = &result.object_parts[1];
        assert!(matches!(
            second.checksum_raw(&algorithm),
            Err(ChecksumError::Decode(_))
        ));
        Ok(())
    }

    #[test]
    fn test_should_complete_upload_with_listed_parts() -> anyhow::Result<()> {
        let listed: ListObjectPartsResult = decode(PARTS)?;
        let spec = ChecksumType::full_object(ChecksumAlgorithm::Sha256);

        let request = CompleteMultipartUpload {
            parts: listed
                .object_parts
                .iter()
                .map(|part| CompletePart {
                    part_number: part.part_number,
                    e_tag: part.e_tag.clone(),
                    checksum_sha256: part.checksum(&spec).to_owned(),
                    ..CompletePart::default()
                })
                .collect(),
        };

        let body = encode(&request)?;
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(body.contains("<CompleteMultipartUpload xmlns="));
        assert!(body.contains(
            "<Part><PartNumber>1</PartNumber><ETag>etag-1</ETag><ChecksumSHA256>47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=</ChecksumSHA256></Part>"
        ));
        assert_eq!(body.matches("<Part>").count(), 2);
        Ok(())
    }
}
