//! Batch delete round trip.

#[cfg(test)]
mod tests {
    use s3types_model::{DeleteMultiObjects, DeleteMultiObjectsResult, DeleteObject};

    use crate::{decode, encode};

    #[test]
    fn test_should_encode_request_and_decode_partial_failure() -> anyhow::Result<()> {
        let request = DeleteMultiObjects {
            quiet: false,
            objects: vec![
                DeleteObject::new("a.txt"),
                DeleteObject::with_version("b.txt", "3sL4kqtJlcpXroDTDmJ"),
            ],
        };

        let body = encode(&request)?;
        assert!(body.contains("<Quiet>false</Quiet>"));
        assert!(body.contains("<Object><Key>a.txt</Key></Object>"));
        assert!(body.contains(
            "<Object><Key>b.txt</Key><VersionId>3sL4kqtJlcpXroDTDmJ</VersionId></Object>"
        ));

        let response = r#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Deleted><Key>a.txt</Key></Deleted>
  <Error>
    <Key>b.txt</Key>
    <VersionId>3sL4kqtJlcpXroDTDmJ</VersionId>
    <Code>AccessDenied</Code>
    <Message>Access Denied</Message>
  </Error>
</DeleteResult>"#;

        let result: DeleteMultiObjectsResult = decode(response)?;
        assert!(!result.is_complete());
        assert_eq!(result.deleted_objects.len(), 1);
        assert_eq!(result.deleted_objects[0].key, "a.txt");
        assert!(!result.deleted_objects[0].delete_marker);
        assert_eq!(result.undeleted_objects.len(), 1);
        assert_eq!(result.undeleted_objects[0].key, "b.txt");
        assert_eq!(result.undeleted_objects[0].code, "AccessDenied");
        Ok(())
    }

    #[test]
    fn test_should_decode_quiet_success_as_complete() -> anyhow::Result<()> {
        let result: DeleteMultiObjectsResult =
            decode(r#"<DeleteResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#)?;
        assert!(result.is_complete());
        assert!(result.deleted_objects.is_empty());
        Ok(())
    }
}
