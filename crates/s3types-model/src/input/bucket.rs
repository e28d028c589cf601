/// Body of CreateBucket (`CreateBucketConfiguration`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    /// Wire element `LocationConstraint`.
    pub location: String,
}

impl CreateBucketConfiguration {
    /// Configuration for a bucket in `location`.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}
