use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::EmployeesConfig;
use crate::domain::repository::ObjectStorage;
use crate::error::EmployeesServiceError;

/// S3-compatible object store holding avatar files.
#[derive(Clone)]
pub struct S3ObjectStorage {
    pub client: Client,
    pub bucket: String,
    pub endpoint: String,
}

impl S3ObjectStorage {
    pub fn from_config(config: &EmployeesConfig) -> Self {
        let credentials = Credentials::new(
            &config.s3_access_key,
            &config.s3_secret_key,
            None,
            None,
            "employees-env",
        );
        let s3_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.s3_region.clone()))
            .endpoint_url(&config.s3_endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();
        Self {
            client: Client::from_conf(s3_config),
            bucket: config.s3_bucket.clone(),
            endpoint: config.s3_endpoint.trim_end_matches('/').to_owned(),
        }
    }
}

impl ObjectStorage for S3ObjectStorage {
    async fn upload(
        &self,
        key: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<(), EmployeesServiceError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(content_type.map(str::to_owned))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("upload object {key}: {}", DisplayErrorContext(&e)))?;
        tracing::debug!(bucket = %self.bucket, key, "object uploaded");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), EmployeesServiceError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("delete object {key}: {}", DisplayErrorContext(&e)))?;
        tracing::debug!(bucket = %self.bucket, key, "object deleted");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}
