//! # Adapter
//!
//! Two vendor SDKs with incompatible upload signatures, one
//! [`FileUploader`] interface the rest of the codebase is written against.
//! Each adapter owns its SDK client and translates the target call onto the
//! vendor's vocabulary.

/// The target interface our own code depends on.
pub trait FileUploader {
    fn upload_file(&self, bucket_id: &str, file_name: &str, data: &str) -> String;
}

// --- Vendor SDKs (adaptees). We don't control these signatures. ---

pub struct S3Client {
    region: String,
}

impl S3Client {
    pub fn new(region: impl Into<String>) -> Self {
        S3Client {
            region: region.into(),
        }
    }

    pub fn put_object(&self, bucket: &str, key: &str, body: &str) -> String {
        format!(
            "s3[{}]: put_object {}/{} ({} bytes)",
            self.region,
            bucket,
            key,
            body.len()
        )
    }
}

#[derive(Default)]
pub struct AzureBlobClient;

impl AzureBlobClient {
    pub fn upload_blob(&self, container: &str, blob: &str, contents: &str) -> String {
        format!(
            "azure: upload_blob {}/{} ({} bytes)",
            container,
            blob,
            contents.len()
        )
    }
}

// --- Adapters ---

pub struct S3ClientAdapter {
    client: S3Client,
}

impl S3ClientAdapter {
    pub fn new(client: S3Client) -> Self {
        S3ClientAdapter { client }
    }
}

impl FileUploader for S3ClientAdapter {
    fn upload_file(&self, bucket_id: &str, file_name: &str, data: &str) -> String {
        self.client.put_object(bucket_id, file_name, data)
    }
}

pub struct AzureBlobClientAdapter {
    client: AzureBlobClient,
}

impl AzureBlobClientAdapter {
    pub fn new(client: AzureBlobClient) -> Self {
        AzureBlobClientAdapter { client }
    }
}

impl FileUploader for AzureBlobClientAdapter {
    fn upload_file(&self, bucket_id: &str, file_name: &str, data: &str) -> String {
        self.client.upload_blob(bucket_id, file_name, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_adapter_translates_to_put_object() {
        let adapter = S3ClientAdapter::new(S3Client::new("us-east-1"));
        let receipt = adapter.upload_file("bucket1", "file1.txt", "data1");
        assert_eq!(receipt, "s3[us-east-1]: put_object bucket1/file1.txt (5 bytes)");
    }

    #[test]
    fn azure_adapter_translates_to_upload_blob() {
        let adapter = AzureBlobClientAdapter::new(AzureBlobClient);
        let receipt = adapter.upload_file("azure_store", "file2.txt", "data2");
        assert_eq!(receipt, "azure: upload_blob azure_store/file2.txt (5 bytes)");
    }

    #[test]
    fn both_adapters_fit_behind_one_interface() {
        let uploaders: Vec<Box<dyn FileUploader>> = vec![
            Box::new(S3ClientAdapter::new(S3Client::new("eu-west-1"))),
            Box::new(AzureBlobClientAdapter::new(AzureBlobClient)),
        ];

        for uploader in &uploaders {
            let receipt = uploader.upload_file("shared", "report.csv", "a,b");
            assert!(receipt.contains("shared/report.csv"));
        }
    }
}
