//! Pattern 5: Adapter
//! Two incompatible vendor SDKs behind one upload interface.
//!
//! Run with: cargo run --bin pattern_05_adapter

use colored::Colorize;
use design_patterns::adapter::{
    AzureBlobClient, AzureBlobClientAdapter, FileUploader, S3Client, S3ClientAdapter,
};

fn main() {
    let uploaders: Vec<(&str, Box<dyn FileUploader>)> = vec![
        (
            "s3",
            Box::new(S3ClientAdapter::new(S3Client::new("us-east-1"))),
        ),
        (
            "azure",
            Box::new(AzureBlobClientAdapter::new(AzureBlobClient)),
        ),
    ];

    println!("{}", "=== Same call, different SDKs ===".bold());
    for (name, uploader) in &uploaders {
        let receipt = uploader.upload_file("bucket1", "file1.txt", "data1");
        println!("{:>5}: {}", name.cyan(), receipt.green());
    }
}
