//! # Decorator
//!
//! A decorator wraps a component behind the component's own interface and
//! adds behavior on the way in or out. Here the component is a file
//! repository: the plain [`FileStore`] writes bytes to disk, while
//! [`Encrypter`] and [`Compressor`] wrap any repository and transform the
//! data before delegating the write (and invert the transform after the
//! delegated read). Because every layer speaks [`FileRepository`], the
//! decorators stack in any order:
//!
//! ```text
//! Compressor -> Encrypter -> FileStore
//! ```
//!
//! The "encryption" and "compression" are toy reversible markers; the point
//! is the wiring, not the codec.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data for '{file_name}' is missing the {layer} framing")]
    CorruptLayer {
        file_name: String,
        layer: &'static str,
    },
}

/// The component interface every layer implements.
pub trait FileRepository {
    fn write_file(&self, file_name: &str, data: &str) -> Result<(), FileError>;
    fn read_file(&self, file_name: &str) -> Result<String, FileError>;
}

/// The concrete component: plain reads and writes under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl FileRepository for FileStore {
    fn write_file(&self, file_name: &str, data: &str) -> Result<(), FileError> {
        fs::write(self.path_for(file_name), data)?;
        Ok(())
    }

    fn read_file(&self, file_name: &str) -> Result<String, FileError> {
        Ok(fs::read_to_string(self.path_for(file_name))?)
    }
}

/// Decorator: frames data in `# ... #` before the delegated write.
pub struct Encrypter {
    inner: Box<dyn FileRepository>,
}

impl Encrypter {
    pub fn new(inner: Box<dyn FileRepository>) -> Self {
        Encrypter { inner }
    }

    fn encrypt(data: &str) -> String {
        format!("# {data} #")
    }

    fn decrypt(file_name: &str, data: &str) -> Result<String, FileError> {
        data.strip_prefix("# ")
            .and_then(|rest| rest.strip_suffix(" #"))
            .map(str::to_string)
            .ok_or_else(|| FileError::CorruptLayer {
                file_name: file_name.to_string(),
                layer: "encryption",
            })
    }
}

impl FileRepository for Encrypter {
    fn write_file(&self, file_name: &str, data: &str) -> Result<(), FileError> {
        self.inner.write_file(file_name, &Self::encrypt(data))
    }

    fn read_file(&self, file_name: &str) -> Result<String, FileError> {
        let stored = self.inner.read_file(file_name)?;
        Self::decrypt(file_name, &stored)
    }
}

/// Decorator: frames data in `$$ ... $$` before the delegated write.
pub struct Compressor {
    inner: Box<dyn FileRepository>,
}

impl Compressor {
    pub fn new(inner: Box<dyn FileRepository>) -> Self {
        Compressor { inner }
    }

    fn compress(data: &str) -> String {
        format!("$${data}$$")
    }

    fn decompress(file_name: &str, data: &str) -> Result<String, FileError> {
        data.strip_prefix("$$")
            .and_then(|rest| rest.strip_suffix("$$"))
            .map(str::to_string)
            .ok_or_else(|| FileError::CorruptLayer {
                file_name: file_name.to_string(),
                layer: "compression",
            })
    }
}

impl FileRepository for Compressor {
    fn write_file(&self, file_name: &str, data: &str) -> Result<(), FileError> {
        self.inner.write_file(file_name, &Self::compress(data))
    }

    fn read_file(&self, file_name: &str) -> Result<String, FileError> {
        let stored = self.inner.read_file(file_name)?;
        Self::decompress(file_name, &stored)
    }
}
