//! The uploaded-file descriptor handed to the pipeline.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use sha2::Digest;

/// Opaque handle to the original byte stream plus upload metadata.
///
/// Owned by the upload side; the pipeline only ever opens it for a single
/// read pass and never mutates it.
#[derive(Debug, Clone)]
pub struct ImportSource {
    path: PathBuf,
    filename: String,
    media_type: Option<String>,
}

impl ImportSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Some("text/csv".to_string()),
            _ => None,
        };
        Self {
            path,
            filename,
            media_type,
        }
    }

    /// Override the declared media type (e.g. from upload metadata).
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// The upload gate: filename ends in `.csv` and the declared media
    /// type is `text/csv`. The upload side applies this; the pipeline
    /// itself never gates on media type.
    pub fn looks_like_csv(&self) -> bool {
        self.filename.to_lowercase().ends_with(".csv")
            && self.media_type.as_deref() == Some("text/csv")
    }

    pub fn open(&self) -> io::Result<BufReader<File>> {
        Ok(BufReader::new(File::open(&self.path)?))
    }

    /// Hex-encoded sha256 of the source bytes.
    pub fn digest(&self) -> io::Result<String> {
        let mut reader = self.open()?;
        let mut hasher = sha2::Sha256::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hex::encode(hasher.finalize()))
    }
}
