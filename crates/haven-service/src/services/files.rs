//! Resume file intake and retrieval
//!
//! Uploaded resumes are validated (MIME allow-list, size ceiling) before any
//! byte is written, then persisted under a collision-resistant name inside
//! the configured upload directory. Retrieval infers the content type from
//! the extension with a generic binary default.

use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use haven_core::DomainError;

/// MIME types accepted for resume uploads
const ALLOWED_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Subdirectory for resumes under the upload root
const RESUME_DIR: &str = "resumes";

/// Length of the random filename suffix
const TOKEN_LEN: usize = 13;

/// An uploaded resume as received from the multipart form
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validating file store for resume uploads
#[derive(Debug, Clone)]
pub struct ResumeStore {
    root: PathBuf,
    max_bytes: u64,
}

impl ResumeStore {
    /// Create a store rooted at the given upload directory
    pub fn new(upload_dir: impl Into<PathBuf>, max_file_size_mb: u32) -> Self {
        Self {
            root: upload_dir.into(),
            max_bytes: u64::from(max_file_size_mb) * 1024 * 1024,
        }
    }

    /// Size ceiling in bytes (inclusive)
    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check type and size before anything touches disk
    ///
    /// # Errors
    /// Returns a validation error naming the violated constraint
    pub fn validate(&self, content_type: &str, len: u64) -> Result<(), DomainError> {
        if !ALLOWED_TYPES.contains(&content_type) {
            return Err(DomainError::UnsupportedMedia(
                "Invalid file type. Only PDF and DOC/DOCX files are allowed.".to_string(),
            ));
        }

        if len > self.max_bytes {
            return Err(DomainError::FileTooLarge {
                limit_mib: self.max_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }

    /// Persist an already-validated upload and return its path relative to
    /// the upload root. The generated name is collision-resistant and the
    /// write refuses to overwrite an existing file.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, DomainError> {
        let dir = self.root.join(RESUME_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::InternalError(format!("Failed to create upload dir: {e}")))?;

        let filename = generate_unique_filename(original_name);
        let path = dir.join(&filename);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| DomainError::InternalError(format!("Failed to create resume file: {e}")))?;

        file.write_all(bytes)
            .await
            .map_err(|e| DomainError::InternalError(format!("Failed to write resume file: {e}")))?;

        Ok(format!("{RESUME_DIR}/{filename}"))
    }

    /// Read a stored resume back by its relative path
    ///
    /// # Errors
    /// Returns an internal error for traversal attempts or missing files
    #[instrument(skip(self))]
    pub async fn load(&self, relative_path: &str) -> Result<Vec<u8>, DomainError> {
        let relative = Path::new(relative_path);
        // Stored paths are always plain `resumes/<file>`; anything else is
        // a corrupted record, not a request we should serve.
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(DomainError::InternalError(format!(
                "Refusing non-normal resume path: {relative_path}"
            )));
        }

        tokio::fs::read(self.root.join(relative))
            .await
            .map_err(|e| DomainError::InternalError(format!("Failed to read resume file: {e}")))
    }
}

/// Infer the download content type from the file extension
#[must_use]
pub fn content_type_for(path: &str) -> &'static str {
    match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Client-facing download filename: the applicant's name with whitespace
/// collapsed to underscores, plus the stored extension.
#[must_use]
pub fn download_filename(full_name: &str, resume_path: &str) -> String {
    let name = full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let ext = Path::new(resume_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{name}_Resume{ext}")
}

/// `{sanitized_stem}_{timestamp_millis}_{random_token}{ext}`
fn generate_unique_filename(original_name: &str) -> String {
    let path = Path::new(original_name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("resume");
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let timestamp = Utc::now().timestamp_millis();
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();

    format!("{sanitized}_{timestamp}_{token}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_MIB: u64 = 10 * 1024 * 1024;

    fn store() -> ResumeStore {
        ResumeStore::new("./uploads", 10)
    }

    fn temp_store(tag: &str) -> ResumeStore {
        let dir = std::env::temp_dir().join(format!(
            "haven-resume-test-{}-{}-{}",
            tag,
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        ResumeStore::new(dir, 10)
    }

    #[test]
    fn test_validate_accepts_allowed_types() {
        let store = store();
        assert!(store.validate("application/pdf", 1024).is_ok());
        assert!(store.validate("application/msword", 1024).is_ok());
        assert!(store
            .validate(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                1024
            )
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_other_types() {
        let store = store();
        for bad in ["image/png", "text/plain", "application/zip", ""] {
            let result = store.validate(bad, 1024);
            assert!(matches!(result, Err(DomainError::UnsupportedMedia(_))));
        }
    }

    #[test]
    fn test_validate_size_boundary() {
        let store = store();
        // Exactly at the limit is accepted; one byte over is rejected.
        assert!(store.validate("application/pdf", TEN_MIB).is_ok());
        let result = store.validate("application/pdf", TEN_MIB + 1);
        assert!(matches!(result, Err(DomainError::FileTooLarge { limit_mib: 10 })));
    }

    #[test]
    fn test_generate_unique_filename_pattern() {
        let filename = generate_unique_filename("Jane Doe Resume (final).pdf");
        assert!(filename.starts_with("Jane_Doe_Resume__final_"));
        assert!(filename.ends_with(".pdf"));

        // stem_timestamp_token.ext → token is the last underscore segment
        let stem = filename.strip_suffix(".pdf").unwrap();
        let token = stem.rsplit('_').next().unwrap();
        assert_eq!(token.len(), TOKEN_LEN);

        let millis = stem.rsplit('_').nth(1).unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_unique_filename_no_extension() {
        let filename = generate_unique_filename("resume");
        assert!(filename.starts_with("resume_"));
        assert!(!filename.contains('.'));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("resumes/a.pdf"), "application/pdf");
        assert_eq!(content_type_for("resumes/a.PDF"), "application/pdf");
        assert_eq!(content_type_for("resumes/a.doc"), "application/msword");
        assert_eq!(
            content_type_for("resumes/a.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("resumes/a.txt"), "application/octet-stream");
        assert_eq!(content_type_for("resumes/noext"), "application/octet-stream");
    }

    #[test]
    fn test_download_filename_replaces_whitespace() {
        assert_eq!(
            download_filename("Jane Doe", "resumes/x.pdf"),
            "Jane_Doe_Resume.pdf"
        );
        assert_eq!(
            download_filename("Mary  Ann   Smith", "resumes/x.docx"),
            "Mary_Ann_Smith_Resume.docx"
        );
    }

    #[tokio::test]
    async fn test_store_and_load_round_trip() {
        let store = temp_store("roundtrip");
        let bytes = b"%PDF-1.4 fake resume";

        let path = store.store("jane.pdf", bytes).await.unwrap();
        assert!(path.starts_with("resumes/"));

        let loaded = store.load(&path).await.unwrap();
        assert_eq!(loaded, bytes);
    }

    #[tokio::test]
    async fn test_load_refuses_traversal() {
        let store = temp_store("traversal");
        let result = store.load("../etc/passwd").await;
        assert!(matches!(result, Err(DomainError::InternalError(_))));
    }
}
