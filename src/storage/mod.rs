// src/storage/mod.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::models::ParseResponse;
use crate::utils::error::StorageError;

/// Writes parse results (and a metadata sidecar) under one output directory.
pub struct StorageManager {
    base_dir: PathBuf,
    // Output stem handed to each source during this run.
    stems: HashMap<PathBuf, String>,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
            stems: HashMap::new(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Output stem for `source`, unique among the sources this manager has seen.
    ///
    /// The same source always gets the same stem. A different source whose
    /// file stem is taken gets `_1`, `_2`, ... appended.
    pub fn output_stem(&mut self, source: &Path) -> String {
        if let Some(stem) = self.stems.get(source) {
            return stem.clone();
        }

        let base = file_stem(source);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.stems.values().any(|taken| *taken == candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        if candidate != base {
            tracing::warn!(
                "Output name '{}' already used in this run; writing {} as '{}'",
                base,
                source.display(),
                candidate
            );
        }

        self.stems.insert(source.to_path_buf(), candidate.clone());
        candidate
    }

    /// Writes the response as `<stem>.json`.
    pub fn save_result(&mut self, source: &Path, response: &ParseResponse) -> Result<PathBuf, StorageError> {
        let stem = self.output_stem(source);
        let file_path = self.base_dir.join(format!("{}.json", stem));

        let json = serde_json::to_string_pretty(response)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved parse result to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes `<stem>_meta.json` describing the run that produced the result.
    pub fn save_metadata(
        &mut self,
        source: &Path,
        file_type: &str,
        response: &ParseResponse,
    ) -> Result<PathBuf, StorageError> {
        let stem = self.output_stem(source);
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));

        let metadata = match response {
            ParseResponse::Parsed(resume) => serde_json::json!({
                "source": source.display().to_string(),
                "file_type": file_type,
                "status": "parsed",
                "text_length": resume.raw_text.len(),
                "skill_count": resume.skills.len(),
                "education_lines": resume.education.len(),
                "experience_lines": resume.experience.len(),
                "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            }),
            ParseResponse::Failed { error } => serde_json::json!({
                "source": source.display().to_string(),
                "file_type": file_type,
                "status": "failed",
                "error": error,
                "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            }),
        };

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

/// Output file stem for a source path: `stdin` for `-`, `resume` when it has none.
fn file_stem(source: &Path) -> String {
    if source.as_os_str() == crate::batch::STDIN_PATH {
        return "stdin".to_string();
    }
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string())
}
