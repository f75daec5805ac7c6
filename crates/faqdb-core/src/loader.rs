use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::FaqRecord;

/// Reads FAQ records from JSON: a single file holding an array of records, or
/// a directory tree of such files concatenated in path order.
pub struct RecordLoader {
    extension: String,
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self { extension: "json".to_string() }
    }
}

impl RecordLoader {
    pub fn new() -> Self { Self::default() }

    pub fn load_path(&self, path: &Path) -> Result<Vec<FaqRecord>> {
        if path.is_dir() {
            self.load_directory(path)
        } else if path.is_file() {
            self.load_file(path)
        } else {
            Err(Error::NotFound(path.display().to_string()))
        }
    }

    pub fn load_directory(&self, dir: &Path) -> Result<Vec<FaqRecord>> {
        let files = self.list_record_files(dir);
        self.load_files(dir, &files)
    }

    pub fn load_directory_limited(&self, dir: &Path, limit: usize) -> Result<Vec<FaqRecord>> {
        let mut files = self.list_record_files(dir);
        if files.len() > limit {
            files.truncate(limit);
            tracing::info!(limit, "limited to first files");
        }
        self.load_files(dir, &files)
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<FaqRecord>> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let records: Vec<FaqRecord> =
            serde_json::from_str(&content).map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), records = records.len(), "loaded record file");
        Ok(records)
    }

    fn load_files(&self, dir: &Path, files: &[PathBuf]) -> Result<Vec<FaqRecord>> {
        if files.is_empty() {
            tracing::warn!(dir = %dir.display(), extension = %self.extension, "no record files found");
            return Ok(vec![]);
        }
        let mut all_records = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = file_index + 1, total = files.len(), path = %file_path.display(), "processing record file");
            all_records.extend(self.load_file(file_path)?);
        }
        tracing::info!(files = files.len(), records = all_records.len(), "loaded FAQ records");
        Ok(all_records)
    }

    fn list_record_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str()))
            .collect();
        files.sort();
        files
    }
}
