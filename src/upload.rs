//! Client-side half of the admission document upload. Nothing leaves the
//! browser: files are size-checked and listed, and the progress bar is
//! driven by random increments.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: f64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: f64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn is_oversized(&self) -> bool {
        self.size_bytes > config::MAX_UPLOAD_BYTES
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes / 1024.0 / 1024.0)
    }
}

/// Splits a selection into `(accepted, rejected)` by the upload size limit.
pub fn partition_by_size(files: Vec<SelectedFile>) -> (Vec<SelectedFile>, Vec<SelectedFile>) {
    files.into_iter().partition(|f| !f.is_oversized())
}

/// Fake upload progress in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UploadProgress {
    percent: f64,
}

impl UploadProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advances by `step` percent, clamping at 100. Returns `true` once done.
    pub fn tick(&mut self, step: f64) -> bool {
        self.percent = (self.percent + step.max(0.0)).min(100.0);
        self.is_complete()
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.percent())
    }
}
