//! Harvest report DTO

use crate::domain::entities::Orientation;
use crate::domain::services::Rejection;
use humansize::{format_size, DECIMAL};
use std::path::PathBuf;
use std::time::Duration;

/// Result of a harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    /// Directory the entries were read from
    pub cache_root: PathBuf,
    /// Directory the orientation folders live under, once resolved
    pub output_root: Option<PathBuf>,
    /// Cache entries looked at
    pub entries_scanned: usize,
    /// Entries that were not regular files
    pub not_files: usize,
    /// Entries without an allowed image signature
    pub rejected_type: usize,
    /// Image entries at or under the weight threshold
    pub rejected_weight: usize,
    /// Entries that passed both filters
    pub candidates: usize,
    pub copied_horizontal: usize,
    pub copied_vertical: usize,
    /// Destinations that already existed and were left alone
    pub already_present: usize,
    pub bytes_copied: u64,
    /// Nothing was created or copied
    pub dry_run: bool,
    /// Destinations a dry run would have written
    pub planned: Vec<PathBuf>,
    /// Candidates whose dimensions could not be read
    pub decode_failures: Vec<String>,
    pub duration: Duration,
}

impl HarvestReport {
    pub fn new(cache_root: PathBuf) -> Self {
        Self {
            cache_root,
            ..Default::default()
        }
    }

    pub fn add_rejection(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::NotAFile => self.not_files += 1,
            Rejection::UnrecognisedType => self.rejected_type += 1,
            Rejection::TooLight => self.rejected_weight += 1,
        }
    }

    pub fn add_copied(&mut self, orientation: Orientation, bytes: u64) {
        match orientation {
            Orientation::Horizontal => self.copied_horizontal += 1,
            Orientation::Vertical => self.copied_vertical += 1,
        }
        self.bytes_copied += bytes;
    }

    pub fn add_already_present(&mut self) {
        self.already_present += 1;
    }

    pub fn add_decode_failure(&mut self, message: String) {
        self.decode_failures.push(message);
    }

    pub fn files_copied(&self) -> usize {
        self.copied_horizontal + self.copied_vertical
    }

    /// True when no entry qualified, in which case nothing was created
    pub fn is_empty(&self) -> bool {
        self.candidates == 0
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Scanned {} entries in {} ({:.2}s)\n",
            self.entries_scanned,
            self.cache_root.display(),
            self.duration.as_secs_f64()
        );

        summary.push_str(&format!(
            "  - not an allowed image: {}\n  - {} KB or lighter: {}\n",
            self.rejected_type,
            crate::domain::services::MIN_WEIGHT_KB,
            self.rejected_weight
        ));

        if self.is_empty() {
            summary.push_str("No background images found\n");
            return summary;
        }

        if self.dry_run {
            summary.push_str(&format!("Would copy {} images\n", self.planned.len()));
        } else {
            summary.push_str(&format!(
                "Copied {} images ({}): {} horizontal, {} vertical\n",
                self.files_copied(),
                format_size(self.bytes_copied, DECIMAL),
                self.copied_horizontal,
                self.copied_vertical
            ));
        }

        if self.already_present > 0 {
            summary.push_str(&format!("Already present: {}\n", self.already_present));
        }

        if !self.decode_failures.is_empty() {
            summary.push_str(&format!(
                "\n{} files could not be decoded\n",
                self.decode_failures.len()
            ));
        }

        summary
    }
}
