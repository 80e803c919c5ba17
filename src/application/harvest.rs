//! Harvest use case
//!
//! Lists the cache root, screens every entry, and materializes the survivors
//! into their orientation folders. Runs sequentially in listing order.

use crate::application::dto::{HarvestOptions, HarvestReport};
use crate::domain::entities::CandidateFile;
use crate::domain::repositories::{ClassifiedImageWriter, PathProvider, WriteOutcome};
use crate::domain::services::{classify, screen, Screening};
use crate::error::HarvestError;
use crate::infrastructure::LocalImageCopier;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Progress callback for materialization: `(current, total)`
pub type HarvestProgressCallback<'a> = &'a dyn Fn(usize, usize);

/// Harvest use case
///
/// Path resolution is delegated to the injected [`PathProvider`], so the
/// same pipeline runs against the real Spotlight cache or any directory pair.
pub struct HarvestUseCase<P: PathProvider> {
    provider: P,
}

impl<P: PathProvider> HarvestUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Runs the whole pipeline.
    ///
    /// When nothing qualifies the output root is not even resolved, so no
    /// directory is created.
    pub fn execute(
        &self,
        options: &HarvestOptions,
        progress: Option<HarvestProgressCallback<'_>>,
    ) -> Result<HarvestReport> {
        let start_time = Instant::now();
        let cache_root = self
            .provider
            .cache_root()
            .context("Failed to locate the Spotlight cache")?;

        let mut report = HarvestReport::new(cache_root.clone());
        report.dry_run = options.dry_run;
        let candidates = self.collect_candidates(&cache_root, options, &mut report)?;

        if candidates.is_empty() {
            info!("No background images in {}", cache_root.display());
            report.duration = start_time.elapsed();
            return Ok(report);
        }

        let output_root = self
            .provider
            .output_root()
            .context("Failed to locate the output directory")?;
        report.output_root = Some(output_root.clone());

        let writer = LocalImageCopier::new(&output_root);
        self.materialize(&writer, candidates, options, &mut report, progress)?;

        report.duration = start_time.elapsed();

        info!(
            "Harvest complete: {} copied, {} already present in {:.2}s",
            report.files_copied(),
            report.already_present,
            report.duration.as_secs_f64()
        );

        Ok(report)
    }

    /// Lists the cache root and keeps entries that pass both filters
    pub fn collect_candidates(
        &self,
        cache_root: &Path,
        options: &HarvestOptions,
        report: &mut HarvestReport,
    ) -> Result<Vec<CandidateFile>> {
        let unavailable = |source| HarvestError::CacheUnavailable {
            path: cache_root.to_path_buf(),
            source,
        };

        info!("Scanning {}", cache_root.display());

        let mut candidates = Vec::new();
        for entry in fs::read_dir(cache_root).map_err(unavailable)? {
            let path = entry.map_err(unavailable)?.path();
            report.entries_scanned += 1;

            let screening = screen(&path, &options.allowed_types)
                .with_context(|| format!("Failed to inspect {}", path.display()))?;

            match screening {
                Screening::Accepted(candidate) => {
                    debug!(
                        "Candidate {} ({}, {} bytes)",
                        path.display(),
                        candidate.image_type(),
                        candidate.size()
                    );
                    candidates.push(candidate);
                }
                Screening::Rejected(reason) => {
                    debug!("Skipping {}: {:?}", path.display(), reason);
                    report.add_rejection(reason);
                }
            }
        }

        report.candidates = candidates.len();
        Ok(candidates)
    }

    /// Classifies each candidate and hands it to `writer`.
    ///
    /// Undecodable candidates are logged, recorded and skipped.
    pub fn materialize<W: ClassifiedImageWriter>(
        &self,
        writer: &W,
        candidates: Vec<CandidateFile>,
        options: &HarvestOptions,
        report: &mut HarvestReport,
        progress: Option<HarvestProgressCallback<'_>>,
    ) -> Result<()> {
        if !options.dry_run {
            writer
                .prepare()
                .context("Failed to create output directories")?;
        }

        let total = candidates.len();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if let Some(callback) = progress {
                callback(index + 1, total);
            }

            let source = candidate.path().to_path_buf();
            let image = match classify(candidate) {
                Ok(image) => image,
                Err(e @ HarvestError::Decode { .. }) => {
                    warn!("{}", e);
                    report.add_decode_failure(e.to_string());
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to open {}", source.display()));
                }
            };

            if options.dry_run {
                let destination = writer.destination(&image);
                if destination.exists() {
                    debug!("{} already present", destination.display());
                    report.add_already_present();
                } else {
                    debug!("Would copy {} to {}", source.display(), destination.display());
                    report.planned.push(destination);
                }
                continue;
            }

            let outcome = writer
                .write(&image)
                .with_context(|| format!("Failed to copy {}", source.display()))?;

            match outcome {
                WriteOutcome::Copied { bytes, .. } => {
                    debug!(
                        "Copied {} {} image to {}",
                        image.orientation(),
                        image.candidate().image_type(),
                        outcome.path().display()
                    );
                    report.add_copied(image.orientation(), bytes);
                }
                WriteOutcome::AlreadyPresent { .. } => {
                    debug!("{} already present", outcome.path().display());
                    report.add_already_present();
                }
            }
        }

        Ok(())
    }
}
