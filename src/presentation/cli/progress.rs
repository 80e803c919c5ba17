//! Progress reporting for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Bar for copying images; its length is set by the first update
    pub fn for_harvest() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.green/white}] {pos}/{len} ({percent}%)")
        {
            bar.set_style(style.progress_chars("=>-"));
        }
        bar.set_message("Copying images");
        Self { bar }
    }

    /// Matches [`crate::application::HarvestProgressCallback`]
    pub fn update(&self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
