//! CLI arguments using clap

use clap::Parser;
use std::path::PathBuf;

/// Spotlight Harvest
///
/// Copies Windows lock-screen Spotlight images out of the system cache and
/// sorts them into horizontal and vertical folders on the desktop.
#[derive(Parser, Debug)]
#[command(name = "spotlight-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Save Windows Spotlight lock-screen images", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read images from this directory instead of the Spotlight cache
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Create the orientation folders here instead of on the desktop
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Image types to accept (jpeg, png, gif, tiff, bmp, webp)
    #[arg(short = 't', long, value_delimiter = ',', default_value = "tiff,jpeg")]
    pub types: Vec<String>,

    /// Show where images would go without copying anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Most specific flag wins
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else if self.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
