use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use spotlight_harvest::infrastructure::SpotlightLocator;
use spotlight_harvest::presentation::cli::{Cli, ProgressReporter};
use spotlight_harvest::{HarvestOptions, HarvestUseCase, ImageType};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let allowed_types =
        ImageType::parse_list(&cli.types).context("Invalid --types value")?;
    let options = HarvestOptions::default()
        .with_types(allowed_types)
        .dry_run(cli.dry_run);

    let locator = SpotlightLocator::from_env()
        .with_cache_root(cli.source.clone())
        .with_output_root(cli.output_root.clone());

    let progress = ProgressReporter::for_harvest();
    let progress_cb = |current: usize, total: usize| progress.update(current, total);

    let report = HarvestUseCase::new(locator).execute(&options, Some(&progress_cb))?;
    progress.finish();

    if report.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", style("Harvest Complete!").green().bold());
    println!("{}", report.summary());

    if let Some(root) = &report.output_root {
        println!("Output folder: {}", root.display());
    }
    for failure in &report.decode_failures {
        println!("{} {}", style("[!]").yellow(), failure);
    }

    Ok(())
}
