use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tu56_core::{
    consts::{BLOCKS, DEFAULT_IMAGE_NAME, PREVIEW_LABELS},
    write_image, LabelTable,
};

#[derive(Parser)]
#[command(name = "tu56", version, about = "Create a TU56 DECtape image with place names")]
struct Cli {
    /// Output image path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_IMAGE_NAME)]
    output: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let labels = LabelTable::default();
    let report = write_image(&cli.output, &labels)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::debug!(blocks = report.blocks, "done");

    println!(
        "Created {} with {} blocks ({} bytes)",
        report.path.display(),
        BLOCKS,
        report.bytes
    );
    println!("First {} locations:", PREVIEW_LABELS);
    for (i, name) in labels.preview(PREVIEW_LABELS) {
        println!("  Block {i:03o} (dec {i:2}): {name}");
    }
    Ok(())
}
