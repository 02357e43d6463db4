use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use svg_anchor_export::{SampleOptions, export_all, load_drawings};
use tracing::{error, info};

/// Sample SVG drawings into anchor scenes and write them as ASCII FBX files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the SVG drawings
    #[arg(short, long, default_value = "work")]
    input: PathBuf,

    /// Directory the FBX files are written to
    #[arg(short, long, default_value = "export")]
    output: PathBuf,

    /// Points sampled along each path
    #[arg(short, long, default_value_t = 40)]
    samples: usize,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    info!("Processing work files...");
    let options = SampleOptions {
        samples: args.samples,
    };
    let items = match load_drawings(&args.input, &options) {
        Ok(items) => items,
        Err(e) => {
            error!("Error reading input directory '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };
    info!("Done. Processed {} file(s) successfully.", items.len());

    if let Err(e) = fs::create_dir_all(&args.output) {
        error!("Error creating output directory '{}': {}", args.output.display(), e);
        process::exit(2);
    }

    info!("Exporting to FBX...");
    let report = export_all(&items, &args.output);
    info!(
        "Done. Exported {} file(s), {} failed.",
        report.written.len(),
        report.failed.len()
    );
}
