use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use site_optimizer::processing::{BatchConfig, run_batch};
use site_optimizer::{CompressionSettings, pages};

#[derive(Parser)]
#[command(name = "site-optimizer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert raster images under the images root to size-capped WebP
    Optimize(OptimizeArgs),
    /// List the service-page configuration records
    Pages {
        /// Dump the full records as JSON instead of the filename listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct OptimizeArgs {
    /// Root directory holding the source images
    #[arg(long, default_value = "public/images")]
    images_dir: String,

    /// Name of the output subtree created under the images root
    #[arg(long, default_value = "webp")]
    output_dir_name: String,

    /// Size ceiling per derivative, in kilobytes
    #[arg(long, default_value_t = 200)]
    max_size_kb: u32,

    /// Quality level the descent starts from
    #[arg(long, default_value_t = 85)]
    quality: u8,
}

impl Default for OptimizeArgs {
    fn default() -> Self {
        Self {
            images_dir: "public/images".to_string(),
            output_dir_name: "webp".to_string(),
            max_size_kb: 200,
            quality: 85,
        }
    }
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    match Cli::parse().command {
        // Zero-argument invocation performs the full batch with defaults.
        None => optimize(OptimizeArgs::default()),
        Some(Command::Optimize(args)) => optimize(args),
        Some(Command::Pages { json }) => emit_pages(json),
    }
}

fn optimize(args: OptimizeArgs) -> Result<()> {
    let settings = CompressionSettings {
        max_size_kb: args.max_size_kb,
        quality: args.quality,
    };
    let mut config = BatchConfig::new(args.images_dir, settings);
    config.output_dir_name = args.output_dir_name;

    // Per-file failures are logged inside the batch; only a missing images
    // root propagates here as a process failure.
    let summary = run_batch(&config)?;
    info!(
        "Batch complete: {} converted, {} fresh, {} failed",
        summary.converted, summary.skipped_fresh, summary.failed
    );
    Ok(())
}

fn emit_pages(json: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    if json {
        let rendered = pages::to_json()?;
        use std::io::Write;
        writeln!(stdout, "{rendered}")?;
    } else {
        pages::write_listing(&mut stdout)?;
    }
    Ok(())
}
