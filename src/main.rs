//! # vmgpack CLI
//!
//! Command-line interface for the vmgpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use vmgpack::VmgError;
use vmgpack::cli::Args;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with a redirected summary.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), VmgError> {
    let start = Instant::now();
    let config = <Args as ClapParser>::parse().into_config();

    // Fail on a bad extension or input path before touching anything
    let format = config.validate()?;

    println!("📦 vmgpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for dir in &config.input_dirs {
        println!("📂 Input:   {}", dir.display());
    }
    println!("💾 Output:  {}", config.output().display());
    println!("📄 Format:  {}", format);
    println!();

    let report = config.run()?;

    println!();
    println!("✅ Done! Output saved to {}", config.output().display());

    println!();
    println!("📊 Summary:");
    for (dir, stats) in &report.directories {
        println!(
            "   {}: {} written, {} skipped",
            dir.display(),
            stats.kept(),
            stats.skipped
        );
    }
    let total = report.total();
    println!("   Files:     {}", total.processed);
    println!("   Written:   {}", total.kept());
    if total.skipped > 0 {
        println!("   Skipped:   {} (missing contact or body)", total.skipped);
    }
    if total.fallback_dates > 0 {
        println!(
            "   Undated:   {} (shown as 1970-01-01 00:00:00)",
            total.fallback_dates
        );
    }
    println!("   Time:      {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
