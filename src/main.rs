//! # groupmeta CLI
//!
//! Command-line interface for the groupmeta collector.

use std::process;
use std::time::Instant;

use chrono::Local;
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use groupmeta::cli::Args;
use groupmeta::collector::Collector;
use groupmeta::config::CollectorConfig;
use groupmeta::core::output::append_error;
use groupmeta::sources::SnapshotSource;
use groupmeta::GroupMetaError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = <Args as ClapParser>::parse();

    // Fall back to CLI-only paths if the overrides themselves are broken.
    let log_path = args
        .to_config()
        .unwrap_or_else(|_| args.base_config())
        .log_path();

    if let Err(e) = run(&args) {
        let message = e.to_string();
        if let Err(log_err) = append_error(&log_path, Local::now(), &message) {
            eprintln!("⚠️  Could not write error log {}: {}", log_path.display(), log_err);
        }
        eprintln!("❌ Error: {}", message);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GroupMetaError> {
    let total_start = Instant::now();
    let config: CollectorConfig = args.to_config()?;

    println!("📦 groupmeta v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Snapshot:  {}", args.snapshot.display());
    println!("💾 Output:    {}", config.output_dir.display());
    if !config.group_blacklist.is_empty() {
        println!("🚫 Blacklist: {}", config.group_blacklist.join(", "));
    }
    println!();

    let mut source = SnapshotSource::open(&args.snapshot).with_profile_dir(config.profile_path());
    let stats = Collector::new(config).run(&mut source)?;

    println!("✅ Done!");
    println!();
    println!("📊 Summary:");
    println!("   Conversations: {}", stats.conversations);
    println!("   Groups:        {}", stats.written);
    println!("   Direct (skip): {}", stats.skipped_direct);
    println!("   Blacklisted:   {}", stats.skipped_blacklisted);
    println!("   Total time:    {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
