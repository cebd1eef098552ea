use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dts_sync::commands::{analyze, generate, verify};
use dts_sync::{load_config, DEFAULT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dts-sync", about = "Design-token reconciliation against a reference theme")]
struct Cli {
    /// YAML configuration; an absent file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Directory relative paths resolve against.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve, map and diff the token documents; write the report.
    Analyze,
    /// Write the override artifact and update plan from the report.
    Generate,
    /// Check the override artifact against the report and allowlist.
    Verify,
}

fn init_logging() {
    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli.config, &cli.root)?;
    match cli.command {
        Command::Analyze => {
            let report = analyze::run(&config)?;
            let summary = &report.summary;
            println!(
                "Light deltas: {}, Dark deltas: {}, Brand deltas: {}, Unmapped mode paths: {}",
                summary.light_deltas,
                summary.dark_deltas,
                summary.brand_deltas,
                summary.unmapped_mode_paths
            );
        }
        Command::Generate => {
            let (overrides, plan) = generate::run(&config)?;
            println!(
                "Generated overrides for {} light and {} dark keys; {} light and {} dark edit targets",
                overrides.modes.light.len(),
                overrides.modes.dark.len(),
                plan.update_targets.light.len(),
                plan.update_targets.dark.len()
            );
        }
        Command::Verify => {
            let verdict = verify::run(&config)?;
            if !verdict.passed() {
                eprintln!("Token sync verification failed:");
                for failure in verdict.failures() {
                    eprintln!("- {failure}");
                }
                return Err(format!("{} verification failure(s)", verdict.failures().len()).into());
            }
            println!("Token sync verification passed.");
        }
    }
    Ok(())
}
