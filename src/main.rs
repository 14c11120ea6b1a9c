//! Resume-Harvest main entry point
//!
//! This is the command-line interface for the résumé harvester.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use resume_harvest::config::{load_config_with_hash, Config};
use resume_harvest::crawler::{Harvester, Site};
use resume_harvest::{ResumeRecord, Vocabulary};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resume-Harvest: collects résumés from Ukrainian job boards
///
/// Translates the filter from the configuration file into work.ua and
/// robota.ua searches, fetches every matching résumé and prints them as one
/// JSON array of normalized records.
#[derive(Parser, Debug)]
#[command(name = "resume-harvest")]
#[command(version)]
#[command(about = "Harvests and normalizes résumés from work.ua and robota.ua", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Job board to harvest
    #[arg(long, value_enum, default_value_t = SiteArg::All)]
    site: SiteArg,

    /// Write the records to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Validate config and print the first-page queries without any network access
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SiteArg {
    WorkUa,
    RobotaUa,
    All,
}

impl SiteArg {
    fn sites(self) -> Vec<Site> {
        match self {
            Self::WorkUa => vec![Site::WorkUa],
            Self::RobotaUa => vec![Site::RobotaUa],
            Self::All => Site::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let vocabulary = Vocabulary::default();

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config, &vocabulary) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let sites = cli.site.sites();
    if cli.dry_run {
        return handle_dry_run(&config, &vocabulary, &sites);
    }

    let records = handle_harvest(config, vocabulary, &sites).await?;
    write_records(&records, cli.output.as_ref())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("resume_harvest=info,warn"),
            1 => EnvFilter::new("resume_harvest=debug,info"),
            2 => EnvFilter::new("resume_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // records go to stdout, logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: prints what would be requested first
fn handle_dry_run(config: &Config, vocabulary: &Vocabulary, sites: &[Site]) -> anyhow::Result<()> {
    println!("=== Resume-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Workers: {}", config.crawler.workers);
    println!(
        "  Max concurrent documents per worker: {}",
        config.crawler.max_concurrent_documents
    );
    println!(
        "  Skip failed documents: {}",
        config.crawler.skip_failed_documents
    );

    println!("\nFilter:");
    println!("  Speciality: {}", config.filter.speciality);
    println!("  Main skills: {}", config.filter.main_skills.join(", "));

    for site in sites {
        let request = site
            .build_query(&config.filter, 0, vocabulary, &config.sources)
            .with_context(|| format!("building first-page query for {}", site))?;
        println!("\n{} (page size {}):", site, site.page_size());
        println!("  {}", request);
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Handles the harvest of every selected site
async fn handle_harvest(
    config: Config,
    vocabulary: Vocabulary,
    sites: &[Site],
) -> anyhow::Result<Vec<ResumeRecord>> {
    let harvester = Harvester::new(config, vocabulary)?;
    let mut records = Vec::new();

    for &site in sites {
        match harvester.run(site).await {
            Ok(harvest) => {
                tracing::info!(
                    "{}: {} resumes collected, {} skipped",
                    harvest.site,
                    harvest.records.len(),
                    harvest.skipped
                );
                records.extend(harvest.records);
            }
            Err(e) => {
                tracing::error!("Harvest of {} failed: {}", site, e);
                return Err(e.into());
            }
        }
    }

    Ok(records)
}

fn write_records(records: &[ResumeRecord], output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
            tracing::info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
