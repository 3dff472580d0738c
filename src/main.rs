//! Play History - yearly report generator
//!
//! Reads one year of plays from the history store and writes
//! `PlayHistory_<year>.html` to the current directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use play_history::{
    display,
    error::Result,
    report::{self, Template},
    year::{MAX_YEAR, MIN_YEAR},
    Config, Database, ReportYear,
};

#[derive(Parser)]
#[command(name = "play-history")]
#[command(author, version, about = "Generate a yearly HTML report of your listening history")]
struct Cli {
    /// Four-digit year to report on
    year: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play history database (overrides [database] path)
    #[arg(short, long, env = "PLAY_HISTORY_DB")]
    database: Option<PathBuf>,

    /// Report template (overrides [report] template_path)
    #[arg(short, long, env = "PLAY_HISTORY_TEMPLATE")]
    template: Option<PathBuf>,

    /// Directory to write the report to (overrides [report] output_dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let year = if cli.print_config {
        None
    } else {
        let Some(year) = parse_year_arg(cli.year.as_deref()) else {
            return Ok(ExitCode::FAILURE);
        };
        Some(year)
    };

    // Load configuration and apply command line overrides
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };
    if let Some(path) = cli.database {
        config.database.path = Some(path);
    }
    if let Some(path) = cli.template {
        config.report.template_path = Some(path);
    }
    if let Some(dir) = cli.output_dir {
        config.report.output_dir = Some(dir);
    }
    config.validate()?;

    init_logging(cli.verbose, &config.general.log_level);

    match year {
        Some(year) => generate_report(&config, year)?,
        None => print!("{}", config.to_toml()?),
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate the year argument, printing usage when it is missing or invalid.
fn parse_year_arg(arg: Option<&str>) -> Option<ReportYear> {
    match arg.map(ReportYear::parse) {
        Some(Ok(year)) => Some(year),
        Some(Err(e)) => {
            eprintln!("{e}");
            print_usage();
            None
        }
        None => {
            print_usage();
            None
        }
    }
}

fn init_logging(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: play-history <YEAR>");
    eprintln!("  YEAR  four-digit year between {MIN_YEAR} and {MAX_YEAR}, e.g. {MIN_YEAR}");
}

fn generate_report(config: &Config, year: ReportYear) -> Result<()> {
    let started = Instant::now();

    let template = if let Some(ref path) = config.report.template_path {
        tracing::debug!("Using template {}", path.display());
        Template::load(path)?
    } else {
        Template::builtin()
    };
    let missing = template.missing_placeholders();
    if !missing.is_empty() {
        tracing::warn!("Template does not use: {}", missing.join(", "));
    }

    let db_path = config.database_path()?;
    let db = Database::open(db_path)?;
    tracing::info!("Reading {year} plays from {}", db_path.display());

    let Some(generated) = report::generate(&db, &template, year, &config.output_dir())? else {
        println!("Found 0 songs for {year}. No report written.");
        return Ok(());
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        "Report generated in {}",
        humantime::format_duration(Duration::from_millis(elapsed_ms))
    );

    println!("Report written to {}", generated.path.display());
    display::display_summary(generated.song_count, &generated.stats);
    println!();

    Ok(())
}
