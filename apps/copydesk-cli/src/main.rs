//! Copydesk CLI
//!
//! Runs one editorial check against one content file and renders the
//! report. Exit code 0 means the check passed (no Critical findings);
//! 1 means it failed or the input could not be validated at all.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use editorial_engine::Check;

mod report;

use report::{render_json, render_text};

/// Editorial checks for marketing content deliverables
#[derive(Parser)]
#[command(name = "copydesk")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Checks:
  accessibility  Heading hierarchy, image alt text, link text, contrast guidance
  seo            Keyword density, H1/H2 structure, meta description, title
  readability    Reading ease against a minimum score (default 60)
  style          House style conventions (dates, times, percent, spelling)

Only CRITICAL findings fail a check; WARNING and INFO findings are advisory.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check accessibility structure
    Accessibility {
        /// Content file to check (.md, .html, or plain text)
        file: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Check SEO structure for a target keyword
    Seo {
        /// Content file to check
        file: PathBuf,

        /// Target keyword to optimize for
        keyword: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Score readability against a minimum reading-ease threshold
    Readability {
        /// Content file to check
        file: PathBuf,

        /// Minimum reading-ease score
        #[arg(short = 't', long, default_value_t = 60.0)]
        threshold: f64,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Check house style conventions
    Style {
        /// Content file to check
        file: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("copydesk=debug,editorial_engine=debug")
    } else {
        EnvFilter::new("copydesk=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (file, check, common) = match cli.command {
        Commands::Accessibility { file, common } => (file, Check::Accessibility, common),
        Commands::Seo {
            file,
            keyword,
            common,
        } => (file, Check::Seo { keyword }, common),
        Commands::Readability {
            file,
            threshold,
            common,
        } => (file, Check::Readability { threshold }, common),
        Commands::Style { file, common } => (file, Check::Style, common),
    };

    init_logging(common.verbose);

    let report = editorial_engine::validate_file(&file, &check)?;
    tracing::debug!(
        passed = report.passed,
        findings = report.findings.len(),
        "validation complete"
    );

    let rendered = match common.format {
        FormatArg::Text => render_text(&report, &file),
        FormatArg::Json => render_json(&report)?,
    };
    println!("{}", rendered);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
