//! TruthLens: news credibility report renderer CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use truthlens::content::slugify;
use truthlens::dashboard::Dashboard;
use truthlens::reporter::{ConsoleReporter, JsonReporter};
use truthlens::{parse_report, pdf, AnalysisReport};

/// TruthLens: render credibility analysis results as console, HTML, or PDF reports
#[derive(Parser, Debug)]
#[command(name = "truthlens")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analysis JSON file to render ("-" reads stdin)
    input: PathBuf,

    /// Write the HTML dashboard (default name derived from the source)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    html: Option<Option<PathBuf>>,

    /// Write the PDF report (default name derived from the source)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pdf: Option<Option<PathBuf>>,

    /// Print the normalized document as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line, just the trust score)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (include per-service findings)
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let raw = read_input(&args.input)?;
    let report = parse_report(&raw).with_context(|| {
        format!("failed to parse analysis document {}", args.input.display())
    })?;

    if let Some(ref path) = args.html {
        let path = path
            .clone()
            .unwrap_or_else(|| PathBuf::from(html_filename(&report)));
        let page = Dashboard::new().render(&report);
        std::fs::write(&path, page)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !args.quiet {
            eprintln!(
                "{}: HTML dashboard written to {}",
                "Done".green().bold(),
                path.display()
            );
        }
    }

    if let Some(ref path) = args.pdf {
        let path = path
            .clone()
            .unwrap_or_else(|| PathBuf::from(pdf::report_filename(&report)));
        pdf::write_report(&report, &path)?;
        if !args.quiet {
            eprintln!(
                "{}: PDF report written to {}",
                "Done".green().bold(),
                path.display()
            );
        }
    }

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&report));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&report);
    } else if (args.html.is_none() && args.pdf.is_none()) || args.verbose {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report(&report);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

fn html_filename(report: &AnalysisReport) -> String {
    let slug = slugify(report.source.as_deref().unwrap_or(""));
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("truthlens-news-report-{slug}-{stamp}.html")
}
