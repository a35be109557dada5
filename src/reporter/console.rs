//! Console reporter with colored output

use crate::{AnalysisReport, ServiceKind};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Full terminal report
    pub fn report(&self, report: &AnalysisReport) {
        self.print_header(report);
        self.print_trust_score(report);
        self.print_services(report);
        self.print_claims(report);
        if self.verbose {
            self.print_findings(report);
        }
        println!();
    }

    /// Quiet mode: one line, just the score
    pub fn report_quiet(&self, report: &AnalysisReport) {
        let score = report.trust_score.round() as i64;
        println!(
            "{}: {} ({})",
            report.source.as_deref().unwrap_or("article"),
            score,
            self.colorize_label(trust_label(report.trust_score), report.trust_score)
        );
    }

    fn print_header(&self, report: &AnalysisReport) {
        println!();
        println!("{}", "🔍 TruthLens Credibility Report".bold());
        let mut meta = Vec::new();
        if let Some(ref source) = report.source {
            meta.push(format!("Source: {source}"));
        }
        if let Some(ref author) = report.author {
            meta.push(format!("Author: {author}"));
        }
        if let Some(words) = report.word_count {
            meta.push(format!("Words: {words}"));
        }
        if !meta.is_empty() {
            println!("   {}", meta.join(" | "));
        }
        println!();
    }

    fn print_trust_score(&self, report: &AnalysisReport) {
        let bar = self.create_score_bar(report.trust_score);
        let label = self.colorize_label(trust_label(report.trust_score), report.trust_score);
        println!("   Trust: {} {}", bar, label.bold());
        println!();
    }

    fn print_services(&self, report: &AnalysisReport) {
        println!("   {}", "Service Scores:".bold());
        for kind in ServiceKind::ALL {
            match report.service(kind).filter(|s| s.has_data()) {
                Some(section) => {
                    let bar = self.create_mini_bar(section.score);
                    let value = format!("{:>3}", section.score.round() as i64);
                    let colored_value = if section.score >= 80.0 {
                        value.green()
                    } else if section.score >= 60.0 {
                        value.yellow()
                    } else {
                        value.red()
                    };
                    println!("   {} {} {}", bar, colored_value, kind.title());
                }
                None => {
                    println!(
                        "   {} {} {}",
                        "[░░░░░░░░░░]",
                        "n/a".dimmed(),
                        kind.title().dimmed()
                    );
                }
            }
        }
        println!();
    }

    fn print_claims(&self, report: &AnalysisReport) {
        let totals = report.claim_totals();
        if totals.total() == 0 {
            return;
        }
        println!(
            "   Claims: {} {} | {} {} | {} {} | {} {}",
            totals.verified.to_string().green(),
            "verified",
            totals.false_claims.to_string().red(),
            "false",
            totals.mixed.to_string().yellow(),
            "mixed",
            totals.unverified.to_string().dimmed(),
            "unverified"
        );
        println!();
    }

    fn print_findings(&self, report: &AnalysisReport) {
        for kind in ServiceKind::ALL {
            let Some(section) = report.service(kind).filter(|s| !s.findings.is_empty()) else {
                continue;
            };
            println!("   {}", format!("{}:", kind.title()).bold());
            for finding in &section.findings {
                println!("   {} {}", "→".cyan(), finding);
            }
            println!();
        }
    }

    fn colorize_label(&self, label: &str, score: f64) -> colored::ColoredString {
        if score >= 80.0 {
            label.green()
        } else if score >= 60.0 {
            label.yellow()
        } else {
            label.red()
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let score = score.clamp(0.0, 100.0);
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;
        let bar = format!(
            "[{}{}] {:>3}",
            "█".repeat(filled),
            "░".repeat(empty),
            score.round() as i64
        );

        if self.use_colors {
            if score >= 80.0 {
                bar.green().to_string()
            } else if score >= 60.0 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: f64) -> String {
        let filled = (score.clamp(0.0, 100.0) as usize * 10) / 100;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn trust_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Highly Credible"
    } else if score >= 60.0 {
        "Generally Credible"
    } else if score >= 40.0 {
        "Questionable"
    } else {
        "Low Credibility"
    }
}
