//! Multi-page PDF report.
//!
//! The layout engine in [`layout`] paginates with a top-down cursor, the
//! painter in [`sections`] draws the pages, and [`surface`] abstracts the
//! printpdf backend so layout behavior is testable without parsing PDFs.

pub mod layout;
mod sections;
pub mod surface;
pub mod theme;

pub use surface::{PrintPdfSurface, Surface};

use crate::content::slugify;
use crate::{AnalysisReport, Error};
use std::path::Path;

/// Render the full report and return the PDF bytes.
pub fn generate(report: &AnalysisReport) -> Result<Vec<u8>, Error> {
    let title = match report.source {
        Some(ref source) => format!("TruthLens Report – {source}"),
        None => "TruthLens Report".to_string(),
    };
    let mut surface = PrintPdfSurface::new(&title)?;
    sections::draw_report(&mut surface, report);
    surface.finish()
}

/// Default output name: brand prefix, article slug, timestamp.
pub fn report_filename(report: &AnalysisReport) -> String {
    let slug = slugify(report.source.as_deref().unwrap_or(""));
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("truthlens-news-report-{slug}-{stamp}.pdf")
}

/// Render and write the report. The bytes are produced in full before the
/// file is touched, so a render failure never leaves a partial PDF behind.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<(), Error> {
    let bytes = generate(report)?;
    std::fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_produces_pdf_bytes() {
        let report = crate::normalize::normalize(&json!({
            "trust_score": 64,
            "source": "The Example Times",
            "detailed_analysis": {"fact_checker": {
                "score": 70,
                "claims": [{"claim": "Water is wet", "verdict": "true"}]
            }}
        }));
        let bytes = generate(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn test_report_filename_shape() {
        let report = crate::normalize::normalize(&json!({"source": "The Example Times!"}));
        let name = report_filename(&report);
        assert!(name.starts_with("truthlens-news-report-the-example-times-"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_report_filename_without_source() {
        let name = report_filename(&crate::normalize::normalize(&json!({})));
        assert!(name.starts_with("truthlens-news-report-article-"));
    }
}
