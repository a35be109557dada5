//! TruthLens: report rendering for news-credibility analyses
//!
//! This library consumes the AnalysisResult JSON document produced by the
//! TruthLens backend and renders it as a console summary, a self-contained
//! HTML dashboard, or a multi-page PDF report. The backend payload is loosely
//! typed; everything here consumes the normalized model built once at the
//! boundary by [`normalize`].

pub mod cards;
pub mod content;
pub mod dashboard;
pub mod markup;
pub mod normalize;
pub mod pdf;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// Errors surfaced by report generation.
///
/// Missing or malformed *fields* never produce errors (they degrade to
/// defaults during normalization); these cover the cases where no output can
/// be produced at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document is not JSON at all.
    #[error("invalid analysis JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The PDF backend failed to build the document.
    #[error("PDF backend error: {0}")]
    Pdf(String),
    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The normalized analysis document.
///
/// Produced once per backend payload by [`normalize::normalize`]; every field
/// is already defaulted, so renderers never probe for alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Aggregate credibility metric (0-100).
    pub trust_score: f64,
    /// Outlet name, e.g. "Reuters".
    pub source: Option<String>,
    /// Byline author.
    pub author: Option<String>,
    /// Article length in words.
    pub word_count: Option<u64>,
    /// Backend-written article summary.
    pub article_summary: Option<String>,
    /// Backend-written summary of the findings.
    pub findings_summary: Option<String>,
    /// One section per analysis service that was present in the payload,
    /// in [`ServiceKind::ALL`] order.
    pub services: Vec<ServiceSection>,
}

impl AnalysisReport {
    /// Look up a service section by kind.
    pub fn service(&self, kind: ServiceKind) -> Option<&ServiceSection> {
        self.services.iter().find(|s| s.kind == kind)
    }

    /// Claim totals across the fact-checker section (empty totals when the
    /// service is absent).
    pub fn claim_totals(&self) -> ClaimTotals {
        self.service(ServiceKind::FactChecker)
            .map(|s| ClaimTotals::tally(&s.claims))
            .unwrap_or_default()
    }
}

/// The seven analysis services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    SourceCredibility,
    BiasDetector,
    FactChecker,
    AuthorAnalyzer,
    TransparencyAnalyzer,
    ManipulationDetector,
    ContentAnalyzer,
}

impl ServiceKind {
    /// All services in dashboard and report order.
    pub const ALL: [ServiceKind; 7] = [
        ServiceKind::SourceCredibility,
        ServiceKind::BiasDetector,
        ServiceKind::FactChecker,
        ServiceKind::AuthorAnalyzer,
        ServiceKind::TransparencyAnalyzer,
        ServiceKind::ManipulationDetector,
        ServiceKind::ContentAnalyzer,
    ];

    /// The key used for this service in the backend's `detailed_analysis` map.
    pub fn key(&self) -> &'static str {
        match self {
            ServiceKind::SourceCredibility => "source_credibility",
            ServiceKind::BiasDetector => "bias_detector",
            ServiceKind::FactChecker => "fact_checker",
            ServiceKind::AuthorAnalyzer => "author_analyzer",
            ServiceKind::TransparencyAnalyzer => "transparency_analyzer",
            ServiceKind::ManipulationDetector => "manipulation_detector",
            ServiceKind::ContentAnalyzer => "content_analyzer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::SourceCredibility => "Source Credibility",
            ServiceKind::BiasDetector => "Bias Detection",
            ServiceKind::FactChecker => "Fact Check",
            ServiceKind::AuthorAnalyzer => "Author Analysis",
            ServiceKind::TransparencyAnalyzer => "Transparency",
            ServiceKind::ManipulationDetector => "Manipulation Detection",
            ServiceKind::ContentAnalyzer => "Content Quality",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceKind::SourceCredibility => "🏛",
            ServiceKind::BiasDetector => "⚖",
            ServiceKind::FactChecker => "✓",
            ServiceKind::AuthorAnalyzer => "✍",
            ServiceKind::TransparencyAnalyzer => "🔍",
            ServiceKind::ManipulationDetector => "🎭",
            ServiceKind::ContentAnalyzer => "📝",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One analysis service's normalized section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub kind: ServiceKind,
    /// Service score (0-100, higher = healthier). 0 when the backend sent
    /// nothing usable.
    pub score: f64,
    /// The three-part narrative, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    /// Free-text findings, already filtered of placeholder junk.
    pub findings: Vec<String>,
    /// Merged claim list (fact-checker only; empty elsewhere).
    pub claims: Vec<MergedClaim>,
    /// Named sub-scores, e.g. bias dimensions (name, 0-100 value).
    pub dimensions: Vec<(String, f64)>,
}

impl ServiceSection {
    /// An empty section for a service the backend omitted.
    pub fn empty(kind: ServiceKind) -> Self {
        Self {
            kind,
            score: 0.0,
            analysis: None,
            findings: Vec::new(),
            claims: Vec::new(),
            dimensions: Vec::new(),
        }
    }

    /// True when there is anything beyond the bare score to show.
    pub fn has_data(&self) -> bool {
        self.score > 0.0
            || self.analysis.is_some()
            || !self.findings.is_empty()
            || !self.claims.is_empty()
            || !self.dimensions.is_empty()
    }
}

/// The "what we looked / found / what it means" narrative block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub what_we_looked: Option<String>,
    pub what_we_found: Option<String>,
    pub what_it_means: Option<String>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.what_we_looked.is_none()
            && self.what_we_found.is_none()
            && self.what_it_means.is_none()
    }
}

/// The fixed 13-value verdict scale for fact-check claims.
///
/// Unknown verdict strings parse to [`Verdict::Unverified`]; parsing never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    MostlyTrue,
    PartiallyTrue,
    Exaggerated,
    Misleading,
    MostlyFalse,
    False,
    EmptyRhetoric,
    UnsubstantiatedPrediction,
    NeedsContext,
    Opinion,
    Mixed,
    Unverified,
}

/// Fixed icon/label/color triple for one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerdictVisual {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// An sRGB color shared by the dashboard CSS and the PDF theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. "#22c55e".
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Verdict {
    pub const ALL: [Verdict; 13] = [
        Verdict::True,
        Verdict::MostlyTrue,
        Verdict::PartiallyTrue,
        Verdict::Exaggerated,
        Verdict::Misleading,
        Verdict::MostlyFalse,
        Verdict::False,
        Verdict::EmptyRhetoric,
        Verdict::UnsubstantiatedPrediction,
        Verdict::NeedsContext,
        Verdict::Opinion,
        Verdict::Mixed,
        Verdict::Unverified,
    ];

    /// Parse a backend verdict string. Trims, lowercases, and treats spaces
    /// and dashes as underscores; anything unrecognized is `Unverified`.
    pub fn parse(s: &str) -> Self {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match key.as_str() {
            "true" => Verdict::True,
            "mostly_true" => Verdict::MostlyTrue,
            "partially_true" => Verdict::PartiallyTrue,
            "exaggerated" => Verdict::Exaggerated,
            "misleading" => Verdict::Misleading,
            "mostly_false" => Verdict::MostlyFalse,
            "false" => Verdict::False,
            "empty_rhetoric" => Verdict::EmptyRhetoric,
            "unsubstantiated_prediction" => Verdict::UnsubstantiatedPrediction,
            "needs_context" => Verdict::NeedsContext,
            "opinion" => Verdict::Opinion,
            "mixed" => Verdict::Mixed,
            _ => Verdict::Unverified,
        }
    }

    /// The centralized icon/label/color mapping. Every verdict has a distinct
    /// triple; `Unverified` doubles as the fallback for unknown strings.
    pub fn visual(&self) -> VerdictVisual {
        match self {
            Verdict::True => VerdictVisual {
                icon: "✓",
                label: "True",
                color: Color::new(34, 197, 94),
            },
            Verdict::MostlyTrue => VerdictVisual {
                icon: "✓",
                label: "Mostly True",
                color: Color::new(132, 204, 22),
            },
            Verdict::PartiallyTrue => VerdictVisual {
                icon: "◐",
                label: "Partially True",
                color: Color::new(234, 179, 8),
            },
            Verdict::Exaggerated => VerdictVisual {
                icon: "▲",
                label: "Exaggerated",
                color: Color::new(249, 115, 22),
            },
            Verdict::Misleading => VerdictVisual {
                icon: "⚠",
                label: "Misleading",
                color: Color::new(251, 146, 60),
            },
            Verdict::MostlyFalse => VerdictVisual {
                icon: "✗",
                label: "Mostly False",
                color: Color::new(248, 113, 113),
            },
            Verdict::False => VerdictVisual {
                icon: "✗",
                label: "False",
                color: Color::new(239, 68, 68),
            },
            Verdict::EmptyRhetoric => VerdictVisual {
                icon: "○",
                label: "Empty Rhetoric",
                color: Color::new(148, 163, 184),
            },
            Verdict::UnsubstantiatedPrediction => VerdictVisual {
                icon: "◇",
                label: "Unsubstantiated Prediction",
                color: Color::new(129, 140, 248),
            },
            Verdict::NeedsContext => VerdictVisual {
                icon: "ℹ",
                label: "Needs Context",
                color: Color::new(59, 130, 246),
            },
            Verdict::Opinion => VerdictVisual {
                icon: "✎",
                label: "Opinion",
                color: Color::new(168, 85, 247),
            },
            Verdict::Mixed => VerdictVisual {
                icon: "◑",
                label: "Mixed",
                color: Color::new(245, 158, 11),
            },
            Verdict::Unverified => VerdictVisual {
                icon: "?",
                label: "Unverified",
                color: Color::new(113, 113, 122),
            },
        }
    }

    /// Four-way rollup used for claim statistics.
    pub fn status(&self) -> ClaimStatus {
        match self {
            Verdict::True | Verdict::MostlyTrue => ClaimStatus::Verified,
            Verdict::False | Verdict::MostlyFalse => ClaimStatus::False,
            Verdict::Mixed
            | Verdict::PartiallyTrue
            | Verdict::Misleading
            | Verdict::Exaggerated => ClaimStatus::Mixed,
            Verdict::EmptyRhetoric
            | Verdict::UnsubstantiatedPrediction
            | Verdict::NeedsContext
            | Verdict::Opinion
            | Verdict::Unverified => ClaimStatus::Unverified,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.visual().label)
    }
}

/// Four-way claim classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    False,
    Mixed,
    Unverified,
}

/// Claim counts; the four buckets always partition the claim list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTotals {
    pub verified: usize,
    pub false_claims: usize,
    pub mixed: usize,
    pub unverified: usize,
}

impl ClaimTotals {
    pub fn tally(claims: &[MergedClaim]) -> Self {
        let mut totals = Self::default();
        for claim in claims {
            match claim.status {
                ClaimStatus::Verified => totals.verified += 1,
                ClaimStatus::False => totals.false_claims += 1,
                ClaimStatus::Mixed => totals.mixed += 1,
                ClaimStatus::Unverified => totals.unverified += 1,
            }
        }
        totals
    }

    pub fn total(&self) -> usize {
        self.verified + self.false_claims + self.mixed + self.unverified
    }
}

/// A key claim merged with its fact-check result, when one matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedClaim {
    pub text: String,
    pub verdict: Verdict,
    pub status: ClaimStatus,
    /// None when no fact-check matched this claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact_check: Option<FactCheck>,
}

/// A fact-check attached to a claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheck {
    pub explanation: Option<String>,
    pub sources: Vec<String>,
    /// Checker confidence (0-100) when reported.
    pub confidence: Option<f64>,
}

/// Parse and normalize one backend AnalysisResult document.
///
/// The only error is syntactically invalid JSON; a valid document with
/// missing or malformed fields normalizes to defaults.
pub fn parse_report(json: &str) -> Result<AnalysisReport, Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(normalize::normalize(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_verdict_parse_known_values() {
        assert_eq!(Verdict::parse("true"), Verdict::True);
        assert_eq!(Verdict::parse("mostly_true"), Verdict::MostlyTrue);
        assert_eq!(Verdict::parse("MOSTLY TRUE"), Verdict::MostlyTrue);
        assert_eq!(Verdict::parse("  needs-context "), Verdict::NeedsContext);
        assert_eq!(
            Verdict::parse("unsubstantiated_prediction"),
            Verdict::UnsubstantiatedPrediction
        );
    }

    #[test]
    fn test_verdict_parse_unknown_falls_back() {
        assert_eq!(Verdict::parse("half-baked"), Verdict::Unverified);
        assert_eq!(Verdict::parse(""), Verdict::Unverified);
        assert_eq!(
            Verdict::parse("half-baked").visual(),
            Verdict::Unverified.visual()
        );
    }

    #[test]
    fn test_verdict_visuals_distinct_and_nonempty() {
        let mut seen = HashSet::new();
        for verdict in Verdict::ALL {
            let visual = verdict.visual();
            assert!(!visual.icon.is_empty());
            assert!(!visual.label.is_empty());
            assert!(
                seen.insert((visual.icon, visual.label, visual.color.hex())),
                "duplicate visual for {verdict:?}"
            );
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn test_claim_totals_partition() {
        let claims: Vec<MergedClaim> = Verdict::ALL
            .iter()
            .map(|&verdict| MergedClaim {
                text: format!("claim {verdict}"),
                verdict,
                status: verdict.status(),
                fact_check: None,
            })
            .collect();
        let totals = ClaimTotals::tally(&claims);
        assert_eq!(totals.total(), claims.len());
        assert_eq!(totals.verified, 2);
        assert_eq!(totals.false_claims, 2);
        assert_eq!(totals.mixed, 4);
        assert_eq!(totals.unverified, 5);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::new(34, 197, 94).hex(), "#22c55e");
        assert_eq!(Color::new(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn test_service_kind_keys_order() {
        let keys: Vec<&str> = ServiceKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys[0], "source_credibility");
        assert_eq!(keys[6], "content_analyzer");
        assert_eq!(keys.len(), 7);
    }
}
