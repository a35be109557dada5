//! Trust summary card: the always-open header card for the whole analysis.

use super::{score_header, Card, TierTable, AMBER, GREEN, LIME, RED};
use crate::markup::{el, text, Node};
use crate::AnalysisReport;
use anyhow::Result;

/// Trust-score tiers. This is the overall scale, coarser than the per-service
/// tables: ≥80 highly credible, ≥60 generally credible, ≥40 questionable,
/// else low credibility.
const TIERS: TierTable = TierTable(&[
    (80.0, "Highly Credible", GREEN),
    (60.0, "Generally Credible", LIME),
    (40.0, "Questionable", AMBER),
    (0.0, "Low Credibility", RED),
]);

pub struct TrustSummaryCard;

impl Card for TrustSummaryCard {
    fn id(&self) -> &'static str {
        "trust-summary"
    }

    fn title(&self) -> &'static str {
        "Trust Score"
    }

    fn icon(&self) -> &'static str {
        "🛡"
    }

    fn always_open(&self) -> bool {
        true
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        Some(format!("{}/100", report.trust_score.round() as i64))
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        TIERS.label(report.trust_score).to_string()
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let mut body = el("div")
            .class("card trust-card")
            .child(score_header(report.trust_score, &TIERS));

        let meta: Vec<String> = [
            report.source.as_ref().map(|s| format!("Source: {s}")),
            report.author.as_ref().map(|a| format!("By {a}")),
            report.word_count.map(|w| format!("{w} words")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !meta.is_empty() {
            body = body.child(el("p").class("meta").child(text(meta.join(" · "))));
        }

        if let Some(ref summary) = report.article_summary {
            body = body.child(el("p").class("summary").child(text(summary)));
        }
        if let Some(ref findings) = report.findings_summary {
            body = body.child(el("p").class("summary dim").child(text(findings)));
        }

        let totals = report.claim_totals();
        if totals.total() > 0 {
            body = body.child(
                el("div").class("claim-stats").children([
                    stat("verified", totals.verified),
                    stat("false", totals.false_claims),
                    stat("mixed", totals.mixed),
                    stat("unverified", totals.unverified),
                ]),
            );
        }

        Ok(body)
    }
}

fn stat(name: &'static str, count: usize) -> Node {
    el("span")
        .class(format!("stat stat-{name}"))
        .child(text(format!("{count} {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trust_card_shows_score_and_meta() {
        let report = crate::normalize::normalize(&json!({
            "trust_score": 82,
            "source": "The Daily Planet",
            "author": "Lois Lane"
        }));
        let html = TrustSummaryCard.render(&report).unwrap().to_html();
        assert!(html.contains("data-countup=\"82\""));
        assert!(html.contains("Highly Credible"));
        assert!(html.contains("Source: The Daily Planet"));
        assert!(html.contains("By Lois Lane"));
    }

    #[test]
    fn test_tier_cut_points() {
        assert_eq!(TIERS.label(80.0), "Highly Credible");
        assert_eq!(TIERS.label(79.9), "Generally Credible");
        assert_eq!(TIERS.label(60.0), "Generally Credible");
        assert_eq!(TIERS.label(40.0), "Questionable");
        assert_eq!(TIERS.label(39.9), "Low Credibility");
    }

    #[test]
    fn test_claim_stats_rendered_when_present() {
        let report = crate::normalize::normalize(&json!({
            "detailed_analysis": {"fact_checker": {"claims": [
                {"claim": "X", "verdict": "true"},
                {"claim": "Y", "verdict": "false"}
            ]}}
        }));
        let html = TrustSummaryCard.render(&report).unwrap().to_html();
        assert!(html.contains("1 verified"));
        assert!(html.contains("1 false"));
        assert!(html.contains("0 mixed"));
        assert!(html.contains("0 unverified"));
    }
}
