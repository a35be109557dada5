//! Manipulation detection card.
//!
//! Score polarity follows the rest of the suite: high score = few
//! manipulation techniques found.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GREEN, ORANGE, RED,
};
use crate::markup::{el, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Manipulation tiers: ≥85 clean, ≥65 minor techniques, ≥40 several
/// techniques, else heavily manipulative. The 85 top cut is deliberately
/// stricter than the other cards.
const TIERS: TierTable = TierTable(&[
    (85.0, "Clean", GREEN),
    (65.0, "Minor Techniques", AMBER),
    (40.0, "Several Techniques", ORANGE),
    (0.0, "Heavily Manipulative", RED),
]);

pub struct ManipulationCard;

impl Card for ManipulationCard {
    fn id(&self) -> &'static str {
        "manipulation-detector"
    }

    fn title(&self) -> &'static str {
        ServiceKind::ManipulationDetector.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::ManipulationDetector.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::ManipulationDetector);
        match section.findings.len() {
            0 => None,
            1 => Some("1 technique".to_string()),
            n => Some(format!("{n} techniques")),
        }
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::ManipulationDetector);
        if section.has_data() {
            TIERS.label(section.score).to_string()
        } else {
            super::NO_DATA.to_string()
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::ManipulationDetector);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));
        if let Some(list) = findings_list(&section.findings) {
            body = body.child(list);
        }
        if let Some(ref analysis) = section.analysis {
            body = body.child(narrative_block(analysis));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_cut_points() {
        assert_eq!(TIERS.label(85.0), "Clean");
        assert_eq!(TIERS.label(84.9), "Minor Techniques");
        assert_eq!(TIERS.label(40.0), "Several Techniques");
        assert_eq!(TIERS.label(39.9), "Heavily Manipulative");
    }

    #[test]
    fn test_badge_counts_techniques() {
        let report = crate::normalize::normalize(&json!({
            "detailed_analysis": {"manipulation_detector": {
                "score": 55,
                "findings": [
                    "Repeated appeal-to-fear framing in the opening paragraphs.",
                    "Quotes are truncated in ways that reverse their meaning."
                ]
            }}
        }));
        assert_eq!(
            ManipulationCard.badge(&report).as_deref(),
            Some("2 techniques")
        );
    }
}
