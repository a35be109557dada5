//! Content quality card.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GREEN, ORANGE, RED,
};
use crate::markup::{el, text, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Content-quality tiers: ≥80 high quality, ≥60 adequate, ≥40 thin,
/// else poor.
const TIERS: TierTable = TierTable(&[
    (80.0, "High Quality", GREEN),
    (60.0, "Adequate", AMBER),
    (40.0, "Thin", ORANGE),
    (0.0, "Poor", RED),
]);

pub struct ContentQualityCard;

impl Card for ContentQualityCard {
    fn id(&self) -> &'static str {
        "content-analyzer"
    }

    fn title(&self) -> &'static str {
        ServiceKind::ContentAnalyzer.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::ContentAnalyzer.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        report.word_count.map(|w| format!("{w} words"))
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::ContentAnalyzer);
        if section.has_data() {
            TIERS.label(section.score).to_string()
        } else {
            super::NO_DATA.to_string()
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::ContentAnalyzer);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));
        if let Some(words) = report.word_count {
            body = body.child(el("p").class("meta").child(text(format!("{words} words"))));
        }
        if let Some(ref analysis) = section.analysis {
            body = body.child(narrative_block(analysis));
        }
        if let Some(list) = findings_list(&section.findings) {
            body = body.child(list);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_cut_points() {
        assert_eq!(TIERS.label(80.0), "High Quality");
        assert_eq!(TIERS.label(79.9), "Adequate");
        assert_eq!(TIERS.label(59.9), "Thin");
        assert_eq!(TIERS.label(20.0), "Poor");
    }
}
