//! Transparency card: disclosure of sourcing, funding, methodology.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GREEN, LIME, RED,
};
use crate::markup::{el, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Transparency tiers: ≥80 highly transparent, ≥65 adequate disclosure,
/// ≥45 limited disclosure, else opaque.
const TIERS: TierTable = TierTable(&[
    (80.0, "Highly Transparent", GREEN),
    (65.0, "Adequate Disclosure", LIME),
    (45.0, "Limited Disclosure", AMBER),
    (0.0, "Opaque", RED),
]);

pub struct TransparencyCard;

impl Card for TransparencyCard {
    fn id(&self) -> &'static str {
        "transparency-analyzer"
    }

    fn title(&self) -> &'static str {
        ServiceKind::TransparencyAnalyzer.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::TransparencyAnalyzer.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::TransparencyAnalyzer);
        section
            .has_data()
            .then(|| TIERS.label(section.score).to_string())
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::TransparencyAnalyzer);
        if section.has_data() {
            TIERS.label(section.score).to_string()
        } else {
            super::NO_DATA.to_string()
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::TransparencyAnalyzer);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));
        if let Some(ref analysis) = section.analysis {
            body = body.child(narrative_block(analysis));
        }
        if let Some(list) = findings_list(&section.findings) {
            body = body.child(list);
        }
        Ok(body)
    }
}
