//! Source credibility card.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GREEN, LIME, ORANGE, RED,
};
use crate::markup::{el, text, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Source-credibility tiers: ≥80 excellent, ≥70 good, ≥60 fair,
/// ≥40 concerning, else poor. Finer-grained than the trust scale because the
/// dashboard surfaces this tier verbatim in the header badge.
const TIERS: TierTable = TierTable(&[
    (80.0, "Excellent", GREEN),
    (70.0, "Good", LIME),
    (60.0, "Fair", AMBER),
    (40.0, "Concerning", ORANGE),
    (0.0, "Poor", RED),
]);

pub struct SourceCredibilityCard;

impl Card for SourceCredibilityCard {
    fn id(&self) -> &'static str {
        "source-credibility"
    }

    fn title(&self) -> &'static str {
        ServiceKind::SourceCredibility.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::SourceCredibility.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::SourceCredibility);
        section
            .has_data()
            .then(|| TIERS.label(section.score).to_string())
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::SourceCredibility);
        match (section.has_data(), report.source.as_ref()) {
            (true, Some(source)) => format!("{} — {}", source, TIERS.label(section.score)),
            (true, None) => TIERS.label(section.score).to_string(),
            (false, _) => super::NO_DATA.to_string(),
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::SourceCredibility);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));
        if let Some(ref source) = report.source {
            body = body.child(el("p").class("meta").child(text(format!("Outlet: {source}"))));
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
