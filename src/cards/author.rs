//! Author credibility card.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GRAY, GREEN, LIME,
};
use crate::markup::{el, text, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Author tiers: ≥70 established, ≥50 some track record, ≥30 limited
/// background, else unknown. The floor is gray, not red — an unknown byline
/// is a gap, not an indictment.
const TIERS: TierTable = TierTable(&[
    (70.0, "Established", GREEN),
    (50.0, "Some Track Record", LIME),
    (30.0, "Limited Background", AMBER),
    (0.0, "Unknown", GRAY),
]);

pub struct AuthorCard;

impl Card for AuthorCard {
    fn id(&self) -> &'static str {
        "author-analyzer"
    }

    fn title(&self) -> &'static str {
        ServiceKind::AuthorAnalyzer.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::AuthorAnalyzer.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::AuthorAnalyzer);
        section
            .has_data()
            .then(|| TIERS.label(section.score).to_string())
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::AuthorAnalyzer);
        match (report.author.as_ref(), section.has_data()) {
            (Some(author), true) => format!("{} — {}", author, TIERS.label(section.score)),
            (Some(author), false) => author.clone(),
            (None, true) => TIERS.label(section.score).to_string(),
            (None, false) => super::NO_DATA.to_string(),
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::AuthorAnalyzer);
        if !section.has_data() && report.author.is_none() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));
        if let Some(ref author) = report.author {
            body = body.child(el("p").class("meta").child(text(author)));
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
    use serde_json::json;

    #[test]
    fn test_tier_cut_points() {
        assert_eq!(TIERS.label(70.0), "Established");
        assert_eq!(TIERS.label(50.0), "Some Track Record");
        assert_eq!(TIERS.label(30.0), "Limited Background");
        assert_eq!(TIERS.label(29.9), "Unknown");
    }

    #[test]
    fn test_author_name_without_service_data() {
        let report = crate::normalize::normalize(&json!({"author": "Lois Lane"}));
        let html = AuthorCard.render(&report).unwrap().to_html();
        assert!(html.contains("Lois Lane"));
        assert_eq!(AuthorCard.preview(&report), "Lois Lane");
    }
}
