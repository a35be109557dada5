//! Bias detection card, with per-dimension bars.

use super::{
    findings_list, narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER,
    GREEN, ORANGE, RED,
};
use crate::markup::{el, text, Node};
use crate::{AnalysisReport, ServiceKind};
use anyhow::Result;

/// Bias tiers (score is objectivity, higher = less biased): ≥75 minimal,
/// ≥60 moderate, ≥40 notable, else heavy. Note the 75 top cut — this card's
/// call site never used the 80 cut the others do.
const TIERS: TierTable = TierTable(&[
    (75.0, "Minimal Bias", GREEN),
    (60.0, "Moderate Bias", AMBER),
    (40.0, "Notable Bias", ORANGE),
    (0.0, "Heavy Bias", RED),
]);

pub struct BiasCard;

impl Card for BiasCard {
    fn id(&self) -> &'static str {
        "bias-detector"
    }

    fn title(&self) -> &'static str {
        ServiceKind::BiasDetector.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::BiasDetector.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::BiasDetector);
        section
            .has_data()
            .then(|| TIERS.label(section.score).to_string())
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::BiasDetector);
        if !section.has_data() {
            return super::NO_DATA.to_string();
        }
        match section.dimensions.len() {
            0 => TIERS.label(section.score).to_string(),
            n => format!("{} · {} dimensions", TIERS.label(section.score), n),
        }
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::BiasDetector);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));

        if !section.dimensions.is_empty() {
            body = body.child(
                el("div")
                    .class("dimensions")
                    .children(section.dimensions.iter().map(|(name, value)| {
                        el("div")
                            .class("dim-row")
                            .child(el("span").class("dim-name").child(text(display_name(name))))
                            .child(
                                el("span").class("dim-bar").child(
                                    el("span")
                                        .class("dim-fill")
                                        .attr("style", format!("width:{:.0}%", value)),
                                ),
                            )
                            .child(
                                el("span")
                                    .class("dim-val")
                                    .child(text(format!("{:.0}", value))),
                            )
                    })),
            );
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

/// snake_case dimension keys read poorly in the UI.
fn display_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut capitalize = true;
    for c in key.chars() {
        if c == '_' || c == '-' {
            out.push(' ');
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_cut_points() {
        assert_eq!(TIERS.label(75.0), "Minimal Bias");
        assert_eq!(TIERS.label(74.9), "Moderate Bias");
        assert_eq!(TIERS.label(40.0), "Notable Bias");
        assert_eq!(TIERS.label(5.0), "Heavy Bias");
    }

    #[test]
    fn test_dimension_bars() {
        let report = crate::normalize::normalize(&json!({
            "detailed_analysis": {"bias_detector": {
                "score": 68,
                "dimensions": {"emotional_language": 55, "framing": 80}
            }}
        }));
        let html = BiasCard.render(&report).unwrap().to_html();
        assert!(html.contains("Emotional Language"));
        assert!(html.contains("width:55%"));
        assert!(html.contains("Framing"));
        assert!(html.contains("Moderate Bias"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("emotional_language"), "Emotional Language");
        assert_eq!(display_name("framing"), "Framing");
    }
}
