//! Fact-check card: unified claim list with verdict chips and totals.

use super::{
    narrative_block, no_data, score_header, section_of, Card, TierTable, AMBER, GREEN, ORANGE, RED,
};
use crate::markup::{el, text, Node};
use crate::{AnalysisReport, ClaimTotals, MergedClaim, ServiceKind};
use anyhow::Result;

/// Fact-check accuracy tiers: ≥80 high, ≥60 mixed, ≥40 low, else very low.
const TIERS: TierTable = TierTable(&[
    (80.0, "High Accuracy", GREEN),
    (60.0, "Mixed Accuracy", AMBER),
    (40.0, "Low Accuracy", ORANGE),
    (0.0, "Very Low Accuracy", RED),
]);

pub struct FactCheckCard;

impl Card for FactCheckCard {
    fn id(&self) -> &'static str {
        "fact-checker"
    }

    fn title(&self) -> &'static str {
        ServiceKind::FactChecker.title()
    }

    fn icon(&self) -> &'static str {
        ServiceKind::FactChecker.icon()
    }

    fn badge(&self, report: &AnalysisReport) -> Option<String> {
        let section = section_of(report, ServiceKind::FactChecker);
        match section.claims.len() {
            0 => None,
            1 => Some("1 claim".to_string()),
            n => Some(format!("{n} claims")),
        }
    }

    fn preview(&self, report: &AnalysisReport) -> String {
        let section = section_of(report, ServiceKind::FactChecker);
        if !section.has_data() {
            return super::NO_DATA.to_string();
        }
        let totals = ClaimTotals::tally(&section.claims);
        if totals.total() == 0 {
            return TIERS.label(section.score).to_string();
        }
        format!(
            "{} verified · {} false · {} mixed · {} unverified",
            totals.verified, totals.false_claims, totals.mixed, totals.unverified
        )
    }

    fn render(&self, report: &AnalysisReport) -> Result<Node> {
        let section = section_of(report, ServiceKind::FactChecker);
        if !section.has_data() {
            return Ok(no_data());
        }
        let mut body = el("div")
            .class("card")
            .child(score_header(section.score, &TIERS));

        let totals = ClaimTotals::tally(&section.claims);
        if totals.total() > 0 {
            body = body.child(
                el("div").class("claim-stats").children([
                    stat("verified", totals.verified),
                    stat("false", totals.false_claims),
                    stat("mixed", totals.mixed),
                    stat("unverified", totals.unverified),
                ]),
            );
            body = body.child(
                el("ul")
                    .class("claims")
                    .children(section.claims.iter().map(claim_item)),
            );
        }

        if let Some(ref analysis) = section.analysis {
            body = body.child(narrative_block(analysis));
        }
        Ok(body)
    }
}

fn stat(name: &'static str, count: usize) -> Node {
    el("span")
        .class(format!("stat stat-{name}"))
        .child(text(format!("{count} {name}")))
}

fn claim_item(claim: &MergedClaim) -> Node {
    let visual = claim.verdict.visual();
    let mut item = el("li")
        .class("claim")
        .child(
            el("span")
                .class("verdict-chip")
                .attr("style", format!("color:{}", visual.color.hex()))
                .child(text(format!("{} {}", visual.icon, visual.label))),
        )
        .child(el("span").class("claim-text").child(text(&claim.text)));

    if let Some(ref check) = claim.fact_check {
        if let Some(ref explanation) = check.explanation {
            item = item.child(el("p").class("explanation").child(text(explanation)));
        }
        if !check.sources.is_empty() {
            item = item.child(
                el("p")
                    .class("sources")
                    .child(text(format!("Sources: {}", check.sources.join(", ")))),
            );
        }
    }
    item
}
