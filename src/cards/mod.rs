//! Dashboard card renderers, one per analysis service.
//!
//! Every card is a pure function from the normalized report to a markup
//! fragment. The registry renders each card defensively: a failing renderer
//! is replaced by a placeholder so sibling sections are unaffected.

pub mod author;
pub mod bias;
pub mod content_quality;
pub mod fact_check;
pub mod manipulation;
pub mod source;
pub mod transparency;
pub mod trust;

use crate::markup::{el, text, Node};
use crate::{Analysis, AnalysisReport, Color, ServiceKind, ServiceSection};
use anyhow::Result;

pub use author::AuthorCard;
pub use bias::BiasCard;
pub use content_quality::ContentQualityCard;
pub use fact_check::FactCheckCard;
pub use manipulation::ManipulationCard;
pub use source::SourceCredibilityCard;
pub use transparency::TransparencyCard;
pub use trust::TrustSummaryCard;

/// Shown when a section has nothing to render.
pub const NO_DATA: &str = "No data available";
/// Shown when a renderer fails.
pub const RENDER_ERROR: &str = "Error loading content";

// Tier palette shared by the cards and the PDF theme.
pub const GREEN: Color = Color::new(34, 197, 94);
pub const LIME: Color = Color::new(132, 204, 22);
pub const AMBER: Color = Color::new(234, 179, 8);
pub const ORANGE: Color = Color::new(249, 115, 22);
pub const RED: Color = Color::new(239, 68, 68);
pub const GRAY: Color = Color::new(113, 113, 122);

/// One dashboard card.
pub trait Card {
    /// Stable DOM id / anchor.
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    /// Always-open cards skip the accordion collapse.
    fn always_open(&self) -> bool {
        false
    }
    /// Small counter/label shown in the section header.
    fn badge(&self, report: &AnalysisReport) -> Option<String>;
    /// One-line teaser shown while collapsed.
    fn preview(&self, report: &AnalysisReport) -> String;
    /// Render the card body.
    fn render(&self, report: &AnalysisReport) -> Result<Node>;
}

/// A score-to-label table: descending `(cut, label, color)` rows; the last
/// row is the floor and must have cut 0. Tables differ per card on purpose —
/// each reproduces its own call site's thresholds.
pub struct TierTable(pub &'static [(f64, &'static str, Color)]);

impl TierTable {
    pub fn tier(&self, score: f64) -> (&'static str, Color) {
        for &(cut, label, color) in self.0 {
            if score >= cut {
                return (label, color);
            }
        }
        // Unreachable with a 0 floor, but stay total for negative inputs.
        let &(_, label, color) = self.0.last().expect("non-empty tier table");
        (label, color)
    }

    pub fn label(&self, score: f64) -> &'static str {
        self.tier(score).0
    }

    pub fn color(&self, score: f64) -> Color {
        self.tier(score).1
    }
}

/// A rendered accordion section, ready for page assembly.
pub struct SectionView {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub badge: Option<String>,
    pub preview: String,
    pub always_open: bool,
    pub body: Node,
}

/// The card registry: the composition root registers renderers here instead
/// of hanging them off a page-global object.
pub struct CardRegistry {
    cards: Vec<Box<dyn Card>>,
}

impl CardRegistry {
    /// The standard TruthLens card set: trust summary first (always open),
    /// then the seven services.
    pub fn standard() -> Self {
        Self {
            cards: vec![
                Box::new(TrustSummaryCard),
                Box::new(SourceCredibilityCard),
                Box::new(BiasCard),
                Box::new(FactCheckCard),
                Box::new(AuthorCard),
                Box::new(TransparencyCard),
                Box::new(ManipulationCard),
                Box::new(ContentQualityCard),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Render every card; a failing renderer yields a placeholder body
    /// instead of aborting the page.
    pub fn sections(&self, report: &AnalysisReport) -> Vec<SectionView> {
        self.cards
            .iter()
            .map(|card| SectionView {
                id: card.id(),
                title: card.title(),
                icon: card.icon(),
                badge: card.badge(report),
                preview: card.preview(report),
                always_open: card.always_open(),
                body: card.render(report).unwrap_or_else(|_| {
                    el("div").class("card-error").child(text(RENDER_ERROR))
                }),
            })
            .collect()
    }
}

// ─── Shared fragments ────────────────────────────────────────────────────

/// Section lookup for service cards; an omitted service renders as empty.
pub(crate) fn section_of(report: &AnalysisReport, kind: ServiceKind) -> ServiceSection {
    report
        .service(kind)
        .cloned()
        .unwrap_or_else(|| ServiceSection::empty(kind))
}

/// Score header: big number (count-up animated client-side) plus tier chip.
pub(crate) fn score_header(score: f64, tiers: &TierTable) -> Node {
    let (label, color) = tiers.tier(score);
    el("div")
        .class("score-row")
        .child(
            el("span")
                .class("score-num")
                .attr("data-countup", format!("{}", score.round() as i64))
                .attr("style", format!("color:{}", color.hex()))
                .child(text(format!("{}", score.round() as i64))),
        )
        .child(
            el("span")
                .class("tier-chip")
                .attr("style", format!("background:{}", color.hex()))
                .child(text(label)),
        )
}

/// The what-we-looked / found / means narrative block.
pub(crate) fn narrative_block(analysis: &Analysis) -> Node {
    let rows = [
        ("What we looked at", &analysis.what_we_looked),
        ("What we found", &analysis.what_we_found),
        ("What it means", &analysis.what_it_means),
    ];
    el("div").class("narrative").children(
        rows.into_iter()
            .filter_map(|(heading, body)| body.as_ref().map(|b| (heading, b)))
            .map(|(heading, body)| {
                el("div")
                    .class("narrative-row")
                    .child(el("h4").child(text(heading)))
                    .child(el("p").child(text(body)))
            }),
    )
}

/// Bullet list of findings; empty input renders nothing.
pub(crate) fn findings_list(findings: &[String]) -> Option<Node> {
    if findings.is_empty() {
        return None;
    }
    Some(
        el("ul")
            .class("findings")
            .children(findings.iter().map(|f| el("li").child(text(f)))),
    )
}

/// The standard "nothing here" body.
pub(crate) fn no_data() -> Node {
    el("p").class("no-data").child(text(NO_DATA))
}
