//! The report painter: cover, contents, summary, service sections,
//! methodology, and the footer pass.
//!
//! Pages are drawn front to back with a pagination cursor. The contents
//! page is reserved up front and filled in once every section knows its
//! page number; footers are stamped last, when the total is final.
//!
//! The builtin Helvetica fonts cover WinAnsi only, so the painter sticks to
//! plain text labels and never draws the emoji icons the dashboard uses.

use crate::content::{clean_whitespace, filter_text};
use crate::pdf::layout::{
    line_height, text_width, wrap, Cursor, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::pdf::surface::Surface;
use crate::pdf::theme::{
    score_color, BRAND, INK, MUTED, PANEL, RULE, SIZE_BODY, SIZE_H1, SIZE_H2, SIZE_SMALL,
    SIZE_TITLE,
};
use crate::{AnalysisReport, Color, MergedClaim, ServiceKind, ServiceSection};

const WHITE: Color = Color::new(255, 255, 255);

struct TocEntry {
    title: String,
    page: usize,
}

struct Painter<'a> {
    surface: &'a mut dyn Surface,
    cursor: Cursor,
    toc: Vec<TocEntry>,
}

/// Draw the complete report onto a surface.
pub(super) fn draw_report(surface: &mut dyn Surface, report: &AnalysisReport) {
    let mut painter = Painter {
        surface,
        cursor: Cursor::top(),
        toc: Vec::new(),
    };

    painter.cover(report);

    painter.cursor.page_break(painter.surface);
    let toc_page = painter.surface.page_count() - 1;

    painter.cursor.page_break(painter.surface);
    painter.mark_section("Executive Summary");
    painter.executive_summary(report);

    for kind in ServiceKind::ALL {
        let section = report.service(kind);
        if let Some(section) = section.filter(|s| s.has_data()) {
            painter.cursor.page_break(painter.surface);
            painter.mark_section(kind.title());
            painter.service_section(report, section);
        }
    }

    painter.cursor.page_break(painter.surface);
    painter.mark_section("Methodology");
    painter.methodology();

    painter.fill_contents(toc_page);
    painter.footer_pass(report);
}

impl Painter<'_> {
    /// Record a contents entry for the page the cursor is on.
    fn mark_section(&mut self, title: &str) {
        self.toc.push(TocEntry {
            title: title.to_string(),
            page: self.surface.page_count(),
        });
    }

    // ─── Building blocks ─────────────────────────────────────────────────

    fn heading(&mut self, title: &str) {
        self.cursor.ensure_room(self.surface, 14.0);
        self.surface
            .text(title, MARGIN, self.cursor.y + 6.0, SIZE_H1, true, BRAND);
        self.cursor.advance(9.0);
        self.surface.line(
            MARGIN,
            self.cursor.y,
            MARGIN + CONTENT_WIDTH,
            self.cursor.y,
            0.8,
            RULE,
        );
        self.cursor.advance(6.0);
    }

    fn subheading(&mut self, title: &str) {
        self.cursor.ensure_room(self.surface, 10.0);
        self.surface
            .text(title, MARGIN, self.cursor.y + 4.0, SIZE_H2, true, INK);
        self.cursor.advance(7.0);
    }

    /// Wrapped paragraph at the left margin.
    fn paragraph(&mut self, content: &str, size: f64, color: Color) {
        self.paragraph_at(content, MARGIN, CONTENT_WIDTH, size, false, color);
        self.cursor.advance(2.0);
    }

    fn paragraph_at(
        &mut self,
        content: &str,
        x: f64,
        width: f64,
        size: f64,
        bold: bool,
        color: Color,
    ) {
        let step = line_height(size);
        for line in wrap(content, size, width) {
            self.cursor.ensure_room(self.surface, step);
            self.cursor.advance(step);
            self.surface.text(&line, x, self.cursor.y, size, bold, color);
        }
    }

    fn bullet(&mut self, content: &str) {
        let step = line_height(SIZE_BODY);
        self.cursor.ensure_room(self.surface, step);
        self.surface
            .circle(MARGIN + 1.5, self.cursor.y + step - 1.2, 0.7, MUTED);
        self.paragraph_at(content, MARGIN + 5.0, CONTENT_WIDTH - 5.0, SIZE_BODY, false, INK);
        self.cursor.advance(1.5);
    }

    /// Horizontal score bar with label and value, clamped to 0..=100.
    fn score_bar(&mut self, label: &str, score: Option<f64>) {
        self.cursor.ensure_room(self.surface, 8.0);
        let y = self.cursor.y;
        self.surface
            .text(label, MARGIN, y + 3.2, SIZE_BODY, false, INK);

        let bar_x = MARGIN + 62.0;
        let bar_w = CONTENT_WIDTH - 62.0 - 12.0;
        self.surface.rect(bar_x, y, bar_w, 3.5, PANEL);
        match score {
            Some(score) => {
                let clamped = score.clamp(0.0, 100.0);
                self.surface
                    .rect(bar_x, y, bar_w * clamped / 100.0, 3.5, score_color(score));
                let value = format!("{}", score.round() as i64);
                self.surface.text(
                    &value,
                    bar_x + bar_w + 3.0,
                    y + 3.2,
                    SIZE_BODY,
                    true,
                    score_color(score),
                );
            }
            None => {
                self.surface.text(
                    "n/a",
                    bar_x + bar_w + 3.0,
                    y + 3.2,
                    SIZE_BODY,
                    false,
                    MUTED,
                );
            }
        }
        self.cursor.advance(7.0);
    }

    fn centered_text(&mut self, content: &str, y: f64, size: f64, bold: bool, color: Color) {
        let x = (PAGE_WIDTH - text_width(content, size)) / 2.0;
        self.surface.text(content, x, y, size, bold, color);
    }

    // ─── Pages ───────────────────────────────────────────────────────────

    fn cover(&mut self, report: &AnalysisReport) {
        self.surface.rect(0.0, 0.0, PAGE_WIDTH, 4.0, BRAND);

        self.centered_text("TruthLens", 52.0, SIZE_TITLE, true, INK);
        self.centered_text("News Credibility Report", 62.0, SIZE_H2, false, MUTED);

        // Score ring.
        let cx = PAGE_WIDTH / 2.0;
        let cy = 115.0;
        let color = score_color(report.trust_score);
        self.surface.circle(cx, cy, 26.0, color);
        self.surface.circle(cx, cy, 21.5, WHITE);
        let score = format!("{}", report.trust_score.round() as i64);
        self.centered_text(&score, cy + 3.5, 24.0, true, color);
        self.centered_text("out of 100", cy + 10.0, SIZE_SMALL, false, MUTED);

        self.centered_text(trust_label(report.trust_score), 155.0, SIZE_H1, true, color);

        let mut y = 172.0;
        // Names are legitimately short; clean them but never denylist them.
        if let Some(ref source) = report.source {
            self.centered_text(&clean_whitespace(source), y, SIZE_BODY, false, INK);
            y += 6.5;
        }
        if let Some(ref author) = report.author {
            self.centered_text(
                &format!("by {}", clean_whitespace(author)),
                y,
                SIZE_BODY,
                false,
                INK,
            );
            y += 6.5;
        }
        let totals = report.claim_totals();
        if totals.total() > 0 {
            let line = format!(
                "{} claims checked: {} verified, {} false, {} mixed, {} unverified",
                totals.total(),
                totals.verified,
                totals.false_claims,
                totals.mixed,
                totals.unverified
            );
            self.centered_text(&line, y + 4.0, SIZE_BODY, false, MUTED);
        }

        let stamp = chrono::Local::now().format("%B %e, %Y").to_string();
        self.centered_text(&stamp, 250.0, SIZE_SMALL, false, MUTED);
    }

    fn executive_summary(&mut self, report: &AnalysisReport) {
        self.heading("Executive Summary");

        let overall = format!(
            "Overall trust score: {} of 100 ({})",
            report.trust_score.round() as i64,
            trust_label(report.trust_score)
        );
        self.paragraph_at(&overall, MARGIN, CONTENT_WIDTH, SIZE_H2, true, INK);
        self.cursor.advance(3.0);

        if let Some(ref summary) = report.article_summary {
            self.subheading("About the article");
            self.paragraph(&filter_text(summary), SIZE_BODY, INK);
        }
        if let Some(ref summary) = report.findings_summary {
            self.subheading("Key findings");
            self.paragraph(&filter_text(summary), SIZE_BODY, INK);
        }

        self.subheading("Scores at a glance");
        for kind in ServiceKind::ALL {
            let score = report
                .service(kind)
                .filter(|s| s.has_data())
                .map(|s| s.score);
            self.score_bar(kind.title(), score);
        }
    }

    fn service_section(&mut self, report: &AnalysisReport, section: &ServiceSection) {
        self.heading(section.kind.title());
        self.score_bar("Score", Some(section.score));
        self.cursor.advance(3.0);

        if section.kind == ServiceKind::AuthorAnalyzer {
            if let Some(ref author) = report.author {
                self.paragraph(&clean_whitespace(author), SIZE_BODY, MUTED);
            }
        }
        if section.kind == ServiceKind::ContentAnalyzer {
            if let Some(words) = report.word_count {
                self.paragraph(&format!("{words} words"), SIZE_BODY, MUTED);
            }
        }

        if let Some(ref analysis) = section.analysis {
            let rows = [
                ("What we looked at", &analysis.what_we_looked),
                ("What we found", &analysis.what_we_found),
                ("What it means", &analysis.what_it_means),
            ];
            for (title, body) in rows {
                if let Some(body) = body {
                    self.subheading(title);
                    self.paragraph(&filter_text(body), SIZE_BODY, INK);
                }
            }
        }

        if !section.findings.is_empty() {
            self.subheading("Findings");
            for finding in &section.findings {
                self.bullet(&filter_text(finding));
            }
            self.cursor.advance(2.0);
        }

        if !section.dimensions.is_empty() {
            self.subheading("Breakdown");
            for (name, value) in &section.dimensions {
                self.score_bar(&dimension_name(name), Some(*value));
            }
            self.cursor.advance(2.0);
        }

        if !section.claims.is_empty() {
            self.subheading("Claims reviewed");
            for claim in &section.claims {
                self.claim_entry(claim);
            }
        }
    }

    fn claim_entry(&mut self, claim: &MergedClaim) {
        let visual = claim.verdict.visual();
        self.cursor.ensure_room(self.surface, 12.0);

        let step = line_height(SIZE_BODY);
        self.cursor.ensure_room(self.surface, step);
        self.cursor.advance(step);
        self.surface.text(
            visual.label,
            MARGIN,
            self.cursor.y,
            SIZE_BODY,
            true,
            visual.color,
        );
        let label_w = text_width(visual.label, SIZE_BODY) + 4.0;
        // First line shares the baseline with the verdict label.
        let mut lines = wrap(&clean_whitespace(&claim.text), SIZE_BODY, CONTENT_WIDTH - label_w);
        if !lines.is_empty() {
            let first = lines.remove(0);
            self.surface
                .text(&first, MARGIN + label_w, self.cursor.y, SIZE_BODY, false, INK);
        }
        for line in lines {
            self.cursor.ensure_room(self.surface, step);
            self.cursor.advance(step);
            self.surface
                .text(&line, MARGIN + label_w, self.cursor.y, SIZE_BODY, false, INK);
        }

        if let Some(ref check) = claim.fact_check {
            if let Some(ref explanation) = check.explanation {
                self.paragraph_at(
                    &clean_whitespace(explanation),
                    MARGIN + 5.0,
                    CONTENT_WIDTH - 5.0,
                    SIZE_SMALL,
                    false,
                    MUTED,
                );
            }
            if !check.sources.is_empty() {
                self.paragraph_at(
                    &format!("Sources: {}", check.sources.join(", ")),
                    MARGIN + 5.0,
                    CONTENT_WIDTH - 5.0,
                    SIZE_SMALL,
                    false,
                    MUTED,
                );
            }
        }
        self.cursor.advance(3.0);
    }

    fn methodology(&mut self) {
        self.heading("Methodology");
        self.paragraph(
            "Each article is analyzed by independent services, every one focused on a \
             single credibility signal. Their scores are combined into the overall \
             trust score on the cover of this report. A score of 100 represents the \
             strongest possible signal of credibility; 0 the weakest.",
            SIZE_BODY,
            INK,
        );
        let notes: [(&str, &str); 7] = [
            (
                "Source Credibility",
                "Reputation, editorial standards, and correction history of the outlet.",
            ),
            (
                "Bias Detection",
                "Political lean, loaded language, and framing across several dimensions.",
            ),
            (
                "Fact Checking",
                "Key factual claims extracted from the article and verified against \
                 independent sources.",
            ),
            (
                "Author Analysis",
                "The byline's track record, expertise, and publication history.",
            ),
            (
                "Transparency",
                "Disclosure of sources, funding, conflicts of interest, and methodology.",
            ),
            (
                "Manipulation Detection",
                "Persuasion techniques such as emotional framing, cherry-picking, and \
                 misleading presentation.",
            ),
            (
                "Content Quality",
                "Depth, originality, and structure of the writing itself.",
            ),
        ];
        for (title, body) in notes {
            self.subheading(title);
            self.paragraph(body, SIZE_BODY, INK);
        }
        self.cursor.advance(4.0);
        self.paragraph(
            "Automated analysis is a starting point, not a verdict. Read critically \
             and consult the cited sources before drawing conclusions.",
            SIZE_SMALL,
            MUTED,
        );
    }

    // ─── Finalizing passes ───────────────────────────────────────────────

    /// Fill the reserved contents page now that page numbers are known.
    fn fill_contents(&mut self, toc_page: usize) {
        self.surface.set_page(toc_page);
        let mut y = MARGIN + 6.0;
        self.surface.text("Contents", MARGIN, y, SIZE_H1, true, BRAND);
        y += 9.0;
        self.surface
            .line(MARGIN, y, MARGIN + CONTENT_WIDTH, y, 0.8, RULE);
        y += 9.0;

        for entry in &self.toc {
            self.surface
                .text(&entry.title, MARGIN, y, SIZE_BODY, false, INK);
            let number = entry.page.to_string();
            let x = PAGE_WIDTH - MARGIN - text_width(&number, SIZE_BODY);
            self.surface.text(&number, x, y, SIZE_BODY, false, MUTED);
            self.surface.line(
                MARGIN + 62.0,
                y,
                x - 3.0,
                y,
                0.2,
                RULE,
            );
            y += 8.0;
        }
    }

    /// Stamp brand, date, and "Page N of M" on every page.
    fn footer_pass(&mut self, report: &AnalysisReport) {
        let total = self.surface.page_count();
        let y = PAGE_HEIGHT - 10.0;
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let left = match report.source {
            Some(ref source) => format!("TruthLens · {} · {date}", clean_whitespace(source)),
            None => format!("TruthLens · {date}"),
        };
        for index in 0..total {
            self.surface.set_page(index);
            self.surface.text(&left, MARGIN, y, SIZE_SMALL, false, MUTED);
            let label = format!("Page {} of {}", index + 1, total);
            let x = PAGE_WIDTH - MARGIN - text_width(&label, SIZE_SMALL);
            self.surface.text(&label, x, y, SIZE_SMALL, false, MUTED);
        }
    }
}

/// Credibility label matching the dashboard's trust summary tiers.
fn trust_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Highly Credible"
    } else if score >= 60.0 {
        "Generally Credible"
    } else if score >= 40.0 {
        "Questionable"
    } else {
        "Low Credibility"
    }
}

fn dimension_name(raw: &str) -> String {
    raw.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::surface::RecordingSurface;
    use serde_json::json;

    fn populated_report() -> AnalysisReport {
        crate::normalize::normalize(&json!({
            "trust_score": 72,
            "source": "Daily Planet",
            "author": "Lois Lane",
            "article_summary": "A detailed report on municipal water quality testing.",
            "detailed_analysis": {
                "source_credibility": {
                    "score": 80,
                    "findings": ["Established outlet with a published corrections policy."]
                },
                "fact_checker": {
                    "score": 65,
                    "claims": [
                        {"claim": "Lead levels doubled since 2020", "verdict": "mostly_true"},
                        {"claim": "No federal limits exist", "verdict": "false"}
                    ]
                },
                "bias_detector": {
                    "score": 70,
                    "dimensions": {"political_lean": 75, "loaded_language": 60}
                }
            }
        }))
    }

    fn draw(report: &AnalysisReport) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        draw_report(&mut surface, report);
        surface
    }

    #[test]
    fn test_one_section_per_populated_service() {
        let surface = draw(&populated_report());
        // Cover, contents, summary, three services, methodology.
        assert_eq!(surface.page_count(), 7);
        let text = surface.full_text();
        assert!(text.contains("Executive Summary"));
        assert!(text.contains("Source Credibility"));
        assert!(text.contains("Fact Check"));
        assert!(text.contains("Bias Detection"));
        assert!(text.contains("Methodology"));
    }

    #[test]
    fn test_all_seven_services_get_sections_and_footers() {
        let mut detailed = serde_json::Map::new();
        for kind in crate::ServiceKind::ALL {
            detailed.insert(
                kind.key().to_string(),
                json!({
                    "score": 70,
                    "findings": ["A finding substantial enough to survive the content filter."]
                }),
            );
        }
        let report = crate::normalize::normalize(&json!({
            "trust_score": 70,
            "source": "Daily Planet",
            "detailed_analysis": detailed
        }));
        let surface = draw(&report);
        // Cover, contents, summary, seven services, methodology.
        assert_eq!(surface.page_count(), 11);
        let text = surface.full_text();
        for kind in crate::ServiceKind::ALL {
            assert!(text.contains(kind.title()), "missing section {}", kind.title());
        }
        let total = surface.page_count();
        for page in 0..total {
            let expected = format!("Page {} of {}", page + 1, total);
            assert!(
                surface.page_text(page).iter().any(|t| *t == expected),
                "missing footer on page {page}"
            );
        }
    }

    #[test]
    fn test_footer_on_every_page() {
        let surface = draw(&populated_report());
        let total = surface.page_count();
        for page in 0..total {
            let expected = format!("Page {} of {}", page + 1, total);
            assert!(
                surface.page_text(page).iter().any(|t| *t == expected),
                "missing footer on page {page}"
            );
        }
    }

    #[test]
    fn test_contents_lists_sections_with_page_numbers() {
        let surface = draw(&populated_report());
        let toc = surface.page_text(1);
        assert!(toc.contains(&"Contents"));
        assert!(toc.contains(&"Executive Summary"));
        assert!(toc.contains(&"Fact Check"));
        // Executive summary sits on page 3.
        assert!(toc.contains(&"3"));
    }

    #[test]
    fn test_cover_shows_score_and_verdicts() {
        let surface = draw(&populated_report());
        let cover = surface.page_text(0);
        assert!(cover.contains(&"72"));
        assert!(cover.contains(&"Generally Credible"));
        assert!(cover.contains(&"Daily Planet"));
        let text = surface.full_text();
        assert!(text.contains("Mostly True"));
        assert!(text.contains("Lead levels doubled since 2020"));
    }

    #[test]
    fn test_placeholder_text_is_filtered() {
        let report = crate::normalize::normalize(&json!({
            "trust_score": 50,
            "article_summary": "What to verify",
            "detailed_analysis": {"source_credibility": {"score": 50}}
        }));
        let surface = draw(&report);
        let text = surface.full_text();
        assert!(!text.contains("What to verify"));
    }

    #[test]
    fn test_long_findings_paginate_without_entering_footer_zone() {
        let finding = "This finding is long enough to wrap across multiple lines and \
                       repeat until the section spills over several pages in a row. ";
        let findings: Vec<String> = (0..60).map(|_| finding.trim().to_string()).collect();
        let report = crate::normalize::normalize(&json!({
            "trust_score": 50,
            "detailed_analysis": {"source_credibility": {
                "score": 50,
                "findings": findings
            }}
        }));
        let surface = draw(&report);
        assert!(surface.page_count() > 5);
        let footer_y = PAGE_HEIGHT - 10.0;
        for page in 0..surface.page_count() {
            let max_y = surface.max_text_y(page);
            // Only the footer itself may sit below the content floor.
            assert!(
                max_y <= footer_y + 0.01,
                "content below footer on page {page}: {max_y}"
            );
        }
    }

    #[test]
    fn test_dimension_name_formatting() {
        assert_eq!(dimension_name("political_lean"), "Political Lean");
        assert_eq!(dimension_name("loaded_language"), "Loaded Language");
    }
}
