//! HTML dashboard: a self-contained credibility report page.
//!
//! The page embeds everything inline (CSS, JS, data) so the file can be
//! saved, mailed, or opened from disk with no network access. Sections are
//! built as typed markup trees by the card registry; the accordion,
//! count-up animation, and header meta are driven by a small vanilla JS
//! block at the bottom of the page.

use crate::cards::{CardRegistry, SectionView};
use crate::markup::{el, escape_json_for_script, text, Node};
use crate::AnalysisReport;
use serde_json::json;

/// Renders the full dashboard page.
pub struct Dashboard {
    registry: CardRegistry,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            registry: CardRegistry::standard(),
        }
    }

    /// Generate the complete HTML document.
    pub fn render(&self, report: &AnalysisReport) -> String {
        let sections = self.registry.sections(report);

        let meta = json!({
            "trustScore": report.trust_score.round() as i64,
            "source": report.source,
            "author": report.author,
            "generatedAt": chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        });
        let meta_json = serde_json::to_string(&meta).unwrap_or_else(|_| "{}".to_string());

        let mut html = String::with_capacity(32_768);
        html.push_str(Self::template_head());
        html.push_str("<script>const META=");
        html.push_str(&escape_json_for_script(&meta_json));
        html.push_str(";</script>\n");
        html.push_str(&page_shell(report, &sections).to_html());
        html.push('\n');
        html.push_str(Self::template_script());
        html.push_str("</body>\n</html>");
        html
    }

    // ─── HTML template pieces ────────────────────────────────────────────

    fn template_head() -> &'static str {
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>TruthLens – Credibility Report</title>
<style>
:root{--bg:#0d0d11;--surface:#16161b;--surface2:#1e1e24;--border:#2a2a32;--text:#e4e4e7;--muted:#71717a;--green:#22c55e;--lime:#84cc16;--yellow:#eab308;--orange:#f97316;--red:#ef4444;--blue:#3b82f6;--radius:10px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Oxygen,sans-serif;background:var(--bg);color:var(--text);line-height:1.5;min-height:100vh}
::selection{background:var(--blue);color:#fff}

/* ── Shell ── */
.shell{max-width:760px;margin:0 auto;padding:1.5rem 1rem 3rem}
header{display:flex;align-items:baseline;gap:1rem;flex-wrap:wrap;padding-bottom:1rem;border-bottom:1px solid var(--border);margin-bottom:1rem}
header h1{font-size:1.25rem;font-weight:700}
header .meta{font-size:.8125rem;color:var(--muted)}

/* ── Accordion sections ── */
.section{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);margin-bottom:.625rem;overflow:hidden}
.section-hdr{display:flex;align-items:center;gap:.625rem;padding:.75rem 1rem;cursor:pointer;user-select:none;transition:background .15s}
.section-hdr:hover{background:var(--surface2)}
.section-hdr .icon{font-size:1rem;width:1.25rem;text-align:center}
.section-hdr .title{font-size:.9375rem;font-weight:600;flex:1}
.section-hdr .badge{font-size:.6875rem;padding:.125rem .5rem;border-radius:10px;background:var(--surface2);color:var(--muted);font-weight:600;white-space:nowrap}
.section-hdr .preview{font-size:.75rem;color:var(--muted);max-width:220px;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.section-hdr .chevron{font-size:.625rem;color:var(--muted);transition:transform .2s}
.section.open .section-hdr .chevron{transform:rotate(90deg)}
.section.open .section-hdr .preview{display:none}
.section-body{max-height:0;overflow:hidden;transition:max-height .3s ease}
.section.open .section-body{max-height:4000px}
.section-inner{padding:.25rem 1rem 1rem}
.section.pinned .section-hdr{cursor:default}
.section.pinned .section-hdr .chevron{display:none}

/* ── Card internals ── */
.score-row{display:flex;align-items:center;gap:.75rem;margin:.5rem 0}
.score-num{font-size:2rem;font-weight:700;font-variant-numeric:tabular-nums}
.tier-chip{font-size:.6875rem;font-weight:700;padding:.2rem .625rem;border-radius:10px;color:#0d0d11;text-transform:uppercase;letter-spacing:.4px}
.meta{font-size:.8125rem;color:var(--muted)}
.narrative{margin-top:.75rem}
.narrative-row{margin-bottom:.625rem}
.narrative-row h4{font-size:.6875rem;text-transform:uppercase;letter-spacing:.5px;color:var(--muted);margin-bottom:.125rem}
.narrative-row p{font-size:.8125rem}
.findings{margin:.625rem 0 0 1.125rem}
.findings li{font-size:.8125rem;margin-bottom:.25rem}
.dimensions{margin-top:.75rem}
.dim-row{display:flex;align-items:center;gap:.625rem;font-size:.75rem;margin-bottom:.375rem}
.dim-row .dim-name{width:140px;color:var(--muted);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.dim-bar{flex:1;height:6px;background:var(--border);border-radius:3px;overflow:hidden}
.dim-fill{display:block;height:100%;border-radius:3px;background:var(--blue)}
.dim-row .dim-val{width:28px;text-align:right;font-variant-numeric:tabular-nums}
.claim-stats{display:flex;gap:.5rem;flex-wrap:wrap;margin:.625rem 0}
.stat{font-size:.6875rem;font-weight:600;padding:.2rem .5rem;border-radius:10px;background:var(--surface2);color:var(--muted)}
.stat-verified{color:var(--green)}
.stat-false{color:var(--red)}
.stat-mixed{color:var(--yellow)}
.claims{list-style:none;margin-top:.5rem}
.claims .claim{padding:.5rem 0;border-bottom:1px solid var(--border)}
.claims .claim:last-child{border-bottom:none}
.verdict-chip{font-size:.75rem;font-weight:700;margin-right:.5rem;white-space:nowrap}
.claim-text{font-size:.8125rem}
.explanation{font-size:.75rem;color:var(--muted);margin-top:.25rem}
.sources{font-size:.6875rem;color:var(--muted);margin-top:.125rem;font-style:italic}
.no-data{font-size:.8125rem;color:var(--muted);padding:.5rem 0}
.card-error{font-size:.8125rem;color:var(--red);padding:.5rem 0}
</style>
</head>
<body>
"##
    }

    fn template_script() -> &'static str {
        r##"<script>
(function(){
"use strict";

const $=s=>document.querySelector(s);
const $$=s=>[...document.querySelectorAll(s)];

/* ── header meta ── */
(function(){
  const parts=[];
  if(META.source)parts.push(META.source);
  if(META.author)parts.push('by '+META.author);
  parts.push(META.generatedAt);
  $('#meta').textContent=parts.join(' · ');
})();

/* ── accordion ── */
$$('.section').forEach(sec=>{
  if(sec.classList.contains('pinned'))return;
  sec.querySelector('.section-hdr').addEventListener('click',()=>{
    sec.classList.toggle('open');
  });
});

/* ── score count-up (~1s at 16ms frames) ── */
$$('[data-countup]').forEach(el=>{
  const target=parseInt(el.dataset.countup,10);
  if(isNaN(target))return;
  const steps=Math.max(1,Math.round(1000/16));
  let frame=0;
  el.textContent='0';
  const timer=setInterval(()=>{
    frame++;
    const v=Math.round(target*frame/steps);
    el.textContent=String(Math.min(v,target));
    if(frame>=steps)clearInterval(timer);
  },16);
});

})();
</script>
"##
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the page body from rendered sections.
fn page_shell(report: &AnalysisReport, sections: &[SectionView]) -> Node {
    el("div")
        .class("shell")
        .child(
            el("header")
                .child(el("h1").child(text("TruthLens")))
                .child(el("span").class("meta").attr("id", "meta")),
        )
        .children(sections.iter().map(section_node))
        .attr("data-trust", format!("{}", report.trust_score.round() as i64))
}

fn section_node(section: &SectionView) -> Node {
    let state = if section.always_open {
        "section open pinned"
    } else {
        "section"
    };
    let mut header = el("div")
        .class("section-hdr")
        .child(el("span").class("icon").child(text(section.icon)))
        .child(el("span").class("title").child(text(section.title)));
    if let Some(ref badge) = section.badge {
        header = header.child(el("span").class("badge").child(text(badge)));
    }
    header = header
        .child(el("span").class("preview").child(text(&section.preview)))
        .child(el("span").class("chevron").child(text("▶")));

    el("section")
        .class(state)
        .attr("id", section.id)
        .child(header)
        .child(
            el("div").class("section-body").child(
                el("div")
                    .class("section-inner")
                    .child(section.body.clone()),
            ),
        )
}
