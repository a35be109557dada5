//! Boundary normalization of the backend payload.
//!
//! The backend's AnalysisResult is duck-typed: field names drift between
//! services and releases, numbers arrive as strings, lists mix strings and
//! objects. This module absorbs all of that exactly once and emits the typed
//! [`AnalysisReport`] model. Downstream renderers never probe alternatives.
//!
//! Normalization never fails: anything unusable degrades to a default.

use crate::content;
use crate::{
    Analysis, AnalysisReport, FactCheck, MergedClaim, ServiceKind, ServiceSection, Verdict,
};
use serde_json::Value;

/// How many leading characters of claim text participate in fuzzy matching.
/// Deliberately preserved from the production heuristic, including its
/// order sensitivity; see the merge notes on [`merge_claims`].
const CLAIM_MATCH_PREFIX: usize = 50;

/// Build the typed report from a raw backend document.
pub fn normalize(value: &Value) -> AnalysisReport {
    let detailed = first_of(value, &["detailed_analysis", "detailed_results", "services"]);

    let mut services = Vec::new();
    for kind in ServiceKind::ALL {
        let raw = detailed.and_then(|d| d.get(kind.key()));
        match raw {
            Some(raw) if raw.is_object() => services.push(normalize_service(kind, raw)),
            _ => services.push(ServiceSection::empty(kind)),
        }
    }

    AnalysisReport {
        trust_score: number_chain(value, &["trust_score", "overall_score", "score"])
            .unwrap_or(0.0)
            .clamp(0.0, 100.0),
        source: string_chain(value, &["source", "domain", "outlet"]),
        author: string_chain(value, &["author", "byline"]),
        word_count: number_chain(value, &["word_count", "wordCount"]).map(|n| n.max(0.0) as u64),
        article_summary: text_chain(value, &["article_summary", "summary"]),
        findings_summary: text_chain(value, &["findings_summary", "conclusion"]),
        services,
    }
}

fn normalize_service(kind: ServiceKind, raw: &Value) -> ServiceSection {
    let claims = if kind == ServiceKind::FactChecker {
        let key_claims = claim_texts(raw.get("key_claims"));
        let fact_checks = fact_check_entries(first_of(raw, &["fact_checks", "claims"]));
        merge_claims(&key_claims, fact_checks)
    } else {
        Vec::new()
    };

    ServiceSection {
        kind,
        score: number_chain(raw, score_candidates(kind))
            .unwrap_or(0.0)
            .clamp(0.0, 100.0),
        analysis: normalize_analysis(raw.get("analysis")),
        findings: normalize_findings(raw.get("findings")),
        claims,
        dimensions: normalize_dimensions(raw.get("dimensions")),
    }
}

/// Ordered score-field candidates per service; first finite number wins.
/// These reproduce the per-call-site fallback chains of the production
/// renderers and must not be unified.
fn score_candidates(kind: ServiceKind) -> &'static [&'static str] {
    match kind {
        ServiceKind::SourceCredibility => &["score", "credibility_score", "source_score"],
        ServiceKind::BiasDetector => &["score", "objectivity_score", "bias_score"],
        ServiceKind::FactChecker => &["score", "accuracy_score", "fact_check_score"],
        ServiceKind::AuthorAnalyzer => &["score", "author_score", "credibility_score"],
        ServiceKind::TransparencyAnalyzer => &["score", "transparency_score"],
        ServiceKind::ManipulationDetector => &["score", "integrity_score", "manipulation_score"],
        ServiceKind::ContentAnalyzer => &["score", "quality_score", "content_score"],
    }
}

fn normalize_analysis(raw: Option<&Value>) -> Option<Analysis> {
    let raw = raw?;
    let analysis = Analysis {
        what_we_looked: text_chain(raw, &["what_we_looked_at", "what_we_looked", "what_we_checked"]),
        what_we_found: text_chain(raw, &["what_we_found", "found"]),
        what_it_means: text_chain(raw, &["what_it_means", "means"]),
    };
    (!analysis.is_empty()).then_some(analysis)
}

/// Findings arrive as strings or `{text}` / `{finding}` objects; junk entries
/// are dropped rather than replaced, since a fallback list item is noise.
fn normalize_findings(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.as_str()),
            Value::Object(_) => item
                .get("text")
                .or_else(|| item.get("finding"))
                .and_then(Value::as_str),
            _ => None,
        })
        .filter_map(content::filter_optional)
        .collect()
}

/// `dimensions` is a name → score map; values may be bare numbers or
/// `{score}` objects. Sorted by name so output is deterministic.
fn normalize_dimensions(raw: Option<&Value>) -> Vec<(String, f64)> {
    let Some(Value::Object(map)) = raw else {
        return Vec::new();
    };
    let mut dims: Vec<(String, f64)> = map
        .iter()
        .filter_map(|(name, v)| {
            let score = as_number(v).or_else(|| v.get("score").and_then(as_number))?;
            Some((name.clone(), score.clamp(0.0, 100.0)))
        })
        .collect();
    dims.sort_by(|a, b| a.0.cmp(&b.0));
    dims
}

fn claim_texts(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.as_str()),
            Value::Object(_) => item
                .get("claim")
                .or_else(|| item.get("text"))
                .and_then(Value::as_str),
            _ => None,
        })
        .map(content::clean_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}

struct FactCheckEntry {
    text: String,
    verdict: Verdict,
    check: FactCheck,
}

fn fact_check_entries(raw: Option<&Value>) -> Vec<FactCheckEntry> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let text = item
                .get("claim")
                .or_else(|| item.get("text"))
                .and_then(Value::as_str)
                .map(content::clean_whitespace)?;
            if text.is_empty() {
                return None;
            }
            let verdict = string_chain(item, &["verdict", "rating", "status"])
                .map(|s| Verdict::parse(&s))
                .unwrap_or(Verdict::Unverified);
            Some(FactCheckEntry {
                text,
                verdict,
                check: FactCheck {
                    explanation: item
                        .get("explanation")
                        .and_then(Value::as_str)
                        .and_then(content::filter_optional),
                    sources: string_list(item.get("sources")),
                    confidence: item.get("confidence").and_then(as_number),
                },
            })
        })
        .collect()
}

/// Plain string list (fact-check sources); non-strings are dropped. No junk
/// filter here, source names and URLs are legitimately short.
fn string_list(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge key claims with fact-check results into one unified list.
///
/// Matching policy (preserved from production, flagged fragile there): a
/// fact-check matches a claim when the lowercased first 50 characters of
/// either text are contained in the other. First match wins, a matched
/// fact-check is consumed, and iteration order is the input order, so the
/// result is order-sensitive and O(n·m). Unmatched claims get no fact-check
/// and an `unverified` status; unmatched fact-checks are appended as their
/// own entries.
fn merge_claims(key_claims: &[String], fact_checks: Vec<FactCheckEntry>) -> Vec<MergedClaim> {
    let mut used = vec![false; fact_checks.len()];
    let mut merged = Vec::with_capacity(key_claims.len() + fact_checks.len());

    for claim in key_claims {
        let matched = fact_checks
            .iter()
            .enumerate()
            .find(|(i, fc)| !used[*i] && claims_match(claim, &fc.text));
        match matched {
            Some((i, fc)) => {
                used[i] = true;
                merged.push(MergedClaim {
                    text: claim.clone(),
                    verdict: fc.verdict,
                    status: fc.verdict.status(),
                    fact_check: Some(fc.check.clone()),
                });
            }
            None => merged.push(MergedClaim {
                text: claim.clone(),
                verdict: Verdict::Unverified,
                status: Verdict::Unverified.status(),
                fact_check: None,
            }),
        }
    }

    for (i, fc) in fact_checks.into_iter().enumerate() {
        if !used[i] {
            merged.push(MergedClaim {
                text: fc.text,
                verdict: fc.verdict,
                status: fc.verdict.status(),
                fact_check: Some(fc.check),
            });
        }
    }

    merged
}

fn claims_match(a: &str, b: &str) -> bool {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let a_prefix: String = a_lower.chars().take(CLAIM_MATCH_PREFIX).collect();
    let b_prefix: String = b_lower.chars().take(CLAIM_MATCH_PREFIX).collect();
    b_lower.contains(&a_prefix) || a_lower.contains(&b_prefix)
}

// ─── Value helpers ───────────────────────────────────────────────────────

fn first_of<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| value.get(k))
}

/// First candidate that holds a finite number (numeric strings count).
fn number_chain(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| value.get(k).and_then(as_number))
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// First candidate holding a non-empty string (no content filtering).
fn string_chain(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        value
            .get(k)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// First candidate holding substantive free text (denylist-filtered).
fn text_chain(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        value
            .get(k)
            .and_then(Value::as_str)
            .and_then(content::filter_optional)
    })
}
