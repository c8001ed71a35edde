// src/matching/resolver.rs
// Free-text name resolution against the reference index

use log::debug;
use strsim::jaro_winkler;

use super::index::ReferenceIndex;
use super::types::{BulkResolution, MatchMethodType, ResolveOutcome};
use crate::utils::matcher_config::MatcherConfig;

/// Resolve one free-text name to its canonical spelling, or echo the
/// trimmed input when nothing matches. Never fails; an empty dataset makes
/// this the identity function.
pub fn resolve(index: &ReferenceIndex, raw_input: &str) -> String {
    resolve_detailed(index, raw_input, &MatcherConfig::default()).value
}

/// Resolve one free-text name, reporting which strategy matched. Strategies
/// run in order — identity, variant, partial containment, keyword overlap —
/// and the first hit wins.
pub fn resolve_detailed(
    index: &ReferenceIndex,
    raw_input: &str,
    config: &MatcherConfig,
) -> ResolveOutcome {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return ResolveOutcome::unresolved(String::new());
    }
    let key = trimmed.to_lowercase();

    if let Some(canonical) = index.lookup_identity(&key) {
        return hit(canonical, MatchMethodType::Identity, 1.0);
    }
    if let Some(canonical) = index.lookup_variant(&key) {
        return hit(canonical, MatchMethodType::Variant, 1.0);
    }
    if let Some(canonical) = partial_match(index, &key) {
        let confidence = jaro_winkler(&key, &canonical.to_lowercase());
        return hit(canonical, MatchMethodType::Partial, confidence);
    }
    if let Some(canonical) = keyword_overlap_match(index, &key, config) {
        let confidence = jaro_winkler(&key, &canonical.to_lowercase());
        return hit(canonical, MatchMethodType::KeywordOverlap, confidence);
    }

    debug!("No canonical match for {:?}", trimmed);
    ResolveOutcome::unresolved(trimmed.to_string())
}

/// Bulk-resolve a newline-separated list. Each line may carry an opaque
/// " - <role>" suffix, preserved and reattached without interpretation.
/// Blank lines are dropped.
pub fn resolve_bulk(
    index: &ReferenceIndex,
    text: &str,
    config: &MatcherConfig,
) -> Vec<BulkResolution> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| resolve_line(index, line, config))
        .collect()
}

fn resolve_line(index: &ReferenceIndex, line: &str, config: &MatcherConfig) -> BulkResolution {
    let key = line.to_lowercase();

    // Dataset names can themselves contain " - " (the numbered codes);
    // indexed whole-line hits take precedence over the role split.
    if let Some(canonical) = index.lookup_identity(&key) {
        return whole_line(line, canonical, MatchMethodType::Identity);
    }
    if let Some(canonical) = index.lookup_variant(&key) {
        return whole_line(line, canonical, MatchMethodType::Variant);
    }

    if let Some((head, tail)) = line.rsplit_once(" - ") {
        let outcome = resolve_detailed(index, head, config);
        if outcome.resolved {
            let role = tail.trim();
            return BulkResolution {
                input: line.to_string(),
                output: format!("{} - {}", outcome.value, role),
                role: Some(role.to_string()),
                method: outcome.method,
                resolved: true,
            };
        }
    }

    let ResolveOutcome {
        value,
        method,
        resolved,
        ..
    } = resolve_detailed(index, line, config);
    BulkResolution {
        input: line.to_string(),
        output: value,
        role: None,
        method,
        resolved,
    }
}

fn whole_line(line: &str, canonical: &str, method: MatchMethodType) -> BulkResolution {
    BulkResolution {
        input: line.to_string(),
        output: canonical.to_string(),
        role: None,
        method,
        resolved: true,
    }
}

fn hit(canonical: &str, method: MatchMethodType, confidence: f64) -> ResolveOutcome {
    ResolveOutcome {
        value: canonical.to_string(),
        method,
        resolved: true,
        confidence,
    }
}

/// First canonical name, in declaration order, where either string contains
/// the other.
fn partial_match<'a>(index: &'a ReferenceIndex, key: &str) -> Option<&'a str> {
    index
        .names()
        .iter()
        .find(|name| {
            let candidate = name.to_lowercase();
            candidate.contains(key) || key.contains(&candidate)
        })
        .map(String::as_str)
}

/// First canonical name, in declaration order, whose tokens mutually
/// contain at least the configured share of the input tokens.
fn keyword_overlap_match<'a>(
    index: &'a ReferenceIndex,
    key: &str,
    config: &MatcherConfig,
) -> Option<&'a str> {
    let input_tokens = keyword_tokens(key, config.min_keyword_token_length);
    if input_tokens.is_empty() {
        return None;
    }
    index
        .names()
        .iter()
        .find(|name| {
            let candidate_tokens =
                keyword_tokens(&name.to_lowercase(), config.min_keyword_token_length);
            if candidate_tokens.is_empty() {
                return false;
            }
            let matched = input_tokens
                .iter()
                .filter(|token| {
                    candidate_tokens
                        .iter()
                        .any(|candidate| token.contains(candidate.as_str()) || candidate.contains(token.as_str()))
                })
                .count();
            matched as f64 / input_tokens.len() as f64 >= config.keyword_overlap_threshold
        })
        .map(String::as_str)
}

fn keyword_tokens(text: &str, min_len: usize) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= min_len)
        .map(|token| token.to_string())
        .collect()
}
