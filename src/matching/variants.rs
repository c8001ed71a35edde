// src/matching/variants.rs
// Alternate spellings of a canonical unit name, for reference-index seeding

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{
    canonicalize_locality, contract_abbreviation, expand_abbreviation, strip_diacritics,
};

/// Leading generic prefixes that operators routinely omit when typing a
/// unit name.
const GENERIC_PREFIXES: [&str; 4] = ["vara do trabalho de ", "vt de ", "vara de ", "cejusc "];

/// Captures the locality of a mediation-center name: the tail after the
/// last "de" connector, or after the separator following the CEJUSC token.
static CEJUSC_LOCALITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:cejusc|cejus|centro judiciario)(?:.*\bde\b|\s*-|\s)\s*(.+)$").unwrap());

/// Candidate spellings for one canonical name: always includes the original,
/// then unions the stripped, prefix-removed, mediation-center short and
/// abbreviation forms. De-duplicated case-insensitively, insertion order
/// preserved.
pub fn generate_variants(canonical_name: &str) -> Vec<String> {
    let name = canonical_name.trim();
    let mut variants: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    if name.is_empty() {
        return variants;
    }
    push_unique(&mut variants, &mut seen, name.to_string());

    let stripped = stripped_form(name);
    push_unique(&mut variants, &mut seen, stripped.clone());

    for prefix in &GENERIC_PREFIXES {
        if let Some(remainder) = stripped.strip_prefix(prefix) {
            push_unique(&mut variants, &mut seen, remainder.trim().to_string());
        }
    }

    if let Some(caps) = CEJUSC_LOCALITY_RE.captures(&stripped) {
        if let Some(locality) = caps.get(1) {
            let city = canonicalize_locality(locality.as_str());
            push_unique(&mut variants, &mut seen, format!("CEJUSC - {}", city));
            push_unique(&mut variants, &mut seen, format!("CEJUSC {}", city));
            push_unique(&mut variants, &mut seen, format!("CEJUS - {}", city));
            push_unique(&mut variants, &mut seen, format!("CEJUS {}", city));
        }
    }

    push_unique(&mut variants, &mut seen, expand_abbreviation(name));
    push_unique(&mut variants, &mut seen, contract_abbreviation(&stripped));

    variants
}

/// Lower-cased, diacritic- and punctuation-free rendering of the name.
fn stripped_form(name: &str) -> String {
    let lowered = strip_diacritics(&name.to_lowercase());
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_unique(variants: &mut Vec<String>, seen: &mut HashSet<String>, candidate: String) {
    let candidate = candidate.trim().to_string();
    if candidate.is_empty() {
        return;
    }
    if seen.insert(candidate.to_lowercase()) {
        variants.push(candidate);
    }
}
