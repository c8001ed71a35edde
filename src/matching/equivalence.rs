// src/matching/equivalence.rs
// Structural equivalence between two already-known unit names

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{convert_spelled_ordinal, normalize};
use super::types::{Specialty, UnitNameComponents, UnitType};

const UNIT_TYPE_TOKENS: [(&str, UnitType); 11] = [
    ("con", UnitType::Con),
    ("liq", UnitType::Liq),
    ("exe", UnitType::Exe),
    ("dam", UnitType::Dam),
    ("cejusc", UnitType::Cejusc),
    ("cejus", UnitType::Cejusc),
    ("vara", UnitType::Vara),
    ("juizado", UnitType::Juizado),
    ("divisao", UnitType::Divisao),
    ("tribunal", UnitType::Tribunal),
    ("foro", UnitType::Foro),
];

const SPECIALTY_TOKENS: [(&str, Specialty); 5] = [
    ("trabalho", Specialty::Trabalho),
    ("infancia", Specialty::Infancia),
    ("execucao", Specialty::Execucao),
    ("civel", Specialty::Civel),
    ("criminal", Specialty::Criminal),
];

static CODE_WITH_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(con|exe|liq|dam)(\d+)$").unwrap());
static SEQUENCE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[ao]?$").unwrap());

type EquivalenceRule = fn(&UnitNameComponents, &UnitNameComponents) -> Option<bool>;

/// Ordered rule table; the first rule that applies decides.
const EQUIVALENCE_RULES: [(&str, EquivalenceRule); 4] = [
    ("vara-pair", vara_pair_rule),
    ("numbered-code-pair", numbered_code_pair_rule),
    ("cejusc-pair", cejusc_pair_rule),
    ("general", general_rule),
];

/// Decides whether two unit-name spellings denote the same real-world unit.
///
/// Symmetric, but NOT transitive: locality matching accepts substring
/// containment, so "Preto" can match both "Rio Preto" and "Preto Novo"
/// while those two stay distinct. Verdicts must not be chained.
///
/// Empty or blank input is never equivalent to anything.
pub fn equivalent(name_a: &str, name_b: &str) -> bool {
    let a = convert_spelled_ordinal(&normalize(name_a));
    let b = convert_spelled_ordinal(&normalize(name_b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let a = standardize_connectors(&a);
    let b = standardize_connectors(&b);
    if a == b {
        return true;
    }

    let components_a = decompose(&a);
    let components_b = decompose(&b);
    for (_, rule) in &EQUIVALENCE_RULES {
        if let Some(verdict) = rule(&components_a, &components_b) {
            return verdict;
        }
    }
    false
}

/// Fold connector words to a single form: "da/do/dos/das" → "de",
/// "e de" (and the folded "e da") → "e"; hyphens become whitespace.
pub(crate) fn standardize_connectors(text: &str) -> String {
    let hyphenless = text.replace('-', " ");
    let mut words: Vec<&str> = Vec::new();
    for word in hyphenless.split_whitespace() {
        let word = match word {
            "da" | "do" | "dos" | "das" => "de",
            other => other,
        };
        if word == "de" && words.last() == Some(&"e") {
            continue;
        }
        words.push(word);
    }
    words.join(" ")
}

/// Split a standardized name into unit type, sequence number, specialty and
/// locality. The locality is what remains after the specialty token and its
/// following "de" (or after the last "de" when no specialty is present;
/// otherwise everything left once type and sequence tokens are consumed),
/// with embedded "de" connectors stripped.
pub(crate) fn decompose(standardized: &str) -> UnitNameComponents {
    let tokens: Vec<&str> = standardized.split_whitespace().collect();
    let mut unit_type = None;
    let mut sequence_number = None;
    let mut specialty = None;
    let mut consumed: Vec<usize> = Vec::new();

    for (pos, token) in tokens.iter().enumerate() {
        if unit_type.is_none() {
            if let Some(caps) = CODE_WITH_NUMBER_RE.captures(token) {
                unit_type = lookup_unit_type(caps.get(1).map_or("", |m| m.as_str()));
                sequence_number = caps.get(2).and_then(|m| m.as_str().parse().ok());
                consumed.push(pos);
                continue;
            }
            if let Some(found) = lookup_unit_type(token) {
                unit_type = Some(found);
                consumed.push(pos);
                continue;
            }
        }
        if sequence_number.is_none() {
            if let Some(caps) = SEQUENCE_TOKEN_RE.captures(token) {
                sequence_number = caps.get(1).and_then(|m| m.as_str().parse().ok());
                consumed.push(pos);
                continue;
            }
        }
        if specialty.is_none() {
            if let Some(found) = lookup_specialty(token) {
                specialty = Some(found);
            }
        }
    }

    let remainder: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(pos, _)| !consumed.contains(pos))
        .map(|(_, token)| *token)
        .collect();

    let locality_tokens: &[&str] = if let Some(specialty_pos) = remainder
        .iter()
        .position(|token| lookup_specialty(token).is_some())
    {
        let mut rest = &remainder[specialty_pos + 1..];
        if rest.first() == Some(&"de") {
            rest = &rest[1..];
        }
        rest
    } else if let Some(last_de) = remainder.iter().rposition(|token| *token == "de") {
        &remainder[last_de + 1..]
    } else {
        &remainder[..]
    };

    let locality = locality_tokens
        .iter()
        .filter(|token| **token != "de")
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    UnitNameComponents {
        unit_type,
        sequence_number,
        specialty,
        locality,
    }
}

fn lookup_unit_type(token: &str) -> Option<UnitType> {
    UNIT_TYPE_TOKENS
        .iter()
        .find(|(known, _)| *known == token)
        .map(|&(_, unit_type)| unit_type)
}

fn lookup_specialty(token: &str) -> Option<Specialty> {
    SPECIALTY_TOKENS
        .iter()
        .find(|(known, _)| *known == token)
        .map(|&(_, specialty)| specialty)
}

/// Two varas: sequence numbers must agree, with an unnumbered side standing
/// in for "1". Specialty and locality must be compatible in every branch.
fn vara_pair_rule(a: &UnitNameComponents, b: &UnitNameComponents) -> Option<bool> {
    if a.unit_type != Some(UnitType::Vara) || b.unit_type != Some(UnitType::Vara) {
        return None;
    }
    Some(
        specialties_compatible(a, b)
            && localities_match(&a.locality, &b.locality)
            && numbers_compatible(a.sequence_number, b.sequence_number),
    )
}

/// Two execution-stage codes of the same type: sequence numbers are
/// mandatory on both sides and exact. The unnumbered-means-first shortcut
/// from vara matching never applies here.
fn numbered_code_pair_rule(a: &UnitNameComponents, b: &UnitNameComponents) -> Option<bool> {
    let (Some(type_a), Some(type_b)) = (a.unit_type, b.unit_type) else {
        return None;
    };
    if !type_a.is_numbered_code() || !type_b.is_numbered_code() || type_a != type_b {
        return None;
    }
    let numbers_match = matches!(
        (a.sequence_number, b.sequence_number),
        (Some(na), Some(nb)) if na == nb
    );
    Some(numbers_match && localities_match(&a.locality, &b.locality))
}

/// Two mediation centers: locality agreement alone decides.
fn cejusc_pair_rule(a: &UnitNameComponents, b: &UnitNameComponents) -> Option<bool> {
    if a.unit_type != Some(UnitType::Cejusc) || b.unit_type != Some(UnitType::Cejusc) {
        return None;
    }
    Some(localities_match(&a.locality, &b.locality))
}

fn general_rule(a: &UnitNameComponents, b: &UnitNameComponents) -> Option<bool> {
    Some(
        a.unit_type == b.unit_type
            && localities_match(&a.locality, &b.locality)
            && specialties_compatible(a, b)
            && numbers_compatible(a.sequence_number, b.sequence_number),
    )
}

fn specialties_compatible(a: &UnitNameComponents, b: &UnitNameComponents) -> bool {
    match (a.specialty, b.specialty) {
        (Some(sa), Some(sb)) => sa == sb,
        _ => true,
    }
}

fn numbers_compatible(a: Option<u32>, b: Option<u32>) -> bool {
    match (a, b) {
        (Some(na), Some(nb)) => na == nb,
        (Some(1), None) | (None, Some(1)) => true,
        (None, None) => true,
        _ => false,
    }
}

fn localities_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        // contains("") holds for every string; an absent locality may only
        // match another absent locality.
        return a == b;
    }
    a == b || a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnumbered_vara_equals_its_first_form_only() {
        assert!(equivalent(
            "Vara do Trabalho de Campinas",
            "1ª Vara do Trabalho de Campinas"
        ));
        assert!(!equivalent(
            "1ª Vara do Trabalho de Campinas",
            "2ª Vara do Trabalho de Campinas"
        ));
        assert!(!equivalent(
            "Vara do Trabalho de Campinas",
            "2ª Vara do Trabalho de Campinas"
        ));
    }

    #[test]
    fn test_spelled_ordinals_compare_equal_to_numerals() {
        assert!(equivalent(
            "Primeira Vara do Trabalho de Campinas",
            "1ª Vara do Trabalho de Campinas"
        ));
        assert!(!equivalent(
            "Segunda Vara do Trabalho de Campinas",
            "1ª Vara do Trabalho de Campinas"
        ));
    }

    #[test]
    fn test_numbered_codes_demand_exact_sequence_numbers() {
        assert!(equivalent("EXE1 - Campinas", "EXE1 - Campinas"));
        assert!(!equivalent("EXE1 - Campinas", "EXE2 - Campinas"));
        assert!(!equivalent("EXE - Campinas", "EXE1 - Campinas"));
        assert!(!equivalent("EXE1 - Campinas", "LIQ1 - Campinas"));
    }

    #[test]
    fn test_cejusc_matches_on_locality_alone() {
        assert!(equivalent("CEJUSC - Sorocaba", "CEJUS Sorocaba"));
        assert!(equivalent("CEJUSC Campinas", "CEJUSC - Campinas"));
        assert!(!equivalent("CEJUSC - Sorocaba", "CEJUSC - Campinas"));
    }

    #[test]
    fn test_connector_standardization_bridges_spellings() {
        assert!(equivalent(
            "Juizado da Infância e da Juventude de Campinas",
            "Juizado de Infância e Juventude de Campinas"
        ));
        assert!(equivalent(
            "Vara do Trabalho de Mogi-Guaçu",
            "Vara do Trabalho de Mogi Guaçu"
        ));
    }

    #[test]
    fn test_cross_type_and_cross_city_pairs_stay_distinct() {
        assert!(!equivalent(
            "Vara do Trabalho de Campinas",
            "CEJUSC - Campinas"
        ));
        assert!(!equivalent(
            "1ª Vara do Trabalho de Campinas",
            "1ª Vara do Trabalho de Sorocaba"
        ));
        assert!(!equivalent(
            "Vara do Trabalho de Campinas",
            "Vara Cível de Campinas"
        ));
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        let pairs = [
            ("Vara do Trabalho de Campinas", "1ª Vara do Trabalho de Campinas"),
            ("CEJUSC - Sorocaba", "CEJUS Sorocaba"),
            ("EXE1 - Campinas", "EXE2 - Campinas"),
            ("Foro de Itapira", "Foro de Campinas"),
        ];
        for (a, b) in pairs {
            assert_eq!(equivalent(a, b), equivalent(b, a), "asymmetric for {:?} / {:?}", a, b);
        }
    }

    #[test]
    fn test_blank_input_is_never_equivalent() {
        assert!(!equivalent("", ""));
        assert!(!equivalent("  ", "Vara do Trabalho de Campinas"));
    }

    #[test]
    fn test_decomposition_components() {
        let c = decompose(&standardize_connectors(
            "1a vara de trabalho de campinas",
        ));
        assert_eq!(c.unit_type, Some(UnitType::Vara));
        assert_eq!(c.sequence_number, Some(1));
        assert_eq!(c.specialty, Some(Specialty::Trabalho));
        assert_eq!(c.locality, "campinas");

        let c = decompose("exe1 campinas");
        assert_eq!(c.unit_type, Some(UnitType::Exe));
        assert_eq!(c.sequence_number, Some(1));
        assert_eq!(c.specialty, None);
        assert_eq!(c.locality, "campinas");

        let c = decompose("cejus sorocaba");
        assert_eq!(c.unit_type, Some(UnitType::Cejusc));
        assert_eq!(c.sequence_number, None);
        assert_eq!(c.locality, "sorocaba");

        let c = decompose("divisao de execucao de campinas");
        assert_eq!(c.unit_type, Some(UnitType::Divisao));
        assert_eq!(c.specialty, Some(Specialty::Execucao));
        assert_eq!(c.locality, "campinas");
    }
}
