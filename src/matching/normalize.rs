// src/matching/normalize.rs
// Canonicalization rules shared by the variant generator, resolver and comparator

use once_cell::sync::Lazy;
use regex::Regex;

/// Spelled ordinals up to ten, both genders, diacritics already folded.
const SPELLED_ORDINALS: [(&str, u32); 20] = [
    ("primeira", 1),
    ("primeiro", 1),
    ("segunda", 2),
    ("segundo", 2),
    ("terceira", 3),
    ("terceiro", 3),
    ("quarta", 4),
    ("quarto", 4),
    ("quinta", 5),
    ("quinto", 5),
    ("sexta", 6),
    ("sexto", 6),
    ("setima", 7),
    ("setimo", 7),
    ("oitava", 8),
    ("oitavo", 8),
    ("nona", 9),
    ("nono", 9),
    ("decima", 10),
    ("decimo", 10),
];

/// Unit-type abbreviation dictionary, full form first. Entries are applied
/// longest-first so "tribunal regional do trabalho" wins over "vara do
/// trabalho" before either can clip the other.
const UNIT_ABBREVIATIONS: [(&str, &str); 5] = [
    (
        "centro judiciario de metodos consensuais de solucao de disputas",
        "cejusc",
    ),
    ("tribunal regional do trabalho", "trt"),
    ("vara do trabalho", "vt"),
    ("juizado especial civel", "jec"),
    ("divisao de execucao", "divex"),
];

/// Common operator misspellings and diacritic-stripped city spellings,
/// keyed by the diacritic-free lower-cased form.
const CITY_SPELLING_FIXES: [(&str, &str); 14] = [
    ("aracatuba", "Araçatuba"),
    ("avare", "Avaré"),
    ("jundiai", "Jundiaí"),
    ("mogi guacu", "Mogi Guaçu"),
    ("mogi guassu", "Mogi Guaçu"),
    ("mogi-guacu", "Mogi Guaçu"),
    ("pocos de caldas", "Poços de Caldas"),
    ("ribeirao preto", "Ribeirão Preto"),
    ("santa barbara doeste", "Santa Bárbara d'Oeste"),
    ("sao joao da boa vista", "São João da Boa Vista"),
    ("sao jose do rio preto", "São José do Rio Preto"),
    ("sao jose dos campos", "São José dos Campos"),
    ("tatui", "Tatuí"),
    ("taubate", "Taubaté"),
];

const LOWERCASE_PREPOSITIONS: [&str; 5] = ["de", "do", "da", "dos", "das"];

static NUMBERED_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:(?:con|exe|liq)\d+|dam)$").unwrap());

/// Lower-case, fold diacritics, strip punctuation except the hyphen used as
/// the code/city separator, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = strip_diacritics(&text.trim().to_lowercase());
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            '–' | '—' => cleaned.push('-'),
            '\'' | '’' => {}
            c if c.is_alphanumeric() || c.is_whitespace() || c == '-' => cleaned.push(c),
            _ => cleaned.push(' '),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace accented characters (and the ordinal indicators ª/º) with their
/// plain ASCII counterparts. Unknown characters pass through.
pub fn strip_diacritics(text: &str) -> String {
    text.chars().map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'ª' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'º' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => c,
    }
}

/// Rewrite spelled Portuguese ordinals to numeral form ("primeira" → "1a").
/// Compounds "décima primeira".."décima nona" become 11..19. Unknown tokens
/// pass through untouched.
pub fn convert_spelled_ordinal(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let key = strip_diacritics(&words[i].to_lowercase());
        match ordinal_value(&key) {
            Some(10) if i + 1 < words.len() => {
                let next_key = strip_diacritics(&words[i + 1].to_lowercase());
                if let Some(unit @ 1..=9) = ordinal_value(&next_key) {
                    out.push(format!("{}{}", 10 + unit, ordinal_suffix(&next_key)));
                    i += 2;
                    continue;
                }
                out.push(format!("10{}", ordinal_suffix(&key)));
            }
            Some(n) => out.push(format!("{}{}", n, ordinal_suffix(&key))),
            None => out.push(words[i].to_string()),
        }
        i += 1;
    }
    out.join(" ")
}

fn ordinal_value(word: &str) -> Option<u32> {
    SPELLED_ORDINALS
        .iter()
        .find(|(spelled, _)| *spelled == word)
        .map(|&(_, n)| n)
}

fn ordinal_suffix(word: &str) -> char {
    if word.ends_with('o') {
        'o'
    } else {
        'a'
    }
}

/// True for the CON#/EXE#/LIQ#/DAM execution-stage codes.
pub fn is_numbered_code(token: &str) -> bool {
    NUMBERED_CODE_RE.is_match(token.trim())
}

/// Rewrite unit-type abbreviations to their full form ("VT" → "vara do
/// trabalho"). Whole-word matches only, longest abbreviation first.
pub fn expand_abbreviation(text: &str) -> String {
    let mut expanded = text.to_string();
    let mut entries = UNIT_ABBREVIATIONS.to_vec();
    entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    for (full, abbr) in &entries {
        if let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(abbr))) {
            if re.is_match(&expanded) {
                expanded = re.replace_all(&expanded, *full).into_owned();
            }
        }
    }
    expanded
}

/// Rewrite full unit-type phrases to their abbreviation ("vara do trabalho"
/// → "VT"). Numbered execution codes (CON#, EXE#, LIQ#, DAM) are unit
/// identities of their own and are never rewritten.
pub fn contract_abbreviation(text: &str) -> String {
    if text.split_whitespace().any(is_numbered_code) {
        return text.to_string();
    }
    let mut contracted = text.to_string();
    let mut entries = UNIT_ABBREVIATIONS.to_vec();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    for (full, abbr) in &entries {
        if let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(full))) {
            if re.is_match(&contracted) {
                let upper = abbr.to_uppercase();
                contracted = re.replace_all(&contracted, upper.as_str()).into_owned();
            }
        }
    }
    contracted
}

/// Canonical spelling for a city name: fixed lookup for known misspellings
/// and diacritic-stripped forms, title case with lower-cased prepositions
/// otherwise.
pub fn canonicalize_locality(city: &str) -> String {
    let key = strip_diacritics(&city.trim().to_lowercase());
    if let Some((_, fixed)) = CITY_SPELLING_FIXES.iter().find(|(known, _)| *known == key) {
        return (*fixed).to_string();
    }
    city.trim()
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            if LOWERCASE_PREPOSITIONS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
