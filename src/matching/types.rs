// src/matching/types.rs
// Data and exchange types for OJ name resolution and reconciliation

use serde::{Deserialize, Serialize};

/// Coarse unit-type classes recognized by the structural comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Con,
    Liq,
    Exe,
    Dam,
    Cejusc,
    Vara,
    Juizado,
    Divisao,
    Tribunal,
    Foro,
}

impl UnitType {
    /// CON/EXE/LIQ/DAM — execution-stage codes whose sequence numbers are
    /// part of the unit identity.
    pub fn is_numbered_code(self) -> bool {
        matches!(
            self,
            UnitType::Con | UnitType::Liq | UnitType::Exe | UnitType::Dam
        )
    }
}

/// Jurisdictional specialty carried by some unit names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Trabalho,
    Infancia,
    Execucao,
    Civel,
    Criminal,
}

/// Transient decomposition of a standardized unit name. Computed per
/// comparison, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNameComponents {
    pub unit_type: Option<UnitType>,
    pub sequence_number: Option<u32>,
    pub specialty: Option<Specialty>,
    pub locality: String,
}

/// Which resolution strategy produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMethodType {
    Identity,
    Variant,
    Partial,
    KeywordOverlap,
    Unresolved,
}

/// Detailed result of resolving one free-text name.
///
/// `confidence` is diagnostic only: 1.0 for indexed hits, string similarity
/// for scan hits, 0.0 when unresolved. It never feeds back into the match
/// decision itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutcome {
    pub value: String,
    pub method: MatchMethodType,
    pub resolved: bool,
    pub confidence: f64,
}

impl ResolveOutcome {
    pub(crate) fn unresolved(value: String) -> Self {
        ResolveOutcome {
            value,
            method: MatchMethodType::Unresolved,
            resolved: false,
            confidence: 0.0,
        }
    }
}

/// One line of a bulk normalization. The opaque " - <role>" suffix, when
/// present, is preserved in `role` and reattached in `output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResolution {
    pub input: String,
    pub output: String,
    pub role: Option<String>,
    pub method: MatchMethodType,
    pub resolved: bool,
}

/// Outcome of reconciling a local unit-name list against an external one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub common: Vec<String>,
    pub missing_from_external: Vec<String>,
    pub extra_in_external: Vec<String>,
    pub sync_percentage: u32,
}
