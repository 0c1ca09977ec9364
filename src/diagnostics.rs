use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured account of everything that could not be nested.
///
/// The optimizer never aborts the whole run because of a single bad part or
/// group; it records what went wrong here and keeps going. Callers decide
/// whether any entry should be treated as a hard failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A part spec with a non-positive dimension or zero quantity.
    /// None of its units were emitted.
    InvalidDimension { part_id: usize, reason: String },
    /// No stock sheet definition could be resolved for a material group.
    /// The group was omitted from the results; other groups proceeded.
    UnknownStockSheet { material: String, thickness: f32 },
    /// The unit does not fit on an empty sheet in either orientation.
    UnplaceablePart { unit_id: usize, part_id: usize },
    /// Cooperative cancellation was observed mid-run; the results are partial.
    Cancelled,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidDimension { part_id, reason } => {
                write!(f, "part {part_id} has invalid dimensions: {reason}")
            }
            Diagnostic::UnknownStockSheet {
                material,
                thickness,
            } => {
                write!(f, "no stock sheet known for {material} @ {thickness}mm")
            }
            Diagnostic::UnplaceablePart { unit_id, part_id } => {
                write!(f, "unit {unit_id} (part {part_id}) does not fit on an empty sheet")
            }
            Diagnostic::Cancelled => write!(f, "nesting run was cancelled"),
        }
    }
}
