use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::entities::placement::PlacedPart;
use crate::entities::sheet::{SheetDims, StockSheet};

/// Usage statistics of a single sheet within a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetStats {
    pub sheet_index: usize,
    pub placed_count: usize,
    pub used_area: f32,
    /// used area / sheet area × 100
    pub efficiency: f32,
    /// Largest guaranteed-empty rectangular offcut remaining on the sheet,
    /// derived from the final shelf state (tail of the last row or the strip above it)
    pub largest_offcut: Option<SheetDims>,
}

/// The nesting output for one material group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    pub sheet: StockSheet,
    pub placements: Vec<PlacedPart>,
    /// Number of sheets consumed: `max(sheet_index) + 1` over the placements
    pub sheet_count: usize,
    pub sheet_stats: Vec<SheetStats>,
    pub used_area: f32,
    /// `sheet_count` × sheet area
    pub total_area: f32,
    pub waste_area: f32,
    /// used area / total area × 100, clamped to [0, 100]
    pub efficiency: f32,
    /// Units that do not fit on an empty sheet in either orientation
    pub unplaceable: Vec<usize>,
}

impl NestingResult {
    /// Assembles the result of one group, deriving the area bookkeeping from the placements.
    pub(crate) fn assemble(
        sheet: StockSheet,
        placements: Vec<PlacedPart>,
        sheet_stats: Vec<SheetStats>,
        unplaceable: Vec<usize>,
    ) -> Self {
        let sheet_count = placements
            .iter()
            .map(|p| p.sheet_index + 1)
            .max()
            .unwrap_or(0);
        let used_area = placements.iter().map(|p| p.area()).sum::<f32>();
        let total_area = sheet_count as f32 * sheet.dims.area();
        let efficiency = match total_area > 0.0 {
            true => (used_area / total_area * 100.0).clamp(0.0, 100.0),
            false => 0.0,
        };

        NestingResult {
            sheet,
            placements,
            sheet_count,
            sheet_stats,
            used_area,
            total_area,
            waste_area: total_area - used_area,
            efficiency,
            unplaceable,
        }
    }
}

/// The complete outcome of a nesting run: one [`NestingResult`] per surviving
/// material group plus everything that could not be nested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestSolution {
    /// One result per material group, in first-seen order of the groups
    pub results: Vec<NestingResult>,
    pub diagnostics: Vec<Diagnostic>,
    /// `true` if cooperative cancellation cut the run short; results are partial
    pub cancelled: bool,
    pub total_sheet_count: usize,
    /// Area-weighted efficiency over all groups, in [0, 100]
    pub overall_efficiency: f32,
    pub run_time_ms: u64,
}

impl NestSolution {
    pub fn placed_count(&self) -> usize {
        self.results.iter().map(|r| r.placements.len()).sum()
    }

    pub fn unplaceable_count(&self) -> usize {
        self.results.iter().map(|r| r.unplaceable.len()).sum()
    }
}

/// Area-weighted efficiency across groups, 0 when nothing was consumed.
pub(crate) fn overall_efficiency(results: &[NestingResult]) -> f32 {
    let used = results.iter().map(|r| r.used_area).sum::<f32>();
    let total = results.iter().map(|r| r.total_area).sum::<f32>();
    match total > 0.0 {
        true => (used / total * 100.0).clamp(0.0, 100.0),
        false => 0.0,
    }
}
