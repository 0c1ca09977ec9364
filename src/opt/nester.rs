use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::config::NestConfig;
use crate::diagnostics::Diagnostic;
use crate::entities::{
    MaterialGroup, NestSolution, NestingResult, PartSpec, SheetCatalog, StockSheet, expand_units,
    group_units, overall_efficiency,
};
use crate::opt::shelf::{self, GroupPacking};
use crate::util::assertions;

/// The deterministic shelf nester: expands a cutting list into placeable
/// units, partitions them into material groups and packs each group onto its
/// stock sheets with the row/shelf heuristic.
///
/// Pure computation over in-memory data: the same input always yields the
/// same placements, and nothing is persisted.
pub struct ShelfNester {
    pub parts: Vec<PartSpec>,
    pub catalog: SheetCatalog,
    pub config: NestConfig,
}

impl ShelfNester {
    pub fn new(parts: Vec<PartSpec>, catalog: SheetCatalog, config: NestConfig) -> Self {
        ShelfNester {
            parts,
            catalog,
            config,
        }
    }

    pub fn solve(&self, token: &CancelToken) -> NestSolution {
        let start = Instant::now();
        let mut diagnostics = vec![];

        let mut units = expand_units(&self.parts, &mut diagnostics);
        if let Some(filter) = &self.config.material_filter {
            //units of other materials are out of scope for this call, not unplaceable
            units.retain(|u| &u.material == filter);
        }
        let total_units = units.len();

        //pair every group with its stock sheet; groups without one are reported and skipped
        let mut jobs: Vec<(MaterialGroup, StockSheet)> = vec![];
        for group in group_units(units) {
            match self.resolve_sheet(&group) {
                Some(sheet) => jobs.push((group, sheet)),
                None => {
                    warn!(
                        "[SHELF] no stock sheet for {} @ {}mm, skipping group",
                        group.key.material,
                        group.key.thickness.into_inner()
                    );
                    diagnostics.push(Diagnostic::UnknownStockSheet {
                        material: group.key.material.clone(),
                        thickness: group.key.thickness.into_inner(),
                    });
                }
            }
        }

        //groups share no mutable state: the only exploitable parallelism
        let packings: Vec<GroupPacking> = match self.config.parallel_groups {
            true => jobs
                .par_iter()
                .map(|(group, sheet)| shelf::pack_group(sheet.dims, &group.units, token))
                .collect(),
            false => jobs
                .iter()
                .map(|(group, sheet)| shelf::pack_group(sheet.dims, &group.units, token))
                .collect(),
        };

        let cancelled = packings.iter().any(|p| p.cancelled);
        if cancelled {
            diagnostics.push(Diagnostic::Cancelled);
        }

        let mut results = Vec::with_capacity(jobs.len());
        for ((_, sheet), packing) in jobs.into_iter().zip(packings) {
            for &(unit_id, part_id) in &packing.unplaceable {
                diagnostics.push(Diagnostic::UnplaceablePart { unit_id, part_id });
            }
            let unplaceable = packing.unplaceable.iter().map(|&(id, _)| id).collect();
            let result = NestingResult::assemble(
                sheet,
                packing.placements,
                packing.sheet_stats,
                unplaceable,
            );
            debug_assert!(assertions::result_is_consistent(&result));
            results.push(result);
        }

        let solution = NestSolution {
            total_sheet_count: results.iter().map(|r| r.sheet_count).sum(),
            overall_efficiency: overall_efficiency(&results),
            results,
            diagnostics,
            cancelled,
            run_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "[SHELF] nested {}/{} units onto {} sheets across {} groups, {:.1}% efficiency in {}ms",
            solution.placed_count(),
            total_units,
            solution.total_sheet_count,
            solution.results.len(),
            solution.overall_efficiency,
            solution.run_time_ms,
        );

        solution
    }

    /// Resolves the stock sheet of a group: an explicit override applies to all
    /// groups, otherwise the catalog decides.
    fn resolve_sheet(&self, group: &MaterialGroup) -> Option<StockSheet> {
        let dims = match self.config.stock_override {
            Some(dims) => dims,
            None => self
                .catalog
                .resolve(&group.key.material, group.key.thickness.into_inner())?,
        };
        Some(StockSheet {
            dims,
            material: group.key.material.clone(),
            thickness: group.key.thickness.into_inner(),
        })
    }
}

/// Nests a cutting list with a token that never cancels.
pub fn nest(parts: Vec<PartSpec>, catalog: SheetCatalog, config: NestConfig) -> NestSolution {
    ShelfNester::new(parts, catalog, config).solve(&CancelToken::new())
}
