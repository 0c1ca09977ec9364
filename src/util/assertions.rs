use float_cmp::approx_eq;
use itertools::Itertools;

use crate::entities::{NestingResult, PlaceableUnit, PlacedPart, SheetDims};
use crate::opt::shelf::GroupPacking;

//Various checks to verify the correctness of packings and assembled results
//Used in debug_assert!() blocks

pub fn packing_is_consistent(
    sheet: SheetDims,
    packing: &GroupPacking,
    units: &[PlaceableUnit],
) -> bool {
    all_within_bounds(sheet, &packing.placements)
        && no_overlapping_placements(&packing.placements)
        && all_rotations_legal(&packing.placements, units)
        && (packing.cancelled || units_are_conserved(packing, units))
}

pub fn all_within_bounds(sheet: SheetDims, placements: &[PlacedPart]) -> bool {
    placements.iter().all(|p| {
        p.x >= 0.0
            && p.y >= 0.0
            && p.x + p.placed_length <= sheet.length
            && p.y + p.placed_width <= sheet.width
    })
}

pub fn no_overlapping_placements(placements: &[PlacedPart]) -> bool {
    placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| a.sheet_index != b.sheet_index || !a.overlaps(b))
}

/// A placement either keeps the unit's dimensions or swaps them, matching its `rotated` flag.
pub fn all_rotations_legal(placements: &[PlacedPart], units: &[PlaceableUnit]) -> bool {
    placements.iter().all(|p| {
        let unit = match units.iter().find(|u| u.id == p.unit_id) {
            Some(u) => u,
            None => return false,
        };
        match p.rotated {
            false => p.placed_length == unit.length && p.placed_width == unit.width,
            true => p.placed_length == unit.width && p.placed_width == unit.length,
        }
    })
}

/// Every unit of the group ends up placed or unplaceable, never silently dropped.
pub fn units_are_conserved(packing: &GroupPacking, units: &[PlaceableUnit]) -> bool {
    packing.placements.len() + packing.unplaceable.len() == units.len()
        && units.iter().all(|u| {
            packing.placements.iter().any(|p| p.unit_id == u.id)
                || packing.unplaceable.iter().any(|(id, _)| *id == u.id)
        })
}

pub fn result_is_consistent(result: &NestingResult) -> bool {
    let max_index_ok = result
        .placements
        .iter()
        .all(|p| p.sheet_index < result.sheet_count);

    let efficiency_ok = result.efficiency >= 0.0
        && result.efficiency <= 100.0
        && (result.total_area == 0.0
            || approx_eq!(
                f32,
                result.efficiency,
                result.used_area / result.total_area * 100.0,
                epsilon = 0.01
            ));

    max_index_ok && efficiency_ok
}
