use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use ordered_float::NotNan;

use crate::cancel::CancelToken;
use crate::entities::{PlaceableUnit, PlacedPart, SheetDims, SheetStats};
use crate::opt::orientation;
use crate::util::assertions;

/// Everything the shelf heuristic produced for one material group.
#[derive(Clone, Debug)]
pub struct GroupPacking {
    pub placements: Vec<PlacedPart>,
    /// (unit id, part id) of every unit that fits on no empty sheet
    pub unplaceable: Vec<(usize, usize)>,
    pub sheet_stats: Vec<SheetStats>,
    /// `true` if cancellation stopped the group before all units were attempted
    pub cancelled: bool,
}

/// Runs the shelf heuristic over one material group.
///
/// Units are placed in descending-area order (stable, ties keep input order)
/// left-to-right into rows, wrapping to a new row when the current one is
/// exhausted and onto a fresh sheet when the sheet is. Earlier sheets are never
/// revisited to backfill gaps, which keeps the layout reproducible and easy to
/// follow on the shop floor.
pub fn pack_group(
    sheet: SheetDims,
    units: &[PlaceableUnit],
    token: &CancelToken,
) -> GroupPacking {
    //larger parts go first to reduce fragmentation
    let sorted = units
        .iter()
        .sorted_by_cached_key(|u| Reverse(NotNan::new(u.area()).expect("unit area is NaN")))
        .collect_vec();

    let mut packer = ShelfPacker::new(sheet);
    let mut cancelled = false;

    for unit in sorted {
        if token.is_cancelled() {
            debug!("[SHELF] cancellation observed, stopping group");
            cancelled = true;
            break;
        }
        packer.place_unit(unit);
    }

    let packing = packer.finish(cancelled);
    debug_assert!(assertions::packing_is_consistent(sheet, &packing, units));
    packing
}

/// Owns the per-sheet placement state: the running cursor, the height of the
/// current row and the index of the sheet being filled.
struct ShelfPacker {
    sheet: SheetDims,
    cursor_x: f32,
    cursor_y: f32,
    row_height: f32,
    sheet_index: usize,
    sheet_placed_count: usize,
    sheet_used_area: f32,
    placements: Vec<PlacedPart>,
    unplaceable: Vec<(usize, usize)>,
    sheet_stats: Vec<SheetStats>,
}

impl ShelfPacker {
    fn new(sheet: SheetDims) -> Self {
        ShelfPacker {
            sheet,
            cursor_x: 0.0,
            cursor_y: 0.0,
            row_height: 0.0,
            sheet_index: 0,
            sheet_placed_count: 0,
            sheet_used_area: 0.0,
            placements: vec![],
            unplaceable: vec![],
            sheet_stats: vec![],
        }
    }

    /// Places one unit at the cursor, advancing rows and sheets until it fits
    /// or proves unplaceable even on an empty sheet.
    fn place_unit(&mut self, unit: &PlaceableUnit) {
        loop {
            match orientation::resolve(unit, self.sheet, self.cursor_x, self.cursor_y) {
                Some(o) => {
                    let placed = PlacedPart {
                        unit_id: unit.id,
                        part_id: unit.part_id,
                        sheet_index: self.sheet_index,
                        x: self.cursor_x,
                        y: self.cursor_y,
                        rotated: o.rotated,
                        placed_length: o.placed_length,
                        placed_width: o.placed_width,
                        edge_banding: unit.edge_banding,
                    };
                    debug!(
                        "[SHELF] unit {} -> sheet {} at ({:.1}, {:.1}){}",
                        unit.id,
                        self.sheet_index,
                        placed.x,
                        placed.y,
                        if placed.rotated { ", rotated" } else { "" },
                    );
                    self.cursor_x += o.placed_length;
                    self.row_height = self.row_height.max(o.placed_width);
                    self.sheet_placed_count += 1;
                    self.sheet_used_area += placed.area();
                    self.placements.push(placed);
                    return;
                }
                None if self.cursor_x > 0.0 => {
                    //row exhausted, wrap to the next one
                    self.cursor_x = 0.0;
                    self.cursor_y += self.row_height;
                    self.row_height = 0.0;
                }
                None if self.cursor_y > 0.0 => {
                    //sheet exhausted
                    self.open_next_sheet();
                }
                None => {
                    //does not fit on an empty sheet in either orientation
                    debug!("[SHELF] unit {} is unplaceable", unit.id);
                    self.unplaceable.push((unit.id, unit.part_id));
                    return;
                }
            }
        }
    }

    /// Sheet Allocator: closes the current sheet and opens a fresh one with
    /// reset cursor and row state. Monotonic, no backfilling of earlier sheets.
    fn open_next_sheet(&mut self) {
        self.close_sheet();
        self.sheet_index += 1;
        self.cursor_x = 0.0;
        self.cursor_y = 0.0;
        self.row_height = 0.0;
        self.sheet_placed_count = 0;
        self.sheet_used_area = 0.0;
    }

    /// Flushes the stats of the sheet being filled. A sheet that was opened but
    /// never received a placement leaves no stats (and is not billed).
    fn close_sheet(&mut self) {
        if self.sheet_placed_count == 0 {
            return;
        }
        self.sheet_stats.push(SheetStats {
            sheet_index: self.sheet_index,
            placed_count: self.sheet_placed_count,
            used_area: self.sheet_used_area,
            efficiency: (self.sheet_used_area / self.sheet.area() * 100.0).clamp(0.0, 100.0),
            largest_offcut: self.largest_offcut(),
        });
    }

    /// Largest rectangle guaranteed empty by the shelf state: the region right
    /// of the cursor (nothing is placed there in the current row or above), or
    /// the full-length strip above the current row.
    fn largest_offcut(&self) -> Option<SheetDims> {
        let tail = SheetDims {
            length: self.sheet.length - self.cursor_x,
            width: self.sheet.width - self.cursor_y,
        };
        let top = SheetDims {
            length: self.sheet.length,
            width: self.sheet.width - self.cursor_y - self.row_height,
        };
        [tail, top]
            .into_iter()
            .filter(|dims| dims.length > 0.0 && dims.width > 0.0)
            .max_by_key(|dims| NotNan::new(dims.area()).expect("offcut area is NaN"))
    }

    fn finish(mut self, cancelled: bool) -> GroupPacking {
        self.close_sheet();
        GroupPacking {
            placements: self.placements,
            unplaceable: self.unplaceable,
            sheet_stats: self.sheet_stats,
            cancelled,
        }
    }
}
