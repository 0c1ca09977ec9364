use serde::{Deserialize, Serialize};

use crate::entities::part::EdgeBanding;

#[cfg(doc)]
use crate::entities::unit::PlaceableUnit;

/// The final position of a [`PlaceableUnit`] on a sheet of its group.
/// Coordinates are in mm from the sheet's bottom-left corner; `placed_length`
/// runs along the sheet's length axis, `placed_width` along its width axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub unit_id: usize,
    /// Id of the [`PartSpec`](crate::entities::PartSpec) the unit belongs to
    pub part_id: usize,
    /// Zero-based index of the sheet within the group
    pub sheet_index: usize,
    pub x: f32,
    pub y: f32,
    /// `true` if the unit was rotated 90°: `placed_length == unit.width` and `placed_width == unit.length`
    pub rotated: bool,
    pub placed_length: f32,
    pub placed_width: f32,
    /// Banding flags of the parent part, so downstream labeling needs no re-join
    pub edge_banding: EdgeBanding,
}

impl PlacedPart {
    pub fn area(&self) -> f32 {
        self.placed_length * self.placed_width
    }

    /// Rotation to apply downstream, in degrees.
    pub fn rotation_deg(&self) -> u32 {
        match self.rotated {
            true => 90,
            false => 0,
        }
    }

    /// `true` if the two axis-aligned rectangles intersect with positive area.
    /// Placements that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &PlacedPart) -> bool {
        self.x < other.x + other.placed_length
            && other.x < self.x + self.placed_length
            && self.y < other.y + other.placed_width
            && other.y < self.y + self.placed_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(x: f32, y: f32, length: f32, width: f32) -> PlacedPart {
        PlacedPart {
            unit_id: 0,
            part_id: 0,
            sheet_index: 0,
            x,
            y,
            rotated: false,
            placed_length: length,
            placed_width: width,
            edge_banding: EdgeBanding::default(),
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = placed(0.0, 0.0, 800.0, 600.0);
        let b = placed(800.0, 0.0, 800.0, 600.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn intersecting_rects_overlap() {
        let a = placed(0.0, 0.0, 800.0, 600.0);
        let b = placed(799.0, 599.0, 100.0, 100.0);
        assert!(a.overlaps(&b));
    }
}
