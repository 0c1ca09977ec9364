use crate::entities::{Grain, PlaceableUnit, SheetDims};

/// A resolved orientation for a unit at an attempted position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub placed_length: f32,
    pub placed_width: f32,
    pub rotated: bool,
}

impl Orientation {
    fn natural(unit: &PlaceableUnit) -> Self {
        Orientation {
            placed_length: unit.length,
            placed_width: unit.width,
            rotated: false,
        }
    }

    fn turned(unit: &PlaceableUnit) -> Self {
        Orientation {
            placed_length: unit.width,
            placed_width: unit.length,
            rotated: true,
        }
    }

    fn fits_at(&self, sheet: SheetDims, x: f32, y: f32) -> bool {
        x + self.placed_length <= sheet.length && y + self.placed_width <= sheet.width
    }
}

/// Decides how a unit is oriented at position `(x, y)`, or `None` if neither
/// orientation stays within the sheet bounds there.
///
/// The sheet's grain runs along its length axis. A grain-bearing unit keeps its
/// grain-aligned edge parallel to that axis whenever it fits: length-grained
/// units prefer the natural orientation, width-grained units the rotated one.
/// The other orientation is a fallback for fit only. Grain-free units pick
/// whichever fitting orientation fills more of the current row.
///
/// Re-evaluated for every attempted position, so a unit that had to fall back
/// at the end of a row is placed grain-aligned again on the next one.
pub fn resolve(unit: &PlaceableUnit, sheet: SheetDims, x: f32, y: f32) -> Option<Orientation> {
    let natural = Orientation::natural(unit);
    let turned = Orientation::turned(unit);

    match unit.grain {
        Grain::Length => constrained(natural, turned, sheet, x, y),
        Grain::Width => constrained(turned, natural, sheet, x, y),
        Grain::None => free(natural, turned, sheet, x, y),
    }
}

fn constrained(
    preferred: Orientation,
    fallback: Orientation,
    sheet: SheetDims,
    x: f32,
    y: f32,
) -> Option<Orientation> {
    if preferred.fits_at(sheet, x, y) {
        Some(preferred)
    } else if fallback.fits_at(sheet, x, y) {
        Some(fallback)
    } else {
        None
    }
}

fn free(
    natural: Orientation,
    turned: Orientation,
    sheet: SheetDims,
    x: f32,
    y: f32,
) -> Option<Orientation> {
    match (natural.fits_at(sheet, x, y), turned.fits_at(sheet, x, y)) {
        //local best-fit: minimize the unused remainder of the row, ties go to natural
        (true, true) => match turned.placed_length > natural.placed_length {
            true => Some(turned),
            false => Some(natural),
        },
        (true, false) => Some(natural),
        (false, true) => Some(turned),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EdgeBanding;

    fn unit(length: f32, width: f32, grain: Grain) -> PlaceableUnit {
        PlaceableUnit {
            id: 0,
            part_id: 0,
            material: "MDF".to_string(),
            thickness: 18.0,
            length,
            width,
            grain,
            priority: 0,
            edge_banding: EdgeBanding::default(),
        }
    }

    const SHEET: SheetDims = SheetDims {
        length: 2440.0,
        width: 1220.0,
    };

    #[test]
    fn length_grain_stays_natural_when_it_fits() {
        let resolved = resolve(&unit(800.0, 600.0, Grain::Length), SHEET, 0.0, 0.0).unwrap();
        assert!(!resolved.rotated);
        assert_eq!(resolved.placed_length, 800.0);
    }

    #[test]
    fn length_grain_rotates_only_as_fit_fallback() {
        //natural no longer fits in the row remainder, rotated does
        let resolved = resolve(&unit(800.0, 600.0, Grain::Length), SHEET, 1700.0, 0.0).unwrap();
        assert!(resolved.rotated);
        assert_eq!(resolved.placed_length, 600.0);
        assert_eq!(resolved.placed_width, 800.0);
    }

    #[test]
    fn width_grain_prefers_the_rotated_form() {
        let resolved = resolve(&unit(800.0, 600.0, Grain::Width), SHEET, 0.0, 0.0).unwrap();
        assert!(resolved.rotated);
        assert_eq!(resolved.placed_length, 600.0);
    }

    #[test]
    fn width_grain_falls_back_to_natural() {
        //rotated would stick out past the sheet's width axis
        let resolved = resolve(&unit(1300.0, 600.0, Grain::Width), SHEET, 0.0, 0.0).unwrap();
        assert!(!resolved.rotated);
    }

    #[test]
    fn grain_free_fills_the_row() {
        //both fit; the longer edge along the row wins
        let resolved = resolve(&unit(600.0, 900.0, Grain::None), SHEET, 0.0, 0.0).unwrap();
        assert!(resolved.rotated);
        assert_eq!(resolved.placed_length, 900.0);
    }

    #[test]
    fn nothing_fits_yields_none() {
        assert_eq!(resolve(&unit(3000.0, 1500.0, Grain::None), SHEET, 0.0, 0.0), None);
        //fits on an empty sheet but not at this cursor
        assert_eq!(resolve(&unit(800.0, 600.0, Grain::None), SHEET, 2000.0, 700.0), None);
    }
}
