use log::warn;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::entities::part::{EdgeBanding, Grain, PartSpec};

/// One physical piece to place, expanded 1:1 from the quantity of a [`PartSpec`].
/// Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceableUnit {
    /// Globally unique, follows expansion order
    pub id: usize,
    /// Id of the [`PartSpec`] this unit was expanded from
    pub part_id: usize,
    pub material: String,
    pub thickness: f32,
    pub length: f32,
    pub width: f32,
    pub grain: Grain,
    pub priority: u32,
    pub edge_banding: EdgeBanding,
}

impl PlaceableUnit {
    pub fn area(&self) -> f32 {
        self.length * self.width
    }
}

/// Expands every valid [`PartSpec`] into `quantity` individual [`PlaceableUnit`]s,
/// preserving input order (all units of an earlier spec precede those of a later one).
///
/// A spec with a non-positive dimension or zero quantity is rejected as a whole:
/// none of its units are emitted and a [`Diagnostic::InvalidDimension`] is recorded.
pub fn expand_units(parts: &[PartSpec], diagnostics: &mut Vec<Diagnostic>) -> Vec<PlaceableUnit> {
    let mut units = Vec::with_capacity(parts.iter().map(|p| p.quantity).sum());
    for part in parts {
        if let Some(reason) = part.invalid_reason() {
            warn!("[EXPAND] rejecting part {} ({}): {}", part.id, part.name, reason);
            diagnostics.push(Diagnostic::InvalidDimension {
                part_id: part.id,
                reason,
            });
            continue;
        }
        for _ in 0..part.quantity {
            units.push(PlaceableUnit {
                id: units.len(),
                part_id: part.id,
                material: part.material.clone(),
                thickness: part.thickness,
                length: part.length,
                width: part.width,
                grain: part.grain,
                priority: part.priority,
                edge_banding: part.edge_banding,
            });
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: usize, length: f32, quantity: usize) -> PartSpec {
        PartSpec {
            id,
            name: format!("part {id}"),
            material: "MDF".to_string(),
            thickness: 18.0,
            length,
            width: 300.0,
            quantity,
            grain: Grain::Length,
            edge_banding: EdgeBanding::default(),
            priority: 0,
        }
    }

    #[test]
    fn expansion_preserves_order() {
        let mut diags = vec![];
        let units = expand_units(&[spec(7, 500.0, 2), spec(9, 400.0, 3)], &mut diags);

        assert!(diags.is_empty());
        assert_eq!(units.len(), 5);
        assert_eq!(
            units.iter().map(|u| u.part_id).collect::<Vec<_>>(),
            vec![7, 7, 9, 9, 9]
        );
        assert_eq!(units.iter().map(|u| u.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn invalid_spec_is_rejected_whole() {
        let mut diags = vec![];
        let units = expand_units(&[spec(1, -10.0, 4), spec(2, 400.0, 1)], &mut diags);

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].part_id, 2);
        assert!(matches!(
            diags.as_slice(),
            [Diagnostic::InvalidDimension { part_id: 1, .. }]
        ));
    }
}
