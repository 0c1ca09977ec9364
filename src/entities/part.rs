use serde::{Deserialize, Serialize};

/// Wood-grain orientation constraint on a part, restricting which 90° rotations are acceptable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grain {
    /// Grain runs along the part's length edge
    Length,
    /// Grain runs along the part's width edge
    Width,
    /// No grain constraint, the part can be placed in either orientation
    None,
}

/// Edge-banding flags of a part, one per edge.
/// Carried through to the placements for downstream labeling; they never influence packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// One line of a cutting list, prior to quantity expansion.
/// All dimensions are in mm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub id: usize,
    pub name: String,
    /// Material the part is cut from, e.g. "MDF" or "Oak veneer"
    pub material: String,
    pub thickness: f32,
    pub length: f32,
    pub width: f32,
    /// Number of physical pieces to produce
    pub quantity: usize,
    pub grain: Grain,
    #[serde(default)]
    pub edge_banding: EdgeBanding,
    /// Carried through to the units, not a packing criterion
    #[serde(default)]
    pub priority: u32,
}

impl PartSpec {
    pub fn area(&self) -> f32 {
        self.length * self.width
    }

    /// Why this spec cannot be expanded into units, if it can't.
    pub fn invalid_reason(&self) -> Option<String> {
        if !(self.length > 0.0) {
            Some(format!("non-positive length: {}", self.length))
        } else if !(self.width > 0.0) {
            Some(format!("non-positive width: {}", self.width))
        } else if !(self.thickness > 0.0) {
            Some(format!("non-positive thickness: {}", self.thickness))
        } else if self.quantity < 1 {
            Some(format!("quantity below 1: {}", self.quantity))
        } else {
            None
        }
    }
}
