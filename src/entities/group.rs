use ordered_float::NotNan;

use crate::entities::unit::PlaceableUnit;

/// Identifies a material group: units of one material and thickness.
/// Material and thickness never mix on a physical sheet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub material: String,
    pub thickness: NotNan<f32>,
}

impl GroupKey {
    pub fn of(unit: &PlaceableUnit) -> Self {
        GroupKey {
            material: unit.material.clone(),
            //unit thickness comes from a validated PartSpec, so it is positive and finite
            thickness: NotNan::new(unit.thickness).expect("unit thickness is NaN"),
        }
    }
}

/// All units sharing one [`GroupKey`], in their original relative order.
#[derive(Clone, Debug)]
pub struct MaterialGroup {
    pub key: GroupKey,
    pub units: Vec<PlaceableUnit>,
}

/// Partitions units by (material, thickness), preserving relative order within
/// each group. Group order is the first-seen order in the unit list.
pub fn group_units(units: Vec<PlaceableUnit>) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = vec![];
    for unit in units {
        let key = GroupKey::of(&unit);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.units.push(unit),
            None => groups.push(MaterialGroup {
                key,
                units: vec![unit],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::part::{EdgeBanding, Grain};

    fn unit(id: usize, material: &str, thickness: f32) -> PlaceableUnit {
        PlaceableUnit {
            id,
            part_id: id,
            material: material.to_string(),
            thickness,
            length: 500.0,
            width: 300.0,
            grain: Grain::None,
            priority: 0,
            edge_banding: EdgeBanding::default(),
        }
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let units = vec![
            unit(0, "MDF", 18.0),
            unit(1, "plywood", 12.0),
            unit(2, "MDF", 18.0),
            unit(3, "MDF", 12.0),
        ];
        let groups = group_units(units);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key.material, "MDF");
        assert_eq!(groups[0].key.thickness.into_inner(), 18.0);
        assert_eq!(groups[0].units.iter().map(|u| u.id).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(groups[1].key.material, "plywood");
        assert_eq!(groups[2].key.material, "MDF");
        assert_eq!(groups[2].key.thickness.into_inner(), 12.0);
    }
}
