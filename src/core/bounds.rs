use crate::core::Position;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Position,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, z: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Position { x, z },
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.z >= 0 && pos.z < self.extent.z
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.z
    }
}
