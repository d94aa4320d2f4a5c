use crate::direction::Direction;

/// A hallway call button press. The desired direction is fixed at the
/// press and can never be absent.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HallwayRequest {
    pub floor: u8,
    pub direction: Direction,
}

impl HallwayRequest {
    pub fn new(floor: u8, direction: Direction) -> Self {
        HallwayRequest {
            floor: floor,
            direction: direction,
        }
    }
}
