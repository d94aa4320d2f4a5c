use shared_resources::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Stopped,
    Moving,
}

impl Motion {
    pub fn as_string(self) -> String {
        match self {
            Motion::Stopped => String::from("stopped"),
            Motion::Moving => String::from("moving"),
        }
    }
}

/// Cabin state as the dispatcher sees it. The direction is None only
/// while the cabin is stopped with no committed travel direction.
#[derive(Debug, Clone)]
pub struct Sensor {
    pub floor: u8,
    pub direction: Option<Direction>,
    pub motion: Motion,
    pub overweight: bool,
}

impl Sensor {
    pub fn new(ground_floor: u8) -> Self {
        Sensor {
            floor: ground_floor,
            direction: None,
            motion: Motion::Stopped,
            overweight: false,
        }
    }
}
