use std::collections::HashSet;

use crate::direction::Direction;
use crate::request::HallwayRequest;

/// Pending requests for one cabin, plus the floors visited over the
/// whole run. Vector order is submission order, which makes "first
/// submitted, first selected" the tie-break between equally distant
/// requests.
#[derive(Debug, Clone, Default)]
pub struct RequestLedger {
    hallway: Vec<HallwayRequest>,
    cabin: Vec<u8>,
    visited: HashSet<u8>,
}

impl RequestLedger {
    pub fn new() -> Self {
        RequestLedger {
            hallway: Vec::new(),
            cabin: Vec::new(),
            visited: HashSet::new(),
        }
    }

    pub fn add_hallway(&mut self, request: HallwayRequest) {
        self.hallway.push(request);
    }

    pub fn add_cabin(&mut self, floor: u8) {
        self.cabin.push(floor);
    }

    pub fn has_hallway(&self) -> bool {
        !self.hallway.is_empty()
    }

    pub fn has_cabin(&self) -> bool {
        !self.cabin.is_empty()
    }

    /// Removes and returns the pending cabin floor nearest to `from`.
    /// Calling this with no pending cabin requests is a policy bug.
    pub fn take_nearest_cabin(&mut self, from: u8) -> u8 {
        let index = self.cabin
            .iter()
            .enumerate()
            .min_by_key(|(_, &floor)| from.abs_diff(floor))
            .map(|(index, _)| index)
            .expect("cabin selection with no pending cabin requests");
        self.cabin.remove(index)
    }

    /// Removes and returns the floor of the nearest hallway request
    /// going `direction`, or the nearest of all of them when no
    /// direction is committed. None means nothing matched.
    pub fn take_nearest_hallway(&mut self, from: u8, direction: Option<Direction>) -> Option<u8> {
        let index = self.hallway
            .iter()
            .enumerate()
            .filter(|(_, request)| match direction {
                Some(direction) => request.direction == direction,
                None => true,
            })
            .min_by_key(|(_, request)| from.abs_diff(request.floor))
            .map(|(index, _)| index)?;
        Some(self.hallway.remove(index).floor)
    }

    /// Removes every hallway request at `floor` going `direction` and
    /// returns how many presses were collapsed into the one service.
    pub fn service_hallway_at(&mut self, floor: u8, direction: Direction) -> usize {
        let before = self.hallway.len();
        self.hallway.retain(|request| !(request.floor == floor && request.direction == direction));
        before - self.hallway.len()
    }

    /// Removes one pending cabin request for `floor`, if any.
    pub fn service_cabin_at(&mut self, floor: u8) -> bool {
        match self.cabin.iter().position(|&pending| pending == floor) {
            Some(index) => {
                self.cabin.remove(index);
                true
            },
            None => false,
        }
    }

    /// True if some hallway request lies behind a cabin travelling in
    /// `direction` from `floor`, so a reversal is coming up.
    pub fn hallway_opposite_of(&self, floor: u8, direction: Direction) -> bool {
        self.hallway.iter().any(|request| match direction {
            Direction::Up => request.floor < floor,
            Direction::Down => request.floor > floor,
        })
    }

    pub fn mark_visited(&mut self, floor: u8) {
        self.visited.insert(floor);
    }

    pub fn visited(&self) -> &HashSet<u8> {
        &self.visited
    }

    pub fn hallway_count_at(&self, floor: u8, direction: Direction) -> usize {
        self.hallway
            .iter()
            .filter(|request| request.floor == floor && request.direction == direction)
            .count()
    }

    pub fn cabin_count_at(&self, floor: u8) -> usize {
        self.cabin.iter().filter(|&&pending| pending == floor).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_matching_hallway_request_is_selected() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(8, Direction::Up));
        ledger.add_hallway(HallwayRequest::new(4, Direction::Up));
        ledger.add_hallway(HallwayRequest::new(5, Direction::Down));
        assert_eq!(ledger.take_nearest_hallway(3, Some(Direction::Up)), Some(4));
        assert_eq!(ledger.hallway_count_at(4, Direction::Up), 0);
    }

    #[test]
    fn uncommitted_direction_matches_any_hallway_request() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(5, Direction::Down));
        assert_eq!(ledger.take_nearest_hallway(1, None), Some(5));
        assert!(!ledger.has_hallway());
    }

    #[test]
    fn selection_miss_leaves_requests_untouched() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(5, Direction::Down));
        assert_eq!(ledger.take_nearest_hallway(1, Some(Direction::Up)), None);
        assert!(ledger.has_hallway());
    }

    #[test]
    fn first_submitted_request_wins_distance_ties() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(6, Direction::Up));
        ledger.add_hallway(HallwayRequest::new(2, Direction::Up));
        assert_eq!(ledger.take_nearest_hallway(4, Some(Direction::Up)), Some(6));

        let mut ledger = RequestLedger::new();
        ledger.add_cabin(1);
        ledger.add_cabin(5);
        assert_eq!(ledger.take_nearest_cabin(3), 1);
    }

    #[test]
    fn servicing_collapses_duplicate_presses_at_a_floor() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(4, Direction::Down));
        ledger.add_hallway(HallwayRequest::new(4, Direction::Down));
        ledger.add_hallway(HallwayRequest::new(4, Direction::Up));
        assert_eq!(ledger.service_hallway_at(4, Direction::Down), 2);
        assert_eq!(ledger.hallway_count_at(4, Direction::Down), 0);
        assert_eq!(ledger.hallway_count_at(4, Direction::Up), 1);
    }

    #[test]
    fn cabin_service_removes_one_press_at_a_time() {
        let mut ledger = RequestLedger::new();
        ledger.add_cabin(2);
        ledger.add_cabin(2);
        assert!(ledger.service_cabin_at(2));
        assert_eq!(ledger.cabin_count_at(2), 1);
        assert!(!ledger.service_cabin_at(3));
    }

    #[test]
    fn opposite_scan_flags_requests_behind_the_cabin() {
        let mut ledger = RequestLedger::new();
        ledger.add_hallway(HallwayRequest::new(2, Direction::Up));
        assert!(ledger.hallway_opposite_of(4, Direction::Up));
        assert!(!ledger.hallway_opposite_of(4, Direction::Down));
        assert!(!ledger.hallway_opposite_of(1, Direction::Up));
    }
}
