use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use shared_resources::config::{CabinConfig, TimingConfig};
use shared_resources::direction::Direction;
use shared_resources::ledger::RequestLedger;
use shared_resources::request::HallwayRequest;

use crate::logging::EventSink;
use crate::sensor::{Motion, Sensor};

#[derive(Debug, PartialEq)]
enum Cycle {
    Served,
    Waited,
    Idle,
}

/// Scheduling core for one cabin. Owns the sensor and the request
/// ledger; everything else reaches them through this type.
pub struct Dispatcher {
    sensor: Sensor,
    ledger: RequestLedger,
    timing: TimingConfig,
    bottom_floor: u8,
    top_floor: u8,
    sink: Box<dyn EventSink>,
}

impl Dispatcher {
    pub fn new(config: &CabinConfig, sink: Box<dyn EventSink>) -> Self {
        Dispatcher {
            sensor: Sensor::new(config.elevator.ground_floor),
            ledger: RequestLedger::new(),
            timing: config.timing.clone(),
            bottom_floor: config.elevator.ground_floor,
            top_floor: config.elevator.num_floors,
            sink: sink,
        }
    }

    // The console collaborator already rejects floors outside the
    // building; the bounds check here only guards direct API callers.
    pub fn add_hallway_request(&mut self, floor: u8, direction: Direction) {
        if floor < self.bottom_floor || floor > self.top_floor {
            return
        }
        self.ledger.add_hallway(HallwayRequest::new(floor, direction));
        self.sink.record(&format!("Hallway {} request for floor {} added.", direction.as_string(), floor));
    }

    pub fn add_cabin_request(&mut self, floor: u8) {
        if floor < self.bottom_floor || floor > self.top_floor {
            return
        }
        self.ledger.add_cabin(floor);
        self.sink.record(&format!("Cabin request for floor {} added.", floor));
    }

    pub fn set_overweight(&mut self, overweight: bool) {
        self.sensor.overweight = overweight;
    }

    pub fn is_overweight(&self) -> bool {
        self.sensor.overweight
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    pub fn ledger(&self) -> &RequestLedger {
        &self.ledger
    }

    pub fn visited_floors(&self) -> &HashSet<u8> {
        self.ledger.visited()
    }

    /// Drains every pending request, then records the completion event.
    /// While the cabin is overweight with nobody asking to get off, the
    /// loop holds for the settle interval and re-checks instead of
    /// exiting.
    pub fn run(&mut self) {
        loop {
            match self.dispatch_cycle() {
                Cycle::Idle => break,
                Cycle::Served | Cycle::Waited => (),
            }
        }
        self.sink.record("All requests completed. Cabin stopped.");
    }

    // The overweight flag is sampled once per cycle; the snapshot
    // governs both selection and mid-transit servicing for the trip.
    fn dispatch_cycle(&mut self) -> Cycle {
        let overweight = self.sensor.overweight;
        if overweight {
            if self.ledger.has_cabin() {
                let target = self.ledger.take_nearest_cabin(self.sensor.floor);
                self.travel_to(target, overweight);
                return Cycle::Served
            }
            self.sink.record("Waiting for passengers to exit (overweight).");
            self.wait(self.timing.overweight_settle_ms);
            return Cycle::Waited
        }
        if self.ledger.has_hallway() {
            let target = self.next_hallway_floor();
            self.travel_to(target, overweight);
            return Cycle::Served
        }
        if self.ledger.has_cabin() {
            let target = self.ledger.take_nearest_cabin(self.sensor.floor);
            self.travel_to(target, overweight);
            return Cycle::Served
        }
        Cycle::Idle
    }

    /// Picks the nearest hallway request matching the committed
    /// direction and removes it from the ledger. When nothing matches,
    /// the direction reverses once and selection retries; the caller
    /// guarantees the hallway collection is non-empty, so the retry
    /// must find a match.
    fn next_hallway_floor(&mut self) -> u8 {
        if let Some(floor) = self.ledger.take_nearest_hallway(self.sensor.floor, self.sensor.direction) {
            return floor
        }
        let reversed = self.sensor.direction
            .expect("hallway selection missed with no committed direction")
            .opposite();
        self.sensor.direction = Some(reversed);
        self.ledger.take_nearest_hallway(self.sensor.floor, Some(reversed))
            .expect("no hallway request matched after reversing direction")
    }

    /// Simulates the trip one floor at a time, servicing whatever lines
    /// up with the current floor and travel direction along the way.
    /// Travelling to the current floor is a plain stop.
    fn travel_to(&mut self, target: u8, overweight: bool) {
        let mut dwell_ms = self.timing.stop_hold_ms;

        if target != self.sensor.floor {
            let direction = if target > self.sensor.floor { Direction::Up } else { Direction::Down };
            self.sensor.motion = Motion::Moving;
            self.sensor.direction = Some(direction);

            while self.sensor.floor != target {
                if !overweight {
                    let serviced = self.ledger.service_hallway_at(self.sensor.floor, direction);
                    if serviced > 0 {
                        self.ledger.mark_visited(self.sensor.floor);
                        self.sink.record(&format!("Floor {} {} request serviced.", self.sensor.floor, direction.as_string()));
                        self.wait(self.timing.service_hold_ms);
                    }
                } else if self.ledger.service_cabin_at(self.sensor.floor) {
                    self.ledger.mark_visited(self.sensor.floor);
                    self.sink.record(&format!("Cabin request for floor {} serviced (overweight).", self.sensor.floor));
                    self.wait(self.timing.service_hold_ms);
                }

                if self.sensor.floor < target {
                    self.sensor.floor += 1;
                } else {
                    self.sensor.floor -= 1;
                }
                self.sink.record(&format!("Passed floor {}.", self.sensor.floor));

                // a request behind the cabin means a reversal is coming,
                // so riders get a longer dwell at the stop
                if self.ledger.hallway_opposite_of(self.sensor.floor, direction) {
                    dwell_ms = dwell_ms.max(self.timing.reversal_hold_ms);
                }
            }
        }

        self.sensor.motion = Motion::Stopped;
        self.ledger.mark_visited(self.sensor.floor);
        self.sink.record(&format!("Stopped at floor {}.", self.sensor.floor));
        self.wait(dwell_ms);
    }

    fn wait(&self, milliseconds: u64) {
        thread::sleep(Duration::from_millis(milliseconds));
    }
}
