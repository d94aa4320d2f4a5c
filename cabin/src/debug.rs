use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, Result, ExecutableCommand};

use shared_resources::config::ElevatorConfig;
use shared_resources::direction::Direction;

use crate::dispatcher::Dispatcher;

pub struct Debug {
    stdout: Stdout,
    num_floors: u8,
    ground_floor: u8,
}

impl Debug {
    pub fn new(settings: &ElevatorConfig) -> Self {
        Debug {
            stdout: stdout(),
            num_floors: settings.num_floors,
            ground_floor: settings.ground_floor,
        }
    }

    pub fn printstatus(&mut self, dispatcher: &Dispatcher) -> Result<()> {
        self.stdout.execute(cursor::MoveToColumn(0))?;
        self.stdout.execute(terminal::Clear(terminal::ClearType::CurrentLine))?;

        writeln!(self.stdout, "+---------------------------------------------------+")?;
        writeln!(self.stdout, "| PENDING REQUESTS                                  |")?;
        writeln!(self.stdout, "+------------+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "FLOOR", "HALL UP", "HALL DOWN", "CABIN")?;
        for floor in (self.ground_floor..=self.num_floors).rev() {
            writeln!(self.stdout, "+------------+------------+------------+------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
                floor,
                dispatcher.ledger().hallway_count_at(floor, Direction::Up),
                dispatcher.ledger().hallway_count_at(floor, Direction::Down),
                dispatcher.ledger().cabin_count_at(floor),
            )?;
        }
        writeln!(self.stdout, "+------------+------------+------------+------------+\n")?;

        let sensor = dispatcher.sensor();
        let direction = match sensor.direction {
            Some(direction) => direction.as_string(),
            None => String::from("-"),
        };
        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| CABIN                   |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "FLOOR", sensor.floor)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "DIRECTION", direction)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "MOTION", sensor.motion.as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "OVERWEIGHT", sensor.overweight)?;
        writeln!(self.stdout, "+------------+------------+")?;

        Ok(())
    }
}
