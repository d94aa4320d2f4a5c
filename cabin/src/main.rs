use std::io;
use std::io::Write;

use cabin::debug::Debug;
use cabin::dispatcher::Dispatcher;
use cabin::input::{self, Token};
use cabin::logging;

use shared_resources::config::CabinConfig;

fn main() -> io::Result<()> {
    // READ CONFIGURATION
    let config = CabinConfig::get();

    // INITIALIZE EVENT LOG MODULE
    let (sink, log_writer) = logging::init(config.log.file_path.clone());

    // INITIALIZE DISPATCHER
    let mut dispatcher = Dispatcher::new(&config, Box::new(sink));
    let mut debug = Debug::new(&config.elevator);

    // REQUEST LOOP
    loop {
        print!("Enter floor request (e.g. 5U, 8D, 2), O to toggle overweight, S for status or Q to end: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        match input::parse_token(&line, &config.elevator) {
            Some(Token::Quit) => break,
            Some(Token::Hallway(floor, direction)) => {
                dispatcher.add_hallway_request(floor, direction);
                dispatcher.run();
            },
            Some(Token::Cabin(floor)) => {
                dispatcher.add_cabin_request(floor);
                dispatcher.run();
            },
            Some(Token::ToggleOverweight) => {
                let overweight = !dispatcher.is_overweight();
                dispatcher.set_overweight(overweight);
                println!("overweight flag set to {}", overweight);
            },
            Some(Token::Status) => debug.printstatus(&dispatcher)?,
            None => println!("invalid request {}, skipping...", line.trim()),
        }
    }

    // FINAL REPORT
    let mut visited: Vec<u8> = dispatcher.visited_floors().iter().copied().collect();
    visited.sort();
    let visited: Vec<String> = visited.iter().map(|floor| floor.to_string()).collect();
    println!("Visited floors: {}", visited.join(", "));

    drop(dispatcher);
    log_writer.join().unwrap();
    Ok(())
}
